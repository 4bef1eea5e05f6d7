/// Regex-backed reference router
///
/// A minimal host router that compiles generated patterns and matches
/// request paths against them in registration order, first match wins.

use std::collections::{BTreeMap, HashMap};

use anyhow::{Context, Result};
use regex::Regex;
use tracing::{debug, trace};

use crate::patterns::HostRouter;
use crate::sugar::RouteTarget;

/// Language code used by [`RegexRouter::i18n_patterns`] when none is configured
pub const DEFAULT_LANGUAGE: &str = "en-us";

/// Route entry as produced by [`RegexRouter::url`]: not compiled yet
#[derive(Debug, Clone, PartialEq)]
pub struct RouteEntry {
    pub pattern: String,
    pub target: RouteTarget<String>,
}

impl RouteEntry {
    pub fn new(pattern: impl Into<String>, view: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            target: RouteTarget::new(view.into()),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.target.name = Some(name.into());
        self
    }
}

/// A compiled route
#[derive(Debug, Clone)]
struct CompiledRoute {
    regex: Regex,
    target: RouteTarget<String>,
}

/// Result of resolving a path
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRoute {
    /// Fully qualified view (registration prefix applied)
    pub view: String,
    pub name: Option<String>,
    /// Named groups that took part in the match
    pub params: HashMap<String, String>,
    pub kwargs: BTreeMap<String, String>,
}

/// Registered, compiled routes
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<CompiledRoute>,
    language: Option<String>,
}

impl RouteTable {
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Source patterns in matching order
    pub fn patterns(&self) -> Vec<&str> {
        self.routes.iter().map(|route| route.regex.as_str()).collect()
    }

    /// Language segment every path must start with (localized tables only)
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Finds the first route matching `path`
    ///
    /// One leading `/` is ignored, as generated patterns are relative.
    ///
    /// # Examples
    ///
    /// ```
    /// use urls_sugar::{constant, optional, patterns, variable, PatternItem, RegexRouter, UrlSugar};
    ///
    /// let router = RegexRouter::new();
    /// let table = patterns(
    ///     &router,
    ///     "",
    ///     vec![PatternItem::Sugar(UrlSugar::new(
    ///         vec![constant("posts"), optional([variable("id", "[0-9]+")])],
    ///         "posts".to_string(),
    ///     ))],
    /// )
    /// .unwrap();
    ///
    /// let resolved = table.resolve("/posts/42/").unwrap();
    /// assert_eq!(resolved.params.get("id"), Some(&"42".to_string()));
    /// assert!(table.resolve("/posts/").unwrap().params.is_empty());
    /// assert!(table.resolve("/posts/abc/").is_none());
    /// ```
    pub fn resolve(&self, path: &str) -> Option<ResolvedRoute> {
        let relative = path.strip_prefix('/').unwrap_or(path);

        let relative = match &self.language {
            Some(language) => relative
                .strip_prefix(language.as_str())
                .and_then(|rest| rest.strip_prefix('/'))?,
            None => relative,
        };

        self.routes.iter().find_map(|route| {
            let captures = route.regex.captures(relative)?;
            let params = route
                .regex
                .capture_names()
                .flatten()
                .filter_map(|name| {
                    captures
                        .name(name)
                        .map(|m| (name.to_string(), m.as_str().to_string()))
                })
                .collect();

            trace!(path, pattern = route.regex.as_str(), "resolved path");
            Some(ResolvedRoute {
                view: route.target.view.clone(),
                name: route.target.name.clone(),
                params,
                kwargs: route.target.kwargs.clone(),
            })
        })
    }

    /// Finds a route by name
    pub fn find_by_name(&self, name: &str) -> Option<&RouteTarget<String>> {
        self.routes
            .iter()
            .map(|route| &route.target)
            .find(|target| target.name.as_deref() == Some(name))
    }
}

/// Host router compiling patterns with the `regex` crate
///
/// Views are dotted paths; a non-empty registration prefix is joined in
/// front of every view (`prefix.view`).
#[derive(Debug, Clone)]
pub struct RegexRouter {
    language: String,
}

impl RegexRouter {
    pub fn new() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// Sets the language segment used by localized registration
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    fn compile(&self, prefix: &str, entries: Vec<RouteEntry>, language: Option<String>) -> Result<RouteTable> {
        let routes = entries
            .into_iter()
            .map(|entry| {
                let regex = Regex::new(&entry.pattern)
                    .with_context(|| format!("Failed to compile url pattern: {:?}", entry.pattern))?;
                let mut target = entry.target;
                if !prefix.is_empty() {
                    target.view = format!("{}.{}", prefix, target.view);
                }
                Ok(CompiledRoute { regex, target })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(prefix, routes = routes.len(), "compiled route table");
        Ok(RouteTable { routes, language })
    }
}

impl Default for RegexRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl HostRouter for RegexRouter {
    type View = String;
    type Entry = RouteEntry;
    type Output = Result<RouteTable>;

    fn url(&self, regexp: String, target: &RouteTarget<String>) -> RouteEntry {
        RouteEntry {
            pattern: regexp,
            target: target.clone(),
        }
    }

    fn patterns(&self, prefix: &str, entries: Vec<RouteEntry>) -> Result<RouteTable> {
        self.compile(prefix, entries, None)
    }

    fn i18n_patterns(&self, prefix: &str, entries: Vec<RouteEntry>) -> Result<RouteTable> {
        self.compile(prefix, entries, Some(self.language.clone()))
    }
}
