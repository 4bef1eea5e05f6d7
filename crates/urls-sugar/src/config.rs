// File: src/config.rs
// Purpose: Declarative route definitions parsed from urls.toml

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::element::{Constant, ConstantName, Element, Optional, Variable};
use crate::patterns::{i18n_patterns, patterns, HostRouter, PatternItem};
use crate::sugar::UrlSugar;

/// Route file configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SugarConfig {
    /// Registration prefix handed to the host router
    #[serde(default)]
    pub prefix: String,

    /// Register through the localized registration
    #[serde(default)]
    pub i18n: bool,

    #[serde(default, rename = "route")]
    pub routes: Vec<RouteConfig>,
}

/// One route descriptor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteConfig {
    pub view: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub args: Vec<String>,

    #[serde(default)]
    pub kwargs: BTreeMap<String, String>,

    #[serde(default)]
    pub elements: Vec<ElementConfig>,
}

/// Element definition, tagged by `type`
///
/// Unknown types deserialize to [`ElementConfig::Unknown`] and are skipped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementConfig {
    Constant {
        name: ConstantName,
        #[serde(default)]
        prefix: String,
        #[serde(default = "default_suffix")]
        suffix: String,
    },
    Variable {
        name: String,
        regexp: String,
        #[serde(default)]
        prefix: String,
        #[serde(default = "default_suffix")]
        suffix: String,
        #[serde(default)]
        separator: Option<String>,
        #[serde(default = "default_min")]
        min: i64,
        #[serde(default)]
        max: i64,
        #[serde(default)]
        unambiguous: bool,
    },
    Optional {
        #[serde(default)]
        elements: Vec<ElementConfig>,
    },
    #[serde(other)]
    Unknown,
}

// Default values
fn default_suffix() -> String {
    "/".to_string()
}

fn default_min() -> i64 {
    1
}

/// Negative counts clamp to 0; the variable applies its own min/max rules
fn clamp_count(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

impl ElementConfig {
    /// Builds the element; `None` for unknown element types
    pub fn into_element(self) -> Option<Element> {
        match self {
            ElementConfig::Constant { name, prefix, suffix } => {
                Some(
                    Constant::new(name)
                        .with_prefix(&prefix)
                        .with_suffix(&suffix)
                        .into(),
                )
            }
            ElementConfig::Variable {
                name,
                regexp,
                prefix,
                suffix,
                separator,
                min,
                max,
                unambiguous,
            } => {
                let mut variable = Variable::new(name, regexp)
                    .with_prefix(&prefix)
                    .with_suffix(&suffix)
                    .with_min(clamp_count(min))
                    .with_max(clamp_count(max))
                    .unambiguous(unambiguous);
                if let Some(separator) = separator {
                    variable = variable.with_separator(separator);
                }
                Some(variable.into())
            }
            ElementConfig::Optional { elements } => Some(Optional::new(into_elements(elements)).into()),
            ElementConfig::Unknown => {
                warn!("skipping url element of unknown type");
                None
            }
        }
    }
}

fn into_elements(elements: Vec<ElementConfig>) -> Vec<Element> {
    elements
        .into_iter()
        .filter_map(ElementConfig::into_element)
        .collect()
}

impl RouteConfig {
    pub fn into_sugar(self) -> UrlSugar<String> {
        let mut sugar = UrlSugar::new(into_elements(self.elements), self.view);
        if let Some(name) = self.name {
            sugar = sugar.with_name(name);
        }
        for arg in self.args {
            sugar = sugar.with_arg(arg);
        }
        for (key, value) in self.kwargs {
            sugar = sugar.with_kwarg(key, value);
        }
        sugar
    }
}

impl SugarConfig {
    /// Load route definitions from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist, there are no routes
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read url config file: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse url config file: {:?}", path))
    }

    /// Load route definitions from the default path (./urls.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("urls.toml")
    }

    /// Parse route definitions from TOML text; blank text yields the default
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config = toml::from_str(content).context("Invalid url config")?;
        Ok(config)
    }

    /// Route descriptors in declaration order
    pub fn into_sugars(self) -> Vec<UrlSugar<String>> {
        self.routes.into_iter().map(RouteConfig::into_sugar).collect()
    }

    /// Expands every route and registers them with `router`
    pub fn register<H>(self, router: &H) -> H::Output
    where
        H: HostRouter<View = String>,
    {
        let prefix = self.prefix.clone();
        let i18n = self.i18n;
        let items: Vec<PatternItem<String, H::Entry>> = self
            .into_sugars()
            .into_iter()
            .map(PatternItem::Sugar)
            .collect();

        if i18n {
            i18n_patterns(router, &prefix, items)
        } else {
            patterns(router, &prefix, items)
        }
    }
}
