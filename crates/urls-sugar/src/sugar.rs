/// Route descriptors
///
/// A [`UrlSugar`] pairs an element tree with everything the host router's
/// single-route constructor needs besides the pattern itself.

use std::collections::BTreeMap;

use crate::element::Element;
use crate::expand::expand;

/// Arguments forwarded to the host router for every generated route
#[derive(Debug, Clone, PartialEq)]
pub struct RouteTarget<V> {
    /// View (handler) the routes dispatch to
    pub view: V,
    /// Optional route name for reverse lookups
    pub name: Option<String>,
    /// Extra positional arguments
    pub args: Vec<String>,
    /// Extra keyword arguments
    pub kwargs: BTreeMap<String, String>,
}

impl<V> RouteTarget<V> {
    pub fn new(view: V) -> Self {
        Self {
            view,
            name: None,
            args: Vec::new(),
            kwargs: BTreeMap::new(),
        }
    }
}

/// A generic set of URLs, generated from elements and sharing one view
///
/// # Examples
///
/// ```
/// use urls_sugar::{constant, optional, variable, UrlSugar};
///
/// let sugar = UrlSugar::new(
///     vec![constant("posts"), optional([variable("page", "[0-9]+")])],
///     "post_list",
/// )
/// .with_name("posts");
///
/// assert_eq!(
///     sugar.regexps(),
///     vec!["^posts/(?P<page>[0-9]+)/$", "^posts/$"]
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct UrlSugar<V> {
    elements: Vec<Element>,
    target: RouteTarget<V>,
}

impl<V> UrlSugar<V> {
    pub fn new(elements: impl IntoIterator<Item = Element>, view: V) -> Self {
        Self {
            elements: elements.into_iter().collect(),
            target: RouteTarget::new(view),
        }
    }

    /// Names every generated route (functional builder)
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.target.name = Some(name.into());
        self
    }

    /// Adds an extra positional argument
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.target.args.push(arg.into());
        self
    }

    /// Adds an extra keyword argument
    pub fn with_kwarg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.target.kwargs.insert(key.into(), value.into());
        self
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn target(&self) -> &RouteTarget<V> {
        &self.target
    }

    /// Anchored regexps in router priority order
    ///
    /// The reverse of [`expand`]: variants including optional content come
    /// before the shorter ones they would otherwise be shadowed by.
    pub fn regexps(&self) -> Vec<String> {
        let mut regexps = expand(&self.elements);
        regexps.reverse();
        regexps
    }

    /// Builds one route entry per regexp with the host's single-route constructor
    ///
    /// # Examples
    ///
    /// ```
    /// use urls_sugar::{constant, optional, UrlSugar};
    ///
    /// let sugar = UrlSugar::new(vec![optional([constant("edit")])], "edit_view");
    /// let entries = sugar.generate_urls(|regexp, target| (regexp, target.view));
    ///
    /// assert_eq!(
    ///     entries,
    ///     vec![
    ///         ("^edit/$".to_string(), "edit_view"),
    ///         ("^$".to_string(), "edit_view"),
    ///     ]
    /// );
    /// ```
    pub fn generate_urls<E, F>(&self, mut url: F) -> Vec<E>
    where
        F: FnMut(String, &RouteTarget<V>) -> E,
    {
        self.regexps()
            .into_iter()
            .map(|regexp| url(regexp, &self.target))
            .collect()
    }
}

/// Builds a [`UrlSugar`] from elements and a view
pub fn url_sugar<V>(elements: impl IntoIterator<Item = Element>, view: V) -> UrlSugar<V> {
    UrlSugar::new(elements, view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{constant, optional, variable};

    #[test]
    fn test_target_builders() {
        let sugar = url_sugar(vec![constant("a")], "view")
            .with_name("a")
            .with_arg("positional")
            .with_kwarg("template", "a.html");

        let target = sugar.target();
        assert_eq!(target.view, "view");
        assert_eq!(target.name.as_deref(), Some("a"));
        assert_eq!(target.args, vec!["positional"]);
        assert_eq!(target.kwargs.get("template").map(String::as_str), Some("a.html"));
    }

    #[test]
    fn test_regexps_reverse_expansion() {
        let sugar = url_sugar(
            vec![
                constant("archive"),
                optional([
                    variable("year", "[0-9]{4}"),
                    optional([variable("month", "[0-9]{2}")]),
                ]),
            ],
            (),
        );
        assert_eq!(
            sugar.regexps(),
            vec![
                "^archive/(?P<year>[0-9]{4})/(?P<month>[0-9]{2})/$",
                "^archive/(?P<year>[0-9]{4})/$",
                "^archive/$",
            ]
        );
    }

    #[test]
    fn test_generate_urls_shares_target() {
        let sugar = url_sugar(vec![constant(["a", "b"])], 7).with_name("letters");
        let entries = sugar.generate_urls(|regexp, target| {
            format!("{} -> {} ({:?})", regexp, target.view, target.name)
        });
        assert_eq!(
            entries,
            vec![
                "^b/$ -> 7 (Some(\"letters\"))",
                "^a/$ -> 7 (Some(\"letters\"))",
            ]
        );
    }
}
