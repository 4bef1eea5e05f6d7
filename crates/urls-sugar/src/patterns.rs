/// Registration adapter
///
/// Sits in front of the host router's batch registration: sugared routes are
/// expanded in place, plain route entries pass through untouched.

use tracing::debug;

use crate::sugar::{RouteTarget, UrlSugar};

/// One item of a mixed route list
#[derive(Debug, Clone, PartialEq)]
pub enum PatternItem<V, E> {
    /// A route entry already built by the host router
    Entry(E),
    /// A route descriptor to expand
    Sugar(UrlSugar<V>),
}

impl<V, E> From<UrlSugar<V>> for PatternItem<V, E> {
    fn from(sugar: UrlSugar<V>) -> Self {
        PatternItem::Sugar(sugar)
    }
}

/// The host router collaborator
///
/// `url` is the single-route constructor, `patterns` the batch registration.
/// Routers without a localized registration inherit `i18n_patterns` as plain
/// `patterns`.
pub trait HostRouter {
    type View;
    type Entry;
    type Output;

    /// Builds one route entry from an anchored regexp and its target
    fn url(&self, regexp: String, target: &RouteTarget<Self::View>) -> Self::Entry;

    /// Registers an ordered list of entries under `prefix`
    fn patterns(&self, prefix: &str, entries: Vec<Self::Entry>) -> Self::Output;

    /// Registers entries beneath the active language
    fn i18n_patterns(&self, prefix: &str, entries: Vec<Self::Entry>) -> Self::Output {
        self.patterns(prefix, entries)
    }
}

/// Expands sugared items and forwards the flat list to `original`
///
/// Item order is preserved; each [`UrlSugar`] is replaced by its generated
/// entries in router priority order. `original` is called exactly once.
///
/// # Examples
///
/// ```
/// use urls_sugar::{constant, optional, sugar_patterns, PatternItem, UrlSugar};
///
/// let items = vec![
///     PatternItem::Entry("^about/$".to_string()),
///     PatternItem::Sugar(UrlSugar::new(vec![optional([constant("edit")])], ())),
/// ];
///
/// let registered = sugar_patterns(
///     |prefix: &str, entries: Vec<String>| (prefix.to_string(), entries),
///     |regexp, _target| regexp,
///     "app",
///     items,
/// );
///
/// assert_eq!(registered.0, "app");
/// assert_eq!(registered.1, vec!["^about/$", "^edit/$", "^$"]);
/// ```
pub fn sugar_patterns<V, E, R, P, U, I>(original: P, mut url: U, prefix: &str, items: I) -> R
where
    P: FnOnce(&str, Vec<E>) -> R,
    U: FnMut(String, &RouteTarget<V>) -> E,
    I: IntoIterator<Item = PatternItem<V, E>>,
{
    let mut pattern_list = Vec::new();
    for item in items {
        match item {
            PatternItem::Sugar(sugar) => pattern_list.extend(sugar.generate_urls(&mut url)),
            PatternItem::Entry(entry) => pattern_list.push(entry),
        }
    }

    debug!(prefix, entries = pattern_list.len(), "registering url patterns");
    original(prefix, pattern_list)
}

/// [`sugar_patterns`] bound to a router's default registration
pub fn patterns<H, I>(router: &H, prefix: &str, items: I) -> H::Output
where
    H: HostRouter,
    I: IntoIterator<Item = PatternItem<H::View, H::Entry>>,
{
    sugar_patterns(
        |prefix, entries| router.patterns(prefix, entries),
        |regexp, target| router.url(regexp, target),
        prefix,
        items,
    )
}

/// [`sugar_patterns`] bound to a router's localized registration
pub fn i18n_patterns<H, I>(router: &H, prefix: &str, items: I) -> H::Output
where
    H: HostRouter,
    I: IntoIterator<Item = PatternItem<H::View, H::Entry>>,
{
    sugar_patterns(
        |prefix, entries| router.i18n_patterns(prefix, entries),
        |regexp, target| router.url(regexp, target),
        prefix,
        items,
    )
}
