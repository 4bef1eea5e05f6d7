/// URL elements: the building blocks of a sugared route
///
/// An element describes one piece of a URL. Elements form an immutable tree:
/// constants and variables are leaves, optionals hold further elements.
/// Every leaf renders into one or more regex fragments which the expander
/// wraps with the element's prefix and suffix.

use std::fmt;

mod constant;
mod optional;
mod variable;

pub use constant::{Constant, ConstantName};
pub use optional::Optional;
pub use variable::Variable;

/// Fixed label reported by [`Optional`] elements
pub const OPTIONAL_LABEL: &str = "Optional";

/// Regex fragment(s) produced by a single element
///
/// A constant with several accepted names yields [`Fragments::Alternatives`]:
/// each alternative becomes its own route pattern, never a `(a|b)` alternation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragments {
    /// Exactly one fragment
    Single(String),
    /// One fragment per accepted alternative
    Alternatives(Vec<String>),
}

impl Fragments {
    /// Normalizes into a sequence of fragments
    ///
    /// # Examples
    ///
    /// ```
    /// use urls_sugar::Fragments;
    ///
    /// assert_eq!(Fragments::Single("home".into()).into_vec(), vec!["home"]);
    /// assert_eq!(
    ///     Fragments::Alternatives(vec!["a".into(), "b".into()]).into_vec(),
    ///     vec!["a", "b"]
    /// );
    /// ```
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Fragments::Single(fragment) => vec![fragment],
            Fragments::Alternatives(fragments) => fragments,
        }
    }
}

/// One segment description in a route's structural tree
///
/// Closed sum type: constant text, captured variable, or optional group.
///
/// # Examples
///
/// ```
/// use urls_sugar::{constant, optional, variable, Element};
///
/// let elements: Vec<Element> = vec![
///     constant("blog"),
///     optional([variable("year", "[0-9]{4}")]),
/// ];
/// assert_eq!(elements[0].name(), "blog");
/// assert_eq!(elements[1].name(), "Optional");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Constant(Constant),
    Variable(Variable),
    Optional(Optional),
}

impl Element {
    /// Literal text for constants, capture-group name for variables, the
    /// fixed `"Optional"` label for optionals
    ///
    /// A constant with several names reports its first one here; use
    /// [`Element::constant_name`] for every accepted alternative.
    pub fn name(&self) -> &str {
        match self {
            Element::Constant(c) => c.name().first(),
            Element::Variable(v) => v.name(),
            Element::Optional(_) => OPTIONAL_LABEL,
        }
    }

    /// Full name of a constant: the single literal or all its alternatives
    ///
    /// # Examples
    ///
    /// ```
    /// use urls_sugar::{constant, variable, ConstantName};
    ///
    /// assert_eq!(
    ///     constant(["news", "blog"]).constant_name(),
    ///     Some(&ConstantName::Choices(vec!["news".into(), "blog".into()]))
    /// );
    /// assert_eq!(variable("id", "[0-9]+").constant_name(), None);
    /// ```
    pub fn constant_name(&self) -> Option<&ConstantName> {
        match self {
            Element::Constant(c) => Some(c.name()),
            Element::Variable(_) | Element::Optional(_) => None,
        }
    }

    /// Escaped literal placed before the element's fragment
    pub fn prefix(&self) -> &str {
        match self {
            Element::Constant(c) => c.prefix(),
            Element::Variable(v) => v.prefix(),
            Element::Optional(_) => "",
        }
    }

    /// Escaped literal placed after the element's fragment
    pub fn suffix(&self) -> &str {
        match self {
            Element::Constant(c) => c.suffix(),
            Element::Variable(v) => v.suffix(),
            Element::Optional(_) => "",
        }
    }

    /// Renders the element's own regex fragment(s)
    ///
    /// Returns `None` for optionals, which are expanded structurally.
    ///
    /// # Examples
    ///
    /// ```
    /// use urls_sugar::{constant, optional, variable, Fragments};
    ///
    /// assert_eq!(
    ///     variable("id", "[0-9]+").to_regexp(),
    ///     Some(Fragments::Single("(?P<id>[0-9]+)".into()))
    /// );
    /// assert_eq!(optional([constant("edit")]).to_regexp(), None);
    /// ```
    pub fn to_regexp(&self) -> Option<Fragments> {
        match self {
            Element::Constant(c) => Some(c.to_regexp()),
            Element::Variable(v) => Some(Fragments::Single(v.to_regexp())),
            Element::Optional(_) => None,
        }
    }
}

impl From<Constant> for Element {
    fn from(constant: Constant) -> Self {
        Element::Constant(constant)
    }
}

impl From<Variable> for Element {
    fn from(variable: Variable) -> Self {
        Element::Variable(variable)
    }
}

impl From<Optional> for Element {
    fn from(optional: Optional) -> Self {
        Element::Optional(optional)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Constant(c) => fmt::Display::fmt(c, f),
            Element::Variable(v) => fmt::Display::fmt(v, f),
            Element::Optional(o) => fmt::Display::fmt(o, f),
        }
    }
}

// ============================================================================
// Shorthand Constructors
// ============================================================================

/// Builds a constant element with default prefix `""` and suffix `"/"`
pub fn constant(name: impl Into<ConstantName>) -> Element {
    Constant::new(name).into()
}

/// Builds a variable element capturing `regexp` under `name`
pub fn variable(name: impl Into<String>, regexp: impl Into<String>) -> Element {
    Variable::new(name, regexp).into()
}

/// Builds an optional group around `elements`
pub fn optional(elements: impl IntoIterator<Item = Element>) -> Element {
    Optional::new(elements).into()
}

/// Escapes literal dots so prefixes and suffixes stay regex-safe
pub(crate) fn escape_dots(text: &str) -> String {
    text.replace('.', "\\.")
}
