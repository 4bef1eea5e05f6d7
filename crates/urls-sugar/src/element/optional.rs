/// Optional URL groups
use std::fmt;

use super::Element;

/// A part of the URL, given as a list of elements, that may be absent entirely
///
/// Optionals have no prefix or suffix of their own and may nest.
///
/// # Examples
///
/// ```
/// use urls_sugar::{constant, variable, Optional};
///
/// let page = Optional::new([constant("page"), variable("page", "[0-9]+")]);
/// assert_eq!(page.children().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Optional {
    children: Vec<Element>,
}

impl Optional {
    pub fn new(children: impl IntoIterator<Item = Element>) -> Self {
        Self {
            children: children.into_iter().collect(),
        }
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }
}

impl fmt::Display for Optional {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let children: Vec<String> = self.children.iter().map(ToString::to_string).collect();
        write!(f, "Optional[{}]", children.join(", "))
    }
}
