/// Constant URL elements
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{escape_dots, Fragments};

/// Literal text of a constant: one name, or several accepted alternatives
///
/// Deserializes from either a string or a list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConstantName {
    Single(String),
    Choices(Vec<String>),
}

impl ConstantName {
    /// First accepted literal (empty for an empty choice list)
    pub fn first(&self) -> &str {
        match self {
            ConstantName::Single(name) => name,
            ConstantName::Choices(names) => names.first().map(String::as_str).unwrap_or(""),
        }
    }
}

impl From<&str> for ConstantName {
    fn from(name: &str) -> Self {
        ConstantName::Single(name.to_string())
    }
}

impl From<String> for ConstantName {
    fn from(name: String) -> Self {
        ConstantName::Single(name)
    }
}

impl<S: Into<String>> From<Vec<S>> for ConstantName {
    fn from(names: Vec<S>) -> Self {
        ConstantName::Choices(names.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for ConstantName {
    fn from(names: [S; N]) -> Self {
        ConstantName::Choices(names.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for ConstantName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstantName::Single(name) => f.write_str(name),
            ConstantName::Choices(names) => write!(f, "[{}]", names.join(", ")),
        }
    }
}

/// A literal piece of URL such as `home/` or `my-new-awesome-page/`
///
/// Several names can map to the same view: each becomes a separate route.
///
/// # Examples
///
/// ```
/// use urls_sugar::{Constant, Fragments};
///
/// let c = Constant::new("feed").with_suffix(".rss");
/// assert_eq!(c.suffix(), "\\.rss");
/// assert_eq!(c.to_regexp(), Fragments::Single("feed".into()));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Constant {
    name: ConstantName,
    prefix: String,
    suffix: String,
}

impl Constant {
    /// Creates a constant with prefix `""` and suffix `"/"`
    pub fn new(name: impl Into<ConstantName>) -> Self {
        Self {
            name: name.into(),
            prefix: String::new(),
            suffix: "/".to_string(),
        }
    }

    /// Sets the literal placed before the name (dots are escaped)
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = escape_dots(prefix);
        self
    }

    /// Sets the literal placed after the name (dots are escaped)
    pub fn with_suffix(mut self, suffix: &str) -> Self {
        self.suffix = escape_dots(suffix);
        self
    }

    pub fn name(&self) -> &ConstantName {
        &self.name
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// The name itself, unmodified
    pub fn to_regexp(&self) -> Fragments {
        match &self.name {
            ConstantName::Single(name) => Fragments::Single(name.clone()),
            ConstantName::Choices(names) => Fragments::Alternatives(names.clone()),
        }
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Constant({})", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = Constant::new("home");
        assert_eq!(c.prefix(), "");
        assert_eq!(c.suffix(), "/");
        assert_eq!(c.to_regexp(), Fragments::Single("home".to_string()));
    }

    #[test]
    fn test_name_is_not_escaped() {
        // Only prefix and suffix are escaped; the name is raw regex
        let c = Constant::new("robots.txt").with_suffix("");
        assert_eq!(c.to_regexp(), Fragments::Single("robots.txt".to_string()));
    }

    #[test]
    fn test_prefix_escaped_once() {
        let c = Constant::new("index").with_prefix(".").with_suffix(".html");
        assert_eq!(c.prefix(), "\\.");
        assert_eq!(c.suffix(), "\\.html");
    }

    #[test]
    fn test_choices_from_array() {
        let c = Constant::new(["news", "blog"]);
        assert_eq!(
            c.to_regexp(),
            Fragments::Alternatives(vec!["news".to_string(), "blog".to_string()])
        );
        assert_eq!(c.to_string(), "Constant([news, blog])");
    }

    #[test]
    fn test_empty_choices_first_is_empty() {
        let c = Constant::new(Vec::<String>::new());
        assert_eq!(c.name().first(), "");
    }
}
