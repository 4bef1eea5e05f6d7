/// Variable URL elements
use std::fmt;

use super::escape_dots;

/// A captured URL parameter handed to the view
///
/// Requires a name and a regular expression. Setting a separator turns the
/// variable into a list: `min`/`max` bound how many separated instances match.
///
/// The whole list is captured by a single named group. Only that group is
/// addressable by name; the inner repetition group keeps the last instance.
///
/// # Examples
///
/// ```
/// use urls_sugar::Variable;
///
/// let ids = Variable::new("ids", "[0-9]+")
///     .with_separator(",")
///     .with_min(2)
///     .with_max(4);
/// assert_eq!(ids.to_regexp(), "(?P<ids>[0-9]+(,[0-9]+){1,4})");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    name: String,
    regexp: String,
    prefix: String,
    suffix: String,
    separator: Option<String>,
    min: u32,
    max: u32,
    unambiguous: bool,
}

impl Variable {
    /// Creates a variable with prefix `""`, suffix `"/"`, `min = 1`, `max = 0`
    pub fn new(name: impl Into<String>, regexp: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            regexp: regexp.into(),
            prefix: String::new(),
            suffix: "/".to_string(),
            separator: None,
            min: 1,
            max: 0,
            unambiguous: false,
        }
    }

    /// Sets the literal placed before the capture (dots are escaped)
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = escape_dots(prefix);
        self
    }

    /// Sets the literal placed after the capture (dots are escaped)
    pub fn with_suffix(mut self, suffix: &str) -> Self {
        self.suffix = escape_dots(suffix);
        self
    }

    /// Joins repeated instances with `separator`; an empty separator disables repetition
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        let separator = separator.into();
        self.separator = (!separator.is_empty()).then_some(separator);
        self
    }

    /// Minimum number of instances; values below 1 count as 1
    pub fn with_min(mut self, min: u32) -> Self {
        self.min = min;
        self.normalized()
    }

    /// Maximum number of extra instances; 0 means unbounded
    pub fn with_max(mut self, max: u32) -> Self {
        self.max = max;
        self.normalized()
    }

    /// Clamps `min` to at least 1 and a bounded `max` to at least `min`
    fn normalized(mut self) -> Self {
        self.min = self.min.max(1);
        if self.max != 0 && self.max < self.min {
            self.max = self.min;
        }
        self
    }

    /// Embeds `name:` before the capture so sibling variables cannot be confused
    pub fn unambiguous(mut self, unambiguous: bool) -> Self {
        self.unambiguous = unambiguous;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Regular expression matching a single instance
    pub fn value_regexp(&self) -> &str {
        &self.regexp
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn separator(&self) -> Option<&str> {
        self.separator.as_deref()
    }

    pub fn is_unambiguous(&self) -> bool {
        self.unambiguous
    }

    /// Minimum number of instances, at least 1
    pub fn min(&self) -> u32 {
        self.min
    }

    /// Maximum number of extra instances: 0 (unbounded) or at least [`Variable::min`]
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Renders the named capture group for this variable
    ///
    /// `[name:](?P<name>regexp[(separator regexp){min-1,max}])`
    pub fn to_regexp(&self) -> String {
        let regexp_prefix = if self.unambiguous {
            format!("{}:", self.name)
        } else {
            String::new()
        };

        let regexp_suffix = match &self.separator {
            Some(separator) => {
                let upper = match self.max() {
                    0 => String::new(),
                    max => max.to_string(),
                };
                format!(
                    "({}{}){{{},{}}}",
                    separator,
                    self.regexp,
                    self.min() - 1,
                    upper
                )
            }
            None => String::new(),
        };

        format!(
            "{}(?P<{}>{}{})",
            regexp_prefix, self.name, self.regexp, regexp_suffix
        )
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Variable({}, {}, {}, {}, {})",
            self.name,
            self.to_regexp(),
            self.separator().unwrap_or("None"),
            self.min(),
            self.max()
        )
    }
}
