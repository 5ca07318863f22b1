//! Predicate type: one `field:substring` condition.

use crate::value::Value;

/// A single filter predicate.
///
/// The field name is stored lower-cased; the value keeps the case it was
/// written with and is lower-cased only when compared.
///
/// # Example
///
/// ```
/// use tiny_jira_seeker::{Predicate, Value};
///
/// let p = Predicate::new("Status", "Done");
/// assert_eq!(p.field, "status");
/// assert_eq!(p.value, "Done");
/// assert_eq!(p.matches(&Value::from("done")), Some(true));
/// assert_eq!(p.matches(&Value::Unknown), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    /// Lower-cased field name.
    pub field: String,
    /// Value to look for, case preserved.
    pub value: String,
}

impl Predicate {
    /// Creates a predicate, lower-casing the field name.
    pub fn new(field: impl AsRef<str>, value: impl Into<String>) -> Self {
        Predicate {
            field: field.as_ref().to_lowercase(),
            value: value.into(),
        }
    }

    /// Evaluates this predicate against a field value.
    ///
    /// Returns `Some(true)` when the lower-cased value is a substring of the
    /// lower-cased field text, `Some(false)` when it is not, and `None` when
    /// the field is unknown and the predicate cannot be evaluated.
    pub fn matches(&self, field_value: &Value<'_>) -> Option<bool> {
        match field_value {
            Value::Text(text) => Some(
                text.to_lowercase()
                    .contains(self.value.to_lowercase().as_str()),
            ),
            Value::Unknown => None,
        }
    }
}

impl<F: AsRef<str>, V: Into<String>> From<(F, V)> for Predicate {
    fn from((field, value): (F, V)) -> Self {
        Predicate::new(field, value)
    }
}
