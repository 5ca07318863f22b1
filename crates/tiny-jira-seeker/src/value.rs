//! Runtime field values handed to the filter engine.
//!
//! The [`Value`] enum is what a [`Seekable`](crate::Seekable) type returns for a
//! field name. It separates "this field exists but is empty" from "this field
//! does not exist at all", which the engine treats very differently.

use std::borrow::Cow;

/// The text value of a field, or a marker that the field is not recognized.
///
/// # Example
///
/// ```
/// use std::borrow::Cow;
/// use tiny_jira_seeker::Value;
///
/// let known = Value::Text(Cow::Borrowed("In Progress"));
/// assert_eq!(known.as_str(), Some("In Progress"));
/// assert!(Value::Unknown.is_unknown());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value<'a> {
    /// Display text of a recognized field. May be empty.
    Text(Cow<'a, str>),
    /// The field name is not one the item knows about.
    Unknown,
}

impl<'a> Value<'a> {
    /// Returns `true` if the field was not recognized.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Value::Unknown)
    }

    /// Returns the text if the field was recognized.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            Value::Unknown => None,
        }
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::Text(Cow::Borrowed(s))
    }
}

impl From<String> for Value<'_> {
    fn from(s: String) -> Self {
        Value::Text(Cow::Owned(s))
    }
}
