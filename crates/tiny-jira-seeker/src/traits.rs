//! The [`Seekable`] trait, implemented by anything the filter can inspect.

use crate::value::Value;

/// Trait for types that can be filtered by Seeker.
///
/// Implementors map a lower-cased field name to its display text. Returning
/// [`Value::Unknown`] tells the engine the field does not exist, which makes
/// the predicate a no-op (after a one-time warning) instead of a mismatch.
///
/// # Example
///
/// ```
/// use std::borrow::Cow;
/// use tiny_jira_seeker::{Seekable, Value};
///
/// struct Note {
///     body: String,
/// }
///
/// impl Seekable for Note {
///     fn seeker_field_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "body" => Value::Text(Cow::Borrowed(&self.body)),
///             _ => Value::Unknown,
///         }
///     }
/// }
///
/// let note = Note { body: "hello".into() };
/// assert_eq!(note.seeker_field_value("body").as_str(), Some("hello"));
/// assert!(note.seeker_field_value("title").is_unknown());
/// ```
pub trait Seekable {
    /// Returns the value of `field` for predicate evaluation.
    fn seeker_field_value(&self, field: &str) -> Value<'_>;
}

impl<T: Seekable + ?Sized> Seekable for &T {
    fn seeker_field_value(&self, field: &str) -> Value<'_> {
        (**self).seeker_field_value(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    struct TestItem {
        name: String,
    }

    impl Seekable for TestItem {
        fn seeker_field_value(&self, field: &str) -> Value<'_> {
            match field {
                "name" => Value::Text(Cow::Borrowed(&self.name)),
                _ => Value::Unknown,
            }
        }
    }

    #[test]
    fn seekable_manual_impl() {
        let item = TestItem {
            name: "test".to_string(),
        };

        assert_eq!(item.seeker_field_value("name"), Value::from("test"));
        assert_eq!(item.seeker_field_value("other"), Value::Unknown);
    }

    #[test]
    fn seekable_through_reference() {
        let item = TestItem {
            name: "test".to_string(),
        };
        let by_ref = &item;

        assert_eq!(by_ref.seeker_field_value("name"), Value::from("test"));
    }
}
