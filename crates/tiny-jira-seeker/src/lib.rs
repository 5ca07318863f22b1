//! Seeker - a small `field:value` filter engine for in-memory collections.
//!
//! Seeker parses a terse filter expression into conjunctive predicates and
//! evaluates them against any type that can expose its fields as text.
//!
//! - Quoted values: `summary:"login bug",status:"In Progress"`
//! - Bare values: `status:done, assignee:ada`
//! - Case-insensitive substring matching
//! - Unknown fields are warned about once and otherwise ignored
//!
//! # Quick Start
//!
//! ```rust
//! use std::borrow::Cow;
//! use tiny_jira_seeker::{Filter, Seekable, Value};
//!
//! struct Ticket {
//!     title: String,
//!     state: String,
//! }
//!
//! impl Seekable for Ticket {
//!     fn seeker_field_value(&self, field: &str) -> Value<'_> {
//!         match field {
//!             "title" => Value::Text(Cow::Borrowed(&self.title)),
//!             "state" => Value::Text(Cow::Borrowed(&self.state)),
//!             _ => Value::Unknown,
//!         }
//!     }
//! }
//!
//! let tickets = vec![
//!     Ticket { title: "Fix login bug".into(), state: "Done".into() },
//!     Ticket { title: "Write docs".into(), state: "Open".into() },
//! ];
//!
//! let filter = Filter::parse(Some(r#"title:"LOGIN""#));
//! let result = filter.apply(&tickets);
//! assert_eq!(result.items.len(), 1);
//! assert_eq!(result.items[0].title, "Fix login bug");
//! ```
//!
//! # Grammar
//!
//! Parsing runs two passes with fixed precedence:
//!
//! ```text
//! 1. quoted:  <word>:"<anything but a double quote>"   (commas allowed in value)
//! 2. bare:    <word>:<anything but a comma>            (only if pass 1 found nothing)
//! ```
//!
//! Field names are lower-cased; values keep their case and are compared
//! case-insensitively. A bare value can never contain a comma.

mod clause;
mod parse;
mod query;
mod traits;
mod value;

pub use clause::Predicate;
pub use parse::{parse_bare, parse_quoted};
pub use query::{Filter, Filtered};
pub use traits::Seekable;
pub use value::Value;
