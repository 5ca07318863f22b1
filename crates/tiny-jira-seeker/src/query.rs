//! Filter construction and execution.
//!
//! A [`Filter`] is an ordered list of [`Predicate`]s combined with AND:
//!
//! ```text
//! keep(item) = every predicate holds
//!            where an unknown-field predicate always holds
//! ```
//!
//! An empty filter keeps every item.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::clause::Predicate;
use crate::parse;
use crate::traits::Seekable;

/// A conjunctive list of `field:substring` predicates.
///
/// # Example
///
/// ```
/// use tiny_jira_seeker::{Filter, Predicate};
///
/// let filter = Filter::parse(Some(r#"summary:"login bug",status:"Done""#));
/// assert_eq!(filter.predicates(), &[
///     Predicate::new("summary", "login bug"),
///     Predicate::new("status", "Done"),
/// ]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    predicates: Vec<Predicate>,
}

/// Outcome of [`Filter::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filtered<'a, T> {
    /// Matching items, in input order.
    pub items: Vec<&'a T>,
    /// Field names that no item recognized, in first-seen order.
    pub unknown_fields: Vec<String>,
}

impl Filter {
    /// Creates an empty filter that matches everything.
    pub fn new() -> Self {
        Filter::default()
    }

    /// Parses a filter expression. See the crate docs for the grammar.
    pub fn parse(raw: Option<&str>) -> Self {
        let predicates = parse::parse(raw);
        debug!(count = predicates.len(), "parsed filter predicates");
        Filter { predicates }
    }

    /// Adds a predicate.
    pub fn and(mut self, field: &str, value: impl Into<String>) -> Self {
        self.predicates.push(Predicate::new(field, value));
        self
    }

    /// The predicates, in the order they were written.
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// Returns `true` if the filter has no predicates.
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Returns `true` if `item` satisfies every predicate.
    ///
    /// Unknown-field predicates are treated as satisfied.
    pub fn matches<T: Seekable + ?Sized>(&self, item: &T) -> bool {
        self.predicates
            .iter()
            .all(|p| p.matches(&item.seeker_field_value(&p.field)).unwrap_or(true))
    }

    /// Returns the items that satisfy every predicate, preserving order.
    ///
    /// Each unknown field name is logged once per call with `tracing::warn!`
    /// and reported in [`Filtered::unknown_fields`], no matter how many items
    /// were checked against it.
    pub fn apply<'a, T: Seekable>(&self, items: &'a [T]) -> Filtered<'a, T> {
        let mut warned: HashSet<&str> = HashSet::new();
        let mut unknown_fields = Vec::new();
        let mut kept = Vec::new();

        for item in items {
            let mut keep = true;
            for predicate in &self.predicates {
                match predicate.matches(&item.seeker_field_value(&predicate.field)) {
                    Some(true) => {}
                    Some(false) => keep = false,
                    None => {
                        if warned.insert(predicate.field.as_str()) {
                            warn!(
                                field = %predicate.field,
                                "unknown filter field '{}', ignoring it",
                                predicate.field
                            );
                            unknown_fields.push(predicate.field.clone());
                        }
                    }
                }
            }
            if keep {
                kept.push(item);
            }
        }

        debug!(input = items.len(), kept = kept.len(), "applied filter");
        Filtered {
            items: kept,
            unknown_fields,
        }
    }

    /// Number of items that satisfy the filter.
    pub fn count<T: Seekable>(&self, items: &[T]) -> usize {
        items.iter().filter(|item| self.matches(*item)).count()
    }
}

impl FromIterator<Predicate> for Filter {
    fn from_iter<I: IntoIterator<Item = Predicate>>(iter: I) -> Self {
        Filter {
            predicates: iter.into_iter().collect(),
        }
    }
}
