//! Property-based tests for seeker using proptest.

use std::borrow::Cow;

use proptest::prelude::*;
use tiny_jira_seeker::{Filter, Predicate, Seekable, Value};

// ============================================================================
// Test helpers
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
struct TestItem {
    summary: String,
    status: String,
}

impl Seekable for TestItem {
    fn seeker_field_value(&self, field: &str) -> Value<'_> {
        match field {
            "summary" => Value::Text(Cow::Borrowed(&self.summary)),
            "status" => Value::Text(Cow::Borrowed(&self.status)),
            _ => Value::Unknown,
        }
    }
}

fn test_item_strategy() -> impl Strategy<Value = TestItem> {
    ("[a-zA-Z ]{0,12}", prop::sample::select(vec!["Done", "To Do", "In Progress"])).prop_map(
        |(summary, status)| TestItem {
            summary,
            status: status.to_string(),
        },
    )
}

fn predicate_strategy() -> impl Strategy<Value = Predicate> {
    (
        prop::sample::select(vec!["summary", "status", "madeup"]),
        "[a-zA-Z ]{0,3}",
    )
        .prop_map(|(field, value)| Predicate::new(field, value))
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Filtering never grows the collection.
    #[test]
    fn filter_never_grows_collection(
        items in prop::collection::vec(test_item_strategy(), 0..40),
        predicates in prop::collection::vec(predicate_strategy(), 0..4),
    ) {
        let filter: Filter = predicates.into_iter().collect();
        let result = filter.apply(&items);
        prop_assert!(result.items.len() <= items.len());
    }

    /// Kept items appear in the same relative order as in the input.
    #[test]
    fn filter_is_stable(
        items in prop::collection::vec(test_item_strategy(), 0..40),
        predicates in prop::collection::vec(predicate_strategy(), 0..4),
    ) {
        let filter: Filter = predicates.into_iter().collect();
        let expected: Vec<&TestItem> = items.iter().filter(|i| filter.matches(*i)).collect();
        let result = filter.apply(&items);
        prop_assert_eq!(result.items, expected);
    }

    /// Applying the same filter twice changes nothing the second time.
    #[test]
    fn filter_is_idempotent(
        items in prop::collection::vec(test_item_strategy(), 0..40),
        predicates in prop::collection::vec(predicate_strategy(), 0..4),
    ) {
        let filter: Filter = predicates.into_iter().collect();
        let once: Vec<TestItem> = filter.apply(&items).items.into_iter().cloned().collect();
        let twice: Vec<TestItem> = filter.apply(&once).items.into_iter().cloned().collect();
        prop_assert_eq!(once, twice);
    }

    /// A predicate on an unknown field never removes anything by itself.
    #[test]
    fn unknown_field_keeps_everything(
        items in prop::collection::vec(test_item_strategy(), 0..40),
        value in "[a-z]{0,5}",
    ) {
        let filter = Filter::new().and("madeup", value);
        let result = filter.apply(&items);
        prop_assert_eq!(result.items.len(), items.len());
    }

    /// Count equals the length of the filtered result.
    #[test]
    fn count_equals_apply_len(
        items in prop::collection::vec(test_item_strategy(), 0..40),
        predicates in prop::collection::vec(predicate_strategy(), 0..4),
    ) {
        let filter: Filter = predicates.into_iter().collect();
        prop_assert_eq!(filter.count(&items), filter.apply(&items).items.len());
    }

    /// Every kept item satisfies every known predicate.
    #[test]
    fn kept_items_satisfy_known_predicates(
        items in prop::collection::vec(test_item_strategy(), 1..40),
        value in "[a-z]{1,2}",
    ) {
        let filter = Filter::new().and("summary", value.clone());
        for item in filter.apply(&items).items {
            prop_assert!(item.summary.to_lowercase().contains(&value));
        }
    }
}
