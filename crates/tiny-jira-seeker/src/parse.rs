//! Two-pass filter expression parser.
//!
//! Pass one looks for quoted predicates (`field:"value"`). Only when it finds
//! nothing does pass two look for bare predicates (`field:value`), which are
//! split on commas. The passes never mix: an expression with at least one
//! quoted predicate ignores any bare ones next to it.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::clause::Predicate;

static QUOTED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(\w+):"([^"]*)""#).expect("quoted predicate pattern is valid"));

static BARE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w+):([^,]+)").expect("bare predicate pattern is valid"));

/// Parses a filter expression into predicates.
///
/// `None`, an empty string, or text without any `field:value` occurrence
/// yields an empty list, which matches everything.
pub(crate) fn parse(raw: Option<&str>) -> Vec<Predicate> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    let quoted = parse_quoted(raw);
    if !quoted.is_empty() {
        return quoted;
    }
    parse_bare(raw)
}

/// Pass one: every `<word>:"<no double quotes>"` occurrence, in order.
///
/// Values are taken verbatim and may contain commas.
///
/// ```
/// use tiny_jira_seeker::{parse_quoted, Predicate};
///
/// let preds = parse_quoted(r#"summary:"crash, then hang" status:"Done""#);
/// assert_eq!(preds, vec![
///     Predicate::new("summary", "crash, then hang"),
///     Predicate::new("status", "Done"),
/// ]);
/// ```
pub fn parse_quoted(raw: &str) -> Vec<Predicate> {
    QUOTED
        .captures_iter(raw)
        .map(|caps| Predicate::new(&caps[1], &caps[2]))
        .collect()
}

/// Pass two: every `<word>:<no comma>` occurrence, values trimmed.
///
/// ```
/// use tiny_jira_seeker::{parse_bare, Predicate};
///
/// let preds = parse_bare("Status: In Progress , assignee:ada");
/// assert_eq!(preds, vec![
///     Predicate::new("status", "In Progress"),
///     Predicate::new("assignee", "ada"),
/// ]);
/// ```
pub fn parse_bare(raw: &str) -> Vec<Predicate> {
    BARE.captures_iter(raw)
        .map(|caps| Predicate::new(&caps[1], caps[2].trim()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(preds: &[Predicate]) -> Vec<(&str, &str)> {
        preds
            .iter()
            .map(|p| (p.field.as_str(), p.value.as_str()))
            .collect()
    }

    #[test]
    fn none_and_empty_parse_to_nothing() {
        assert!(parse(None).is_empty());
        assert!(parse(Some("")).is_empty());
        assert!(parse(Some("   ")).is_empty());
    }

    #[test]
    fn quoted_comma_separated() {
        let preds = parse(Some(r#"summary:"login bug",status:"Done""#));
        assert_eq!(
            pairs(&preds),
            vec![("summary", "login bug"), ("status", "Done")]
        );
    }

    #[test]
    fn quoted_adjacent() {
        let preds = parse(Some(r#"key:"PROJ-1"status:"Done""#));
        assert_eq!(pairs(&preds), vec![("key", "PROJ-1"), ("status", "Done")]);
    }

    #[test]
    fn quoted_value_keeps_commas_and_case() {
        let preds = parse(Some(r#"Labels:"Backend, API""#));
        assert_eq!(pairs(&preds), vec![("labels", "Backend, API")]);
    }

    #[test]
    fn quoted_value_is_not_trimmed() {
        let preds = parse(Some(r#"summary:" padded ""#));
        assert_eq!(pairs(&preds), vec![("summary", " padded ")]);
    }

    #[test]
    fn quoted_empty_value() {
        let preds = parse(Some(r#"summary:"""#));
        assert_eq!(pairs(&preds), vec![("summary", "")]);
    }

    #[test]
    fn bare_fallback_splits_on_commas_and_trims() {
        let preds = parse(Some("status: In Progress ,ASSIGNEE:Ada"));
        assert_eq!(
            pairs(&preds),
            vec![("status", "In Progress"), ("assignee", "Ada")]
        );
    }

    #[test]
    fn bare_value_cannot_hold_a_comma() {
        let preds = parse(Some("labels:backend, api"));
        assert_eq!(pairs(&preds), vec![("labels", "backend")]);
    }

    #[test]
    fn bare_value_may_contain_colons() {
        let preds = parse(Some("summary:error: timeout"));
        assert_eq!(pairs(&preds), vec![("summary", "error: timeout")]);
    }

    #[test]
    fn quoted_pass_wins_over_bare_predicates() {
        let preds = parse(Some(r#"summary:"login",status:Done"#));
        assert_eq!(pairs(&preds), vec![("summary", "login")]);
    }

    #[test]
    fn text_without_predicates_is_empty() {
        assert!(parse(Some("just some words")).is_empty());
    }
}
