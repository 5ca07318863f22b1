//! Field extraction: one issue, one named field, one display string.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use tiny_jira_seeker::{Seekable, Value};

use crate::issue::Issue;

/// Placeholder for an unassigned issue or an issue without labels.
pub const NONE_PLACEHOLDER: &str = "-";

/// The fields the extractor knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Key,
    Summary,
    Status,
    Assignee,
    Reporter,
    Labels,
    IssueType,
    Created,
    Updated,
}

impl Field {
    /// Every field, in filter-documentation order.
    pub const ALL: [Field; 9] = [
        Field::Key,
        Field::Summary,
        Field::Status,
        Field::Assignee,
        Field::Reporter,
        Field::Labels,
        Field::IssueType,
        Field::Created,
        Field::Updated,
    ];

    /// The lower-case name used in filters and column lists.
    pub fn name(self) -> &'static str {
        match self {
            Field::Key => "key",
            Field::Summary => "summary",
            Field::Status => "status",
            Field::Assignee => "assignee",
            Field::Reporter => "reporter",
            Field::Labels => "labels",
            Field::IssueType => "issuetype",
            Field::Created => "created",
            Field::Updated => "updated",
        }
    }

    /// Looks a field up by name, ignoring case.
    pub fn from_name(name: &str) -> Option<Field> {
        let name = name.trim().to_ascii_lowercase();
        Field::ALL.into_iter().find(|f| f.name() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::from_name(s).ok_or_else(|| format!("unknown field '{}'", s))
    }
}

/// Extracts one field of an issue as display text.
///
/// Never fails. Absent values become `""`, except `assignee` and `labels`,
/// which become `"-"`. Dates are cut to their first ten characters.
///
/// ```
/// use tiny_jira::fields::{extract, Field};
/// use tiny_jira::issue::Issue;
///
/// let mut issue = Issue::new("PROJ-1");
/// assert_eq!(extract(Field::Assignee, &issue), "-");
/// issue.assignee = Some("Ada Lovelace".into());
/// assert_eq!(extract(Field::Assignee, &issue), "Ada Lovelace");
/// ```
pub fn extract(field: Field, issue: &Issue) -> String {
    extract_cow(field, issue).into_owned()
}

/// Like [`extract`], by field name. Unknown names yield `None`.
pub fn extract_named(name: &str, issue: &Issue) -> Option<String> {
    Field::from_name(name).map(|f| extract(f, issue))
}

fn extract_cow(field: Field, issue: &Issue) -> Cow<'_, str> {
    fn text(value: &Option<String>) -> Cow<'_, str> {
        Cow::Borrowed(value.as_deref().unwrap_or(""))
    }

    match field {
        Field::Key => Cow::Borrowed(issue.key.as_str()),
        Field::Summary => text(&issue.summary),
        Field::Status => text(&issue.status),
        Field::Reporter => text(&issue.reporter),
        Field::IssueType => text(&issue.issue_type),
        Field::Assignee => match issue.assignee.as_deref() {
            Some(name) if !name.is_empty() => Cow::Borrowed(name),
            _ => Cow::Borrowed(NONE_PLACEHOLDER),
        },
        Field::Labels => {
            if issue.labels.is_empty() {
                Cow::Borrowed(NONE_PLACEHOLDER)
            } else {
                Cow::Owned(issue.labels.join(", "))
            }
        }
        Field::Created => date(issue.created.as_deref()),
        Field::Updated => date(issue.updated.as_deref()),
    }
}

/// The calendar-date prefix (`YYYY-MM-DD`) of an ISO-8601 timestamp.
fn date(value: Option<&str>) -> Cow<'_, str> {
    match value {
        Some(ts) => match ts.char_indices().nth(10) {
            Some((end, _)) => Cow::Borrowed(&ts[..end]),
            None => Cow::Borrowed(ts),
        },
        None => Cow::Borrowed(""),
    }
}

impl Seekable for Issue {
    fn seeker_field_value(&self, field: &str) -> Value<'_> {
        match Field::from_name(field) {
            Some(f) => Value::Text(extract_cow(f, self)),
            None => Value::Unknown,
        }
    }
}
