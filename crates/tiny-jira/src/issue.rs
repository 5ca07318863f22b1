//! Issue records and their normalized form.
//!
//! Records arrive in one of two shapes. An [`IssueRecord::Typed`] record is
//! the Jira REST document deserialized into [`RawIssue`]. An
//! [`IssueRecord::Mapping`] record is any other JSON object that uses the
//! same key names but does not fit the typed layout (a `null` where an object
//! was expected, a status given as a plain string, fields at the top level).
//!
//! Both are adapted once, by [`IssueRecord::into_issue`], into the canonical
//! [`Issue`]. Nothing downstream looks at the raw shapes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The canonical issue.
///
/// Optional text is `None` when the source had no value at all. Placeholder
/// text for display is decided by [`crate::fields`], not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub key: String,
    pub summary: Option<String>,
    pub status: Option<String>,
    pub assignee: Option<String>,
    pub reporter: Option<String>,
    pub labels: Vec<String>,
    pub issue_type: Option<String>,
    pub created: Option<String>,
    pub updated: Option<String>,
    /// Description flattened to plain text, one line per block.
    pub description: Option<String>,
    pub comments: Vec<Comment>,
}

/// One comment on an issue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Comment {
    pub author: Option<String>,
    pub body: String,
    pub created: Option<String>,
}

impl Issue {
    /// Creates an issue with only a key set.
    pub fn new(key: impl Into<String>) -> Self {
        Issue {
            key: key.into(),
            ..Issue::default()
        }
    }
}

// =============================================================================
// Typed shape
// =============================================================================

/// A Jira REST issue document.
#[derive(Debug, Clone, Deserialize)]
pub struct RawIssue {
    pub key: String,
    #[serde(default)]
    pub fields: RawFields,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFields {
    pub summary: Option<String>,
    pub status: Option<Named>,
    pub assignee: Option<Person>,
    pub reporter: Option<Person>,
    pub labels: Option<Vec<String>>,
    pub issuetype: Option<Named>,
    pub created: Option<String>,
    pub updated: Option<String>,
    pub description: Option<Value>,
    pub comment: Option<RawComments>,
}

/// An object identified by its `name` (status, issue type).
#[derive(Debug, Clone, Deserialize)]
pub struct Named {
    pub name: Option<String>,
}

/// A user reference.
#[derive(Debug, Clone, Deserialize)]
pub struct Person {
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawComments {
    #[serde(default)]
    pub comments: Vec<RawComment>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawComment {
    pub author: Option<Person>,
    pub body: Option<Value>,
    pub created: Option<String>,
}

impl From<RawIssue> for Issue {
    fn from(raw: RawIssue) -> Self {
        let f = raw.fields;
        Issue {
            key: raw.key,
            summary: f.summary,
            status: f.status.and_then(|s| s.name),
            assignee: f.assignee.and_then(|p| p.display_name),
            reporter: f.reporter.and_then(|p| p.display_name),
            labels: f.labels.unwrap_or_default(),
            issue_type: f.issuetype.and_then(|t| t.name),
            created: f.created,
            updated: f.updated,
            description: f.description.as_ref().and_then(document_text),
            comments: f
                .comment
                .map(|c| c.comments.into_iter().map(Comment::from).collect())
                .unwrap_or_default(),
        }
    }
}

impl From<RawComment> for Comment {
    fn from(raw: RawComment) -> Self {
        Comment {
            author: raw.author.and_then(|p| p.display_name),
            body: raw.body.as_ref().and_then(document_text).unwrap_or_default(),
            created: raw.created,
        }
    }
}

// =============================================================================
// Record dispatch
// =============================================================================

/// An issue as received, before normalization.
#[derive(Debug, Clone)]
pub enum IssueRecord {
    /// Deserialized into the REST layout.
    Typed(RawIssue),
    /// Anything else, kept as an untyped JSON mapping.
    Mapping(Value),
}

impl IssueRecord {
    /// Classifies a JSON value: typed if it has a `fields` object and
    /// deserializes cleanly, otherwise a mapping.
    pub fn from_value(value: Value) -> Self {
        if !value.get("fields").is_some_and(Value::is_object) {
            return IssueRecord::Mapping(value);
        }
        match RawIssue::deserialize(&value) {
            Ok(raw) => IssueRecord::Typed(raw),
            Err(_) => IssueRecord::Mapping(value),
        }
    }

    /// Returns the record key without normalizing the whole record.
    pub fn key(&self) -> Option<&str> {
        match self {
            IssueRecord::Typed(raw) => Some(raw.key.as_str()),
            IssueRecord::Mapping(value) => value.get("key").and_then(Value::as_str),
        }
    }

    /// Adapts the record into an [`Issue`]. Never fails: missing or
    /// malformed sub-objects become absent values.
    pub fn into_issue(self) -> Issue {
        match self {
            IssueRecord::Typed(raw) => Issue::from(raw),
            IssueRecord::Mapping(value) => issue_from_mapping(&value),
        }
    }
}

impl From<RawIssue> for IssueRecord {
    fn from(raw: RawIssue) -> Self {
        IssueRecord::Typed(raw)
    }
}

fn issue_from_mapping(value: &Value) -> Issue {
    let empty = Map::new();
    let record = value.as_object().unwrap_or(&empty);
    // Fields usually live under `fields`; flat records carry them inline.
    let fields = record
        .get("fields")
        .and_then(Value::as_object)
        .unwrap_or(record);

    Issue {
        key: scalar(record.get("key")).unwrap_or_default(),
        summary: scalar(fields.get("summary")),
        status: named(fields.get("status"), "name"),
        assignee: named(fields.get("assignee"), "displayName"),
        reporter: named(fields.get("reporter"), "displayName"),
        labels: labels(fields.get("labels")),
        issue_type: named(fields.get("issuetype"), "name"),
        created: scalar(fields.get("created")),
        updated: scalar(fields.get("updated")),
        description: fields.get("description").and_then(document_text),
        comments: comments(fields.get("comment")),
    }
}

/// A string or number, as text. Anything else is absent.
fn scalar(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// An object's `attr` member, or the value itself when it is a bare string.
fn named(value: Option<&Value>, attr: &str) -> Option<String> {
    match value? {
        Value::Object(map) => scalar(map.get(attr)),
        other => scalar(Some(other)),
    }
}

fn labels(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items.iter().filter_map(|v| scalar(Some(v))).collect(),
        Some(Value::String(s)) if !s.is_empty() => vec![s.clone()],
        _ => Vec::new(),
    }
}

fn comments(value: Option<&Value>) -> Vec<Comment> {
    let list = match value {
        Some(Value::Object(map)) => map.get("comments").and_then(Value::as_array),
        Some(Value::Array(items)) => Some(items),
        _ => None,
    };
    list.map(|items| {
        items
            .iter()
            .map(|c| Comment {
                author: named(c.get("author"), "displayName"),
                body: c.get("body").and_then(document_text).unwrap_or_default(),
                created: scalar(c.get("created")),
            })
            .collect()
    })
    .unwrap_or_default()
}

// =============================================================================
// Rich text
// =============================================================================

/// Flattens a description or comment body to plain text.
///
/// Accepts a plain string or an Atlassian document tree. Text nodes are
/// concatenated, every block ends its own line, and list items are prefixed
/// with `- `. Returns `None` when there is no text at all.
pub fn document_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.clone(),
        Value::Object(_) | Value::Array(_) => {
            let mut out = String::new();
            walk_document(value, &mut out);
            out
        }
        _ => return None,
    };
    let text = text.trim_end().to_string();
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

const BLOCK_NODES: &[&str] = &[
    "paragraph",
    "heading",
    "codeBlock",
    "blockquote",
    "panel",
    "rule",
    "mediaSingle",
    "tableRow",
];

fn walk_document(node: &Value, out: &mut String) {
    if let Value::Array(items) = node {
        for item in items {
            walk_document(item, out);
        }
        return;
    }

    let kind = node.get("type").and_then(Value::as_str).unwrap_or("");
    match kind {
        "text" => {
            if let Some(text) = node.get("text").and_then(Value::as_str) {
                out.push_str(text);
            }
            return;
        }
        "hardBreak" => {
            out.push('\n');
            return;
        }
        "mention" | "emoji" => {
            if let Some(text) = node.pointer("/attrs/text").and_then(Value::as_str) {
                out.push_str(text);
            }
            return;
        }
        "listItem" => {
            start_line(out);
            out.push_str("- ");
        }
        _ => {}
    }

    if let Some(content) = node.get("content") {
        walk_document(content, out);
    }

    if BLOCK_NODES.contains(&kind) {
        start_line(out);
    }
}

fn start_line(out: &mut String) {
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}
