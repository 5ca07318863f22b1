//! The column catalogue and column-list parsing.

use std::fmt;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::fields::Field;

/// A renderable column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Key,
    Summary,
    Status,
    Labels,
    Assignee,
    Created,
    Updated,
}

impl ColumnKind {
    /// The field this column displays.
    pub fn field(self) -> Field {
        match self {
            ColumnKind::Key => Field::Key,
            ColumnKind::Summary => Field::Summary,
            ColumnKind::Status => Field::Status,
            ColumnKind::Labels => Field::Labels,
            ColumnKind::Assignee => Field::Assignee,
            ColumnKind::Created => Field::Created,
            ColumnKind::Updated => Field::Updated,
        }
    }

    /// The catalogue entry for this column.
    pub fn definition(self) -> &'static ColumnDefinition {
        // Catalogue order matches declaration order.
        &CATALOGUE[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.definition().name
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Static metadata for one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDefinition {
    pub kind: ColumnKind,
    pub name: &'static str,
    pub header: &'static str,
    pub style: &'static str,
    pub min_width: usize,
    /// `None` marks the flexible column, which absorbs leftover width.
    pub ideal_width: Option<usize>,
}

impl ColumnDefinition {
    pub fn is_flexible(&self) -> bool {
        self.ideal_width.is_none()
    }
}

/// Every column, in canonical order.
pub static CATALOGUE: [ColumnDefinition; 7] = [
    ColumnDefinition {
        kind: ColumnKind::Key,
        name: "key",
        header: "Key",
        style: "key",
        min_width: 10,
        ideal_width: Some(12),
    },
    ColumnDefinition {
        kind: ColumnKind::Summary,
        name: "summary",
        header: "Summary",
        style: "summary",
        min_width: 30,
        ideal_width: None,
    },
    ColumnDefinition {
        kind: ColumnKind::Status,
        name: "status",
        header: "Status",
        style: "status",
        min_width: 10,
        ideal_width: Some(15),
    },
    ColumnDefinition {
        kind: ColumnKind::Labels,
        name: "labels",
        header: "Labels",
        style: "labels",
        min_width: 10,
        ideal_width: Some(20),
    },
    ColumnDefinition {
        kind: ColumnKind::Assignee,
        name: "assignee",
        header: "Assignee",
        style: "assignee",
        min_width: 10,
        ideal_width: Some(18),
    },
    ColumnDefinition {
        kind: ColumnKind::Created,
        name: "created",
        header: "Created",
        style: "date",
        min_width: 10,
        ideal_width: Some(10),
    },
    ColumnDefinition {
        kind: ColumnKind::Updated,
        name: "updated",
        header: "Updated",
        style: "date",
        min_width: 10,
        ideal_width: Some(10),
    },
];

/// Looks up a column by name. Exact, lower-case match.
pub fn lookup(name: &str) -> Option<&'static ColumnDefinition> {
    CATALOGUE.iter().find(|c| c.name == name)
}

/// All column names, sorted.
pub fn valid_names() -> Vec<String> {
    let mut names: Vec<String> = CATALOGUE.iter().map(|c| c.name.to_string()).collect();
    names.sort();
    names
}

/// Errors from column-list parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColumnError {
    /// One or more requested names are not in the catalogue.
    #[error("invalid column(s): {}. Valid columns: {}", .invalid.join(", "), .valid.join(", "))]
    InvalidColumn {
        /// Unrecognized names, in request order.
        invalid: Vec<String>,
        /// Every valid name, sorted.
        valid: Vec<String>,
    },
}

/// The outcome of [`parse_columns`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSelection {
    /// No list given: the whole catalogue in canonical order.
    Default,
    /// The user's list, in the user's order.
    Explicit(Vec<&'static ColumnDefinition>),
}

impl ColumnSelection {
    /// The selected definitions.
    pub fn columns(&self) -> Vec<&'static ColumnDefinition> {
        match self {
            ColumnSelection::Default => CATALOGUE.iter().collect(),
            ColumnSelection::Explicit(cols) => cols.clone(),
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, ColumnSelection::Default)
    }
}

/// Parses a comma-separated column list.
///
/// Names are trimmed and lower-cased; blank entries are skipped. `None`, an
/// empty string, or a list of only blanks selects the default catalogue.
/// Duplicates are kept.
///
/// ```
/// use tiny_jira::columns::{parse_columns, ColumnError};
///
/// let cols = parse_columns(Some(" Key,SUMMARY ")).unwrap().columns();
/// assert_eq!(cols.iter().map(|c| c.name).collect::<Vec<_>>(), ["key", "summary"]);
///
/// let err = parse_columns(Some("key,bogus")).unwrap_err();
/// assert!(matches!(err, ColumnError::InvalidColumn { .. }));
/// ```
pub fn parse_columns(raw: Option<&str>) -> Result<ColumnSelection, ColumnError> {
    let names: Vec<String> = raw
        .unwrap_or("")
        .split(',')
        .map(|part| part.trim().to_lowercase())
        .filter(|part| !part.is_empty())
        .collect();

    if names.is_empty() {
        debug!("no columns requested, using the full catalogue");
        return Ok(ColumnSelection::Default);
    }

    let mut selected = Vec::with_capacity(names.len());
    let mut invalid = Vec::new();
    for name in names {
        match lookup(&name) {
            Some(def) => selected.push(def),
            None => invalid.push(name),
        }
    }

    if !invalid.is_empty() {
        return Err(ColumnError::InvalidColumn {
            invalid,
            valid: valid_names(),
        });
    }

    debug!(columns = selected.len(), "parsed column list");
    Ok(ColumnSelection::Explicit(selected))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(sel: &ColumnSelection) -> Vec<&'static str> {
        sel.columns().iter().map(|c| c.name).collect()
    }

    #[test]
    fn catalogue_is_indexed_by_kind() {
        for (i, def) in CATALOGUE.iter().enumerate() {
            assert_eq!(def.kind as usize, i);
            assert_eq!(def.kind.definition(), def);
        }
    }

    #[test]
    fn exactly_one_flexible_column() {
        let flexible: Vec<_> = CATALOGUE.iter().filter(|c| c.is_flexible()).collect();
        assert_eq!(flexible.len(), 1);
        assert_eq!(flexible[0].kind, ColumnKind::Summary);
    }

    #[test]
    fn ideal_is_never_below_min() {
        for def in &CATALOGUE {
            if let Some(ideal) = def.ideal_width {
                assert!(ideal >= def.min_width, "{}", def.name);
            }
        }
    }

    #[test]
    fn none_and_blank_select_default() {
        for raw in [None, Some(""), Some("  "), Some(", ,")] {
            let sel = parse_columns(raw).unwrap();
            assert!(sel.is_default());
            assert_eq!(
                names(&sel),
                vec!["key", "summary", "status", "labels", "assignee", "created", "updated"]
            );
        }
    }

    #[test]
    fn explicit_order_is_preserved() {
        let sel = parse_columns(Some("updated,key,summary")).unwrap();
        assert_eq!(names(&sel), vec!["updated", "key", "summary"]);
    }

    #[test]
    fn blank_entries_are_skipped() {
        let sel = parse_columns(Some("key,,status,")).unwrap();
        assert_eq!(names(&sel), vec!["key", "status"]);
    }

    #[test]
    fn invalid_names_are_all_reported() {
        let err = parse_columns(Some("Key, STATUS , bogus")).unwrap_err();
        assert_eq!(
            err,
            ColumnError::InvalidColumn {
                invalid: vec!["bogus".into()],
                valid: vec![
                    "assignee".into(),
                    "created".into(),
                    "key".into(),
                    "labels".into(),
                    "status".into(),
                    "summary".into(),
                    "updated".into(),
                ],
            }
        );
    }

    #[test]
    fn several_invalid_names_in_request_order() {
        let err = parse_columns(Some("zeta,key,Alpha")).unwrap_err();
        let ColumnError::InvalidColumn { invalid, .. } = err;
        assert_eq!(invalid, vec!["zeta", "alpha"]);
    }

    #[test]
    fn error_message_lists_names() {
        let err = parse_columns(Some("bogus")).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("bogus"));
        assert!(msg.contains("assignee, created, key"));
    }

    #[test]
    fn column_fields_exist() {
        for def in &CATALOGUE {
            assert_eq!(def.kind.field().name(), def.name);
        }
    }
}
