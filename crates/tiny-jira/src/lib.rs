//! # tiny-jira
//!
//! Adaptive issue tables for narrow and wide terminals.
//!
//! The pipeline runs in one direction:
//!
//! ```text
//! JSON records ─► IssueRecord ─► Issue ─► Filter ─► build ─► RenderableTable ─► render
//!                                           ▲          ▲
//!                              parse_columns ┘ allocate ┘
//! ```
//!
//! - [`issue`]: the two record shapes and the canonical [`Issue`].
//! - [`fields`]: one display string per issue and field, with placeholders.
//! - [`columns`]: the static column catalogue and column-list parsing.
//! - [`layout`]: width allocation from the terminal width.
//! - [`table`]: assembly into a [`RenderableTable`].
//! - [`views`]: detail and comment panels for a single issue.
//! - [`source`], [`config`], [`cli`]: where records, settings and commands
//!   come from.
//!
//! ## Example
//!
//! ```
//! use tiny_jira::columns::parse_columns;
//! use tiny_jira::layout::allocate;
//! use tiny_jira::table::build;
//! use tiny_jira::{Filter, Issue};
//!
//! let mut issue = Issue::new("PROJ-1");
//! issue.summary = Some("Fix login bug on mobile".into());
//! issue.status = Some("Done".into());
//! let issues = vec![issue];
//!
//! let filter = Filter::parse(Some(r#"summary:"login bug",status:"Done""#));
//! let kept = filter.apply(&issues).items;
//!
//! let columns = parse_columns(Some("key,summary,assignee")).unwrap().columns();
//! let widths = allocate(&columns, 80);
//! let table = build(kept, &columns, &widths).unwrap();
//! assert_eq!(table.rows[0], vec!["PROJ-1", "Fix login bug on mobile", "-"]);
//! ```

pub mod cli;
pub mod columns;
pub mod config;
pub mod env;
mod error;
pub mod fields;
pub mod issue;
pub mod layout;
pub mod logging;
pub mod source;
pub mod table;
pub mod views;

pub use error::{Error, Result};
pub use issue::{Comment, Issue, IssueRecord};
pub use table::{RenderableTable, TableColumn};
pub use tiny_jira_seeker::{Filter, Filtered, Predicate};
