//! Where issue records come from.
//!
//! [`JsonSource`] reads a saved search response from a file or stdin. It
//! accepts three layouts:
//!
//! ```text
//! {"issues": [ {...}, {...} ]}     search response
//! [ {...}, {...} ]                 bare array
//! {"key": "PROJ-1", "fields": {...}}   single issue
//! ```

use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::env::{RealStdin, StdinReader};
use crate::issue::IssueRecord;

/// Default number of records returned by a search.
pub const DEFAULT_LIMIT: usize = 20;

/// Errors from reading issue records.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {origin}: {source}")]
    Read {
        origin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid issue JSON in {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{origin} does not contain issues (expected an object with \"issues\", an array, or an issue)")]
    Layout { origin: String },

    #[error("no input: pass --input <file>, or pipe JSON and use --input -")]
    NoInput,

    #[error("Issue {0} not found.")]
    IssueNotFound(String),
}

/// A provider of issue records.
pub trait IssueSource {
    /// Up to `limit` records, in source order.
    fn search(&self, limit: usize) -> Result<Vec<IssueRecord>, SourceError>;

    /// The record with the given key. Keys compare case-insensitively.
    fn issue(&self, key: &str) -> Result<IssueRecord, SourceError> {
        self.search(usize::MAX)?
            .into_iter()
            .find(|r| r.key().is_some_and(|k| k.eq_ignore_ascii_case(key)))
            .ok_or_else(|| SourceError::IssueNotFound(key.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    File(PathBuf),
    Stdin,
    Text(String),
}

/// Issue records stored as JSON.
pub struct JsonSource {
    input: Input,
    stdin: Box<dyn StdinReader>,
}

impl JsonSource {
    /// Reads from `path`, or stdin when `path` is `-`.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let input = if path == Path::new("-") {
            Input::Stdin
        } else {
            Input::File(path.to_path_buf())
        };
        JsonSource {
            input,
            stdin: Box::new(RealStdin),
        }
    }

    /// Reads from an in-memory JSON document.
    pub fn from_text(json: impl Into<String>) -> Self {
        JsonSource {
            input: Input::Text(json.into()),
            stdin: Box::new(RealStdin),
        }
    }

    /// Replaces the stdin reader.
    pub fn with_stdin(mut self, stdin: impl StdinReader + 'static) -> Self {
        self.stdin = Box::new(stdin);
        self
    }

    fn origin(&self) -> String {
        match &self.input {
            Input::File(path) => path.display().to_string(),
            Input::Stdin => "stdin".to_string(),
            Input::Text(_) => "input".to_string(),
        }
    }

    fn read(&self) -> Result<String, SourceError> {
        match &self.input {
            Input::File(path) => {
                std::fs::read_to_string(path).map_err(|source| SourceError::Read {
                    origin: self.origin(),
                    source,
                })
            }
            Input::Stdin => {
                if self.stdin.is_terminal() {
                    return Err(SourceError::NoInput);
                }
                self.stdin
                    .read_to_string()
                    .map_err(|source| SourceError::Read {
                        origin: self.origin(),
                        source,
                    })
            }
            Input::Text(text) => Ok(text.clone()),
        }
    }

    fn records(&self) -> Result<Vec<Value>, SourceError> {
        let text = self.read()?;
        let root: Value = serde_json::from_str(&text).map_err(|source| SourceError::Json {
            origin: self.origin(),
            source,
        })?;

        let records = match root {
            Value::Array(items) => items,
            Value::Object(mut map) => match map.remove("issues") {
                Some(Value::Array(items)) => items,
                Some(_) => {
                    return Err(SourceError::Layout {
                        origin: self.origin(),
                    })
                }
                None => vec![Value::Object(map)],
            },
            _ => {
                return Err(SourceError::Layout {
                    origin: self.origin(),
                })
            }
        };
        debug!(origin = %self.origin(), count = records.len(), "read issue records");
        Ok(records)
    }
}

impl IssueSource for JsonSource {
    fn search(&self, limit: usize) -> Result<Vec<IssueRecord>, SourceError> {
        Ok(self
            .records()?
            .into_iter()
            .take(limit)
            .map(IssueRecord::from_value)
            .collect())
    }
}
