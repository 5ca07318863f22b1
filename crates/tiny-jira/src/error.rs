//! Crate-level error type.

use thiserror::Error;
use tiny_jira_render::StylesheetError;

use crate::columns::ColumnError;
use crate::config::ConfigError;
use crate::source::SourceError;
use crate::table::TableError;

/// Any failure while producing output.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Column(#[from] ColumnError),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("theme error: {0}")]
    Theme(#[from] StylesheetError),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
