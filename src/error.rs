// ⚠️ Catalog Errors - typed failures for loading and rendering
//
// SourceUnavailable and Parse carry the kind, the path and (for Parse) the
// 1-based line.

use crate::item::{ItemKind, RecordError};
use std::path::PathBuf;
use thiserror::Error;

/// Result type used across the library.
pub type CatalogResult<T> = Result<T, CatalogError>;

// ============================================================================
// PARSE ERROR
// ============================================================================

/// A line that failed to parse, with where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{source_name}:{line}: cannot read {kind} item: {reason}")]
pub struct ParseError {
    pub source_name: String,
    /// 1-based line number within the source.
    pub line: usize,
    pub kind: ItemKind,
    pub reason: RecordError,
}

// ============================================================================
// CATALOG ERROR
// ============================================================================

#[derive(Debug, Error)]
pub enum CatalogError {
    /// A source could not be opened or read.
    #[error("{kind} source unavailable: {path}")]
    SourceUnavailable {
        kind: ItemKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line could not be turned into an item (strict mode only).
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The configuration file could not be read or parsed.
    #[error("invalid config {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("output failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv output failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("json output failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl CatalogError {
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }
}
