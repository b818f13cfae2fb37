//! Error types for the engine.

use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by [`crate::Analyzer::analyze`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AnalyzeError {
    /// The snapshot violates the input contract.
    #[error("Invalid snapshot: `{field}` {reason}")]
    InvalidSnapshot {
        /// Offending field, with an index for sequence elements (e.g. `fileNames[2]`).
        field: String,
        /// The violated precondition.
        reason: String,
    },
}

impl AnalyzeError {
    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSnapshot {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Errors that can occur while loading a technology table.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TableError {
    /// The table file could not be read.
    #[error("Failed to read technology table {path}: {source}")]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The table is not valid TOML or has unknown categories/demands.
    #[error("Failed to parse technology table: {0}")]
    Parse(#[from] toml::de::Error),

    /// An entry has an empty or whitespace-only name.
    #[error("Empty technology name in partition '{partition}'")]
    EmptyName {
        /// Partition holding the entry.
        partition: &'static str,
    },
}
