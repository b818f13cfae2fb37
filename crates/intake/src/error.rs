//! Error types for metadata intake.

use thiserror::Error;

/// Errors raised while turning platform metadata into a snapshot.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IntakeError {
    /// Input is neither a `github.com/<owner>/<repo>` URL nor `owner/repo`.
    #[error("Invalid GitHub repository URL: '{input}'")]
    InvalidRepositoryUrl { input: String },

    /// A field the snapshot cannot do without is missing or blank.
    #[error("Repository payload is missing `{field}`")]
    MissingField { field: &'static str },

    /// The payload is not valid JSON for the expected shape.
    #[error("Failed to parse repository payload: {0}")]
    Json(#[from] serde_json::Error),
}
