use thiserror::Error as ThisError;

use super::ValidationErrors;
use crate::store::RecordKind;
use snapshare_schema::RecordId;

#[derive(Debug, ThisError)]
pub enum SnapshareError {
    #[error("{kind} not found: id={id}")]
    NotFound { kind: RecordKind, id: RecordId },

    #[error("Access denied for event id={id}")]
    AccessDenied { id: RecordId },

    #[error("Validation failed: {0}")]
    ValidationFailed(ValidationErrors),

    #[error("Unsupported media type {mime_type:?} for file {file_name:?}")]
    UnsupportedMedia {
        file_name: String,
        mime_type: String,
    },

    #[error("{kind} store has no ids left to assign")]
    IdsExhausted { kind: RecordKind },

    #[error("Fixture error: {0}")]
    Fixture(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Ractor error: {0}")]
    RactorError(String),
}

impl SnapshareError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, SnapshareError::NotFound { .. })
    }
}

impl From<ValidationErrors> for SnapshareError {
    fn from(errors: ValidationErrors) -> Self {
        SnapshareError::ValidationFailed(errors)
    }
}
