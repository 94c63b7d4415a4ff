use thiserror::Error;

#[derive(Error, Debug)]
pub enum LecternError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to extract text from {format} file: {message}")]
    Extraction { format: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl LecternError {
    pub fn extraction(format: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::Extraction {
            format: format.into(),
            message: message.to_string(),
        }
    }

    /// True for the two hard-failure tiers callers are expected to surface.
    pub fn is_extraction_failure(&self) -> bool {
        matches!(
            self,
            LecternError::UnsupportedFormat(_) | LecternError::Extraction { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, LecternError>;
