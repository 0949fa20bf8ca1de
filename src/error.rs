//! Error handling for the resume matcher

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeMatcherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Text extraction failed: {0}")]
    ExtractionFailure(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Caller-facing classification of a failure.
///
/// A serving layer maps these onto its own status codes; anything that is not one of the
/// three typed failures is reported as `Internal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnsupportedFormat,
    ExtractionFailure,
    InvalidInput,
    Internal,
}

impl ResumeMatcherError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ResumeMatcherError::UnsupportedFormat(_) => ErrorKind::UnsupportedFormat,
            ResumeMatcherError::ExtractionFailure(_) => ErrorKind::ExtractionFailure,
            ResumeMatcherError::InvalidInput(_) => ErrorKind::InvalidInput,
            _ => ErrorKind::Internal,
        }
    }

    /// Whether the caller can fix the request and resubmit.
    pub fn is_caller_correctable(&self) -> bool {
        !matches!(self.kind(), ErrorKind::Internal)
    }
}

pub type Result<T> = std::result::Result<T, ResumeMatcherError>;

impl From<toml::de::Error> for ResumeMatcherError {
    fn from(err: toml::de::Error) -> Self {
        ResumeMatcherError::Configuration(format!("Failed to parse config: {}", err))
    }
}

impl From<toml::ser::Error> for ResumeMatcherError {
    fn from(err: toml::ser::Error) -> Self {
        ResumeMatcherError::Configuration(format!("Failed to serialize config: {}", err))
    }
}

impl From<tokio::task::JoinError> for ResumeMatcherError {
    fn from(err: tokio::task::JoinError) -> Self {
        ResumeMatcherError::Internal(format!("Extraction task failed: {}", err))
    }
}
