//! Error handling for the resume matcher

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeMatcherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not read file: {0}")]
    ExtractionFailed(String),

    #[error("Text extraction timed out after {0}s")]
    ExtractionTimeout(u64),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Upload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Vocabulary error: {0}")]
    Vocabulary(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),

    #[error("Server error: {0}")]
    Server(String),
}

pub type Result<T> = std::result::Result<T, ResumeMatcherError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for ResumeMatcherError {
    fn from(err: anyhow::Error) -> Self {
        ResumeMatcherError::Server(format!("{:#}", err))
    }
}

impl From<askama::Error> for ResumeMatcherError {
    fn from(err: askama::Error) -> Self {
        ResumeMatcherError::OutputFormatting(err.to_string())
    }
}
