//! Error handling for the cv-rater application

use thiserror::Error;

/// Fallback shown to the user when the service gives us nothing better.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to analyze CV. Please try again.";

#[derive(Error, Debug)]
pub enum CvRaterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),
}

pub type Result<T> = std::result::Result<T, CvRaterError>;

impl CvRaterError {
    /// One-line text suitable for the error banner. Prefers the server's own
    /// wording when it sent any.
    pub fn user_message(&self) -> String {
        match self {
            CvRaterError::Api { message, .. } if !message.is_empty() => message.clone(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for CvRaterError {
    fn from(err: anyhow::Error) -> Self {
        CvRaterError::InvalidInput(err.to_string())
    }
}
