//! Error types for pageread

use std::io;
use thiserror::Error;

/// Main error type for pageread
#[derive(Error, Debug)]
pub enum PagereadError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Preference store error: {0}")]
    Store(String),

    #[error("Speech synthesis error: {0}")]
    Speech(String),

    #[error("Page error: {0}")]
    Page(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("INI parse error: {0}")]
    IniParse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for pageread operations
pub type Result<T> = std::result::Result<T, PagereadError>;

impl From<String> for PagereadError {
    fn from(s: String) -> Self {
        PagereadError::Other(s)
    }
}

impl From<&str> for PagereadError {
    fn from(s: &str) -> Self {
        PagereadError::Other(s.to_string())
    }
}
