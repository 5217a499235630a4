use thiserror::Error;

use crate::specimen::SpecimenParseError;

/// Prefix of every message shown in the error panel.
pub const LOAD_FAILURE_PREFIX: &str = "Failed to load specimen data";

/// Why the catalog could not be loaded. Every variant is terminal for the
/// session; nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The request never completed. Carries the transport's own message.
    #[error("{0}")]
    Transport(String),
    #[error("HTTP error! status: {status}")]
    HttpStatus { status: u16 },
    #[error("Malformed specimen data: {0}")]
    MalformedData(String),
    #[error("Load cancelled")]
    Cancelled,
}

impl LoadError {
    /// Text for the inline error panel.
    pub fn user_message(&self) -> String {
        match self {
            // parser detail stays in the logs
            LoadError::MalformedData(_) => {
                format!("{LOAD_FAILURE_PREFIX}: response is not a valid specimen list")
            }
            other => format!("{LOAD_FAILURE_PREFIX}: {other}"),
        }
    }
}

impl From<SpecimenParseError> for LoadError {
    fn from(err: SpecimenParseError) -> Self {
        LoadError::MalformedData(err.to_string())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Resource path must not be empty")]
    EmptyResourcePath,
    #[error("Invalid base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}
