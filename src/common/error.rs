//! Error types for the acceptance harness
//!
//! These cover harness start-up only (bad target URL, unreadable config,
//! HTTP client construction). Failures of the workflow service itself are
//! never errors: they surface as [`crate::api::Outcome`] values and end up
//! as failed assertions in the report.

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the harness
#[derive(Error, Debug)]
pub enum Error {
    // === Target Errors ===
    #[error("Invalid base URL '{url}': {reason}. Expected something like http://localhost:5000")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    // === Configuration Errors ===
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },
}

impl Error {
    /// Create an invalid base URL error
    pub fn invalid_base_url(url: &str, reason: impl ToString) -> Self {
        Self::InvalidBaseUrl {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_base_url_message_names_url() {
        let err = Error::invalid_base_url("localhost", "relative URL without a base");
        let msg = err.to_string();
        assert!(msg.contains("'localhost'"));
        assert!(msg.contains("relative URL without a base"));
    }
}
