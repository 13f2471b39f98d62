use thiserror::Error;

/// Process-level errors for revu
#[derive(Debug, Error)]
pub enum RevuError {
    #[error("Invalid service URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("HTTP client setup failed: {0}")]
    HttpClient(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Input rejected on the client before any request is issued
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("{0} is empty")]
    EmptyInput(&'static str),

    #[error("Select a place or product before writing a review")]
    NoSelection,

    #[error("Still waiting for the previous review to be classified")]
    SubmissionPending,

    #[error("Review service worker is not running")]
    ServiceUnavailable,
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
