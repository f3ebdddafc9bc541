//! Error types and error handling for coderank.
//!
//! Ordinary search input never produces an error: empty queries,
//! missing roots and unreadable files all degrade to empty or partial
//! results. The variants below cover configuration problems and the
//! deadline-bounded async entry point.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for coderank operations
pub type Result<T> = std::result::Result<T, CodeRankError>;

/// Main error type for coderank
#[derive(Error, Debug)]
pub enum CodeRankError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Search timed out after {0:?}")]
    SearchTimedOut(Duration),

    #[error("Search aborted: {0}")]
    SearchAborted(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl CodeRankError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            CodeRankError::InvalidQuery(_) | CodeRankError::ConfigError(_)
        )
    }

    /// Check if the error came from the deadline wrapper
    pub fn is_timeout(&self) -> bool {
        matches!(self, CodeRankError::SearchTimedOut(_))
    }
}
