//! Error handling module for randr-tui
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Parsing never produces an error: malformed report fragments are skipped.

use thiserror::Error;

/// Main error type for randr-tui
#[derive(Error, Debug)]
pub enum RandrTuiError {
    /// The display report could not be obtained or read (fatal to startup)
    #[error("Failed to acquire display report: {0}")]
    Acquisition(String),

    /// The configuration command failed or exited non-zero
    #[error("Failed to apply display mode: {0}")]
    Apply(String),

    /// The user tried to confirm an entry that cannot be used
    #[error("{0}")]
    SelectionGuard(String),

    /// Configuration errors (loading, parsing, validation)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for randr-tui operations
pub type Result<T> = std::result::Result<T, RandrTuiError>;

// Convenient error constructors
impl RandrTuiError {
    /// Create a report acquisition error
    pub fn acquisition(msg: impl Into<String>) -> Self {
        Self::Acquisition(msg.into())
    }

    /// Create an apply error
    pub fn apply(msg: impl Into<String>) -> Self {
        Self::Apply(msg.into())
    }

    /// Create a selection guard violation
    pub fn selection_guard(msg: impl Into<String>) -> Self {
        Self::SelectionGuard(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Whether this error should halt startup.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Acquisition(_) | Self::Config(_) | Self::Terminal(_))
    }
}
