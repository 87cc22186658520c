//! UI error types

use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// IO error while driving the terminal
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// The terminal is not usable for the TUI
    #[error("Terminal unavailable: {0}")]
    TerminalUnavailable(String),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
