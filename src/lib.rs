//! Photoview - A terminal browser for photos, albums and their owners
//!
//! This library joins three flat collections (photos, albums, users) into
//! denormalized records and provides the filter state and evaluation used
//! by both the interactive TUI and the non-interactive `list` command.

use thiserror::Error;

pub mod cli;
pub mod config;
pub mod data;
pub mod filters;
pub mod join;
pub mod logging;
pub mod models;
pub mod output;
pub mod ui;

#[cfg(test)]
pub mod testing;

pub use filters::{FilterAction, FilterState, FilterStore, evaluate};
pub use join::join;
pub use models::{Album, JoinedPhoto, Photo, Sex, User};

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum PhotoviewError {
    /// Dataset loading error
    #[error("Data error: {0}")]
    DataError(#[from] data::DataError),
    /// Terminal UI error
    #[error("UI error: {0}")]
    UiError(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Output serialization error
    #[error("Output error: {0}")]
    OutputError(#[from] output::OutputError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
