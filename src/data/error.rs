//! Dataset loading errors
//!
//! Every variant carries the path of the collection file it concerns so the
//! message is actionable without a backtrace.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading source collections
#[derive(Debug, Error)]
pub enum DataError {
    /// The collection file could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The collection file is not valid JSON for its record type
    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The data directory does not exist
    #[error("Data directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),
}

/// Result type for dataset operations
pub type Result<T> = std::result::Result<T, DataError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_missing_directory_display() {
        let error = DataError::MissingDirectory(PathBuf::from("/nope"));
        assert_eq!(error.to_string(), "Data directory not found: /nope");
        assert!(error.source().is_none());
    }

    #[test]
    fn test_parse_error_has_source() {
        let source = serde_json::from_str::<Vec<u32>>("{").unwrap_err();
        let error = DataError::Parse {
            path: PathBuf::from("users.json"),
            source,
        };
        assert!(error.to_string().starts_with("Failed to parse users.json"));
        assert!(error.source().is_some());
    }
}
