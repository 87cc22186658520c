//! File logging setup
//!
//! The TUI owns the terminal, so log records go to a file in the user's
//! local data directory instead of stderr.

use crate::config::LogLevel;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::{self, File};
use std::path::PathBuf;

/// Location of the log file, if the data directory can be determined
#[must_use]
pub fn log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("photoview").join("photoview.log"))
}

/// Install the global file logger
///
/// Logging is optional: any failure is reported on stderr and the program
/// carries on without a logger.
pub fn init(level: LogLevel) {
    if level == LogLevel::Off {
        return;
    }

    let Some(path) = log_path() else {
        eprintln!("warning: could not determine data directory, logging disabled");
        return;
    };

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        eprintln!("warning: failed to create {}: {e}", parent.display());
        return;
    }

    let file = match File::create(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("warning: failed to create log file {}: {e}", path.display());
            return;
        }
    };

    let config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Err(e) = WriteLogger::init(level.to_filter(), config, file) {
        eprintln!("warning: failed to initialize logger: {e}");
    }
}
