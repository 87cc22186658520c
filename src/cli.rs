//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for photoview using the `clap` crate.
//!
//! # Commands
//!
//! - **browse**: Interactive photo browser (default)
//! - **list**: Print the filtered photos as a table, JSON or CSV
//! - **users** / **albums**: Print the filter options
//! - **config**: Read and write configuration values
//!
//! `browse` and `list` share the same filter flags, which seed the initial
//! filter state through the same reducer the TUI uses.
//!
//! # Examples
//!
//! ```
//! use photoview::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from_args(["photoview", "list", "-u", "2", "-s", "sun"]);
//! let Commands::List { filter_args, .. } = cli.get_command() else {
//!     unreachable!();
//! };
//! let state = filter_args.to_filter_state();
//! assert_eq!(state.selected_user_id, 2);
//! assert_eq!(state.search_query, "sun");
//! ```

use crate::filters::{ALL_USERS, FilterAction, FilterState};
use crate::output::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., quiet=true)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., `data_dir`)
        #[arg(value_name = "KEY")]
        key: String,
    },
}

/// Filter flags shared by `browse` and `list`
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterArgs {
    /// Case-insensitive substring to match against photo titles
    #[arg(short = 's', long = "search", value_name = "TEXT")]
    pub search: Option<String>,

    /// Only show photos owned by this user id (0 = all users)
    #[arg(short = 'u', long = "user", value_name = "ID")]
    pub user: Option<u32>,

    /// Only show photos from these album ids (repeatable)
    #[arg(short = 'a', long = "album", value_name = "ID", num_args = 1..)]
    pub albums: Vec<u32>,
}

impl FilterArgs {
    /// Build the filter state the flags describe
    ///
    /// Album ids are toggled in order, so naming an album twice leaves it
    /// unselected.
    #[must_use]
    pub fn to_filter_state(&self) -> FilterState {
        let mut actions = Vec::new();
        if let Some(text) = &self.search {
            actions.push(FilterAction::SetSearchQuery(text.clone()));
        }
        actions.push(FilterAction::SetSelectedUserId(self.user.unwrap_or(ALL_USERS)));
        actions.extend(self.albums.iter().copied().map(FilterAction::ToggleAlbum));

        actions
            .into_iter()
            .fold(FilterState::default(), FilterState::reduce)
    }
}

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "photoview")]
#[command(about = "Browse photos by album and owner", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding users.json, albums.json and photos.json (overrides config)
    #[arg(long = "data", value_name = "DIR", global = true)]
    pub data: Option<PathBuf>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Open the interactive photo browser (default)
    #[command(visible_alias = "b")]
    Browse {
        #[command(flatten)]
        filter_args: FilterArgs,
    },

    /// Print the photos matching the filters
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        filter_args: FilterArgs,

        /// Output format
        #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// List users with their album counts
    Users,

    /// List albums with their owners
    Albums {
        /// Only albums owned by this user id
        #[arg(short = 'u', long = "user", value_name = "ID")]
        user: Option<u32>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parse from an explicit argument list
    #[must_use]
    pub fn parse_from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::parse_from(args)
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse {
            filter_args: FilterArgs::default(),
        })
    }
}
