//! Photoview CLI application entry point
//!
//! Joins the photo, album and user collections and either opens the
//! interactive browser or prints the filtered result.
//!
//! # Usage
//!
//! ```bash
//! # Browse the builtin collections interactively (default command)
//! photoview
//! photoview browse -u 2
//!
//! # Print matching photos
//! photoview list -s sunset -a 1 -a 3
//! photoview ls --format json
//!
//! # Use collections from a directory
//! photoview --data ./fixtures list
//!
//! # Show the ids accepted by -u / -a
//! photoview users
//! photoview albums -u 1
//! ```
//!
//! # Configuration
//!
//! Configuration is stored in the user's config directory
//! (`~/.config/photoview/config.toml` on Linux). It is read if present and
//! only written by `photoview config set`. An unreadable file is reported and
//! replaced by defaults, so `config set` can always repair it.

use photoview::{
    PhotoviewError, evaluate,
    cli::{Cli, Commands, ConfigCommands, FilterArgs},
    config::PhotoviewConfig,
    data::Dataset,
    logging,
    models::JoinedPhoto,
    output::{self, OutputFormat},
    ui::PhotoBrowser,
};
use std::io::{self, IsTerminal, Write};

type Result<T> = std::result::Result<T, PhotoviewError>;

/// Handle the browse command
///
/// # Errors
///
/// Returns `PhotoviewError` if the terminal cannot be driven.
fn handle_browse_command(dataset: &Dataset, filter_args: &FilterArgs, quiet: bool) -> Result<()> {
    let catalog = dataset.joined();
    let initial = filter_args.to_filter_state();

    let final_state = PhotoBrowser::new(dataset, &catalog).run(initial)?;

    if !quiet {
        let shown = evaluate(&catalog, &final_state).len();
        println!("{shown} of {} photo(s) matched the last filters", catalog.len());
    }
    Ok(())
}

/// Handle the list command
///
/// # Errors
///
/// Returns `PhotoviewError` if writing to stdout fails.
fn handle_list_command(
    dataset: &Dataset,
    filter_args: &FilterArgs,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let catalog = dataset.joined();
    let state = filter_args.to_filter_state();
    let visible: Vec<&JoinedPhoto> = evaluate(&catalog, &state);
    log::debug!("list: {} of {} photo(s) match {state:?}", visible.len(), catalog.len());

    let stdout = io::stdout();
    let color = stdout.is_terminal();
    let mut out = stdout.lock();
    output::write_photos(&mut out, &visible, format, color, quiet)?;
    out.flush()?;
    Ok(())
}

/// Handle the users command
fn handle_users_command(dataset: &Dataset, quiet: bool) {
    if dataset.users.is_empty() {
        if !quiet {
            println!("No users found");
        }
        return;
    }

    if !quiet {
        println!("Users:");
    }
    for user in &dataset.users {
        let album_count = dataset.albums.iter().filter(|a| a.user_id == user.id).count();
        println!("{}", output::user_line(user, album_count, quiet));
    }
}

/// Handle the albums command
fn handle_albums_command(dataset: &Dataset, owner: Option<u32>, quiet: bool) {
    let albums: Vec<_> = dataset
        .albums
        .iter()
        .filter(|album| owner.is_none_or(|id| album.user_id == id))
        .collect();

    if albums.is_empty() {
        if !quiet {
            println!("No albums found");
        }
        return;
    }

    if !quiet {
        println!("Albums:");
    }
    for album in albums {
        println!("{}", output::album_line(album, dataset.user(album.user_id), quiet));
    }
}

/// Handle config subcommands
///
/// # Errors
///
/// Returns `PhotoviewError` if the configuration key is invalid, value parsing fails,
/// or configuration save fails.
fn handle_config_command(mut config: PhotoviewConfig, command: &ConfigCommands, quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let (key, value) = setting.split_once('=').ok_or_else(|| {
                PhotoviewError::InvalidInput("Invalid format. Use: photoview config set key=value".into())
            })?;
            let (key, value) = (key.trim(), value.trim());

            config.set(key, value)?;
            config.save()?;
            if !quiet {
                println!("Set {key} = {}", config.get(key)?);
            }
        }
        ConfigCommands::Get { key } => {
            println!("{}", config.get(key)?);
        }
    }
    Ok(())
}

/// Main entry point for the photoview application
///
/// Parses command-line arguments, loads configuration (defaults if it is
/// unreadable), and dispatches to the appropriate command handler.
///
/// # Errors
///
/// Returns `PhotoviewError` if data loading fails or any command handler
/// returns an error.
fn main() -> Result<()> {
    let cli = Cli::parse_args();

    let config = PhotoviewConfig::load_or_default();

    let quiet = cli.quiet || config.quiet;

    logging::init(config.log_level);

    let command = cli.get_command();

    if let Commands::Config { command } = &command {
        return handle_config_command(config, command, quiet);
    }

    let data_dir = cli.data.as_ref().or(config.data_dir.as_ref());
    let dataset = Dataset::load(data_dir)?;

    match &command {
        Commands::Browse { filter_args } => handle_browse_command(&dataset, filter_args, quiet)?,
        Commands::List { filter_args, format } => {
            handle_list_command(&dataset, filter_args, *format, quiet)?;
        }
        Commands::Users => handle_users_command(&dataset, quiet),
        Commands::Albums { user } => handle_albums_command(&dataset, *user, quiet),
        Commands::Config { .. } => unreachable!(),
    }

    Ok(())
}
