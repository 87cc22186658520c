//! Output formatting for CLI display
//!
//! Renders joined photos for the non-interactive `list` command as an
//! aligned table, JSON or CSV, and formats the `users` / `albums` listings.

use crate::models::{Album, JoinedPhoto, Sex, User};
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use std::io::Write;
use thiserror::Error;

/// Message shown when no photo passes the filters
pub const NO_MATCHES: &str = "No photos matching selected criteria";

/// Column headers of the photo table
pub const HEADERS: [&str; 4] = ["ID", "Photo name", "Album name", "User name"];

/// Errors that can occur while writing output
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Output format for the `list` command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned, colored table
    #[default]
    Table,
    /// Pretty-printed JSON array of joined records
    Json,
    /// CSV with one flat row per photo
    Csv,
}

/// Flat CSV row for a joined photo
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    id: u32,
    title: &'a str,
    album: &'a str,
    user: &'a str,
    sex: &'a str,
    url: &'a str,
}

impl<'a> From<&'a JoinedPhoto> for CsvRow<'a> {
    fn from(photo: &'a JoinedPhoto) -> Self {
        Self {
            id: photo.id,
            title: &photo.title,
            album: photo.album_title(),
            user: photo.user_name(),
            sex: photo.user_sex().map_or("", Sex::code),
            url: &photo.url,
        }
    }
}

/// Color a user name by sex (blue for m, red for f)
#[must_use]
pub fn colorize_user(name: &str, sex: Option<Sex>) -> String {
    match sex {
        Some(Sex::Male) => name.blue().to_string(),
        Some(Sex::Female) => name.red().to_string(),
        None => name.to_string(),
    }
}

/// Render the photo table as lines of text
///
/// Columns are padded to their widest cell. When `color` is set, IDs are bold
/// and user names are colored by sex. Absent album or owner render as
/// empty cells.
#[must_use]
pub fn photo_table(photos: &[&JoinedPhoto], color: bool) -> Vec<String> {
    let rows: Vec<[String; 4]> = photos
        .iter()
        .map(|photo| {
            [
                photo.id.to_string(),
                photo.title.clone(),
                photo.album_title().to_string(),
                photo.user_name().to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let pad = |cell: &str, width: usize| format!("{cell:<width$}");

    let header = HEADERS
        .iter()
        .zip(widths)
        .map(|(h, w)| pad(*h, w))
        .collect::<Vec<_>>()
        .join("  ");
    let mut lines = vec![
        if color { header.bold().to_string() } else { header },
    ];

    for (row, photo) in rows.iter().zip(photos) {
        let mut cells: Vec<String> = row.iter().zip(widths).map(|(c, w)| pad(c.as_str(), w)).collect();
        if color {
            cells[0] = cells[0].bold().to_string();
            cells[3] = colorize_user(&cells[3], photo.user_sex());
        }
        lines.push(cells.join("  ").trim_end().to_string());
    }

    lines
}

/// Write the visible photos in the requested format
///
/// # Errors
///
/// Returns `OutputError` if writing or serialization fails.
pub fn write_photos<W: Write>(
    out: &mut W,
    photos: &[&JoinedPhoto],
    format: OutputFormat,
    color: bool,
    quiet: bool,
) -> Result<(), OutputError> {
    match format {
        OutputFormat::Table => {
            if photos.is_empty() {
                if !quiet {
                    writeln!(out, "{NO_MATCHES}")?;
                }
                return Ok(());
            }
            for line in photo_table(photos, color) {
                writeln!(out, "{line}")?;
            }
            if !quiet {
                writeln!(out, "\n{} photo(s)", photos.len())?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, photos)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            for photo in photos {
                writer.serialize(CsvRow::from(*photo))?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}

/// Format a user for the `users` listing
#[must_use]
pub fn user_line(user: &User, album_count: usize, quiet: bool) -> String {
    if quiet {
        format!("{}\t{}", user.id, user.name)
    } else {
        format!("  {:>3}  {} ({}, {} album(s))", user.id, user.name, user.sex.code(), album_count)
    }
}

/// Format an album for the `albums` listing
#[must_use]
pub fn album_line(album: &Album, owner: Option<&User>, quiet: bool) -> String {
    if quiet {
        format!("{}\t{}", album.id, album.title)
    } else {
        let owner = owner.map_or("unknown owner", |user| user.name.as_str());
        format!("  {:>3}  {} [{}]", album.id, album.title, owner)
    }
}
