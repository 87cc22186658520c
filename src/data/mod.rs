//! Source collections for the catalog
//!
//! A [`Dataset`] holds the three flat collections. It comes either from the
//! fixture set compiled into the binary or from a directory containing
//! `users.json`, `albums.json` and `photos.json`.

mod error;

pub use error::{DataError, Result};

use crate::join::join;
use crate::models::{Album, JoinedPhoto, Photo, User};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

pub const USERS_FILE: &str = "users.json";
pub const ALBUMS_FILE: &str = "albums.json";
pub const PHOTOS_FILE: &str = "photos.json";

const BUILTIN_USERS: &str = include_str!("fixtures/users.json");
const BUILTIN_ALBUMS: &str = include_str!("fixtures/albums.json");
const BUILTIN_PHOTOS: &str = include_str!("fixtures/photos.json");

/// The users, albums and photos a session browses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    pub users: Vec<User>,
    pub albums: Vec<Album>,
    pub photos: Vec<Photo>,
}

/// Parse a JSON array, tagging failures with a (possibly virtual) path
fn parse_collection<T: DeserializeOwned>(text: &str, path: &Path) -> Result<Vec<T>> {
    serde_json::from_str(text).map_err(|source| DataError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse one collection file
fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let text = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_collection(&text, path)
}

impl Dataset {
    /// Create a dataset from in-memory collections
    #[must_use]
    pub const fn new(users: Vec<User>, albums: Vec<Album>, photos: Vec<Photo>) -> Self {
        Self {
            users,
            albums,
            photos,
        }
    }

    /// The fixture set shipped with the binary
    ///
    /// # Errors
    ///
    /// Returns `DataError::Parse` if an embedded fixture is malformed.
    pub fn builtin() -> Result<Self> {
        let dataset = Self {
            users: parse_collection(BUILTIN_USERS, Path::new(USERS_FILE))?,
            albums: parse_collection(BUILTIN_ALBUMS, Path::new(ALBUMS_FILE))?,
            photos: parse_collection(BUILTIN_PHOTOS, Path::new(PHOTOS_FILE))?,
        };
        log::debug!("loaded builtin dataset: {}", dataset.summary());
        Ok(dataset)
    }

    /// Load the three collections from `dir`
    ///
    /// # Errors
    ///
    /// Returns `DataError::MissingDirectory` if `dir` does not exist, and
    /// `DataError::Io` / `DataError::Parse` if a collection file cannot be
    /// read or parsed.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(DataError::MissingDirectory(dir.to_path_buf()));
        }

        let dataset = Self {
            users: read_collection(&dir.join(USERS_FILE))?,
            albums: read_collection(&dir.join(ALBUMS_FILE))?,
            photos: read_collection(&dir.join(PHOTOS_FILE))?,
        };
        log::info!("loaded dataset from {}: {}", dir.display(), dataset.summary());
        Ok(dataset)
    }

    /// Load from `dir` when given, otherwise fall back to the builtin set
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`Dataset::load_dir`] and [`Dataset::builtin`].
    pub fn load(dir: Option<&PathBuf>) -> Result<Self> {
        match dir {
            Some(dir) => Self::load_dir(dir),
            None => Self::builtin(),
        }
    }

    /// Join photos with their albums and owners
    #[must_use]
    pub fn joined(&self) -> Vec<JoinedPhoto> {
        let joined = join(&self.photos, &self.albums, &self.users);
        let unresolved = joined.iter().filter(|p| p.album.is_none() || p.user.is_none()).count();
        if unresolved > 0 {
            log::warn!("{unresolved} photo(s) reference a missing album or owner");
        }
        joined
    }

    /// Look up a user by id
    #[must_use]
    pub fn user(&self, id: u32) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Look up an album by id
    #[must_use]
    pub fn album(&self, id: u32) -> Option<&Album> {
        self.albums.iter().find(|album| album.id == id)
    }

    fn summary(&self) -> String {
        format!(
            "{} user(s), {} album(s), {} photo(s)",
            self.users.len(),
            self.albums.len(),
            self.photos.len()
        )
    }
}
