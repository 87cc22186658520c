//! Testing utilities for photoview
//!
//! Fixture builders shared by the unit tests of several modules.
//!
//! Only available when compiled with `cfg(test)`.

use crate::data::Dataset;
use crate::join::join;
use crate::models::{Album, JoinedPhoto, Photo, Sex, User};

/// Two users, three albums, six photos, plus one photo with a dangling album
///
/// | album | owner       | photos    |
/// |-------|-------------|-----------|
/// | 1     | Bob (m)     | 1, 2      |
/// | 2     | Bob (m)     | 3         |
/// | 3     | Alice (f)   | 4, 5, 6   |
/// | 99    | (missing)   | 7         |
#[must_use]
pub fn sample_dataset() -> Dataset {
    Dataset::new(
        vec![User::new(1, "Bob", Sex::Male), User::new(2, "Alice", Sex::Female)],
        vec![
            Album::new(1, 1, "Cats"),
            Album::new(2, 1, "Travel"),
            Album::new(3, 2, "Family"),
        ],
        vec![
            Photo::new(1, 1, "Sleepy cat", "https://example.org/1"),
            Photo::new(2, 1, "Cat at the window", "https://example.org/2"),
            Photo::new(3, 2, "Sunset in Lisbon", "https://example.org/3"),
            Photo::new(4, 3, "Grandma", "https://example.org/4"),
            Photo::new(5, 3, "Birthday cake", "https://example.org/5"),
            Photo::new(6, 3, "Sunset picnic", "https://example.org/6"),
            Photo::new(7, 99, "Unsorted", "https://example.org/7"),
        ],
    )
}

/// [`sample_dataset`] joined
#[must_use]
pub fn sample_catalog() -> Vec<JoinedPhoto> {
    sample_dataset().joined()
}

/// One photo "Cat" in album "A1" owned by Bob
#[must_use]
pub fn single_photo_catalog() -> Vec<JoinedPhoto> {
    join(
        &[Photo::new(1, 1, "Cat", "")],
        &[Album::new(1, 1, "A1")],
        &[User::new(1, "Bob", Sex::Male)],
    )
}
