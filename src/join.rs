//! Denormalization of the source collections
//!
//! Resolves each photo's album and each album's owner by id. Lookups use
//! id-indexed maps that keep the first record for a repeated id, which gives
//! the same result as a first-match linear scan.

use crate::models::{Album, JoinedPhoto, Photo, User};
use std::collections::HashMap;

/// Build a first-wins index over records keyed by `key`
fn index_by<T>(records: &[T], key: impl Fn(&T) -> u32) -> HashMap<u32, &T> {
    let mut index = HashMap::with_capacity(records.len());
    for record in records {
        index.entry(key(record)).or_insert(record);
    }
    index
}

/// Join photos with their albums and album owners
///
/// The result has exactly one entry per photo, in input order. Dangling
/// references leave `album` / `user` as `None`; they are never an error.
///
/// # Examples
///
/// ```
/// use photoview::{join, Album, Photo, Sex, User};
///
/// let photos = vec![Photo::new(1, 1, "Cat", "")];
/// let albums = vec![Album::new(1, 1, "A1")];
/// let users = vec![User::new(1, "Bob", Sex::Male)];
///
/// let joined = join(&photos, &albums, &users);
/// assert_eq!(joined[0].user_name(), "Bob");
/// ```
#[must_use]
pub fn join(photos: &[Photo], albums: &[Album], users: &[User]) -> Vec<JoinedPhoto> {
    let albums_by_id = index_by(albums, |album| album.id);
    let users_by_id = index_by(users, |user| user.id);

    photos
        .iter()
        .map(|photo| {
            let album = albums_by_id.get(&photo.album_id).copied();
            let user = album.and_then(|album| users_by_id.get(&album.user_id).copied());

            JoinedPhoto {
                id: photo.id,
                album_id: photo.album_id,
                title: photo.title.clone(),
                url: photo.url.clone(),
                album: album.cloned(),
                user: user.cloned(),
            }
        })
        .collect()
}
