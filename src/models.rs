//! Record types for the photo catalog
//!
//! `User`, `Album` and `Photo` mirror the flat source collections, with field
//! names serialized the way the source data spells them (`userId`, `albumId`).
//! `JoinedPhoto` is the denormalized view produced by [`crate::join`].

use serde::{Deserialize, Serialize};

/// Sex of a user, used only to pick the styling of the user name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    /// Rendered with the "link" color
    #[serde(rename = "m")]
    Male,
    /// Rendered with the "danger" color
    #[serde(rename = "f")]
    Female,
}

impl Sex {
    /// Short code as stored in the source data
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Male => "m",
            Self::Female => "f",
        }
    }
}

/// Owner of one or more albums
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub sex: Sex,
}

impl User {
    /// Create a new user
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>, sex: Sex) -> Self {
        Self {
            id,
            name: name.into(),
            sex,
        }
    }
}

/// An album, owned by the user referenced by `user_id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: u32,
    pub user_id: u32,
    pub title: String,
}

impl Album {
    /// Create a new album
    #[must_use]
    pub fn new(id: u32, user_id: u32, title: impl Into<String>) -> Self {
        Self {
            id,
            user_id,
            title: title.into(),
        }
    }
}

/// A photo, placed in the album referenced by `album_id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: u32,
    pub album_id: u32,
    pub title: String,
    pub url: String,
}

impl Photo {
    /// Create a new photo
    #[must_use]
    pub fn new(id: u32, album_id: u32, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id,
            album_id,
            title: title.into(),
            url: url.into(),
        }
    }
}

/// A photo enriched with its resolved album and owner
///
/// `album` is `None` when no album carries the photo's `album_id`; `user` is
/// `None` when the album is missing or no user carries the album's `user_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinedPhoto {
    pub id: u32,
    pub album_id: u32,
    pub title: String,
    pub url: String,
    pub album: Option<Album>,
    pub user: Option<User>,
}

impl JoinedPhoto {
    /// Album id used for album filtering (0 when the album is unresolved)
    #[must_use]
    pub fn album_key(&self) -> u32 {
        self.album.as_ref().map_or(0, |album| album.id)
    }

    /// Album title, or an empty string when the album is unresolved
    #[must_use]
    pub fn album_title(&self) -> &str {
        self.album.as_ref().map_or("", |album| album.title.as_str())
    }

    /// Owner name, or an empty string when the owner is unresolved
    #[must_use]
    pub fn user_name(&self) -> &str {
        self.user.as_ref().map_or("", |user| user.name.as_str())
    }

    /// Owner sex, if the owner is resolved
    #[must_use]
    pub fn user_sex(&self) -> Option<Sex> {
        self.user.as_ref().map(|user| user.sex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_album_deserializes_camel_case() {
        let album: Album = serde_json::from_str(r#"{"id": 3, "userId": 7, "title": "Trip"}"#).unwrap();
        assert_eq!(album, Album::new(3, 7, "Trip"));
    }

    #[test]
    fn test_photo_deserializes_camel_case() {
        let photo: Photo = serde_json::from_str(
            r#"{"id": 1, "albumId": 2, "title": "Cat", "url": "https://example.org/cat.png"}"#,
        )
        .unwrap();
        assert_eq!(photo.album_id, 2);
        assert_eq!(photo.title, "Cat");
    }

    #[test]
    fn test_sex_codes() {
        let user: User = serde_json::from_str(r#"{"id": 1, "name": "Anna", "sex": "f"}"#).unwrap();
        assert_eq!(user.sex, Sex::Female);
        assert_eq!(Sex::Male.code(), "m");
        assert!(serde_json::from_str::<Sex>(r#""x""#).is_err());
    }

    #[test]
    fn test_joined_accessors_without_references() {
        let joined = JoinedPhoto {
            id: 1,
            album_id: 99,
            title: "Orphan".into(),
            url: String::new(),
            album: None,
            user: None,
        };
        assert_eq!(joined.album_key(), 0);
        assert_eq!(joined.album_title(), "");
        assert_eq!(joined.user_name(), "");
        assert_eq!(joined.user_sex(), None);
    }
}
