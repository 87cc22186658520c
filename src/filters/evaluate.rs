//! Visible-subset computation over joined photos

use super::state::FilterState;
use crate::models::JoinedPhoto;

/// A `FilterState` prepared for repeated matching
///
/// Lower-cases the search query once instead of once per photo.
#[derive(Debug)]
pub struct Matcher<'a> {
    query: String,
    state: &'a FilterState,
}

impl<'a> Matcher<'a> {
    #[must_use]
    pub fn new(state: &'a FilterState) -> Self {
        Self {
            query: state.search_query.to_lowercase(),
            state,
        }
    }

    /// Title contains the query, ignoring case
    #[must_use]
    pub fn matches_text(&self, photo: &JoinedPhoto) -> bool {
        self.query.is_empty() || photo.title.to_lowercase().contains(&self.query)
    }

    /// Owner equals the selected user, or no user is selected
    #[must_use]
    pub fn matches_user(&self, photo: &JoinedPhoto) -> bool {
        if !self.state.has_user_filter() {
            return true;
        }
        photo
            .user
            .as_ref()
            .is_some_and(|user| user.id == self.state.selected_user_id)
    }

    /// Album is in the selection, or no album is selected
    ///
    /// A photo without a resolved album is matched as album id 0.
    #[must_use]
    pub fn matches_album(&self, photo: &JoinedPhoto) -> bool {
        self.state.selected_album_ids.is_empty()
            || self.state.is_album_selected(photo.album_key())
    }

    #[must_use]
    pub fn matches(&self, photo: &JoinedPhoto) -> bool {
        self.matches_text(photo) && self.matches_user(photo) && self.matches_album(photo)
    }
}

/// Photos passing every filter criterion, in input order
///
/// # Examples
///
/// ```
/// use photoview::{evaluate, join, Album, FilterAction, FilterState, Photo, Sex, User};
///
/// let joined = join(
///     &[Photo::new(1, 1, "Sunset", ""), Photo::new(2, 1, "Dawn", "")],
///     &[Album::new(1, 1, "A1")],
///     &[User::new(1, "Bob", Sex::Male)],
/// );
/// let state = FilterState::default().reduce(FilterAction::SetSearchQuery("SET".into()));
///
/// let visible = evaluate(&joined, &state);
/// assert_eq!(visible.len(), 1);
/// assert_eq!(visible[0].title, "Sunset");
/// ```
#[must_use]
pub fn evaluate<'a>(joined: &'a [JoinedPhoto], state: &FilterState) -> Vec<&'a JoinedPhoto> {
    let matcher = Matcher::new(state);
    joined.iter().filter(|photo| matcher.matches(photo)).collect()
}
