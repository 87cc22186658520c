//! Filter state, actions and the store that owns them
//!
//! `FilterState` is a plain value. Every change goes through a
//! [`FilterAction`] applied by [`FilterState::reduce`], so transitions are
//! pure and testable on their own. [`FilterStore`] holds the single live
//! state for a session and notifies subscribers after each change.

use serde::{Deserialize, Serialize};

/// User id sentinel meaning "no user filter"
pub const ALL_USERS: u32 = 0;

/// Current filter criteria
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Free-text search, stored verbatim
    pub search_query: String,
    /// Selected owner id, [`ALL_USERS`] when unfiltered
    pub selected_user_id: u32,
    /// Selected album ids in insertion order; empty when unfiltered
    pub selected_album_ids: Vec<u32>,
}

/// A single filter transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    /// Replace the search text verbatim
    SetSearchQuery(String),
    /// Replace the selected owner (0 clears it)
    SetSelectedUserId(u32),
    /// Add the album id if absent, remove it if present
    ToggleAlbum(u32),
    /// Empty the album selection
    ClearSelectedAlbums,
    /// Reset every criterion
    ClearAll,
}

impl FilterState {
    /// Apply an action, returning the next state
    ///
    /// # Examples
    ///
    /// ```
    /// use photoview::{FilterAction, FilterState};
    ///
    /// let state = FilterState::default()
    ///     .reduce(FilterAction::ToggleAlbum(3))
    ///     .reduce(FilterAction::SetSearchQuery("cat".into()));
    /// assert_eq!(state.selected_album_ids, vec![3]);
    ///
    /// let cleared = state.reduce(FilterAction::ClearAll);
    /// assert_eq!(cleared, FilterState::default());
    /// ```
    #[must_use]
    pub fn reduce(mut self, action: FilterAction) -> Self {
        match action {
            FilterAction::SetSearchQuery(text) => self.search_query = text,
            FilterAction::SetSelectedUserId(id) => self.selected_user_id = id,
            FilterAction::ToggleAlbum(id) => {
                if let Some(pos) = self.selected_album_ids.iter().position(|&a| a == id) {
                    self.selected_album_ids.remove(pos);
                } else {
                    self.selected_album_ids.push(id);
                }
            }
            FilterAction::ClearSelectedAlbums => self.selected_album_ids.clear(),
            FilterAction::ClearAll => self = Self::default(),
        }
        self
    }

    /// Whether `id` is in the album selection
    #[must_use]
    pub fn is_album_selected(&self, id: u32) -> bool {
        self.selected_album_ids.contains(&id)
    }

    /// Whether the user filter is active
    #[must_use]
    pub const fn has_user_filter(&self) -> bool {
        self.selected_user_id != ALL_USERS
    }

    /// Whether any criterion is set
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.search_query.is_empty()
            || self.has_user_filter()
            || !self.selected_album_ids.is_empty()
    }
}

/// Callback invoked with the new state after every change
pub type Subscriber = Box<dyn FnMut(&FilterState)>;

/// Owner of the live filter state for one session
///
/// Mutation only happens through [`FilterStore::dispatch`]. Each dispatch that
/// changes the state bumps [`FilterStore::revision`] and runs the subscribers
/// in registration order before returning.
pub struct FilterStore {
    state: FilterState,
    revision: u64,
    subscribers: Vec<Subscriber>,
}

impl std::fmt::Debug for FilterStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterStore")
            .field("state", &self.state)
            .field("revision", &self.revision)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl Default for FilterStore {
    fn default() -> Self {
        Self::new(FilterState::default())
    }
}

impl FilterStore {
    /// Create a store with an initial state
    #[must_use]
    pub fn new(initial: FilterState) -> Self {
        Self {
            state: initial,
            revision: 0,
            subscribers: Vec::new(),
        }
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> &FilterState {
        &self.state
    }

    /// Number of changes applied so far
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Register a change listener
    pub fn subscribe(&mut self, subscriber: impl FnMut(&FilterState) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Apply an action; returns `true` if the state changed
    pub fn dispatch(&mut self, action: FilterAction) -> bool {
        log::debug!("filter action: {action:?}");

        let next = self.state.clone().reduce(action);
        if next == self.state {
            return false;
        }

        self.state = next;
        self.revision += 1;
        for subscriber in &mut self.subscribers {
            subscriber(&self.state);
        }
        true
    }

    pub fn set_search_query(&mut self, text: impl Into<String>) -> bool {
        self.dispatch(FilterAction::SetSearchQuery(text.into()))
    }

    pub fn set_selected_user_id(&mut self, id: u32) -> bool {
        self.dispatch(FilterAction::SetSelectedUserId(id))
    }

    pub fn toggle_album_filter(&mut self, id: u32) -> bool {
        self.dispatch(FilterAction::ToggleAlbum(id))
    }

    pub fn clear_selected_albums(&mut self) -> bool {
        self.dispatch(FilterAction::ClearSelectedAlbums)
    }

    pub fn clear_all_filters(&mut self) -> bool {
        self.dispatch(FilterAction::ClearAll)
    }
}
