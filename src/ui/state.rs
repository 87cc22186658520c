//! View state for the ratatui TUI
//!
//! Holds the session's [`FilterStore`] plus purely presentational state:
//! which panel has focus, cursors inside the user and album bars, the edit
//! cursor in the search box and the table scroll position. Filter criteria
//! are never stored here; they are read back from the store.

use crate::data::Dataset;
use crate::filters::{ALL_USERS, FilterAction, FilterState, FilterStore};
use ratatui::layout::{Position, Rect};
use ratatui::widgets::TableState;

/// Panel that receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Users,
    #[default]
    Search,
    Albums,
    Reset,
    Table,
}

impl Focus {
    const ORDER: [Self; 5] = [Self::Users, Self::Search, Self::Albums, Self::Reset, Self::Table];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|&f| f == self).unwrap_or(0)
    }

    /// Next panel in tab order, wrapping around
    #[must_use]
    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    /// Previous panel in tab order, wrapping around
    #[must_use]
    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Current mode of the TUI application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Normal browsing mode
    #[default]
    Normal,
    /// Help overlay is visible
    Help,
}

/// Something a mouse click landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Entry of the user bar (0 = "All")
    UserChip(usize),
    /// Entry of the album bar (0 = "All")
    AlbumChip(usize),
    /// The `[x]` marker of the search box
    ClearQuery,
    Reset,
    /// Body row of the photo table, counted from the top of the viewport
    TableRow(usize),
    /// Elsewhere inside a panel
    Panel(Focus),
}

/// Clickable screen regions recorded during the last render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hitboxes {
    pub users: Rect,
    pub user_chips: Vec<Rect>,
    pub search: Rect,
    /// Only present while the query is non-empty
    pub clear: Option<Rect>,
    pub albums: Rect,
    pub album_chips: Vec<Rect>,
    pub reset: Rect,
    pub table: Rect,
    /// Table rows below the border and header
    pub table_body: Rect,
}

impl Hitboxes {
    /// Resolve a click position, innermost region first
    #[must_use]
    pub fn target(&self, column: u16, row: u16) -> Option<ClickTarget> {
        let at = Position::new(column, row);
        let chip = |chips: &[Rect]| chips.iter().position(|chip| chip.contains(at));

        if let Some(slot) = chip(&self.user_chips) {
            return Some(ClickTarget::UserChip(slot));
        }
        if let Some(slot) = chip(&self.album_chips) {
            return Some(ClickTarget::AlbumChip(slot));
        }
        if self.clear.is_some_and(|clear| clear.contains(at)) {
            return Some(ClickTarget::ClearQuery);
        }
        if self.reset.contains(at) {
            return Some(ClickTarget::Reset);
        }
        if self.table_body.contains(at) {
            return Some(ClickTarget::TableRow(usize::from(row - self.table_body.y)));
        }

        [
            (self.users, Focus::Users),
            (self.search, Focus::Search),
            (self.albums, Focus::Albums),
            (self.table, Focus::Table),
        ]
        .into_iter()
        .find(|(area, _)| area.contains(at))
        .map(|(_, focus)| ClickTarget::Panel(focus))
    }
}

/// Application state for the browser
#[derive(Debug)]
pub struct ViewState {
    /// Filter criteria, mutated only through dispatch
    pub filters: FilterStore,
    pub focus: Focus,
    pub mode: Mode,
    /// Cursor in the user bar; 0 is "All", `i + 1` is `user_ids[i]`
    pub user_cursor: usize,
    /// Cursor in the album bar; 0 is "All", `i + 1` is `album_ids[i]`
    pub album_cursor: usize,
    /// Byte offset of the edit cursor in the search query
    pub query_cursor: usize,
    /// Selected row and scroll offset of the photo table
    pub table: TableState,
    /// Number of rows currently visible (set during render)
    pub visible_count: usize,
    /// Height of the table body in rows (set during render)
    pub visible_height: usize,
    pub should_exit: bool,
    /// Clickable regions of the last frame
    pub hitboxes: Hitboxes,
    user_ids: Vec<u32>,
    album_ids: Vec<u32>,
}

impl ViewState {
    /// Create view state for a dataset, starting from `initial` filters
    #[must_use]
    pub fn new(dataset: &Dataset, initial: FilterState) -> Self {
        let query_cursor = initial.search_query.len();
        let user_ids: Vec<u32> = dataset.users.iter().map(|u| u.id).collect();
        let user_cursor = user_ids
            .iter()
            .position(|&id| id == initial.selected_user_id)
            .map_or(0, |i| i + 1);

        Self {
            filters: FilterStore::new(initial),
            focus: Focus::default(),
            mode: Mode::Normal,
            user_cursor,
            album_cursor: 0,
            query_cursor,
            table: TableState::default().with_selected(Some(0)),
            visible_count: 0,
            visible_height: 20, // Default, updated during render
            should_exit: false,
            hitboxes: Hitboxes::default(),
            user_ids,
            album_ids: dataset.albums.iter().map(|a| a.id).collect(),
        }
    }

    /// Current filter criteria
    #[must_use]
    pub const fn filter(&self) -> &FilterState {
        self.filters.state()
    }

    /// Dispatch a filter action; returns `true` if the filters changed
    ///
    /// A change moves the table back to its first row and keeps the search
    /// cursor inside the (possibly replaced) query.
    pub fn apply(&mut self, action: FilterAction) -> bool {
        if !self.filters.dispatch(action) {
            return false;
        }
        self.query_cursor = self.query_cursor.min(self.filter().search_query.len());
        self.table.select(Some(0));
        *self.table.offset_mut() = 0;
        true
    }

    /// Number of entries in the user bar, including "All"
    #[must_use]
    pub fn user_slots(&self) -> usize {
        self.user_ids.len() + 1
    }

    /// Number of entries in the album bar, including "All"
    #[must_use]
    pub fn album_slots(&self) -> usize {
        self.album_ids.len() + 1
    }

    pub fn user_cursor_left(&mut self) {
        self.user_cursor = self.user_cursor.saturating_sub(1);
    }

    pub fn user_cursor_right(&mut self) {
        if self.user_cursor + 1 < self.user_slots() {
            self.user_cursor += 1;
        }
    }

    pub fn album_cursor_left(&mut self) {
        self.album_cursor = self.album_cursor.saturating_sub(1);
    }

    pub fn album_cursor_right(&mut self) {
        if self.album_cursor + 1 < self.album_slots() {
            self.album_cursor += 1;
        }
    }

    /// Select the user under the cursor ("All" clears the user filter)
    pub fn activate_user(&mut self) -> bool {
        let id = match self.user_cursor {
            0 => ALL_USERS,
            n => self.user_ids[n - 1],
        };
        self.apply(FilterAction::SetSelectedUserId(id))
    }

    /// Toggle the album under the cursor ("All" clears the album selection)
    pub fn activate_album(&mut self) -> bool {
        match self.album_cursor {
            0 => self.apply(FilterAction::ClearSelectedAlbums),
            n => {
                let id = self.album_ids[n - 1];
                self.apply(FilterAction::ToggleAlbum(id))
            }
        }
    }

    /// Index of the selected user in the user bar, if it is listed
    #[must_use]
    pub fn selected_user_slot(&self) -> Option<usize> {
        let selected = self.filter().selected_user_id;
        if selected == ALL_USERS {
            return Some(0);
        }
        self.user_ids.iter().position(|&id| id == selected).map(|i| i + 1)
    }

    /// Insert a character at the search cursor
    pub fn query_push(&mut self, c: char) -> bool {
        let mut query = self.filter().search_query.clone();
        query.insert(self.query_cursor, c);
        let cursor = self.query_cursor + c.len_utf8();
        let changed = self.apply(FilterAction::SetSearchQuery(query));
        self.query_cursor = cursor;
        changed
    }

    /// Remove the character before the search cursor
    pub fn query_backspace(&mut self) -> bool {
        if self.query_cursor == 0 {
            return false;
        }
        let mut query = self.filter().search_query.clone();
        let prev = query[..self.query_cursor]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i);
        query.remove(prev);
        self.query_cursor = prev;
        self.apply(FilterAction::SetSearchQuery(query))
    }

    /// Remove the character under the search cursor
    pub fn query_delete(&mut self) -> bool {
        if self.query_cursor >= self.filter().search_query.len() {
            return false;
        }
        let mut query = self.filter().search_query.clone();
        query.remove(self.query_cursor);
        self.apply(FilterAction::SetSearchQuery(query))
    }

    pub fn query_cursor_left(&mut self) {
        let query = &self.filters.state().search_query;
        if self.query_cursor > 0 {
            self.query_cursor = query[..self.query_cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
        }
    }

    pub fn query_cursor_right(&mut self) {
        let query = &self.filters.state().search_query;
        if self.query_cursor < query.len() {
            self.query_cursor = query[self.query_cursor..]
                .char_indices()
                .nth(1)
                .map_or(query.len(), |(i, _)| self.query_cursor + i);
        }
    }

    pub fn query_cursor_home(&mut self) {
        self.query_cursor = 0;
    }

    pub fn query_cursor_end(&mut self) {
        self.query_cursor = self.filter().search_query.len();
    }

    /// Empty the search box
    pub fn query_clear(&mut self) -> bool {
        let changed = self.apply(FilterAction::SetSearchQuery(String::new()));
        self.query_cursor = 0;
        changed
    }

    /// Record the visible row count after a render, clamping the selection
    pub fn sync_visible(&mut self, count: usize) {
        self.visible_count = count;
        let selected = self.table.selected().unwrap_or(0);
        self.table
            .select(Some(selected.min(count.saturating_sub(1))));
    }

    /// Select a table row, clamped to the visible rows
    pub fn select_row(&mut self, row: usize) {
        let max = self.visible_count.saturating_sub(1);
        self.table.select(Some(row.min(max)));
    }

    pub fn row_up(&mut self) {
        let row = self.table.selected().unwrap_or(0);
        self.select_row(row.saturating_sub(1));
    }

    pub fn row_down(&mut self) {
        let row = self.table.selected().unwrap_or(0);
        self.select_row(row + 1);
    }

    pub fn page_up(&mut self) {
        let row = self.table.selected().unwrap_or(0);
        self.select_row(row.saturating_sub(self.visible_height));
    }

    pub fn page_down(&mut self) {
        let row = self.table.selected().unwrap_or(0);
        self.select_row(row + self.visible_height);
    }

    pub fn jump_to_start(&mut self) {
        self.select_row(0);
    }

    pub fn jump_to_end(&mut self) {
        self.select_row(self.visible_count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_dataset;

    fn make_state() -> ViewState {
        ViewState::new(&sample_dataset(), FilterState::default())
    }

    #[test]
    fn test_focus_cycle() {
        let mut focus = Focus::Users;
        for _ in 0..5 {
            focus = focus.next();
        }
        assert_eq!(focus, Focus::Users);
        assert_eq!(Focus::Users.prev(), Focus::Table);
        assert_eq!(Focus::Search.next(), Focus::Albums);
    }

    #[test]
    fn test_initial_user_cursor_follows_filter() {
        let initial = FilterState {
            selected_user_id: 2,
            ..FilterState::default()
        };
        let state = ViewState::new(&sample_dataset(), initial);
        assert_eq!(state.user_cursor, 2);
        assert_eq!(state.selected_user_slot(), Some(2));
    }

    #[test]
    fn test_activate_user_and_all() {
        let mut state = make_state();
        state.user_cursor_right();
        assert!(state.activate_user());
        assert_eq!(state.filter().selected_user_id, 1);

        state.user_cursor_left();
        state.user_cursor_left();
        assert!(state.activate_user());
        assert_eq!(state.filter().selected_user_id, ALL_USERS);
    }

    #[test]
    fn test_user_cursor_is_clamped() {
        let mut state = make_state();
        for _ in 0..10 {
            state.user_cursor_right();
        }
        assert_eq!(state.user_cursor, state.user_slots() - 1);
    }

    #[test]
    fn test_activate_album_toggles_and_clears() {
        let mut state = make_state();
        state.album_cursor_right();
        state.activate_album();
        state.album_cursor_right();
        state.activate_album();
        assert_eq!(state.filter().selected_album_ids, vec![1, 2]);

        state.activate_album();
        assert_eq!(state.filter().selected_album_ids, vec![1]);

        state.album_cursor = 0;
        state.activate_album();
        assert!(state.filter().selected_album_ids.is_empty());
    }

    #[test]
    fn test_query_editing() {
        let mut state = make_state();
        for c in "cat".chars() {
            state.query_push(c);
        }
        assert_eq!(state.filter().search_query, "cat");
        assert_eq!(state.query_cursor, 3);

        state.query_cursor_left();
        state.query_push('r');
        assert_eq!(state.filter().search_query, "cart");

        state.query_cursor_end();
        state.query_backspace();
        assert_eq!(state.filter().search_query, "car");

        state.query_cursor_home();
        state.query_delete();
        assert_eq!(state.filter().search_query, "ar");

        assert!(state.query_clear());
        assert_eq!(state.filter().search_query, "");
        assert_eq!(state.query_cursor, 0);
    }

    #[test]
    fn test_query_editing_multibyte() {
        let mut state = make_state();
        state.query_push('é');
        state.query_push('t');
        state.query_push('é');
        assert_eq!(state.query_cursor, "été".len());

        state.query_cursor_left();
        state.query_cursor_left();
        assert_eq!(state.query_cursor, "é".len());
        state.query_backspace();
        assert_eq!(state.filter().search_query, "té");
    }

    #[test]
    fn test_clear_all_resets_query_cursor() {
        let mut state = make_state();
        state.query_push('x');
        state.query_push('y');
        assert!(state.apply(FilterAction::ClearAll));
        assert_eq!(state.query_cursor, 0);
    }

    #[test]
    fn test_table_navigation_is_clamped() {
        let mut state = make_state();
        state.sync_visible(3);
        state.visible_height = 2;

        state.row_down();
        state.row_down();
        state.row_down();
        assert_eq!(state.table.selected(), Some(2));

        state.page_up();
        assert_eq!(state.table.selected(), Some(0));

        state.jump_to_end();
        assert_eq!(state.table.selected(), Some(2));

        state.sync_visible(1);
        assert_eq!(state.table.selected(), Some(0));
    }

    #[test]
    fn test_hitbox_resolution() {
        let hitboxes = Hitboxes {
            users: Rect::new(0, 0, 40, 3),
            user_chips: vec![Rect::new(2, 1, 5, 1), Rect::new(9, 1, 5, 1)],
            search: Rect::new(0, 3, 40, 3),
            clear: Some(Rect::new(35, 4, 4, 1)),
            reset: Rect::new(0, 6, 40, 3),
            table: Rect::new(0, 9, 40, 10),
            table_body: Rect::new(1, 11, 38, 7),
            ..Hitboxes::default()
        };

        assert_eq!(hitboxes.target(10, 1), Some(ClickTarget::UserChip(1)));
        assert_eq!(hitboxes.target(20, 1), Some(ClickTarget::Panel(Focus::Users)));
        assert_eq!(hitboxes.target(36, 4), Some(ClickTarget::ClearQuery));
        assert_eq!(hitboxes.target(5, 4), Some(ClickTarget::Panel(Focus::Search)));
        assert_eq!(hitboxes.target(5, 7), Some(ClickTarget::Reset));
        assert_eq!(hitboxes.target(5, 13), Some(ClickTarget::TableRow(2)));
        assert_eq!(hitboxes.target(5, 10), Some(ClickTarget::Panel(Focus::Table)));
        assert_eq!(hitboxes.target(50, 1), None);
    }

    #[test]
    fn test_filter_change_resets_table() {
        let mut state = make_state();
        state.sync_visible(5);
        state.row_down();
        state.row_down();

        state.apply(FilterAction::SetSelectedUserId(1));
        assert_eq!(state.table.selected(), Some(0));
    }
}
