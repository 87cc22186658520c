//! Event handling for the ratatui TUI
//!
//! Maps keyboard and mouse events onto view-state changes and filter actions.
//! Handlers are plain functions over [`ViewState`] so they can be exercised
//! without a terminal.

use super::state::{ClickTarget, Focus, Mode, ViewState};
use crate::filters::FilterAction;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use std::time::Duration;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// View state changed, redraw
    Continue,
    /// Filter criteria changed, the visible set must be recomputed
    FilterChanged,
    /// Leave the browser
    Exit,
    /// No action taken
    Ignored,
}

impl EventResult {
    const fn from_change(changed: bool) -> Self {
        if changed { Self::FilterChanged } else { Self::Continue }
    }
}

/// Keys that behave the same regardless of the focused panel
fn handle_global(state: &mut ViewState, key: KeyEvent) -> Option<EventResult> {
    let result = match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            state.should_exit = true;
            EventResult::Exit
        }
        (KeyCode::Char('r'), KeyModifiers::CONTROL) => {
            EventResult::from_change(state.apply(FilterAction::ClearAll))
        }
        (KeyCode::Tab, _) => {
            state.focus = state.focus.next();
            EventResult::Continue
        }
        (KeyCode::BackTab, _) => {
            state.focus = state.focus.prev();
            EventResult::Continue
        }
        (KeyCode::F(1), _) => {
            state.mode = Mode::Help;
            EventResult::Continue
        }
        _ => return None,
    };
    Some(result)
}

/// `q` / `Esc` in panels without text input
fn exit(state: &mut ViewState) -> EventResult {
    state.should_exit = true;
    EventResult::Exit
}

fn is_activate(code: KeyCode) -> bool {
    matches!(code, KeyCode::Enter | KeyCode::Char(' '))
}

fn handle_search(state: &mut ViewState, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => {
            if state.filter().search_query.is_empty() {
                exit(state)
            } else {
                EventResult::from_change(state.query_clear())
            }
        }
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => EventResult::from_change(state.query_clear()),
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            EventResult::from_change(state.query_push(c))
        }
        (KeyCode::Backspace, _) => {
            if state.query_cursor == 0 {
                EventResult::Ignored
            } else {
                EventResult::from_change(state.query_backspace())
            }
        }
        (KeyCode::Delete, _) => EventResult::from_change(state.query_delete()),
        (KeyCode::Left, _) => {
            state.query_cursor_left();
            EventResult::Continue
        }
        (KeyCode::Right, _) => {
            state.query_cursor_right();
            EventResult::Continue
        }
        (KeyCode::Home, _) => {
            state.query_cursor_home();
            EventResult::Continue
        }
        (KeyCode::End, _) => {
            state.query_cursor_end();
            EventResult::Continue
        }
        (KeyCode::Down | KeyCode::Enter, _) => {
            state.focus = Focus::Table;
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

fn handle_users(state: &mut ViewState, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => exit(state),
        KeyCode::Left | KeyCode::Char('h') => {
            state.user_cursor_left();
            EventResult::Continue
        }
        KeyCode::Right | KeyCode::Char('l') => {
            state.user_cursor_right();
            EventResult::Continue
        }
        code if is_activate(code) => EventResult::from_change(state.activate_user()),
        _ => EventResult::Ignored,
    }
}

fn handle_albums(state: &mut ViewState, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => exit(state),
        KeyCode::Left | KeyCode::Char('h') => {
            state.album_cursor_left();
            EventResult::Continue
        }
        KeyCode::Right | KeyCode::Char('l') => {
            state.album_cursor_right();
            EventResult::Continue
        }
        code if is_activate(code) => EventResult::from_change(state.activate_album()),
        _ => EventResult::Ignored,
    }
}

fn handle_reset(state: &mut ViewState, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => exit(state),
        code if is_activate(code) => EventResult::from_change(state.apply(FilterAction::ClearAll)),
        _ => EventResult::Ignored,
    }
}

fn handle_table(state: &mut ViewState, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => return exit(state),
        KeyCode::Up | KeyCode::Char('k') => state.row_up(),
        KeyCode::Down | KeyCode::Char('j') => state.row_down(),
        KeyCode::PageUp => state.page_up(),
        KeyCode::PageDown => state.page_down(),
        KeyCode::Home | KeyCode::Char('g') => state.jump_to_start(),
        KeyCode::End | KeyCode::Char('G') => state.jump_to_end(),
        _ => return EventResult::Ignored,
    }
    EventResult::Continue
}

/// Handle a key press in the current mode and focus
pub fn handle_key(state: &mut ViewState, key: KeyEvent) -> EventResult {
    if state.mode == Mode::Help {
        // Any key closes help
        state.mode = Mode::Normal;
        return EventResult::Continue;
    }

    if let Some(result) = handle_global(state, key) {
        return result;
    }

    match state.focus {
        Focus::Search => handle_search(state, key),
        Focus::Users => handle_users(state, key),
        Focus::Albums => handle_albums(state, key),
        Focus::Reset => handle_reset(state, key),
        Focus::Table => handle_table(state, key),
    }
}

/// Act on a left click: the clicked panel takes focus and its control fires
fn handle_click(state: &mut ViewState, column: u16, row: u16) -> EventResult {
    let Some(target) = state.hitboxes.target(column, row) else {
        return EventResult::Ignored;
    };

    match target {
        ClickTarget::UserChip(slot) => {
            state.focus = Focus::Users;
            state.user_cursor = slot;
            EventResult::from_change(state.activate_user())
        }
        ClickTarget::AlbumChip(slot) => {
            state.focus = Focus::Albums;
            state.album_cursor = slot;
            EventResult::from_change(state.activate_album())
        }
        ClickTarget::ClearQuery => {
            state.focus = Focus::Search;
            EventResult::from_change(state.query_clear())
        }
        ClickTarget::Reset => {
            state.focus = Focus::Reset;
            EventResult::from_change(state.apply(FilterAction::ClearAll))
        }
        ClickTarget::TableRow(row) => {
            state.focus = Focus::Table;
            state.select_row(state.table.offset() + row);
            EventResult::Continue
        }
        ClickTarget::Panel(focus) => {
            state.focus = focus;
            EventResult::Continue
        }
    }
}

/// Handle mouse events
pub fn handle_mouse(state: &mut ViewState, mouse: MouseEvent) -> EventResult {
    if state.mode == Mode::Help {
        if matches!(mouse.kind, MouseEventKind::Down(_)) {
            state.mode = Mode::Normal;
            return EventResult::Continue;
        }
        return EventResult::Ignored;
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_click(state, mouse.column, mouse.row),
        MouseEventKind::ScrollUp => {
            state.row_up();
            EventResult::Continue
        }
        MouseEventKind::ScrollDown => {
            state.row_down();
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(state: &mut ViewState, timeout: Duration) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Ignored);
    }

    let result = match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key),
        Event::Mouse(mouse) => handle_mouse(state, mouse),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };

    Ok(result)
}
