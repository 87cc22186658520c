//! Interactive photo browser
//!
//! Owns the terminal session and the event loop. Every frame re-evaluates
//! the joined catalog against the current filters, so the table is always
//! derived from the store and never cached.

use super::error::{Result, UiError};
use super::events::{EventResult, poll_and_handle};
use super::state::{Focus, Hitboxes, Mode, ViewState};
use super::theme::Theme;
use super::widgets::{AlbumBar, HelpOverlay, PhotoTable, ResetButton, SearchBar, StatusBar, UserTabs};
use crate::data::Dataset;
use crate::filters::{FilterState, evaluate};
use crate::models::JoinedPhoto;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    tty::IsTty,
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::Paragraph,
};
use std::cell::Cell;
use std::io::{self, Stdout};
use std::rc::Rc;
use std::time::Duration;

const TITLE: &str = "Photos from albums";
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Ratatui-based browser over a joined catalog
pub struct PhotoBrowser<'a> {
    dataset: &'a Dataset,
    catalog: &'a [JoinedPhoto],
    theme: Theme,
}

impl<'a> PhotoBrowser<'a> {
    /// Create a browser for `catalog`, the joined form of `dataset`
    #[must_use]
    pub fn new(dataset: &'a Dataset, catalog: &'a [JoinedPhoto]) -> Self {
        Self {
            dataset,
            catalog,
            theme: Theme::default(),
        }
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        let mut stdout = io::stdout();
        if !stdout.is_tty() {
            return Err(UiError::TerminalUnavailable(
                "stdout is not a terminal; use `photoview list` instead".into(),
            ));
        }

        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
        Ok(())
    }

    /// Run the browser until the user quits
    ///
    /// Returns the filter state at exit.
    ///
    /// # Errors
    ///
    /// Returns `UiError` if the terminal cannot be set up, drawn to, or read from.
    pub fn run(&self, initial: FilterState) -> Result<FilterState> {
        log::info!("starting browser over {} photo(s)", self.catalog.len());

        let mut terminal = Self::setup_terminal()?;
        let result = self.run_loop(&mut terminal, initial);
        let cleanup = Self::cleanup_terminal();

        let final_state = result?;
        cleanup?;
        log::info!("browser closed with filters {final_state:?}");
        Ok(final_state)
    }

    /// Run the event loop
    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        initial: FilterState,
    ) -> Result<FilterState> {
        let mut state = ViewState::new(self.dataset, initial);

        let filters_changed = Rc::new(Cell::new(false));
        let flag = Rc::clone(&filters_changed);
        state.filters.subscribe(move |_| flag.set(true));

        let mut redraw = true;
        while !state.should_exit {
            if redraw || filters_changed.replace(false) {
                terminal.draw(|frame| self.render(frame, &mut state))?;
                redraw = false;
            }

            match poll_and_handle(&mut state, POLL_INTERVAL)? {
                EventResult::Ignored | EventResult::FilterChanged => {}
                EventResult::Continue | EventResult::Exit => redraw = true,
            }
        }

        Ok(state.filter().clone())
    }

    /// Rows of the photo table below its top border and header
    fn table_body(area: Rect) -> Rect {
        Rect::new(
            area.x.saturating_add(1),
            area.y.saturating_add(2),
            area.width.saturating_sub(2),
            area.height.saturating_sub(3),
        )
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame, state: &mut ViewState) {
        let theme = &self.theme;
        let visible = evaluate(self.catalog, state.filter());
        state.sync_visible(visible.len());

        let area = frame.area();
        let album_height = AlbumBar::required_height(&self.dataset.albums, area.width)
            .min((area.height / 4).max(3));

        let [title_area, users_area, search_area, albums_area, reset_area, table_area, status_area] =
            Layout::vertical([
                Constraint::Length(1),            // Title
                Constraint::Length(3),            // User tabs
                Constraint::Length(3),            // Search bar
                Constraint::Length(album_height), // Album chips
                Constraint::Length(3),            // Reset button
                Constraint::Min(4),               // Photo table
                Constraint::Length(1),            // Status line
            ])
            .areas(area);

        frame.render_widget(
            Paragraph::new(Line::styled(format!(" {TITLE}"), theme.title_style())),
            title_area,
        );

        let users = UserTabs::new(
            &self.dataset.users,
            state.selected_user_slot(),
            state.user_cursor,
            theme,
        )
        .focused(state.focus == Focus::Users);
        frame.render_widget(users, users_area);

        let search = SearchBar::new(&state.filter().search_query, state.query_cursor, theme)
            .focused(state.focus == Focus::Search);
        frame.render_widget(search, search_area);

        let albums = AlbumBar::new(&self.dataset.albums, state.filter(), state.album_cursor, theme)
            .focused(state.focus == Focus::Albums);
        frame.render_widget(albums, albums_area);

        let reset = ResetButton::new(state.filter().is_active(), theme)
            .focused(state.focus == Focus::Reset);
        frame.render_widget(reset, reset_area);

        // Borders and header row
        state.visible_height = usize::from(table_area.height.saturating_sub(3)).max(1);
        let table = PhotoTable::new(&visible, self.catalog.len(), theme)
            .focused(state.focus == Focus::Table);
        frame.render_stateful_widget(table, table_area, &mut state.table);

        frame.render_widget(StatusBar::new(state.focus, theme), status_area);

        state.hitboxes = Hitboxes {
            users: users_area,
            user_chips: UserTabs::chip_areas(&self.dataset.users, users_area),
            search: search_area,
            clear: (!state.filter().search_query.is_empty()).then(|| SearchBar::clear_area(search_area)),
            albums: albums_area,
            album_chips: AlbumBar::chip_areas(&self.dataset.albums, albums_area),
            reset: reset_area,
            table: table_area,
            table_body: if visible.is_empty() {
                Rect::default()
            } else {
                Self::table_body(table_area)
            },
        };

        if state.mode == Mode::Help {
            frame.render_widget(HelpOverlay::new(theme), area);
        }
    }
}
