//! Search bar widget for query input

use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Marker shown at the right edge while the query is non-empty
pub const CLEAR_MARKER: &str = "[x]";

/// Search bar widget that displays the query with cursor
pub struct SearchBar<'a> {
    /// Current query text
    query: &'a str,
    /// Cursor position in the query
    cursor: usize,
    /// Theme for styling
    theme: &'a Theme,
    /// Whether the widget has focus
    focused: bool,
}

impl<'a> SearchBar<'a> {
    /// Create a new search bar widget
    #[must_use]
    pub const fn new(query: &'a str, cursor: usize, theme: &'a Theme) -> Self {
        Self {
            query,
            cursor,
            theme,
            focused: false,
        }
    }

    /// Set focus state
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Split the inner area into query text and the clear marker
    fn split(inner: Rect) -> [Rect; 2] {
        Layout::horizontal([
            Constraint::Min(1),
            Constraint::Length(CLEAR_MARKER.len() as u16 + 1),
        ])
        .areas(inner)
    }

    /// Screen area of the clear marker when the bar is drawn in `area`
    #[must_use]
    pub fn clear_area(area: Rect) -> Rect {
        let [_, clear_area] = Self::split(Block::default().borders(Borders::ALL).inner(area));
        clear_area
    }

    fn cursor_span() -> Span<'static> {
        Span::styled("│", Style::default().add_modifier(Modifier::SLOW_BLINK))
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.focused_border_style()
        } else {
            self.theme.border_style()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Search ");

        let inner = block.inner(area);
        block.render(area, buf);

        let [text_area, clear_area] = Self::split(inner);

        let mut spans = vec![Span::styled(" / ", self.theme.dimmed_style())];

        if self.query.is_empty() {
            if self.focused {
                spans.push(Self::cursor_span());
            }
            spans.push(Span::styled("Search", self.theme.dimmed_style()));
        } else if self.focused {
            // Split query at cursor position
            let (before, after) = self.query.split_at(self.cursor.min(self.query.len()));
            spans.push(Span::raw(before));
            spans.push(Self::cursor_span());
            spans.push(Span::raw(after));
        } else {
            spans.push(Span::raw(self.query));
        }

        Paragraph::new(Line::from(spans)).render(text_area, buf);

        if !self.query.is_empty() {
            Paragraph::new(Line::styled(CLEAR_MARKER, self.theme.cursor_style()))
                .render(clear_area, buf);
        }
    }
}
