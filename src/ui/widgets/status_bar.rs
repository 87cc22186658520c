//! Bottom status line: the focused panel and the keys that act on it

use crate::ui::state::Focus;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

type Hint = (&'static str, &'static str);

const SHARED: &[Hint] = &[("Tab", "next panel"), ("Ctrl+R", "reset"), ("F1", "help")];

const fn panel_name(focus: Focus) -> &'static str {
    match focus {
        Focus::Users => "USERS",
        Focus::Search => "SEARCH",
        Focus::Albums => "ALBUMS",
        Focus::Reset => "RESET",
        Focus::Table => "PHOTOS",
    }
}

const fn panel_hints(focus: Focus) -> &'static [Hint] {
    match focus {
        Focus::Users => &[("←/→", "move"), ("Enter", "select"), ("q", "quit")],
        Focus::Albums => &[("←/→", "move"), ("Enter", "toggle"), ("q", "quit")],
        Focus::Search => &[("Esc", "clear/quit"), ("Enter", "to photos")],
        Focus::Reset => &[("Enter", "clear filters"), ("q", "quit")],
        Focus::Table => &[("↑/↓", "row"), ("PgUp/PgDn", "page"), ("q", "quit")],
    }
}

/// One-line status: panel badge, panel keys, then keys that work everywhere
pub struct StatusBar<'a> {
    focus: Focus,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    #[must_use]
    pub const fn new(focus: Focus, theme: &'a Theme) -> Self {
        Self { focus, theme }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            Span::styled(format!(" {} ", panel_name(self.focus)), self.theme.chip_selected_style()),
            Span::raw(" "),
        ];

        let hints = panel_hints(self.focus).iter().chain(SHARED);
        for (i, (key, action)) in hints.enumerate() {
            if i > 0 {
                spans.push(Span::styled(" · ", self.theme.dimmed_style()));
            }
            spans.push(Span::styled(*key, self.theme.cursor_style()));
            spans.push(Span::raw(format!(" {action}")));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
