//! "Reset all filters" button

use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

pub const RESET_LABEL: &str = "Reset all filters";

/// Full-width button; dimmed while no filter is active
pub struct ResetButton<'a> {
    active: bool,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> ResetButton<'a> {
    #[must_use]
    pub const fn new(active: bool, theme: &'a Theme) -> Self {
        Self {
            active,
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
}

impl Widget for ResetButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.focused_border_style()
        } else {
            self.theme.border_style()
        };
        let label_style = match (self.focused, self.active) {
            (true, _) => self.theme.cursor_style(),
            (false, true) => self.theme.normal_style(),
            (false, false) => self.theme.dimmed_style(),
        };

        Paragraph::new(Line::styled(RESET_LABEL, label_style))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(border_style))
            .render(area, buf);
    }
}
