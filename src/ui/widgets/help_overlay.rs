//! Help overlay widget for displaying the full keybind reference

use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Help overlay widget that displays a centered help screen
pub struct HelpOverlay<'a> {
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    /// Calculate centered area for the overlay
    fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
        let popup_layout = Layout::vertical([
            Constraint::Percentage((100 - height_percent) / 2),
            Constraint::Percentage(height_percent),
            Constraint::Percentage((100 - height_percent) / 2),
        ])
        .split(area);

        Layout::horizontal([
            Constraint::Percentage((100 - width_percent) / 2),
            Constraint::Percentage(width_percent),
            Constraint::Percentage((100 - width_percent) / 2),
        ])
        .split(popup_layout[1])[1]
    }

    fn section(&self, title: &'static str) -> [Line<'static>; 3] {
        [
            Line::default(),
            Line::styled(title, self.theme.cursor_style().add_modifier(Modifier::UNDERLINED)),
            Line::default(),
        ]
    }

    /// Build help content lines
    fn build_content(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        lines.extend(self.section("  Panels"));
        lines.extend([
            Self::help_line("  TAB / S-TAB", "Next / previous panel"),
            Self::help_line("  Ctrl+R", "Reset all filters"),
            Self::help_line("  Ctrl+C", "Quit"),
            Self::help_line("  Click", "Select, toggle or focus"),
            Self::help_line("  Wheel", "Scroll the table"),
        ]);

        lines.extend(self.section("  Users & Albums"));
        lines.extend([
            Self::help_line("  ←/→  h/l", "Move between entries"),
            Self::help_line("  Enter/Space", "Select user / toggle album"),
            Self::help_line("  q / ESC", "Quit"),
        ]);

        lines.extend(self.section("  Search"));
        lines.extend([
            Self::help_line("  Type", "Filter photo names"),
            Self::help_line("  ESC / Ctrl+U", "Clear search"),
            Self::help_line("  ←/→", "Move cursor in query"),
            Self::help_line("  Enter / ↓", "Go to table"),
        ]);

        lines.extend(self.section("  Table"));
        lines.extend([
            Self::help_line("  ↑/↓  k/j", "Move selection"),
            Self::help_line("  PgUp/PgDn", "Page up/down"),
            Self::help_line("  Home/End", "Jump to start/end"),
        ]);

        lines.push(Line::default());
        lines.push(Line::styled("  Press any key to close", self.theme.dimmed_style()));

        lines
    }

    /// Create a help line with key and description
    fn help_line(key: &'static str, desc: &'static str) -> Line<'static> {
        Line::from(vec![
            Span::styled(
                format!("{key:<16}"),
                ratatui::style::Style::default().fg(ratatui::style::Color::Cyan),
            ),
            Span::raw(desc),
        ])
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = Self::centered_rect(60, 80, area);

        // Clear the background
        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cursor_style())
            .title(" Help ")
            .title_alignment(Alignment::Center);

        Paragraph::new(self.build_content()).block(block).render(popup_area, buf);
    }
}
