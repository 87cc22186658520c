//! Color theme definitions for the ratatui TUI
//!
//! Defines colors and styles used throughout the browser.

use crate::models::Sex;
use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color for the highlighted table row
    pub selection_bg: Color,
    /// Foreground color for the highlighted table row
    pub selection_fg: Color,
    /// Color for focus indicators
    pub cursor: Color,
    /// Color for the "All" albums chip
    pub success: Color,
    /// Color for selected album chips and the active user tab
    pub info: Color,
    /// Color for borders
    pub border: Color,
    /// Color for dimmed/inactive text
    pub dimmed: Color,
    /// Color for user names with sex `m`
    pub male: Color,
    /// Color for user names with sex `f`
    pub female: Color,
    /// Color for the "no results" message
    pub warning: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            selection_bg: Color::Blue,
            selection_fg: Color::White,
            cursor: Color::Cyan,
            success: Color::Green,
            info: Color::LightBlue,
            border: Color::DarkGray,
            dimmed: Color::DarkGray,
            male: Color::Blue,
            female: Color::Red,
            warning: Color::Yellow,
        }
    }

    /// Style for the highlighted table row
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default()
    }

    /// Style for focus indicators and key names
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default()
            .fg(self.cursor)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for borders of unfocused panels
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for borders of the focused panel
    #[must_use]
    pub fn focused_border_style(&self) -> Style {
        Style::default().fg(self.cursor)
    }

    /// Style for dimmed text
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }

    /// Style for the page title
    #[must_use]
    pub fn title_style(&self) -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    /// Style for the active entry of the user tabs
    #[must_use]
    pub fn active_tab_style(&self) -> Style {
        Style::default()
            .fg(self.info)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    /// Style for a selected album chip
    #[must_use]
    pub fn chip_selected_style(&self) -> Style {
        Style::default().bg(self.info).fg(Color::Black)
    }

    /// Style for the "All" albums chip when no album is selected
    #[must_use]
    pub fn chip_all_style(&self) -> Style {
        Style::default()
            .bg(self.success)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the "All" albums chip while albums are selected
    #[must_use]
    pub fn chip_all_outlined_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Extra emphasis for the entry under the cursor in a focused bar
    #[must_use]
    pub fn chip_cursor_modifier(&self) -> Modifier {
        Modifier::REVERSED
    }

    /// Style for a user name, keyed by sex
    #[must_use]
    pub fn user_style(&self, sex: Option<Sex>) -> Style {
        match sex {
            Some(Sex::Male) => Style::default().fg(self.male),
            Some(Sex::Female) => Style::default().fg(self.female),
            None => Style::default(),
        }
    }

    /// Style for the photo id column
    #[must_use]
    pub fn id_style(&self) -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    /// Style for the table header row
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default()
            .add_modifier(Modifier::BOLD)
            .add_modifier(Modifier::UNDERLINED)
    }

    /// Style for the "no results" message
    #[must_use]
    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_style_by_sex() {
        let theme = Theme::dark();
        assert_eq!(theme.user_style(Some(Sex::Male)).fg, Some(Color::Blue));
        assert_eq!(theme.user_style(Some(Sex::Female)).fg, Some(Color::Red));
        assert_eq!(theme.user_style(None), Style::default());
    }

    #[test]
    fn test_all_chip_styles_differ() {
        let theme = Theme::default();
        assert_ne!(theme.chip_all_style(), theme.chip_all_outlined_style());
    }
}
