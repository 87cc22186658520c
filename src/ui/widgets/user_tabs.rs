//! User selector bar: "All" followed by every user name

use super::{chip_lines, pack_chips};
use crate::models::User;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Columns before the first entry
const INDENT: u16 = 1;

fn labels(users: &[User]) -> impl Iterator<Item = &str> {
    std::iter::once("All").chain(users.iter().map(|u| u.name.as_str()))
}

fn block() -> Block<'static> {
    Block::default().borders(Borders::ALL).title(" Users ")
}

/// Bar of user entries with the active one highlighted
pub struct UserTabs<'a> {
    users: &'a [User],
    /// Slot of the active entry (0 = "All"), if it is listed
    selected: Option<usize>,
    /// Slot under the keyboard cursor
    cursor: usize,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> UserTabs<'a> {
    #[must_use]
    pub const fn new(users: &'a [User], selected: Option<usize>, cursor: usize, theme: &'a Theme) -> Self {
        Self {
            users,
            selected,
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

    /// Screen area of every entry when the bar is drawn in `area`, "All" first
    #[must_use]
    pub fn chip_areas(users: &[User], area: Rect) -> Vec<Rect> {
        let inner = block().inner(area);
        pack_chips(labels(users), inner, INDENT)
            .into_iter()
            .filter(|chip| chip.y < inner.bottom())
            .collect()
    }
}

impl Widget for UserTabs<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.focused_border_style()
        } else {
            self.theme.border_style()
        };
        let block = block().border_style(border_style);
        let inner = block.inner(area);

        let chips: Vec<_> = labels(self.users)
            .enumerate()
            .map(|(slot, label)| {
                let style = if self.selected == Some(slot) {
                    self.theme.active_tab_style()
                } else {
                    self.theme.normal_style()
                };
                (label, style)
            })
            .collect();

        let placed = pack_chips(labels(self.users), inner, INDENT);
        let cursor = self.focused.then_some(self.cursor);
        let lines = chip_lines(&chips, &placed, inner, cursor, self.theme.chip_cursor_modifier());

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
