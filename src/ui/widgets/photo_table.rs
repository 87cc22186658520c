//! Photo table widget with the "no results" fallback

use crate::models::JoinedPhoto;
use crate::output::{HEADERS, NO_MATCHES};
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};

/// Table of visible photos: ID, Photo name, Album name, User name
///
/// Renders the "no results" message instead of the table when `photos` is
/// empty.
pub struct PhotoTable<'a> {
    photos: &'a [&'a JoinedPhoto],
    total: usize,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> PhotoTable<'a> {
    #[must_use]
    pub const fn new(photos: &'a [&'a JoinedPhoto], total: usize, theme: &'a Theme) -> Self {
        Self {
            photos,
            total,
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

    fn row(&self, photo: &'a JoinedPhoto) -> Row<'a> {
        Row::new(vec![
            Cell::from(Span::styled(photo.id.to_string(), self.theme.id_style())),
            Cell::from(photo.title.as_str()),
            Cell::from(photo.album_title()),
            Cell::from(Span::styled(
                photo.user_name(),
                self.theme.user_style(photo.user_sex()),
            )),
        ])
    }
}

impl StatefulWidget for PhotoTable<'_> {
    type State = TableState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let border_style = if self.focused {
            self.theme.focused_border_style()
        } else {
            self.theme.border_style()
        };
        let title = format!(" Photos {}/{} ", self.photos.len(), self.total);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title);

        if self.photos.is_empty() {
            Paragraph::new(vec![
                Line::default(),
                Line::styled(NO_MATCHES, self.theme.warning_style()),
            ])
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
            return;
        }

        let header = Row::new(HEADERS.map(Cell::from)).style(self.theme.header_style());
        let rows: Vec<Row> = self.photos.iter().map(|&photo| self.row(photo)).collect();
        let widths = [
            Constraint::Length(5),
            Constraint::Percentage(45),
            Constraint::Percentage(35),
            Constraint::Min(10),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(if self.focused {
                self.theme.selected_style()
            } else {
                self.theme.normal_style()
            })
            .highlight_symbol("> ");

        StatefulWidget::render(table, area, buf, state);
    }
}
