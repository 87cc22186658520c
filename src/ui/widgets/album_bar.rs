//! Album selector: an "All" chip followed by one toggle chip per album

use super::{chip_lines, chip_rows, pack_chips};
use crate::filters::FilterState;
use crate::models::Album;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Bar of album chips, wrapped between chips and never inside one
pub struct AlbumBar<'a> {
    albums: &'a [Album],
    filter: &'a FilterState,
    /// Slot under the keyboard cursor (0 = "All")
    cursor: usize,
    theme: &'a Theme,
    focused: bool,
}

fn labels(albums: &[Album]) -> impl Iterator<Item = &str> {
    std::iter::once("All").chain(albums.iter().map(|a| a.title.as_str()))
}

fn block() -> Block<'static> {
    Block::default().borders(Borders::ALL).title(" Albums ")
}

impl<'a> AlbumBar<'a> {
    #[must_use]
    pub const fn new(albums: &'a [Album], filter: &'a FilterState, cursor: usize, theme: &'a Theme) -> Self {
        Self {
            albums,
            filter,
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

    /// Rows needed to show every chip at `width`, borders included
    #[must_use]
    pub fn required_height(albums: &[Album], width: u16) -> u16 {
        chip_rows(labels(albums), width.saturating_sub(2), 0).saturating_add(2)
    }

    /// Screen area of every chip when the bar is drawn in `area`, "All" first
    #[must_use]
    pub fn chip_areas(albums: &[Album], area: Rect) -> Vec<Rect> {
        let inner = block().inner(area);
        pack_chips(labels(albums), inner, 0)
            .into_iter()
            .filter(|chip| chip.y < inner.bottom())
            .collect()
    }
}

impl Widget for AlbumBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.focused_border_style()
        } else {
            self.theme.border_style()
        };
        let block = block().border_style(border_style);
        let inner = block.inner(area);

        let all_style = if self.filter.selected_album_ids.is_empty() {
            self.theme.chip_all_style()
        } else {
            self.theme.chip_all_outlined_style()
        };

        let chips: Vec<_> = std::iter::once(("All", all_style))
            .chain(self.albums.iter().map(|album| {
                let style = if self.filter.is_album_selected(album.id) {
                    self.theme.chip_selected_style()
                } else {
                    self.theme.normal_style()
                };
                (album.title.as_str(), style)
            }))
            .collect();

        let placed = pack_chips(labels(self.albums), inner, 0);
        let cursor = self.focused.then_some(self.cursor);
        let lines = chip_lines(&chips, &placed, inner, cursor, self.theme.chip_cursor_modifier());

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn test_required_height_grows_with_albums() {
        let few = vec![Album::new(1, 1, "A")];
        assert_eq!(AlbumBar::required_height(&few, 80), 3);

        let many: Vec<Album> = (1..=10).map(|i| Album::new(i, 1, "twelve chars")).collect();
        assert!(AlbumBar::required_height(&many, 40) > 3);
    }

    #[test]
    fn test_titles_with_spaces_stay_on_one_line() {
        let albums = vec![
            Album::new(1, 1, "quidem molestiae enim"),
            Album::new(2, 1, "omnis laborum odio"),
            Album::new(3, 1, "qui fuga est a eum"),
        ];
        let theme = Theme::default();
        let height = AlbumBar::required_height(&albums, 30);
        let area = Rect::new(0, 0, 30, height);
        let mut buf = Buffer::empty(area);

        AlbumBar::new(&albums, &FilterState::default(), 0, &theme).render(area, &mut buf);

        let rows: Vec<String> = (1..height - 1).map(|y| row_text(&buf, y)).collect();
        for album in &albums {
            assert!(
                rows.iter().any(|row| row.contains(&album.title)),
                "{:?} split across rows: {rows:#?}",
                album.title
            );
        }
        assert_eq!(AlbumBar::chip_areas(&albums, area).len(), albums.len() + 1);
    }

    #[test]
    fn test_selected_album_is_highlighted() {
        let albums = vec![Album::new(1, 1, "Cats"), Album::new(2, 1, "Dogs")];
        let filter = FilterState {
            selected_album_ids: vec![2],
            ..FilterState::default()
        };
        let theme = Theme::default();
        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);

        AlbumBar::new(&albums, &filter, 0, &theme).render(area, &mut buf);

        let chips = AlbumBar::chip_areas(&albums, area);
        let inside = |chip: Rect| (chip.x + 1, chip.y);

        assert_eq!(buf[inside(chips[2])].symbol(), "D");
        assert_eq!(buf[inside(chips[2])].bg, theme.info);
        assert_ne!(buf[inside(chips[1])].bg, theme.info);
    }
}
