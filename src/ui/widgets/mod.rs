//! Ratatui widgets for the browser TUI
//!
//! Custom widgets for rendering the filter panel and the photo table.

mod album_bar;
mod help_overlay;
mod photo_table;
mod reset_button;
mod search_bar;
mod status_bar;
mod user_tabs;

pub use album_bar::AlbumBar;
pub use help_overlay::HelpOverlay;
pub use photo_table::PhotoTable;
pub use reset_button::ResetButton;
pub use search_bar::SearchBar;
pub use status_bar::StatusBar;
pub use user_tabs::UserTabs;

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// Columns between two chips
const CHIP_GAP: u16 = 2;

fn chip_width(label: &str) -> u16 {
    // " label "
    u16::try_from(label.chars().count())
        .unwrap_or(u16::MAX)
        .saturating_add(2)
}

/// Place chips left to right inside `inner`, one rectangle per chip
///
/// A chip never straddles two rows: it moves to the next row when it would
/// overflow the right edge. Rows past the bottom of `inner` are still laid
/// out; callers clip them.
pub(crate) fn pack_chips<'a>(labels: impl IntoIterator<Item = &'a str>, inner: Rect, indent: u16) -> Vec<Rect> {
    let left = inner.x.saturating_add(indent);
    let right = inner.right();
    let mut x = left;
    let mut y = inner.y;

    labels
        .into_iter()
        .map(|label| {
            let width = chip_width(label);
            if x > left && x.saturating_add(width) > right {
                x = left;
                y = y.saturating_add(1);
            }
            let chip = Rect::new(x, y, width.min(right.saturating_sub(x)), 1);
            x = x.saturating_add(width).saturating_add(CHIP_GAP);
            chip
        })
        .collect()
}

/// Number of rows [`pack_chips`] needs for `labels` at `inner_width`
pub(crate) fn chip_rows<'a>(labels: impl IntoIterator<Item = &'a str>, inner_width: u16, indent: u16) -> u16 {
    let inner = Rect::new(0, 0, inner_width.max(1), 1);
    pack_chips(labels, inner, indent)
        .last()
        .map_or(1, |chip| chip.y.saturating_add(1))
}

/// One line per packed row, chips styled and the cursor entry emphasized
pub(crate) fn chip_lines<'a>(
    chips: &[(&'a str, Style)],
    placed: &[Rect],
    inner: Rect,
    cursor: Option<usize>,
    cursor_modifier: Modifier,
) -> Vec<Line<'a>> {
    let mut lines: Vec<Line> = Vec::new();
    let mut row_end = inner.x;

    for (i, ((label, style), chip)) in chips.iter().zip(placed).enumerate() {
        let row = usize::from(chip.y - inner.y);
        if row == lines.len() {
            lines.push(Line::default());
            row_end = inner.x;
        }
        let pad = usize::from(chip.x - row_end);
        let line = &mut lines[row];
        if pad > 0 {
            line.spans.push(Span::raw(" ".repeat(pad)));
        }
        let style = if cursor == Some(i) {
            style.add_modifier(cursor_modifier)
        } else {
            *style
        };
        line.spans.push(Span::styled(format!(" {label} "), style));
        row_end = chip.x.saturating_add(chip_width(label));
    }

    lines
}
