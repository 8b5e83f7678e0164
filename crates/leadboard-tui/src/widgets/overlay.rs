//! Overlay utilities for the narrow-terminal navigation rail.
//!
//! Provides the dimmed backdrop and area-clearing helpers used when the rail
//! slides in above the page content.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::theme::Palette;

/// Dim all cells in the given area by overriding their styles.
///
/// Simulates the semi-transparent backdrop behind the overlay rail.
pub fn dim_background(buf: &mut Buffer, area: Rect, palette: &Palette) {
    let dim_style = Style::default()
        .fg(palette.text_muted)
        .bg(palette.backdrop_bg);

    let y_end = area.y.saturating_add(area.height);
    let x_end = area.x.saturating_add(area.width);
    for y in area.y..y_end {
        for x in area.x..x_end {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(dim_style);
            }
        }
    }
}

/// Clear a rect and prepare it for overlay content.
pub fn clear_area(buf: &mut Buffer, area: Rect) {
    Clear.render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::palette::DARK;

    #[test]
    fn test_dim_background_covers_area() {
        let area = Rect::new(0, 0, 10, 5);
        let mut buf = Buffer::empty(area);
        dim_background(&mut buf, area, &DARK);
        for y in 0..5 {
            for x in 0..10 {
                let cell = &buf[(x, y)];
                assert_eq!(cell.fg, DARK.text_muted);
                assert_eq!(cell.bg, DARK.backdrop_bg);
            }
        }
    }

    #[test]
    fn test_dim_background_respects_offset_area() {
        let area = Rect::new(5, 3, 10, 5);
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 10));
        dim_background(&mut buf, area, &DARK);
        // Outside the area stays untouched.
        assert_ne!(buf[(0, 0)].bg, DARK.backdrop_bg);
        assert_eq!(buf[(5, 3)].bg, DARK.backdrop_bg);
    }

    #[test]
    fn test_clear_area_resets_cells() {
        let area = Rect::new(0, 0, 10, 5);
        let mut buf = Buffer::empty(area);
        for y in 0..5 {
            for x in 0..10 {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char('x');
                }
            }
        }

        clear_area(&mut buf, Rect::new(2, 2, 5, 2));
        assert_eq!(buf[(2, 2)].symbol(), " ");
        assert_eq!(buf[(0, 0)].symbol(), "x");
    }
}
