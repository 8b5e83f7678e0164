//! Braille-based plotting canvas shared by the donut and area charts.
//!
//! Each terminal character cell represents a 2x4 grid of braille dots,
//! providing 2x horizontal and 4x vertical sub-character resolution. Because
//! a terminal cell is roughly twice as tall as it is wide, dot space is
//! close to square, which keeps circles circular.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};

/// Braille dot bit positions indexed by [y % 4][x % 2].
///
/// Unicode braille standard (U+2800–U+28FF):
///
/// ```text
/// Dot 1 (0x01) | Dot 4 (0x08)
/// Dot 2 (0x02) | Dot 5 (0x10)
/// Dot 3 (0x04) | Dot 6 (0x20)
/// Dot 7 (0x40) | Dot 8 (0x80)
/// ```
const BRAILLE_BIT_MAP: [[u8; 2]; 4] = [
    [0x01, 0x08], // row 0: dot 1, dot 4
    [0x02, 0x10], // row 1: dot 2, dot 5
    [0x04, 0x20], // row 2: dot 3, dot 6
    [0x40, 0x80], // row 3: dot 7, dot 8
];

/// A simple braille-based plotting canvas.
///
/// Coordinates are in "dot space": x ranges 0..width*2, y ranges 0..height*4.
/// One canvas carries one series; callers drawing multiple overlapping series
/// use one canvas per series and render them in order.
pub(crate) struct BrailleCanvas {
    /// Braille dot-pattern offset per cell: cells[row][col].
    cells: Vec<Vec<u8>>,
    /// Character columns.
    width: usize,
    /// Character rows.
    height: usize,
}

impl BrailleCanvas {
    /// Create a blank braille canvas with the given character dimensions.
    pub(crate) fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![vec![0u8; width]; height],
            width,
            height,
        }
    }

    /// Dot-space width.
    pub(crate) fn dot_width(&self) -> usize {
        self.width * 2
    }

    /// Dot-space height.
    pub(crate) fn dot_height(&self) -> usize {
        self.height * 4
    }

    /// Set a dot at `(x, y)` in dot-space coordinates.
    ///
    /// Out-of-bounds coordinates are silently ignored.
    pub(crate) fn set(&mut self, x: usize, y: usize) {
        let col = x / 2;
        let row = y / 4;
        if col >= self.width || row >= self.height {
            return;
        }
        let bit = BRAILLE_BIT_MAP[y % 4][x % 2];
        self.cells[row][col] |= bit;
    }

    /// Fill a dot column from `y_from` (inclusive) to `y_to` (exclusive).
    pub(crate) fn fill_column(&mut self, x: usize, y_from: usize, y_to: usize) {
        for y in y_from..y_to {
            self.set(x, y);
        }
    }

    /// Render the canvas into a ratatui [`Buffer`] at the given position.
    ///
    /// Each non-empty cell becomes a Unicode braille character (U+2800 base
    /// + dot pattern); all cells share the `color` argument.
    pub(crate) fn render_to_buffer(&self, buf: &mut Buffer, area: Rect, color: Color) {
        let style = Style::default().fg(color);
        for row in 0..self.height {
            let y = area.y + row as u16;
            if y >= area.bottom() {
                break;
            }
            for col in 0..self.width {
                let x = area.x + col as u16;
                if x >= area.right() {
                    break;
                }
                let bits = self.cells[row][col];
                if bits != 0 {
                    let ch = char::from_u32(0x2800 + bits as u32).unwrap_or('\u{2800}');
                    if let Some(cell) = buf.cell_mut((x, y)) {
                        cell.set_char(ch).set_style(style);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_cell_renders_all_dots() {
        let mut canvas = BrailleCanvas::new(1, 1);
        for x in 0..2 {
            for y in 0..4 {
                canvas.set(x, y);
            }
        }

        let area = Rect::new(0, 0, 1, 1);
        let mut buf = Buffer::empty(area);
        canvas.render_to_buffer(&mut buf, area, Color::White);
        assert_eq!(buf[(0, 0)].symbol(), "\u{28ff}");
    }

    #[test]
    fn test_single_dot_sets_expected_bit() {
        let mut canvas = BrailleCanvas::new(1, 1);
        canvas.set(0, 0); // dot 1

        let area = Rect::new(0, 0, 1, 1);
        let mut buf = Buffer::empty(area);
        canvas.render_to_buffer(&mut buf, area, Color::White);
        assert_eq!(buf[(0, 0)].symbol(), "\u{2801}");
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut canvas = BrailleCanvas::new(2, 2);
        canvas.set(100, 100);
        canvas.fill_column(5, 0, 100);

        let area = Rect::new(0, 0, 2, 2);
        let mut buf = Buffer::empty(area);
        canvas.render_to_buffer(&mut buf, area, Color::White);
        // Only in-bounds dots from fill_column(5=col 2 -> out of bounds)
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(buf[(x, y)].symbol(), " ");
            }
        }
    }

    #[test]
    fn test_fill_column_spans_rows() {
        let mut canvas = BrailleCanvas::new(1, 2);
        canvas.fill_column(0, 0, canvas.dot_height());

        let area = Rect::new(0, 0, 1, 2);
        let mut buf = Buffer::empty(area);
        canvas.render_to_buffer(&mut buf, area, Color::White);
        // Left column of both cells fully set: dots 1,2,3,7 = 0x47
        assert_eq!(buf[(0, 0)].symbol(), "\u{2847}");
        assert_eq!(buf[(0, 1)].symbol(), "\u{2847}");
    }

    #[test]
    fn test_empty_cells_left_untouched() {
        let canvas = BrailleCanvas::new(2, 1);
        let area = Rect::new(0, 0, 2, 1);
        let mut buf = Buffer::empty(area);
        buf.cell_mut((0, 0)).unwrap().set_char('x');
        canvas.render_to_buffer(&mut buf, area, Color::White);
        assert_eq!(buf[(0, 0)].symbol(), "x");
    }

    #[test]
    fn test_dot_dimensions() {
        let canvas = BrailleCanvas::new(10, 5);
        assert_eq!(canvas.dot_width(), 20);
        assert_eq!(canvas.dot_height(), 20);
    }
}
