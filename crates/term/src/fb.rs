//! Character-cell canvas the game view paints into.
//!
//! Coordinates are terminal columns/rows. Writes that fall outside the canvas
//! are dropped, so callers can draw a board larger than the window without
//! clipping first.

use std::fmt::Write as _;

use arrayvec::ArrayString;

/// 24-bit colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub fn bold(self) -> Self {
        Self { bold: true, ..self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(Rgb(220, 220, 220), Rgb(0, 0, 0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Cell {
    pub const fn blank(style: CellStyle) -> Self {
        Self { ch: ' ', style }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank(CellStyle::default())
    }
}

/// Screen rectangle, e.g. one tile face or the whole board frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    /// Shrink by `n` cells on every side.
    pub fn inset(self, n: u16) -> Self {
        Self {
            x: self.x.saturating_add(n),
            y: self.y.saturating_add(n),
            w: self.w.saturating_sub(2 * n),
            h: self.h.saturating_sub(2 * n),
        }
    }

    /// Row holding a vertically centred line (upper middle for even heights).
    pub fn mid_y(self) -> u16 {
        self.y + self.h.saturating_sub(1) / 2
    }

    pub fn right(self) -> u16 {
        self.x.saturating_add(self.w)
    }
}

/// Decimal text of a tile value or score, built on the stack.
pub fn number_label(value: u32) -> ArrayString<10> {
    let mut label = ArrayString::new();
    // u32::MAX is ten digits, so this cannot overflow the buffer.
    let _ = write!(label, "{value}");
    label
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let mut fb = Self::default();
        fb.resize(width, height);
        fb
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Change dimensions, keeping the allocation. Contents are unspecified
    /// afterwards; callers repaint with [`FrameBuffer::clear`].
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells
            .resize(usize::from(width) * usize::from(height), Cell::default());
    }

    pub fn clear(&mut self, style: CellStyle) {
        self.cells.fill(Cell::blank(style));
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.row(y)?.get(usize::from(x))
    }

    /// Cells of row `y`, left to right.
    pub fn row(&self, y: u16) -> Option<&[Cell]> {
        if y >= self.height {
            return None;
        }
        let w = usize::from(self.width);
        let start = usize::from(y) * w;
        self.cells.get(start..start + w)
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        if x < self.width && y < self.height {
            let i = usize::from(y) * usize::from(self.width) + usize::from(x);
            self.cells[i] = Cell { ch, style };
        }
    }

    /// Write `text` from `(x, y)` rightwards. Returns the columns consumed.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, style: CellStyle) -> u16 {
        let mut cols = 0;
        for ch in text.chars() {
            self.put_char(x.saturating_add(cols), y, ch, style);
            cols = cols.saturating_add(1);
        }
        cols
    }

    pub fn put_number(&mut self, x: u16, y: u16, value: u32, style: CellStyle) -> u16 {
        self.put_str(x, y, &number_label(value), style)
    }

    /// Write `text` on row `y`, horizontally centred in `area`.
    pub fn put_centered(&mut self, area: Rect, y: u16, text: &str, style: CellStyle) {
        let len = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
        let x = area.x.saturating_add(area.w.saturating_sub(len) / 2);
        self.put_str(x, y, text, style);
    }

    /// Paint `area` with blanks in `style`.
    pub fn fill(&mut self, area: Rect, style: CellStyle) {
        for y in area.y..area.y.saturating_add(area.h) {
            for x in area.x..area.right() {
                self.put_char(x, y, ' ', style);
            }
        }
    }

    /// Row `y` as plain text, trailing blanks included.
    pub fn row_text(&self, y: u16) -> String {
        self.row(y)
            .map(|cells| cells.iter().map(|c| c.ch).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_label_fits_every_u32() {
        assert_eq!(number_label(0).as_str(), "0");
        assert_eq!(number_label(131072).as_str(), "131072");
        assert_eq!(number_label(u32::MAX).len(), 10);
    }

    #[test]
    fn tile_value_is_centred_on_face() {
        let mut fb = FrameBuffer::new(8, 3);
        let face = Rect::new(1, 0, 6, 2);
        fb.fill(face, CellStyle::new(Rgb(0, 0, 0), Rgb(237, 194, 46)));
        fb.put_centered(face, face.mid_y(), "2048", CellStyle::default());

        assert_eq!(fb.row_text(0), "  2048  ");
        assert_eq!(fb.get(1, 1).unwrap().style.bg, Rgb(237, 194, 46));
        assert_eq!(fb.get(7, 1).unwrap().style, CellStyle::default());
    }

    #[test]
    fn score_overflowing_the_canvas_is_clipped() {
        let mut fb = FrameBuffer::new(3, 2);
        let cols = fb.put_number(1, 1, 65536, CellStyle::default());
        fb.put_char(10, 10, 'x', CellStyle::default());

        assert_eq!(cols, 5);
        assert_eq!(fb.row_text(1), " 65");
        assert!(fb.get(10, 10).is_none());
        assert!(fb.row(2).is_none());
    }

    #[test]
    fn inset_rect_stays_inside_the_frame() {
        let board = Rect::new(4, 2, 31, 15);
        assert_eq!(board.inset(1), Rect::new(5, 3, 29, 13));
        assert_eq!(Rect::new(0, 0, 1, 1).inset(1).w, 0);
        assert_eq!(board.mid_y(), 9);
        assert_eq!(board.right(), 35);
    }

    #[test]
    fn resize_then_clear_repaints_everything() {
        let mut fb = FrameBuffer::new(2, 1);
        fb.put_str(0, 0, "ab", CellStyle::default());
        fb.resize(4, 2);
        let dark = CellStyle::new(Rgb(1, 1, 1), Rgb(2, 2, 2));
        fb.clear(dark);
        assert_eq!(fb.row_text(1), "    ");
        assert_eq!(fb.get(3, 1).unwrap().style, dark);
    }
}
