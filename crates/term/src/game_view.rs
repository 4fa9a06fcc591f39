//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, Phase, TileView};
use crate::fb::{number_label, CellStyle, FrameBuffer, Rect, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const BOARD_BG: Rgb = Rgb::new(187, 173, 160);
const EMPTY_BG: Rgb = Rgb::new(205, 193, 180);
const DARK_TEXT: Rgb = Rgb::new(119, 110, 101);
const LIGHT_TEXT: Rgb = Rgb::new(249, 246, 242);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

/// A lightweight terminal renderer for the 2048 grid.
///
/// Each grid cell occupies `cell_w x cell_h` terminal cells, one column and
/// one row of which are the gap to the next tile.
pub struct GameView {
    cell_w: u16,
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 leaves a 6x2 tile face, wide enough for six-digit values.
        Self {
            cell_w: 7,
            cell_h: 3,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(2),
            cell_h: cell_h.max(2),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size of the bordered board for an `n x n` grid.
    pub fn frame_size(&self, n: usize) -> (u16, u16) {
        let n = n as u16;
        (n * self.cell_w + 3, n * self.cell_h + 3)
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default());

        let (frame_w, frame_h) = self.frame_size(snap.size);
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        let board = Rect::new(
            viewport.width.saturating_sub(frame_w) / 2,
            start_y,
            frame_w,
            frame_h,
        );

        fb.fill(board.inset(1), CellStyle::new(BOARD_BG, BOARD_BG));
        draw_border(fb, board, CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG));

        let empty = CellStyle::new(DARK_TEXT, EMPTY_BG);
        for row in 0..snap.size {
            for col in 0..snap.size {
                let face = self.tile_rect(board, row as u16, col as u16);
                match snap.tile_at(row, col) {
                    Some(tile) => draw_tile(fb, face, tile),
                    None => fb.fill(face, empty),
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, board);

        let overlay = match snap.phase {
            Phase::Won => Some(("YOU WIN!", "c: keep going")),
            Phase::GameOver => Some(("GAME OVER", "n: new game")),
            _ if snap.ad_pending => Some(("AD BREAK", "undo after ad")),
            _ => None,
        };
        if let Some((title, hint)) = overlay {
            draw_overlay(fb, board, title, hint);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Face of grid cell `(row, col)`; the cell's last column and row are gap.
    fn tile_rect(&self, board: Rect, row: u16, col: u16) -> Rect {
        Rect::new(
            board.x + 2 + col * self.cell_w,
            board.y + 2 + row * self.cell_h,
            self.cell_w - 1,
            self.cell_h - 1,
        )
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        board: Rect,
    ) {
        let panel_x = board.right().saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 10 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
        let dim = CellStyle { dim: true, ..value };

        let mut y = board.y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_number(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BEST", label);
        y = y.saturating_add(1);
        fb.put_number(panel_x, y, snap.best, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MOVES", label);
        y = y.saturating_add(1);
        fb.put_number(panel_x, y, snap.moves, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "UNDO", label);
        y = y.saturating_add(1);
        let undo = if snap.ad_pending {
            "pending"
        } else if snap.can_undo {
            "ready"
        } else {
            "-"
        };
        fb.put_str(panel_x, y, undo, value);
        y = y.saturating_add(2);

        if panel_w >= 14 {
            for line in ["arrows  move", "u  undo", "z  ad undo", "n  new game", "q  quit"] {
                if y >= viewport.height {
                    break;
                }
                fb.put_str(panel_x, y, line, dim);
                y = y.saturating_add(1);
            }
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, area: Rect, style: CellStyle) {
    if area.w < 2 || area.h < 2 {
        return;
    }
    let (left, top) = (area.x, area.y);
    let (right, bottom) = (area.right() - 1, area.y + area.h - 1);

    for x in left + 1..right {
        fb.put_char(x, top, '─', style);
        fb.put_char(x, bottom, '─', style);
    }
    for y in top + 1..bottom {
        fb.put_char(left, y, '│', style);
        fb.put_char(right, y, '│', style);
    }
    fb.put_char(left, top, '┌', style);
    fb.put_char(right, top, '┐', style);
    fb.put_char(left, bottom, '└', style);
    fb.put_char(right, bottom, '┘', style);
}

/// Merged tiles are bold, freshly spawned ones dim.
fn draw_tile(fb: &mut FrameBuffer, face: Rect, tile: &TileView) {
    let (bg, fg) = tile_colors(tile.value);
    let style = CellStyle {
        fg,
        bg,
        bold: tile.merged,
        dim: tile.spawned,
    };
    fb.fill(face, style);
    fb.put_centered(face, face.mid_y(), &number_label(tile.value), style);
}

fn draw_overlay(fb: &mut FrameBuffer, board: Rect, title: &str, hint: &str) {
    let mid = board.y.saturating_add(board.h / 2);
    let title_style = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
    let hint_style = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
    fb.put_centered(board, mid.saturating_sub(1), title, title_style);
    fb.put_centered(board, mid.saturating_add(1), hint, hint_style);
}

/// Background and text colour for a tile value.
pub fn tile_colors(value: u32) -> (Rgb, Rgb) {
    match value {
        2 => (Rgb::new(238, 228, 218), DARK_TEXT),
        4 => (Rgb::new(237, 224, 200), DARK_TEXT),
        8 => (Rgb::new(242, 177, 121), LIGHT_TEXT),
        16 => (Rgb::new(245, 149, 99), LIGHT_TEXT),
        32 => (Rgb::new(246, 124, 95), LIGHT_TEXT),
        64 => (Rgb::new(246, 94, 59), LIGHT_TEXT),
        128 => (Rgb::new(237, 207, 114), LIGHT_TEXT),
        256 => (Rgb::new(237, 204, 97), LIGHT_TEXT),
        512 => (Rgb::new(237, 200, 80), LIGHT_TEXT),
        1024 => (Rgb::new(237, 197, 63), LIGHT_TEXT),
        2048 => (Rgb::new(237, 194, 46), LIGHT_TEXT),
        _ => (Rgb::new(60, 58, 50), LIGHT_TEXT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_size_grows_with_grid() {
        let view = GameView::default();
        assert_eq!(view.frame_size(4), (31, 15));
        assert_eq!(view.frame_size(2), (17, 9));
    }

    #[test]
    fn tile_colors_distinguish_small_values() {
        assert_ne!(tile_colors(2).0, tile_colors(4).0);
        assert_eq!(tile_colors(2).1, DARK_TEXT);
        assert_eq!(tile_colors(8).1, LIGHT_TEXT);
        assert_eq!(tile_colors(4096), tile_colors(8192));
    }
}
