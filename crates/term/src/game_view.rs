//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::palette::tile_style;
use crate::types::Tile;

/// Columns reserved to the right of the board for the score panel.
pub const PANEL_W: u16 = 20;

const BORDER: u16 = 2;

const BOARD_BG: Rgb = Rgb::new(143, 122, 102);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

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

/// Where the board lands for a given board size and viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub cell_w: u16,
    pub cell_h: u16,
    pub gap_x: u16,
    pub gap_y: u16,
    pub start_x: u16,
    pub start_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
    pub show_panel: bool,
}

impl BoardLayout {
    /// Top-left terminal cell of the tile at `(row, col)`.
    pub fn tile_origin(&self, row: u16, col: u16) -> (u16, u16) {
        let x = self.start_x + 1 + self.gap_x + col * (self.cell_w + self.gap_x);
        let y = self.start_y + 1 + self.gap_y + row * (self.cell_h + self.gap_y);
        (x, y)
    }
}

/// A lightweight terminal renderer for the 2048 board.
pub struct GameView {
    /// Largest tile width in terminal columns.
    cell_w: u16,
    /// Largest tile height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 8x3 keeps tiles roughly square on typical terminal glyphs.
        Self {
            cell_w: 8,
            cell_h: 3,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Fit a `size x size` board into `viewport`, shrinking tiles and dropping gaps as needed.
    pub fn layout(&self, size: usize, viewport: Viewport) -> BoardLayout {
        let n = (size as u16).max(1);

        let show_panel = viewport.width >= PANEL_W + BORDER + n * 3 + (n + 1);
        let avail_w = viewport
            .width
            .saturating_sub(BORDER + if show_panel { PANEL_W } else { 0 });
        let avail_h = viewport.height.saturating_sub(BORDER);

        let gap_x = u16::from(n * 3 + 1 <= avail_w);
        let gap_y = u16::from(n * 2 + 1 <= avail_h);
        let cell_w = (avail_w.saturating_sub(gap_x * (n + 1)) / n).clamp(1, self.cell_w);
        let cell_h = (avail_h.saturating_sub(gap_y * (n + 1)) / n).clamp(1, self.cell_h);

        let frame_w = n * cell_w + gap_x * (n + 1) + BORDER;
        let frame_h = n * cell_h + gap_y * (n + 1) + BORDER;
        let total_w = frame_w + if show_panel { PANEL_W } else { 0 };

        let start_x = viewport.width.saturating_sub(total_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        BoardLayout {
            cell_w,
            cell_h,
            gap_x,
            gap_y,
            start_x,
            start_y,
            frame_w,
            frame_h,
            show_panel,
        }
    }

    /// Render the game into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the terminal
    /// size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = self.layout(snap.size, viewport);
        let board = CellStyle::new(Rgb::new(220, 210, 200), BOARD_BG);
        let border = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

        fb.fill_rect(
            layout.start_x + 1,
            layout.start_y + 1,
            layout.frame_w - BORDER,
            layout.frame_h - BORDER,
            ' ',
            board,
        );
        draw_border(
            fb,
            layout.start_x,
            layout.start_y,
            layout.frame_w,
            layout.frame_h,
            border,
        );

        for row in 0..snap.size {
            for col in 0..snap.size {
                let value = snap.tile(row, col).unwrap_or(0);
                self.draw_tile(fb, &layout, row as u16, col as u16, value);
            }
        }

        if layout.show_panel {
            self.draw_side_panel(fb, snap, &layout, viewport);
        }

        if snap.game_over {
            draw_overlay(fb, &layout, "GAME OVER", "r to restart");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, layout: &BoardLayout, row: u16, col: u16, value: Tile) {
        let style = tile_style(value).cell_style();
        let (x, y) = layout.tile_origin(row, col);
        fb.fill_rect(x, y, layout.cell_w, layout.cell_h, ' ', style);

        if value == 0 {
            return;
        }
        let mut buf = [0u8; 12];
        let text = tile_label(value, layout.cell_w as usize, &mut buf);
        let text_w = text.len() as u16;
        let lx = x + (layout.cell_w - text_w) / 2;
        let ly = y + layout.cell_h / 2;
        fb.put_str(lx, ly, text, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        layout: &BoardLayout,
        viewport: Viewport,
    ) {
        let panel_x = layout.start_x.saturating_add(layout.frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
        let hint = value.dim();

        let mut y = layout.start_y;
        fb.put_str(panel_x, y, "2048", CellStyle::new(Rgb::new(237, 194, 46), SCREEN_BG).bold());
        y = y.saturating_add(2);

        for (name, number) in [("SCORE", snap.score), ("BEST", snap.best)] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u64(panel_x, y.saturating_add(1), number, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "SIZE", label);
        let used = fb.put_u64(panel_x, y + 1, snap.size as u64, value);
        fb.put_char(panel_x + used, y + 1, 'x', value);
        fb.put_u64(panel_x + used + 1, y + 1, snap.size as u64, value);
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "MOVES", label);
        fb.put_u64(panel_x, y.saturating_add(1), snap.moves as u64, value);
        y = y.saturating_add(3);

        fb.put_str(panel_x, y, "MAX", label);
        fb.put_u64(panel_x, y.saturating_add(1), snap.max_tile as u64, value);
        y = y.saturating_add(3);

        for line in ["arrows  move", "+ -     size", "r       restart", "q       quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '╭', style);
    fb.put_char(x + w - 1, y, '╮', style);
    fb.put_char(x, y + h - 1, '╰', style);
    fb.put_char(x + w - 1, y + h - 1, '╯', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn draw_overlay(fb: &mut FrameBuffer, layout: &BoardLayout, title: &str, hint: &str) {
    let style = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
    let mid_y = layout.start_y.saturating_add(layout.frame_h / 2);
    for (dy, text) in [(0u16, title), (1, hint)] {
        let text_w = text.chars().count() as u16;
        let x = layout
            .start_x
            .saturating_add(layout.frame_w.saturating_sub(text_w) / 2);
        fb.put_str(x, mid_y.saturating_add(dy), text, style);
    }
}

/// Shortest rendering of `value` that fits in `max_w` columns: `2048`, `16k`, `2M`.
///
/// Falls back to `*` when nothing fits.
pub fn tile_label(value: Tile, max_w: usize, buf: &mut [u8; 12]) -> &str {
    let candidates = [(value, None), (value / 1024, Some(b'k')), (value / 1_048_576, Some(b'M'))];
    for (n, suffix) in candidates {
        if n == 0 {
            continue;
        }
        let len = write_digits(n, suffix, buf);
        if len <= max_w {
            return std::str::from_utf8(&buf[..len]).unwrap_or("*");
        }
    }
    "*"
}

fn write_digits(mut n: Tile, suffix: Option<u8>, buf: &mut [u8; 12]) -> usize {
    let mut tmp = [0u8; 10];
    let mut len = 0;
    loop {
        tmp[len] = b'0' + (n % 10) as u8;
        len += 1;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    for i in 0..len {
        buf[i] = tmp[len - 1 - i];
    }
    if let Some(s) = suffix {
        buf[len] = s;
        len += 1;
    }
    len
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(value: Tile, w: usize) -> String {
        let mut buf = [0u8; 12];
        tile_label(value, w, &mut buf).to_string()
    }

    #[test]
    fn labels_abbreviate_to_fit() {
        assert_eq!(label(2, 8), "2");
        assert_eq!(label(2048, 8), "2048");
        assert_eq!(label(2048, 3), "2k");
        assert_eq!(label(131072, 4), "128k");
        assert_eq!(label(4_194_304, 3), "4M");
        assert_eq!(label(1024, 1), "*");
    }

    #[test]
    fn classic_board_fits_with_panel() {
        let view = GameView::default();
        let l = view.layout(4, Viewport::new(80, 24));
        assert!(l.show_panel);
        assert_eq!((l.cell_w, l.cell_h), (8, 3));
        assert_eq!((l.gap_x, l.gap_y), (1, 1));
        assert!(l.start_x + l.frame_w + PANEL_W <= 80);
        assert!(l.start_y + l.frame_h <= 24);
    }

    #[test]
    fn largest_board_shrinks_to_fit() {
        let view = GameView::default();
        let l = view.layout(20, Viewport::new(80, 24));
        assert_eq!(l.gap_y, 0);
        assert_eq!(l.cell_h, 1);
        assert!(l.frame_h <= 24);
        assert!(l.start_x + l.frame_w <= 80);
    }

    #[test]
    fn tile_origins_step_by_cell_and_gap() {
        let view = GameView::default();
        let l = view.layout(4, Viewport::new(80, 24));
        let (x0, y0) = l.tile_origin(0, 0);
        let (x1, y1) = l.tile_origin(1, 1);
        assert_eq!(x1 - x0, l.cell_w + l.gap_x);
        assert_eq!(y1 - y0, l.cell_h + l.gap_y);
    }
}
