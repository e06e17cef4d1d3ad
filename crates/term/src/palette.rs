//! Tile colours.
//!
//! Empty cells use a single flat colour. Non-empty tiles index a 13-entry style table by
//! `floor(log2(value)) mod 13`, so values past 8192 wrap around. Entry `i` takes its
//! colours from 12-entry lists at `i mod 12`. Font sizes are kept for parity with the
//! browser version; the terminal cannot scale glyphs and ignores them.

use crate::fb::{CellStyle, Rgb};
use crate::types::Tile;

/// Style of one tile value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub font_size: &'static str,
}

impl TileStyle {
    pub fn cell_style(&self) -> CellStyle {
        CellStyle::new(self.fg, self.bg).bold()
    }
}

pub const EMPTY_COLOR: Rgb = Rgb::new(187, 173, 160);

const DARK_TEXT: Rgb = Rgb::new(119, 110, 101);
const LIGHT_TEXT: Rgb = Rgb::new(249, 246, 242);

const FOREGROUNDS: [Rgb; 12] = [
    DARK_TEXT, DARK_TEXT, LIGHT_TEXT, LIGHT_TEXT, LIGHT_TEXT, LIGHT_TEXT, LIGHT_TEXT,
    LIGHT_TEXT, LIGHT_TEXT, LIGHT_TEXT, LIGHT_TEXT, LIGHT_TEXT,
];

const BACKGROUNDS: [Rgb; 12] = [
    Rgb::new(238, 228, 218),
    Rgb::new(237, 224, 200),
    Rgb::new(242, 177, 121),
    Rgb::new(245, 149, 99),
    Rgb::new(246, 124, 95),
    Rgb::new(246, 94, 59),
    Rgb::new(237, 207, 114),
    Rgb::new(237, 204, 97),
    Rgb::new(237, 200, 80),
    Rgb::new(237, 197, 63),
    Rgb::new(237, 194, 46),
    Rgb::new(60, 58, 50),
];

const FONT_SIZES: [&str; 13] = [
    "2rem", "2rem", "2rem", "1.9rem", "1.9rem", "1.9rem", "1.7rem", "1.7rem", "1.7rem",
    "1.5rem", "1.5rem", "1.5rem", "1.5rem",
];

/// Number of distinct tile styles before the table wraps.
pub const STYLE_COUNT: usize = FONT_SIZES.len();

const fn style_at(i: usize) -> TileStyle {
    TileStyle {
        fg: FOREGROUNDS[i % FOREGROUNDS.len()],
        bg: BACKGROUNDS[i % BACKGROUNDS.len()],
        font_size: FONT_SIZES[i],
    }
}

const STYLES: [TileStyle; STYLE_COUNT] = [
    style_at(0),
    style_at(1),
    style_at(2),
    style_at(3),
    style_at(4),
    style_at(5),
    style_at(6),
    style_at(7),
    style_at(8),
    style_at(9),
    style_at(10),
    style_at(11),
    style_at(12),
];

const EMPTY_STYLE: TileStyle = TileStyle {
    fg: EMPTY_COLOR,
    bg: EMPTY_COLOR,
    font_size: "2rem",
};

/// Style for a tile value.
pub fn tile_style(value: Tile) -> TileStyle {
    if value == 0 {
        return EMPTY_STYLE;
    }
    STYLES[value.ilog2() as usize % STYLE_COUNT]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tile_is_flat() {
        let s = tile_style(0);
        assert_eq!(s.fg.to_hex(), "#bbada0");
        assert_eq!(s.bg.to_hex(), "#bbada0");
        assert_eq!(s.font_size, "2rem");
    }

    #[test]
    fn index_is_log2_mod_13() {
        // log2(2) = 1 selects the second entry.
        assert_eq!(tile_style(2).bg.to_hex(), "#ede0c8");
        assert_eq!(tile_style(2).fg.to_hex(), "#776e65");
        assert_eq!(tile_style(4).bg.to_hex(), "#f2b179");
        assert_eq!(tile_style(4).fg.to_hex(), "#f9f6f2");
        assert_eq!(tile_style(2048).bg.to_hex(), "#3c3a32");
        assert_eq!(tile_style(2048).font_size, "1.5rem");
    }

    #[test]
    fn thirteenth_entry_reuses_first_colours() {
        let s = tile_style(4096);
        assert_eq!(s.bg.to_hex(), "#eee4da");
        assert_eq!(s.fg.to_hex(), "#776e65");
        assert_eq!(s.font_size, "1.5rem");
    }

    #[test]
    fn large_values_wrap() {
        assert_eq!(tile_style(8192), tile_style(1));
        assert_eq!(tile_style(8192).font_size, "2rem");
        assert_eq!(tile_style(16384), tile_style(2));
    }

    #[test]
    fn font_sizes_step_down() {
        assert_eq!(tile_style(4).font_size, "2rem");
        assert_eq!(tile_style(8).font_size, "1.9rem");
        assert_eq!(tile_style(32).font_size, "1.9rem");
        assert_eq!(tile_style(64).font_size, "1.7rem");
        assert_eq!(tile_style(1024).font_size, "1.5rem");
    }
}
