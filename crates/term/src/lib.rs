//! Terminal rendering for the 2048 board.
//!
//! A small, game-oriented rendering layer: the view draws into a plain
//! framebuffer and the renderer flushes that buffer to the terminal, diffing
//! against the previous frame.
//!
//! - [`fb`]: cells, styles, and the framebuffer itself
//! - [`palette`]: tile colours and font-size classes by tile value
//! - [`game_view`]: pure snapshot -> framebuffer mapping
//! - [`renderer`]: crossterm output (raw mode, alternate screen, mouse capture)

pub mod fb;
pub mod game_view;
pub mod palette;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{tile_label, AnchorY, BoardLayout, GameView, Viewport, PANEL_W};
pub use palette::{tile_style, TileStyle};
pub use renderer::{encode_diff_into, encode_full_into, ChangedRuns, Run, TerminalRenderer};
