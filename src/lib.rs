//! TUI 2048 (workspace facade crate).
//!
//! The grid engine, input mapping and terminal renderer live in dedicated crates under
//! `crates/`; this package re-exports them as `tui_2048::{core,input,term,types}` and owns
//! the host-side pieces the binary needs: configuration, logging and best-score storage.

pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_term as term;
pub use tui_2048_types as types;

pub mod best_score;
pub mod config;
pub mod logging;

pub use best_score::{BestScoreStore, FileBestScore, MemoryBestScore};
pub use config::GameConfig;
