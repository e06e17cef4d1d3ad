//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`]s and turns mouse drags into
//! swipe directions, so pointer input works the same way as the arrow keys.

pub mod map;
pub mod swipe;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
pub use swipe::SwipeTracker;
