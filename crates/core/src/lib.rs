//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the grid engine and the session state built on top of it.
//! It has **no dependencies** on terminal, input, or file I/O, making it:
//!
//! - **Deterministic**: the only randomness is an injected [`RandomSource`]
//! - **Testable**: every transform is a pure function over a flat tile slice
//! - **Portable**: can back a terminal, GUI, or headless host
//!
//! # Module Structure
//!
//! - [`grid`]: rotate / compress / terminal check / tile spawning, plus the [`Grid`] type
//! - [`game_state`]: host-owned session (score, best score, game-over flag, board size)
//! - [`rng`]: injectable randomness and a seedable LCG
//! - [`snapshot`]: detached copy of the state for renderers
//! - [`error`]: precondition failures
//!
//! # Game Rules
//!
//! - Every direction is "merge toward the left edge" after a change of basis:
//!   Left = compress, Right = rotate right twice / compress / rotate left twice,
//!   Up = rotate left / compress / rotate right, Down = rotate right / compress / rotate left
//! - A merged tile never merges again in the same move
//! - A new 2 or 4 (even odds) spawns on a random empty cell after a move, per [`SpawnPolicy`]
//! - The game is over when the board is full and no orthogonal neighbours are equal
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{GameState, MoveOutcome};
//! use tui_2048_core::types::Direction;
//!
//! let mut game = GameState::new(4, 12345).unwrap();
//! assert_eq!(game.grid().empty_count(), 14);
//!
//! match game.apply_move(Direction::Left).unwrap() {
//!     MoveOutcome::Applied { gained, .. } => assert_eq!(game.score(), gained),
//!     MoveOutcome::Blocked => unreachable!("fresh board cannot be terminal"),
//! }
//! ```

pub mod error;
pub mod game_state;
pub mod grid;
pub mod rng;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use error::{GridError, GridResult};
pub use game_state::{GameState, MoveOutcome};
pub use grid::{
    compress, empty_count, is_terminal, max_tile, pipeline, rotate_left, rotate_right, shift,
    spawn_random_tile, Grid, Pipeline, Turn,
};
pub use rng::{RandomSource, SequenceRng, SimpleRng};
pub use snapshot::GameSnapshot;
pub use types::SpawnPolicy;
