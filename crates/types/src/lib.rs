//! Core types module - shared data structures and constants
//!
//! This module defines the vocabulary shared by the engine, the input layer and the
//! terminal renderer. All types are plain data with no external dependencies.
//!
//! # Board Dimensions
//!
//! The board is a square of `size x size` cells stored row-major
//! (`index = row * size + col`):
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MIN_BOARD_SIZE` | 3 | Smallest playable board |
//! | `MAX_BOARD_SIZE` | 20 | Largest board the size control allows |
//! | `DEFAULT_BOARD_SIZE` | 4 | Classic 4x4 board |
//! | `MAX_CELLS` | 400 | `MAX_BOARD_SIZE²` |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, SpawnPolicy};
//!
//! let dir = Direction::from_str("up").unwrap();
//! assert_eq!(dir, Direction::Up);
//!
//! let action = GameAction::from_str("moveLeft").unwrap();
//! assert_eq!(action.direction(), Some(Direction::Left));
//!
//! assert_eq!(SpawnPolicy::from_str("always"), Some(SpawnPolicy::Always));
//! ```

/// A single cell value. `0` is empty, anything else is a power of two >= 2.
pub type Tile = u32;

/// Smallest board side length.
pub const MIN_BOARD_SIZE: usize = 3;

/// Largest board side length reachable through the size control.
pub const MAX_BOARD_SIZE: usize = 20;

/// Board side length used when nothing else is configured.
pub const DEFAULT_BOARD_SIZE: usize = 4;

/// Cell count of the largest board.
pub const MAX_CELLS: usize = MAX_BOARD_SIZE * MAX_BOARD_SIZE;

/// Number of tiles placed on a freshly initialised board.
pub const STARTING_TILES: usize = 2;

/// Returns true if `size` is inside `[MIN_BOARD_SIZE, MAX_BOARD_SIZE]`.
pub fn is_valid_board_size(size: usize) -> bool {
    (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size)
}

/// Direction tiles slide in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse a direction (case-insensitive, full name or first letter).
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("LEFT"), Some(Direction::Left));
    /// assert_eq!(Direction::from_str("d"), Some(Direction::Down));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Actions a host can apply to a running game.
///
/// Used by both keyboard and mouse-swipe input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide every tile up
    MoveUp,
    /// Slide every tile down
    MoveDown,
    /// Slide every tile left
    MoveLeft,
    /// Slide every tile right
    MoveRight,
    /// Start a new game on the same board size
    Restart,
    /// Increase the board size by one (starts a new game)
    GrowBoard,
    /// Decrease the board size by one (starts a new game)
    ShrinkBoard,
}

impl GameAction {
    /// Parse action from its camelCase name (case-insensitive).
    ///
    /// ```
    /// use tui_2048_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveUp"), Some(GameAction::MoveUp));
    /// assert_eq!(GameAction::from_str("growboard"), Some(GameAction::GrowBoard));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveup" => Some(GameAction::MoveUp),
            "movedown" => Some(GameAction::MoveDown),
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "restart" => Some(GameAction::Restart),
            "growboard" => Some(GameAction::GrowBoard),
            "shrinkboard" => Some(GameAction::ShrinkBoard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveUp => "moveUp",
            GameAction::MoveDown => "moveDown",
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Restart => "restart",
            GameAction::GrowBoard => "growBoard",
            GameAction::ShrinkBoard => "shrinkBoard",
        }
    }

    /// The slide direction for move actions, `None` for everything else.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            GameAction::MoveUp => Some(Direction::Up),
            GameAction::MoveDown => Some(Direction::Down),
            GameAction::MoveLeft => Some(Direction::Left),
            GameAction::MoveRight => Some(Direction::Right),
            _ => None,
        }
    }
}

impl From<Direction> for GameAction {
    fn from(value: Direction) -> Self {
        match value {
            Direction::Up => GameAction::MoveUp,
            Direction::Down => GameAction::MoveDown,
            Direction::Left => GameAction::MoveLeft,
            Direction::Right => GameAction::MoveRight,
        }
    }
}

/// When a new tile is injected after a directional move.
///
/// - **OnChange**: only if the move changed the grid
/// - **Always**: after every move, skipped only when the grid has no empty cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpawnPolicy {
    #[default]
    OnChange,
    Always,
}

impl SpawnPolicy {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "on-change" | "onchange" | "changed" => Some(SpawnPolicy::OnChange),
            "always" => Some(SpawnPolicy::Always),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SpawnPolicy::OnChange => "on-change",
            SpawnPolicy::Always => "always",
        }
    }
}
