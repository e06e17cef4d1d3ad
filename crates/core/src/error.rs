//! Engine precondition failures.

use thiserror::Error;

use crate::types::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// A caller broke one of the engine's input contracts.
///
/// Grid contents never cause an error; only the shape of the input or a spawn request on a
/// full grid do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("board size {size} is outside [{min}, {max}]", min = MIN_BOARD_SIZE, max = MAX_BOARD_SIZE)]
    SizeOutOfRange { size: usize },

    #[error("grid has {len} cells, a {size}x{size} board needs {cells}", cells = .size * .size)]
    LengthMismatch { size: usize, len: usize },

    #[error("no empty cell to spawn a tile into")]
    NoEmptyCell,
}

pub type GridResult<T> = Result<T, GridError>;
