//! Grid engine - pure transforms over a flat, row-major square grid
//!
//! Every direction is expressed as a change of basis onto "merge toward the left edge":
//! the grid is rotated, compressed row by row, and rotated back. Only one merge primitive
//! exists ([`compress`]); [`pipeline`] holds the per-direction rotation table.
//!
//! The free functions take a raw `&[Tile]` plus its side length and validate that shape
//! before doing anything. [`Grid`] carries the shape invariant with it, so its methods skip
//! the checks.

use arrayvec::ArrayVec;

use crate::error::{GridError, GridResult};
use crate::rng::RandomSource;
use crate::types::{is_valid_board_size, Direction, Tile, MAX_BOARD_SIZE};

/// Quarter turn applied to the whole grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// 90° counter-clockwise
    Left,
    /// 90° clockwise
    Right,
}

/// Rotations applied before and after the left-compress for one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pipeline {
    pub before: &'static [Turn],
    pub after: &'static [Turn],
}

const LEFT: Pipeline = Pipeline {
    before: &[],
    after: &[],
};
const RIGHT: Pipeline = Pipeline {
    before: &[Turn::Right, Turn::Right],
    after: &[Turn::Left, Turn::Left],
};
const UP: Pipeline = Pipeline {
    before: &[Turn::Left],
    after: &[Turn::Right],
};
const DOWN: Pipeline = Pipeline {
    before: &[Turn::Right],
    after: &[Turn::Left],
};

/// Rotation table for `direction`.
pub fn pipeline(direction: Direction) -> Pipeline {
    match direction {
        Direction::Left => LEFT,
        Direction::Right => RIGHT,
        Direction::Up => UP,
        Direction::Down => DOWN,
    }
}

/// Check that `cells` describes a `size x size` board with a supported side length.
pub fn check_shape(cells: &[Tile], size: usize) -> GridResult<()> {
    if !is_valid_board_size(size) {
        return Err(GridError::SizeOutOfRange { size });
    }
    if cells.len() != size * size {
        return Err(GridError::LengthMismatch {
            size,
            len: cells.len(),
        });
    }
    Ok(())
}

/// Rotate 90° counter-clockwise.
///
/// ```
/// use tui_2048_core::grid::rotate_left;
///
/// let g = vec![1, 2, 3, 4, 5, 6, 7, 8, 9];
/// assert_eq!(rotate_left(&g, 3).unwrap(), vec![3, 6, 9, 2, 5, 8, 1, 4, 7]);
/// ```
pub fn rotate_left(cells: &[Tile], size: usize) -> GridResult<Vec<Tile>> {
    check_shape(cells, size)?;
    Ok(rotate_left_unchecked(cells, size))
}

/// Rotate 90° clockwise. Inverse of [`rotate_left`].
///
/// ```
/// use tui_2048_core::grid::rotate_right;
///
/// let g = vec![1, 2, 3, 4, 5, 6, 7, 8, 9];
/// assert_eq!(rotate_right(&g, 3).unwrap(), vec![7, 4, 1, 8, 5, 2, 9, 6, 3]);
/// ```
pub fn rotate_right(cells: &[Tile], size: usize) -> GridResult<Vec<Tile>> {
    check_shape(cells, size)?;
    Ok(rotate_right_unchecked(cells, size))
}

/// Slide and merge every row toward the left edge.
///
/// Returns the new grid and the sum of all merged tile values. A tile produced by a merge
/// never merges again in the same call, so `[2, 2, 2, 2]` becomes `[4, 4, 0, 0]`.
///
/// ```
/// use tui_2048_core::grid::compress;
///
/// let g = vec![2, 2, 2, 0, 0, 0, 0, 0, 4, 0, 4, 4, 0, 0, 0, 0];
/// let (out, gained) = compress(&g, 4).unwrap();
/// assert_eq!(&out[..4], &[4, 2, 0, 0]);
/// assert_eq!(&out[8..12], &[8, 4, 0, 0]);
/// assert_eq!(gained, 12);
/// ```
pub fn compress(cells: &[Tile], size: usize) -> GridResult<(Vec<Tile>, u64)> {
    check_shape(cells, size)?;
    Ok(compress_unchecked(cells, size))
}

/// Apply the full rotate → compress → rotate pipeline for `direction`.
pub fn shift(cells: &[Tile], size: usize, direction: Direction) -> GridResult<(Vec<Tile>, u64)> {
    check_shape(cells, size)?;
    Ok(shift_unchecked(cells, size, direction))
}

/// True iff the grid is full and no two orthogonally adjacent tiles are equal.
///
/// Evaluate this on the grid *before* a move: it answers "can anything still move", not
/// "did the last move change something".
pub fn is_terminal(cells: &[Tile], size: usize) -> GridResult<bool> {
    check_shape(cells, size)?;
    Ok(is_terminal_unchecked(cells, size))
}

/// Place a 2 or a 4 (even odds) on a uniformly chosen empty cell.
///
/// Fails with [`GridError::NoEmptyCell`] when the grid is full.
pub fn spawn_random_tile<R: RandomSource + ?Sized>(
    cells: &[Tile],
    rng: &mut R,
) -> GridResult<Vec<Tile>> {
    let mut out = cells.to_vec();
    spawn_into(&mut out, rng)?;
    Ok(out)
}

/// Number of empty cells.
pub fn empty_count(cells: &[Tile]) -> usize {
    cells.iter().filter(|&&t| t == 0).count()
}

/// Largest tile on the board (0 for an empty board).
pub fn max_tile(cells: &[Tile]) -> Tile {
    cells.iter().copied().max().unwrap_or(0)
}

fn rotate_left_unchecked(cells: &[Tile], n: usize) -> Vec<Tile> {
    let mut out = vec![0; n * n];
    for i in 0..n {
        for j in 0..n {
            out[j + i * n] = cells[(n - 1 - i) + j * n];
        }
    }
    out
}

fn rotate_right_unchecked(cells: &[Tile], n: usize) -> Vec<Tile> {
    let mut out = vec![0; n * n];
    for i in 0..n {
        for j in 0..n {
            out[j + i * n] = cells[i + (n - 1 - j) * n];
        }
    }
    out
}

fn turn(cells: Vec<Tile>, n: usize, turns: &[Turn]) -> Vec<Tile> {
    turns.iter().fold(cells, |acc, t| match t {
        Turn::Left => rotate_left_unchecked(&acc, n),
        Turn::Right => rotate_right_unchecked(&acc, n),
    })
}

fn compress_unchecked(cells: &[Tile], n: usize) -> (Vec<Tile>, u64) {
    let mut out = vec![0; n * n];
    let mut gained = 0;
    for (src, dst) in cells.chunks_exact(n).zip(out.chunks_exact_mut(n)) {
        gained += compress_row(src, dst);
    }
    (out, gained)
}

/// Collapse one row into `out` (which must be zeroed and the same length as `row`).
fn compress_row(row: &[Tile], out: &mut [Tile]) -> u64 {
    // After compaction zeros only trail, so the scan naturally stops at the first one.
    let mut line: ArrayVec<Tile, MAX_BOARD_SIZE> =
        row.iter().copied().filter(|&t| t != 0).collect();
    let mut gained = 0u64;

    let mut j = 0;
    while j + 1 < line.len() {
        if line[j] == line[j + 1] {
            line[j] *= 2;
            gained += line[j] as u64;
            // Zeroing the right tile and re-collapsing is the same as removing it.
            line.remove(j + 1);
        }
        j += 1;
    }

    out[..line.len()].copy_from_slice(&line);
    gained
}

fn shift_unchecked(cells: &[Tile], n: usize, direction: Direction) -> (Vec<Tile>, u64) {
    let p = pipeline(direction);
    let rotated = turn(cells.to_vec(), n, p.before);
    let (compressed, gained) = compress_unchecked(&rotated, n);
    (turn(compressed, n, p.after), gained)
}

fn is_terminal_unchecked(cells: &[Tile], n: usize) -> bool {
    if cells.contains(&0) {
        return false;
    }
    let horizontal = cells
        .chunks_exact(n)
        .any(|row| row.windows(2).any(|w| w[0] == w[1]));
    let vertical = cells.iter().zip(&cells[n..]).any(|(a, b)| a == b);
    !(horizontal || vertical)
}

fn spawn_into<R: RandomSource + ?Sized>(cells: &mut [Tile], rng: &mut R) -> GridResult<usize> {
    let empty = empty_count(cells);
    if empty == 0 {
        return Err(GridError::NoEmptyCell);
    }

    let pick = rng.next_below(empty as u32) as usize;
    let value = if rng.next_bool() { 2 } else { 4 };

    let idx = cells
        .iter()
        .enumerate()
        .filter(|(_, &t)| t == 0)
        .map(|(i, _)| i)
        .nth(pick)
        .ok_or(GridError::NoEmptyCell)?;
    cells[idx] = value;
    Ok(idx)
}

/// A validated `size x size` board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    cells: Vec<Tile>,
}

impl Grid {
    /// Empty board of the given side length.
    pub fn new(size: usize) -> GridResult<Self> {
        Self::from_cells(size, vec![0; size * size])
    }

    /// Wrap a flat row-major cell vector.
    pub fn from_cells(size: usize, cells: Vec<Tile>) -> GridResult<Self> {
        check_shape(&cells, size)?;
        Ok(Self { size, cells })
    }

    /// Build from rows; the side length is the number of rows.
    pub fn from_rows<R: AsRef<[Tile]>>(rows: &[R]) -> GridResult<Self> {
        let size = rows.len();
        let cells: Vec<Tile> = rows
            .iter()
            .flat_map(|r| r.as_ref().iter().copied())
            .collect();
        Self::from_cells(size, cells)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<Tile> {
        self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(self.cells[row * self.size + col])
    }

    pub fn empty_count(&self) -> usize {
        empty_count(&self.cells)
    }

    pub fn max_tile(&self) -> Tile {
        max_tile(&self.cells)
    }

    pub fn rotate_left(&self) -> Self {
        self.with_cells(rotate_left_unchecked(&self.cells, self.size))
    }

    pub fn rotate_right(&self) -> Self {
        self.with_cells(rotate_right_unchecked(&self.cells, self.size))
    }

    pub fn compress(&self) -> (Self, u64) {
        let (cells, gained) = compress_unchecked(&self.cells, self.size);
        (self.with_cells(cells), gained)
    }

    /// Slide toward `direction`, returning the new grid and the merge score.
    pub fn shift(&self, direction: Direction) -> (Self, u64) {
        let (cells, gained) = shift_unchecked(&self.cells, self.size, direction);
        (self.with_cells(cells), gained)
    }

    pub fn is_terminal(&self) -> bool {
        is_terminal_unchecked(&self.cells, self.size)
    }

    /// Spawn a tile in place, returning the index it landed on.
    pub fn spawn_random_tile<R: RandomSource + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> GridResult<usize> {
        spawn_into(&mut self.cells, rng)
    }

    fn with_cells(&self, cells: Vec<Tile>) -> Self {
        Self {
            size: self.size,
            cells,
        }
    }
}
