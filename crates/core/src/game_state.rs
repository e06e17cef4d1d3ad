//! Game state module - the host-owned session around the grid engine
//!
//! [`GameState`] holds everything that changes while playing: the current grid, score,
//! best score, and the derived game-over flag. It owns its [`RandomSource`] so a seeded game
//! is fully reproducible.
//!
//! A session ends when the board becomes terminal, on restart, on resize, or when the host
//! calls [`GameState::end_session`]. Ending a session folds the score into the best score;
//! a raised best is handed to the host exactly once through [`GameState::take_new_best`].

use log::{debug, info};

use crate::error::{GridError, GridResult};
use crate::grid::Grid;
use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::GameSnapshot;
use crate::types::{
    is_valid_board_size, Direction, GameAction, SpawnPolicy, MAX_BOARD_SIZE, MIN_BOARD_SIZE,
    STARTING_TILES,
};

/// Result of a directional move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The board was already terminal; nothing was applied.
    Blocked,
    Applied {
        /// Whether the slide changed any cell.
        changed: bool,
        /// Score gained from merges.
        gained: u64,
        /// Index of the spawned tile, if one was placed.
        spawned: Option<usize>,
        /// Whether the resulting board is terminal.
        game_over: bool,
    },
}

impl MoveOutcome {
    /// True if the grid differs from before the move.
    pub fn board_changed(&self) -> bool {
        match self {
            MoveOutcome::Blocked => false,
            MoveOutcome::Applied {
                changed, spawned, ..
            } => *changed || spawned.is_some(),
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    grid: Grid,
    rng: R,
    spawn_policy: SpawnPolicy,
    score: u64,
    best: u64,
    /// Best score raised by the last session end and not yet handed to the host.
    new_best: Option<u64>,
    game_over: bool,
    /// Accepted directional moves in the current session.
    moves: u32,
    /// Monotonic session id (increments on restart and resize).
    episode_id: u32,
}

impl GameState<SimpleRng> {
    /// Create a new game on a `size x size` board with the given RNG seed
    pub fn new(size: usize, seed: u32) -> GridResult<Self> {
        Self::with_rng(size, SimpleRng::new(seed))
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create a new game with the starting tiles already placed.
    pub fn with_rng(size: usize, mut rng: R) -> GridResult<Self> {
        let grid = fresh_grid(size, &mut rng)?;
        Ok(Self::from_grid(grid, rng))
    }

    /// Resume play on an existing grid. No tiles are spawned.
    pub fn from_grid(grid: Grid, rng: R) -> Self {
        let game_over = grid.is_terminal();
        Self {
            grid,
            rng,
            spawn_policy: SpawnPolicy::default(),
            score: 0,
            best: 0,
            new_best: None,
            game_over,
            moves: 0,
            episode_id: 0,
        }
    }

    pub fn with_spawn_policy(mut self, policy: SpawnPolicy) -> Self {
        self.spawn_policy = policy;
        self
    }

    /// Seed the best score (typically loaded from storage).
    pub fn with_best(mut self, best: u64) -> Self {
        self.best = best;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn best(&self) -> u64 {
        self.best
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn spawn_policy(&self) -> SpawnPolicy {
        self.spawn_policy
    }

    /// Slide the board toward `direction`, then spawn per the spawn policy.
    ///
    /// The terminal check runs against the board *before* the move. A terminal board is
    /// left untouched and the session is closed.
    pub fn apply_move(&mut self, direction: Direction) -> GridResult<MoveOutcome> {
        if self.grid.is_terminal() {
            self.game_over = true;
            self.end_session();
            return Ok(MoveOutcome::Blocked);
        }

        let (next, gained) = self.grid.shift(direction);
        let changed = next != self.grid;
        self.grid = next;
        self.score += gained;

        let spawned = match self.spawn_policy {
            SpawnPolicy::OnChange if !changed => None,
            SpawnPolicy::Always if self.grid.empty_count() == 0 => None,
            _ => Some(self.grid.spawn_random_tile(&mut self.rng)?),
        };

        if changed {
            self.moves += 1;
        }

        self.game_over = self.grid.is_terminal();
        debug!(
            "move {} changed={} gained={} spawned={:?} score={}",
            direction.as_str(),
            changed,
            gained,
            spawned,
            self.score
        );
        if self.game_over {
            info!(
                "game over on {0}x{0} board, score {1}",
                self.size(),
                self.score
            );
            self.end_session();
        }

        Ok(MoveOutcome::Applied {
            changed,
            gained,
            spawned,
            game_over: self.game_over,
        })
    }

    /// Apply a host action. Returns true if the visible state changed.
    pub fn apply_action(&mut self, action: GameAction) -> GridResult<bool> {
        if let Some(direction) = action.direction() {
            return Ok(self.apply_move(direction)?.board_changed());
        }
        match action {
            GameAction::Restart => {
                self.restart()?;
                Ok(true)
            }
            GameAction::GrowBoard => self.grow(),
            GameAction::ShrinkBoard => self.shrink(),
            _ => Ok(false),
        }
    }

    /// Start over on the same board size. Best score is kept.
    pub fn restart(&mut self) -> GridResult<()> {
        let size = self.size();
        self.reset(size)
    }

    /// Start over on a board of `size`. Returns false if the size is unchanged.
    pub fn resize(&mut self, size: usize) -> GridResult<bool> {
        if !is_valid_board_size(size) {
            return Err(GridError::SizeOutOfRange { size });
        }
        if size == self.size() {
            return Ok(false);
        }
        self.reset(size)?;
        Ok(true)
    }

    /// Grow the board by one, up to the maximum size.
    pub fn grow(&mut self) -> GridResult<bool> {
        if self.size() >= MAX_BOARD_SIZE {
            return Ok(false);
        }
        self.resize(self.size() + 1)
    }

    /// Shrink the board by one, down to the minimum size.
    pub fn shrink(&mut self) -> GridResult<bool> {
        if self.size() <= MIN_BOARD_SIZE {
            return Ok(false);
        }
        self.resize(self.size() - 1)
    }

    /// Close the current session: best becomes `max(best, score)`.
    ///
    /// Safe to call more than once.
    pub fn end_session(&mut self) {
        if self.score > self.best {
            info!("new best score {} (was {})", self.score, self.best);
            self.best = self.score;
            self.new_best = Some(self.best);
        }
    }

    /// Best score raised since the last call, if any.
    pub fn take_new_best(&mut self) -> Option<u64> {
        self.new_best.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.size = self.grid.size();
        out.cells.clear();
        out.cells.extend_from_slice(self.grid.cells());
        out.score = self.score;
        out.best = self.best;
        out.game_over = self.game_over;
        out.moves = self.moves;
        out.episode_id = self.episode_id;
        out.max_tile = self.grid.max_tile();
        out.empty_cells = self.grid.empty_count();
        out.spawn_policy = self.spawn_policy;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn reset(&mut self, size: usize) -> GridResult<()> {
        self.end_session();
        self.grid = fresh_grid(size, &mut self.rng)?;
        self.score = 0;
        self.moves = 0;
        self.game_over = false;
        self.episode_id = self.episode_id.wrapping_add(1);
        info!("new game {0} on {1}x{1} board", self.episode_id, size);
        Ok(())
    }
}

fn fresh_grid<R: RandomSource + ?Sized>(size: usize, rng: &mut R) -> GridResult<Grid> {
    let mut grid = Grid::new(size)?;
    for _ in 0..STARTING_TILES {
        grid.spawn_random_tile(rng)?;
    }
    Ok(grid)
}
