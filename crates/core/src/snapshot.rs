use crate::types::{SpawnPolicy, Tile, DEFAULT_BOARD_SIZE};

/// Everything a renderer needs from a [`GameState`](crate::GameState), detached from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub size: usize,
    pub cells: Vec<Tile>,
    pub score: u64,
    pub best: u64,
    pub game_over: bool,
    pub moves: u32,
    pub episode_id: u32,
    pub max_tile: Tile,
    pub empty_cells: usize,
    pub spawn_policy: SpawnPolicy,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.size = DEFAULT_BOARD_SIZE;
        self.cells.clear();
        self.cells.resize(DEFAULT_BOARD_SIZE * DEFAULT_BOARD_SIZE, 0);
        self.score = 0;
        self.best = 0;
        self.game_over = false;
        self.moves = 0;
        self.episode_id = 0;
        self.max_tile = 0;
        self.empty_cells = DEFAULT_BOARD_SIZE * DEFAULT_BOARD_SIZE;
        self.spawn_policy = SpawnPolicy::default();
    }

    /// Tile at `(row, col)`, `None` outside the board.
    pub fn tile(&self, row: usize, col: usize) -> Option<Tile> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells.get(row * self.size + col).copied()
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            size: 0,
            cells: Vec::new(),
            score: 0,
            best: 0,
            game_over: false,
            moves: 0,
            episode_id: 0,
            max_tile: 0,
            empty_cells: 0,
            spawn_policy: SpawnPolicy::default(),
        };
        s.clear();
        s
    }
}
