//! # term2048 Core Engine
//!
//! Game logic for a terminal 2048: the grid, the direction-agnostic move
//! engine, tile spawning, game-over detection, score and high-score tracking,
//! and the session state machine that drives a front end. Nothing here touches
//! the terminal; front ends implement [`view::Renderer`].
//!
//! ## Example
//!
//! ```rust
//! use term2048_core::{Direction, Game, MemoryStore};
//!
//! let mut game = Game::new(42, MemoryStore::default());
//! let result = game.step(Direction::Left);
//! println!("Score: {}, Changed: {}", game.score(), result.changed);
//! ```

use log::debug;
use rand::rngs::SmallRng;
use rand::SeedableRng;

pub mod config;
pub mod direction;
pub mod game_over;
pub mod grid;
pub mod moves;
pub mod score;
pub mod session;
pub mod spawn;
pub mod store;
pub mod view;

pub use direction::Direction;
pub use grid::{Grid, SIZE};
pub use moves::MoveResult;
pub use session::{Command, Phase, Session};
pub use store::{FileStore, HighScoreStore, MemoryStore};
pub use view::{Renderer, View};

use score::ScoreTracker;

/// Result of executing a step (move) in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    /// Whether the board changed (and a new tile was spawned).
    pub changed: bool,
    /// Points earned from merges in this move.
    pub reward: u32,
    /// Whether the game is over (no legal moves remaining).
    pub done: bool,
    /// Whether this move set a new high score.
    pub new_high_score: bool,
}

/// One game of 2048: grid, score, best score and the spawn RNG.
pub struct Game<S> {
    grid: Grid,
    tracker: ScoreTracker<S>,
    rng: SmallRng,
    done: bool,
}

impl<S: HighScoreStore> Game<S> {
    /// Create a new game with the given seed.
    ///
    /// The game starts with two random tiles (90% chance of 2, 10% chance of 4).
    pub fn new(seed: u64, store: S) -> Self {
        Self::start(SmallRng::seed_from_u64(seed), store)
    }

    /// Create a new game seeded from OS entropy.
    pub fn from_entropy(store: S) -> Self {
        Self::start(SmallRng::from_entropy(), store)
    }

    /// Continue from an existing grid. No tiles are spawned.
    pub fn from_grid(grid: Grid, seed: u64, store: S) -> Self {
        let mut game = Game {
            grid,
            tracker: ScoreTracker::new(store),
            rng: SmallRng::seed_from_u64(seed),
            done: false,
        };
        game.update_done();
        game
    }

    fn start(rng: SmallRng, store: S) -> Self {
        let mut game = Game {
            grid: Grid::EMPTY,
            tracker: ScoreTracker::new(store),
            rng,
            done: false,
        };
        game.deal();
        game
    }

    /// Clear the board, zero the score and deal two fresh tiles.
    ///
    /// The RNG stream continues; the best score is kept.
    pub fn reset(&mut self) {
        debug!("reset at score {}", self.tracker.score());
        self.grid.clear();
        self.tracker.reset();
        self.deal();
    }

    fn deal(&mut self) {
        spawn::spawn_tile(&mut self.grid, &mut self.rng);
        spawn::spawn_tile(&mut self.grid, &mut self.rng);
        self.update_done();
    }

    /// Execute a move in the given direction.
    ///
    /// If the move doesn't change the board, no tile is spawned. Once the game
    /// is over every step is a no-op.
    pub fn step(&mut self, dir: Direction) -> StepResult {
        if self.done {
            return StepResult {
                changed: false,
                reward: 0,
                done: true,
                new_high_score: false,
            };
        }

        let moved = moves::apply_move(&mut self.grid, dir);
        if moved.changed {
            spawn::spawn_tile(&mut self.grid, &mut self.rng);
        }
        let new_high_score = self.tracker.record(moved.score_delta);

        self.update_done();

        StepResult {
            changed: moved.changed,
            reward: moved.score_delta,
            done: self.done,
            new_high_score,
        }
    }

    /// Check if the game is over (no legal moves available).
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Get the legal moves as a boolean array [Up, Down, Left, Right].
    ///
    /// A move is legal if it would change the board.
    pub fn legal_moves(&self) -> [bool; 4] {
        Direction::ALL.map(|dir| moves::can_move(&self.grid, dir))
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u32 {
        self.tracker.score()
    }

    pub fn high_score(&self) -> u32 {
        self.tracker.high_score()
    }

    pub fn max_tile(&self) -> u32 {
        self.grid.max_tile()
    }

    pub fn empty_count(&self) -> usize {
        self.grid.empty_count()
    }

    pub fn store(&self) -> &S {
        self.tracker.store()
    }

    fn update_done(&mut self) {
        self.done = game_over::is_game_over(&self.grid);
    }
}

impl<S> std::fmt::Debug for Game<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("score", &self.tracker.score())
            .field("high_score", &self.tracker.high_score())
            .field("done", &self.done)
            .field("grid", &self.grid)
            .finish()
    }
}

impl<S> std::fmt::Display for Game<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Score: {}", self.tracker.score())?;
        write!(f, "{}", self.grid)
    }
}

// =============================================================================
// Tests
// =============================================================================
