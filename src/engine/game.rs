//! The game engine: owns the state tuple and applies the four operations.
//!
//! ## Tick transition
//!
//! Each tick computes the candidate head one step along the current
//! heading, then checks it against the board edge and the snake body.
//! A plain move drops the tail in the same tick, so the cell the tail
//! vacates does not count as occupied; an eating move keeps the tail and
//! the whole body counts. A collision sets the terminal flag and leaves
//! the rest of the state untouched.
//!
//! ## State machine
//!
//! Running --collision--> Over --restart / submit_score--> Running.
//! `tick` is ignored while the game is over.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::input::Key;
use super::state::GameState;
use crate::core::{Direction, GameConfig, GameRng, GameRngState, Grid, Position};
use crate::leaderboard::Leaderboard;
use crate::view::Frame;

/// What ended a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollisionKind {
    /// The candidate head left the board.
    Wall,
    /// The candidate head hit the snake body.
    Body,
}

/// Result of a single tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The snake advanced one cell.
    Moved,
    /// The snake advanced onto the food and grew.
    Ate,
    /// The move collided; the game is now over.
    Fatal(CollisionKind),
    /// The game was already over; nothing happened.
    Ignored,
}

/// The game engine.
///
/// Holds the state tuple exclusively; frontends mutate it only through
/// [`tick`](Engine::tick), [`set_direction`](Engine::set_direction),
/// [`restart`](Engine::restart) and [`submit_score`](Engine::submit_score),
/// and read it through [`frame`](Engine::frame).
#[derive(Clone, Debug)]
pub struct Engine {
    config: GameConfig,
    grid: Grid,
    state: GameState,
    leaderboard: Leaderboard,
    rng: GameRng,
}

impl Engine {
    /// Create an engine with the built-in leaderboard seed.
    #[must_use]
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self::with_leaderboard(config, seed, Leaderboard::builtin())
    }

    /// Create an engine with a caller-supplied starting leaderboard.
    #[must_use]
    pub fn with_leaderboard(config: GameConfig, seed: u64, leaderboard: Leaderboard) -> Self {
        let grid = config.grid();
        let state = GameState::initial(&config);
        Self {
            config,
            grid,
            state,
            leaderboard,
            rng: GameRng::new(seed),
        }
    }

    /// Advance the game by one tick.
    ///
    /// Must be called on the fixed cadence from [`GameConfig`]; a no-op
    /// while the game is over.
    pub fn tick(&mut self) -> TickOutcome {
        if self.state.game_over {
            return TickOutcome::Ignored;
        }

        let candidate = self.state.snake.head().step(self.state.direction);
        let eats = candidate == self.state.food;

        if !self.grid.contains(candidate) {
            self.state.game_over = true;
            return TickOutcome::Fatal(CollisionKind::Wall);
        }
        if self.state.snake.would_collide(candidate, eats) {
            self.state.game_over = true;
            return TickOutcome::Fatal(CollisionKind::Body);
        }

        self.state.ticks += 1;
        if eats {
            self.state.snake.grow(candidate);
            self.state.score += 1;
            self.respawn_food();
            TickOutcome::Ate
        } else {
            self.state.snake.advance(candidate);
            TickOutcome::Moved
        }
    }

    /// Request a new heading.
    ///
    /// A reversal straight into the second segment is rejected; the
    /// latest accepted request before the next tick wins. Returns whether
    /// the request was applied.
    pub fn set_direction(&mut self, requested: Direction) -> bool {
        if requested.is_opposite(self.state.direction) {
            return false;
        }
        self.state.direction = requested;
        true
    }

    /// Apply a raw key event. Unrecognized keys are ignored.
    pub fn handle_key(&mut self, key: Key) -> bool {
        match key.direction() {
            Some(direction) => self.set_direction(direction),
            None => false,
        }
    }

    /// Headings a direction request may switch to right now.
    #[must_use]
    pub fn legal_directions(&self) -> SmallVec<[Direction; 3]> {
        Direction::ALL
            .into_iter()
            .filter(|d| !d.is_opposite(self.state.direction))
            .collect()
    }

    /// Reset the run to its starting state.
    ///
    /// The leaderboard survives (session-scoped); the RNG keeps its
    /// stream, so consecutive runs see different food while the whole
    /// session stays reproducible from the seed.
    pub fn restart(&mut self) {
        self.state = GameState::initial(&self.config);
    }

    /// Record the finished run on the leaderboard, then restart.
    ///
    /// Only meaningful while the game is over; a blank name is ignored.
    /// Returns whether an entry was recorded.
    pub fn submit_score(&mut self, name: &str) -> bool {
        if !self.state.game_over {
            return false;
        }
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return false;
        }

        self.leaderboard.record(trimmed, self.state.score);
        self.restart();
        true
    }

    /// Capture everything needed to rebuild this engine later.
    ///
    /// Checkpoints are plain serializable data; they stay in memory or
    /// cross a boundary as JSON, there is no storage layer behind them.
    #[must_use]
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            config: self.config.clone(),
            state: self.state.clone(),
            leaderboard: self.leaderboard.clone(),
            rng: self.rng.state(),
        }
    }

    /// Rebuild an engine from a checkpoint. The state is trusted as
    /// captured; no re-validation happens here.
    #[must_use]
    pub fn from_checkpoint(checkpoint: Checkpoint) -> Self {
        let grid = checkpoint.config.grid();
        Self {
            grid,
            config: checkpoint.config,
            state: checkpoint.state,
            leaderboard: checkpoint.leaderboard,
            rng: GameRng::from_state(&checkpoint.rng),
        }
    }

    fn respawn_food(&mut self) {
        let occupied = self.state.snake.occupied();
        let free: Vec<Position> = self
            .grid
            .cells()
            .filter(|cell| !occupied.contains(cell))
            .collect();

        // No free cell means the snake covers the board; the food stays
        // put and the next move ends the game.
        if let Some(&cell) = self.rng.choose(&free) {
            self.state.food = cell;
        }
    }

    /// Snapshot for rendering.
    #[must_use]
    pub fn frame(&self) -> Frame {
        Frame::capture(self)
    }

    // === Read-only access ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.state.score
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.game_over
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}

/// A full engine snapshot for replays and state restoration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Checkpoint {
    pub config: GameConfig,
    pub state: GameState,
    pub leaderboard: Leaderboard,
    pub rng: GameRngState,
}
