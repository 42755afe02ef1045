//! The mutable game state tuple.

use serde::{Deserialize, Serialize};

use super::snake::Snake;
use crate::core::{Direction, GameConfig, Position};

/// Everything that changes during a run.
///
/// Mutated only by the engine's four operations; renderers read it
/// through frame snapshots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The snake body, tail first.
    pub snake: Snake,

    /// Current food cell.
    pub food: Position,

    /// Current heading, applied on the next tick.
    pub direction: Direction,

    /// Food eaten this run.
    pub score: u32,

    /// Terminal flag. Once set, ticks are ignored until restart.
    pub game_over: bool,

    /// Ticks applied this run.
    pub ticks: u64,
}

impl GameState {
    /// The starting state for `config`.
    #[must_use]
    pub fn initial(config: &GameConfig) -> Self {
        Self {
            snake: Snake::new(config.initial_snake),
            food: config.initial_food,
            direction: config.initial_direction,
            score: 0,
            game_over: false,
            ticks: 0,
        }
    }
}
