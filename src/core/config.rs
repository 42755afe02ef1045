//! Game configuration.
//!
//! The engine hardcodes no board geometry or timing: a [`GameConfig`]
//! fixes the grid size, tick cadence, and starting layout at startup.
//! The defaults reproduce the classic setup (20x20 board, 200 ms ticks,
//! snake at (10, 10), food at (5, 5), heading right).

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::grid::{Direction, Grid, Position};

/// Fixed parameters of a game, decided once at startup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board side length in cells.
    pub grid_size: i32,

    /// Interval between ticks while the game is running.
    pub tick_interval: Duration,

    /// Starting head cell. The snake starts as this single segment.
    pub initial_snake: Position,

    /// Starting food cell.
    pub initial_food: Position,

    /// Starting heading.
    pub initial_direction: Direction,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            tick_interval: Duration::from_millis(200),
            initial_snake: Position::new(10, 10),
            initial_food: Position::new(5, 5),
            initial_direction: Direction::Right,
        }
    }
}

impl GameConfig {
    /// Board bounds for this configuration.
    #[must_use]
    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_size)
    }
}

/// Builder for a [`GameConfig`] with validation.
pub struct GameBuilder {
    config: GameConfig,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grid_size(mut self, size: i32) -> Self {
        assert!(size >= 4, "Grid size must be at least 4");
        self.config.grid_size = size;
        self
    }

    pub fn tick_interval(mut self, interval: Duration) -> Self {
        assert!(!interval.is_zero(), "Tick interval must be non-zero");
        self.config.tick_interval = interval;
        self
    }

    pub fn initial_snake(mut self, position: Position) -> Self {
        self.config.initial_snake = position;
        self
    }

    pub fn initial_food(mut self, position: Position) -> Self {
        self.config.initial_food = position;
        self
    }

    pub fn initial_direction(mut self, direction: Direction) -> Self {
        self.config.initial_direction = direction;
        self
    }

    /// Finish the configuration.
    ///
    /// Panics if the starting snake or food lie off the board, or if the
    /// food starts on the snake.
    #[must_use]
    pub fn build(self) -> GameConfig {
        let grid = self.config.grid();
        assert!(
            grid.contains(self.config.initial_snake),
            "Initial snake must be on the board"
        );
        assert!(
            grid.contains(self.config.initial_food),
            "Initial food must be on the board"
        );
        assert_ne!(
            self.config.initial_snake, self.config.initial_food,
            "Initial food must not start on the snake"
        );
        self.config
    }
}
