//! Pure presentation snapshots.
//!
//! A [`Frame`] is a plain-data copy of everything a renderer needs for
//! one draw: per-cell classification, score, terminal flag, leaderboard.
//! Capturing one never mutates the engine, so rendering stays entirely
//! outside the game logic and frames can cross process or wasm
//! boundaries as JSON.

use serde::{Deserialize, Serialize};

use crate::engine::Engine;
use crate::leaderboard::LeaderboardEntry;

/// What occupies a cell, for rendering purposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    Empty,
    SnakeBody,
    SnakeHead,
    Food,
}

/// One rendered-ready snapshot of the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    grid_size: i32,
    /// Row-major, `grid_size * grid_size` cells.
    cells: Vec<CellKind>,
    pub score: u32,
    pub game_over: bool,
    pub leaderboard: Vec<LeaderboardEntry>,
}

impl Frame {
    /// Snapshot `engine` as it stands.
    #[must_use]
    pub fn capture(engine: &Engine) -> Self {
        let grid = engine.grid();
        let state = engine.state();
        let size = grid.size();
        let mut cells = vec![CellKind::Empty; grid.cell_count()];

        let index = |x: i32, y: i32| (y * size + x) as usize;

        cells[index(state.food.x, state.food.y)] = CellKind::Food;
        for segment in state.snake.iter() {
            cells[index(segment.x, segment.y)] = CellKind::SnakeBody;
        }
        let head = state.snake.head();
        cells[index(head.x, head.y)] = CellKind::SnakeHead;

        Self {
            grid_size: size,
            cells,
            score: state.score,
            game_over: state.game_over,
            leaderboard: engine.leaderboard().entries().to_vec(),
        }
    }

    /// Board side length in cells.
    #[must_use]
    pub fn grid_size(&self) -> i32 {
        self.grid_size
    }

    /// Cell classification at (x, y).
    ///
    /// Panics if the coordinate is off the board.
    #[must_use]
    pub fn cell(&self, x: i32, y: i32) -> CellKind {
        assert!(
            x >= 0 && y >= 0 && x < self.grid_size && y < self.grid_size,
            "Cell ({x}, {y}) is off the board"
        );
        self.cells[(y * self.grid_size + x) as usize]
    }

    /// Rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellKind]> + '_ {
        self.cells.chunks(self.grid_size as usize)
    }
}

/// Debug-friendly ASCII board: `@` head, `#` body, `*` food, `.` empty.
impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            for cell in row {
                let glyph = match cell {
                    CellKind::Empty => '.',
                    CellKind::SnakeBody => '#',
                    CellKind::SnakeHead => '@',
                    CellKind::Food => '*',
                };
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;

    #[test]
    fn test_capture_initial_frame() {
        let engine = Engine::new(GameConfig::default(), 42);
        let frame = engine.frame();

        assert_eq!(frame.grid_size(), 20);
        assert_eq!(frame.cell(10, 10), CellKind::SnakeHead);
        assert_eq!(frame.cell(5, 5), CellKind::Food);
        assert_eq!(frame.cell(0, 0), CellKind::Empty);
        assert_eq!(frame.score, 0);
        assert!(!frame.game_over);
        assert_eq!(frame.leaderboard.len(), 3);
    }

    #[test]
    fn test_capture_does_not_mutate() {
        let engine = Engine::new(GameConfig::default(), 42);

        let first = engine.frame();
        let second = engine.frame();

        assert_eq!(first, second);
    }

    #[test]
    fn test_ascii_rendering() {
        let engine = Engine::new(
            crate::core::GameBuilder::new()
                .grid_size(4)
                .initial_snake(crate::core::Position::new(1, 0))
                .initial_food(crate::core::Position::new(3, 0))
                .build(),
            42,
        );

        let text = engine.frame().to_string();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], ".@.*");
        assert_eq!(lines[1], "....");
    }

    #[test]
    fn test_frame_serializes() {
        let engine = Engine::new(GameConfig::default(), 42);
        let json = serde_json::to_string(&engine.frame()).unwrap();
        let back: Frame = serde_json::from_str(&json).unwrap();

        assert_eq!(back, engine.frame());
    }
}
