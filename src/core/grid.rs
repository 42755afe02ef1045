//! Grid geometry: positions, directions, and board bounds.
//!
//! The board is a square grid of `size` x `size` cells. Positions use
//! signed coordinates so a candidate head one step past an edge is
//! representable; only `Grid::contains` decides validity.

use serde::{Deserialize, Serialize};

/// A cell coordinate on (or just off) the board.
///
/// Coordinates are signed: moving left from x = 0 yields x = -1, which is
/// a legal *value* but never a legal *cell*. Bounds checks live in
/// [`Grid::contains`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Create a position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighboring cell one step in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four movement directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
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

    /// Unit vector for this direction.
    ///
    /// The grid uses screen convention: y grows downward, so `Up` is
    /// (0, -1).
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The 180-degree reverse of this direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Whether `other` is the 180-degree reverse of `self`.
    #[must_use]
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        };
        write!(f, "{name}")
    }
}

/// Square board bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: i32,
}

impl Grid {
    /// Create a grid of `size` x `size` cells.
    #[must_use]
    pub fn new(size: i32) -> Self {
        assert!(size > 0, "Grid size must be positive");
        Self { size }
    }

    /// Side length in cells.
    #[must_use]
    pub const fn size(self) -> i32 {
        self.size
    }

    /// Total cell count.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        (self.size * self.size) as usize
    }

    /// Whether `position` is a cell on the board.
    #[must_use]
    pub fn contains(self, position: Position) -> bool {
        position.x >= 0 && position.y >= 0 && position.x < self.size && position.y < self.size
    }

    /// Iterate every cell, row-major from (0, 0).
    pub fn cells(self) -> impl Iterator<Item = Position> {
        let size = self.size;
        (0..size).flat_map(move |y| (0..size).map(move |x| Position::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step() {
        let p = Position::new(5, 5);

        assert_eq!(p.step(Direction::Up), Position::new(5, 4));
        assert_eq!(p.step(Direction::Down), Position::new(5, 6));
        assert_eq!(p.step(Direction::Left), Position::new(4, 5));
        assert_eq!(p.step(Direction::Right), Position::new(6, 5));
    }

    #[test]
    fn test_step_can_leave_board() {
        let p = Position::new(0, 0);
        assert_eq!(p.step(Direction::Left), Position::new(-1, 0));
        assert_eq!(p.step(Direction::Up), Position::new(0, -1));
    }

    #[test]
    fn test_opposites() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            assert!(d.is_opposite(d.opposite()));
            assert!(!d.is_opposite(d));
        }
    }

    #[test]
    fn test_grid_contains() {
        let grid = Grid::new(20);

        assert!(grid.contains(Position::new(0, 0)));
        assert!(grid.contains(Position::new(19, 19)));
        assert!(!grid.contains(Position::new(-1, 0)));
        assert!(!grid.contains(Position::new(0, -1)));
        assert!(!grid.contains(Position::new(20, 0)));
        assert!(!grid.contains(Position::new(0, 20)));
    }

    #[test]
    fn test_grid_cells_cover_board() {
        let grid = Grid::new(4);
        let cells: Vec<_> = grid.cells().collect();

        assert_eq!(cells.len(), grid.cell_count());
        assert_eq!(cells[0], Position::new(0, 0));
        assert_eq!(cells[15], Position::new(3, 3));
        assert!(cells.iter().all(|&c| grid.contains(c)));
    }
}
