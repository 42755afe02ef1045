//! The snake body.
//!
//! An ordered sequence of cells: the head is the *last* element, the tail
//! the first. Backed by `im::Vector` so both ends update in O(1) and a
//! frame snapshot clones the body without copying it.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::Position;

/// Snake body, tail first, head last. Never empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snake {
    segments: Vector<Position>,
}

impl Snake {
    /// A one-segment snake at `head`.
    #[must_use]
    pub fn new(head: Position) -> Self {
        let mut segments = Vector::new();
        segments.push_back(head);
        Self { segments }
    }

    /// Build a snake from tail-to-head segment order.
    ///
    /// Panics on an empty segment list.
    #[must_use]
    pub fn from_segments(segments: impl IntoIterator<Item = Position>) -> Self {
        let segments: Vector<Position> = segments.into_iter().collect();
        assert!(!segments.is_empty(), "Snake must have at least one segment");
        Self { segments }
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// A snake is never empty; provided for clippy symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Head cell (last segment).
    #[must_use]
    pub fn head(&self) -> Position {
        *self.segments.back().expect("snake is never empty")
    }

    /// Tail cell (first segment).
    #[must_use]
    pub fn tail(&self) -> Position {
        *self.segments.front().expect("snake is never empty")
    }

    /// Iterate segments tail to head.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.segments.iter().copied()
    }

    /// Whether any segment occupies `cell`.
    #[must_use]
    pub fn contains(&self, cell: Position) -> bool {
        self.segments.iter().any(|&segment| segment == cell)
    }

    /// Whether moving the head to `candidate` would hit the body.
    ///
    /// On a growing move every segment counts. On a plain move the tail
    /// steps away in the same tick, so the cell it vacates is free to
    /// enter.
    #[must_use]
    pub fn would_collide(&self, candidate: Position, grows: bool) -> bool {
        if grows {
            self.contains(candidate)
        } else {
            self.segments
                .iter()
                .skip(1)
                .any(|&segment| segment == candidate)
        }
    }

    /// Advance one cell: new head appended, tail dropped. Length is
    /// preserved.
    pub fn advance(&mut self, new_head: Position) {
        self.segments.push_back(new_head);
        self.segments.pop_front();
    }

    /// Grow one cell: new head appended, tail kept.
    pub fn grow(&mut self, new_head: Position) {
        self.segments.push_back(new_head);
    }

    /// The set of occupied cells.
    #[must_use]
    pub fn occupied(&self) -> FxHashSet<Position> {
        self.segments.iter().copied().collect()
    }
}
