//! Key input mapping.
//!
//! Frontends translate their native key events into [`Key`] values; only
//! the four arrow keys carry meaning, everything else is ignored.

use serde::{Deserialize, Serialize};

use crate::core::Direction;

/// A key event as seen by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    /// Any key the game does not react to.
    Other,
}

impl Key {
    /// The direction this key requests, if any.
    #[must_use]
    pub fn direction(self) -> Option<Direction> {
        match self {
            Key::ArrowUp => Some(Direction::Up),
            Key::ArrowDown => Some(Direction::Down),
            Key::ArrowLeft => Some(Direction::Left),
            Key::ArrowRight => Some(Direction::Right),
            Key::Other => None,
        }
    }
}
