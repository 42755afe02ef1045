//! The game engine: state tuple, tick transition, and input handling.

pub mod game;
pub mod input;
pub mod snake;
pub mod state;

pub use game::{Checkpoint, CollisionKind, Engine, TickOutcome};
pub use input::Key;
pub use snake::Snake;
pub use state::GameState;
