//! # grid-snake
//!
//! A deterministic, headless snake game engine.
//!
//! ## Design Principles
//!
//! 1. **UI-Agnostic**: The engine owns the state and exposes plain-data
//!    [`Frame`] snapshots; rendering, windowing, and key decoding live
//!    entirely in the frontend.
//!
//! 2. **Deterministic**: Food placement runs on a seeded ChaCha8 RNG.
//!    The same seed and input sequence reproduce a whole session.
//!
//! 3. **Scoped Resources**: The tick schedule and input queue are owned
//!    by a [`Session`], armed at start and released on restart or drop,
//!    never tied to a rendering framework's lifecycle.
//!
//! ## Architecture
//!
//! Four operations mutate the state tuple (snake, food, direction,
//! score, game-over, leaderboard):
//!
//! - [`Engine::tick`]: move, grow-or-shrink, collide, respawn food
//! - [`Engine::set_direction`]: filtered heading request
//! - [`Engine::restart`]: back to the starting state
//! - [`Engine::submit_score`]: leaderboard entry, then restart
//!
//! ## Modules
//!
//! - `core`: grid geometry, configuration, RNG
//! - `engine`: snake body, state tuple, tick transition, key mapping
//! - `leaderboard`: JSON-seeded in-memory score table
//! - `session`: tick clock and input queue lifecycle
//! - `view`: pure presentation snapshots
//!
//! ## Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use grid_snake::{GameConfig, Key, Session};
//!
//! let start = Instant::now();
//! let mut session = Session::start(GameConfig::default(), 42, start);
//! session.push_key(Key::ArrowDown);
//!
//! // Host event loop: pump with the current time, draw the frame.
//! let outcomes = session.pump(start + Duration::from_millis(200));
//! assert_eq!(outcomes.len(), 1);
//! println!("{}", session.engine().frame());
//! ```

pub mod core;
pub mod engine;
pub mod leaderboard;
pub mod session;
pub mod view;

// Re-export commonly used types
pub use crate::core::{Direction, GameBuilder, GameConfig, GameRng, GameRngState, Grid, Position};

pub use crate::engine::{Checkpoint, CollisionKind, Engine, GameState, Key, Snake, TickOutcome};

pub use crate::leaderboard::{Leaderboard, LeaderboardEntry, LeaderboardError};

pub use crate::session::{Session, TickClock};

pub use crate::view::{CellKind, Frame};
