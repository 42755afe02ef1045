//! Core types: grid geometry, configuration, and RNG.

pub mod config;
pub mod grid;
pub mod rng;

pub use config::{GameBuilder, GameConfig};
pub use grid::{Direction, Grid, Position};
pub use rng::{GameRng, GameRngState};
