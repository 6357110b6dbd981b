//! Torus Snake - a deterministic snake engine on a toroidal grid
//!
//! Core modules:
//! - `sim`: Deterministic simulation (state machine, tick, food placement)
//! - `config`: Runtime configuration for embedders
//!
//! The crate contains no rendering, input polling, or timer code. External
//! adapters translate key events into [`sim::GameState::set_direction`] /
//! [`sim::GameState::toggle_pause`] calls, drive [`sim::tick`] at a fixed
//! period, and read the state back after each operation.

pub mod config;
pub mod sim;

pub use config::{Config, ConfigError};
pub use sim::{Direction, GamePhase, GameState, KeyIntent, Position, tick};

/// Game configuration constants
pub mod consts {
    use crate::sim::Direction;

    /// Grid side length (the grid is GRID_SIZE x GRID_SIZE cells)
    pub const GRID_SIZE: u8 = 20;
    /// Recommended clock adapter period between ticks, in milliseconds
    pub const TICK_PERIOD_MS: u64 = 200;
    /// Heading of a freshly spawned snake
    pub const START_DIRECTION: Direction = Direction::Right;
}
