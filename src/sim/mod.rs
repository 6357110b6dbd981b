//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One discrete step per tick, no wall-clock time
//! - Seeded RNG only (food placement draws from the state-owned generator)
//! - No rendering, input, or platform dependencies
//! - No panics reachable through the public API
//!
//! A [`GameState`] plus the sequence of operations applied to it fully
//! determines every later state, which is what makes replay and testing
//! trivial.

pub mod food;
pub mod state;
pub mod tick;

pub use state::{Direction, GamePhase, GameState, KeyIntent, Position};
pub use tick::tick;
