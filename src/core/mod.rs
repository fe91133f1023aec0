//! Core types: moves, state, RNG.
//!
//! These are the leaf building blocks. Nothing in here depends on the engine
//! or the referee; the dependency arrow points the other way.

pub mod moves;
pub mod rng;
pub mod state;

pub use moves::Move;
pub use rng::GameRng;
pub use state::{GameState, StateError};
