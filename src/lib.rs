//! # rps-plus
//!
//! Rock-Paper-Scissors-Plus: three rounds against a scripted bot, with a
//! one-shot bomb move per player that beats everything except another bomb.
//!
//! ## Design
//!
//! 1. **The engine is a pure transition function.** `apply_move` takes the
//!    current [`GameState`] by reference and returns the next one. No I/O, no
//!    hidden state; the only non-determinism is the bot's fallback move,
//!    injected via [`GameRng`].
//!
//! 2. **Bad input is an outcome, not an error.** Garbage text and a second
//!    bomb both waste the round normally. The single error case is calling
//!    the engine after the game already finished.
//!
//! 3. **State is a validated value.** `GameState` crosses serialization
//!    boundaries as plain key/value data and is checked against its
//!    invariants on the way back in.
//!
//! ## Modules
//!
//! - `core`: moves, state, RNG
//! - `engine`: winner resolution, bot policy, the `apply_move` transition
//! - `referee`: session ownership and user-facing text

pub mod core;
pub mod engine;
pub mod referee;

pub use crate::core::{GameRng, GameState, Move, StateError};
pub use crate::engine::{apply_move, choose_bot_move, final_winner, resolve, RoundError, Winner};
pub use crate::referee::GameSession;
