//! The Round Engine: pure state transitions for a three-round game.
//!
//! - `resolve`: winner resolution over the 4x4 move domain
//! - `bot`: the bot's move policy (strategic bomb + random fallback)
//! - `round`: the `apply_move` transition function

pub mod bot;
pub mod resolve;
pub mod round;

pub use bot::choose_bot_move;
pub use resolve::{final_winner, resolve, Winner};
pub use round::{apply_move, RoundError};
