//! Moves and input normalization.
//!
//! ## Move
//!
//! The four legal moves: rock, paper, scissors, and the one-shot bomb.
//!
//! ## Normalization
//!
//! `Move::parse` is the single entry point for untrusted input: it lowercases,
//! trims, and returns `None` for anything outside the four move names. The
//! engine treats `None` as a wasted round, never as an error.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A legal move.
///
/// `Bomb` beats every non-bomb move but is usable once per player per game.
/// That usage restriction lives in the engine, not here - as a value, a bomb
/// is just another move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    Bomb,
}

impl Move {
    /// All four moves, in wire-name order.
    pub const ALL: [Move; 4] = [Move::Rock, Move::Paper, Move::Scissors, Move::Bomb];

    /// The three standard moves the bot falls back to when not bombing.
    pub const STANDARD: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Parse raw user input into a move.
    ///
    /// Lowercases and trims before matching. Returns `None` for anything that
    /// is not exactly one of the four move names.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Move> {
        match raw.trim().to_lowercase().as_str() {
            "rock" => Some(Move::Rock),
            "paper" => Some(Move::Paper),
            "scissors" => Some(Move::Scissors),
            "bomb" => Some(Move::Bomb),
            _ => None,
        }
    }

    /// The lowercase wire name, as recorded in `GameState` and shown to users.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
            Move::Bomb => "bomb",
        }
    }

    /// Check whether this move beats `other` under the standard cycle.
    ///
    /// Only rock > scissors > paper > rock. Bomb precedence is resolved a
    /// level up, in [`crate::engine::resolve`].
    #[must_use]
    pub fn beats(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors)
                | (Move::Scissors, Move::Paper)
                | (Move::Paper, Move::Rock)
        )
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Move {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::parse(s).ok_or(())
    }
}
