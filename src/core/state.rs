//! Game state: one value per game, one new value per round.
//!
//! ## GameState
//!
//! The sole persistent entity. The engine never mutates a state in place
//! across its API boundary: every transition takes a reference to the current
//! value and returns the next one.
//!
//! ## Validation
//!
//! State crosses a plain key/value serialization boundary (the orchestration
//! layer round-trips it as JSON-shaped data), so deserialization goes through
//! a raw mirror struct and rejects values that violate the invariants:
//! out-of-range round numbers, impossible scores, or a `game_active` flag
//! inconsistent with the round counter.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// State validation failure at the deserialization boundary.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("round_number {0} out of range 1..=4")]
    RoundOutOfRange(u8),

    #[error("score {score} exceeds maximum of {max}")]
    ScoreOutOfRange { score: u8, max: u8 },

    #[error("total score {total} exceeds {resolved} resolved rounds")]
    ScoreExceedsResolvedRounds { total: u8, resolved: u8 },

    #[error("game_active={active} inconsistent with round_number={round}")]
    ActiveFlagMismatch { active: bool, round: u8 },
}

/// Complete game state across rounds.
///
/// `last_user_move` holds the normalized move name for resolved rounds, the
/// raw un-normalized input for invalid rounds, or `""` before the first move.
/// `last_bot_move` is `""` for wasted rounds (the bot does not move).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    /// Current round, 1-based. 4 means "finished after round 3".
    pub round_number: u8,
    pub user_score: u8,
    pub bot_score: u8,
    /// Once true, never resets.
    pub user_bomb_used: bool,
    /// Once true, never resets.
    pub bot_bomb_used: bool,
    /// True iff `round_number <= 3`.
    pub game_active: bool,
    pub last_user_move: String,
    pub last_bot_move: String,
    /// Human-readable outcome summary of the last round.
    pub last_result: String,
}

impl GameState {
    /// Number of rounds in a game.
    pub const TOTAL_ROUNDS: u8 = 3;

    /// Create the state for a fresh game: round 1, no scores, bombs unspent.
    #[must_use]
    pub fn new() -> Self {
        Self {
            round_number: 1,
            user_score: 0,
            bot_score: 0,
            user_bomb_used: false,
            bot_bomb_used: false,
            game_active: true,
            last_user_move: String::new(),
            last_bot_move: String::new(),
            last_result: String::new(),
        }
    }

    /// Rounds already consumed (resolved or wasted).
    #[must_use]
    pub fn rounds_played(&self) -> u8 {
        self.round_number - 1
    }

    /// Check all state invariants.
    fn validate(&self) -> Result<(), StateError> {
        if !(1..=Self::TOTAL_ROUNDS + 1).contains(&self.round_number) {
            return Err(StateError::RoundOutOfRange(self.round_number));
        }
        for score in [self.user_score, self.bot_score] {
            if score > Self::TOTAL_ROUNDS {
                return Err(StateError::ScoreOutOfRange {
                    score,
                    max: Self::TOTAL_ROUNDS,
                });
            }
        }
        // At most one point per resolved round; wasted rounds award none.
        let total = self.user_score + self.bot_score;
        if total > self.rounds_played() {
            return Err(StateError::ScoreExceedsResolvedRounds {
                total,
                resolved: self.rounds_played(),
            });
        }
        if self.game_active != (self.round_number <= Self::TOTAL_ROUNDS) {
            return Err(StateError::ActiveFlagMismatch {
                active: self.game_active,
                round: self.round_number,
            });
        }
        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Unvalidated mirror of [`GameState`] for deserialization.
///
/// Field defaults match a fresh game, so a partial key/value map from the
/// orchestration layer fills in like the original untyped state did.
#[derive(Deserialize)]
struct RawGameState {
    #[serde(default = "default_round")]
    round_number: u8,
    #[serde(default)]
    user_score: u8,
    #[serde(default)]
    bot_score: u8,
    #[serde(default)]
    user_bomb_used: bool,
    #[serde(default)]
    bot_bomb_used: bool,
    #[serde(default = "default_active")]
    game_active: bool,
    #[serde(default)]
    last_user_move: String,
    #[serde(default)]
    last_bot_move: String,
    #[serde(default)]
    last_result: String,
}

fn default_round() -> u8 {
    1
}

fn default_active() -> bool {
    true
}

impl TryFrom<RawGameState> for GameState {
    type Error = StateError;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let state = GameState {
            round_number: raw.round_number,
            user_score: raw.user_score,
            bot_score: raw.bot_score,
            user_bomb_used: raw.user_bomb_used,
            bot_bomb_used: raw.bot_bomb_used,
            game_active: raw.game_active,
            last_user_move: raw.last_user_move,
            last_bot_move: raw.last_bot_move,
            last_result: raw.last_result,
        };
        state.validate()?;
        Ok(state)
    }
}
