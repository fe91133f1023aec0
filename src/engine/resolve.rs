//! Winner resolution.
//!
//! Pure and total over the 4x4 move domain. Precedence, in order:
//! equal moves draw (bomb vs bomb included), then an unequal user bomb wins,
//! then an unequal bot bomb wins, then the standard cycle.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, Move};

/// Who won - a round, or the whole game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    User,
    Bot,
    Draw,
}

/// Resolve a round between two validated moves.
#[must_use]
pub fn resolve(user: Move, bot: Move) -> Winner {
    if user == bot {
        return Winner::Draw;
    }
    if user == Move::Bomb {
        return Winner::User;
    }
    if bot == Move::Bomb {
        return Winner::Bot;
    }
    if user.beats(bot) {
        Winner::User
    } else {
        Winner::Bot
    }
}

/// Compare final scores once the game is over.
///
/// Meaningful at any point, but callers normally consult it only after
/// `game_active` has gone false.
#[must_use]
pub fn final_winner(state: &GameState) -> Winner {
    if state.user_score > state.bot_score {
        Winner::User
    } else if state.bot_score > state.user_score {
        Winner::Bot
    } else {
        Winner::Draw
    }
}
