//! The round-resolution state machine.
//!
//! One external event exists: "user submits a move". Every call consumes
//! exactly one round, valid or not, and returns a new state value. Malformed
//! input is a normal outcome (a wasted round), never an error; the only error
//! is calling the engine after the game has already finished.

use thiserror::Error;

use super::bot::choose_bot_move;
use super::resolve::{resolve, Winner};
use crate::core::{GameRng, GameState, Move};

/// Rejection of an engine call that is not a move at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The game already finished after round 3; the state is unchanged.
    #[error("game already finished after round 3")]
    GameFinished,
}

/// Apply one user move to the current state, producing the next state.
///
/// Paths, in order:
/// 1. Input that does not normalize to a move wastes the round. The raw
///    un-normalized text is recorded, the bot does not move, no score or bomb
///    state changes.
/// 2. A second bomb wastes the round the same way, with its own message and
///    the normalized `"bomb"` recorded instead of raw text.
/// 3. Otherwise the bot moves, the winner takes one point (none on a draw),
///    and bombs are marked spent.
///
/// All three paths advance `round_number` by exactly 1 and drop `game_active`
/// once the counter passes round 3.
///
/// # Errors
///
/// `RoundError::GameFinished` when `game_active` is already false.
pub fn apply_move(
    raw_input: &str,
    state: &GameState,
    rng: &mut GameRng,
) -> Result<GameState, RoundError> {
    if !state.game_active {
        return Err(RoundError::GameFinished);
    }

    let mut next = state.clone();

    match Move::parse(raw_input) {
        None => {
            next.last_user_move = raw_input.to_string();
            next.last_bot_move = String::new();
            next.last_result = "Invalid move! Round wasted.".to_string();
        }
        Some(Move::Bomb) if state.user_bomb_used => {
            next.last_user_move = Move::Bomb.name().to_string();
            next.last_bot_move = String::new();
            next.last_result = "You already used your bomb! Round wasted.".to_string();
        }
        Some(user_move) => {
            if user_move == Move::Bomb {
                next.user_bomb_used = true;
            }

            let bot_move = choose_bot_move(&next, rng);
            if bot_move == Move::Bomb {
                next.bot_bomb_used = true;
            }

            let winner = resolve(user_move, bot_move);
            next.last_result = match winner {
                Winner::User => {
                    next.user_score += 1;
                    "You win this round!".to_string()
                }
                Winner::Bot => {
                    next.bot_score += 1;
                    "Bot wins this round!".to_string()
                }
                Winner::Draw => "It's a draw!".to_string(),
            };

            next.last_user_move = user_move.name().to_string();
            next.last_bot_move = bot_move.name().to_string();
        }
    }

    next.round_number += 1;
    next.game_active = next.round_number <= GameState::TOTAL_ROUNDS;

    log::debug!(
        "round {} -> {}: user={:?} bot={:?} score {}-{} ({})",
        state.round_number,
        next.round_number,
        next.last_user_move,
        next.last_bot_move,
        next.user_score,
        next.bot_score,
        next.last_result,
    );

    Ok(next)
}
