//! Bot move selection.
//!
//! Deterministic strategic override, random fallback. The randomness comes in
//! through [`GameRng`] so tests can seed it and assert either branch.

use crate::core::{GameRng, GameState, Move};

/// Choose the bot's move for the current round.
///
/// The bot bombs exactly when all three hold: its bomb is unspent, the game is
/// in round 2, and it is strictly behind on score. Otherwise it picks
/// uniformly among rock, paper, and scissors.
#[must_use]
pub fn choose_bot_move(state: &GameState, rng: &mut GameRng) -> Move {
    if !state.bot_bomb_used && state.round_number == 2 && state.bot_score < state.user_score {
        return Move::Bomb;
    }
    rng.pick(&Move::STANDARD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategic_bomb_when_losing_round_two() {
        let mut state = GameState::new();
        state.round_number = 2;
        state.user_score = 1;
        state.bot_score = 0;

        // Branch is deterministic: any seed must produce the bomb.
        for seed in 0..10 {
            let mut rng = GameRng::new(seed);
            assert_eq!(choose_bot_move(&state, &mut rng), Move::Bomb);
        }
    }

    #[test]
    fn test_no_bomb_when_not_behind() {
        let mut state = GameState::new();
        state.round_number = 2;
        state.user_score = 0;
        state.bot_score = 0;

        for seed in 0..10 {
            let mut rng = GameRng::new(seed);
            assert_ne!(choose_bot_move(&state, &mut rng), Move::Bomb);
        }
    }

    #[test]
    fn test_no_bomb_outside_round_two() {
        let mut state = GameState::new();
        state.round_number = 3;
        state.user_score = 2;
        state.bot_score = 0;

        for seed in 0..10 {
            let mut rng = GameRng::new(seed);
            assert_ne!(choose_bot_move(&state, &mut rng), Move::Bomb);
        }
    }

    #[test]
    fn test_no_second_bomb() {
        let mut state = GameState::new();
        state.round_number = 2;
        state.user_score = 1;
        state.bot_score = 0;
        state.bot_bomb_used = true;

        for seed in 0..10 {
            let mut rng = GameRng::new(seed);
            assert_ne!(choose_bot_move(&state, &mut rng), Move::Bomb);
        }
    }

    #[test]
    fn test_fallback_covers_all_standard_moves() {
        let state = GameState::new();
        let mut rng = GameRng::new(42);
        let mut seen = [false; 3];

        for _ in 0..200 {
            match choose_bot_move(&state, &mut rng) {
                Move::Rock => seen[0] = true,
                Move::Paper => seen[1] = true,
                Move::Scissors => seen[2] = true,
                Move::Bomb => panic!("fallback must never bomb"),
            }
        }

        assert_eq!(seen, [true, true, true]);
    }

    #[test]
    fn test_selection_is_seed_deterministic() {
        let state = GameState::new();
        let mut rng1 = GameRng::new(9);
        let mut rng2 = GameRng::new(9);

        for _ in 0..50 {
            assert_eq!(
                choose_bot_move(&state, &mut rng1),
                choose_bot_move(&state, &mut rng2)
            );
        }
    }
}
