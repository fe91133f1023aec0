//! Referee text: rules banner, round reports, final summary.
//!
//! Pure string builders so the console loop stays a dumb pipe and the wording
//! is unit-testable. A chat frontend would feed the same state into its own
//! renderer instead.

use crate::core::GameState;
use crate::engine::{final_winner, Winner};

const RULE_LINE: &str = "==================================================";

/// The rules banner shown once at game start.
#[must_use]
pub fn rules_text() -> String {
    let mut out = String::new();
    out.push_str(RULE_LINE);
    out.push('\n');
    out.push_str("ROCK-PAPER-SCISSORS-PLUS RULES:\n");
    out.push_str("- Best of 3 rounds\n");
    out.push_str("- Moves: rock, paper, scissors, bomb\n");
    out.push_str("- bomb beats all (one-time use)\n");
    out.push_str("- Invalid input wastes the round\n");
    out.push_str(RULE_LINE);
    out
}

/// Report for the round that just resolved.
///
/// Resolved rounds show both moves; wasted rounds only the result line. The
/// running score is always included.
#[must_use]
pub fn round_report(state: &GameState) -> String {
    let round = state.rounds_played();
    let mut out = format!("ROUND {round} RESULTS\n");

    if !state.last_user_move.is_empty() && !state.last_bot_move.is_empty() {
        out.push_str(&format!(
            "You played: {}\nBot played: {}\n",
            state.last_user_move.to_uppercase(),
            state.last_bot_move.to_uppercase(),
        ));
    }
    out.push_str(&state.last_result);
    out.push_str(&format!(
        "\nCurrent Score:  You {} - {} Bot",
        state.user_score, state.bot_score
    ));
    out
}

/// The bomb-availability line shown before each prompt.
#[must_use]
pub fn bomb_status(state: &GameState) -> String {
    if state.user_bomb_used {
        "Your bomb: USED".to_string()
    } else {
        "Your bomb: AVAILABLE".to_string()
    }
}

/// Final summary once `game_active` is false.
#[must_use]
pub fn final_summary(state: &GameState) -> String {
    let verdict = match final_winner(state) {
        Winner::User => "YOU WIN THE GAME!",
        Winner::Bot => "BOT WINS THE GAME!",
        Winner::Draw => "IT'S A DRAW!",
    };
    format!(
        "GAME OVER!\nFINAL SCORE: You {} - {} Bot\n{}",
        state.user_score, state.bot_score, verdict
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;
    use crate::engine::apply_move;

    #[test]
    fn test_rules_mention_every_move() {
        let rules = rules_text();
        for name in ["rock", "paper", "scissors", "bomb"] {
            assert!(rules.contains(name), "rules missing {name}");
        }
    }

    #[test]
    fn test_resolved_round_report_shows_both_moves() {
        let mut rng = GameRng::new(42);
        let state = apply_move("rock", &GameState::new(), &mut rng).unwrap();

        let report = round_report(&state);
        assert!(report.contains("ROUND 1 RESULTS"));
        assert!(report.contains("You played: ROCK"));
        assert!(report.contains("Bot played:"));
        assert!(report.contains(&state.last_result));
        assert!(report.contains("You 0") || report.contains("You 1"));
    }

    #[test]
    fn test_wasted_round_report_omits_bot_move() {
        let mut rng = GameRng::new(42);
        let state = apply_move("nope", &GameState::new(), &mut rng).unwrap();

        let report = round_report(&state);
        assert!(!report.contains("Bot played:"));
        assert!(report.contains("Invalid move! Round wasted."));
        assert!(report.contains("You 0 - 0 Bot"));
    }

    #[test]
    fn test_bomb_status_lines() {
        let mut state = GameState::new();
        assert_eq!(bomb_status(&state), "Your bomb: AVAILABLE");

        state.user_bomb_used = true;
        assert_eq!(bomb_status(&state), "Your bomb: USED");
    }

    #[test]
    fn test_final_summary_verdicts() {
        let mut state = GameState::new();
        state.round_number = 4;
        state.game_active = false;

        state.user_score = 2;
        state.bot_score = 0;
        assert!(final_summary(&state).contains("YOU WIN THE GAME!"));
        assert!(final_summary(&state).contains("You 2 - 0 Bot"));

        state.user_score = 0;
        state.bot_score = 1;
        assert!(final_summary(&state).contains("BOT WINS THE GAME!"));

        state.bot_score = 0;
        assert!(final_summary(&state).contains("IT'S A DRAW!"));
    }
}
