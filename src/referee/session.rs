//! Game session: the single owner of state and randomness.
//!
//! The original implementation kept state and its RNG in module-level
//! globals. Here the caller constructs one [`GameSession`] per game and
//! drives it; the engine itself stays stateless. Calls are inherently
//! serialized because `play` takes `&mut self`.

use crate::core::{GameRng, GameState};
use crate::engine::{apply_move, final_winner, RoundError, Winner};

/// One game in progress: current state plus the bot's RNG.
#[derive(Clone, Debug)]
pub struct GameSession {
    state: GameState,
    rng: GameRng,
}

impl GameSession {
    /// Start a fresh game with the given RNG seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        log::info!("new game session, seed {seed}");
        Self {
            state: GameState::new(),
            rng: GameRng::new(seed),
        }
    }

    /// Resume from an existing state, e.g. one deserialized at the
    /// orchestration boundary.
    #[must_use]
    pub fn with_state(state: GameState, seed: u64) -> Self {
        Self {
            state,
            rng: GameRng::new(seed),
        }
    }

    /// Submit one user move and advance the game by one round.
    ///
    /// # Errors
    ///
    /// `RoundError::GameFinished` after round 3; the state is unchanged.
    pub fn play(&mut self, raw_input: &str) -> Result<&GameState, RoundError> {
        self.state = apply_move(raw_input, &self.state, &mut self.rng)?;
        Ok(&self.state)
    }

    /// Current state snapshot.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// True while further rounds may be played.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state.game_active
    }

    /// Final score comparison.
    #[must_use]
    pub fn final_winner(&self) -> Winner {
        final_winner(&self.state)
    }

    /// Consume the session, yielding the final state.
    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }
}
