//! Game assembly.
//!
//! Builds a ready-to-play game from a configuration: seeds the RNG, deals
//! the deck, seats the players on the standard board, and runs the turn
//! clock to a winner. All randomness flows from the one seed so a seeded
//! game replays identically.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::state::{GameState, PlayerId, SetupError};
use crate::config::{ConfigError, GameConfig};
use crate::deal;
use crate::turn::{DiceRoller, InputClosed, InputProvider, Renderer, TurnEngine};

/// Errors building a game.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Setup(#[from] SetupError),
}

/// A dealt, seated game ready to run.
pub struct Game {
    state: GameState,
    rng: SmallRng,
}

impl Game {
    /// Deals and seats a game per the configuration.
    pub fn new(config: &GameConfig) -> Result<Game, GameError> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let deal = deal::deal(config.players, &mut rng);
        let state = GameState::new(deal)?;
        Ok(Game { state, rng })
    }

    /// Returns the game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Picks a uniformly random starting seat and runs the round-robin
    /// clock until a player wins.
    pub fn play<I, D, R>(
        &mut self,
        input: &mut I,
        dice: &mut D,
        renderer: &mut R,
    ) -> Result<PlayerId, InputClosed>
    where
        I: InputProvider,
        D: DiceRoller,
        R: Renderer,
    {
        let starting = PlayerId::new(self.rng.gen_range(0..self.state.player_count()) as u8);
        TurnEngine::new(&mut self.state, input, dice, renderer).play(starting)
    }
}
