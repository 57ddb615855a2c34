//! Turn orchestration.
//!
//! The turn engine drives one player's turn at a time: roll a movement
//! budget, apply directional moves through the movement state machine,
//! and offer a guess or final accusation whenever the player stands in an
//! estate. It is strictly sequential; all I/O goes through injected
//! collaborator traits (dice, input, renderer), so the engine itself is
//! deterministic and testable without a terminal.

use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::estate::Estate;
use crate::board::state::{GameState, Location, PlayerId};
use crate::board::tile::Direction;
use crate::cards::Card;
use crate::deduction::{self, Guess, RefuteOutcome};
use crate::movement::{self, MoveOutcome, Rejection, TurnVisits};

/// The input stream ended before the game did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("input stream closed before the game finished")]
pub struct InputClosed;

/// Supplies each turn's movement budget.
pub trait DiceRoller {
    /// Returns the budget for the given 1-based turn number, in [2, 12].
    fn roll(&mut self, turn: u32) -> u8;
}

/// Two six-sided dice.
pub struct PairOfDice {
    rng: SmallRng,
}

impl PairOfDice {
    /// Dice seeded from the operating system.
    pub fn from_entropy() -> PairOfDice {
        PairOfDice { rng: SmallRng::from_entropy() }
    }

    /// Deterministic dice for reproducible games.
    pub fn seeded(seed: u64) -> PairOfDice {
        PairOfDice { rng: SmallRng::seed_from_u64(seed) }
    }
}

impl DiceRoller for PairOfDice {
    fn roll(&mut self, _turn: u32) -> u8 {
        self.rng.gen_range(1..=6) + self.rng.gen_range(1..=6)
    }
}

/// A queue of pre-rolled budgets, for tests and replays.
pub struct FixedDice {
    rolls: VecDeque<u8>,
}

impl FixedDice {
    pub fn new(rolls: impl IntoIterator<Item = u8>) -> FixedDice {
        FixedDice { rolls: rolls.into_iter().collect() }
    }
}

impl DiceRoller for FixedDice {
    fn roll(&mut self, _turn: u32) -> u8 {
        self.rolls.pop_front().unwrap_or(2)
    }
}

/// What a player standing in an estate chooses to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstateAction {
    /// Keep moving (or end the offer without a guess).
    Pass,
    /// A non-final guess; the estate is implicitly the current room.
    Guess { suspect: Card, weapon: Card },
    /// A one-shot solution attempt naming all three cards.
    Accuse { suspect: Card, weapon: Card, estate: Card },
}

/// Blocking requests for player decisions.
///
/// Implementations validate free-form input themselves (the engine
/// re-requests on wrong-kind cards rather than substituting a default).
pub trait InputProvider {
    fn direction(
        &mut self,
        state: &GameState,
        player: PlayerId,
    ) -> Result<Direction, InputClosed>;

    fn estate_action(
        &mut self,
        state: &GameState,
        player: PlayerId,
        estate: Estate,
    ) -> Result<EstateAction, InputClosed>;

    fn refutation_pick(
        &mut self,
        state: &GameState,
        refuter: PlayerId,
        matches: &[Card],
    ) -> Result<Card, InputClosed>;
}

/// Everything noteworthy the engine does, for display and for tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    TurnBegan { player: PlayerId, turn: u32, roll: u8 },
    Moved { player: PlayerId, outcome: MoveOutcome },
    MoveRejected { player: PlayerId, dir: Direction, rejection: Rejection },
    NoLegalMoves { player: PlayerId },
    Consulted { refuter: PlayerId, could_refute: bool },
    GuessRefuted { accuser: PlayerId, by: PlayerId, alibi: Card },
    GuessUnrefuted { accuser: PlayerId, guess: Guess },
    AccusationDowngraded { player: PlayerId },
    AccusationWrong { player: PlayerId },
    GameWon { player: PlayerId },
}

/// Read-only display callbacks. All methods default to no-ops.
pub trait Renderer {
    fn board(&mut self, _state: &GameState) {}
    fn turn_banner(&mut self, _state: &GameState, _player: PlayerId, _moves_left: u8) {}
    fn event(&mut self, _state: &GameState, _event: &GameEvent) {}
}

/// A renderer that shows nothing.
pub struct NullRenderer;

impl Renderer for NullRenderer {}

/// The result of one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnResult {
    Continue,
    Won,
}

/// Drives turns for one game to completion.
pub struct TurnEngine<'a, I, D, R> {
    state: &'a mut GameState,
    input: &'a mut I,
    dice: &'a mut D,
    renderer: &'a mut R,
    turn: u32,
}

impl<'a, I, D, R> TurnEngine<'a, I, D, R>
where
    I: InputProvider,
    D: DiceRoller,
    R: Renderer,
{
    pub fn new(
        state: &'a mut GameState,
        input: &'a mut I,
        dice: &'a mut D,
        renderer: &'a mut R,
    ) -> TurnEngine<'a, I, D, R> {
        TurnEngine { state, input, dice, renderer, turn: 0 }
    }

    /// Runs the round-robin clock from the given seat until some player's
    /// final accusation is confirmed. Returns the winner.
    pub fn play(&mut self, starting: PlayerId) -> Result<PlayerId, InputClosed> {
        let count = self.state.player_count();
        let mut seat = starting;
        loop {
            self.turn += 1;
            let roll = self.dice.roll(self.turn);
            self.emit(GameEvent::TurnBegan { player: seat, turn: self.turn, roll });
            if let TurnResult::Won = self.take_turn(seat, roll)? {
                return Ok(seat);
            }
            seat = seat.next(count);
        }
    }

    /// Plays one turn with the given movement budget.
    ///
    /// Rejected moves consume no budget; the player is re-prompted. A
    /// guess or failed accusation continues the turn; only a correct
    /// final accusation ends it (and the game).
    pub fn take_turn(&mut self, player: PlayerId, budget: u8) -> Result<TurnResult, InputClosed> {
        let mut visits = TurnVisits::starting_at(self.state.location(player));

        // A player who wakes up inside an estate is offered an action
        // before any movement.
        if let Location::Estate(estate) = self.state.location(player) {
            if let TurnResult::Won = self.offer_action(player, estate)? {
                return Ok(TurnResult::Won);
            }
        }

        let mut moves_left = budget;
        while moves_left > 0 {
            if !movement::has_legal_move(self.state, player, &visits) {
                self.emit(GameEvent::NoLegalMoves { player });
                break;
            }
            self.renderer.board(self.state);
            self.renderer.turn_banner(self.state, player, moves_left);

            let outcome = loop {
                let dir = self.input.direction(self.state, player)?;
                match movement::step(self.state, player, dir, &mut visits) {
                    Ok(outcome) => break outcome,
                    Err(rejection) => {
                        self.emit(GameEvent::MoveRejected { player, dir, rejection });
                    }
                }
            };
            self.emit(GameEvent::Moved { player, outcome });
            moves_left -= 1;

            if let MoveOutcome::EnteredEstate { estate } = outcome {
                if let TurnResult::Won = self.offer_action(player, estate)? {
                    return Ok(TurnResult::Won);
                }
            }
        }

        Ok(TurnResult::Continue)
    }

    /// Offers a guess/accuse/pass choice to a player inside an estate.
    fn offer_action(&mut self, player: PlayerId, estate: Estate) -> Result<TurnResult, InputClosed> {
        loop {
            match self.input.estate_action(self.state, player, estate)? {
                EstateAction::Pass => return Ok(TurnResult::Continue),
                EstateAction::Guess { suspect, weapon } => {
                    match Guess::new(suspect, weapon, Card::from(estate)) {
                        Ok(guess) => {
                            self.run_guess(player, guess)?;
                            return Ok(TurnResult::Continue);
                        }
                        // Wrong-kind card: ask again, never substitute.
                        Err(_) => continue,
                    }
                }
                EstateAction::Accuse { suspect, weapon, estate: named } => {
                    let accusation = match Guess::new(suspect, weapon, named) {
                        Ok(guess) => guess,
                        Err(_) => continue,
                    };
                    if !self.state.player(player).can_accuse() {
                        // The one-shot attempt is spent: downgrade to a
                        // non-final guess about the current room.
                        self.emit(GameEvent::AccusationDowngraded { player });
                        if let Ok(guess) =
                            Guess::new(suspect, weapon, Card::from(estate))
                        {
                            self.run_guess(player, guess)?;
                        }
                        return Ok(TurnResult::Continue);
                    }
                    if deduction::check_solution(self.state.solution(), &accusation) {
                        self.emit(GameEvent::GameWon { player });
                        return Ok(TurnResult::Won);
                    }
                    self.state.spend_accusation(player);
                    self.emit(GameEvent::AccusationWrong { player });
                    return Ok(TurnResult::Continue);
                }
            }
        }
    }

    /// Runs a non-final guess through the refutation protocol.
    fn run_guess(&mut self, accuser: PlayerId, guess: Guess) -> Result<(), InputClosed> {
        let report = deduction::refute(self.state, accuser, &guess, self.input)?;
        for (refuter, could_refute) in &report.consulted {
            self.emit(GameEvent::Consulted { refuter: *refuter, could_refute: *could_refute });
        }
        match report.outcome {
            RefuteOutcome::Refuted { by, alibi } => {
                self.state.record_seen(accuser, alibi);
                self.emit(GameEvent::GuessRefuted { accuser, by, alibi });
            }
            RefuteOutcome::Unrefuted => {
                self.emit(GameEvent::GuessUnrefuted { accuser, guess });
            }
        }
        Ok(())
    }

    fn emit(&mut self, event: GameEvent) {
        self.renderer.event(self.state, &event);
    }
}
