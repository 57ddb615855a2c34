//! The guess, refutation, and final-accusation protocol.
//!
//! A guess is a kind-checked (suspect, weapon, estate) triple. Refutation
//! consults every other player in seating order starting after the
//! accuser; the first player holding a matching card reveals one of their
//! choice and that reveal is the recorded alibi. Later players are still
//! consulted, but their reveals are not recorded. A final accusation is
//! compared against the hidden solution as a set.

use crate::board::state::{GameState, PlayerId};
use crate::cards::{Card, CardKind, Solution};
use crate::turn::{InputClosed, InputProvider};

/// A kind-checked (suspect, weapon, estate) triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guess {
    suspect: Card,
    weapon: Card,
    estate: Card,
}

/// A card of the wrong kind was named in a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{card} is not a {expected}")]
pub struct GuessError {
    pub card: Card,
    pub expected: CardKind,
}

impl Guess {
    /// Builds a guess, verifying each card's kind. Never substitutes a
    /// default: a wrong-kind card is an error for the caller to re-prompt.
    pub fn new(suspect: Card, weapon: Card, estate: Card) -> Result<Guess, GuessError> {
        for (card, expected) in [
            (suspect, CardKind::Suspect),
            (weapon, CardKind::Weapon),
            (estate, CardKind::Estate),
        ] {
            if card.kind() != expected {
                return Err(GuessError { card, expected });
            }
        }
        Ok(Guess { suspect, weapon, estate })
    }

    /// The named suspect.
    pub fn suspect(self) -> Card {
        self.suspect
    }

    /// The named weapon.
    pub fn weapon(self) -> Card {
        self.weapon
    }

    /// The named estate.
    pub fn estate(self) -> Card {
        self.estate
    }

    /// The three cards of the guess.
    pub const fn cards(self) -> [Card; 3] {
        [self.suspect, self.weapon, self.estate]
    }
}

impl std::fmt::Display for Guess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} with the {} in {}", self.suspect, self.weapon, self.estate)
    }
}

/// Whether a guess was refuted, and by whom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefuteOutcome {
    /// The first player in order with a matching card revealed one.
    Refuted { by: PlayerId, alibi: Card },
    /// No other hand intersects the guess.
    Unrefuted,
}

/// The full record of a refutation round.
#[derive(Debug, Clone)]
pub struct RefuteReport {
    pub outcome: RefuteOutcome,
    /// Every consulted player in order, with whether they held a match.
    pub consulted: Vec<(PlayerId, bool)>,
}

/// Returns the cards in `hand` named by the guess.
pub fn matching_cards(hand: &[Card], guess: &Guess) -> Vec<Card> {
    hand.iter()
        .copied()
        .filter(|c| guess.cards().contains(c))
        .collect()
}

/// Runs one refutation round for a non-final guess.
///
/// Every other player is consulted in seating order starting immediately
/// after the accuser. A player with matching cards must reveal one; the
/// choice is theirs when several match (re-requested until the pick is one
/// of the matches). Only the first reveal becomes the recorded alibi.
/// The caller appends the alibi to the accuser's seen list.
pub fn refute<I: InputProvider>(
    state: &GameState,
    accuser: PlayerId,
    guess: &Guess,
    input: &mut I,
) -> Result<RefuteReport, InputClosed> {
    let count = state.player_count();
    let mut recorded: Option<(PlayerId, Card)> = None;
    let mut consulted = Vec::with_capacity(count - 1);

    let mut seat = accuser.next(count);
    while seat != accuser {
        let matches = matching_cards(state.player(seat).hand(), guess);
        consulted.push((seat, !matches.is_empty()));
        if !matches.is_empty() {
            let pick = loop {
                let choice = input.refutation_pick(state, seat, &matches)?;
                if matches.contains(&choice) {
                    break choice;
                }
            };
            if recorded.is_none() {
                recorded = Some((seat, pick));
            }
        }
        seat = seat.next(count);
    }

    let outcome = match recorded {
        Some((by, alibi)) => RefuteOutcome::Refuted { by, alibi },
        None => RefuteOutcome::Unrefuted,
    };
    Ok(RefuteReport { outcome, consulted })
}

/// Compares a final accusation against the solution, as a set.
pub fn check_solution(solution: Solution, guess: &Guess) -> bool {
    let mut expected = solution.cards();
    let mut named = guess.cards();
    expected.sort_by_key(|c| *c as u8);
    named.sort_by_key(|c| *c as u8);
    expected == named
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::estate::Estate;
    use crate::board::tile::Direction;
    use crate::cards::Solution;
    use crate::deal::Deal;
    use crate::turn::EstateAction;

    /// Replays a fixed list of refutation picks; other requests panic.
    struct PickScript {
        picks: Vec<Card>,
        asked: Vec<PlayerId>,
    }

    impl PickScript {
        fn new(picks: Vec<Card>) -> PickScript {
            PickScript { picks, asked: Vec::new() }
        }
    }

    impl InputProvider for PickScript {
        fn direction(
            &mut self,
            _state: &GameState,
            _player: PlayerId,
        ) -> Result<Direction, InputClosed> {
            panic!("no movement in refutation tests");
        }

        fn estate_action(
            &mut self,
            _state: &GameState,
            _player: PlayerId,
            _estate: Estate,
        ) -> Result<EstateAction, InputClosed> {
            panic!("no estate actions in refutation tests");
        }

        fn refutation_pick(
            &mut self,
            _state: &GameState,
            refuter: PlayerId,
            _matches: &[Card],
        ) -> Result<Card, InputClosed> {
            self.asked.push(refuter);
            Ok(self.picks.remove(0))
        }
    }

    fn state_with_hands(hands: Vec<Vec<Card>>) -> GameState {
        GameState::new(Deal {
            solution: Solution {
                suspect: Card::Lucilla,
                weapon: Card::Broom,
                estate: Card::HauntedHouse,
            },
            hands,
        })
        .unwrap()
    }

    #[test]
    fn guess_checks_card_kinds() {
        assert!(Guess::new(Card::Malina, Card::Knife, Card::VisitationVilla).is_ok());
        let err = Guess::new(Card::Knife, Card::Malina, Card::VisitationVilla).unwrap_err();
        assert_eq!(err.card, Card::Knife);
        assert_eq!(err.expected, CardKind::Suspect);
        assert!(Guess::new(Card::Malina, Card::Knife, Card::Percy).is_err());
    }

    #[test]
    fn first_refuter_in_order_is_recorded() {
        // Seats after the accuser (0): 1 then 2. Both hold a match; the
        // alibi must come from seat 1.
        let state = state_with_hands(vec![
            vec![],
            vec![Card::Knife],
            vec![Card::Malina],
        ]);
        let guess = Guess::new(Card::Malina, Card::Knife, Card::PerilPalace).unwrap();
        let mut input = PickScript::new(vec![Card::Knife, Card::Malina]);

        let report = refute(&state, PlayerId::new(0), &guess, &mut input).unwrap();
        assert_eq!(
            report.outcome,
            RefuteOutcome::Refuted { by: PlayerId::new(1), alibi: Card::Knife }
        );
        // Both holders were consulted.
        assert_eq!(input.asked, vec![PlayerId::new(1), PlayerId::new(2)]);
        assert_eq!(
            report.consulted,
            vec![(PlayerId::new(1), true), (PlayerId::new(2), true)]
        );
    }

    #[test]
    fn refutation_order_starts_after_the_accuser() {
        // Accuser is seat 1; seat 2 is asked before seat 0.
        let state = state_with_hands(vec![
            vec![Card::Malina],
            vec![],
            vec![Card::Malina],
        ]);
        let guess = Guess::new(Card::Malina, Card::Knife, Card::PerilPalace).unwrap();
        let mut input = PickScript::new(vec![Card::Malina, Card::Malina]);

        let report = refute(&state, PlayerId::new(1), &guess, &mut input).unwrap();
        assert_eq!(
            report.outcome,
            RefuteOutcome::Refuted { by: PlayerId::new(2), alibi: Card::Malina }
        );
        assert_eq!(input.asked, vec![PlayerId::new(2), PlayerId::new(0)]);
    }

    #[test]
    fn an_invalid_pick_is_asked_again() {
        let state = state_with_hands(vec![
            vec![],
            vec![Card::Knife, Card::Malina],
            vec![],
        ]);
        let guess = Guess::new(Card::Malina, Card::Knife, Card::PerilPalace).unwrap();
        // First pick is not a match; the second is accepted.
        let mut input = PickScript::new(vec![Card::Broom, Card::Malina]);

        let report = refute(&state, PlayerId::new(0), &guess, &mut input).unwrap();
        assert_eq!(
            report.outcome,
            RefuteOutcome::Refuted { by: PlayerId::new(1), alibi: Card::Malina }
        );
        assert_eq!(input.asked.len(), 2);
    }

    #[test]
    fn unrefuted_when_no_hand_matches() {
        let state = state_with_hands(vec![
            vec![Card::Broom],
            vec![Card::Percy],
            vec![Card::ManicManor],
        ]);
        let guess = Guess::new(Card::Malina, Card::Knife, Card::PerilPalace).unwrap();
        let mut input = PickScript::new(vec![]);

        let report = refute(&state, PlayerId::new(0), &guess, &mut input).unwrap();
        assert_eq!(report.outcome, RefuteOutcome::Unrefuted);
        assert!(input.asked.is_empty());
        assert_eq!(
            report.consulted,
            vec![(PlayerId::new(1), false), (PlayerId::new(2), false)]
        );
    }

    #[test]
    fn solution_comparison_is_set_equality() {
        let solution = Solution {
            suspect: Card::Malina,
            weapon: Card::Knife,
            estate: Card::VisitationVilla,
        };
        let right = Guess::new(Card::Malina, Card::Knife, Card::VisitationVilla).unwrap();
        let wrong = Guess::new(Card::Malina, Card::Knife, Card::PerilPalace).unwrap();
        assert!(check_solution(solution, &right));
        assert!(!check_solution(solution, &wrong));
    }

    #[test]
    fn matching_cards_filters_the_hand() {
        let guess = Guess::new(Card::Malina, Card::Knife, Card::PerilPalace).unwrap();
        let hand = vec![Card::Knife, Card::Broom, Card::PerilPalace];
        assert_eq!(
            matching_cards(&hand, &guess),
            vec![Card::Knife, Card::PerilPalace]
        );
    }
}
