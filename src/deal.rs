//! Deck construction, solution draw, and dealing.
//!
//! One card of each kind is drawn uniformly at random and withheld as the
//! solution; the remaining eleven are shuffled and dealt round-robin from
//! a random seat offset, so hand sizes differ by at most one.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::state::{MAX_PLAYERS, MIN_PLAYERS};
use crate::cards::{Card, Solution, ALL_CARDS};

/// The outcome of dealing: the withheld solution and one hand per seat.
#[derive(Debug, Clone)]
pub struct Deal {
    pub solution: Solution,
    pub hands: Vec<Vec<Card>>,
}

/// Draws the solution and deals the rest of the deck.
///
/// Asserts on a player count outside 3..=4; callers validate counts at
/// configuration time.
pub fn deal(player_count: usize, rng: &mut impl Rng) -> Deal {
    assert!(
        (MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count),
        "player count must be between {} and {}",
        MIN_PLAYERS,
        MAX_PLAYERS
    );

    let suspects = Card::suspects();
    let weapons = Card::weapons();
    let estates = Card::estates();
    let solution = Solution {
        suspect: suspects[rng.gen_range(0..suspects.len())],
        weapon: weapons[rng.gen_range(0..weapons.len())],
        estate: estates[rng.gen_range(0..estates.len())],
    };

    let mut pool: Vec<Card> = ALL_CARDS
        .iter()
        .copied()
        .filter(|c| !solution.cards().contains(c))
        .collect();
    pool.shuffle(rng);

    let offset = rng.gen_range(0..player_count);
    let mut hands = vec![Vec::new(); player_count];
    for (i, card) in pool.into_iter().enumerate() {
        hands[(i + offset) % player_count].push(card);
    }

    Deal { solution, hands }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardKind;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn dealing_is_exhaustive_and_disjoint() {
        for seed in 0..50 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let deal = deal(3, &mut rng);

            let mut all: Vec<Card> = deal.solution.cards().to_vec();
            for hand in &deal.hands {
                all.extend_from_slice(hand);
            }
            all.sort_by_key(|c| *c as u8);
            all.dedup();
            assert_eq!(all.len(), ALL_CARDS.len(), "seed {}", seed);
        }
    }

    #[test]
    fn solution_has_one_card_of_each_kind() {
        for seed in 0..50 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let deal = deal(4, &mut rng);
            assert_eq!(deal.solution.suspect.kind(), CardKind::Suspect);
            assert_eq!(deal.solution.weapon.kind(), CardKind::Weapon);
            assert_eq!(deal.solution.estate.kind(), CardKind::Estate);
        }
    }

    #[test]
    fn solution_is_never_dealt() {
        for seed in 0..50 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let deal = deal(3, &mut rng);
            for hand in &deal.hands {
                for card in deal.solution.cards() {
                    assert!(!hand.contains(&card), "seed {}", seed);
                }
            }
        }
    }

    #[test]
    fn hand_sizes_differ_by_at_most_one() {
        for seed in 0..50 {
            for players in MIN_PLAYERS..=MAX_PLAYERS {
                let mut rng = SmallRng::seed_from_u64(seed);
                let deal = deal(players, &mut rng);
                assert_eq!(deal.hands.len(), players);
                let min = deal.hands.iter().map(Vec::len).min().unwrap();
                let max = deal.hands.iter().map(Vec::len).max().unwrap();
                assert!(max - min <= 1);
                let total: usize = deal.hands.iter().map(Vec::len).sum();
                assert_eq!(total, 11);
            }
        }
    }

    #[test]
    fn same_seed_same_deal() {
        let mut a = SmallRng::seed_from_u64(7);
        let mut b = SmallRng::seed_from_u64(7);
        let deal_a = deal(4, &mut a);
        let deal_b = deal(4, &mut b);
        assert_eq!(deal_a.solution, deal_b.solution);
        assert_eq!(deal_a.hands, deal_b.hands);
    }

    #[test]
    #[should_panic(expected = "player count")]
    fn too_few_players_is_a_programmer_error() {
        let mut rng = SmallRng::seed_from_u64(0);
        let _ = deal(2, &mut rng);
    }
}
