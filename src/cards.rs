//! The fixed 14-card universe and the hidden solution triple.
//!
//! Card names follow the original deck: four suspects, five weapons, and
//! one card per estate. Variants are in deck order so the kind of a card
//! is recoverable from its discriminant range.

use crate::board::estate::Estate;

/// The number of cards in the deck before the solution is withheld.
pub const CARD_COUNT: usize = 14;

/// What a card names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardKind {
    Suspect,
    Weapon,
    Estate,
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CardKind::Suspect => "suspect",
            CardKind::Weapon => "weapon",
            CardKind::Estate => "estate",
        };
        f.write_str(s)
    }
}

/// A card in the deck.
///
/// Variants are in deck order (suspects, weapons, estates); the
/// `#[repr(u8)]` attribute enables use as an array index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Card {
    Lucilla = 0,
    Bert = 1,
    Malina = 2,
    Percy = 3,
    Broom = 4,
    Scissors = 5,
    Knife = 6,
    Shovel = 7,
    Ipad = 8,
    HauntedHouse = 9,
    ManicManor = 10,
    CalamityCastle = 11,
    PerilPalace = 12,
    VisitationVilla = 13,
}

/// All cards in deck order.
pub const ALL_CARDS: [Card; CARD_COUNT] = [
    Card::Lucilla,
    Card::Bert,
    Card::Malina,
    Card::Percy,
    Card::Broom,
    Card::Scissors,
    Card::Knife,
    Card::Shovel,
    Card::Ipad,
    Card::HauntedHouse,
    Card::ManicManor,
    Card::CalamityCastle,
    Card::PerilPalace,
    Card::VisitationVilla,
];

impl Card {
    /// Returns the card's printed name.
    pub const fn name(self) -> &'static str {
        match self {
            Card::Lucilla => "Lucilla",
            Card::Bert => "Bert",
            Card::Malina => "Malina",
            Card::Percy => "Percy",
            Card::Broom => "Broom",
            Card::Scissors => "Scissors",
            Card::Knife => "Knife",
            Card::Shovel => "Shovel",
            Card::Ipad => "Ipad",
            Card::HauntedHouse => "Haunted_House",
            Card::ManicManor => "Manic_Manor",
            Card::CalamityCastle => "Calamity_Castle",
            Card::PerilPalace => "Peril_Palace",
            Card::VisitationVilla => "Visitation_Villa",
        }
    }

    /// Returns the card's kind.
    pub const fn kind(self) -> CardKind {
        match self as u8 {
            0..=3 => CardKind::Suspect,
            4..=8 => CardKind::Weapon,
            _ => CardKind::Estate,
        }
    }

    /// Looks up a card by its printed name (exact match).
    pub fn from_name(name: &str) -> Option<Card> {
        ALL_CARDS.iter().find(|c| c.name() == name).copied()
    }

    /// The suspect cards, in deck order.
    pub fn suspects() -> &'static [Card] {
        &ALL_CARDS[0..4]
    }

    /// The weapon cards, in deck order.
    pub fn weapons() -> &'static [Card] {
        &ALL_CARDS[4..9]
    }

    /// The estate cards, in deck order.
    pub fn estates() -> &'static [Card] {
        &ALL_CARDS[9..14]
    }
}

impl From<Estate> for Card {
    fn from(estate: Estate) -> Card {
        match estate {
            Estate::HauntedHouse => Card::HauntedHouse,
            Estate::ManicManor => Card::ManicManor,
            Estate::CalamityCastle => Card::CalamityCastle,
            Estate::PerilPalace => Card::PerilPalace,
            Estate::VisitationVilla => Card::VisitationVilla,
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The hidden triple: one card of each kind, withheld from every hand and
/// never mutated after the deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solution {
    pub suspect: Card,
    pub weapon: Card,
    pub estate: Card,
}

impl Solution {
    /// Returns the three cards of the solution.
    pub const fn cards(self) -> [Card; 3] {
        [self.suspect, self.weapon, self.estate]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::estate::ALL_ESTATES;

    #[test]
    fn card_indices_are_sequential() {
        for (i, c) in ALL_CARDS.iter().enumerate() {
            assert_eq!(*c as usize, i, "Card {:?} has wrong index", c);
        }
    }

    #[test]
    fn kind_counts() {
        assert_eq!(Card::suspects().len(), 4);
        assert_eq!(Card::weapons().len(), 5);
        assert_eq!(Card::estates().len(), 5);
        for c in Card::suspects() {
            assert_eq!(c.kind(), CardKind::Suspect);
        }
        for c in Card::weapons() {
            assert_eq!(c.kind(), CardKind::Weapon);
        }
        for c in Card::estates() {
            assert_eq!(c.kind(), CardKind::Estate);
        }
    }

    #[test]
    fn name_roundtrip() {
        for c in ALL_CARDS {
            assert_eq!(Card::from_name(c.name()), Some(c));
        }
        assert_eq!(Card::from_name("Candlestick"), None);
        assert_eq!(Card::from_name("lucilla"), None); // names are exact
    }

    #[test]
    fn every_estate_has_a_card() {
        for estate in ALL_ESTATES {
            let card = Card::from(estate);
            assert_eq!(card.kind(), CardKind::Estate);
        }
    }

    #[test]
    fn solution_cards_in_order() {
        let solution = Solution {
            suspect: Card::Malina,
            weapon: Card::Knife,
            estate: Card::VisitationVilla,
        };
        assert_eq!(
            solution.cards(),
            [Card::Malina, Card::Knife, Card::VisitationVilla]
        );
    }
}
