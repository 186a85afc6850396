//! Playing-card attributes: suit, rank and colour.
//!
//! ## Canonical Suit Order
//!
//! Suits are declared in the order Hearts, Diamonds, Spades, Clubs. The
//! zero-based position in that list is the suit index, which drives the
//! canonical sort key of a playing card.

use serde::{Deserialize, Serialize};

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Spades,
    Clubs,
}

impl Suit {
    /// All suits in canonical order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Spades, Suit::Clubs];

    /// Zero-based position in canonical order.
    #[must_use]
    pub const fn index(self) -> u32 {
        self as u32
    }

    /// Black for Clubs and Spades, red otherwise.
    #[must_use]
    pub const fn color(self) -> CardColor {
        match self {
            Suit::Clubs | Suit::Spades => CardColor::Black,
            Suit::Hearts | Suit::Diamonds => CardColor::Red,
        }
    }

    /// Single-column suit symbol.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Spades => '♠',
            Suit::Clubs => '♣',
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Card rank, Ace (1) through King (13).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks, ascending.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Numeric value, 1..=13.
    #[must_use]
    pub const fn value(self) -> u32 {
        self as u32
    }

    /// Look up a rank by numeric value.
    #[must_use]
    pub fn from_value(value: u32) -> Option<Rank> {
        Rank::ALL.iter().copied().find(|r| r.value() == value)
    }

    /// Rank text: `A`, `2`..`10`, `J`, `Q`, `K`.
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Rank::Ace => "A".to_string(),
            Rank::Jack => "J".to_string(),
            Rank::Queen => "Q".to_string(),
            Rank::King => "K".to_string(),
            r => r.value().to_string(),
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

/// Colour of a playing card, derived from its suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardColor {
    Red,
    Black,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suit_index() {
        assert_eq!(Suit::Hearts.index(), 0);
        assert_eq!(Suit::Diamonds.index(), 1);
        assert_eq!(Suit::Spades.index(), 2);
        assert_eq!(Suit::Clubs.index(), 3);
    }

    #[test]
    fn test_suit_color() {
        assert_eq!(Suit::Hearts.color(), CardColor::Red);
        assert_eq!(Suit::Diamonds.color(), CardColor::Red);
        assert_eq!(Suit::Spades.color(), CardColor::Black);
        assert_eq!(Suit::Clubs.color(), CardColor::Black);
    }

    #[test]
    fn test_rank_values() {
        assert_eq!(Rank::Ace.value(), 1);
        assert_eq!(Rank::Ten.value(), 10);
        assert_eq!(Rank::King.value(), 13);

        for (i, rank) in Rank::ALL.iter().enumerate() {
            assert_eq!(rank.value(), i as u32 + 1);
        }
    }

    #[test]
    fn test_rank_from_value() {
        assert_eq!(Rank::from_value(1), Some(Rank::Ace));
        assert_eq!(Rank::from_value(12), Some(Rank::Queen));
        assert_eq!(Rank::from_value(0), None);
        assert_eq!(Rank::from_value(14), None);
    }

    #[test]
    fn test_rank_labels() {
        assert_eq!(Rank::Ace.label(), "A");
        assert_eq!(Rank::Seven.label(), "7");
        assert_eq!(Rank::Ten.label(), "10");
        assert_eq!(Rank::Jack.label(), "J");
        assert_eq!(Rank::King.to_string(), "K");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&(Suit::Spades, Rank::Queen)).unwrap();
        let deserialized: (Suit, Rank) = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, (Suit::Spades, Rank::Queen));
    }
}
