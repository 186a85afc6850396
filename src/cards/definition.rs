//! Card faces - what is printed on a card.
//!
//! A `CardFace` is the immutable identity-free part of a card: either a
//! playing card (rank + suit) or a Joker. It carries everything needed to
//! score, sort and render the card. Physical identity lives in `Card`.
//!
//! ## Sort Keys
//!
//! - Playing card: `suit_index * 100 + rank`, so all Hearts sort before all
//!   Diamonds, and so on, ascending by rank within a suit.
//! - Joker: fixed at 1000, after every playing card.

use serde::{Deserialize, Serialize};

use super::attributes::{CardColor, Rank, Suit};
use crate::core::config::{JOKER_ORDER, JOKER_POINT};

/// Which variant a card is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    PlayingCard,
    Joker,
}

/// A rank and suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayingCard {
    pub rank: Rank,
    pub suit: Suit,
}

impl PlayingCard {
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Score value: the rank's numeric value.
    #[must_use]
    pub const fn point(&self) -> u32 {
        self.rank.value()
    }

    /// Canonical sort key.
    #[must_use]
    pub const fn order(&self) -> u32 {
        self.suit.index() * 100 + self.rank.value()
    }

    #[must_use]
    pub const fn color(&self) -> CardColor {
        self.suit.color()
    }
}

/// The closed set of card variants.
///
/// ```
/// use card_deck::cards::{CardFace, Rank, Suit};
///
/// let seven = CardFace::playing(Rank::Seven, Suit::Spades);
/// assert_eq!(seven.point(), 7);
/// assert_eq!(seven.order(), 207);
///
/// assert_eq!(CardFace::Joker.point(), 100);
/// assert!(CardFace::Joker.order() > seven.order());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardFace {
    Playing(PlayingCard),
    Joker,
}

impl CardFace {
    #[must_use]
    pub const fn playing(rank: Rank, suit: Suit) -> Self {
        CardFace::Playing(PlayingCard::new(rank, suit))
    }

    #[must_use]
    pub const fn kind(&self) -> CardKind {
        match self {
            CardFace::Playing(_) => CardKind::PlayingCard,
            CardFace::Joker => CardKind::Joker,
        }
    }

    #[must_use]
    pub const fn point(&self) -> u32 {
        match self {
            CardFace::Playing(card) => card.point(),
            CardFace::Joker => JOKER_POINT,
        }
    }

    #[must_use]
    pub const fn order(&self) -> u32 {
        match self {
            CardFace::Playing(card) => card.order(),
            CardFace::Joker => JOKER_ORDER,
        }
    }

    /// Colour of a playing card; `None` for a Joker.
    #[must_use]
    pub const fn color(&self) -> Option<CardColor> {
        match self {
            CardFace::Playing(card) => Some(card.color()),
            CardFace::Joker => None,
        }
    }

    #[must_use]
    pub const fn is_joker(&self) -> bool {
        matches!(self, CardFace::Joker)
    }

    #[must_use]
    pub const fn is_playing_card(&self) -> bool {
        matches!(self, CardFace::Playing(_))
    }

    #[must_use]
    pub const fn as_playing(&self) -> Option<&PlayingCard> {
        match self {
            CardFace::Playing(card) => Some(card),
            CardFace::Joker => None,
        }
    }
}

impl From<PlayingCard> for CardFace {
    fn from(card: PlayingCard) -> Self {
        CardFace::Playing(card)
    }
}
