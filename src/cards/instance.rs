//! Physical cards.
//!
//! A `Card` pairs a unique `CardId` with an immutable `CardFace`. It is
//! intentionally neither `Clone` nor `Copy`: a card value can only be in one
//! place at a time, so moving it into a deck moves ownership of the card.
//!
//! Equality compares identity as well as face. Two Aces of Hearts are
//! different cards; compare `face()` to ask whether two cards look the same.

use std::fmt;

use super::attributes::{CardColor, Rank, Suit};
use super::definition::{CardFace, CardKind};
use crate::core::entity::CardId;

/// A single physical card.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Card {
    id: CardId,
    face: CardFace,
}

impl Card {
    /// Create a card with a fresh identity.
    #[must_use]
    pub fn new(face: CardFace) -> Self {
        Self {
            id: CardId::next(),
            face,
        }
    }

    /// Create a playing card.
    #[must_use]
    pub fn playing(rank: Rank, suit: Suit) -> Self {
        Self::new(CardFace::playing(rank, suit))
    }

    /// Create a Joker.
    #[must_use]
    pub fn joker() -> Self {
        Self::new(CardFace::Joker)
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn face(&self) -> CardFace {
        self.face
    }

    #[must_use]
    pub fn kind(&self) -> CardKind {
        self.face.kind()
    }

    #[must_use]
    pub fn point(&self) -> u32 {
        self.face.point()
    }

    /// Canonical sort key.
    #[must_use]
    pub fn order(&self) -> u32 {
        self.face.order()
    }

    #[must_use]
    pub fn color(&self) -> Option<CardColor> {
        self.face.color()
    }

    #[must_use]
    pub fn is_joker(&self) -> bool {
        self.face.is_joker()
    }

    #[must_use]
    pub fn is_playing_card(&self) -> bool {
        self.face.is_playing_card()
    }

    #[must_use]
    pub fn short_label(&self) -> String {
        self.face.short_label()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.face, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playing_card() {
        let card = Card::playing(Rank::Queen, Suit::Diamonds);

        assert_eq!(card.kind(), CardKind::PlayingCard);
        assert_eq!(card.point(), 12);
        assert_eq!(card.order(), 112);
        assert_eq!(card.color(), Some(CardColor::Red));
        assert!(card.is_playing_card());
        assert!(!card.is_joker());
    }

    #[test]
    fn test_joker() {
        let card = Card::joker();

        assert_eq!(card.kind(), CardKind::Joker);
        assert_eq!(card.point(), 100);
        assert_eq!(card.order(), 1000);
        assert!(card.is_joker());
    }

    #[test]
    fn test_same_face_distinct_identity() {
        let a = Card::playing(Rank::Ace, Suit::Hearts);
        let b = Card::playing(Rank::Ace, Suit::Hearts);

        assert_eq!(a.face(), b.face());
        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::playing(Rank::Ten, Suit::Clubs).to_string(), "[♣10]");
        assert_eq!(Card::joker().to_string(), "[JOK]");
        assert_eq!(Card::joker().short_label(), "JO");
    }
}
