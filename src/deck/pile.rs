//! The deck: a named, ordered, owned sequence of cards.
//!
//! Index 0 is the bottom of the deck and the last index is the top. Cards are
//! owned by exactly one deck at a time; `move_card` and `remove_top` +
//! `add_top` transfer ownership rather than copying.
//!
//! ## Usage
//!
//! ```
//! use card_deck::cards::{Card, Rank, Suit};
//! use card_deck::deck::Deck;
//!
//! let mut hand = Deck::from_cards(
//!     "Player 1",
//!     [Card::playing(Rank::Ace, Suit::Clubs), Card::playing(Rank::Ace, Suit::Hearts)],
//! )
//! .unwrap();
//!
//! // Canonical order puts Hearts before Clubs.
//! assert_eq!(hand[0].face().to_string(), "[♥ A]");
//!
//! let mut pile = Deck::new("Player 2").unwrap();
//! pile.add_top(hand.remove_top().unwrap());
//! assert_eq!(hand.len(), 1);
//! assert_eq!(pile.len(), 1);
//! ```

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank, Suit};
use crate::core::config::{DEFAULT_SHUFFLE_PASSES, MAX_NAME_LEN};
use crate::core::entity::CardId;
use crate::core::error::{DeckError, DeckResult};
use crate::core::rng::{self, DeckRng};

/// Position for inserting a card into a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeckPosition {
    /// End of the sequence.
    Top,
    /// Index 0.
    Bottom,
    /// Specific index (0 = bottom). Clamped to the deck length.
    Index(usize),
}

/// A named, ordered collection of cards.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Deck {
    name: String,
    /// Bottom to top.
    cards: Vec<Card>,
}

impl Deck {
    /// Create an empty deck.
    ///
    /// Fails with `InvalidArgument` when `name` is longer than 10 characters.
    pub fn new(name: impl Into<String>) -> DeckResult<Self> {
        let name = name.into();
        let len = name.chars().count();
        if len > MAX_NAME_LEN {
            return Err(DeckError::InvalidArgument(format!(
                "deck name {:?} is {} characters, at most {} allowed",
                name, len, MAX_NAME_LEN
            )));
        }
        Ok(Self {
            name,
            cards: Vec::new(),
        })
    }

    /// Build the 52-card deck plus `joker_count` Jokers, in canonical order.
    pub fn standard(joker_count: usize, name: impl Into<String>) -> DeckResult<Self> {
        let mut deck = Self::new(name)?;
        deck.cards.reserve(52 + joker_count);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                deck.cards.push(Card::playing(rank, suit));
            }
        }
        deck.cards.extend((0..joker_count).map(|_| Card::joker()));
        deck.order();

        log::debug!(
            "built standard deck {:?} with {} jokers ({} cards)",
            deck.name,
            joker_count,
            deck.len()
        );
        Ok(deck)
    }

    /// Build a deck from `cards`, appended in iteration order, then put it in
    /// canonical order.
    pub fn from_cards(
        name: impl Into<String>,
        cards: impl IntoIterator<Item = Card>,
    ) -> DeckResult<Self> {
        let mut deck = Self::new(name)?;
        deck.extend(cards);
        deck.order();
        Ok(deck)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All cards, bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterate bottom to top.
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Put a card on top.
    pub fn add_top(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Put a card at the bottom.
    pub fn add_bottom(&mut self, card: Card) {
        self.cards.insert(0, card);
    }

    /// Insert a card at `position`.
    pub fn insert(&mut self, card: Card, position: DeckPosition) {
        match position {
            DeckPosition::Top => self.cards.push(card),
            DeckPosition::Bottom => self.cards.insert(0, card),
            DeckPosition::Index(i) => {
                let idx = i.min(self.cards.len());
                self.cards.insert(idx, card);
            }
        }
    }

    /// Remove and return the top card.
    pub fn remove_top(&mut self) -> DeckResult<Card> {
        self.cards.pop().ok_or(DeckError::EmptyDeck)
    }

    /// Remove and return the bottom card.
    pub fn remove_bottom(&mut self) -> DeckResult<Card> {
        if self.cards.is_empty() {
            return Err(DeckError::EmptyDeck);
        }
        Ok(self.cards.remove(0))
    }

    /// Read the card at `index` (0 = bottom) without removing it.
    pub fn peek(&self, index: usize) -> DeckResult<&Card> {
        self.cards.get(index).ok_or(DeckError::IndexOutOfRange {
            index,
            len: self.cards.len(),
        })
    }

    /// The top card, if any.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// The bottom card, if any.
    #[must_use]
    pub fn bottom(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Index of the card with this identity.
    #[must_use]
    pub fn position(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.position(id).is_some()
    }

    /// Move the card with identity `id` onto the top of `target`.
    ///
    /// Fails with `NotFound` if this deck doesn't hold the card; neither deck
    /// changes in that case.
    pub fn move_card(&mut self, id: CardId, target: &mut Deck) -> DeckResult<()> {
        let idx = self.position(id).ok_or(DeckError::NotFound(id))?;
        let card = self.cards.remove(idx);
        target.add_top(card);

        log::debug!("moved {} from {:?} to {:?}", id, self.name, target.name);
        Ok(())
    }

    /// Stable sort into canonical order: Hearts, Diamonds, Spades, Clubs,
    /// ascending rank within a suit, Jokers last.
    pub fn order(&mut self) {
        self.cards.sort_by_key(Card::order);
    }

    /// Shuffle with the process-wide generator.
    ///
    /// Each pass is a full Fisher–Yates shuffle. Zero passes leaves the deck
    /// untouched.
    pub fn shuffle(&mut self, passes: usize) {
        if passes == 0 {
            return;
        }
        rng::with_shared(|rng| self.shuffle_with(rng, passes));
    }

    /// Shuffle with the process-wide generator, three passes.
    pub fn shuffle_default(&mut self) {
        self.shuffle(DEFAULT_SHUFFLE_PASSES);
    }

    /// Shuffle with a caller-supplied generator.
    pub fn shuffle_with(&mut self, rng: &mut DeckRng, passes: usize) {
        for pass in 0..passes {
            rng.shuffle(&mut self.cards);
            log::trace!("shuffle pass {} of {} on {:?}", pass + 1, passes, self.name);
        }
        log::debug!("shuffled {:?} ({} cards, {} passes)", self.name, self.len(), passes);
    }
}

impl Index<usize> for Deck {
    type Output = Card;

    /// Panics when `index` is out of bounds; use `peek` for a checked read.
    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

impl Extend<Card> for Deck {
    /// Add cards to the top in iteration order.
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
