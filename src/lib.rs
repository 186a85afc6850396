//! # card-deck
//!
//! A deck of playing cards: construction, canonical ordering, shuffling,
//! moving cards between decks, and text rendering.
//!
//! ## Design Principles
//!
//! 1. **Closed Card Variants**: A card face is either a playing card (rank +
//!    suit) or a Joker. Scoring, sort key and glyph are computed from it.
//!
//! 2. **Single Ownership**: `Card` is not `Clone`. A card lives in exactly one
//!    deck, and moving it transfers ownership.
//!
//! 3. **Explicit Failure**: Empty removals, out-of-range reads, unknown
//!    cards and over-long names return `DeckError`; nothing is mutated on
//!    failure.
//!
//! ## Modules
//!
//! - `core`: Card identity, errors, RNG, configuration
//! - `cards`: Suits, ranks, faces, physical cards, glyphs
//! - `deck`: The deck and its rendering
//!
//! ## Example
//!
//! ```
//! use card_deck::{Deck, DeckRng};
//!
//! let mut deck = Deck::standard(2, "Table").unwrap();
//! assert_eq!(deck.len(), 54);
//!
//! deck.shuffle_with(&mut DeckRng::new(7), 3);
//! deck.order();
//! assert!(deck.render(true).starts_with("Table     [♥ A]"));
//! ```

pub mod core;
pub mod cards;
pub mod deck;

// Re-export commonly used types
pub use crate::core::{
    CardId,
    DeckError, DeckResult,
    DeckRng, DeckRngState,
    RenderOptions,
};

pub use crate::cards::{Card, CardColor, CardFace, CardKind, PlayingCard, Rank, Suit};

pub use crate::deck::{Deck, DeckPosition};
