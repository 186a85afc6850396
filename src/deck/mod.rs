//! Decks: ordered, owned card sequences and their text rendering.
//!
//! ## Key Types
//!
//! - `Deck`: named sequence of cards, bottom (index 0) to top (last)
//! - `DeckPosition`: where to insert a card

pub mod pile;
pub mod render;

pub use pile::{Deck, DeckPosition};
