//! Card model: attributes, faces, physical cards and glyphs.
//!
//! ## Key Types
//!
//! - `Suit`, `Rank`, `CardColor`: playing-card attributes
//! - `CardFace`: the closed variant set {playing card, Joker} with point,
//!   sort key and rendering
//! - `Card`: a physical card, a `CardFace` plus a unique `CardId`

pub mod attributes;
pub mod definition;
pub mod glyph;
pub mod instance;

pub use attributes::{CardColor, Rank, Suit};
pub use definition::{CardFace, CardKind, PlayingCard};
pub use instance::Card;
