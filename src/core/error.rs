//! Error type shared by every fallible deck operation.
//!
//! All failures are terminal to the operation that raised them: a deck is
//! never partially mutated when an error is returned.

use thiserror::Error;

use super::entity::CardId;

/// Errors raised by deck construction and manipulation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeckError {
    /// A constructor argument was rejected (e.g. a deck name that is too long).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A card was requested from a deck that holds none.
    #[error("deck is empty")]
    EmptyDeck,

    /// An indexed read fell outside `[0, len)`.
    #[error("index {index} out of range for deck of {len} cards")]
    IndexOutOfRange { index: usize, len: usize },

    /// The deck does not hold a card with this identity.
    #[error("{0} is not in this deck")]
    NotFound(CardId),
}

/// Result alias for deck operations.
pub type DeckResult<T> = Result<T, DeckError>;
