//! Card identity.
//!
//! Every physical card gets a unique `CardId` when it is constructed. Two
//! cards showing the same face (say, the Ace of Hearts from two different
//! packs) are still two different cards, and deck operations that act "on
//! this card" look it up by identity, never by face.
//!
//! ## Allocation
//!
//! IDs come from a process-wide counter starting at 1. They are never reused
//! for the lifetime of the process.
//!
//! ```
//! use card_deck::core::CardId;
//!
//! let a = CardId::next();
//! let b = CardId::next();
//! assert_ne!(a, b);
//! assert!(b.raw() > a.raw());
//! ```

use std::sync::atomic::{AtomicU32, Ordering};

use serde::{Deserialize, Serialize};

static NEXT_CARD_ID: AtomicU32 = AtomicU32::new(1);

/// Unique identifier of a physical card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Wrap a raw ID value.
    ///
    /// Does not reserve the value; use [`CardId::next`] for fresh identities.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Allocate a fresh, never-before-used identity.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_CARD_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}
