//! Limits, constants and rendering configuration.
//!
//! Decks are small fixed-shape objects, so most of the configuration is a set
//! of constants. Rendering is the one place callers choose behaviour, via
//! `RenderOptions`.

use serde::{Deserialize, Serialize};

/// Longest permitted deck name, in characters.
pub const MAX_NAME_LEN: usize = 10;

/// Width the deck name is padded to when rendered.
pub const NAME_WIDTH: usize = 10;

/// Cards per rendered row.
pub const ROW_LEN: usize = 13;

/// Shuffle passes used when callers don't ask for a specific count.
pub const DEFAULT_SHUFFLE_PASSES: usize = 3;

/// What an empty deck renders as.
pub const EMPTY_MARKER: &str = "[---]";

/// Score value of a Joker.
pub const JOKER_POINT: u32 = 100;

/// Sort key of a Joker; greater than every playing card's key.
pub const JOKER_ORDER: u32 = 1000;

/// Environment variable that pins the seed of the shared shuffle generator.
pub const SEED_ENV_VAR: &str = "CARD_DECK_SEED";

/// Options controlling how a deck is rendered to text.
///
/// ```
/// use card_deck::core::RenderOptions;
///
/// let opts = RenderOptions::new().with_name().colored();
/// assert!(opts.show_name);
/// assert!(opts.color);
/// assert_eq!(opts.row_len, 13);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Prefix the output with the deck name, padded to `NAME_WIDTH`.
    pub show_name: bool,

    /// Emit ANSI colour codes.
    pub color: bool,

    /// Cards per row. Zero is treated as one.
    pub row_len: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_name: false,
            color: false,
            row_len: ROW_LEN,
        }
    }
}

impl RenderOptions {
    /// Plain rendering: no name, no colour, 13-card rows.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix the output with the deck name.
    #[must_use]
    pub fn with_name(mut self) -> Self {
        self.show_name = true;
        self
    }

    /// Emit ANSI colour hints.
    #[must_use]
    pub fn colored(mut self) -> Self {
        self.color = true;
        self
    }

    /// Set the number of cards per row.
    #[must_use]
    pub fn row_len(mut self, row_len: usize) -> Self {
        self.row_len = row_len;
        self
    }

    /// Row length actually used for line breaks.
    #[must_use]
    pub fn effective_row_len(&self) -> usize {
        self.row_len.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = RenderOptions::default();
        assert!(!opts.show_name);
        assert!(!opts.color);
        assert_eq!(opts.row_len, ROW_LEN);
    }

    #[test]
    fn test_builder() {
        let opts = RenderOptions::new().with_name().colored().row_len(4);
        assert!(opts.show_name);
        assert!(opts.color);
        assert_eq!(opts.row_len, 4);
    }

    #[test]
    fn test_zero_row_len_clamped() {
        assert_eq!(RenderOptions::new().row_len(0).effective_row_len(), 1);
    }

    #[test]
    fn test_serialization() {
        let opts = RenderOptions::new().with_name().row_len(8);
        let json = serde_json::to_string(&opts).unwrap();
        let deserialized: RenderOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(opts, deserialized);
    }
}
