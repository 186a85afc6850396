//! Core types: card identity, errors, RNG, configuration.
//!
//! This module holds the building blocks the card and deck modules share.

pub mod entity;
pub mod error;
pub mod rng;
pub mod config;

pub use entity::CardId;
pub use error::{DeckError, DeckResult};
pub use rng::{DeckRng, DeckRngState};
pub use config::RenderOptions;
