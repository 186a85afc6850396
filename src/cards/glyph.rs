//! Bracketed card glyphs for terminal output.
//!
//! Every card renders as a five-column cell: `[`, a suit symbol, the rank
//! right-aligned to width two, `]`. Jokers render as `[JOK]`.
//!
//! ```text
//! [♥ A] [♦10] [♠ Q] [JOK]
//! ```
//!
//! Colour is a hint only. With colour enabled the frame is gray, red suits
//! are red, ranks are white and the Joker marker is yellow. Every styled
//! piece resets the foreground colour after itself.

use std::fmt::{self, Write};

use crossterm::style::{Color, Stylize};

use super::attributes::CardColor;
use super::definition::{CardFace, PlayingCard};

pub(crate) const FRAME_TINT: Color = Color::Grey;
const RED_SUIT_TINT: Color = Color::Red;
const RANK_TINT: Color = Color::White;
const JOKER_TINT: Color = Color::Yellow;

const JOKER_MARKER: &str = "JOK";
const JOKER_LABEL: &str = "JO";

impl PlayingCard {
    /// Rank text right-aligned to width two: `" A"`, `"10"`, `" K"`.
    #[must_use]
    pub fn padded_rank(&self) -> String {
        format!("{:>2}", self.rank.label())
    }
}

impl CardFace {
    /// Unbracketed label: `"♥ A"`, `"♣10"`, or `"JO"` for a Joker.
    #[must_use]
    pub fn short_label(&self) -> String {
        match self {
            CardFace::Playing(card) => format!("{}{}", card.suit.glyph(), card.padded_rank()),
            CardFace::Joker => JOKER_LABEL.to_string(),
        }
    }

    /// Write the bracketed glyph, optionally with ANSI colour hints.
    pub fn write_glyph<W: Write>(&self, out: &mut W, color: bool) -> fmt::Result {
        if !color {
            return match self {
                CardFace::Playing(card) => {
                    write!(out, "[{}{}]", card.suit.glyph(), card.padded_rank())
                }
                CardFace::Joker => write!(out, "[{}]", JOKER_MARKER),
            };
        }

        match self {
            CardFace::Playing(card) => {
                let suit_tint = match card.color() {
                    CardColor::Red => RED_SUIT_TINT,
                    CardColor::Black => FRAME_TINT,
                };
                write!(
                    out,
                    "{}{}{}{}",
                    '['.with(FRAME_TINT),
                    card.suit.glyph().with(suit_tint),
                    card.padded_rank().with(RANK_TINT),
                    ']'.with(FRAME_TINT)
                )
            }
            CardFace::Joker => write!(
                out,
                "{}{}{}",
                '['.with(FRAME_TINT),
                JOKER_MARKER.with(JOKER_TINT),
                ']'.with(FRAME_TINT)
            ),
        }
    }

    /// The bracketed glyph as an owned string.
    #[must_use]
    pub fn glyph(&self, color: bool) -> String {
        let mut out = String::with_capacity(if color { 40 } else { 8 });
        // Writing into a String cannot fail.
        let _ = self.write_glyph(&mut out, color);
        out
    }
}

impl fmt::Display for CardFace {
    /// Plain bracketed glyph, e.g. `[♥ A]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_glyph(f, false)
    }
}
