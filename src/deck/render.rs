//! Text rendering of decks.
//!
//! Output layout:
//!
//! ```text
//! Player 2  [♥ A][♣ A]
//! ```
//!
//! - With the name shown, it is left-aligned and padded to 10 columns.
//! - An empty deck renders as `[---]`.
//! - Otherwise each card's glyph, with a line break after every 13th card
//!   and one more at the end. A full row is therefore followed by an empty
//!   line.

use std::fmt::{self, Write};

use crossterm::style::Stylize;

use super::pile::Deck;
use crate::cards::glyph::FRAME_TINT;
use crate::core::config::{RenderOptions, EMPTY_MARKER, NAME_WIDTH};

impl Deck {
    /// Render as plain text, optionally prefixed by the deck name.
    #[must_use]
    pub fn render(&self, with_name: bool) -> String {
        let opts = if with_name {
            RenderOptions::new().with_name()
        } else {
            RenderOptions::new()
        };
        self.render_with(&opts)
    }

    /// Render with explicit options.
    #[must_use]
    pub fn render_with(&self, opts: &RenderOptions) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_render(&mut out, opts);
        out
    }

    /// Write the rendering into any `fmt::Write` sink.
    pub fn write_render<W: Write>(&self, out: &mut W, opts: &RenderOptions) -> fmt::Result {
        if opts.show_name {
            write!(out, "{:<width$}", self.name(), width = NAME_WIDTH)?;
        }

        if self.is_empty() {
            if opts.color {
                write!(out, "{}", EMPTY_MARKER.with(FRAME_TINT))?;
            } else {
                out.write_str(EMPTY_MARKER)?;
            }
            return out.write_char('\n');
        }

        let row_len = opts.effective_row_len();
        for (i, card) in self.iter().enumerate() {
            card.face().write_glyph(out, opts.color)?;
            if (i + 1) % row_len == 0 {
                out.write_char('\n')?;
            }
        }
        out.write_char('\n')
    }
}

impl fmt::Display for Deck {
    /// Plain rendering without the name.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_render(f, &RenderOptions::new())
    }
}
