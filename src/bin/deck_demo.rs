//! Demo: deal two aces from one deck to another and print both.
//!
//! ```text
//! Player 1  [---]
//! Player 2  [♣ A][♥ A]
//! ```
//!
//! Set `RUST_LOG=debug` to see deck operations on stderr, and `NO_COLOR` to
//! turn off ANSI colour.

use log::{LevelFilter, Log, Metadata, Record};

use card_deck::{Card, Deck, DeckResult, Rank, RenderOptions, Suit};

/// Minimal logger mirroring records to stderr.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        eprintln!("[{:>5}] {}: {}", record.level(), record.target(), record.args());
    }

    fn flush(&self) {}
}

fn level_from_env() -> Option<LevelFilter> {
    let val = std::env::var("RUST_LOG").ok()?;
    let v = val.to_lowercase();
    if v.contains("trace") {
        Some(LevelFilter::Trace)
    } else if v.contains("debug") {
        Some(LevelFilter::Debug)
    } else if v.contains("info") {
        Some(LevelFilter::Info)
    } else if v.contains("warn") {
        Some(LevelFilter::Warn)
    } else if v.contains("error") {
        Some(LevelFilter::Error)
    } else if v.contains("off") {
        Some(LevelFilter::Off)
    } else {
        None
    }
}

fn init_logger() {
    if log::set_boxed_logger(Box::new(StderrLogger)).is_ok() {
        log::set_max_level(level_from_env().unwrap_or(LevelFilter::Warn));
    }
}

fn run() -> DeckResult<()> {
    let mut player1 = Deck::from_cards(
        "Player 1",
        [Card::playing(Rank::Ace, Suit::Clubs), Card::playing(Rank::Ace, Suit::Hearts)],
    )?;
    let mut player2 = Deck::new("Player 2")?;

    player2.add_top(player1.remove_top()?);
    player2.add_top(player1.remove_top()?);

    let opts = if std::env::var_os("NO_COLOR").is_some() {
        RenderOptions::new().with_name()
    } else {
        RenderOptions::new().with_name().colored()
    };
    print!("{}", player1.render_with(&opts));
    print!("{}", player2.render_with(&opts));
    Ok(())
}

fn main() {
    init_logger();

    if let Err(e) = run() {
        log::error!("demo failed: {}", e);
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_installs_once() {
        init_logger();
        // A second install is refused by `log` and must not panic.
        init_logger();
        log::warn!("logger installed");
    }

    #[test]
    fn test_demo_runs() {
        assert!(run().is_ok());
    }
}
