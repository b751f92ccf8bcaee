//! Brute-force odds of completing rank-frequency categories on a Hold'em board.
//!
//! Given two hole cards and up to five known community cards, every possible
//! completion of the board is enumerated exhaustively and checked for a
//! pair, two pair, triple, or quad.
//!
//! - [`cards`] models cards, sets of cards, the deck, and combinations
//! - [`odds`] holds the category detectors and the estimator that drives them
pub mod cards;
pub mod odds;

#[cfg(feature = "cli")]
pub mod cli;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Share of enumerated boards that land in a category.
pub type Probability = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and dealing.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// TABLE PARAMETERS
// ============================================================================
/// Community cards on a complete board.
pub const FLOP_SIZE: usize = 5;
/// Private cards dealt to the player.
pub const HOLE_SIZE: usize = 2;
/// Cards in a fresh deck.
pub const DECK_SIZE: usize = 52;
/// Combinations enumerated between cancellation checks.
pub const INTERRUPT_INTERVAL: usize = 4096;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging, optionally mirrored into a file.
/// The file always records DEBUG; the terminal records INFO unless verbose.
#[cfg(feature = "cli")]
pub fn log(verbose: bool, file: Option<&std::path::Path>) -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let level = match verbose {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Info,
    };
    let mut loggers: Vec<Box<dyn simplelog::SharedLogger>> = Vec::new();
    loggers.push(simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ));
    if let Some(path) = file {
        loggers.push(simplelog::WriteLogger::new(
            log::LevelFilter::Debug,
            config.clone(),
            std::fs::File::create(path)?,
        ));
    }
    simplelog::CombinedLogger::init(loggers)?;
    Ok(())
}

/// Parse duration string like "30s", "5m", "2h", "1d" into Duration.
pub fn parse_duration(s: &str) -> Option<std::time::Duration> {
    let s = s.trim();
    let (i, unit) = s.char_indices().last()?;
    let value: u64 = s[..i].parse().ok()?;
    let scale: u64 = match unit {
        's' => 1,
        'm' => 60,
        'h' => 3600,
        'd' => 86400,
        _ => return None,
    };
    value.checked_mul(scale).map(std::time::Duration::from_secs)
}
