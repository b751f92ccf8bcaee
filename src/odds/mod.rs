//! Category detection and exhaustive odds estimation.
//!
//! - [`Groups`] — Rank-group sizes of a set of cards, with the four detectors
//! - [`Category`] — Pair, triple, quad, two pair, in reporting order
//! - [`Tally`] — Occurrence counts over every enumerated board
//! - [`Odds`] — Per-category [`Outcome`], counts or probabilities
//! - [`Estimator`] — Builds the deck, enumerates completions, and tallies
//! - [`Interrupt`] — Cancels a long enumeration from elsewhere
mod category;
mod estimator;
mod groups;
mod interrupt;
mod outcome;
mod tally;


pub use category::*;
pub use estimator::*;
pub use groups::*;
pub use interrupt::*;
pub use outcome::*;
pub use tally::*;
