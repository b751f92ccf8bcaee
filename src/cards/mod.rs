//! Card representation, sets of cards, and exhaustive dealing.
//!
//! - [`Card`] — A single `(Rank, Suit)` pair encoded in one byte
//! - [`Hand`] — An unordered set of cards as a 64-bit bitmask
//! - [`Hole`] — A player's two private cards
//! - [`Board`] — The community cards revealed so far
//! - [`Deck`] — The cards not yet seen
//! - [`Combinations`] — Every k-card completion drawn from a pool
mod board;
mod card;
mod combinations;
mod deck;
mod hand;
mod hole;
mod rank;
mod suit;

pub use board::*;
pub use card::*;
pub use combinations::*;
pub use deck::*;
pub use hand::*;
pub use hole::*;
pub use rank::*;
pub use suit::*;
