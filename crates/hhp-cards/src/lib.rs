//! Card, hole, and street primitives for hand history records.
//!
//! ## Core Types
//!
//! - [`Card`] — A single card as a `(Rank, Suit)` tuple encoded in one byte
//! - [`Hand`] — An unordered set of cards as a 64-bit bitmask
//! - [`Hole`] — A player's two private cards
//!
//! ## Street Progression
//!
//! [`Street`] encodes the four betting rounds plus the terminal showdown:
//! preflop → flop → turn → river → showdown. The number of board cards
//! visible on a street is fixed, which is what lets a parser infer the
//! street from a cumulative board count.
mod card;
mod hand;
mod hole;
mod rank;
mod street;
mod suit;

pub use card::*;
pub use hand::*;
pub use hole::*;
pub use rank::*;
pub use street::*;
pub use suit::*;
