//! Structured hand records.
//!
//! This crate is the contract between the parser and everything downstream
//! of it (storage, statistics). A [`ParsedHand`] is built once per
//! [`RawHand`], validated, and never mutated afterwards: every field is
//! private behind read-only accessors, and corrections mean re-parsing the
//! original text.
//!
//! ## Input
//!
//! - [`RawHand`] — Opaque hand history text plus its source identifier
//!
//! ## Participants
//!
//! - [`Seat`] — Dealer-relative position, printed chair, name, starting stack
//! - [`ShowdownEntry`] — Cards shown (or mucked) at the end of a hand
//!
//! ## Events
//!
//! - [`Action`] — One betting decision with its street, sequence and amount
//! - [`Kind`] / [`Wager`] — The closed set of action variants
//! - [`BoardCard`] — A community card tagged with the street it appeared on
//!
//! ## Results
//!
//! - [`Pot`] — Main or side pot with its winners and tie-break rule
//! - [`Refund`] — Uncalled bet handed back to a seat
//!
//! ## Provenance
//!
//! - [`Dialect`] — Which text layout the hand was written in
//! - [`Header`] — Table, hand number, and timestamp
//! - [`Confidence`] / [`Gap`] — Whether every line was understood
mod action;
mod board;
mod confidence;
mod dialect;
mod hand;
mod header;
mod pot;
mod raw;
mod seat;
mod showdown;

pub use action::*;
pub use board::*;
pub use confidence::*;
pub use dialect::*;
pub use hand::*;
pub use header::*;
pub use pot::*;
pub use raw::*;
pub use seat::*;
pub use showdown::*;
