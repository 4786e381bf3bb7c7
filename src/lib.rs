//! Poker hand history parsing.
//!
//! This facade crate re-exports the workspace crates for convenient access.
//!
//! ## Crate Organization
//!
//! - [`core`] — Type aliases, constants, and logging setup
//! - [`cards`] — Cards, holes, and streets
//! - [`records`] — Raw input and the validated [`records::ParsedHand`] contract
//! - [`parser`] — Tokenizer, dialect detection, state machine, and validation
//!
//! With the `cli` feature, [`cli`] drives the parser over files on disk.

pub use hhp_cards   as cards;
pub use hhp_core    as core;
pub use hhp_parser  as parser;
pub use hhp_records as records;

#[cfg(feature = "cli")]
pub mod cli;

// Re-export commonly used types at the root
pub use hhp_core::*;
