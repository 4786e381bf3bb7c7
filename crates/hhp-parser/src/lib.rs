//! Hand history text into validated [`hhp_records::ParsedHand`]s.
//!
//! One hand flows through four stages, each a pure function of the last:
//!
//! ## Pipeline
//!
//! - [`Tokenizer`] — Raw text into numbered, classified [`Line`]s
//! - [`Detector`] — Picks the [`hhp_records::Dialect`] from the header and first seat
//! - [`Machine`] — Walks the lines street by street, accumulating a draft
//! - [`Validator`] — Structural and accounting checks; the only way to a record
//!
//! ## Configuration
//!
//! - [`Patterns`] — Compiled line rules, dialect signatures, and grammars
//! - [`Money`] — Amount parsing in minor units for a dialect's currency
//!
//! ## Driving
//!
//! - [`Parser`] — The whole pipeline for one hand or one multi-hand file
//! - [`Batch`] / [`Report`] — Many independent hands across a thread pool
//!
//! ## Failure
//!
//! - [`Failure`] — Source, dialect if known, and the [`Rejection`]
//! - [`Violation`] — Which structural rule a hand broke
mod batch;
mod detector;
mod error;
mod grammar;
mod machine;
mod money;
mod parser;
mod patterns;
mod tokenizer;
mod validator;

pub use batch::*;
pub use detector::*;
pub use error::*;
pub use grammar::*;
pub use machine::*;
pub use money::*;
pub use parser::*;
pub use patterns::*;
pub use tokenizer::*;
pub use validator::*;

#[cfg(test)]
mod samples;
