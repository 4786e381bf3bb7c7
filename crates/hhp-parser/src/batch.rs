use super::*;
use hhp_records::ParsedHand;
use hhp_records::RawHand;
use std::collections::BTreeMap;

/// Outcome of parsing many hands.
///
/// `hands` and `failures` each keep input order.
#[derive(Debug, Clone, Default)]
pub struct Report {
    hands: Vec<ParsedHand>,
    failures: Vec<Failure>,
    full: usize,
    partial: usize,
    rejected: BTreeMap<Reason, usize>,
}

impl Report {
    pub fn hands(&self) -> &[ParsedHand] {
        &self.hands
    }
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }
    /// Hands parsed with every line understood.
    pub fn full(&self) -> usize {
        self.full
    }
    /// Hands parsed with at least one gap.
    pub fn partial(&self) -> usize {
        self.partial
    }
    pub fn rejected(&self) -> &BTreeMap<Reason, usize> {
        &self.rejected
    }
    pub fn total(&self) -> usize {
        self.hands.len() + self.failures.len()
    }
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

impl Extend<Result<ParsedHand, Failure>> for Report {
    fn extend<I: IntoIterator<Item = Result<ParsedHand, Failure>>>(&mut self, iter: I) {
        for result in iter {
            match result {
                Ok(hand) => {
                    if hand.confidence().is_full() {
                        self.full += 1;
                    } else {
                        self.partial += 1;
                    }
                    self.hands.push(hand);
                }
                Err(failure) => {
                    *self.rejected.entry(failure.reason()).or_default() += 1;
                    self.failures.push(failure);
                }
            }
        }
    }
}

impl FromIterator<Result<ParsedHand, Failure>> for Report {
    fn from_iter<I: IntoIterator<Item = Result<ParsedHand, Failure>>>(iter: I) -> Self {
        let mut report = Self::default();
        report.extend(iter);
        report
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} hands: {} full, {} partial, {} rejected",
            self.total(),
            self.full,
            self.partial,
            self.failures.len()
        )?;
        for (reason, count) in self.rejected.iter() {
            write!(f, "\n  {:<26}{:>6}", reason.to_string(), count)?;
        }
        Ok(())
    }
}

/// Parses independent hands in parallel.
///
/// Each hand is parsed on one worker with no shared mutable state; a
/// rejection never stops the others.
#[derive(Debug, Clone, Copy)]
pub struct Batch<'a> {
    parser: Parser<'a>,
}

impl<'a> Batch<'a> {
    pub fn new(patterns: &'a Patterns) -> Self {
        Self {
            parser: Parser::new(patterns),
        }
    }

    pub fn run(&self, hands: Vec<RawHand>) -> Report {
        use rayon::prelude::*;
        let n = hands.len();
        let report = hands
            .par_iter()
            .map(|raw| self.parser.parse(raw))
            .collect::<Vec<_>>()
            .into_iter()
            .collect::<Report>();
        log::info!("parsed {} hands: {}", n, report);
        report
    }
}
