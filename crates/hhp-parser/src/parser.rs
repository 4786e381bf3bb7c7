use super::*;
use hhp_records::ParsedHand;
use hhp_records::RawHand;

/// Tokenizer → Detector → Machine → Validator, for one hand.
///
/// All-or-nothing: a rejected hand produces a [`Failure`] and no record.
#[derive(Debug, Clone, Copy)]
pub struct Parser<'a> {
    patterns: &'a Patterns,
}

impl<'a> Parser<'a> {
    pub fn new(patterns: &'a Patterns) -> Self {
        Self { patterns }
    }

    pub fn parse(&self, raw: &RawHand) -> Result<ParsedHand, Failure> {
        let lines = Tokenizer::tokenize(self.patterns, raw.text());
        let dialect = Detector::detect(self.patterns, &lines).map_err(|rejection| {
            log::warn!("{}: {}", raw.source(), rejection);
            Failure::new(raw.source(), None, rejection)
        })?;
        let mut machine = Machine::new(self.patterns, dialect);
        for line in lines.iter() {
            machine.consume(line);
        }
        let draft = machine.finish(raw.source());
        Validator::new(self.patterns)
            .validate(draft, dialect)
            .inspect(|hand| log::debug!("{}: {} ({})", raw.source(), hand.street(), hand.confidence()))
            .map_err(|rejection| {
                log::warn!("{} [{}]: {}", raw.source(), dialect, rejection);
                Failure::new(raw.source(), Some(dialect), rejection)
            })
    }

    /// Splits a multi-hand file and parses each block, numbering sources
    /// `name#1`, `name#2`, ... when there is more than one.
    pub fn parse_file(&self, name: &str, text: &str) -> Vec<Result<ParsedHand, Failure>> {
        self.blocks(name, text).iter().map(|raw| self.parse(raw)).collect()
    }

    /// The raw hands a file holds.
    pub fn blocks(&self, name: &str, text: &str) -> Vec<RawHand> {
        let blocks = Tokenizer::split(self.patterns, text);
        let many = blocks.len() > 1;
        blocks
            .into_iter()
            .enumerate()
            .map(|(i, block)| {
                if many {
                    RawHand::now(format!("{}#{}", name, i + 1), block)
                } else {
                    RawHand::now(name, block)
                }
            })
            .collect()
    }
}
