use super::*;

/// What a single line of hand history text looks like, before any dialect
/// is known.
///
/// - `Header` — Hand identity, table name, and layout decoration
/// - `SeatLine` — One seat, its chair and its starting stack
/// - `ActionLine` — A betting decision, or anything shaped like one
/// - `BoardLine` — Community cards arriving
/// - `SummaryLine` — Showdowns, collections, refunds, rake, final board
/// - `Unknown` — Everything else
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    Header,
    SeatLine,
    ActionLine,
    BoardLine,
    SummaryLine,
    Unknown,
}

impl std::fmt::Display for LineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Header => write!(f, "header"),
            Self::SeatLine => write!(f, "seat"),
            Self::ActionLine => write!(f, "action"),
            Self::BoardLine => write!(f, "board"),
            Self::SummaryLine => write!(f, "summary"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// A classified, non-blank line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'a> {
    kind: LineKind,
    number: usize,
    text: &'a str,
}

impl<'a> Line<'a> {
    pub fn new(kind: LineKind, number: usize, text: &'a str) -> Self {
        Self { kind, number, text }
    }
    pub fn kind(&self) -> LineKind {
        self.kind
    }
    /// 1-based, counting blank lines.
    pub fn number(&self) -> usize {
        self.number
    }
    /// Trailing whitespace removed.
    pub fn text(&self) -> &'a str {
        self.text
    }
}

impl std::fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:>4} {:<8} {}", self.number, self.kind, self.text)
    }
}

/// Line-local classification of raw text.
pub struct Tokenizer;

impl Tokenizer {
    /// Classifies every non-blank line with the first matching rule.
    pub fn tokenize<'a>(patterns: &Patterns, text: &'a str) -> Vec<Line<'a>> {
        text.lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim_end()))
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(number, line)| Line::new(patterns.classify(line), number, line))
            .inspect(|line| log::trace!("{}", line))
            .collect()
    }

    /// Cuts a file holding several hands into one block per hand.
    ///
    /// A block starts at every hand-start header. Text before the first
    /// such header is dropped unless there is no header at all, in which
    /// case the whole text is one block.
    pub fn split<'a>(patterns: &Patterns, text: &'a str) -> Vec<&'a str> {
        let starts = text
            .split_inclusive('\n')
            .scan(0, |offset, line| {
                let start = *offset;
                *offset += line.len();
                Some((start, line))
            })
            .filter(|(_, line)| patterns.starts(line.trim_end()))
            .map(|(start, _)| start)
            .collect::<Vec<usize>>();
        if starts.is_empty() {
            if text.trim().is_empty() {
                return Vec::new();
            }
            return vec![text];
        }
        starts
            .iter()
            .zip(starts.iter().skip(1).chain(std::iter::once(&text.len())))
            .map(|(&lo, &hi)| &text[lo..hi])
            .filter(|block| !block.trim().is_empty())
            .collect()
    }
}
