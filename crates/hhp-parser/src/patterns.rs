use super::*;
use hhp_records::Currency;
use hhp_records::Dialect;
use regex::Regex;
use regex::RegexSet;

/// Timestamp prefix every WRGPT event line carries.
pub(crate) const STAMP: &str = r"^! (?P<ts>\d{2}/\d{2}/\d{2} \d{2}:\d{2}:\d{2})! ";
/// An amount in any supported layout: optional symbol, digits, separators.
pub(crate) const MONEY: &str = r"[$€£]?\d[\d,]*(?:\.\d+)?";
/// A single card in short notation.
pub(crate) const CARD: &str = r"(?:10|[2-9TJQKAtjqka])[cdhsCDHS♣♦♥♠]";

/// Line classification rules, first match wins.
const RULES: &[(&str, LineKind)] = &[
    // quoted table chatter looks like anything
    (r#"^! [^!]*! .*""#, LineKind::Unknown),
    (r#"^.+ said, ""#, LineKind::Unknown),
    // hand identity and layout decoration
    (r"^Subject: \[", LineKind::Header),
    (r"^! Table [^,]+, Hand \d+", LineKind::Header),
    (r"^! History of this hand", LineKind::Header),
    (r"^\s*\+[-+]+\s*$", LineKind::Header),
    (r"^\s*\|\s*Name\b", LineKind::Header),
    (r"^PokerStars (?:Hand|Game) #", LineKind::Header),
    (r"^Table '", LineKind::Header),
    (r"^\*\*\* HOLE CARDS \*\*\*", LineKind::Header),
    // seats
    (r"^\s*\d+\|[DV> ]", LineKind::SeatLine),
    (r"^Seat \d+: .+ \(\S+ in chips", LineKind::SeatLine),
    // community cards
    (r"^! [^!]+! Flopped cards?:", LineKind::BoardLine),
    (r"^\*\*\* (?:FLOP|TURN|RIVER) \*\*\*", LineKind::BoardLine),
    // results
    (r"^! [^!]+! .+ wins ", LineKind::SummaryLine),
    (r"^! [^!]+! .+\s+has:", LineKind::SummaryLine),
    (r"^! [^!]+! .+ mucks", LineKind::SummaryLine),
    (r"^! [^!]+! Uncalled bet", LineKind::SummaryLine),
    (r"^! Hand over", LineKind::SummaryLine),
    (r"^\*\*\* (?:SHOW DOWN|SUMMARY) \*\*\*", LineKind::SummaryLine),
    (r"^Uncalled bet \(", LineKind::SummaryLine),
    (r"^.+ collected .+ from ", LineKind::SummaryLine),
    (r"^.+: (?:shows|mucks|doesn't show)", LineKind::SummaryLine),
    (r"^Total pot ", LineKind::SummaryLine),
    (r"^Board \[", LineKind::SummaryLine),
    (r"^Seat \d+: ", LineKind::SummaryLine),
    // decisions
    (r"^! \d{2}/\d{2}/\d{2} \d{2}:\d{2}:\d{2}! ", LineKind::ActionLine),
    (r"^.+: (?:posts|folds|checks|calls|bets|raises)\b", LineKind::ActionLine),
];

/// Lines that open a new hand in a multi-hand file.
const STARTS: &[&str] = &[r"^Subject: \[[^\]]+\]\[hand:", r"^PokerStars (?:Hand|Game) #"];

/// Gap texts that carry no betting information.
const IGNORABLE: &[&str] = &[
    r#"""#,
    r"Dealing",
    r"Pot right",
    r"is back from vacation",
    r"^Dealt to ",
    r"is sitting out",
    r"sits out",
    r"has timed out",
    r"is disconnected",
    r"is connected",
    r"has returned",
    r"joins the table",
    r"leaves the table",
    r"will be allowed to play after the button",
    r"was removed from the table",
];

/// Layout families that share one grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Family {
    Wrgpt,
    Stars,
    Tournament,
}

/// What a family's header and first seat line look like.
///
/// Cash headers capture the currency symbol as `sym`; the seat line must
/// then carry the same symbol.
#[derive(Debug, Clone)]
pub(crate) struct Signature {
    family: Family,
    header: Regex,
    seat: Regex,
}

impl Signature {
    fn new(family: Family, header: &str, seat: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            family,
            header: Regex::new(header)?,
            seat: Regex::new(seat)?,
        })
    }
    /// The built-in families, most specific first.
    fn builtin() -> Result<Vec<Self>, regex::Error> {
        Ok(vec![
            Self::new(
                Family::Wrgpt,
                r"^(?:Subject: \[[^\]]+\]\[hand:\d+\]|! Table [^,]+, Hand \d+)",
                r"^\s*\d+\|[DV> ]\s*[^|]+?\s*\|\s*\d[\d,]*\s*\|",
            )?,
            Self::new(
                Family::Tournament,
                r"^PokerStars (?:Hand|Game) #\d+:\s+Tournament #\d+",
                r"^Seat \d+: .+ \(\d[\d,]* in chips",
            )?,
            Self::new(
                Family::Stars,
                r"^PokerStars (?:Hand|Game) #\d+:.*\((?P<sym>[$€£])[\d.,]+/[$€£]?[\d.,]+",
                r"^Seat \d+: .+ \((?P<sym>[$€£])[\d.,]+ in chips",
            )?,
        ])
    }
    /// Currency symbol captured from a header line, if this family wants one.
    fn symbol(re: &Regex, text: &str) -> Option<char> {
        re.captures(text)
            .and_then(|c| c.name("sym"))
            .and_then(|m| m.as_str().chars().next())
    }
    /// `Some(symbol)` when the header belongs to this family.
    pub(crate) fn header(&self, text: &str) -> Option<Option<char>> {
        self.header
            .is_match(text)
            .then(|| Self::symbol(&self.header, text))
    }
    /// Whether the seat line agrees with the family and currency.
    pub(crate) fn seat(&self, text: &str, symbol: Option<char>) -> bool {
        self.seat.is_match(text) && Self::symbol(&self.seat, text) == symbol
    }
    /// Resolves the dialect once both shapes agree.
    pub(crate) fn dialect(&self, symbol: Option<char>) -> Option<Dialect> {
        match (self.family, symbol) {
            (Family::Wrgpt, None) => Some(Dialect::Wrgpt),
            (Family::Tournament, None) => Some(Dialect::Tournament),
            (Family::Stars, Some(sym)) => Currency::try_from(sym).ok().map(Dialect::Stars),
            _ => None,
        }
    }
}

/// Every regular expression the parser uses, compiled once.
///
/// Built once per process and shared read-only by reference across
/// workers. Extra ignorable gap patterns can be layered on with
/// [`Patterns::with_ignorable`].
#[derive(Debug, Clone)]
pub struct Patterns {
    rules: RegexSet,
    kinds: Vec<LineKind>,
    starts: RegexSet,
    signatures: Vec<Signature>,
    wrgpt: Grammar,
    stars: Grammar,
    ignorable: RegexSet,
}

impl Patterns {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            rules: RegexSet::new(RULES.iter().map(|(re, _)| re))?,
            kinds: RULES.iter().map(|(_, kind)| *kind).collect(),
            starts: RegexSet::new(STARTS)?,
            signatures: Signature::builtin()?,
            wrgpt: Grammar::wrgpt()?,
            stars: Grammar::stars()?,
            ignorable: RegexSet::new(IGNORABLE)?,
        })
    }

    /// Adds ignorable gap patterns on top of the built-in ones.
    pub fn with_ignorable<I, S>(self, extra: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = self
            .ignorable
            .patterns()
            .iter()
            .cloned()
            .chain(extra.into_iter().map(|s| s.as_ref().to_string()))
            .collect::<Vec<String>>();
        Ok(Self {
            ignorable: RegexSet::new(patterns)?,
            ..self
        })
    }
}

/// Lookups used by the pipeline stages.
impl Patterns {
    /// Kind of the first rule the line matches.
    pub fn classify(&self, text: &str) -> LineKind {
        self.rules
            .matches(text)
            .iter()
            .next()
            .map(|i| self.kinds[i])
            .unwrap_or(LineKind::Unknown)
    }
    /// Whether the line opens a new hand.
    pub fn starts(&self, text: &str) -> bool {
        self.starts.is_match(text)
    }
    /// Whether a gap with this text can be dropped without losing information.
    pub fn ignorable(&self, text: &str) -> bool {
        self.ignorable.is_match(text)
    }
    pub(crate) fn signatures(&self) -> &[Signature] {
        &self.signatures
    }
    /// The grammar table for a dialect's family.
    pub fn grammar(&self, dialect: Dialect) -> &Grammar {
        match dialect {
            Dialect::Wrgpt => &self.wrgpt,
            Dialect::Stars(_) | Dialect::Tournament => &self.stars,
        }
    }
}
