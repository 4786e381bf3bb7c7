use crate::Money;
use hhp_cards::Card;
use hhp_cards::Street;
use hhp_core::Chair;
use hhp_core::Chips;
use hhp_core::Position;
use hhp_records::Dialect;

/// The structural rule a hand broke.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("seat line {line} cannot be read")]
    UnreadableSeat { line: usize },
    #[error("{0} seats at the table")]
    SeatCount(usize),
    #[error("positions are not 0..{0}")]
    Positions(usize),
    #[error("chair {0} is taken twice")]
    DuplicateChair(Chair),
    #[error("{0} is seated twice")]
    DuplicateName(String),
    #[error("{what} names seat {seat}, which is not at the table")]
    UnknownSeat { what: &'static str, seat: Position },
    #[error("action {index} is out of (street, seq) order")]
    OutOfOrder { index: usize },
    #[error("action {index} moves {amount} chips")]
    NegativeAmount { index: usize, amount: Chips },
    #[error("seat {seat} acted on the {street} after folding")]
    ActedAfterFold { seat: Position, street: Street },
    #[error("seat {seat} acted on the {street} after going all-in")]
    ActedAfterAllin { seat: Position, street: Street },
    #[error("pot {0} has no winner")]
    Unclaimed(usize),
    #[error("{0} board cards")]
    BoardCount(usize),
    #[error("board card {index} is tagged {street}")]
    BoardStreet { index: usize, street: Street },
    #[error("action on the {street} with {cards} board cards")]
    BeyondBoard { street: Street, cards: usize },
    #[error("summary board differs from the dealt board")]
    BoardMismatch,
    #[error("{0} appears twice")]
    DuplicateCard(Card),
    #[error("chip amounts overflow at line {line}")]
    Overflow { line: usize },
    #[error("summary or action totals overflow")]
    TotalsOverflow,
}

/// Why a hand was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("unknown dialect ({})", .header.as_deref().unwrap_or("no header"))]
    UnknownDialect { header: Option<String> },
    #[error("structural inconsistency: {0}")]
    StructuralInconsistency(#[from] Violation),
    #[error("pot mismatch: summary accounts for {stated}, actions committed {committed}")]
    PotMismatch { stated: Chips, committed: Chips },
}

impl Rejection {
    pub fn reason(&self) -> Reason {
        match self {
            Self::UnknownDialect { .. } => Reason::UnknownDialect,
            Self::StructuralInconsistency(_) => Reason::StructuralInconsistency,
            Self::PotMismatch { .. } => Reason::PotMismatch,
        }
    }
}

/// Field-less rejection tag, for counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Reason {
    UnknownDialect,
    StructuralInconsistency,
    PotMismatch,
}

impl Reason {
    pub const fn all() -> [Self; 3] {
        [
            Self::UnknownDialect,
            Self::StructuralInconsistency,
            Self::PotMismatch,
        ]
    }
}

impl std::fmt::Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::UnknownDialect => write!(f, "unknown dialect"),
            Self::StructuralInconsistency => write!(f, "structural inconsistency"),
            Self::PotMismatch => write!(f, "pot mismatch"),
        }
    }
}

/// A rejected hand: which one, what layout it was read as, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    source: String,
    dialect: Option<Dialect>,
    rejection: Rejection,
}

impl Failure {
    pub fn new(source: impl Into<String>, dialect: Option<Dialect>, rejection: Rejection) -> Self {
        Self {
            source: source.into(),
            dialect,
            rejection,
        }
    }
    pub fn source(&self) -> &str {
        &self.source
    }
    /// `None` when the layout itself was not recognised.
    pub fn dialect(&self) -> Option<Dialect> {
        self.dialect
    }
    pub fn rejection(&self) -> &Rejection {
        &self.rejection
    }
    pub fn reason(&self) -> Reason {
        self.rejection.reason()
    }
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match (self.dialect, &self.rejection) {
            (Some(dialect), Rejection::PotMismatch { stated, committed }) => {
                let money = Money::from(dialect);
                write!(
                    f,
                    "{} [{}]: pot mismatch: summary accounts for {}, actions committed {}",
                    self.source,
                    dialect,
                    money.format(*stated),
                    money.format(*committed)
                )
            }
            (Some(dialect), rejection) => write!(f, "{} [{}]: {}", self.source, dialect, rejection),
            (None, rejection) => write!(f, "{}: {}", self.source, rejection),
        }
    }
}

impl std::error::Error for Failure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.rejection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hhp_records::Currency;

    #[test]
    fn messages() {
        let rejection = Rejection::from(Violation::ActedAfterFold {
            seat: 2,
            street: Street::Turn,
        });
        assert_eq!(rejection.reason(), Reason::StructuralInconsistency);
        assert_eq!(
            rejection.to_string(),
            "structural inconsistency: seat 2 acted on the turn after folding"
        );
        let failure = Failure::new("b12_45", Some(Dialect::Wrgpt), rejection);
        assert_eq!(
            failure.to_string(),
            "b12_45 [wrgpt]: structural inconsistency: seat 2 acted on the turn after folding"
        );
    }

    #[test]
    fn mismatch_prints_the_currency() {
        let rejection = Rejection::PotMismatch {
            stated: 370,
            committed: 380,
        };
        let failure = Failure::new("245001", Some(Dialect::Stars(Currency::Usd)), rejection.clone());
        assert_eq!(
            failure.to_string(),
            "245001 [stars-usd]: pot mismatch: summary accounts for $3.70, actions committed $3.80"
        );
        let failure = Failure::new("245001", None, rejection);
        assert_eq!(
            failure.to_string(),
            "245001: pot mismatch: summary accounts for 370, actions committed 380"
        );
    }

    #[test]
    fn unknown_dialect_message() {
        let rejection = Rejection::UnknownDialect { header: None };
        assert_eq!(rejection.to_string(), "unknown dialect (no header)");
        assert_eq!(rejection.reason(), Reason::UnknownDialect);
    }
}
