use super::*;
use hhp_cards::Street;
use hhp_core::Chips;
use hhp_core::Position;

/// An unvalidated hand, as assembled line by line.
///
/// Everything a [`ParsedHand`] holds except its confidence. Fields are
/// public so the assembler can fill them in; the only way to a
/// `ParsedHand` is through validation, which adds the confidence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub source: String,
    pub header: Header,
    pub seats: Vec<Seat>,
    pub actions: Vec<Action>,
    pub board: Vec<BoardCard>,
    pub final_board: Option<Vec<hhp_cards::Card>>,
    pub showdown: Vec<ShowdownEntry>,
    pub pots: Vec<Pot>,
    pub refunds: Vec<Refund>,
    pub rake: Chips,
    pub gaps: Vec<Gap>,
    /// Seat lines that could not be read.
    pub lost_seats: Vec<Gap>,
    /// First line whose chips would not fit in [`Chips`].
    pub overflow: Option<usize>,
}

impl Draft {
    /// Chips put in by every action, `None` past [`Chips::MAX`].
    pub fn committed(&self) -> Option<Chips> {
        self.actions
            .iter()
            .map(Action::amount)
            .try_fold(0 as Chips, Chips::checked_add)
    }
    /// Chips the summary accounts for: pots, refunds, rake.
    pub fn stated(&self) -> Option<Chips> {
        self.pots
            .iter()
            .map(Pot::amount)
            .chain(self.refunds.iter().map(Refund::amount))
            .chain(std::iter::once(self.rake))
            .try_fold(0 as Chips, Chips::checked_add)
    }
}

/// A fully validated hand.
///
/// Immutable: there are no setters, and corrections mean re-parsing the
/// original [`RawHand`]. Actions are in `(street, seq)` order; seats are in
/// position order with the button at 0.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedHand {
    source: String,
    header: Header,
    dialect: Dialect,
    seats: Vec<Seat>,
    actions: Vec<Action>,
    board: Vec<BoardCard>,
    showdown: Vec<ShowdownEntry>,
    pots: Vec<Pot>,
    refunds: Vec<Refund>,
    rake: Chips,
    confidence: Confidence,
}

impl From<(Draft, Dialect, Confidence)> for ParsedHand {
    fn from((draft, dialect, confidence): (Draft, Dialect, Confidence)) -> Self {
        Self {
            source: draft.source,
            header: draft.header,
            dialect,
            seats: draft.seats,
            actions: draft.actions,
            board: draft.board,
            showdown: draft.showdown,
            pots: draft.pots,
            refunds: draft.refunds,
            rake: draft.rake,
            confidence,
        }
    }
}

/// Record accessors.
impl ParsedHand {
    pub fn source(&self) -> &str {
        &self.source
    }
    pub fn header(&self) -> &Header {
        &self.header
    }
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }
    pub fn board(&self) -> &[BoardCard] {
        &self.board
    }
    pub fn showdown(&self) -> &[ShowdownEntry] {
        &self.showdown
    }
    pub fn pots(&self) -> &[Pot] {
        &self.pots
    }
    pub fn refunds(&self) -> &[Refund] {
        &self.refunds
    }
    /// Chips the house kept.
    pub fn rake(&self) -> Chips {
        self.rake
    }
    pub fn confidence(&self) -> &Confidence {
        &self.confidence
    }
}

/// Derived queries for storage and statistics.
impl ParsedHand {
    /// The seat on the button.
    pub fn button(&self) -> Option<&Seat> {
        self.seats.first()
    }
    pub fn seat(&self, name: &str) -> Option<&Seat> {
        self.seats.iter().find(|s| s.name() == name)
    }
    /// Seats that never folded.
    pub fn live(&self) -> Vec<Position> {
        self.seats
            .iter()
            .map(Seat::position)
            .filter(|p| {
                !self
                    .actions
                    .iter()
                    .any(|a| a.seat() == *p && a.kind().is_fold())
            })
            .collect()
    }
    /// Furthest phase the hand reached.
    ///
    /// `Show` needs at least two live seats and a showdown entry; otherwise
    /// the later of the last action's street and the board's street.
    pub fn street(&self) -> Street {
        if !self.showdown.is_empty() && self.live().len() > 1 {
            return Street::Show;
        }
        let dealt = Street::try_from(self.board.len()).unwrap_or(Street::Rive);
        let acted = self
            .actions
            .last()
            .map(Action::street)
            .unwrap_or_default();
        dealt.max(acted)
    }
    /// Smallest and largest posted blind.
    pub fn blinds(&self) -> Option<(Chips, Chips)> {
        let posts = self
            .actions
            .iter()
            .filter(|a| matches!(a.kind(), Kind::Blind))
            .map(Action::amount);
        let small = posts.clone().min()?;
        let large = posts.max()?;
        Some((small, large))
    }
    /// Total chips every action put in.
    pub fn pot(&self) -> Chips {
        self.actions.iter().map(Action::amount).sum()
    }
    /// Chips one seat put in over the whole hand.
    pub fn committed(&self, seat: Position) -> Chips {
        self.actions
            .iter()
            .filter(|a| a.seat() == seat)
            .map(Action::amount)
            .sum()
    }
    /// Chips one seat took from the pots.
    pub fn won(&self, seat: Position) -> Chips {
        self.pots.iter().map(|p| p.share(seat)).sum()
    }
    /// Uncalled chips handed back to one seat.
    pub fn refunded(&self, seat: Position) -> Chips {
        self.refunds
            .iter()
            .filter(|r| r.seat() == seat)
            .map(Refund::amount)
            .sum()
    }
    /// Net result for one seat: winnings plus refunds minus commitments.
    pub fn net(&self, seat: Position) -> Chips {
        self.won(seat) + self.refunded(seat) - self.committed(seat)
    }
    /// Seats that won any chips.
    pub fn winners(&self) -> Vec<Position> {
        let mut winners = self
            .pots
            .iter()
            .flat_map(|p| p.winners().iter().copied())
            .collect::<Vec<_>>();
        winners.sort_unstable();
        winners.dedup();
        winners
    }
    /// Whether a seat put chips in preflop beyond its forced bets.
    pub fn voluntary(&self, seat: Position) -> bool {
        self.actions
            .iter()
            .filter(|a| a.street() == Street::Pref)
            .filter(|a| a.seat() == seat)
            .any(|a| a.kind().is_voluntary())
    }
    /// The seat that made the second preflop raise, if anyone did.
    pub fn three_bettor(&self) -> Option<Position> {
        self.actions
            .iter()
            .filter(|a| a.street() == Street::Pref)
            .filter(|a| a.kind().is_aggressive())
            .nth(1)
            .map(Action::seat)
    }
    /// Whether a seat was still live when the cards were shown.
    pub fn showed_down(&self, seat: Position) -> bool {
        self.street() == Street::Show && self.live().contains(&seat)
    }
}

impl std::fmt::Display for ParsedHand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{} [{}] {} {}", self.source, self.dialect, self.header, self.confidence)?;
        for seat in self.seats.iter() {
            writeln!(f, "  {}", seat)?;
        }
        for action in self.actions.iter() {
            writeln!(f, "  {}", action)?;
        }
        let board = self
            .board
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(f, "  board [{}]", board)?;
        for entry in self.showdown.iter() {
            writeln!(f, "  {}", entry)?;
        }
        for pot in self.pots.iter() {
            writeln!(f, "  {}", pot)?;
        }
        Ok(())
    }
}
