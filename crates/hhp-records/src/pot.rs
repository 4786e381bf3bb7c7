use hhp_core::Chips;
use hhp_core::Position;

/// A main or side pot as the summary stated it.
///
/// `index` 0 is the main pot, 1.. are side pots in the order they were
/// formed. `winners` are kept in ascending position order, which is also
/// the order odd chips are handed out in when the pot splits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pot {
    index: usize,
    amount: Chips,
    winners: Vec<Position>,
}

impl Pot {
    pub fn new(index: usize, amount: Chips, mut winners: Vec<Position>) -> Self {
        winners.sort_unstable();
        winners.dedup();
        Self {
            index,
            amount,
            winners,
        }
    }
    /// 0 for the main pot, n for the n-th side pot.
    pub fn index(&self) -> usize {
        self.index
    }
    pub fn is_main(&self) -> bool {
        self.index == 0
    }
    pub fn amount(&self) -> Chips {
        self.amount
    }
    pub fn winners(&self) -> &[Position] {
        &self.winners
    }
    /// Splits the pot evenly between winners.
    ///
    /// Every winner gets `amount / n`; the `amount % n` leftover chips go
    /// one each to the winners in position order, starting from the first.
    pub fn shares(&self) -> Vec<(Position, Chips)> {
        if self.winners.is_empty() {
            return Vec::new();
        }
        let n = self.winners.len() as Chips;
        let share = self.amount / n;
        let remainder = (self.amount % n) as usize;
        self.winners
            .iter()
            .enumerate()
            .map(|(i, seat)| (*seat, share + if i < remainder { 1 } else { 0 }))
            .collect()
    }
    /// Chips this pot pays to one seat.
    pub fn share(&self, seat: Position) -> Chips {
        self.shares()
            .into_iter()
            .find(|(s, _)| *s == seat)
            .map(|(_, chips)| chips)
            .unwrap_or_default()
    }
    pub fn reseat(self, map: impl Fn(Position) -> Position) -> Self {
        Self::new(self.index, self.amount, self.winners.into_iter().map(map).collect())
    }
}

impl std::fmt::Display for Pot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let label = match self.index {
            0 => "main".to_string(),
            n => format!("side {}", n),
        };
        write!(f, "{:<7}{:>9} -> {:?}", label, self.amount, self.winners)
    }
}

/// An uncalled bet returned to the seat that made it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Refund {
    seat: Position,
    amount: Chips,
}

impl Refund {
    pub fn new(seat: Position, amount: Chips) -> Self {
        Self { seat, amount }
    }
    pub fn seat(&self) -> Position {
        self.seat
    }
    pub fn amount(&self) -> Chips {
        self.amount
    }
    pub fn reseat(self, seat: Position) -> Self {
        Self { seat, ..self }
    }
}
