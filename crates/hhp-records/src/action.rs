use hhp_cards::Street;
use hhp_core::Chips;
use hhp_core::Position;

/// A chip-moving decision that can also put the actor all-in.
///
/// `Raise` carries the raise size over the previous street maximum exactly
/// as the hand history stated it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Wager {
    Call,
    Bet,
    Raise(Chips),
}

/// The closed set of things a seat can do.
///
/// - `Blind` / `Ante` — Forced posts
/// - `Fold` / `Check` — No chips move
/// - `Call` / `Bet` / `Raise` — Voluntary chips; `Raise` carries its size
/// - `Shove` — Any [`Wager`] that leaves the actor all-in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Kind {
    Blind,
    Ante,
    Fold,
    Check,
    Call,
    Bet,
    Raise(Chips),
    Shove(Wager),
}

impl Kind {
    /// Wraps a wager in `Shove` when the actor went all-in with it.
    pub fn wager(wager: Wager, allin: bool) -> Self {
        match (wager, allin) {
            (w, true) => Self::Shove(w),
            (Wager::Call, false) => Self::Call,
            (Wager::Bet, false) => Self::Bet,
            (Wager::Raise(by), false) => Self::Raise(by),
        }
    }
    /// Bets and raises, all-in or not.
    pub fn is_aggressive(&self) -> bool {
        matches!(
            self,
            Self::Bet | Self::Raise(_) | Self::Shove(Wager::Bet) | Self::Shove(Wager::Raise(_))
        )
    }
    /// Voluntary chips into the pot.
    pub fn is_voluntary(&self) -> bool {
        matches!(self, Self::Call | Self::Bet | Self::Raise(_) | Self::Shove(_))
    }
    pub fn is_fold(&self) -> bool {
        matches!(self, Self::Fold)
    }
    pub fn is_allin(&self) -> bool {
        matches!(self, Self::Shove(_))
    }
    pub fn label(&self) -> &'static str {
        match self {
            Self::Blind => "blind",
            Self::Ante => "ante",
            Self::Fold => "fold",
            Self::Check => "check",
            Self::Call => "call",
            Self::Bet => "bet",
            Self::Raise(_) => "raise",
            Self::Shove(_) => "allin",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Raise(by) => write!(f, "RAISE+{}", by),
            Self::Shove(Wager::Raise(by)) => write!(f, "SHOVE+{}", by),
            Self::Shove(_) => write!(f, "SHOVE"),
            other => write!(f, "{}", other.label().to_uppercase()),
        }
    }
}

/// One betting decision.
///
/// Actions are totally ordered by `(street, seq)`; `seq` counts from 0
/// within each street. `amount` is always the chips this action added to
/// the pot, never the total the seat reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Action {
    seat: Position,
    street: Street,
    seq: usize,
    kind: Kind,
    amount: Chips,
}

impl Action {
    pub fn new(seat: Position, street: Street, seq: usize, kind: Kind, amount: Chips) -> Self {
        Self {
            seat,
            street,
            seq,
            kind,
            amount,
        }
    }
    pub fn seat(&self) -> Position {
        self.seat
    }
    pub fn street(&self) -> Street {
        self.street
    }
    pub fn seq(&self) -> usize {
        self.seq
    }
    pub fn kind(&self) -> Kind {
        self.kind
    }
    /// Chips added by this action.
    pub fn amount(&self) -> Chips {
        self.amount
    }
    /// Sort key for the total order over a hand.
    pub fn order(&self) -> (Street, usize) {
        (self.street, self.seq)
    }
    /// Same action attributed to another seat index.
    pub fn reseat(self, seat: Position) -> Self {
        Self { seat, ..self }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:<8}{:>3} {:>2} {:<12}{:>9}",
            self.street, self.seq, self.seat, self.kind, self.amount
        )
    }
}
