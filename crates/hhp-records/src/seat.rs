use hhp_core::Chair;
use hhp_core::Chips;
use hhp_core::Position;

/// A player at the table when the hand was dealt.
///
/// # Fields
///
/// - `position` — Dealer-relative index: 0 is the button, then clockwise
/// - `chair` — Seat number as printed in the hand history
/// - `name` — Player name as printed, minus any layout marker column
/// - `stack` — Chips behind at the start of the hand
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Seat {
    position: Position,
    chair: Chair,
    name: String,
    stack: Chips,
}

impl Seat {
    pub fn new(position: Position, chair: Chair, name: impl Into<String>, stack: Chips) -> Self {
        Self {
            position,
            chair,
            name: name.into(),
            stack,
        }
    }
    /// Dealer-relative index (0 = button).
    pub fn position(&self) -> Position {
        self.position
    }
    /// Printed seat number.
    pub fn chair(&self) -> Chair {
        self.chair
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    /// Starting stack in minor units.
    pub fn stack(&self) -> Chips {
        self.stack
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:>2} #{:<2} {:<20} {:>9}",
            self.position, self.chair, self.name, self.stack
        )
    }
}
