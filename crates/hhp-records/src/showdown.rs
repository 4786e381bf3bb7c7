use hhp_cards::Hole;
use hhp_core::Position;

/// What a seat revealed at the end of the hand.
///
/// A seat either shows two hole cards or mucks (shows none). Both kinds of
/// entry appear only when the summary says so; a hand that ends with
/// everyone else folding normally has no entries at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShowdownEntry {
    seat: Position,
    hole: Option<Hole>,
    mucked: bool,
}

impl ShowdownEntry {
    pub fn shown(seat: Position, hole: Hole) -> Self {
        Self {
            seat,
            hole: Some(hole),
            mucked: false,
        }
    }
    pub fn mucked(seat: Position) -> Self {
        Self {
            seat,
            hole: None,
            mucked: true,
        }
    }
    pub fn seat(&self) -> Position {
        self.seat
    }
    pub fn hole(&self) -> Option<Hole> {
        self.hole
    }
    pub fn is_mucked(&self) -> bool {
        self.mucked
    }
    pub fn reseat(self, seat: Position) -> Self {
        Self { seat, ..self }
    }
}

impl std::fmt::Display for ShowdownEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.hole {
            Some(hole) => write!(f, "{:>2} shows {}", self.seat, hole),
            None => write!(f, "{:>2} mucks", self.seat),
        }
    }
}
