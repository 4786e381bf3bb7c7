use hhp_cards::Card;
use hhp_cards::Street;

/// A community card and the street it was revealed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardCard {
    card: Card,
    street: Street,
}

impl BoardCard {
    pub fn new(card: Card, street: Street) -> Self {
        Self { card, street }
    }
    pub fn card(&self) -> Card {
        self.card
    }
    pub fn street(&self) -> Street {
        self.street
    }
}

impl std::fmt::Display for BoardCard {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.card)
    }
}
