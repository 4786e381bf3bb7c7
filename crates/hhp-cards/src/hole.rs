use super::card::Card;
use super::hand::Hand;

/// A player's two private hole cards.
///
/// Wraps a [`Hand`] with the constraint that exactly two distinct cards are
/// present. Only constructible through the fallible conversions, so a
/// `Hole` in a record always means two cards were actually shown.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hole(Hand);

impl Hole {
    pub fn cards(&self) -> Vec<Card> {
        Vec::from(self.0)
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Hole> for Hand {
    fn from(hole: Hole) -> Self {
        hole.0
    }
}

impl TryFrom<(Card, Card)> for Hole {
    type Error = anyhow::Error;
    fn try_from((a, b): (Card, Card)) -> Result<Self, Self::Error> {
        match a == b {
            true => Err(anyhow::anyhow!("hole cards repeat {}", a)),
            false => Ok(Self(Hand::from(vec![a, b]))),
        }
    }
}

impl TryFrom<&str> for Hole {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match Card::parse(s)?.as_slice() {
            [a, b] => Self::try_from((*a, *b)),
            other => Err(anyhow::anyhow!(
                "hole must contain exactly {} cards, found {}",
                hhp_core::HOLE_SIZE,
                other.len()
            )),
        }
    }
}
