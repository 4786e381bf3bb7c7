use super::rank::Rank;
use super::suit::Suit;

/// A playing card encoded as a single byte.
///
/// The 52 cards are bijectively mapped to `0..52` where the encoding is
/// `rank * 4 + suit`. This yields a natural ordering where cards are sorted
/// first by rank, then by suit within each rank.
///
/// # Parsing
///
/// Cards are parsed from the notation hand histories print, like `"As"`
/// (ace of spades), `"Tc"` or `"10c"` (ten of clubs). Use [`Card::parse`]
/// for a whitespace-separated run of cards such as a board line.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card(u8);

impl Card {
    /// Extracts the rank component (2 through Ace).
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 / 4)
    }
    /// Extracts the suit component (clubs, diamonds, hearts, spades).
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 % 4)
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) * 4 + u8::from(s))
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
/// Ts
/// 35
/// 0b00100011
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        Self(n % 52)
    }
}

/// u64 representation
/// each card is just one bit turned on. this is a one-way morphism
/// Ts
/// xxxxxxxxxxxx 0000000000000000100000000000000000000000000000000000
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

/// str isomorphism
/// the suit is always the last character; the rank is whatever precedes it
impl TryFrom<&str> for Card {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        let split = s
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .ok_or_else(|| anyhow::anyhow!("empty card"))?;
        match split {
            1 | 2 => {
                let rank = Rank::try_from(&s[..split])?;
                let suit = Suit::try_from(&s[split..])?;
                Ok(Card::from((rank, suit)))
            }
            _ => Err(anyhow::anyhow!("invalid card {:?}", s)),
        }
    }
}

impl Card {
    /// Parses a whitespace-separated run of card notations.
    ///
    /// Brackets and commas are ignored so that `[As Kd 7c]` and
    /// `As, Kd, 7c` parse the same as `As Kd 7c`.
    pub fn parse(s: &str) -> anyhow::Result<Vec<Self>> {
        s.split(|c: char| c.is_whitespace() || matches!(c, '[' | ']' | ','))
            .filter(|token| !token.is_empty())
            .map(Self::try_from)
            .collect()
    }
}

impl hhp_core::Arbitrary for Card {
    fn random() -> Self {
        Self(rand::random_range(0..52u8))
    }
}
