use hhp_core::Arbitrary;

/// The four betting rounds in Texas Hold'em plus the terminal showdown.
///
/// A hand visits a non-decreasing subsequence of this order and may stop
/// anywhere before `Show` when all but one seat folds. Betting streets are
/// identified by how many community cards are visible on them, which is how
/// a cumulative board count maps back to a street.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Street {
    #[default]
    Pref = 0isize,
    Flop = 1isize,
    Turn = 2isize,
    Rive = 3isize,
    Show = 4isize,
}

impl Street {
    /// All five phases in order.
    pub const fn all() -> [Self; 5] {
        [Self::Pref, Self::Flop, Self::Turn, Self::Rive, Self::Show]
    }
    /// The four betting rounds in order.
    pub const fn betting() -> [Self; 4] {
        [Self::Pref, Self::Flop, Self::Turn, Self::Rive]
    }
    /// Cumulative community cards visible on this street.
    pub const fn n_observed(&self) -> usize {
        match self {
            Self::Pref => 0,
            Self::Flop => 3,
            Self::Turn => 4,
            Self::Rive => 5,
            Self::Show => 5,
        }
    }
    /// The street on which the card at `index` (0-based) of the board is dealt.
    pub const fn of_card(index: usize) -> Option<Self> {
        match index {
            0..=2 => Some(Self::Flop),
            3 => Some(Self::Turn),
            4 => Some(Self::Rive),
            _ => None,
        }
    }
}

/// cumulative board count → betting street. only 0, 3, 4, 5 are valid.
impl TryFrom<usize> for Street {
    type Error = anyhow::Error;
    fn try_from(n: usize) -> Result<Self, Self::Error> {
        Self::betting()
            .into_iter()
            .find(|street| street.n_observed() == n)
            .ok_or_else(|| anyhow::anyhow!("no street shows {} board cards", n))
    }
}

impl std::fmt::Display for Street {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Pref => write!(f, "preflop"),
            Self::Flop => write!(f, "flop"),
            Self::Turn => write!(f, "turn"),
            Self::Rive => write!(f, "river"),
            Self::Show => write!(f, "showdown"),
        }
    }
}

impl Arbitrary for Street {
    fn random() -> Self {
        Self::all()[rand::random_range(0..5usize)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_counts() {
        for street in Street::betting() {
            assert_eq!(Street::try_from(street.n_observed()).unwrap(), street);
        }
        assert!(Street::try_from(1usize).is_err());
        assert!(Street::try_from(6usize).is_err());
    }

    #[test]
    fn card_streets() {
        assert_eq!(Street::of_card(0), Some(Street::Flop));
        assert_eq!(Street::of_card(2), Some(Street::Flop));
        assert_eq!(Street::of_card(3), Some(Street::Turn));
        assert_eq!(Street::of_card(4), Some(Street::Rive));
        assert_eq!(Street::of_card(5), None);
    }

    #[test]
    fn ordered() {
        assert!(Street::Pref < Street::Flop);
        assert!(Street::Rive < Street::Show);
    }
}
