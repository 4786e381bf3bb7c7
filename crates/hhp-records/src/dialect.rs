/// Currency of a cash game, identified by its symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
}

impl Currency {
    pub const fn all() -> [Self; 3] {
        [Self::Usd, Self::Eur, Self::Gbp]
    }
    pub const fn symbol(&self) -> char {
        match self {
            Self::Usd => '$',
            Self::Eur => '€',
            Self::Gbp => '£',
        }
    }
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
        }
    }
}

impl TryFrom<char> for Currency {
    type Error = char;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::all().into_iter().find(|x| x.symbol() == c).ok_or(c)
    }
}

/// One recognised hand history layout.
///
/// The set is closed: every downstream field offset and money format is
/// decided by matching on this tag, so adding a layout means adding a
/// variant and letting the compiler point at every table that needs a row.
///
/// - `Wrgpt`: email-era tournament logs: a pipe-drawn seat table, one
///   timestamped `!` line per event, whole-dollar amounts with `,`
///   thousands separators
/// - `Stars`: `Seat N:` lines, `name: action` events, `*** STREET ***`
///   markers, currency-prefixed amounts with two decimals
/// - `Tournament`: the `Stars` layout with bare chip counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dialect {
    Wrgpt,
    Stars(Currency),
    Tournament,
}

impl Dialect {
    pub const fn all() -> [Self; 5] {
        [
            Self::Wrgpt,
            Self::Stars(Currency::Usd),
            Self::Stars(Currency::Eur),
            Self::Stars(Currency::Gbp),
            Self::Tournament,
        ]
    }
    /// Currency symbol printed before amounts, if any.
    pub const fn symbol(&self) -> Option<char> {
        match self {
            Self::Wrgpt => Some('$'),
            Self::Stars(currency) => Some(currency.symbol()),
            Self::Tournament => None,
        }
    }
    /// Digits after the decimal point in printed amounts.
    pub const fn decimals(&self) -> u32 {
        match self {
            Self::Wrgpt => 0,
            Self::Stars(_) => 2,
            Self::Tournament => 0,
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Wrgpt => write!(f, "wrgpt"),
            Self::Stars(currency) => write!(f, "stars-{}", currency.code().to_lowercase()),
            Self::Tournament => write!(f, "tournament"),
        }
    }
}
