use hhp_core::Chips;
use hhp_records::Dialect;

/// How a dialect prints amounts.
///
/// Amounts become integer minor units: cents for cash games, whole chips
/// or dollars otherwise. A symbol is optional on any single amount, but a
/// symbol from another currency, or more significant decimals than the
/// dialect prints, makes the amount unreadable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Money {
    symbol: Option<char>,
    decimals: u32,
}

impl From<Dialect> for Money {
    fn from(dialect: Dialect) -> Self {
        Self {
            symbol: dialect.symbol(),
            decimals: dialect.decimals(),
        }
    }
}

impl Money {
    const SYMBOLS: [char; 3] = ['$', '€', '£'];

    pub fn symbol(&self) -> Option<char> {
        self.symbol
    }
    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    /// `"$1,234.50"` → `123450` for a two-decimal currency.
    pub fn parse(&self, text: &str) -> Option<Chips> {
        let text = text.trim();
        let text = match text.chars().next() {
            Some(c) if Self::SYMBOLS.contains(&c) && Some(c) == self.symbol => &text[c.len_utf8()..],
            Some(c) if Self::SYMBOLS.contains(&c) => return None,
            _ => text,
        };
        let digits = text.replace(',', "");
        let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));
        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let decimals = self.decimals as usize;
        let (kept, dropped) = fraction.split_at(fraction.len().min(decimals));
        if dropped.bytes().any(|b| b != b'0') {
            return None;
        }
        let scale = (10 as Chips).checked_pow(self.decimals)?;
        let whole = whole.parse::<Chips>().ok()?.checked_mul(scale)?;
        let cents = format!("{:0<width$}", kept, width = decimals);
        let cents = if cents.is_empty() {
            0
        } else {
            cents.parse::<Chips>().ok()?
        };
        whole.checked_add(cents)
    }

    /// Prints minor units back in the dialect's format.
    pub fn format(&self, chips: Chips) -> String {
        let sign = if chips < 0 { "-" } else { "" };
        let symbol = self.symbol.map(String::from).unwrap_or_default();
        let scale = 10u64.pow(self.decimals);
        let abs = chips.unsigned_abs();
        match self.decimals {
            0 => format!("{}{}{}", sign, symbol, abs),
            d => format!(
                "{}{}{}.{:0width$}",
                sign,
                symbol,
                abs / scale,
                abs % scale,
                width = d as usize
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hhp_records::Currency;

    #[test]
    fn wrgpt_whole_dollars() {
        let money = Money::from(Dialect::Wrgpt);
        assert_eq!(money.parse("$1,200"), Some(1200));
        assert_eq!(money.parse("9,800"), Some(9800));
        assert_eq!(money.parse("$100.00"), Some(100));
        assert_eq!(money.parse("$100.50"), None);
        assert_eq!(money.parse("€100"), None);
    }

    #[test]
    fn stars_cents() {
        let money = Money::from(Dialect::Stars(Currency::Usd));
        assert_eq!(money.parse("$0.50"), Some(50));
        assert_eq!(money.parse("$1,234.5"), Some(123450));
        assert_eq!(money.parse("$3"), Some(300));
        assert_eq!(money.parse("$0.505"), None);
        assert_eq!(money.parse("£1.00"), None);
        let money = Money::from(Dialect::Stars(Currency::Eur));
        assert_eq!(money.parse("€2.25"), Some(225));
    }

    #[test]
    fn tournament_chips() {
        let money = Money::from(Dialect::Tournament);
        assert_eq!(money.parse("1500"), Some(1500));
        assert_eq!(money.parse("$1500"), None);
    }

    #[test]
    fn garbage() {
        let money = Money::from(Dialect::Tournament);
        assert_eq!(money.parse(""), None);
        assert_eq!(money.parse(".5"), None);
        assert_eq!(money.parse("12a"), None);
        assert_eq!(money.parse("99999999999999999999"), None);
    }

    #[test]
    fn formats() {
        assert_eq!(Money::from(Dialect::Stars(Currency::Gbp)).format(1205), "£12.05");
        assert_eq!(Money::from(Dialect::Wrgpt).format(-300), "-$300");
        assert_eq!(Money::from(Dialect::Tournament).format(1500), "1500");
    }
}
