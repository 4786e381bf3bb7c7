use super::*;
use hhp_records::Dialect;

/// Decides which layout a hand is written in.
pub struct Detector;

impl Detector {
    /// Reads the hand's header and its first seat line, nothing else.
    ///
    /// The header is the first `Header` line any family claims, so
    /// decoration lines ahead of it are passed over. Rejects when there is
    /// no claimed header, no seat line, or the seat line is shaped for
    /// another family or currency than the header.
    pub fn detect(patterns: &Patterns, lines: &[Line]) -> Result<Dialect, Rejection> {
        let headers = lines
            .iter()
            .filter(|l| l.kind() == LineKind::Header)
            .collect::<Vec<_>>();
        let (signature, symbol, header) = headers
            .iter()
            .find_map(|line| {
                patterns
                    .signatures()
                    .iter()
                    .find_map(|sig| sig.header(line.text()).map(|sym| (sig, sym, line)))
            })
            .ok_or_else(|| Rejection::UnknownDialect {
                header: headers.first().map(|l| l.text().to_string()),
            })?;
        let unknown = || Rejection::UnknownDialect {
            header: Some(header.text().to_string()),
        };
        let seat = lines
            .iter()
            .find(|l| l.kind() == LineKind::SeatLine)
            .ok_or_else(unknown)?;
        if !signature.seat(seat.text(), symbol) {
            log::debug!("seat line {} disagrees with header", seat.number());
            return Err(unknown());
        }
        let dialect = signature.dialect(symbol).ok_or_else(unknown)?;
        log::trace!("detected {} from line {}", dialect, header.number());
        Ok(dialect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hhp_records::Currency;

    fn detect(text: &str) -> Result<Dialect, Rejection> {
        let patterns = Patterns::new().unwrap();
        let lines = Tokenizer::tokenize(&patterns, text);
        Detector::detect(&patterns, &lines)
    }

    #[test]
    fn wrgpt() {
        let text = "\
Subject: [b12][hand:45]
+-+-----------+--------+-------+------+
 1|D alice    |  9,800 |       |      |";
        assert_eq!(detect(text), Ok(Dialect::Wrgpt));
    }

    #[test]
    fn wrgpt_without_subject() {
        let text = "\
+-+-----------+--------+-------+------+
! Table b12, Hand 45, Day 3
 1|D alice    |  9,800 |       |      |";
        assert_eq!(detect(text), Ok(Dialect::Wrgpt));
    }

    #[test]
    fn stars_currencies() {
        for currency in Currency::all() {
            let s = currency.symbol();
            let text = format!(
                "PokerStars Hand #1:  Hold'em No Limit ({s}0.50/{s}1.00 {}) - 2024/03/14 10:00:00 ET\nSeat 1: alice ({s}100.00 in chips)",
                currency.code()
            );
            assert_eq!(detect(&text), Ok(Dialect::Stars(currency)));
        }
    }

    #[test]
    fn tournament() {
        let text = "\
PokerStars Hand #1:  Tournament #9, Hold'em No Limit - Level I (10/20) - 2024/03/14 10:00:00 ET
Seat 1: alice (1500 in chips)";
        assert_eq!(detect(text), Ok(Dialect::Tournament));
    }

    #[test]
    fn mismatched_seat_shape() {
        let text = "\
PokerStars Hand #1:  Hold'em No Limit ($0.50/$1.00 USD) - 2024/03/14 10:00:00 ET
Seat 1: alice (€100.00 in chips)";
        assert!(matches!(detect(text), Err(Rejection::UnknownDialect { header: Some(_) })));
        let text = "\
Subject: [b12][hand:45]
Seat 1: alice (1500 in chips)";
        assert!(matches!(detect(text), Err(Rejection::UnknownDialect { .. })));
    }

    #[test]
    fn missing_pieces() {
        assert_eq!(detect(""), Err(Rejection::UnknownDialect { header: None }));
        let text = "Subject: [b12][hand:45]\n! 03/14/98 10:00:00! alice blinds $100";
        assert!(matches!(detect(text), Err(Rejection::UnknownDialect { header: Some(_) })));
        let text = "Full Tilt Poker Game #1: Table X - $1/$2\nSeat 1: alice ($100 in chips)";
        assert_eq!(detect(text), Err(Rejection::UnknownDialect { header: None }));
    }
}
