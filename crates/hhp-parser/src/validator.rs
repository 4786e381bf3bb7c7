use super::*;
use hhp_cards::Hand;
use hhp_cards::Street;
use hhp_core::BOARD_SIZE;
use hhp_core::MAX_SEATS;
use hhp_core::MIN_SEATS;
use hhp_records::Confidence;
use hhp_records::Dialect;
use hhp_records::Draft;
use hhp_records::Gap;
use hhp_records::ParsedHand;
use std::collections::HashSet;

/// Checks a [`Draft`] against the structural rules of a hand and seals it.
///
/// Seating, references, ordering, liveness and the board are checked first;
/// chip accounting last, so a hand that is both malformed and short is
/// reported as malformed.
pub struct Validator<'a> {
    patterns: &'a Patterns,
}

impl<'a> Validator<'a> {
    pub fn new(patterns: &'a Patterns) -> Self {
        Self { patterns }
    }

    pub fn validate(&self, draft: Draft, dialect: Dialect) -> Result<ParsedHand, Rejection> {
        Self::seating(&draft)?;
        Self::references(&draft)?;
        Self::ordering(&draft)?;
        Self::liveness(&draft)?;
        Self::board(&draft)?;
        Self::accounting(&draft)?;
        let gaps = draft
            .gaps
            .iter()
            .filter(|gap| !self.patterns.ignorable(gap.text()))
            .cloned()
            .collect::<Vec<Gap>>();
        if !gaps.is_empty() {
            log::debug!("{}: {} unreadable lines", draft.source, gaps.len());
        }
        let confidence = Confidence::from(gaps);
        Ok(ParsedHand::from((draft, dialect, confidence)))
    }
}

/// The individual rules, in the order they run.
impl Validator<'_> {
    /// Every seat line was read; positions are exactly 0..n; chairs and
    /// names are unique.
    fn seating(draft: &Draft) -> Result<(), Violation> {
        if let Some(gap) = draft.lost_seats.first() {
            return Err(Violation::UnreadableSeat { line: gap.line() });
        }
        let n = draft.seats.len();
        if !(MIN_SEATS..=MAX_SEATS).contains(&n) {
            return Err(Violation::SeatCount(n));
        }
        if draft.seats.iter().enumerate().any(|(i, s)| s.position() != i) {
            return Err(Violation::Positions(n));
        }
        let mut chairs = HashSet::new();
        let mut names = HashSet::new();
        for seat in draft.seats.iter() {
            if !chairs.insert(seat.chair()) {
                return Err(Violation::DuplicateChair(seat.chair()));
            }
            if !names.insert(seat.name()) {
                return Err(Violation::DuplicateName(seat.name().to_string()));
            }
        }
        Ok(())
    }

    /// Everything that names a seat names one at the table.
    fn references(draft: &Draft) -> Result<(), Violation> {
        let n = draft.seats.len();
        let check = |what: &'static str, seat: usize| {
            if seat < n {
                Ok(())
            } else {
                Err(Violation::UnknownSeat { what, seat })
            }
        };
        for action in draft.actions.iter() {
            check("action", action.seat())?;
        }
        for entry in draft.showdown.iter() {
            check("showdown", entry.seat())?;
        }
        for refund in draft.refunds.iter() {
            check("refund", refund.seat())?;
        }
        for pot in draft.pots.iter() {
            if pot.winners().is_empty() {
                return Err(Violation::Unclaimed(pot.index()));
            }
            for seat in pot.winners() {
                check("pot", *seat)?;
            }
        }
        Ok(())
    }

    /// Strictly increasing `(street, seq)`, no negative amounts.
    fn ordering(draft: &Draft) -> Result<(), Violation> {
        for (index, action) in draft.actions.iter().enumerate() {
            if action.amount() < 0 {
                return Err(Violation::NegativeAmount {
                    index,
                    amount: action.amount(),
                });
            }
        }
        match draft
            .actions
            .windows(2)
            .position(|w| w[0].order() >= w[1].order())
        {
            Some(i) => Err(Violation::OutOfOrder { index: i + 1 }),
            None => Ok(()),
        }
    }

    /// Nobody acts after folding or going all-in.
    fn liveness(draft: &Draft) -> Result<(), Violation> {
        let n = draft.seats.len();
        let mut folded = vec![false; n];
        let mut allin = vec![false; n];
        for action in draft.actions.iter() {
            let seat = action.seat();
            let street = action.street();
            if folded[seat] {
                return Err(Violation::ActedAfterFold { seat, street });
            }
            if allin[seat] {
                return Err(Violation::ActedAfterAllin { seat, street });
            }
            folded[seat] = action.kind().is_fold();
            allin[seat] = action.kind().is_allin();
        }
        Ok(())
    }

    /// Board size, street tags, betting within the board, and no card
    /// dealt twice.
    fn board(draft: &Draft) -> Result<(), Violation> {
        let count = draft.board.len();
        let reached = Street::try_from(count)
            .ok()
            .filter(|_| count <= BOARD_SIZE)
            .ok_or(Violation::BoardCount(count))?;
        for (index, card) in draft.board.iter().enumerate() {
            if Street::of_card(index) != Some(card.street()) {
                return Err(Violation::BoardStreet {
                    index,
                    street: card.street(),
                });
            }
        }
        if let Some(action) = draft.actions.iter().find(|a| a.street() > reached) {
            return Err(Violation::BeyondBoard {
                street: action.street(),
                cards: count,
            });
        }
        if let Some(stated) = draft.final_board.as_ref() {
            let dealt = draft.board.iter().map(|b| b.card()).collect::<Vec<_>>();
            if *stated != dealt {
                return Err(Violation::BoardMismatch);
            }
        }
        let mut seen = Hand::empty();
        let shown = draft
            .showdown
            .iter()
            .filter_map(|e| e.hole())
            .flat_map(|hole| hole.cards());
        for card in draft.board.iter().map(|b| b.card()).chain(shown) {
            if !seen.insert(card) {
                return Err(Violation::DuplicateCard(card));
            }
        }
        Ok(())
    }

    /// Pots, refunds and rake account for every chip committed.
    fn accounting(draft: &Draft) -> Result<(), Rejection> {
        if let Some(line) = draft.overflow {
            return Err(Violation::Overflow { line }.into());
        }
        let stated = draft.stated().ok_or(Violation::TotalsOverflow)?;
        let committed = draft.committed().ok_or(Violation::TotalsOverflow)?;
        if stated != committed {
            return Err(Rejection::PotMismatch { stated, committed });
        }
        Ok(())
    }
}
