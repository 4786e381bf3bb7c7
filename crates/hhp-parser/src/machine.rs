use super::*;
use chrono::NaiveDateTime;
use hhp_cards::Card;
use hhp_cards::Hole;
use hhp_cards::Street;
use hhp_core::Chair;
use hhp_core::Chips;
use hhp_core::Position;
use hhp_records::Action;
use hhp_records::BoardCard;
use hhp_records::Dialect;
use hhp_records::Draft;
use hhp_records::Gap;
use hhp_records::Header;
use hhp_records::Kind;
use hhp_records::Pot;
use hhp_records::Refund;
use hhp_records::Seat;
use hhp_records::ShowdownEntry;
use hhp_records::Wager;
use std::collections::BTreeMap;

/// Index given to actors whose name matches no seat.
const STRANGER: usize = usize::MAX;

/// A seat as printed, before the button is known.
#[derive(Debug, Clone)]
struct Sitter {
    chair: Chair,
    name: String,
    stack: Chips,
}

/// Walks a hand's lines in order and assembles a [`Draft`].
///
/// Seats are indexed in the order they were read until [`Machine::finish`]
/// rotates them into button-relative positions. Nothing here rejects a
/// hand; inconsistent input is recorded faithfully and left for the
/// [`Validator`].
pub struct Machine<'a> {
    grammar: &'a Grammar,
    money: Money,
    dialect: Dialect,
    table: Option<String>,
    hand: Option<String>,
    day: Option<u32>,
    played: Option<NaiveDateTime>,
    button: Option<Chair>,
    sitters: Vec<Sitter>,
    street: Street,
    stakes: Vec<Chips>,
    spent: Vec<Chips>,
    folded: Vec<bool>,
    allin: Vec<bool>,
    pot: Chips,
    seq: usize,
    acting: bool,
    summary: bool,
    pots: BTreeMap<usize, (Chips, Vec<usize>)>,
    draft: Draft,
}

impl<'a> Machine<'a> {
    pub fn new(patterns: &'a Patterns, dialect: Dialect) -> Self {
        Self {
            grammar: patterns.grammar(dialect),
            money: Money::from(dialect),
            dialect,
            table: None,
            hand: None,
            day: None,
            played: None,
            button: None,
            sitters: Vec::new(),
            street: Street::Pref,
            stakes: Vec::new(),
            spent: Vec::new(),
            folded: Vec::new(),
            allin: Vec::new(),
            pot: 0,
            seq: 0,
            acting: false,
            summary: false,
            pots: BTreeMap::new(),
            draft: Draft::default(),
        }
    }

    /// Applies one line.
    pub fn consume(&mut self, line: &Line) {
        if self.played.is_none() {
            self.played = self.grammar.stamp(line.text());
        }
        if line.kind() == LineKind::SummaryLine && !self.summary {
            log::trace!("line {}: summary opens", line.number());
            self.summary = true;
        }
        match self.grammar.read(&self.money, line) {
            Some(event) => self.apply(line, event),
            None => self.skip(line),
        }
    }

    /// Rotates seats so the button sits at position 0 and hands back
    /// everything read.
    pub fn finish(self, source: impl Into<String>) -> Draft {
        let source = source.into();
        let n = self.sitters.len();
        let positions = self.positions();
        let place = |i: usize| positions.get(i).copied().unwrap_or(n);
        let mut seats = self
            .sitters
            .iter()
            .enumerate()
            .map(|(i, s)| Seat::new(place(i), s.chair, s.name.clone(), s.stack))
            .collect::<Vec<Seat>>();
        seats.sort_by_key(Seat::position);
        let header = Header::new(
            self.table,
            self.hand.unwrap_or_else(|| source.clone()),
            self.day,
            self.played,
        );
        let draft = self.draft;
        Draft {
            source,
            header,
            seats,
            actions: draft
                .actions
                .into_iter()
                .map(|a| a.reseat(place(a.seat())))
                .collect(),
            showdown: draft
                .showdown
                .into_iter()
                .map(|e| e.reseat(place(e.seat())))
                .collect(),
            pots: self
                .pots
                .into_iter()
                .map(|(index, (amount, winners))| Pot::new(index, amount, winners).reseat(&place))
                .collect(),
            refunds: draft
                .refunds
                .into_iter()
                .map(|r| r.reseat(place(r.seat())))
                .collect(),
            ..draft
        }
    }
}

/// Running state, mostly for tests and logs.
impl Machine<'_> {
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }
    pub fn street(&self) -> Street {
        self.street
    }
    /// Chips put in so far, all streets.
    pub fn pot(&self) -> Chips {
        self.pot
    }
    /// Seats that have not folded.
    pub fn live(&self) -> usize {
        self.folded.iter().filter(|f| !**f).count()
    }
    pub fn is_summary(&self) -> bool {
        self.summary
    }
}

/// Event handling.
impl Machine<'_> {
    fn apply(&mut self, line: &Line, event: Event) {
        match event {
            Event::Header {
                table,
                hand,
                day,
                played,
                button,
            } => {
                self.table = self.table.take().or(table);
                self.hand = self.hand.take().or(hand);
                self.day = self.day.or(day);
                self.played = self.played.or(played);
                self.button = self.button.or(button);
            }
            Event::Seat {
                chair,
                name,
                stack,
                button,
            } => {
                if self.acting {
                    self.gap(line)
                } else {
                    self.sit(chair, name, stack, button)
                }
            }
            Event::Act {
                name,
                verb,
                amount,
                to,
                allin,
            } => {
                if self.summary {
                    self.gap(line)
                } else {
                    self.act(line, &name, verb, amount, to, allin)
                }
            }
            Event::Deal { cards } => self.deal(line, cards),
            Event::Show { name, hole } => self.reveal(&name, Some(hole)),
            Event::Muck { name } => self.reveal(&name, None),
            Event::Collect { name, amount, pot } => {
                let seat = self.resolve(&name).unwrap_or(STRANGER);
                let entry = self.pots.entry(pot).or_default();
                match entry.0.checked_add(amount) {
                    Some(total) => {
                        entry.0 = total;
                        entry.1.push(seat);
                    }
                    None => self.overflow(line),
                }
            }
            Event::Return { name, amount } => {
                let seat = self.resolve(&name).unwrap_or(STRANGER);
                self.draft.refunds.push(Refund::new(seat, amount));
            }
            Event::Rake { amount } => match self.draft.rake.checked_add(amount) {
                Some(rake) => self.draft.rake = rake,
                None => self.overflow(line),
            },
            Event::Board { cards } => self.draft.final_board = Some(cards),
            Event::Close => {}
        }
    }

    /// Lines the grammar could not read. Inside the betting history they
    /// become gaps; before it or after the summary opens they are noise,
    /// except seat lines, which the table cannot do without.
    fn skip(&mut self, line: &Line) {
        match line.kind() {
            LineKind::SeatLine if !self.acting && !self.summary => {
                log::debug!("line {}: unreadable seat {:?}", line.number(), line.text());
                self.draft.lost_seats.push(Gap::new(line.number(), line.text()));
            }
            LineKind::Unknown | LineKind::ActionLine | LineKind::BoardLine | LineKind::SeatLine
                if self.acting && !self.summary =>
            {
                self.gap(line)
            }
            _ => log::trace!("line {}: skipped", line.number()),
        }
    }

    fn gap(&mut self, line: &Line) {
        log::debug!("line {}: unreadable {:?}", line.number(), line.text());
        self.draft.gaps.push(Gap::new(line.number(), line.text()));
    }

    /// Chip totals past `Chips::MAX`. The line is not applied.
    fn overflow(&mut self, line: &Line) {
        log::debug!("line {}: chip amounts overflow", line.number());
        self.draft.overflow.get_or_insert(line.number());
    }

    fn sit(&mut self, chair: Chair, name: String, stack: Chips, button: bool) {
        if button {
            self.button = self.button.or(Some(chair));
        }
        self.sitters.push(Sitter { chair, name, stack });
        self.stakes.push(0);
        self.spent.push(0);
        self.folded.push(false);
        self.allin.push(false);
    }

    /// Exact name first, then with the layout's marker prefix stripped.
    fn resolve(&self, name: &str) -> Option<usize> {
        let find = |name: &str| self.sitters.iter().position(|s| s.name == name);
        find(name).or_else(|| {
            self.grammar
                .markers()
                .iter()
                .find_map(|m| name.strip_prefix(m))
                .and_then(|stripped| find(stripped.trim()))
        })
    }

    fn act(
        &mut self,
        line: &Line,
        name: &str,
        verb: Verb,
        amount: Option<Chips>,
        to: Option<Chips>,
        allin: bool,
    ) {
        let seat = self.resolve(name);
        if seat.is_none() {
            log::debug!("line {}: {} is not seated", line.number(), name);
        }
        let stake = seat.map(|i| self.stakes[i]).unwrap_or_default();
        let max = self.stakes.iter().copied().max().unwrap_or_default();
        let (kind, chips) = match verb {
            Verb::Blind => (Kind::Blind, amount.unwrap_or_default()),
            Verb::Ante => (Kind::Ante, amount.unwrap_or_default()),
            Verb::Fold => (Kind::Fold, 0),
            Verb::Check => (Kind::Check, 0),
            Verb::Call => (
                Kind::wager(Wager::Call, allin),
                amount.unwrap_or((max - stake).max(0)),
            ),
            Verb::Bet => match amount {
                Some(chips) => (Kind::wager(Wager::Bet, allin), chips),
                None => return self.gap(line),
            },
            Verb::Raise => match (amount, to) {
                (by, Some(to)) => (
                    Kind::wager(Wager::Raise(by.unwrap_or(to - max)), allin),
                    to - stake,
                ),
                (Some(by), None) => match max.checked_add(by) {
                    Some(top) => (Kind::wager(Wager::Raise(by), allin), top - stake),
                    None => return self.overflow(line),
                },
                (None, None) => return self.gap(line),
            },
            Verb::Allin => {
                let chips = amount
                    .or_else(|| seat.map(|i| self.sitters[i].stack - self.spent[i]))
                    .unwrap_or_default();
                let Some(total) = stake.checked_add(chips) else {
                    return self.overflow(line);
                };
                let wager = match (total <= max, max) {
                    (true, _) => Wager::Call,
                    (false, 0) => Wager::Bet,
                    (false, _) => Wager::Raise(total - max),
                };
                (Kind::Shove(wager), chips)
            }
        };
        let Some(pot) = self.pot.checked_add(chips) else {
            return self.overflow(line);
        };
        if let Some(i) = seat {
            let (Some(staked), Some(spent)) = (
                self.stakes[i].checked_add(chips),
                self.spent[i].checked_add(chips),
            ) else {
                return self.overflow(line);
            };
            if self.folded[i] || self.allin[i] {
                log::debug!("line {}: {} acts out of turn", line.number(), name);
            }
            if kind != Kind::Ante {
                self.stakes[i] = staked;
            }
            self.spent[i] = spent;
            self.folded[i] |= kind.is_fold();
            self.allin[i] |= allin || kind.is_allin();
        }
        self.pot = pot;
        self.draft.actions.push(Action::new(
            seat.unwrap_or(STRANGER),
            self.street,
            self.seq,
            kind,
            chips,
        ));
        self.seq += 1;
        self.acting = true;
        if kind.is_fold() && self.live() == 1 {
            log::debug!("line {}: folded out on the {}", line.number(), self.street);
        }
    }

    /// New community cards; the street follows the cumulative count.
    fn deal(&mut self, line: &Line, cards: Vec<Card>) {
        for card in cards {
            let street = Street::of_card(self.draft.board.len()).unwrap_or(Street::Rive);
            self.draft.board.push(BoardCard::new(card, street));
        }
        match Street::try_from(self.draft.board.len()) {
            Ok(street) if street > self.street => {
                log::trace!("line {}: {} -> {} (pot {})", line.number(), self.street, street, self.pot);
                self.street = street;
                self.stakes.fill(0);
                self.seq = 0;
            }
            Ok(_) => {}
            Err(_) => log::debug!(
                "line {}: {} board cards dealt",
                line.number(),
                self.draft.board.len()
            ),
        }
    }

    fn reveal(&mut self, name: &str, hole: Option<Hole>) {
        let seat = self.resolve(name).unwrap_or(STRANGER);
        if self.draft.showdown.iter().any(|e| e.seat() == seat) {
            return;
        }
        self.draft.showdown.push(match hole {
            Some(hole) => ShowdownEntry::shown(seat, hole),
            None => ShowdownEntry::mucked(seat),
        });
    }

    /// Read index → position: clockwise by chair, starting at the button.
    fn positions(&self) -> Vec<Position> {
        let n = self.sitters.len();
        let mut order = (0..n).collect::<Vec<usize>>();
        order.sort_by_key(|&i| self.sitters[i].chair);
        let button = self.dealer(&order);
        let mut positions = vec![0; n];
        for (rank, &i) in order.iter().enumerate() {
            positions[i] = (rank + n - button) % n;
        }
        positions
    }

    /// Rank of the button in chair order.
    ///
    /// The printed button when it names a seated chair; otherwise the seat
    /// before the first blind poster; otherwise the lowest chair.
    fn dealer(&self, order: &[usize]) -> usize {
        let rank = |index: usize| order.iter().position(|&j| j == index);
        if let Some(chair) = self.button {
            if let Some(r) = order.iter().position(|&i| self.sitters[i].chair == chair) {
                return r;
            }
        }
        let poster = self
            .draft
            .actions
            .iter()
            .find(|a| a.kind() == Kind::Blind)
            .and_then(|a| rank(a.seat()));
        match poster {
            Some(r) => {
                log::debug!("button inferred from the first blind");
                (r + order.len() - 1) % order.len()
            }
            None => 0,
        }
    }
}
