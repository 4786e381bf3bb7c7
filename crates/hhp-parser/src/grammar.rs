use super::*;
use chrono::NaiveDateTime;
use hhp_cards::Card;
use hhp_cards::Hole;
use hhp_core::Chair;
use hhp_core::Chips;
use regex::Captures;
use regex::Regex;

/// The betting verbs a grammar recognises.
///
/// `Allin` is a push whose wager type the machine works out from the
/// table state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Blind,
    Ante,
    Fold,
    Check,
    Call,
    Bet,
    Raise,
    Allin,
}

/// What one line means once the dialect is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Header {
        table: Option<String>,
        hand: Option<String>,
        day: Option<u32>,
        played: Option<NaiveDateTime>,
        button: Option<Chair>,
    },
    Seat {
        chair: Chair,
        name: String,
        stack: Chips,
        button: bool,
    },
    Act {
        name: String,
        verb: Verb,
        amount: Option<Chips>,
        to: Option<Chips>,
        allin: bool,
    },
    Deal {
        cards: Vec<Card>,
    },
    Show {
        name: String,
        hole: Hole,
    },
    Muck {
        name: String,
    },
    Collect {
        name: String,
        amount: Chips,
        pot: usize,
    },
    Return {
        name: String,
        amount: Chips,
    },
    Rake {
        amount: Chips,
    },
    Board {
        cards: Vec<Card>,
    },
    Close,
}

/// One dialect family's pattern table.
///
/// Every regex names its captures the same way (`name`, `amt`, `to`,
/// `cards`, `tail`, ...) so one reader serves both families.
#[derive(Debug, Clone)]
pub struct Grammar {
    clock: &'static str,
    stamp: Option<Regex>,
    headers: Vec<Regex>,
    seat: Regex,
    actions: Vec<(Regex, Verb)>,
    deal: Regex,
    show: Regex,
    muck: Regex,
    collect: Regex,
    refund: Regex,
    rake: Option<Regex>,
    board: Regex,
    close: Option<Regex>,
    markers: &'static [&'static str],
}

fn re(parts: &[&str]) -> Result<Regex, regex::Error> {
    Regex::new(&parts.concat())
}

impl Grammar {
    /// Email-era tournament logs with a pipe-drawn seat table.
    pub fn wrgpt() -> Result<Self, regex::Error> {
        Ok(Self {
            clock: "%m/%d/%y %H:%M:%S",
            stamp: Some(re(&[STAMP])?),
            headers: vec![
                re(&[r"^Subject: \[(?P<table>[^\]]+)\]\[hand:(?P<hand>\d+)\]"])?,
                re(&[r"^! Table (?P<table>[^,]+), Hand (?P<hand>\d+)(?:, Day (?P<day>\d+))?"])?,
            ],
            seat: re(&[
                r"^\s*(?P<chair>\d+)\|(?P<marker>[DV> ])\s*(?P<name>[^|]+?)\s*\|\s*(?P<stack>",
                MONEY,
                r")\s*\|",
            ])?,
            actions: vec![
                (re(&[STAMP, r"(?P<name>.+?) is on vacation and folds"])?, Verb::Fold),
                (re(&[STAMP, r"(?P<name>.+?) blinds (?P<amt>", MONEY, r")(?P<tail>.*)$"])?, Verb::Blind),
                (re(&[STAMP, r"(?P<name>.+?) antes (?P<amt>", MONEY, r")(?P<tail>.*)$"])?, Verb::Ante),
                (re(&[STAMP, r"(?P<name>.+?) folds\b"])?, Verb::Fold),
                (re(&[STAMP, r"(?P<name>.+?) checks\b"])?, Verb::Check),
                (
                    re(&[
                        STAMP,
                        r"(?P<name>.+?) raises (?:(?P<amt>",
                        MONEY,
                        r") )?to (?P<to>",
                        MONEY,
                        r")(?: total)?(?P<tail>.*)$",
                    ])?,
                    Verb::Raise,
                ),
                (re(&[STAMP, r"(?P<name>.+?) raises (?P<amt>", MONEY, r")(?P<tail>.*)$"])?, Verb::Raise),
                (re(&[STAMP, r"(?P<name>.+?) bets (?P<amt>", MONEY, r")(?P<tail>.*)$"])?, Verb::Bet),
                (re(&[STAMP, r"(?P<name>.+?) calls(?: (?P<amt>", MONEY, r"))?(?P<tail>.*)$"])?, Verb::Call),
                (
                    re(&[STAMP, r"(?P<name>.+?) (?:is|goes) all[ -]in(?: (?:for|with) (?P<amt>", MONEY, r"))?"])?,
                    Verb::Allin,
                ),
            ],
            deal: re(&[STAMP, r"Flopped cards?:\s*(?P<cards>.+)$"])?,
            show: re(&[STAMP, r"(?P<name>.+?)\s+has:\s+(?P<cards>", CARD, r"[\s,]+", CARD, r")"])?,
            muck: re(&[STAMP, r"(?P<name>.+?) mucks"])?,
            collect: re(&[
                STAMP,
                r"(?P<name>.+?) wins (?P<amt>",
                MONEY,
                r")(?: from (?:the )?(?P<pot>main pot|side pot(?: #?(?P<side>\d+))?))?",
            ])?,
            refund: re(&[STAMP, r"Uncalled bet \((?P<amt>", MONEY, r")\) returned to (?P<name>.+?)\s*$"])?,
            rake: None,
            board: re(&[r"^! Hand over, current board is:\s*(?P<cards>.*)$"])?,
            close: None,
            markers: &["> ", "D ", "V "],
        })
    }

    /// `Seat N:` lines and `name: verb` events, cash or tournament.
    pub fn stars() -> Result<Self, regex::Error> {
        Ok(Self {
            clock: "%Y/%m/%d %H:%M:%S",
            stamp: None,
            headers: vec![
                re(&[
                    r"^PokerStars (?:Hand|Game) #(?P<hand>\d+):.*? - ",
                    r"(?P<played>\d{4}/\d{2}/\d{2} \d{1,2}:\d{2}:\d{2})",
                ])?,
                re(&[r"^Table '(?P<table>[^']+)'.*?(?:Seat #(?P<button>\d+) is the button)?\s*$"])?,
            ],
            seat: re(&[
                r"^Seat (?P<chair>\d+): (?P<name>.+?) \((?P<stack>",
                MONEY,
                r") in chips[),]",
            ])?,
            actions: vec![
                (
                    re(&[
                        r"^(?P<name>.+?): posts (?:small blind|big blind|small & big blinds|the big blind|a dead small blind) (?P<amt>",
                        MONEY,
                        r")(?P<tail>.*)$",
                    ])?,
                    Verb::Blind,
                ),
                (re(&[r"^(?P<name>.+?): posts (?:the )?ante (?P<amt>", MONEY, r")(?P<tail>.*)$"])?, Verb::Ante),
                (re(&[r"^(?P<name>.+?): folds\b"])?, Verb::Fold),
                (re(&[r"^(?P<name>.+?): checks\b"])?, Verb::Check),
                (re(&[r"^(?P<name>.+?): calls (?P<amt>", MONEY, r")(?P<tail>.*)$"])?, Verb::Call),
                (re(&[r"^(?P<name>.+?): bets (?P<amt>", MONEY, r")(?P<tail>.*)$"])?, Verb::Bet),
                (
                    re(&[
                        r"^(?P<name>.+?): raises (?P<amt>",
                        MONEY,
                        r") to (?P<to>",
                        MONEY,
                        r")(?P<tail>.*)$",
                    ])?,
                    Verb::Raise,
                ),
            ],
            deal: re(&[r"^\*\*\* (?:FLOP|TURN|RIVER) \*\*\*.*\[(?P<cards>[^\]]+)\]\s*$"])?,
            show: re(&[r"^(?P<name>.+?): shows \[(?P<cards>[^\]]+)\]"])?,
            muck: re(&[r"^(?P<name>.+?): mucks hand"])?,
            collect: re(&[
                r"^(?P<name>.+?) collected (?P<amt>",
                MONEY,
                r") from (?P<pot>pot|main pot|side pot(?:-(?P<side>\d+))?)",
            ])?,
            refund: re(&[r"^Uncalled bet \((?P<amt>", MONEY, r")\) returned to (?P<name>.+?)\s*$"])?,
            rake: Some(re(&[r"^Total pot ", MONEY, r".*?\| Rake (?P<amt>", MONEY, r")"])?),
            board: re(&[r"^Board \[(?P<cards>[^\]]+)\]"])?,
            close: Some(re(&[r"^\*\*\* (?:SHOW DOWN|SUMMARY) \*\*\*"])?),
            markers: &[],
        })
    }
}

/// Reading lines into events.
impl Grammar {
    /// Interprets a classified line, or `None` if this family cannot read it.
    pub fn read(&self, money: &Money, line: &Line) -> Option<Event> {
        let text = line.text();
        match line.kind() {
            LineKind::Header => self.header(text),
            LineKind::SeatLine => self.seat(money, text),
            LineKind::ActionLine => self.action(money, text),
            LineKind::BoardLine => self.deal(text),
            LineKind::SummaryLine => self.summary(money, text),
            LineKind::Unknown => None,
        }
    }

    /// Prefixes the layout prints in front of names, stripped when an
    /// actor's name does not match a seat exactly.
    pub fn markers(&self) -> &'static [&'static str] {
        self.markers
    }

    /// The event timestamp some layouts print on every line.
    pub fn stamp(&self, text: &str) -> Option<NaiveDateTime> {
        let caps = self.stamp.as_ref()?.captures(text)?;
        NaiveDateTime::parse_from_str(caps.name("ts")?.as_str(), self.clock).ok()
    }

    fn header(&self, text: &str) -> Option<Event> {
        let caps = self.headers.iter().find_map(|re| re.captures(text))?;
        Some(Event::Header {
            table: string(&caps, "table").map(|t| t.trim().to_string()),
            hand: string(&caps, "hand"),
            day: string(&caps, "day").and_then(|d| d.parse().ok()),
            played: string(&caps, "played")
                .and_then(|p| NaiveDateTime::parse_from_str(&p, self.clock).ok()),
            button: string(&caps, "button").and_then(|b| b.parse().ok()),
        })
    }

    fn seat(&self, money: &Money, text: &str) -> Option<Event> {
        let caps = self.seat.captures(text)?;
        Some(Event::Seat {
            chair: caps.name("chair")?.as_str().parse().ok()?,
            name: caps.name("name")?.as_str().trim().to_string(),
            stack: money.parse(caps.name("stack")?.as_str())?,
            button: caps.name("marker").is_some_and(|m| m.as_str() == "D"),
        })
    }

    fn action(&self, money: &Money, text: &str) -> Option<Event> {
        let (caps, verb) = self
            .actions
            .iter()
            .find_map(|(re, verb)| re.captures(text).map(|caps| (caps, *verb)))?;
        Some(Event::Act {
            name: caps.name("name")?.as_str().trim().to_string(),
            verb,
            amount: amount(&caps, "amt", money)?,
            to: amount(&caps, "to", money)?,
            allin: verb == Verb::Allin
                || caps.name("tail").is_some_and(|m| {
                    let tail = m.as_str().to_lowercase();
                    tail.contains("all-in") || tail.contains("all in")
                }),
        })
    }

    fn deal(&self, text: &str) -> Option<Event> {
        let caps = self.deal.captures(text)?;
        let cards = Card::parse(caps.name("cards")?.as_str()).ok()?;
        Some(Event::Deal { cards })
    }

    fn summary(&self, money: &Money, text: &str) -> Option<Event> {
        if let Some(caps) = self.show.captures(text) {
            return Some(Event::Show {
                name: caps.name("name")?.as_str().trim().to_string(),
                hole: Hole::try_from(caps.name("cards")?.as_str()).ok()?,
            });
        }
        if let Some(caps) = self.muck.captures(text) {
            return Some(Event::Muck {
                name: caps.name("name")?.as_str().trim().to_string(),
            });
        }
        if let Some(caps) = self.collect.captures(text) {
            let pot = match (string(&caps, "pot").as_deref(), string(&caps, "side")) {
                (Some(label), None) if label.starts_with("side") => 1,
                (_, Some(side)) => side.parse().ok()?,
                _ => 0,
            };
            return Some(Event::Collect {
                name: caps.name("name")?.as_str().trim().to_string(),
                amount: amount(&caps, "amt", money)??,
                pot,
            });
        }
        if let Some(caps) = self.refund.captures(text) {
            return Some(Event::Return {
                name: caps.name("name")?.as_str().trim().to_string(),
                amount: amount(&caps, "amt", money)??,
            });
        }
        if let Some(caps) = self.rake.as_ref().and_then(|re| re.captures(text)) {
            return Some(Event::Rake {
                amount: amount(&caps, "amt", money)??,
            });
        }
        if let Some(caps) = self.board.captures(text) {
            return Some(Event::Board {
                cards: Card::parse(caps.name("cards")?.as_str()).ok()?,
            });
        }
        if self.close.as_ref().is_some_and(|re| re.is_match(text)) {
            return Some(Event::Close);
        }
        None
    }
}

fn string(caps: &Captures, name: &str) -> Option<String> {
    caps.name(name).map(|m| m.as_str().to_string())
}

/// `Some(None)` when the group did not participate, `None` when it did but
/// the amount is unreadable.
fn amount(caps: &Captures, name: &str, money: &Money) -> Option<Option<Chips>> {
    match caps.name(name) {
        None => Some(None),
        Some(m) => money.parse(m.as_str()).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hhp_records::Currency;
    use hhp_records::Dialect;

    fn line(kind: LineKind, text: &str) -> Line<'_> {
        Line::new(kind, 1, text)
    }

    #[test]
    fn wrgpt_raise_forms() {
        let grammar = Grammar::wrgpt().unwrap();
        let money = Money::from(Dialect::Wrgpt);
        let full = line(LineKind::ActionLine, "! 03/14/98 10:00:03! carol raises $400 to $600 total");
        let bare = line(LineKind::ActionLine, "! 03/14/98 10:00:03! carol raises to $600");
        assert_eq!(
            grammar.read(&money, &full),
            Some(Event::Act {
                name: "carol".into(),
                verb: Verb::Raise,
                amount: Some(400),
                to: Some(600),
                allin: false,
            })
        );
        assert!(matches!(
            grammar.read(&money, &bare),
            Some(Event::Act { amount: None, to: Some(600), .. })
        ));
    }

    #[test]
    fn wrgpt_seat_and_stamp() {
        let grammar = Grammar::wrgpt().unwrap();
        let money = Money::from(Dialect::Wrgpt);
        let seat = line(LineKind::SeatLine, " 3|D bob        |  9,800 |        |      |");
        assert_eq!(
            grammar.read(&money, &seat),
            Some(Event::Seat {
                chair: 3,
                name: "bob".into(),
                stack: 9800,
                button: true,
            })
        );
        let stamp = grammar.stamp("! 03/14/98 10:00:03! bob folds").unwrap();
        assert_eq!(stamp.to_string(), "1998-03-14 10:00:03");
    }

    #[test]
    fn wrgpt_unlabeled_win_is_main() {
        let grammar = Grammar::wrgpt().unwrap();
        let money = Money::from(Dialect::Wrgpt);
        let main = line(LineKind::SummaryLine, "! 03/14/98 10:00:09! bob wins $1,200");
        let side = line(LineKind::SummaryLine, "! 03/14/98 10:00:09! bob wins $300 from side pot #2");
        assert!(matches!(grammar.read(&money, &main), Some(Event::Collect { amount: 1200, pot: 0, .. })));
        assert!(matches!(grammar.read(&money, &side), Some(Event::Collect { amount: 300, pot: 2, .. })));
    }

    #[test]
    fn stars_allin_tail() {
        let grammar = Grammar::stars().unwrap();
        let money = Money::from(Dialect::Stars(Currency::Usd));
        let call = line(LineKind::ActionLine, "bob: calls $4.50 and is all-in");
        assert_eq!(
            grammar.read(&money, &call),
            Some(Event::Act {
                name: "bob".into(),
                verb: Verb::Call,
                amount: Some(450),
                to: None,
                allin: true,
            })
        );
    }

    #[test]
    fn stars_wrong_currency_is_unreadable() {
        let grammar = Grammar::stars().unwrap();
        let money = Money::from(Dialect::Stars(Currency::Usd));
        let bet = line(LineKind::ActionLine, "bob: bets €4");
        assert_eq!(grammar.read(&money, &bet), None);
    }

    #[test]
    fn stars_turn_takes_last_bracket() {
        let grammar = Grammar::stars().unwrap();
        let money = Money::from(Dialect::Tournament);
        let turn = line(LineKind::BoardLine, "*** TURN *** [As Kd 7c] [2h]");
        assert_eq!(
            grammar.read(&money, &turn),
            Some(Event::Deal {
                cards: Card::parse("2h").unwrap()
            })
        );
    }

    #[test]
    fn stars_headers() {
        let grammar = Grammar::stars().unwrap();
        let money = Money::from(Dialect::Tournament);
        let table = line(LineKind::Header, "Table '77 3' 9-max Seat #4 is the button");
        assert!(matches!(
            grammar.read(&money, &table),
            Some(Event::Header { button: Some(4), .. })
        ));
        let hand = line(
            LineKind::Header,
            "PokerStars Hand #42:  Tournament #7, Hold'em No Limit - Level I (10/20) - 2024/03/14 9:05:00 ET",
        );
        match grammar.read(&money, &hand) {
            Some(Event::Header { hand, played, .. }) => {
                assert_eq!(hand.as_deref(), Some("42"));
                assert_eq!(played.map(|p| p.to_string()).as_deref(), Some("2024-03-14 09:05:00"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn stars_summary_events() {
        let grammar = Grammar::stars().unwrap();
        let money = Money::from(Dialect::Stars(Currency::Usd));
        let cases = [
            ("alice collected $15.75 from pot", Event::Collect { name: "alice".into(), amount: 1575, pot: 0 }),
            ("bob collected $3 from side pot-2", Event::Collect { name: "bob".into(), amount: 300, pot: 2 }),
            ("bob collected $3 from side pot", Event::Collect { name: "bob".into(), amount: 300, pot: 1 }),
            ("Uncalled bet ($2) returned to bob", Event::Return { name: "bob".into(), amount: 200 }),
            ("Total pot $16.50 | Rake $0.75", Event::Rake { amount: 75 }),
            ("bob: mucks hand", Event::Muck { name: "bob".into() }),
            ("*** SUMMARY ***", Event::Close),
        ];
        for (text, event) in cases {
            assert_eq!(grammar.read(&money, &line(LineKind::SummaryLine, text)), Some(event));
        }
    }
}
