criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        parsing_card_strings,
        compiling_patterns,
        tokenizing_stars_hand,
        detecting_wrgpt_dialect,
        parsing_stars_hand,
        parsing_wrgpt_hand,
        batching_many_hands,
}

fn parsing_card_strings(c: &mut criterion::Criterion) {
    let text = (0..5)
        .map(|_| Card::random().to_string())
        .collect::<Vec<_>>()
        .join(" ");
    c.bench_function("parse a 5-card board string", |b| {
        b.iter(|| Card::parse(&text))
    });
}

fn compiling_patterns(c: &mut criterion::Criterion) {
    c.bench_function("compile every line pattern", |b| {
        b.iter(|| Patterns::new())
    });
}

fn tokenizing_stars_hand(c: &mut criterion::Criterion) {
    let patterns = Patterns::new().unwrap();
    c.bench_function("tokenize a PokerStars hand", |b| {
        b.iter(|| Tokenizer::tokenize(&patterns, STARS).len())
    });
}

fn detecting_wrgpt_dialect(c: &mut criterion::Criterion) {
    let patterns = Patterns::new().unwrap();
    let lines = Tokenizer::tokenize(&patterns, WRGPT);
    c.bench_function("detect a WRGPT dialect", |b| {
        b.iter(|| Detector::detect(&patterns, &lines))
    });
}

fn parsing_stars_hand(c: &mut criterion::Criterion) {
    let patterns = Patterns::new().unwrap();
    let parser = Parser::new(&patterns);
    let raw = RawHand::now("bench", STARS);
    c.bench_function("parse a PokerStars hand", |b| {
        b.iter(|| parser.parse(&raw))
    });
}

fn parsing_wrgpt_hand(c: &mut criterion::Criterion) {
    let patterns = Patterns::new().unwrap();
    let parser = Parser::new(&patterns);
    let raw = RawHand::now("bench", WRGPT);
    c.bench_function("parse a WRGPT hand", |b| {
        b.iter(|| parser.parse(&raw))
    });
}

fn batching_many_hands(c: &mut criterion::Criterion) {
    let patterns = Patterns::new().unwrap();
    let batch = Batch::new(&patterns);
    let hands = (0..1024)
        .map(|i| match i % 2 {
            0 => RawHand::now(format!("stars#{}", i), STARS),
            _ => RawHand::now(format!("wrgpt#{}", i), WRGPT),
        })
        .collect::<Vec<_>>();
    c.bench_function("parse 1024 hands in parallel", |b| {
        b.iter(|| batch.run(hands.clone()).total())
    });
}

const STARS: &str = "\
PokerStars Hand #245002:  Hold'em No Limit ($0.25/$0.50 USD) - 2024/03/14 10:05:00 ET
Table 'Alcyone' 6-max Seat #2 is the button
Seat 1: alice ($50.00 in chips)
Seat 2: bob ($42.10 in chips)
Seat 3: carol ($50.00 in chips)
carol: posts small blind $0.25
alice: posts big blind $0.50
*** HOLE CARDS ***
bob: calls $0.50
carol: calls $0.25
alice: checks
*** FLOP *** [8d 5c 2s]
carol: checks
alice: bets $1
bob: folds
carol: calls $1
*** TURN *** [8d 5c 2s] [Jh]
carol: checks
alice: checks
*** RIVER *** [8d 5c 2s Jh] [3d]
carol: checks
alice: checks
*** SHOW DOWN ***
alice: shows [Qs Qc] (a pair of Queens)
carol: mucks hand
alice collected $3.35 from pot
*** SUMMARY ***
Total pot $3.50 | Rake $0.15
Board [8d 5c 2s Jh 3d]
";

const WRGPT: &str = "\
Subject: [b12][hand:45]
! Table b12, Hand 45, Day 3
 1|D alice    |  10,000|        |          |
 2|> bob      |  10,000|        |          |
! History of this hand:
! 03/14/98 10:00:00! alice blinds $50
! 03/14/98 10:00:01! bob blinds $100
! 03/14/98 10:00:03! alice raises $200 to $300 total
! 03/14/98 10:00:04! bob raises $600 to $900 total
! 03/14/98 10:00:05! alice calls $600
! 03/14/98 10:00:06! Flopped cards: As Kd 7c
! 03/14/98 10:00:07! bob bets $1,000
! 03/14/98 10:00:08! alice calls $1,000
! 03/14/98 10:00:09! Flopped card: 2h
! 03/14/98 10:00:10! bob checks
! 03/14/98 10:00:11! alice checks
! 03/14/98 10:00:12! Flopped card: 9s
! 03/14/98 10:00:13! bob checks
! 03/14/98 10:00:14! alice checks
! 03/14/98 10:00:15! bob has: Ah Ad
! 03/14/98 10:00:15! alice has: Kh Ks
! 03/14/98 10:00:16! bob wins $3,800
! Hand over, current board is:  As Kd 7c 2h 9s
";

use hhp::cards::Card;
use hhp::parser::Batch;
use hhp::parser::Detector;
use hhp::parser::Parser;
use hhp::parser::Patterns;
use hhp::parser::Tokenizer;
use hhp::records::RawHand;
use hhp::Arbitrary;
