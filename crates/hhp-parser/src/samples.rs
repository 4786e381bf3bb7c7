//! Hand histories used across the test modules.

/// Three-handed cash game: one raise, both blinds fold.
pub const STARS_FOLDOUT: &str = "\
PokerStars Hand #245001:  Hold'em No Limit ($0.25/$0.50 USD) - 2024/03/14 10:00:00 ET
Table 'Alcyone' 6-max Seat #1 is the button
Seat 1: alice ($50.00 in chips)
Seat 2: bob ($50.00 in chips)
Seat 3: carol ($50.00 in chips)
bob: posts small blind $0.25
carol: posts big blind $0.50
*** HOLE CARDS ***
Dealt to alice [Ah Kh]
alice: raises $1 to $1.50
bob: folds
carol: folds
Uncalled bet ($1) returned to alice
alice collected $1.25 from pot
alice: doesn't show hand
*** SUMMARY ***
Total pot $1.25 | Rake $0
Seat 1: alice (button) collected ($1.25)
Seat 2: bob (small blind) folded before Flop
Seat 3: carol (big blind) folded before Flop
";

/// Three-handed cash game to a raked showdown.
pub const STARS_CASH: &str = "\
PokerStars Hand #245002:  Hold'em No Limit ($0.25/$0.50 USD) - 2024/03/14 10:05:00 ET
Table 'Alcyone' 6-max Seat #2 is the button
Seat 1: alice ($50.00 in chips)
Seat 2: bob ($42.10 in chips)
Seat 3: carol ($50.00 in chips)
carol: posts small blind $0.25
alice: posts big blind $0.50
*** HOLE CARDS ***
Dealt to alice [Qs Qc]
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
Seat 1: alice (big blind) showed [Qs Qc] and won ($3.35) with a pair of Queens
Seat 2: bob (button) folded on the Flop
Seat 3: carol (small blind) mucked
";

/// Four-handed tournament: two short stacks all-in at different depths,
/// one caller folds to a flop bet.
pub const STARS_SIDEPOT: &str = "\
PokerStars Hand #245003:  Tournament #987, $10+$1 USD Hold'em No Limit - Level II (15/30) - 2024/03/14 11:00:00 ET
Table '987 4' 9-max Seat #1 is the button
Seat 1: alice (50 in chips)
Seat 2: bob (100 in chips)
Seat 3: carol (1500 in chips)
Seat 4: dave (1500 in chips)
bob: posts small blind 15
carol: posts big blind 30
*** HOLE CARDS ***
dave: calls 30
alice: raises 20 to 50 and is all-in
bob: raises 50 to 100 and is all-in
carol: calls 70
dave: calls 70
*** FLOP *** [Th 8c 3s]
carol: bets 200
dave: folds
Uncalled bet (200) returned to carol
*** TURN *** [Th 8c 3s] [6d]
*** RIVER *** [Th 8c 3s 6d] [Qh]
*** SHOW DOWN ***
carol: shows [Ac Ad] (a pair of Aces)
bob: shows [Kc Kd] (a pair of Kings)
alice: shows [9h 9d] (a pair of Nines)
carol collected 150 from side pot
carol collected 200 from main pot
*** SUMMARY ***
Total pot 350 Main pot 200. Side pot 150. | Rake 0
Board [Th 8c 3s 6d Qh]
Seat 1: alice (button) showed [9h 9d] and lost with a pair of Nines
Seat 2: bob (small blind) showed [Kc Kd] and lost with a pair of Kings
Seat 3: carol (big blind) showed [Ac Ad] and won (350) with a pair of Aces
Seat 4: dave folded on the Flop
";

/// Heads-up email log: raise, re-raise, call, and a showdown on the river.
pub const WRGPT_HEADSUP: &str = "\
From: dealer@wrgpt.org
Subject: [b12][hand:45]

! Table b12, Hand 45, Day 3
+-+-----------+--------+--------+----------+
 | Name       |Bankroll| Action | Status   |
+-+-----------+--------+--------+----------+
 1|D alice    |  10,000|        |          |
 2|> bob      |  10,000|        |          |
+-+-----------+--------+--------+----------+
! History of this hand:
! 03/14/98 10:00:00! alice blinds $50
! 03/14/98 10:00:01! bob blinds $100
! 03/14/98 10:00:02! Dealing...
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

/// Three-handed email log with table chatter and one line nobody can read.
pub const WRGPT_CHATTY: &str = "\
Subject: [b12][hand:46]
! Table b12, Hand 46, Day 3
+-+-----------+--------+--------+----------+
 1|  alice    |   9,900|        |          |
 2|D bob      |  10,100|        |          |
 3|V carol    |  10,000|        |          |
+-+-----------+--------+--------+----------+
! History of this hand:
! 03/14/98 10:05:00! carol blinds $50
! 03/14/98 10:05:01! alice blinds $100
! 03/14/98 10:05:02! bob calls $100
! 03/14/98 10:05:03! alice: \"hurry up\"
! 03/14/98 10:05:04! carol is on vacation and folds
! 03/14/98 10:05:05! alice stares at the ceiling
! 03/14/98 10:05:06! alice checks
! 03/14/98 10:05:07! Flopped cards: 2c 3d 4h
! 03/14/98 10:05:08! alice bets $200
! 03/14/98 10:05:09! bob folds
! 03/14/98 10:05:10! Uncalled bet ($200) returned to alice
! 03/14/98 10:05:10! alice wins $250
! Hand over, current board is:  2c 3d 4h
";
