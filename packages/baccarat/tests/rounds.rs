use baccarat::{
    play_round, Bet, BetTarget, BettingOptions, Bettor, RoundReport, Table, TableRules, Winner,
};
use card_shoe::{BetResult, Card, Rank, Shoe, ShoeError, Suit};

fn cards(ranks: &[Rank]) -> Vec<Card> {
    ranks.iter().map(|&r| Card::new(r, Suit::Hearts)).collect()
}

fn stacked(ranks: &[Rank]) -> Shoe {
    Shoe::stacked(8, cards(ranks))
}

#[test]
fn test_player_natural_ends_round() {
    let mut shoe = stacked(&[Rank::Eight, Rank::Two, Rank::King, Rank::Three, Rank::Nine]);
    let outcome = play_round(&mut shoe).unwrap();
    assert!(outcome.natural);
    assert_eq!(outcome.player_total, 8);
    assert_eq!(outcome.banker_total, 5);
    assert_eq!(outcome.winner, Winner::Player);
    assert_eq!(outcome.cards_dealt(), 4);
    assert_eq!(outcome.player_third, None);
    assert_eq!(outcome.banker_third, None);
    assert_eq!(shoe.remaining(), 1);
}

#[test]
fn test_banker_natural_stops_player_draw() {
    // Player 0 would draw, but banker has 9
    let mut shoe = stacked(&[Rank::King, Rank::Four, Rank::Queen, Rank::Five, Rank::Ace]);
    let outcome = play_round(&mut shoe).unwrap();
    assert!(outcome.natural);
    assert_eq!(outcome.player_total, 0);
    assert_eq!(outcome.banker_total, 9);
    assert_eq!(outcome.winner, Winner::Banker);
    assert_eq!(outcome.cards_dealt(), 4);
}

#[test]
fn test_player_five_draws_once() {
    // Player 9+6 = 5 draws a 2 -> 7; banker K+6 = 6 stands on a player 2
    let mut shoe = stacked(&[Rank::Nine, Rank::King, Rank::Six, Rank::Six, Rank::Two, Rank::Ace]);
    let outcome = play_round(&mut shoe).unwrap();
    assert_eq!(outcome.player_hand, cards(&[Rank::Nine, Rank::Six, Rank::Two]));
    assert_eq!(outcome.player_total, 7);
    assert_eq!(outcome.player_third, Some(Card::new(Rank::Two, Suit::Hearts)));
    assert_eq!(outcome.banker_third, None);
    assert_eq!(outcome.banker_total, 6);
    assert_eq!(outcome.winner, Winner::Player);
    assert_eq!(shoe.remaining(), 1);
}

#[test]
fn test_banker_draws_when_player_stands() {
    // Player 3+4 = 7 stands; banker 2+2 = 4 draws a 5
    let mut shoe = stacked(&[Rank::Three, Rank::Two, Rank::Four, Rank::Two, Rank::Five]);
    let outcome = play_round(&mut shoe).unwrap();
    assert_eq!(outcome.player_third, None);
    assert_eq!(outcome.banker_third, Some(Card::new(Rank::Five, Suit::Hearts)));
    assert_eq!(outcome.banker_total, 9);
    assert_eq!(outcome.winner, Winner::Banker);
}

#[test]
fn test_banker_three_stands_on_player_eight() {
    let mut shoe = stacked(&[Rank::Ace, Rank::King, Rank::Two, Rank::Three, Rank::Eight, Rank::Six]);
    let outcome = play_round(&mut shoe).unwrap();
    assert_eq!(outcome.player_total, 1);
    assert_eq!(outcome.banker_third, None);
    assert_eq!(outcome.banker_total, 3);
    assert_eq!(outcome.winner, Winner::Banker);
    assert_eq!(shoe.remaining(), 1);
}

#[test]
fn test_banker_six_draws_on_player_seven() {
    // Player 2+3 = 5 draws 7 -> 2; banker 3+3 = 6 draws on a 7, gets a 2 -> 8
    let mut shoe = stacked(&[Rank::Two, Rank::Three, Rank::Three, Rank::Three, Rank::Seven, Rank::Two]);
    let outcome = play_round(&mut shoe).unwrap();
    assert_eq!(outcome.cards_dealt(), 6);
    assert_eq!(outcome.player_total, 2);
    assert_eq!(outcome.banker_total, 8);
    assert_eq!(outcome.winner, Winner::Banker);
}

#[test]
fn test_equal_totals_tie() {
    let mut shoe = stacked(&[Rank::King, Rank::Queen, Rank::Seven, Rank::Seven]);
    let outcome = play_round(&mut shoe).unwrap();
    assert_eq!(outcome.winner, Winner::Tie);
    assert_eq!(outcome.player_total, 7);
    assert!(!outcome.natural);
}

#[test]
fn test_short_shoe_fails_fast() {
    let mut shoe = stacked(&[Rank::Two, Rank::Three, Rank::Four]);
    assert_eq!(play_round(&mut shoe), Err(ShoeError::Empty { deck_count: 8 }));
}

#[test]
fn test_table_reshuffles_below_threshold() {
    let shoe = stacked(&[Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six]);
    let mut table = Table::with_shoe(TableRules::default(), shoe);
    let report = table.play(Bet::new(BetTarget::Player, 10)).unwrap();
    assert!(report.reshuffled);
    assert_eq!(table.shoe().remaining(), 416 - report.outcome.cards_dealt());
}

#[test]
fn test_table_keeps_shoe_at_threshold() {
    let shoe = stacked(&[Rank::King, Rank::Queen, Rank::Seven, Rank::Seven, Rank::Ace, Rank::Ace]);
    let mut table = Table::with_shoe(TableRules::default(), shoe);
    let report = table.play(Bet::new(BetTarget::Tie, 10)).unwrap();
    assert!(!report.reshuffled);
    assert_eq!(report.outcome.winner, Winner::Tie);
    assert_eq!(report.settlement.net, 80);
    assert_eq!(table.shoe().remaining(), 2);
}

struct Scripted {
    bets: Vec<Bet>,
    seen: Vec<BettingOptions>,
    reports: Vec<RoundReport>,
    bankroll: u64,
}

impl Scripted {
    fn new(bets: Vec<Bet>, bankroll: u64) -> Self {
        Self {
            bets,
            seen: Vec::new(),
            reports: Vec::new(),
            bankroll,
        }
    }
}

impl Bettor for Scripted {
    fn place_bet(&mut self, options: &BettingOptions) -> Option<Bet> {
        self.seen.push(*options);
        if self.bets.is_empty() {
            None
        } else {
            Some(self.bets.remove(0))
        }
    }

    fn report_round(&mut self, report: &RoundReport) {
        self.bankroll = report.settlement.apply_to(self.bankroll);
        self.reports.push(report.clone());
    }
}

#[test]
fn test_play_next_quit_is_not_an_error() {
    let mut table = Table::seeded(TableRules::default(), 5);
    let mut bettor = Scripted::new(Vec::new(), 1000);
    assert_eq!(table.play_next(&mut bettor).unwrap(), None);
    assert_eq!(table.shoe().remaining(), 416);
    assert!(bettor.reports.is_empty());
}

#[test]
fn test_play_next_reports_to_bettor() {
    // Banker natural 9 over 1, then a 7-7 tie
    let shoe = stacked(&[
        Rank::Ace, Rank::Four, Rank::King, Rank::Five,
        Rank::King, Rank::Queen, Rank::Seven, Rank::Seven,
        Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ace,
    ]);
    let mut table = Table::with_shoe(TableRules::default(), shoe);
    let mut bettor = Scripted::new(
        vec![Bet::new(BetTarget::Banker, 100), Bet::new(BetTarget::Player, 100)],
        1000,
    );

    let first = table.play_next(&mut bettor).unwrap().unwrap();
    assert!(first.outcome.natural);
    assert_eq!(first.outcome.winner, Winner::Banker);
    assert_eq!(first.settlement.net, 95);

    let second = table.play_next(&mut bettor).unwrap().unwrap();
    assert_eq!(second.outcome.winner, Winner::Tie);
    assert_eq!(second.settlement.result, BetResult::Push);

    assert_eq!(table.play_next(&mut bettor).unwrap(), None);
    assert_eq!(bettor.reports.len(), 2);
    assert_eq!(bettor.bankroll, 1095);
    assert_eq!(bettor.seen[0].cards_remaining, 12);
    assert_eq!(bettor.seen[1].cards_remaining, 8);
}

#[test]
fn test_long_session_invariants() {
    let mut table = Table::seeded(TableRules::default(), 2024);
    let mut reshuffles = 0;
    for _ in 0..3000 {
        let report = table.play(Bet::new(BetTarget::Banker, 20)).unwrap();
        let outcome = &report.outcome;
        if report.reshuffled {
            reshuffles += 1;
        }
        assert!(outcome.player_total <= 9 && outcome.banker_total <= 9);
        assert!((4..=6).contains(&outcome.cards_dealt()));
        if outcome.natural {
            assert_eq!(outcome.cards_dealt(), 4);
        }
        assert_eq!(outcome.player_third.is_some(), outcome.player_hand.len() == 3);
        assert_eq!(outcome.banker_third.is_some(), outcome.banker_hand.len() == 3);
        let expected = match outcome.player_total.cmp(&outcome.banker_total) {
            std::cmp::Ordering::Greater => Winner::Player,
            std::cmp::Ordering::Less => Winner::Banker,
            std::cmp::Ordering::Equal => Winner::Tie,
        };
        assert_eq!(outcome.winner, expected);
        match outcome.winner {
            Winner::Banker => assert_eq!(report.settlement.net, 19),
            Winner::Player => assert_eq!(report.settlement.net, -20),
            Winner::Tie => assert!(report.settlement.is_push()),
        }
    }
    // 3000 coups average ~4.9 cards, so the 416-card shoe turns over many times
    assert!(reshuffles >= 30, "only {reshuffles} reshuffles");
}

#[test]
fn test_report_serializes() {
    let mut table = Table::seeded(TableRules::default(), 1);
    let report = table.play(Bet::new(BetTarget::Tie, 5)).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["bet"]["target"], "Tie");
    assert_eq!(json["reshuffled"], false);
    assert!(json["outcome"]["player_hand"].is_array());
}
