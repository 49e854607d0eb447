//! Flat-betting seat that plays without prompts.

use crate::render;
use baccarat::BetTarget;
use blackjack::{Action, BasicStrategy, DecisionProvider, Hand};
use card_shoe::{BetResult, Card, Settlement};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub played: usize,
    pub wins: usize,
    pub losses: usize,
    pub pushes: usize,
    pub net: i64,
}

impl Tally {
    fn record(&mut self, settlement: Settlement) {
        self.played += 1;
        self.net += settlement.net;
        match settlement.result {
            BetResult::Win => self.wins += 1,
            BetResult::Loss => self.losses += 1,
            BetResult::Push => self.pushes += 1,
        }
    }
}

pub struct AutoSeat<W> {
    out: W,
    bankroll: u64,
    stake: u64,
    target: BetTarget,
    rounds_left: usize,
    json: bool,
    tally: Tally,
}

impl<W: Write> AutoSeat<W> {
    pub fn new(out: W, bankroll: u64, stake: u64, rounds: usize, json: bool) -> Self {
        Self {
            out,
            bankroll,
            stake,
            target: BetTarget::Banker,
            rounds_left: rounds,
            json,
            tally: Tally::default(),
        }
    }

    /// Side backed at baccarat. Ignored at blackjack.
    pub fn backing(mut self, target: BetTarget) -> Self {
        self.target = target;
        self
    }

    pub fn bankroll(&self) -> u64 {
        self.bankroll
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    pub fn summary(&self) -> String {
        let t = self.tally;
        format!(
            "Played {} rounds: {} won, {} lost, {} pushed. Net {}. Final balance: {}",
            t.played,
            t.wins,
            t.losses,
            t.pushes,
            render::signed_money(t.net),
            render::money(self.bankroll)
        )
    }

    fn next_stake(&mut self) -> Option<u64> {
        if self.rounds_left == 0 {
            return None;
        }
        if self.stake > self.bankroll {
            log::info!(
                "Bankroll {} can't cover a {} bet, stopping",
                render::money(self.bankroll),
                render::money(self.stake)
            );
            return None;
        }
        self.rounds_left -= 1;
        Some(self.stake)
    }

    fn record<T: Serialize>(&mut self, settlement: Settlement, report: &T) {
        self.bankroll = settlement.apply_to(self.bankroll);
        self.tally.record(settlement);
        log::debug!("round {}: {:?}, bankroll {}", self.tally.played, settlement, self.bankroll);
        if !self.json {
            return;
        }
        if let Some(line) = render::json_line(report) {
            if let Err(e) = writeln!(self.out, "{line}") {
                log::warn!("Failed to write report: {e}");
            }
        }
    }
}

impl<W: Write> baccarat::Bettor for AutoSeat<W> {
    fn place_bet(&mut self, _options: &baccarat::BettingOptions) -> Option<baccarat::Bet> {
        let amount = self.next_stake()?;
        Some(baccarat::Bet::new(self.target, amount))
    }

    fn report_round(&mut self, report: &baccarat::RoundReport) {
        self.record(report.settlement, report);
    }
}

impl<W: Write> DecisionProvider for AutoSeat<W> {
    fn choose_action(&mut self, hand: &Hand, dealer_upcard: Card, can_double: bool) -> Action {
        BasicStrategy.choose_action(hand, dealer_upcard, can_double)
    }
}

impl<W: Write> blackjack::Bettor for AutoSeat<W> {
    fn place_bet(&mut self, options: &blackjack::BettingOptions) -> Option<blackjack::Bet> {
        if options.reshuffled {
            log::info!("Shoe reshuffled ({} decks)", options.deck_count);
        }
        let amount = self.next_stake()?;
        Some(blackjack::Bet::new(amount, self.bankroll))
    }

    fn report_round(&mut self, report: &blackjack::RoundReport) {
        self.record(report.outcome.settlement, report);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blackjack_autoplay_session() {
        let mut table = blackjack::Table::seeded(blackjack::GameRules::default(), 2024);
        let mut seat = AutoSeat::new(Vec::new(), 1_000_000, 10, 500, false);
        while table.play_next(&mut seat).unwrap().is_some() {}

        let tally = seat.tally();
        assert_eq!(tally.played, 500);
        assert_eq!(tally.wins + tally.losses + tally.pushes, 500);
        assert_eq!(seat.bankroll() as i64, 1_000_000 + tally.net);
        assert!(seat.out.is_empty());
    }

    #[test]
    fn test_stops_when_bankroll_cannot_cover_stake() {
        let mut table = baccarat::Table::seeded(baccarat::TableRules::default(), 5);
        let mut seat = AutoSeat::new(Vec::new(), 500, 1_000, 100, false);
        assert_eq!(table.play_next(&mut seat).unwrap(), None);
        assert_eq!(seat.tally().played, 0);
    }

    #[test]
    fn test_baccarat_json_lines() {
        let mut table = baccarat::Table::seeded(baccarat::TableRules::default(), 8);
        let mut seat = AutoSeat::new(Vec::new(), 100_000, 1_000, 3, true).backing(BetTarget::Tie);
        while table.play_next(&mut seat).unwrap().is_some() {}

        let out = String::from_utf8(seat.out.clone()).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        for line in lines {
            let json: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(json["bet"]["target"], "Tie");
        }
    }

    #[test]
    fn test_summary_format() {
        let mut seat = AutoSeat::new(Vec::new(), 10_000, 1_000, 2, false);
        seat.tally.record(Settlement::win(1_500));
        seat.tally.record(Settlement::loss(1_000));
        seat.tally.record(Settlement::loss(1_000));
        seat.bankroll = 9_500;
        assert_eq!(
            seat.summary(),
            "Played 3 rounds: 1 won, 2 lost, 0 pushed. Net -$5.00. Final balance: $95.00"
        );
    }
}
