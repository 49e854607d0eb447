use crate::round::{play_round, RoundOutcome};
use crate::rules::TableRules;
use crate::settlement::{settle, Bet};
use card_shoe::{Settlement, Shoe, ShoeError};
use serde::{Deserialize, Serialize};

/// What the bettor is told before choosing a wager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BettingOptions {
    pub cards_remaining: usize,
    pub deck_count: u8,
    /// The shoe was just replaced with a fresh one.
    pub reshuffled: bool,
}

/// Result of one played round, as handed back to the bettor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    pub bet: Bet,
    pub outcome: RoundOutcome,
    pub settlement: Settlement,
    /// The shoe was replaced before this round was dealt.
    pub reshuffled: bool,
}

/// The outside party placing bets and receiving results.
pub trait Bettor {
    /// `None` means the bettor walked away.
    fn place_bet(&mut self, options: &BettingOptions) -> Option<Bet>;

    fn report_round(&mut self, report: &RoundReport);
}

/// A baccarat table: owns the shoe for its whole lifetime.
#[derive(Debug, Clone)]
pub struct Table {
    rules: TableRules,
    shoe: Shoe,
}

impl Table {
    pub fn new(rules: TableRules) -> Self {
        Self {
            shoe: Shoe::new(rules.num_decks),
            rules,
        }
    }

    pub fn seeded(rules: TableRules, seed: u64) -> Self {
        Self {
            shoe: Shoe::seeded(rules.num_decks, seed),
            rules,
        }
    }

    pub fn with_shoe(rules: TableRules, shoe: Shoe) -> Self {
        Self { rules, shoe }
    }

    pub fn rules(&self) -> &TableRules {
        &self.rules
    }

    pub fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    pub fn betting_options(&self, reshuffled: bool) -> BettingOptions {
        BettingOptions {
            cards_remaining: self.shoe.remaining(),
            deck_count: self.shoe.deck_count(),
            reshuffled,
        }
    }

    /// Reshuffles if the shoe is below threshold, then deals and settles one coup.
    pub fn play(&mut self, bet: Bet) -> Result<RoundReport, ShoeError> {
        let reshuffled = self.reshuffle_if_needed();
        self.deal(bet, reshuffled)
    }

    /// Asks `bettor` for a wager and plays it. `Ok(None)` means no round was played.
    pub fn play_next<B: Bettor + ?Sized>(
        &mut self,
        bettor: &mut B,
    ) -> Result<Option<RoundReport>, ShoeError> {
        let reshuffled = self.reshuffle_if_needed();
        let Some(bet) = bettor.place_bet(&self.betting_options(reshuffled)) else {
            log::debug!("bettor left the table");
            return Ok(None);
        };
        let report = self.deal(bet, reshuffled)?;
        bettor.report_round(&report);
        Ok(Some(report))
    }

    fn reshuffle_if_needed(&mut self) -> bool {
        let needed = self.shoe.needs_reshuffle(self.rules.reshuffle_threshold);
        if needed {
            self.shoe.reshuffle();
        }
        needed
    }

    fn deal(&mut self, bet: Bet, reshuffled: bool) -> Result<RoundReport, ShoeError> {
        let outcome = play_round(&mut self.shoe)?;
        let settlement = settle(&bet, outcome.winner);
        log::debug!("{} on {:?}: {:?}", bet.amount, bet.target, settlement);
        Ok(RoundReport {
            bet,
            outcome,
            settlement,
            reshuffled,
        })
    }
}
