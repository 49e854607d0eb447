use crate::round::{play_round, Bet, DecisionProvider, RoundOutcome};
use crate::rules::GameRules;
use card_shoe::{Shoe, ShoeError};
use serde::{Deserialize, Serialize};

/// What the player is told before choosing a wager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BettingOptions {
    pub cards_remaining: usize,
    pub deck_count: u8,
    /// The shoe was just replaced with a fresh one.
    pub reshuffled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    pub bet: Bet,
    pub outcome: RoundOutcome,
    /// The shoe was replaced before this round was dealt.
    pub reshuffled: bool,
}

/// The seat at the table: places bets, makes decisions, hears results.
pub trait Bettor: DecisionProvider {
    /// `None` means the player walked away.
    fn place_bet(&mut self, options: &BettingOptions) -> Option<Bet>;

    fn report_round(&mut self, report: &RoundReport);
}

/// A blackjack table: owns the shoe for its whole lifetime.
#[derive(Debug, Clone)]
pub struct Table {
    rules: GameRules,
    shoe: Shoe,
}

impl Table {
    pub fn new(rules: GameRules) -> Self {
        Self {
            shoe: Shoe::new(rules.num_decks),
            rules,
        }
    }

    pub fn seeded(rules: GameRules, seed: u64) -> Self {
        Self {
            shoe: Shoe::seeded(rules.num_decks, seed),
            rules,
        }
    }

    pub fn with_shoe(rules: GameRules, shoe: Shoe) -> Self {
        Self { rules, shoe }
    }

    pub fn rules(&self) -> &GameRules {
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

    /// Reshuffles if the shoe is below threshold, then plays one round.
    pub fn play<D: DecisionProvider + ?Sized>(
        &mut self,
        bet: Bet,
        decisions: &mut D,
    ) -> Result<RoundReport, ShoeError> {
        let reshuffled = self.reshuffle_if_needed();
        self.deal(bet, decisions, reshuffled)
    }

    /// Asks `bettor` for a wager and plays it. `Ok(None)` means no round was played.
    pub fn play_next<B: Bettor + ?Sized>(
        &mut self,
        bettor: &mut B,
    ) -> Result<Option<RoundReport>, ShoeError> {
        let reshuffled = self.reshuffle_if_needed();
        let Some(bet) = bettor.place_bet(&self.betting_options(reshuffled)) else {
            log::debug!("player left the table");
            return Ok(None);
        };
        let report = self.deal(bet, bettor, reshuffled)?;
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

    fn deal<D: DecisionProvider + ?Sized>(
        &mut self,
        bet: Bet,
        decisions: &mut D,
        reshuffled: bool,
    ) -> Result<RoundReport, ShoeError> {
        let outcome = play_round(&mut self.shoe, bet, decisions)?;
        log::debug!(
            "stake {} ended by {:?}: {:?}",
            outcome.stake,
            outcome.ended_by,
            outcome.settlement
        );
        Ok(RoundReport {
            bet,
            outcome,
            reshuffled,
        })
    }
}
