use crate::dealer::dealer_should_hit;
use crate::hand::{Hand, HandValue};
use crate::settlement::settle;
use card_shoe::{Card, Settlement, Shoe, ShoeError};
use serde::{Deserialize, Serialize};

/// A player decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Hit,
    Stand,
    Double,
}

/// Supplies the player's decisions. Called once per decision point, with the
/// current hand, the dealer's face-up card and whether doubling is allowed.
pub trait DecisionProvider {
    fn choose_action(&mut self, hand: &Hand, dealer_upcard: Card, can_double: bool) -> Action;
}

impl<F> DecisionProvider for F
where
    F: FnMut(&Hand, Card, bool) -> Action,
{
    fn choose_action(&mut self, hand: &Hand, dealer_upcard: Card, can_double: bool) -> Action {
        self(hand, dealer_upcard, can_double)
    }
}

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    Dealing,
    PlayerTurn,
    DealerTurn,
    Settled,
}

/// How the round came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEnd {
    /// Player or dealer held a two-card 21 after the deal.
    Natural,
    PlayerBust,
    Showdown,
}

/// A validated wager plus the funds behind it. The engine trusts
/// `0 < amount <= bankroll`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bet {
    pub amount: u64,
    pub bankroll: u64,
}

impl Bet {
    pub fn new(amount: u64, bankroll: u64) -> Self {
        debug_assert!(amount > 0 && amount <= bankroll);
        Self { amount, bankroll }
    }

    /// Doubling needs the original stake covered twice.
    pub fn can_cover_double(&self) -> bool {
        self.amount
            .checked_mul(2)
            .map_or(false, |doubled| doubled <= self.bankroll)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub player_hand: Hand,
    pub dealer_hand: Vec<Card>,
    pub player_value: HandValue,
    pub dealer_value: HandValue,
    /// Final stake, doubled if the player doubled.
    pub stake: u64,
    pub ended_by: RoundEnd,
    pub settlement: Settlement,
}

impl RoundOutcome {
    pub fn player_blackjack(&self) -> bool {
        self.player_hand.is_blackjack()
    }
}

/// One round of blackjack, advanced phase by phase.
#[derive(Debug, Clone)]
pub struct Round {
    bet: Bet,
    stake: u64,
    player: Hand,
    dealer: Hand,
    phase: RoundPhase,
    ended_by: Option<RoundEnd>,
}

impl Round {
    /// Deals player, player, dealer, dealer. A natural on either side skips
    /// straight to settlement.
    pub fn deal(shoe: &mut Shoe, bet: Bet) -> Result<Self, ShoeError> {
        let mut round = Self {
            bet,
            stake: bet.amount,
            player: Hand::new(),
            dealer: Hand::new(),
            phase: RoundPhase::Dealing,
            ended_by: None,
        };
        round.player.add_card(shoe.draw()?);
        round.player.add_card(shoe.draw()?);
        round.dealer.add_card(shoe.draw()?);
        round.dealer.add_card(shoe.draw()?);

        if round.player.is_blackjack() || round.dealer.is_blackjack() {
            log::debug!(
                "natural: player {}, dealer {}",
                round.player.is_blackjack(),
                round.dealer.is_blackjack()
            );
            round.finish(RoundEnd::Natural);
        } else {
            round.enter(RoundPhase::PlayerTurn);
        }
        Ok(round)
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn player_hand(&self) -> &Hand {
        &self.player
    }

    pub fn dealer_upcard(&self) -> Card {
        self.dealer.cards[0]
    }

    pub fn stake(&self) -> u64 {
        self.stake
    }

    /// Only on the first decision, with two cards and enough funds.
    pub fn can_double(&self) -> bool {
        self.phase == RoundPhase::PlayerTurn
            && self.player.len() == 2
            && !self.player.doubled
            && self.bet.can_cover_double()
    }

    /// Runs the player's decisions until stand, bust or double.
    pub fn play_player_turn<D: DecisionProvider + ?Sized>(
        &mut self,
        shoe: &mut Shoe,
        decisions: &mut D,
    ) -> Result<(), ShoeError> {
        if self.phase != RoundPhase::PlayerTurn {
            return Ok(());
        }

        loop {
            if self.player.is_busted() {
                log::debug!("player busts with {}", self.player.value());
                self.finish(RoundEnd::PlayerBust);
                return Ok(());
            }

            let can_double = self.can_double();
            let action = decisions.choose_action(&self.player, self.dealer_upcard(), can_double);
            log::debug!("player {} -> {:?}", self.player.value(), action);

            match action {
                Action::Stand => {
                    self.player.stood = true;
                    break;
                }
                Action::Double if can_double => {
                    self.stake = self.bet.amount * 2;
                    self.player.doubled = true;
                    self.player.add_card(shoe.draw()?);
                    break;
                }
                Action::Double => {
                    log::warn!("double not allowed here, taking one card at the original stake");
                    self.player.add_card(shoe.draw()?);
                    break;
                }
                Action::Hit => self.player.add_card(shoe.draw()?),
            }
        }

        // A doubled hand can still bust on its one card
        if self.player.is_busted() {
            self.finish(RoundEnd::PlayerBust);
        } else {
            self.enter(RoundPhase::DealerTurn);
        }
        Ok(())
    }

    /// Dealer draws to 17.
    pub fn play_dealer_turn(&mut self, shoe: &mut Shoe) -> Result<(), ShoeError> {
        if self.phase != RoundPhase::DealerTurn {
            return Ok(());
        }
        while dealer_should_hit(&self.dealer.cards) {
            self.dealer.add_card(shoe.draw()?);
        }
        log::debug!("dealer stands with {}", self.dealer.value());
        self.finish(RoundEnd::Showdown);
        Ok(())
    }

    /// Consumes a settled round.
    pub fn into_outcome(self) -> RoundOutcome {
        debug_assert_eq!(self.phase, RoundPhase::Settled, "round settled before reporting");
        let settlement = settle(&self.player.cards, &self.dealer.cards, self.stake);
        RoundOutcome {
            player_value: self.player.evaluate(),
            dealer_value: self.dealer.evaluate(),
            stake: self.stake,
            ended_by: self.ended_by.unwrap_or(RoundEnd::Showdown),
            settlement,
            player_hand: self.player,
            dealer_hand: self.dealer.cards,
        }
    }

    fn enter(&mut self, phase: RoundPhase) {
        log::debug!("phase {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }

    fn finish(&mut self, ended_by: RoundEnd) {
        self.ended_by = Some(ended_by);
        self.enter(RoundPhase::Settled);
    }
}

/// Plays a full round: deal, player turn, dealer turn, settle.
pub fn play_round<D: DecisionProvider + ?Sized>(
    shoe: &mut Shoe,
    bet: Bet,
    decisions: &mut D,
) -> Result<RoundOutcome, ShoeError> {
    let mut round = Round::deal(shoe, bet)?;
    round.play_player_turn(shoe, decisions)?;
    round.play_dealer_turn(shoe)?;
    Ok(round.into_outcome())
}
