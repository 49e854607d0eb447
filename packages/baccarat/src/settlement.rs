use card_shoe::{PayoutRatio, Settlement};
use serde::{Deserialize, Serialize};

/// Tie bets pay 8:1.
pub const TIE_PAYOUT: PayoutRatio = PayoutRatio::EIGHT_TO_ONE;
/// Banker bets pay even money less 5% commission.
pub const BANKER_PAYOUT: PayoutRatio = PayoutRatio::NINETEEN_TO_TWENTY;
pub const PLAYER_PAYOUT: PayoutRatio = PayoutRatio::ONE_TO_ONE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BetTarget {
    Player,
    Banker,
    Tie,
}

impl BetTarget {
    pub const ALL: [BetTarget; 3] = [BetTarget::Player, BetTarget::Banker, BetTarget::Tie];
}

/// Which side won the coup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    Player,
    Banker,
    Tie,
}

/// A validated wager. The amount is assumed positive and affordable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bet {
    pub target: BetTarget,
    pub amount: u64,
}

impl Bet {
    pub fn new(target: BetTarget, amount: u64) -> Self {
        debug_assert!(amount > 0, "bets are validated before reaching the table");
        Self { target, amount }
    }
}

pub fn settle(bet: &Bet, winner: Winner) -> Settlement {
    match (winner, bet.target) {
        (Winner::Tie, BetTarget::Tie) => Settlement::win(TIE_PAYOUT.calculate_payout(bet.amount)),
        (Winner::Tie, _) => Settlement::push(),
        (Winner::Player, BetTarget::Player) => {
            Settlement::win(PLAYER_PAYOUT.calculate_payout(bet.amount))
        }
        (Winner::Banker, BetTarget::Banker) => {
            Settlement::win(BANKER_PAYOUT.calculate_payout(bet.amount))
        }
        (Winner::Player, _) | (Winner::Banker, _) => Settlement::loss(bet.amount),
    }
}
