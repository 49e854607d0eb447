use serde::{Deserialize, Serialize};

/// Result tag of a settled bet. A push is never reported as a zero-amount win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BetResult {
    Win,
    Loss,
    Push,
}

/// Net change to the bettor's balance for one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub net: i64,
    pub result: BetResult,
}

impl Settlement {
    pub fn win(profit: u64) -> Self {
        Self {
            net: to_signed(profit),
            result: BetResult::Win,
        }
    }

    pub fn loss(stake: u64) -> Self {
        Self {
            net: -to_signed(stake),
            result: BetResult::Loss,
        }
    }

    pub fn push() -> Self {
        Self {
            net: 0,
            result: BetResult::Push,
        }
    }

    pub fn is_push(&self) -> bool {
        self.result == BetResult::Push
    }

    /// Applies the net to a balance, saturating at zero.
    pub fn apply_to(&self, balance: u64) -> u64 {
        balance.saturating_add_signed(self.net)
    }
}

fn to_signed(amount: u64) -> i64 {
    i64::try_from(amount).unwrap_or(i64::MAX)
}

/// Payout multiplier as a ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutRatio {
    pub numerator: u16,
    pub denominator: u16,
}

impl PayoutRatio {
    pub const ONE_TO_ONE: Self = Self {
        numerator: 1,
        denominator: 1,
    };
    pub const THREE_TO_TWO: Self = Self {
        numerator: 3,
        denominator: 2,
    };
    pub const EIGHT_TO_ONE: Self = Self {
        numerator: 8,
        denominator: 1,
    };
    /// Even money less a 5% commission.
    pub const NINETEEN_TO_TWENTY: Self = Self {
        numerator: 19,
        denominator: 20,
    };

    pub fn new(numerator: u16, denominator: u16) -> Result<Self, &'static str> {
        if denominator == 0 {
            return Err("Denominator cannot be zero");
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Profit on `stake`, rounded to the nearest unit with ties away from zero.
    pub fn calculate_payout(&self, stake: u64) -> u64 {
        scale(stake, self.numerator as u64, self.denominator as u64)
    }
}

/// `amount * numerator / denominator` rounded half away from zero, in exact
/// integer arithmetic.
pub fn scale(amount: u64, numerator: u64, denominator: u64) -> u64 {
    debug_assert!(denominator > 0);
    let doubled = 2 * amount as u128 * numerator as u128;
    let den = denominator as u128;
    let rounded = (doubled + den) / (2 * den);
    u64::try_from(rounded).unwrap_or(u64::MAX)
}
