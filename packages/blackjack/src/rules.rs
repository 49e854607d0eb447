use card_shoe::PayoutRatio;
use serde::{Deserialize, Serialize};

/// Blackjack pays 3:2.
pub const BLACKJACK_PAYOUT: PayoutRatio = PayoutRatio::THREE_TO_TWO;
/// Dealer stands on every 17, soft or hard.
pub const DEALER_STANDS_ON: u8 = 17;

/// Shoe configuration for a blackjack table. Payouts and dealer play are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRules {
    /// Number of decks in the shoe
    pub num_decks: u8,

    /// Reshuffle before a round when fewer than this many cards remain
    pub reshuffle_threshold: usize,
}

impl Default for GameRules {
    fn default() -> Self {
        // Six-deck shoe
        Self {
            num_decks: 6,
            reshuffle_threshold: 15,
        }
    }
}

impl GameRules {
    /// Atlantic City eight-deck shoe
    pub fn atlantic_city() -> Self {
        Self {
            num_decks: 8,
            reshuffle_threshold: 15,
        }
    }

    pub fn single_deck() -> Self {
        Self {
            num_decks: 1,
            reshuffle_threshold: 15,
        }
    }

    pub fn new(num_decks: u8, reshuffle_threshold: usize) -> Result<Self, &'static str> {
        if num_decks == 0 {
            return Err("A shoe needs at least one deck");
        }
        // Four cards for the initial deal plus at least one hit
        if reshuffle_threshold < 5 {
            return Err("Reshuffle threshold must cover the initial deal and a hit");
        }
        if reshuffle_threshold > num_decks as usize * 52 {
            return Err("Reshuffle threshold exceeds the size of the shoe");
        }
        Ok(Self {
            num_decks,
            reshuffle_threshold,
        })
    }
}
