use serde::{Deserialize, Serialize};

/// A coup never uses more than six cards.
pub const MAX_CARDS_PER_ROUND: usize = 6;

/// Shoe configuration for a baccarat table. Payouts are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRules {
    /// Number of decks in the shoe
    pub num_decks: u8,
    /// Reshuffle before a round when fewer than this many cards remain
    pub reshuffle_threshold: usize,
}

impl Default for TableRules {
    fn default() -> Self {
        // Standard eight-deck Punto Banco shoe
        Self {
            num_decks: 8,
            reshuffle_threshold: MAX_CARDS_PER_ROUND,
        }
    }
}

impl TableRules {
    pub fn new(num_decks: u8, reshuffle_threshold: usize) -> Result<Self, &'static str> {
        if num_decks == 0 {
            return Err("A shoe needs at least one deck");
        }
        if reshuffle_threshold < MAX_CARDS_PER_ROUND {
            return Err("Reshuffle threshold must cover a full six-card coup");
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
