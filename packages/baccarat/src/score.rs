use card_shoe::{Card, Rank};

/// Point value of a rank: ace is 1, tens and faces are 0.
pub fn card_value(rank: Rank) -> u8 {
    match rank {
        Rank::Ace => 1,
        Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 0,
        other => other.pip(),
    }
}

/// Units digit of the summed card values.
pub fn hand_total(cards: &[Card]) -> u8 {
    let sum: u32 = cards.iter().map(|c| card_value(c.rank) as u32).sum();
    (sum % 10) as u8
}

/// 8 or 9 on the first two cards.
pub fn is_natural(total: u8) -> bool {
    matches!(total, 8 | 9)
}
