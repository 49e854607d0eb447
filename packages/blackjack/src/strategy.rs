use crate::hand::{card_points, evaluate, Hand};
use crate::round::{Action, DecisionProvider};
use card_shoe::Card;

/// Basic strategy rows, indexed by dealer upcard 2..=10 then ace.
/// `D` doubles when allowed and otherwise hits; `d` doubles or stands.
type Row = &'static [u8; 10];

fn hard_row(total: u8) -> Row {
    match total {
        0..=8 => b"HHHHHHHHHH",
        9 => b"HDDDDHHHHH",
        10 => b"DDDDDDDDHH",
        11 => b"DDDDDDDDDD",
        12 => b"HHSSSHHHHH",
        13..=16 => b"SSSSSHHHHH",
        _ => b"SSSSSSSSSS",
    }
}

fn soft_row(total: u8) -> Row {
    match total {
        0..=12 => b"HHHHHHHHHH",
        13 | 14 => b"HHHDDHHHHH",
        15 | 16 => b"HHDDDHHHHH",
        17 => b"HDDDDHHHHH",
        18 => b"dddddSSHHH",
        19 => b"SSSSdSSSSS",
        _ => b"SSSSSSSSSS",
    }
}

/// Hit, stand or double by basic strategy for a multi-deck shoe, dealer
/// standing on soft 17.
pub fn optimal_move(player_cards: &[Card], dealer_up_card: &Card, can_double: bool) -> Action {
    let value = evaluate(player_cards);
    let row = if value.soft {
        soft_row(value.total)
    } else {
        hard_row(value.total)
    };
    // card_points puts the ace at 11, the last column
    let column = usize::from(card_points(dealer_up_card.rank).saturating_sub(2)).min(9);

    match row[column] {
        b'D' | b'd' if can_double => Action::Double,
        b'd' | b'S' => Action::Stand,
        _ => Action::Hit,
    }
}

/// Plays every decision by basic strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicStrategy;

impl DecisionProvider for BasicStrategy {
    fn choose_action(&mut self, hand: &Hand, dealer_upcard: Card, can_double: bool) -> Action {
        optimal_move(&hand.cards, &dealer_upcard, can_double)
    }
}
