use card_shoe::{Card, Rank};
use serde::{Deserialize, Serialize};

/// Point value of a rank with the ace counted high.
pub fn card_points(rank: Rank) -> u8 {
    match rank {
        Rank::Ace => 11,
        Rank::Jack | Rank::Queen | Rank::King => 10,
        other => other.pip(),
    }
}

/// Best total of a hand and whether an ace is still counted as 11.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandValue {
    pub total: u8,
    pub soft: bool,
}

/// Count every ace as 11, then demote aces to 1 one at a time while the
/// total is over 21.
pub fn evaluate(cards: &[Card]) -> HandValue {
    let mut total: u32 = 0;
    let mut high_aces = 0;

    for card in cards {
        if card.rank == Rank::Ace {
            high_aces += 1;
        }
        total += card_points(card.rank) as u32;
    }

    while total > 21 && high_aces > 0 {
        total -= 10;
        high_aces -= 1;
    }

    HandValue {
        total: total.min(u8::MAX as u32) as u8,
        soft: high_aces > 0,
    }
}

/// Calculate the value of a blackjack hand
pub fn calculate_hand_value(cards: &[Card]) -> u8 {
    evaluate(cards).total
}

/// Check if a hand is soft (has an ace counted as 11)
pub fn is_soft_hand(cards: &[Card]) -> bool {
    evaluate(cards).soft
}

pub fn is_busted(cards: &[Card]) -> bool {
    calculate_hand_value(cards) > 21
}

/// Check if a hand is blackjack (21 with 2 cards)
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && calculate_hand_value(cards) == 21
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    pub cards: Vec<Card>,
    pub doubled: bool,
    pub stood: bool,
}

impl Hand {
    pub fn new() -> Self {
        Self {
            cards: Vec::new(),
            doubled: false,
            stood: false,
        }
    }

    pub fn value(&self) -> u8 {
        calculate_hand_value(&self.cards)
    }

    pub fn evaluate(&self) -> HandValue {
        evaluate(&self.cards)
    }

    pub fn is_soft(&self) -> bool {
        is_soft_hand(&self.cards)
    }

    pub fn is_busted(&self) -> bool {
        is_busted(&self.cards)
    }

    pub fn is_blackjack(&self) -> bool {
        is_blackjack(&self.cards)
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use card_shoe::Suit;

    fn cards(ranks: &[Rank]) -> Vec<Card> {
        ranks.iter().map(|&r| Card::new(r, Suit::Spades)).collect()
    }

    #[test]
    fn test_calculate_hand_value_simple() {
        assert_eq!(calculate_hand_value(&cards(&[Rank::Two, Rank::Three])), 5);
    }

    #[test]
    fn test_calculate_hand_value_with_face_cards() {
        assert_eq!(calculate_hand_value(&cards(&[Rank::King, Rank::Queen])), 20);
    }

    #[test]
    fn test_calculate_hand_value_blackjack() {
        assert_eq!(calculate_hand_value(&cards(&[Rank::Ace, Rank::King])), 21);
    }

    #[test]
    fn test_soft_ace() {
        let value = evaluate(&cards(&[Rank::Ace, Rank::Six]));
        assert_eq!(value, HandValue { total: 17, soft: true });
    }

    #[test]
    fn test_hard_ace() {
        let value = evaluate(&cards(&[Rank::Ace, Rank::Six, Rank::Nine]));
        assert_eq!(value, HandValue { total: 16, soft: false });
    }

    #[test]
    fn test_multiple_aces() {
        // One ace as 11, one as 1
        let value = evaluate(&cards(&[Rank::Ace, Rank::Ace, Rank::Nine]));
        assert_eq!(value, HandValue { total: 21, soft: true });
        let value = evaluate(&cards(&[Rank::Ace, Rank::Ace]));
        assert_eq!(value, HandValue { total: 12, soft: true });
        let value = evaluate(&cards(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ace]));
        assert_eq!(value, HandValue { total: 14, soft: true });
    }

    #[test]
    fn test_all_aces_forced_low() {
        let value = evaluate(&cards(&[Rank::Ace, Rank::Ace, Rank::King, Rank::Nine]));
        assert_eq!(value, HandValue { total: 21, soft: false });
        let value = evaluate(&cards(&[Rank::Ace, Rank::King, Rank::Queen, Rank::Five]));
        assert_eq!(value, HandValue { total: 26, soft: false });
    }

    #[test]
    fn test_bust_without_aces_is_hard() {
        let value = evaluate(&cards(&[Rank::King, Rank::Queen, Rank::Five]));
        assert_eq!(value, HandValue { total: 25, soft: false });
        assert!(is_busted(&cards(&[Rank::King, Rank::Queen, Rank::Five])));
    }

    #[test]
    fn test_downgrade_keeps_total_at_most_21() {
        // Ten plus up to eleven aces never busts
        for aces in 1..=11 {
            let mut hand = cards(&[Rank::Ten]);
            hand.extend(std::iter::repeat(Card::new(Rank::Ace, Suit::Hearts)).take(aces));
            assert!(calculate_hand_value(&hand) <= 21, "{aces} aces");
        }
    }

    #[test]
    fn test_not_busted() {
        assert!(!is_busted(&cards(&[Rank::King, Rank::Queen])));
    }

    #[test]
    fn test_is_blackjack() {
        assert!(is_blackjack(&cards(&[Rank::Ace, Rank::King])));
        assert!(is_blackjack(&cards(&[Rank::Ten, Rank::Ace])));
    }

    #[test]
    fn test_not_blackjack_three_cards() {
        assert!(!is_blackjack(&cards(&[Rank::Seven, Rank::Seven, Rank::Seven])));
        assert!(!is_blackjack(&cards(&[Rank::Seven, Rank::Nine, Rank::Five])));
    }

    #[test]
    fn test_not_blackjack_wrong_value() {
        assert!(!is_blackjack(&cards(&[Rank::King, Rank::Queen])));
    }

    #[test]
    fn test_not_soft_hand_no_ace() {
        assert!(!is_soft_hand(&cards(&[Rank::King, Rank::Queen])));
    }

    #[test]
    fn test_hand_struct_value() {
        let mut hand = Hand::new();
        hand.add_card(Card::new(Rank::King, Suit::Hearts));
        hand.add_card(Card::new(Rank::Seven, Suit::Spades));
        assert_eq!(hand.value(), 17);
        assert!(!hand.is_soft());
        assert_eq!(hand.len(), 2);
    }

    #[test]
    fn test_hand_struct_is_blackjack() {
        let mut hand = Hand::new();
        hand.add_card(Card::new(Rank::Ace, Suit::Hearts));
        hand.add_card(Card::new(Rank::King, Suit::Spades));
        assert!(hand.is_blackjack());
        assert!(hand.is_soft());
    }
}
