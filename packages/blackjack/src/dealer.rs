use crate::hand::calculate_hand_value;
use crate::rules::DEALER_STANDS_ON;
use card_shoe::Card;

/// Dealer draws below 17 and stands on all 17s, soft ones included.
pub fn dealer_should_hit(cards: &[Card]) -> bool {
    calculate_hand_value(cards) < DEALER_STANDS_ON
}
