use crate::hand::{calculate_hand_value, is_blackjack};
use crate::rules::BLACKJACK_PAYOUT;
use card_shoe::{Card, Settlement};

/// Settle the final hands for `stake` (already doubled if the player doubled).
/// A player bust loses even when the dealer also busts.
pub fn settle(player: &[Card], dealer: &[Card], stake: u64) -> Settlement {
    let player_bj = is_blackjack(player);
    let dealer_bj = is_blackjack(dealer);
    if player_bj && !dealer_bj {
        return Settlement::win(BLACKJACK_PAYOUT.calculate_payout(stake));
    }
    if player_bj && dealer_bj {
        return Settlement::push();
    }

    let player_value = calculate_hand_value(player);
    let dealer_value = calculate_hand_value(dealer);
    if player_value > 21 {
        return Settlement::loss(stake);
    }
    if dealer_value > 21 {
        return Settlement::win(stake);
    }
    match player_value.cmp(&dealer_value) {
        std::cmp::Ordering::Greater => Settlement::win(stake),
        std::cmp::Ordering::Less => Settlement::loss(stake),
        std::cmp::Ordering::Equal => Settlement::push(),
    }
}
