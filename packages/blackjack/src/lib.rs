mod dealer;
mod hand;
mod round;
mod rules;
mod settlement;
mod strategy;
mod table;

pub use dealer::dealer_should_hit;
pub use hand::{
    calculate_hand_value, card_points, evaluate, is_blackjack, is_busted, is_soft_hand, Hand,
    HandValue,
};
pub use round::{
    play_round, Action, Bet, DecisionProvider, Round, RoundEnd, RoundOutcome, RoundPhase,
};
pub use rules::{GameRules, BLACKJACK_PAYOUT, DEALER_STANDS_ON};
pub use settlement::settle;
pub use strategy::{optimal_move, BasicStrategy};
pub use table::{BettingOptions, Bettor, RoundReport, Table};
