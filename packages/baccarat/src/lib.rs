//! Punto Banco rule engine: modulo-10 scoring, the third-card tableau,
//! commission settlement and a shoe-owning table.

mod draw;
mod round;
mod rules;
mod score;
mod settlement;
mod table;

pub use draw::{banker_draws, player_draws};
pub use round::{play_round, RoundOutcome, RoundPhase};
pub use rules::{TableRules, MAX_CARDS_PER_ROUND};
pub use score::{card_value, hand_total, is_natural};
pub use settlement::{settle, Bet, BetTarget, Winner, BANKER_PAYOUT, PLAYER_PAYOUT, TIE_PAYOUT};
pub use table::{BettingOptions, Bettor, RoundReport, Table};
