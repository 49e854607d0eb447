mod card;
mod error;
mod payout;
mod shoe;

pub use card::{standard_deck, Card, Rank, Suit};
pub use error::ShoeError;
pub use payout::{scale, BetResult, PayoutRatio, Settlement};
pub use shoe::Shoe;
