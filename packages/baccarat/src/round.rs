use crate::draw::{banker_draws, player_draws};
use crate::score::{card_value, hand_total, is_natural};
use crate::settlement::Winner;
use card_shoe::{Card, Shoe, ShoeError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    Dealing,
    ThirdCard,
    Settled,
}

/// Everything that happened in one coup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub player_hand: Vec<Card>,
    pub banker_hand: Vec<Card>,
    pub player_total: u8,
    pub banker_total: u8,
    pub winner: Winner,
    pub player_third: Option<Card>,
    pub banker_third: Option<Card>,
    /// Either side held 8 or 9 on two cards.
    pub natural: bool,
}

impl RoundOutcome {
    pub fn cards_dealt(&self) -> usize {
        self.player_hand.len() + self.banker_hand.len()
    }
}

/// Deals one coup from `shoe`: Player, Banker, Player, Banker, then the
/// third-card rules.
pub fn play_round(shoe: &mut Shoe) -> Result<RoundOutcome, ShoeError> {
    log::debug!("phase {:?}", RoundPhase::Dealing);
    let mut player_hand = Vec::with_capacity(3);
    let mut banker_hand = Vec::with_capacity(3);
    for _ in 0..2 {
        player_hand.push(shoe.draw()?);
        banker_hand.push(shoe.draw()?);
    }

    let player_initial = hand_total(&player_hand);
    let banker_initial = hand_total(&banker_hand);
    let natural = is_natural(player_initial) || is_natural(banker_initial);

    let mut player_third = None;
    let mut banker_third = None;
    if natural {
        log::debug!("natural: player {player_initial}, banker {banker_initial}");
    } else {
        log::debug!("phase {:?}", RoundPhase::ThirdCard);
        if player_draws(player_initial) {
            let card = shoe.draw()?;
            player_hand.push(card);
            player_third = Some(card);
        }
        if banker_draws(banker_initial, player_third.map(|c| card_value(c.rank))) {
            let card = shoe.draw()?;
            banker_hand.push(card);
            banker_third = Some(card);
        }
    }

    let player_total = hand_total(&player_hand);
    let banker_total = hand_total(&banker_hand);
    let winner = match player_total.cmp(&banker_total) {
        std::cmp::Ordering::Greater => Winner::Player,
        std::cmp::Ordering::Less => Winner::Banker,
        std::cmp::Ordering::Equal => Winner::Tie,
    };
    log::debug!(
        "phase {:?}: player {player_total}, banker {banker_total}, {winner:?}",
        RoundPhase::Settled
    );

    Ok(RoundOutcome {
        player_hand,
        banker_hand,
        player_total,
        banker_total,
        winner,
        player_third,
        banker_third,
        natural,
    })
}
