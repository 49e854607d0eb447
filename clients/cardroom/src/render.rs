use baccarat::{BetTarget, Winner};
use blackjack::{Hand, RoundEnd};
use card_shoe::{BetResult, Card};
use serde::Serialize;

/// Cards with suits, as blackjack shows them.
pub fn cards(cards: &[Card]) -> String {
    cards.iter().map(Card::to_display).collect::<Vec<_>>().join(" ")
}

/// Baccarat only shows ranks; suits never matter to the count.
pub fn ranks(cards: &[Card]) -> String {
    cards.iter().map(|c| c.rank.label()).collect::<Vec<_>>().join(" ")
}

/// Cents as `$x.yy`.
pub fn money(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

/// A net change with its sign, as `+$1.50` or `-$10.00`.
pub fn signed_money(net: i64) -> String {
    let sign = if net < 0 { '-' } else { '+' };
    format!("{sign}{}", money(net.unsigned_abs()))
}

pub fn json_line<T: Serialize>(value: &T) -> Option<String> {
    match serde_json::to_string(value) {
        Ok(line) => Some(line),
        Err(e) => {
            log::error!("Failed to serialize report: {e}");
            None
        }
    }
}

pub fn baccarat_round(report: &baccarat::RoundReport) -> String {
    let outcome = &report.outcome;
    let mut text = format!(
        "Player: {}  -> total {}\nBanker: {}  -> total {}\n",
        ranks(&outcome.player_hand),
        outcome.player_total,
        ranks(&outcome.banker_hand),
        outcome.banker_total,
    );
    text.push_str(match outcome.winner {
        Winner::Tie => "Result: TIE\n",
        Winner::Player => "Result: PLAYER wins\n",
        Winner::Banker => "Result: BANKER wins\n",
    });

    let amount = money(report.settlement.net.unsigned_abs());
    let line = match (report.settlement.result, report.bet.target) {
        (BetResult::Win, BetTarget::Tie) => format!("You won {amount} on a tie bet!"),
        (BetResult::Win, BetTarget::Banker) => format!("You won {amount} (after 5% commission)."),
        (BetResult::Win, BetTarget::Player) => format!("You won {amount}!"),
        (BetResult::Push, _) => "Push on player/banker bet (bet returned).".to_string(),
        (BetResult::Loss, _) => format!("You lost {amount}."),
    };
    text.push_str(&line);
    text
}

/// What the player sees while deciding: one dealer card face down.
pub fn blackjack_table(hand: &Hand, dealer_upcard: Card) -> String {
    format!(
        "Dealer: {} ??\nYou:    {}  ({})",
        dealer_upcard.to_display(),
        cards(&hand.cards),
        hand.value()
    )
}

pub fn blackjack_round(report: &blackjack::RoundReport) -> String {
    let outcome = &report.outcome;
    let mut text = String::new();
    if outcome.player_hand.doubled {
        text.push_str(&format!("You doubled down to {}.\n", money(outcome.stake)));
    }
    if outcome.ended_by == RoundEnd::PlayerBust {
        text.push_str("You busted!\n");
    }
    text.push_str(&format!(
        "Final hands:\nDealer: {} ({})\nYou:    {} ({})\n",
        cards(&outcome.dealer_hand),
        outcome.dealer_value.total,
        cards(&outcome.player_hand.cards),
        outcome.player_value.total,
    ));

    let amount = money(outcome.settlement.net.unsigned_abs());
    let line = match outcome.settlement.result {
        BetResult::Win if outcome.player_blackjack() => {
            format!("You got a Blackjack! You win {amount}.")
        }
        BetResult::Win => format!("You win {amount}!"),
        BetResult::Loss => format!("You lose {amount}."),
        BetResult::Push => "Push (tie).".to_string(),
    };
    text.push_str(&line);
    text
}
