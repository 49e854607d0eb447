//! Parsing of what the player types at the table. Money is held in cents.

use baccarat::BetTarget;
use blackjack::Action;
use thiserror::Error;

/// Why a typed wager was refused. Every variant is recoverable: the seat
/// prints the message and asks again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BetError {
    #[error("Enter an amount like 50 or 12.50.")]
    NotANumber,

    #[error("Bet must be positive.")]
    NotPositive,

    #[error(
        "You don't have enough bankroll for that bet (bankroll ${}.{:02}).",
        .bankroll / 100,
        .bankroll % 100
    )]
    ExceedsBankroll { bankroll: u64 },

    #[error("Invalid choice. Please enter p, b, or t.")]
    UnknownTarget,
}

pub fn is_quit(input: &str) -> bool {
    matches!(input.trim().to_ascii_lowercase().as_str(), "q" | "quit" | "exit")
}

pub fn parse_target(input: &str) -> Result<BetTarget, BetError> {
    match input.trim().to_ascii_lowercase().as_str() {
        "p" | "player" => Ok(BetTarget::Player),
        "b" | "banker" => Ok(BetTarget::Banker),
        "t" | "tie" => Ok(BetTarget::Tie),
        _ => Err(BetError::UnknownTarget),
    }
}

/// Parses `12`, `12.5`, `$12.50` or `-3` into signed cents. At most two
/// decimals are accepted.
pub fn parse_cents(input: &str) -> Result<i64, BetError> {
    let text = input.trim().trim_start_matches('$');
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty())
        || fraction.len() > 2
        || !all_digits(whole)
        || !all_digits(fraction)
    {
        return Err(BetError::NotANumber);
    }

    let dollars: i64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| BetError::NotANumber)?
    };
    let cents: i64 = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<i64>().map_err(|_| BetError::NotANumber)? * 10,
        _ => fraction.parse().map_err(|_| BetError::NotANumber)?,
    };
    let total = dollars
        .checked_mul(100)
        .and_then(|c| c.checked_add(cents))
        .ok_or(BetError::NotANumber)?;
    Ok(if negative { -total } else { total })
}

/// A positive amount of money, for command-line flags.
pub fn parse_money(input: &str) -> Result<u64, BetError> {
    match parse_cents(input)? {
        cents if cents <= 0 => Err(BetError::NotPositive),
        cents => Ok(cents as u64),
    }
}

/// Parses a stake in dollars and checks it against the bankroll (cents).
pub fn parse_amount(input: &str, bankroll: u64) -> Result<u64, BetError> {
    let amount = parse_money(input)?;
    if amount > bankroll {
        return Err(BetError::ExceedsBankroll { bankroll });
    }
    Ok(amount)
}

/// `None` for anything unrecognised, including a double that isn't on offer.
pub fn parse_action(input: &str, can_double: bool) -> Option<Action> {
    match input.trim().to_ascii_lowercase().as_str() {
        "h" | "hit" => Some(Action::Hit),
        "s" | "stand" => Some(Action::Stand),
        "d" | "double" | "double down" if can_double => Some(Action::Double),
        _ => None,
    }
}

/// Answer to "play another round?". An empty line means yes; `None` asks again.
pub fn parse_continue(input: &str) -> Option<bool> {
    let answer = input.trim().to_ascii_lowercase();
    match answer.as_str() {
        "" | "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ if is_quit(&answer) => Some(false),
        _ => None,
    }
}
