//! The interactive seat: reads wagers and decisions from a terminal.

use crate::prompt::{is_quit, parse_action, parse_amount, parse_continue, parse_target};
use crate::render::{self, money};
use blackjack::{Action, DecisionProvider, Hand};
use card_shoe::{Card, Settlement};
use std::fmt::Display;
use std::io::{BufRead, Write};

/// Round reports go to `out`. Prompts and table talk also go to `out`,
/// except in JSON mode where they move to `chatter` so `out` stays one JSON
/// object per line. Amounts are cents.
pub struct TerminalSeat<R, W, E> {
    input: R,
    out: W,
    chatter: E,
    bankroll: u64,
    json: bool,
    rounds: usize,
}

impl<R: BufRead, W: Write, E: Write> TerminalSeat<R, W, E> {
    pub fn new(input: R, out: W, chatter: E, bankroll: u64, json: bool) -> Self {
        Self {
            input,
            out,
            chatter,
            bankroll,
            json,
            rounds: 0,
        }
    }

    pub fn bankroll(&self) -> u64 {
        self.bankroll
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn greet(&mut self, title: &str) {
        self.say(format!("Welcome to {title}\n"));
    }

    pub fn farewell(&mut self) {
        let balance = money(self.bankroll);
        self.say(format!("Thanks for playing! Final balance: {balance}"));
    }

    fn screen(&mut self) -> &mut dyn Write {
        if self.json {
            &mut self.chatter
        } else {
            &mut self.out
        }
    }

    fn say(&mut self, text: impl Display) {
        if let Err(e) = writeln!(self.screen(), "{text}") {
            log::warn!("Failed to write to terminal: {e}");
        }
    }

    /// `None` once input is closed.
    fn ask(&mut self, question: &str) -> Option<String> {
        let screen = self.screen();
        if let Err(e) = write!(screen, "{question}").and_then(|_| screen.flush()) {
            log::warn!("Failed to write to terminal: {e}");
        }
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line),
            Err(e) => {
                log::error!("Failed to read input: {e}");
                None
            }
        }
    }

    fn keep_playing(&mut self) -> bool {
        loop {
            let Some(answer) = self.ask("\nPlay another round? (Y/n): ") else {
                return false;
            };
            match parse_continue(&answer) {
                Some(more) => return more,
                None => self.say("Please enter y or n."),
            }
        }
    }

    /// Shared start of every round. `false` means the player is done.
    fn open_round(&mut self, cards_remaining: usize, reshuffled: bool) -> bool {
        if self.bankroll == 0 {
            self.say("You're out of money. Game over.");
            return false;
        }
        if self.rounds > 0 && !self.keep_playing() {
            return false;
        }
        if reshuffled {
            self.say("\n*** Reshuffling the shoe... ***");
        }
        let balance = money(self.bankroll);
        self.say(format!("\nBankroll: {balance} | Cards left in shoe: {cards_remaining}"));
        true
    }

    fn read_amount(&mut self, question: &str) -> Option<u64> {
        loop {
            let line = self.ask(question)?;
            if is_quit(&line) {
                return None;
            }
            match parse_amount(&line, self.bankroll) {
                Ok(amount) => return Some(amount),
                Err(e) => self.say(e),
            }
        }
    }

    fn close_round<T: serde::Serialize>(&mut self, settlement: Settlement, report: &T, text: String) {
        self.rounds += 1;
        self.bankroll = settlement.apply_to(self.bankroll);
        if !self.json {
            let round = self.rounds;
            self.say(format!("\n--- Round {round} ---\n{text}"));
            return;
        }
        if let Some(line) = render::json_line(report) {
            if let Err(e) = writeln!(self.out, "{line}").and_then(|_| self.out.flush()) {
                log::warn!("Failed to write report: {e}");
            }
        }
    }
}

impl<R: BufRead, W: Write, E: Write> baccarat::Bettor for TerminalSeat<R, W, E> {
    fn place_bet(&mut self, options: &baccarat::BettingOptions) -> Option<baccarat::Bet> {
        if !self.open_round(options.cards_remaining, options.reshuffled) {
            return None;
        }
        let target = loop {
            let line = self.ask("Bet on (player/banker/tie) [p/b/t] (or 'q' to quit): ")?;
            if is_quit(&line) {
                return None;
            }
            match parse_target(&line) {
                Ok(target) => break target,
                Err(e) => self.say(e),
            }
        };
        let question = format!("Enter bet amount (bankroll {}): ", money(self.bankroll));
        let amount = self.read_amount(&question)?;
        Some(baccarat::Bet::new(target, amount))
    }

    fn report_round(&mut self, report: &baccarat::RoundReport) {
        self.close_round(report.settlement, report, render::baccarat_round(report));
    }
}

impl<R: BufRead, W: Write, E: Write> DecisionProvider for TerminalSeat<R, W, E> {
    fn choose_action(&mut self, hand: &Hand, dealer_upcard: Card, can_double: bool) -> Action {
        self.say(format!("\n{}\n", render::blackjack_table(hand, dealer_upcard)));
        let options = if can_double {
            "Options: (H)it / (S)tand / (D)ouble down"
        } else {
            "Options: (H)it / (S)tand"
        };
        loop {
            self.say(options);
            let Some(line) = self.ask("Choose: ") else {
                log::warn!("Input closed mid-hand, standing");
                return Action::Stand;
            };
            match parse_action(&line, can_double) {
                Some(action) => return action,
                None => self.say("Invalid choice. Try again."),
            }
        }
    }
}

impl<R: BufRead, W: Write, E: Write> blackjack::Bettor for TerminalSeat<R, W, E> {
    fn place_bet(&mut self, options: &blackjack::BettingOptions) -> Option<blackjack::Bet> {
        if !self.open_round(options.cards_remaining, options.reshuffled) {
            return None;
        }
        let question = format!(
            "You have {}. Enter your bet (or 'q' to quit): $",
            money(self.bankroll)
        );
        let amount = self.read_amount(&question)?;
        Some(blackjack::Bet::new(amount, self.bankroll))
    }

    fn report_round(&mut self, report: &blackjack::RoundReport) {
        self.close_round(report.outcome.settlement, report, render::blackjack_round(report));
    }
}
