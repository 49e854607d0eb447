mod autoplay;
mod prompt;
mod render;
mod seat;

use autoplay::AutoSeat;
use baccarat::BetTarget;
use clap::{Parser, Subcommand, ValueEnum};
use prompt::BetError;
use seat::TerminalSeat;
use std::io;

type BoxErr = Box<dyn std::error::Error + Send + Sync>;

// Cents.
const BACCARAT_BANKROLL: u64 = 100_000;
const BLACKJACK_BANKROLL: u64 = 10_000;

#[derive(Parser)]
#[command(name = "cardroom", about = "Shoe-dealt baccarat and blackjack in the terminal")]
struct Cli {
    /// Starting bankroll in dollars [default: 1000 for baccarat, 100 for blackjack]
    #[arg(long, env = "CARDROOM_BANKROLL", global = true, value_parser = prompt::parse_money)]
    bankroll: Option<u64>,

    /// Seed the shoe for a reproducible session
    #[arg(long, env = "CARDROOM_SEED", global = true)]
    seed: Option<u64>,

    /// Decks in the shoe [default: 8 for baccarat, 6 for blackjack]
    #[arg(long, global = true)]
    decks: Option<u8>,

    /// Reshuffle before a round when fewer cards than this remain
    #[arg(long, global = true)]
    reshuffle_threshold: Option<usize>,

    /// Print each round report as a JSON line; prompts move to stderr
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Punto banco: bet on player, banker or tie
    Baccarat {
        /// Play this many rounds without prompts
        #[arg(long)]
        autoplay: Option<usize>,

        /// Flat stake for autoplay, in dollars
        #[arg(long, default_value = "10", value_parser = prompt::parse_money)]
        bet: u64,

        /// Side backed during autoplay
        #[arg(long, value_enum, default_value = "banker")]
        on: Side,
    },
    /// Single-hand blackjack against the dealer
    Blackjack {
        /// Play this many rounds by basic strategy without prompts
        #[arg(long)]
        autoplay: Option<usize>,

        /// Flat stake for autoplay, in dollars
        #[arg(long, default_value = "10", value_parser = prompt::parse_money)]
        bet: u64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Side {
    Player,
    Banker,
    Tie,
}

impl From<Side> for BetTarget {
    fn from(side: Side) -> Self {
        match side {
            Side::Player => BetTarget::Player,
            Side::Banker => BetTarget::Banker,
            Side::Tie => BetTarget::Tie,
        }
    }
}

fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Baccarat { autoplay, bet, on } => run_baccarat(&cli, autoplay, bet, on.into()),
        Command::Blackjack { autoplay, bet } => run_blackjack(&cli, autoplay, bet),
    };
    if let Err(e) = result {
        log::error!("Session failed: {e}");
        std::process::exit(1);
    }
}

fn check_stake(stake: u64, bankroll: u64) -> Result<(), BetError> {
    if stake == 0 {
        return Err(BetError::NotPositive);
    }
    if stake > bankroll {
        return Err(BetError::ExceedsBankroll { bankroll });
    }
    Ok(())
}

fn run_baccarat(
    cli: &Cli,
    autoplay: Option<usize>,
    stake: u64,
    target: BetTarget,
) -> Result<(), BoxErr> {
    let defaults = baccarat::TableRules::default();
    let rules = baccarat::TableRules::new(
        cli.decks.unwrap_or(defaults.num_decks),
        cli.reshuffle_threshold.unwrap_or(defaults.reshuffle_threshold),
    )?;
    log::info!(
        "Baccarat: {} decks, reshuffle below {} cards",
        rules.num_decks,
        rules.reshuffle_threshold
    );
    let mut table = match cli.seed {
        Some(seed) => baccarat::Table::seeded(rules, seed),
        None => baccarat::Table::new(rules),
    };
    let bankroll = cli.bankroll.unwrap_or(BACCARAT_BANKROLL);

    match autoplay {
        Some(rounds) => {
            check_stake(stake, bankroll)?;
            let mut seat = AutoSeat::new(io::stdout(), bankroll, stake, rounds, cli.json)
                .backing(target);
            while table.play_next(&mut seat)?.is_some() {}
            finish_autoplay(&seat, cli.json);
        }
        None => {
            let mut seat = TerminalSeat::new(
                io::stdin().lock(),
                io::stdout(),
                io::stderr(),
                bankroll,
                cli.json,
            );
            seat.greet("Terminal Baccarat (Punto Banco)");
            while table.play_next(&mut seat)?.is_some() {}
            seat.farewell();
        }
    }
    Ok(())
}

fn run_blackjack(cli: &Cli, autoplay: Option<usize>, stake: u64) -> Result<(), BoxErr> {
    let defaults = blackjack::GameRules::default();
    let rules = blackjack::GameRules::new(
        cli.decks.unwrap_or(defaults.num_decks),
        cli.reshuffle_threshold.unwrap_or(defaults.reshuffle_threshold),
    )?;
    log::info!(
        "Blackjack: {} decks, reshuffle below {} cards, dealer stands on 17",
        rules.num_decks,
        rules.reshuffle_threshold
    );
    let mut table = match cli.seed {
        Some(seed) => blackjack::Table::seeded(rules, seed),
        None => blackjack::Table::new(rules),
    };
    let bankroll = cli.bankroll.unwrap_or(BLACKJACK_BANKROLL);

    match autoplay {
        Some(rounds) => {
            check_stake(stake, bankroll)?;
            let mut seat = AutoSeat::new(io::stdout(), bankroll, stake, rounds, cli.json);
            while table.play_next(&mut seat)?.is_some() {}
            finish_autoplay(&seat, cli.json);
        }
        None => {
            let mut seat = TerminalSeat::new(
                io::stdin().lock(),
                io::stdout(),
                io::stderr(),
                bankroll,
                cli.json,
            );
            seat.greet("Blackjack: dealer stands on all 17s, blackjack pays 3:2");
            while table.play_next(&mut seat)?.is_some() {}
            seat.farewell();
        }
    }
    Ok(())
}

fn finish_autoplay<W: io::Write>(seat: &AutoSeat<W>, json: bool) {
    if json {
        if let Some(line) = render::json_line(&seat.tally()) {
            println!("{line}");
        }
    } else {
        println!("{}", seat.summary());
    }
}
