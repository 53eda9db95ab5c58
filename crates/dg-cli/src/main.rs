//! CLI frontend for the dice scoring game.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

#[derive(Parser)]
#[command(
    name = "dg",
    about = "Dice game: roll N dice, score the pattern, keep the total",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log rolls and scores to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command that starts a game.
#[derive(Args)]
pub struct GameArgs {
    /// Number of dice to roll each round
    #[arg(short, long, default_value = "3")]
    pub dice: usize,

    /// RNG seed for reproducible rolls (overrides the config file)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Use the original biased die formula instead of uniform faces
    #[arg(long)]
    pub legacy_die: bool,

    /// JSON file with game settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively: type 'play' to roll, 'end' to finish
    Play {
        #[command(flatten)]
        game: GameArgs,
    },

    /// Play a fixed number of rounds and report the results
    Simulate {
        #[command(flatten)]
        game: GameArgs,

        /// Number of rounds to play
        #[arg(short, long, default_value = "10")]
        rounds: u32,

        /// Show a table of every round
        #[arg(long)]
        verbose_rounds: bool,

        /// Write the round history to a file (.md for markdown, otherwise JSON)
        #[arg(short, long)]
        export: Option<PathBuf>,
    },

    /// Score a single roll given as face values
    Score {
        /// Face values of the roll, e.g. `4 4 4`
        #[arg(required = true, allow_negative_numbers = true)]
        faces: Vec<i32>,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    if let Err(e) = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("warning: logger unavailable: {e}");
    }

    let result = match cli.command {
        Commands::Play { game } => commands::play::run(&game),
        Commands::Simulate {
            game,
            rounds,
            verbose_rounds,
            export,
        } => commands::simulate::run(&game, rounds, verbose_rounds, export.as_deref()),
        Commands::Score { faces } => commands::score::run(&faces),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
