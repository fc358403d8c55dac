//! Hangman - CLI
//!
//! Running with no arguments starts one game immediately: the computer
//! guesses with the coverage strategy while you hold the word.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman_solver::{
    commands::{PlayConfig, RoleKind, run_bench, run_filter, run_play},
    dictionary::Dictionary,
    game::{GameError, StdConsole},
    output::{print_bench_result, print_game_result},
    solver::StrategyKind,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Terminal Hangman with a dictionary-driven computer guesser",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: coverage (default), partition, random
    #[arg(short, long, global = true, default_value = "coverage")]
    strategy: String,

    /// Path to a word-list file (default: the bundled dictionary)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one game (default)
    Play {
        /// Who proposes letters: computer (default) or human
        #[arg(long, default_value = "computer")]
        guesser: String,

        /// Who holds the word: human (default) or computer
        #[arg(long, default_value = "human")]
        checker: String,

        /// Fix the secret length when the computer holds the word
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// Clean a word list down to lowercase-alphabetic entries
    Filter {
        /// Word list to read
        input: PathBuf,

        /// Where to write the result (default: overwrite the input)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Benchmark the computer guesser by self-play over the dictionary
    Bench {
        /// Limit the number of games
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Restrict secrets to one word length
        #[arg(short, long)]
        length: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(cli.wordlist.as_deref())?;
    let strategy = StrategyKind::from_name(&cli.strategy);

    // Default to one game if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        guesser: "computer".to_string(),
        checker: "human".to_string(),
        length: None,
    });

    match command {
        Commands::Play {
            guesser,
            checker,
            length,
        } => {
            let config = PlayConfig {
                guesser: parse_role(&guesser)?,
                checker: parse_role(&checker)?,
                strategy,
                length,
            };
            run_play_command(&config, &dictionary)
        }
        Commands::Filter { input, output } => {
            run_filter(&input, output.as_deref())
                .with_context(|| format!("failed to filter {}", input.display()))?;
            Ok(())
        }
        Commands::Bench { count, length } => {
            let result = run_bench(&dictionary, strategy, count, length);
            print_bench_result(&result);
            Ok(())
        }
    }
}

/// Load the dictionary selected by the -w flag
fn load_dictionary(path: Option<&Path>) -> Result<Dictionary> {
    match path {
        Some(p) => Dictionary::from_file(p)
            .with_context(|| format!("failed to load word list {}", p.display())),
        None => Ok(Dictionary::embedded()),
    }
}

fn parse_role(name: &str) -> Result<RoleKind> {
    RoleKind::from_name(name)
        .ok_or_else(|| anyhow::anyhow!("unknown role {name:?} (use 'human' or 'computer')"))
}

fn run_play_command(config: &PlayConfig, dictionary: &Dictionary) -> Result<()> {
    let mut console = StdConsole;

    match run_play(config, dictionary, &mut console) {
        Ok(report) => {
            print_game_result(&report);
            Ok(())
        }
        Err(GameError::Aborted) => {
            eprintln!("game aborted at user request");
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
