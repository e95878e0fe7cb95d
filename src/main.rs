//! Wordle Game - CLI
//!
//! Five-letter word game with TUI and line-based modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use wordle_game::{
    clipboard::SystemClipboard,
    commands::{reset, run_simple, score_guess, stored_records, stored_share_text},
    config::{LOG_FILE, default_data_dir, load_words},
    controller::{GameController, StartOptions, today},
    game::{GameMode, Rules, STANDARD_ATTEMPTS},
    i18n::Language,
    interactive::{App, run_tui},
    output::{print_evaluation, print_stats},
    storage::{self, FileStorage},
    wordlists::EmbeddedWords,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Interface and word list language (defaults to the stored preference)
    #[arg(short, long, global = true, value_enum)]
    language: Option<Language>,

    /// Directory for settings, statistics, the saved round and the log
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Attempts per round (1-6)
    #[arg(short = 'm', long, global = true, default_value_t = STANDARD_ATTEMPTS)]
    max_attempts: usize,

    /// Stricter attempt cap applied while hard mode is on
    #[arg(long, global = true)]
    hard_mode_cap: Option<usize>,

    /// Replace the word list of the active language with a file, one word per line
    #[arg(short = 'w', long, global = true)]
    word_list: Option<PathBuf>,

    /// Play today's daily word instead of a random one
    #[arg(short, long, global = true)]
    daily: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based play without TUI)
    Simple,

    /// Show how a guess scores against a solution
    Score {
        /// The guessed word
        guess: String,
        /// The solution to score against
        solution: String,
    },

    /// Show stored statistics
    Stats,

    /// Print the share text of the stored round
    Share,

    /// Delete the stored round
    Reset {
        /// Also delete statistics and settings
        #[arg(long)]
        all: bool,
    },
}

/// Send logs to a file in the data directory; the TUI owns stdout
fn init_logging(data_dir: &Path) -> Result<()> {
    fs::create_dir_all(data_dir)
        .with_context(|| format!("failed to create data directory {}", data_dir.display()))?;
    let log_path = data_dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("failed to open log file {}", log_path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();
    let data_dir = cli.data_dir.clone().unwrap_or_else(default_data_dir);
    init_logging(&data_dir)?;

    let rules = Rules::new(cli.max_attempts, cli.hard_mode_cap);
    let mut storage = FileStorage::new(&data_dir);

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let controller = start_controller(&cli, storage, rules)?;
            run_tui(App::new(controller))
        }
        Commands::Simple => {
            let mut controller = start_controller(&cli, storage, rules)?;
            run_simple(&mut controller).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Score { guess, solution } => {
            let result = score_guess(&guess, &solution).context("invalid solution")?;
            println!("{} → {}", result.guess, result.solution);
            print_evaluation(&result.evaluation, false);
            Ok(())
        }
        Commands::Stats => {
            let (settings, stats) = stored_records(&storage);
            let language = cli.language.unwrap_or(settings.language);
            print_stats(&stats, language.strings());
            Ok(())
        }
        Commands::Share => {
            match stored_share_text(&storage, &rules) {
                Some(text) => println!("{text}"),
                None => {
                    let language = cli
                        .language
                        .unwrap_or_else(|| storage::load_settings(&storage).language);
                    println!("{}", language.strings().share_not_ready());
                }
            }
            Ok(())
        }
        Commands::Reset { all } => {
            reset(&mut storage, all).context("failed to reset stored state")?;
            println!("Stored {} cleared.", if all { "state" } else { "round" });
            Ok(())
        }
    }
}

fn start_controller(
    cli: &Cli,
    storage: FileStorage,
    rules: Rules,
) -> Result<GameController<FileStorage, SystemClipboard, EmbeddedWords>> {
    let language = cli
        .language
        .unwrap_or_else(|| storage::load_settings(&storage).language);
    let words = load_words(cli.word_list.as_deref(), language)?;
    let mode = if cli.daily {
        GameMode::Daily
    } else {
        GameMode::Practice
    };

    Ok(GameController::start(
        storage,
        SystemClipboard,
        words,
        rules,
        StartOptions {
            mode,
            language: cli.language,
            today: today(),
        },
    ))
}
