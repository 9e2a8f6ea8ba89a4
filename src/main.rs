//! Boggle - Unified CLI
//!
//! Interactive play, plus board solving and word checking for scripts.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use boggle::{Console, GameConfig, GameSession, SolveReport, check_words, open_dictionary};
use boggle_core::{Board, TrieLexicon};
use clap::Parser;
use cli::{Cli, Command};
use std::io;
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let config = load_config(&cli)?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_play(&config),
        Command::Solve { board, json } => run_solve(&config, &board, json),
        Command::Check { board, words } => run_check(&config, &board, &words),
    }
}

/// Play interactively on stdin/stdout
#[instrument(skip_all)]
fn run_play(config: &GameConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), config.highlight_pause());

    let Some(lexicon) = open_dictionary(&mut console, config.dictionary().clone())? else {
        info!("No dictionary, exiting");
        return Ok(());
    };

    let mut session = GameSession::new(config, &lexicon, console);
    session.run()?;
    Ok(())
}

/// Print every word on a board
#[instrument(skip(config))]
fn run_solve(config: &GameConfig, letters: &str, json: bool) -> Result<()> {
    let lexicon = load_lexicon(config)?;
    let board = Board::from_letters(letters, *config.board_size())?;

    let report = SolveReport::solve(&board, &lexicon, config.computer_limits());
    if json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}\n", board);
        println!("{}", report);
    }
    Ok(())
}

/// Check words against a board in order
#[instrument(skip(config))]
fn run_check(config: &GameConfig, letters: &str, words: &[String]) -> Result<()> {
    let lexicon = load_lexicon(config)?;
    let board = Board::from_letters(letters, *config.board_size())?;

    for outcome in check_words(&board, &lexicon, words) {
        println!("{}", outcome);
    }
    Ok(())
}

fn load_lexicon(config: &GameConfig) -> Result<TrieLexicon> {
    TrieLexicon::load(config.dictionary()).with_context(|| {
        format!(
            "Failed to load dictionary {}",
            config.dictionary().display()
        )
    })
}

#[instrument(skip(cli), fields(config_path = %cli.config.display()))]
fn load_config(cli: &Cli) -> Result<GameConfig> {
    info!("Loading game configuration");

    let mut config = GameConfig::load_or_default(&cli.config)?;

    if let Some(dictionary) = &cli.dictionary {
        info!(dictionary = %dictionary.display(), "Overriding dictionary");
        config = config.with_dictionary(dictionary);
    }
    if let Some(size) = cli.size {
        info!(%size, "Overriding board size");
        config = config.with_board_size(size);
    }
    if let Some(seed) = cli.seed {
        info!(seed, "Overriding seed");
        config = config.with_seed(seed);
    }

    Ok(config)
}

/// Logs go to stderr so they never mix with the game on stdout.
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
