//! Minimax - console entry point.

use anyhow::Result;
use clap::Parser;
use minimax_console::{Cli, Command, ConsoleConfig, SelfPlayOptions, modes};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ConsoleConfig::load_or_default(&cli.config)?;
    initialize_tracing(config.log_filter());

    match cli.command {
        Command::SelfPlay {
            first,
            games,
            reset_between_games,
        } => {
            let options = SelfPlayOptions {
                first: first.unwrap_or(*config.first()),
                games: games.unwrap_or(*config.games()),
                reset_between_games: reset_between_games || *config.reset_between_games(),
            };
            modes::run_self_play(options, io::stdout().lock())?;
        }
        Command::Play { human, first } => {
            let human = human.unwrap_or(*config.human());
            let first = first.unwrap_or(*config.first());
            modes::run_human_game(human, first, io::stdin().lock(), io::stdout(), io::stdout())?;
        }
        Command::Analyze { board, side, json } => {
            modes::run_analyze(&board, side, json, io::stdout().lock())?;
        }
    }

    Ok(())
}

/// Logs go to stderr so they never mix with the game transcript.
fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();

    info!("Tracing initialized");
}
