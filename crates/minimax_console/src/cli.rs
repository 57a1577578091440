//! Command-line interface for the minimax console.

use clap::{Parser, Subcommand};
use minimax_engine::{Board, Side};

/// Minimax - perfect tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "minimax")]
#[command(about = "Play tic-tac-toe against an exhaustive minimax engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (missing file means defaults)
    #[arg(short, long, global = true, default_value = "minimax.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Engine plays both sides
    SelfPlay {
        /// Side that moves first (X or O)
        #[arg(long, value_parser = Side::parse)]
        first: Option<Side>,

        /// Number of games to play (at least 1)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        games: Option<u32>,

        /// Clear the engine cache before each game
        #[arg(long)]
        reset_between_games: bool,
    },

    /// Human plays against the engine
    Play {
        /// Side the human plays (X or O)
        #[arg(long, value_parser = Side::parse)]
        human: Option<Side>,

        /// Side that moves first (X or O)
        #[arg(long, value_parser = Side::parse)]
        first: Option<Side>,
    },

    /// Score every move on a board
    Analyze {
        /// Board as three rows separated by '/', e.g. "XO_/_X_/__O"
        #[arg(long)]
        board: Board,

        /// Side to move
        #[arg(long, value_parser = Side::parse)]
        side: Side,

        /// Emit a JSON report instead of text
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_self_play() {
        let cli = Cli::try_parse_from(["minimax", "self-play", "--first", "o", "--games", "2"])
            .unwrap();
        match cli.command {
            Command::SelfPlay {
                first,
                games,
                reset_between_games,
            } => {
                assert_eq!(first, Some(Side::O));
                assert_eq!(games, Some(2));
                assert!(!reset_between_games);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_analyze_board() {
        let cli = Cli::try_parse_from([
            "minimax", "analyze", "--board", "XX_/_O_/___", "--side", "O", "--json",
        ])
        .unwrap();
        match cli.command {
            Command::Analyze { board, side, json } => {
                assert_eq!(board.to_string(), "XX_/_O_/___");
                assert_eq!(side, Side::O);
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_bad_board() {
        assert!(
            Cli::try_parse_from(["minimax", "analyze", "--board", "XX", "--side", "O"]).is_err()
        );
    }

    #[test]
    fn test_rejects_zero_games() {
        let err = Cli::try_parse_from(["minimax", "self-play", "--games", "0"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_rejects_unknown_side() {
        let err = Cli::try_parse_from(["minimax", "play", "--human", "Z"]).unwrap_err();
        assert!(err.to_string().contains("Invalid side 'Z'"), "{err}");
    }

    #[test]
    fn test_default_config_path() {
        let cli = Cli::try_parse_from(["minimax", "play"]).unwrap();
        assert_eq!(cli.config, std::path::PathBuf::from("minimax.toml"));
    }
}
