//! Command-line interface for boggle.

use boggle_core::BoardSize;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Boggle - play against a computer that knows every word on the board
#[derive(Parser, Debug)]
#[command(name = "boggle")]
#[command(about = "Word-search game against an exhaustive solver", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "boggle.toml", global = true)]
    pub config: PathBuf,

    /// Dictionary file, one word per line (overrides config)
    #[arg(short, long, global = true)]
    pub dictionary: Option<PathBuf>,

    /// Board size: standard (4x4) or big (5x5) (overrides config)
    #[arg(long, global = true)]
    pub size: Option<BoardSize>,

    /// Seed for rolling boards (overrides config)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Subcommand to run; plays interactively if omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively against the computer
    Play,

    /// List every word on a board
    Solve {
        /// Board letters, row by row
        #[arg(short, long)]
        board: String,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check words against a board as if one player typed them
    Check {
        /// Board letters, row by row
        #[arg(short, long)]
        board: String,

        /// Words to check
        #[arg(required = true)]
        words: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_play() {
        let cli = Cli::try_parse_from(["boggle"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.config, PathBuf::from("boggle.toml"));
    }

    #[test]
    fn test_solve_with_global_flags() {
        let cli = Cli::try_parse_from([
            "boggle", "solve", "--board", "catsoren", "--size", "BIG", "--json",
        ])
        .unwrap();
        assert_eq!(cli.size, Some(BoardSize::Big));
        assert_eq!(
            cli.command,
            Some(Command::Solve {
                board: "catsoren".to_string(),
                json: true,
            })
        );
    }

    #[test]
    fn test_check_requires_words() {
        assert!(Cli::try_parse_from(["boggle", "check", "--board", "abcd"]).is_err());
    }
}
