//! Command-line interface for strictly_rewind.

use crate::replay::Step;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Strictly Rewind - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "strictly_rewind")]
#[command(about = "Tic-tac-toe with full move-history navigation", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it does not exist)
    #[arg(short, long, global = true, default_value = "strictly_rewind.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to the terminal UI)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Tui,

    /// Apply a list of steps to a new game and print the result
    Replay {
        /// Steps: a cell 0-8 (or a name like "center") plays it, "@n" jumps to move n
        #[arg(required = true)]
        steps: Vec<Step>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Exit with an error if any step is rejected
        #[arg(long)]
        strict: bool,
    },
}

/// Replay output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Human-readable board and history
    Text,
    /// Pretty-printed JSON report
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_tictactoe::Position;

    #[test]
    fn test_no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["strictly_rewind"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.config, PathBuf::from("strictly_rewind.toml"));
    }

    #[test]
    fn test_replay_parses_steps() {
        let cli = Cli::try_parse_from(["strictly_rewind", "replay", "0", "@0", "center", "--format", "json"]).unwrap();
        match cli.command {
            Some(Command::Replay { steps, format, strict }) => {
                assert_eq!(
                    steps,
                    vec![
                        Step::Play { position: Position::TopLeft },
                        Step::Jump { move_index: 0 },
                        Step::Play { position: Position::Center },
                    ]
                );
                assert_eq!(format, Format::Json);
                assert!(!strict);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_replay_rejects_bad_step() {
        assert!(Cli::try_parse_from(["strictly_rewind", "replay", "10"]).is_err());
    }
}
