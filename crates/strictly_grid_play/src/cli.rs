//! Command-line interface for strictly_grid.

use clap::{Parser, Subcommand, ValueEnum};
use strictly_grid::{Mark, Player};

/// Strictly Grid - N×N tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_grid")]
#[command(about = "N×N tic-tac-toe against a friend or the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal
    Play {
        /// Path to the settings file
        #[arg(short, long, default_value = "strictly_grid.toml")]
        config: std::path::PathBuf,

        /// Board dimension (overrides the settings file)
        #[arg(short, long)]
        dimension: Option<usize>,

        /// Play against a friend instead of the computer
        #[arg(long)]
        two_player: bool,

        /// Who moves first (overrides the settings file)
        #[arg(long, value_enum)]
        first: Option<FirstArg>,

        /// Symbol for Player 1 (overrides the settings file)
        #[arg(long, value_enum)]
        mark: Option<MarkArg>,

        /// Delay before the computer moves, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// How the computer picks its moves
        #[arg(long, value_enum, default_value = "first-empty")]
        policy: PolicyArg,

        /// Seed for the random policy
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Write a settings file with default values
    InitConfig {
        /// Path to the settings file
        #[arg(short, long, default_value = "strictly_grid.toml")]
        config: std::path::PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Who moves first.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirstArg {
    /// Player 1 moves first
    One,
    /// Player 2 moves first
    Two,
}

impl From<FirstArg> for Player {
    fn from(arg: FirstArg) -> Self {
        match arg {
            FirstArg::One => Player::PlayerOne,
            FirstArg::Two => Player::PlayerTwo,
        }
    }
}

/// Player 1's symbol.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkArg {
    /// Crosses
    X,
    /// Noughts
    O,
}

impl From<MarkArg> for Mark {
    fn from(arg: MarkArg) -> Self {
        match arg {
            MarkArg::X => Mark::X,
            MarkArg::O => Mark::O,
        }
    }
}

/// Automated-move policy.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyArg {
    /// First empty cell, row by row
    FirstEmpty,
    /// Uniformly random empty cell
    Random,
}
