//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use tictactoe_store::Side;

/// Tic-tac-toe match tracker
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe matches and keep their history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play one or more games from move lists
    Play {
        /// One game per argument, moves as row-column pairs ("00 10 01 11 02")
        #[arg(required = true)]
        games: Vec<String>,

        /// Side that moves first (overrides the config file)
        #[arg(short, long)]
        first: Option<Side>,

        /// Print the archive as JSON instead of boards
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration
    ShowConfig,
}
