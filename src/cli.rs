//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Noughts - tic-tac-toe against the computer
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Play tic-tac-toe against a heuristic computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Path to config file (defaults to $NOUGHTS_CONFIG, then noughts.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the computer's thinking delay in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Seed the computer's random fallback for a reproducible game
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the default configuration as TOML
    Config,
}
