//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "solitaire",
    version,
    about = "Klondike Solitaire with a move-legality checker"
)]
pub struct SolitaireCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play a game interactively on stdin
    Play {
        /// RNG seed for the deal (default: config seed, else random)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Check one move against the opening layout of a deal
    Check {
        #[arg(long)]
        seed: Option<u64>,
        /// Source location, e.g. A3, O or SA
        source: String,
        /// Destination location, e.g. B, SA
        destination: String,
    },
    /// Print the opening layout of a deal
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the resolved configuration
    Cfg,
}
