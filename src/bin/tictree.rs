//! tictree CLI - backward induction over the complete tic-tac-toe game tree
//!
//! This CLI provides:
//! - Building the full (or opening-restricted) game tree
//! - Solving it by alternating prune and fold passes
//! - Exporting the reduced tree and a per-phase trace

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tictree")]
#[command(version, about = "Prune and fold the tic-tac-toe game tree", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve the tree for a desired outcome and controlling player
    Solve(Box<tictree::cli::commands::solve::SolveArgs>),

    /// Print size and outcome statistics of the tree
    Stats(tictree::cli::commands::stats::StatsArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve(args) => tictree::cli::commands::solve::execute(*args),
        Commands::Stats(args) => tictree::cli::commands::stats::execute(args),
    }
}
