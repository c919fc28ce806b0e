//! Command-line interface for strictly_nxn.

use clap::Parser;
use std::path::PathBuf;
use strictly_nxn::Player as Mark;

/// Strictly NxN - tic-tac-toe on any square board against a line-scoring AI
#[derive(Parser, Debug)]
#[command(name = "strictly_nxn")]
#[command(about = "Play N×N tic-tac-toe against a simple AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board size N (the board is N×N and a line of N wins)
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Mark you play, X or O
    #[arg(long, value_name = "MARK")]
    pub human: Option<Mark>,

    /// Let the AI make the first move
    #[arg(long)]
    pub ai_first: bool,

    /// Show the AI's gain, risk and score grids
    #[arg(short, long)]
    pub debug: bool,

    /// Seed for the AI's tie-breaking
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to a TOML config file
    #[arg(short, long, env = "STRICTLY_NXN_CONFIG", default_value = "strictly_nxn.toml")]
    pub config: PathBuf,
}
