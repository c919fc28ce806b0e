//! Strictly NxN - console tic-tac-toe against a line-scoring AI.

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use strictly_nxn::Game;
use strictly_nxn_console::{Cli, ConsoleHuman, GameConfig, HeuristicAi, Orchestrator};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();
    let config = GameConfig::resolve(&cli)?;
    run_game(&config)
}

/// Plays one game on stdin/stdout.
#[instrument(skip_all, fields(size = config.board_size(), human = %config.human_mark()))]
fn run_game(config: &GameConfig) -> Result<()> {
    let game = Game::new(*config.board_size(), config.first_mark())?;
    let human = ConsoleHuman::new("You", io::stdin().lock());
    let ai = HeuristicAi::new("AI", *config.seed()).with_show_scores(*config.debug());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(
        out,
        "Welcome to Tic-Tac-Toe. Please make your move selection by \
         entering a number corresponding to the movement key."
    )?;

    let mut orchestrator =
        Orchestrator::new(game, Box::new(human), Box::new(ai), *config.human_mark());
    let outcome = orchestrator.run(&mut out)?;
    info!(?outcome, "Game finished");
    Ok(())
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
