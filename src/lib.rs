//! Strictly NxN console - tic-tac-toe on an N×N board against a heuristic AI.
//!
//! # Architecture
//!
//! - **Config**: TOML file plus command-line overrides
//! - **Console**: move prompts with re-prompting, grid rendering
//! - **Players**: a console human and the gain/risk AI behind one trait
//! - **Orchestrator**: the turn-taking loop
//!
//! Game rules and scoring live in the `strictly_nxn` crate.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use strictly_nxn::{Game, Player as Mark};
//! use strictly_nxn_console::{ConsoleHuman, GameOutcome, HeuristicAi, Orchestrator};
//!
//! # fn main() -> anyhow::Result<()> {
//! let game = Game::new(1, Mark::X)?;
//! let human = ConsoleHuman::new("You", Cursor::new("1\n"));
//! let ai = HeuristicAi::new("AI", Some(0));
//! let mut orchestrator = Orchestrator::new(game, Box::new(human), Box::new(ai), Mark::X);
//!
//! let mut out = Vec::new();
//! assert_eq!(orchestrator.run(&mut out)?, GameOutcome::HumanWon);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod orchestrator;
mod players;

pub use cli::Cli;
pub use config::{ConfigError, GameConfig, MAX_BOARD_SIZE};
pub use console::{
    InputError, PromptError, parse_move, prompt_move, render_board, render_evaluation,
    render_grid, render_movement_key,
};
pub use orchestrator::{GameOutcome, Orchestrator};
pub use players::{ConsoleHuman, HeuristicAi, Player};
