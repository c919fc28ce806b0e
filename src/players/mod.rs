//! Player trait and implementations.

mod heuristic;
mod human;

pub use heuristic::HeuristicAi;
pub use human::ConsoleHuman;

use anyhow::Result;
use std::io::Write;
use strictly_nxn::Game;

/// Trait for players that can make moves.
pub trait Player {
    /// Gets a move from this player.
    ///
    /// Returns the 1-based index for the next move, or `None` when the
    /// player has nothing left to play. `out` is the shared console.
    fn get_move(&mut self, game: &Game, out: &mut dyn Write) -> Result<Option<usize>>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
