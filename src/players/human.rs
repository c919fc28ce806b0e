//! Human player that types move numbers at the console.

use super::Player;
use crate::console::{prompt_move, render_movement_key};
use anyhow::Result;
use std::io::{BufRead, Write};
use strictly_nxn::Game;
use tracing::{info, instrument};

/// Human player reading one move per line.
pub struct ConsoleHuman<R> {
    name: String,
    input: R,
}

impl<R: BufRead> ConsoleHuman<R> {
    /// Creates a new human player reading from `input`.
    pub fn new(name: impl Into<String>, input: R) -> Self {
        Self {
            name: name.into(),
            input,
        }
    }
}

impl<R: BufRead> Player for ConsoleHuman<R> {
    #[instrument(skip_all, fields(player = %self.name))]
    fn get_move(&mut self, game: &Game, out: &mut dyn Write) -> Result<Option<usize>> {
        render_movement_key(out, game.board().size())?;
        let index = prompt_move(&mut self.input, out, game.board())?;
        info!(index, "human chose position");
        Ok(Some(index))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
