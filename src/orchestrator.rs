//! Turn-taking loop between the human and the AI.

use crate::console::render_board;
use crate::players::Player;
use anyhow::Result;
use std::io::Write;
use strictly_nxn::{Game, GameStatus, Player as Mark};
use tracing::{debug, info, instrument};

/// How a finished game ended, from the human's side of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// The human completed a line.
    HumanWon,
    /// The AI completed a line.
    AiWon,
    /// No moves remained and nobody won.
    Draw,
}

/// Orchestrates gameplay between a human and the AI.
pub struct Orchestrator {
    game: Game,
    human: Box<dyn Player>,
    ai: Box<dyn Player>,
    human_mark: Mark,
}

impl Orchestrator {
    /// Creates an orchestrator for a game already set up with its first mover.
    pub fn new(game: Game, human: Box<dyn Player>, ai: Box<dyn Player>, human_mark: Mark) -> Self {
        Self {
            game,
            human,
            ai,
            human_mark,
        }
    }

    /// Runs the game loop until a win or draw, writing to `out`.
    #[instrument(skip_all, fields(size = self.game.board().size(), human = %self.human_mark))]
    pub fn run(&mut self, out: &mut dyn Write) -> Result<GameOutcome> {
        info!("Starting game orchestration");
        render_board(out, self.game.board())?;

        loop {
            let mark = self.game.to_move();
            let is_human = mark == self.human_mark;
            let player = if is_human { &mut self.human } else { &mut self.ai };

            debug!(player = %player.name(), %mark, "Waiting for move");
            let Some(index) = player.get_move(&self.game, out)? else {
                info!(player = %player.name(), "No move available");
                writeln!(out, "No more moves, it's a draw.")?;
                return Ok(GameOutcome::Draw);
            };

            if is_human {
                writeln!(out, "You have put an {mark} at position {index}.")?;
            } else {
                writeln!(out, "I will put an {mark} at position {index}.")?;
            }

            let status = self.game.make_move(index)?;
            render_board(out, self.game.board())?;

            let outcome = match status {
                GameStatus::InProgress => continue,
                GameStatus::Won(winner) if winner == self.human_mark => {
                    writeln!(out, "You have beaten my poor AI.")?;
                    GameOutcome::HumanWon
                }
                GameStatus::Won(_) => {
                    writeln!(out, "You lose to a computer!")?;
                    GameOutcome::AiWon
                }
                GameStatus::Draw => {
                    writeln!(out, "No more moves, it's a draw.")?;
                    GameOutcome::Draw
                }
            };
            info!(?outcome, moves = self.game.history().len(), "Game over");
            return Ok(outcome);
        }
    }
}
