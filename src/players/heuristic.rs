//! AI player driven by the gain/risk line heuristic.

use super::Player;
use crate::console::render_evaluation;
use anyhow::{Result, bail};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;
use strictly_nxn::{Game, MoveEvaluation, ai};
use tracing::{debug, instrument};

/// Heuristic AI with its own random source for tie-breaking.
pub struct HeuristicAi {
    name: String,
    rng: StdRng,
    show_scores: bool,
}

impl HeuristicAi {
    /// Creates an AI seeded from the OS, or from `seed` for repeatable play.
    pub fn new(name: impl Into<String>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            name: name.into(),
            rng,
            show_scores: false,
        }
    }

    /// Prints the gain, risk and score grids before every move.
    pub fn with_show_scores(mut self, show_scores: bool) -> Self {
        self.show_scores = show_scores;
        self
    }
}

impl Player for HeuristicAi {
    #[instrument(skip_all, fields(ai = %self.name))]
    fn get_move(&mut self, game: &Game, out: &mut dyn Write) -> Result<Option<usize>> {
        let board = game.board();
        let evaluation = MoveEvaluation::evaluate(board, game.to_move());
        if self.show_scores {
            render_evaluation(out, &evaluation, board.size())?;
        }

        let choice = ai::choose(&evaluation, board, &mut self.rng);
        match choice {
            Some(index) if !board.is_legal_move(index) => {
                bail!("AI selected occupied position {index}")
            }
            _ => {
                debug!(?choice, "AI chose position");
                Ok(choice)
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_nxn::Player as Mark;

    #[test]
    fn test_seeded_ai_is_repeatable() {
        let game = Game::new(5, Mark::O).unwrap();
        let picks = |seed| {
            let mut ai = HeuristicAi::new("AI", Some(seed));
            let mut out = Vec::new();
            let picks: Vec<_> = (0..5)
                .map(|_| ai.get_move(&game, &mut out).unwrap())
                .collect();
            assert!(out.is_empty());
            picks
        };
        assert_eq!(picks(11), picks(11));
    }

    #[test]
    fn test_show_scores_prints_grids() {
        let game = Game::new(3, Mark::X).unwrap();
        let mut ai = HeuristicAi::new("AI", Some(0)).with_show_scores(true);
        let mut out = Vec::new();
        let index = ai.get_move(&game, &mut out).unwrap().unwrap();
        assert!((1..=9).contains(&index));
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Potential gain:"));
        assert!(text.contains("Move scores:"));
    }
}
