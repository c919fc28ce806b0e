//! Single-ply heuristic AI built on line scoring.
//!
//! Each empty square is valued by how long a line it would give the AI
//! (gain) plus how long a line it would deny the opponent (risk). Both are
//! squared so that near-complete lines dominate minor progress.

use crate::rules::compute_all_scores;
use crate::types::{Board, Player};
use derive_getters::Getters;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Per-square heuristic values for one side, in board order.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct MoveEvaluation {
    /// Squared line length the AI would reach on each square.
    gain: Vec<usize>,
    /// Squared line length the opponent would reach on each square.
    risk: Vec<usize>,
    /// `gain + risk`.
    scores: Vec<usize>,
}

impl MoveEvaluation {
    /// Evaluates every square of `board` from `ai`'s point of view.
    #[instrument(skip(board))]
    pub fn evaluate(board: &Board, ai: Player) -> Self {
        let squared = |piece| -> Vec<usize> {
            compute_all_scores(board, piece)
                .into_iter()
                .map(|x| x * x)
                .collect()
        };
        let gain = squared(ai);
        let risk = squared(ai.opponent());
        let scores = gain.iter().zip(&risk).map(|(g, r)| g + r).collect();
        Self { gain, risk, scores }
    }

    /// Empty squares (1-based) sharing the highest score.
    pub fn candidates(&self, board: &Board) -> Vec<usize> {
        let best = board
            .empty_indices()
            .into_iter()
            .map(|index| self.scores[index - 1])
            .max();
        match best {
            Some(best) => board
                .empty_indices()
                .into_iter()
                .filter(|&index| self.scores[index - 1] == best)
                .collect(),
            None => Vec::new(),
        }
    }
}

/// Picks the AI's next move, breaking ties uniformly at random.
///
/// Returns `None` only when the board has no empty square.
#[instrument(skip(board, rng))]
pub fn select_move<R: Rng + ?Sized>(board: &Board, ai: Player, rng: &mut R) -> Option<usize> {
    let evaluation = MoveEvaluation::evaluate(board, ai);
    choose(&evaluation, board, rng)
}

/// Picks among the best candidates of an existing evaluation.
pub fn choose<R: Rng + ?Sized>(
    evaluation: &MoveEvaluation,
    board: &Board,
    rng: &mut R,
) -> Option<usize> {
    let candidates = evaluation.candidates(board);
    let choice = candidates.choose(rng).copied();
    debug!(?candidates, ?choice, "AI candidates");
    choice
}
