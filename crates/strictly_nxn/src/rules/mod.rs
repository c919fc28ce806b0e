//! Game rules for N×N tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Scoring is the shared
//! primitive; win detection and the AI both build on it.

pub mod draw;
pub mod scoring;
pub mod win;

pub use draw::{is_draw, is_full};
pub use scoring::{compute_all_scores, compute_score, run_length};
pub use win::{check_winner, is_win};
