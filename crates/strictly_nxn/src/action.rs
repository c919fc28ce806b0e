//! First-class move type.
//!
//! Moves are domain events recorded in game history, independent of how
//! they were chosen.

use crate::types::Player;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A player placing their mark at a 1-based board index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Target square (1-based).
    pub index: usize,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.index)
    }
}
