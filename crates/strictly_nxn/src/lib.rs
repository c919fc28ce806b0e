//! Pure N×N tic-tac-toe logic.
//!
//! # Architecture
//!
//! - [`Board`]: flat row-major squares with 1-based move indices
//! - [`rules`]: line scoring, win and draw detection
//! - [`ai`]: single-ply gain/risk heuristic built on line scoring
//! - [`Game`]: turn order, status and history on top of a board
//!
//! # Example
//!
//! ```
//! use strictly_nxn::{Game, GameStatus, Player};
//!
//! let mut game = Game::new(3, Player::X).unwrap();
//! for index in [1, 4, 2, 5] {
//!     game.make_move(index).unwrap();
//! }
//! assert_eq!(game.make_move(3).unwrap(), GameStatus::Won(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod ai;
mod action;
mod error;
mod game;
mod position;
pub mod rules;
mod types;

pub use action::Move;
pub use ai::MoveEvaluation;
pub use error::{BoardError, BoardErrorKind};
pub use game::{Game, GameStatus};
pub use position::{AXES, Axis, Direction, Position};
pub use types::{Board, Player, Square};
