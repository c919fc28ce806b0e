//! Console input and print-based rendering.

mod input;
mod render;

pub use input::{InputError, PromptError, parse_move, prompt_move};
pub use render::{render_board, render_evaluation, render_grid, render_movement_key};
