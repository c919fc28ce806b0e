//! Print-based rendering of the board and numeric grids.

use std::fmt::Display;
use std::io::{self, Write};
use strictly_nxn::{Board, MoveEvaluation};

/// Writes `cells` as `size` rows of `|`-separated values.
///
/// Cells are right-aligned to the widest entry so multi-digit grids line up.
pub fn render_grid<W, T>(out: &mut W, cells: &[T], size: usize) -> io::Result<()>
where
    W: Write + ?Sized,
    T: Display,
{
    let texts: Vec<String> = cells.iter().map(ToString::to_string).collect();
    let width = texts.iter().map(String::len).max().unwrap_or(1);
    for row in texts.chunks(size.max(1)) {
        let line = row
            .iter()
            .map(|t| format!("{t:>width$}"))
            .collect::<Vec<_>>()
            .join("|");
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Writes the current board with `X`, `O` and blank markers.
pub fn render_board<W: Write + ?Sized>(out: &mut W, board: &Board) -> io::Result<()> {
    writeln!(out, "Board:")?;
    let markers: Vec<char> = board.squares().iter().map(|s| s.marker()).collect();
    render_grid(out, &markers, board.size())
}

/// Writes the 1..=N² key that maps numbers to squares.
pub fn render_movement_key<W: Write + ?Sized>(out: &mut W, size: usize) -> io::Result<()> {
    writeln!(out, "Movement Key:")?;
    let keys: Vec<usize> = (1..=size * size).collect();
    render_grid(out, &keys, size)
}

/// Writes the AI's gain, risk and combined score grids.
pub fn render_evaluation<W: Write + ?Sized>(
    out: &mut W,
    evaluation: &MoveEvaluation,
    size: usize,
) -> io::Result<()> {
    writeln!(out, "Potential gain:")?;
    render_grid(out, evaluation.gain(), size)?;
    writeln!(out, "Potential risk:")?;
    render_grid(out, evaluation.risk(), size)?;
    writeln!(out, "Move scores:")?;
    render_grid(out, evaluation.scores(), size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_nxn::Player;

    fn rendered(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_board_rows() {
        let mut board = Board::new(3).unwrap();
        board.apply_move(1, Player::X).unwrap();
        board.apply_move(5, Player::O).unwrap();
        let text = rendered(|out| render_board(out, &board));
        assert_eq!(text, "Board:\nX| | \n |O| \n | | \n");
    }

    #[test]
    fn test_movement_key_three() {
        let text = rendered(|out| render_movement_key(out, 3));
        assert_eq!(text, "Movement Key:\n1|2|3\n4|5|6\n7|8|9\n");
    }

    #[test]
    fn test_movement_key_pads_wide_numbers() {
        let text = rendered(|out| render_movement_key(out, 4));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], " 1| 2| 3| 4");
        assert_eq!(lines[4], "13|14|15|16");
    }

    #[test]
    fn test_evaluation_sections() {
        let board = Board::new(2).unwrap();
        let eval = MoveEvaluation::evaluate(&board, Player::O);
        let text = rendered(|out| render_evaluation(out, &eval, 2));
        assert_eq!(
            text,
            "Potential gain:\n1|1\n1|1\nPotential risk:\n1|1\n1|1\nMove scores:\n2|2\n2|2\n"
        );
    }
}
