//! Reading and validating move requests typed by a human.

use derive_more::{Display, Error};
use std::io::{self, BufRead, Write};
use std::num::{IntErrorKind, ParseIntError};
use strictly_nxn::Board;
use tracing::{debug, instrument, warn};

/// Why a move request was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// Text is not an integer.
    #[display("Invalid movement key.")]
    Malformed(#[error(not(source))] String),

    /// Integer outside `1..=num_positions`, kept as typed.
    #[display("Movement key out of range.")]
    OutOfRange(#[error(not(source))] String),

    /// Square already holds a piece.
    #[display("Position already taken.")]
    CellOccupied(#[error(not(source))] usize),

    /// Input stream ended before a legal move was read.
    #[display("Input closed before a move was entered")]
    Closed,
}

/// Parses one line of input as a legal move index on `board`.
#[instrument(skip(board))]
pub fn parse_move(text: &str, board: &Board) -> Result<usize, InputError> {
    let trimmed = text.trim();
    let value: i64 = trimmed.parse().map_err(|e: ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            InputError::OutOfRange(trimmed.to_string())
        }
        _ => InputError::Malformed(trimmed.to_string()),
    })?;

    let index = usize::try_from(value)
        .ok()
        .filter(|&i| board.is_valid_index(i))
        .ok_or_else(|| InputError::OutOfRange(trimmed.to_string()))?;

    if !board.is_legal_move(index) {
        return Err(InputError::CellOccupied(index));
    }
    Ok(index)
}

/// Prompts until a legal move is entered.
///
/// Each rejected request prints the reason and asks again, including lines
/// that are not valid UTF-8. Only the end of input or a failed read stops
/// the loop.
pub fn prompt_move<R, W>(input: &mut R, out: &mut W, board: &Board) -> Result<usize, PromptError>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    let mut line = Vec::new();
    loop {
        write!(out, "Where to? ")?;
        out.flush()?;

        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            writeln!(out)?;
            return Err(InputError::Closed.into());
        }

        let parsed = match std::str::from_utf8(&line) {
            Ok(text) => parse_move(text, board),
            Err(_) => Err(InputError::Malformed(
                String::from_utf8_lossy(&line).trim().to_string(),
            )),
        };

        match parsed {
            Ok(index) => {
                debug!(index, "move accepted");
                return Ok(index);
            }
            Err(e) => {
                warn!(error = ?e, "move rejected");
                writeln!(out, "{e}")?;
            }
        }
    }
}

/// Failure while prompting: the input itself or the console.
#[derive(Debug, Display, derive_more::From, Error)]
pub enum PromptError {
    /// The request could not be satisfied.
    #[display("{}", _0)]
    Input(InputError),
    /// Reading or writing the console failed.
    #[display("Console I/O failed: {}", _0)]
    Io(io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use strictly_nxn::Player;

    #[test]
    fn test_parse_accepts_padded_number() {
        let board = Board::new(3).unwrap();
        assert_eq!(parse_move(" 7 \n", &board), Ok(7));
    }

    #[test]
    fn test_parse_error_kinds() {
        let mut board = Board::new(3).unwrap();
        board.apply_move(5, Player::X).unwrap();

        assert_eq!(
            parse_move("five", &board),
            Err(InputError::Malformed("five".to_string()))
        );
        assert_eq!(parse_move("", &board), Err(InputError::Malformed(String::new())));
        assert_eq!(parse_move("0", &board), Err(InputError::OutOfRange("0".to_string())));
        assert_eq!(parse_move("-3", &board), Err(InputError::OutOfRange("-3".to_string())));
        assert_eq!(parse_move("10", &board), Err(InputError::OutOfRange("10".to_string())));
        assert_eq!(parse_move("5", &board), Err(InputError::CellOccupied(5)));
    }

    #[test]
    fn test_parse_huge_integers_out_of_range() {
        let board = Board::new(3).unwrap();
        for text in ["99999999999999999999", "-99999999999999999999", "+99999999999999999999"] {
            assert_eq!(
                parse_move(text, &board),
                Err(InputError::OutOfRange(text.to_string()))
            );
        }
        assert_eq!(
            parse_move("9999999999999999999x", &board),
            Err(InputError::Malformed("9999999999999999999x".to_string()))
        );
    }

    #[test]
    fn test_prompt_reprompts_on_invalid_utf8() {
        let board = Board::new(3).unwrap();
        let mut input = Cursor::new(b"\xff\xfe\n5\n".to_vec());
        let mut out = Vec::new();

        let index = prompt_move(&mut input, &mut out, &board).unwrap();
        assert_eq!(index, 5);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Invalid movement key."));
        assert_eq!(text.matches("Where to? ").count(), 2);
    }

    #[test]
    fn test_prompt_retries_until_legal() {
        let mut board = Board::new(3).unwrap();
        board.apply_move(1, Player::O).unwrap();
        let mut input = Cursor::new("abc\n12\n1\n4\n");
        let mut out = Vec::new();

        let index = prompt_move(&mut input, &mut out, &board).unwrap();
        assert_eq!(index, 4);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Invalid movement key."));
        assert!(text.contains("Movement key out of range."));
        assert!(text.contains("Position already taken."));
        assert_eq!(text.matches("Where to? ").count(), 4);
    }

    #[test]
    fn test_prompt_end_of_input() {
        let board = Board::new(3).unwrap();
        let mut input = Cursor::new("nope\n");
        let mut out = Vec::new();
        let err = prompt_move(&mut input, &mut out, &board).unwrap_err();
        assert!(matches!(err, PromptError::Input(InputError::Closed)));
    }
}
