//! Grid coordinates and the direction table used for line scanning.

use derive_new::new;
use serde::{Deserialize, Serialize};

/// A 0-based `(row, col)` coordinate on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Position {
    /// Row, counted from the top.
    pub row: usize,
    /// Column, counted from the left.
    pub col: usize,
}

/// Unit step across the grid. Never `(0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    /// Row delta: -1 (up), 0 or 1 (down).
    pub d_row: i8,
    /// Column delta: -1 (left), 0 or 1 (right).
    pub d_col: i8,
}

impl Direction {
    const fn new(d_row: i8, d_col: i8) -> Self {
        Self { d_row, d_col }
    }

    /// The opposite direction along the same axis.
    pub const fn reversed(self) -> Self {
        Self::new(-self.d_row, -self.d_col)
    }

    /// Number of steps from `pos` before leaving a `size`×`size` board.
    ///
    /// Derived from the distance to the edge each component points at;
    /// diagonals are bounded by the nearer of the two edges.
    pub fn steps_to_edge(self, pos: Position, size: usize) -> usize {
        let last = size - 1;
        let along = |delta: i8, at: usize| match delta {
            1 => Some(last - at),
            -1 => Some(at),
            _ => None,
        };
        match (along(self.d_row, pos.row), along(self.d_col, pos.col)) {
            (Some(rows), Some(cols)) => rows.min(cols),
            (Some(rows), None) => rows,
            (None, Some(cols)) => cols,
            (None, None) => 0,
        }
    }

    /// Position `steps` cells away from `pos`.
    ///
    /// Callers keep `steps` within [`Direction::steps_to_edge`].
    pub fn walk(self, pos: Position, steps: usize) -> Position {
        let shift = |at: usize, delta: i8| match delta {
            1 => at + steps,
            -1 => at - steps,
            _ => at,
        };
        Position::new(shift(pos.row, self.d_row), shift(pos.col, self.d_col))
    }
}

/// One of the four lines through a cell, named by its forward direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Axis {
    /// Short label used in trace output.
    pub name: &'static str,
    /// Forward direction; the backward half is its reverse.
    pub forward: Direction,
}

impl Axis {
    /// Both directions of the axis.
    pub const fn directions(self) -> [Direction; 2] {
        [self.forward, self.forward.reversed()]
    }
}

/// The 8 compass directions, paired into 4 axes.
pub const AXES: [Axis; 4] = [
    Axis {
        name: "up-left/down-right",
        forward: Direction::new(-1, -1),
    },
    Axis {
        name: "up-right/down-left",
        forward: Direction::new(-1, 1),
    },
    Axis {
        name: "left/right",
        forward: Direction::new(0, -1),
    },
    Axis {
        name: "up/down",
        forward: Direction::new(-1, 0),
    },
];
