//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Mark, Position};
use tracing::instrument;

/// The eight winning triples, in the order they are checked:
/// rows top to bottom, columns left to right, then the two diagonals.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first complete line in [`WINNING_LINES`] order.
///
/// The fixed order only matters for boards with two complete lines of
/// different marks, which legal play never produces.
#[instrument(level = "trace")]
pub fn winning_line(board: &Board) -> Option<[Position; 3]> {
    WINNING_LINES.iter().copied().find(|[a, b, c]| match board.get(*a) {
        Cell::Marked(mark) => board.get(*b) == Cell::Marked(mark) && board.get(*c) == Cell::Marked(mark),
        Cell::Empty => false,
    })
}

/// Checks if there is a winner on the board.
///
/// Returns the mark occupying the first complete line, `None` otherwise.
#[instrument(level = "debug")]
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).and_then(|[first, _, _]| board.get(first).mark())
}
