//! Game status as shown to players.

use super::Mark;
use serde::{Deserialize, Serialize};

/// Status of the currently displayed board.
///
/// A full board without a line stays [`Status::InProgress`]; draws are not
/// modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// A line is complete.
    Winner(Mark),
    /// No line yet; holds the mark that moves next.
    InProgress(Mark),
}

impl Status {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Status::Winner(mark) => Some(*mark),
            Status::InProgress(_) => None,
        }
    }

    /// True once a winner exists.
    pub fn is_over(&self) -> bool {
        matches!(self, Status::Winner(_))
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Winner(mark) => write!(f, "Winner: {}", mark),
            Status::InProgress(mark) => write!(f, "Next player: {}", mark),
        }
    }
}
