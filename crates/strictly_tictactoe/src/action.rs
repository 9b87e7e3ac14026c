//! First-class move type.
//!
//! The timeline stores whole boards, not moves. A [`Move`] is recovered by
//! comparing two consecutive snapshots, which is how the history list
//! names each entry.

use super::{Board, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }

    /// Recovers the move that turns `before` into `after`.
    ///
    /// Returns `None` unless exactly one cell went from empty to marked.
    #[instrument(level = "trace")]
    pub fn between(before: &Board, after: &Board) -> Option<Self> {
        match before.changed_positions(after).as_slice() {
            [position] if before.is_empty(*position) => after
                .get(*position)
                .mark()
                .map(|mark| Self::new(mark, *position)),
            _ => None,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}
