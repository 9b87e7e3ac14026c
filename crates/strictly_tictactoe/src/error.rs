//! Rejections raised by the game timeline.

use super::{Mark, Position};
use derive_more::{Display, Error};
use tracing::instrument;

/// Why a play or jump was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RejectReason {
    /// The target cell already holds a mark.
    #[display("{} is already occupied", _0)]
    AlreadyOccupied(Position),

    /// The displayed board already has a winner.
    #[display("Game is already over ({} won)", _0)]
    GameOver(Mark),

    /// The requested history index does not exist.
    #[display("Move #{} is out of range (history has {} entries)", requested, len)]
    OutOfRange {
        /// Index the caller asked for.
        requested: usize,
        /// History length at the time of the request.
        len: usize,
    },

    /// A postcondition check failed after a play.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(&'static str),
}

/// A refused operation, with the location that raised it.
///
/// Rejections never change game state.
#[derive(Debug, Clone, Display, Error)]
#[display("Rejected: {} at {}:{}", reason, file, line)]
pub struct Rejected {
    /// Why the operation was refused.
    pub reason: RejectReason,
    /// Line number where the rejection was raised.
    pub line: u32,
    /// Source file where the rejection was raised.
    pub file: &'static str,
}

impl Rejected {
    /// Creates a rejection tagged with the caller's location.
    #[track_caller]
    #[instrument(level = "debug")]
    pub fn new(reason: RejectReason) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            reason,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the reason.
    pub fn reason(&self) -> RejectReason {
        self.reason
    }
}

impl From<RejectReason> for Rejected {
    #[track_caller]
    fn from(reason: RejectReason) -> Self {
        Self::new(reason)
    }
}
