//! Contract-based validation for plays.
//!
//! Contracts define correctness through preconditions and postconditions,
//! Hoare-style: {P} action {Q}. The timeline checks preconditions on every
//! play no matter what the caller already disabled.

use super::error::{RejectReason, Rejected};
use super::invariants::{InvariantSet, TimelineInvariants};
use super::{GameState, Position, rules};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Rejected>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Rejected>;
}

// ─────────────────────────────────────────────────────────────
//  Play Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the displayed board has no winner.
pub struct NoWinnerYet;

impl NoWinnerYet {
    /// Fails with [`RejectReason::GameOver`] once a line is complete.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), Rejected> {
        match rules::check_winner(&game.current_board()) {
            Some(mark) => Err(Rejected::new(RejectReason::GameOver(mark))),
            None => Ok(()),
        }
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with [`RejectReason::AlreadyOccupied`] for a marked cell.
    #[instrument(skip(game))]
    pub fn check(pos: Position, game: &GameState) -> Result<(), Rejected> {
        if game.current_board().is_empty(pos) {
            Ok(())
        } else {
            Err(Rejected::new(RejectReason::AlreadyOccupied(pos)))
        }
    }
}

/// Composite precondition: no winner yet, then an empty cell.
pub struct LegalPlay;

impl LegalPlay {
    /// Validates all preconditions for a play.
    #[instrument(skip(game))]
    pub fn check(pos: Position, game: &GameState) -> Result<(), Rejected> {
        NoWinnerYet::check(game)?;
        CellIsEmpty::check(pos, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Play Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for plays.
///
/// Preconditions:
/// - No winner on the displayed board
/// - Target cell is empty
///
/// Postconditions:
/// - History ends just after the old cursor plus the new snapshot
/// - All timeline invariants still hold
pub struct PlayContract;

impl Contract<GameState, Position> for PlayContract {
    fn pre(game: &GameState, pos: &Position) -> Result<(), Rejected> {
        LegalPlay::check(*pos, game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), Rejected> {
        if after.len() != before.current_move() + 2 || !after.is_at_latest() {
            warn!(
                before_move = before.current_move(),
                after_len = after.len(),
                "History not truncated at cursor"
            );
            return Err(Rejected::new(RejectReason::InvariantViolation(
                "History ends one snapshot past the previous cursor",
            )));
        }

        TimelineInvariants::check_all(after).map_err(|violations| {
            for v in &violations {
                warn!(description = v.description, "Invariant violated");
            }
            let first = violations
                .first()
                .map(|v| v.description)
                .unwrap_or("unknown invariant");
            Rejected::new(RejectReason::InvariantViolation(first))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Mark};

    #[test]
    fn test_precondition_empty_cell() {
        let game = GameState::new();
        assert!(PlayContract::pre(&game, &Position::Center).is_ok());
    }

    #[test]
    fn test_precondition_occupied_cell() {
        let game = GameState::replay(&[Position::Center]).unwrap();
        let err = PlayContract::pre(&game, &Position::Center).unwrap_err();
        assert_eq!(err.reason, RejectReason::AlreadyOccupied(Position::Center));
    }

    #[test]
    fn test_precondition_winner_present() {
        let game = GameState::replay(&[
            Position::TopLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
            Position::BottomRight,
        ])
        .unwrap();
        assert!(matches!(
            PlayContract::pre(&game, &Position::BottomLeft).map_err(|e| e.reason),
            Err(RejectReason::GameOver(Mark::X))
        ));
    }

    #[test]
    fn test_postcondition_holds_after_play() {
        let before = GameState::new();
        let mut after = before.clone();
        after.play(Position::Center).unwrap();
        assert!(PlayContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_missing_truncation() {
        let before = GameState::replay(&[Position::TopLeft, Position::Center]).unwrap();
        let mut rewound = before.clone();
        rewound.jump_to(0).unwrap();

        // Appending without truncating keeps the stale future around.
        let mut history = before.history().to_vec();
        history.push(Board::new().with_mark(Position::BottomRight, Mark::X));
        let after = GameState::from_parts(history, 3);

        assert!(PlayContract::post(&rewound, &after).is_err());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = GameState::new();
        let corrupted = Board::new()
            .with_mark(Position::Center, Mark::X)
            .with_mark(Position::TopLeft, Mark::O);
        let after = GameState::from_parts(vec![Board::new(), corrupted], 1);

        let err = PlayContract::post(&before, &after).unwrap_err();
        assert!(matches!(err.reason, RejectReason::InvariantViolation(_)));
    }
}
