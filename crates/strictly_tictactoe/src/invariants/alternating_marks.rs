//! Alternating marks invariant: X, O, X, O, ...

use super::super::{GameState, Mark};
use super::Invariant;

/// Invariant: snapshot `n` holds `ceil(n / 2)` X marks and `floor(n / 2)`
/// O marks.
///
/// Snapshot 0 is therefore empty, X always places on an even mark count,
/// and the turn derived from the cursor agrees with the board on display.
pub struct AlternatingMarksInvariant;

impl Invariant<GameState> for AlternatingMarksInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().iter().enumerate().all(|(n, board)| {
            let count = |mark: Mark| board.cells().iter().filter(|c| c.mark() == Some(mark)).count();
            count(Mark::X) == n.div_ceil(2) && count(Mark::O) == n / 2
        })
    }

    fn description() -> &'static str {
        "Marks alternate starting with X"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Position};

    #[test]
    fn test_holds_for_played_game() {
        let game = GameState::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::BottomRight,
        ])
        .unwrap();
        assert!(AlternatingMarksInvariant::holds(&game));
        assert_eq!(game.current_turn(), Mark::O);
    }

    #[test]
    fn test_o_first_violates() {
        let board = Board::new().with_mark(Position::Center, Mark::O);
        let game = GameState::from_parts(vec![Board::new(), board], 1);
        assert!(!AlternatingMarksInvariant::holds(&game));
    }

    #[test]
    fn test_non_empty_start_violates() {
        let start = Board::new().with_mark(Position::Center, Mark::X);
        let game = GameState::from_parts(vec![start], 0);
        assert!(!AlternatingMarksInvariant::holds(&game));
    }

    #[test]
    fn test_same_mark_twice_violates() {
        let first = Board::new().with_mark(Position::TopLeft, Mark::X);
        let second = first.with_mark(Position::Center, Mark::X);
        let game = GameState::from_parts(vec![Board::new(), first, second], 2);
        assert!(!AlternatingMarksInvariant::holds(&game));
    }
}
