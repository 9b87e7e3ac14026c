//! Cursor invariant: the displayed snapshot exists.

use super::super::GameState;
use super::Invariant;

/// Invariant: `0 <= current_move < len(history)`, and history is never empty.
pub struct CursorInRangeInvariant;

impl Invariant<GameState> for CursorInRangeInvariant {
    fn holds(game: &GameState) -> bool {
        !game.history().is_empty() && game.current_move() < game.history().len()
    }

    fn description() -> &'static str {
        "Current move index points into history"
    }
}
