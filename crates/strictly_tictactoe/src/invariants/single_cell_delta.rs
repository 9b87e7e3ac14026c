//! Single-cell delta invariant: each snapshot adds exactly one mark.

use super::super::{GameState, Move};
use super::Invariant;

/// Invariant: `history[n]` differs from `history[n - 1]` in exactly one
/// cell, and that cell was empty before.
///
/// Marks are never erased or overwritten, and no move places two.
pub struct SingleCellDeltaInvariant;

impl Invariant<GameState> for SingleCellDeltaInvariant {
    fn holds(game: &GameState) -> bool {
        game.history()
            .windows(2)
            .all(|pair| Move::between(&pair[0], &pair[1]).is_some())
    }

    fn description() -> &'static str {
        "Consecutive snapshots differ by exactly one new mark"
    }
}
