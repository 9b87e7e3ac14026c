//! The game timeline: every board snapshot plus the one on display.

use super::contracts::{Contract, PlayContract};
use super::error::{RejectReason, Rejected};
use super::invariants::{InvariantSet, TimelineInvariants};
use super::{Board, Mark, Move, Position, Status, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game with full move history.
///
/// `history[0]` is the empty board and every later entry adds exactly one
/// mark to its predecessor. `current` names the snapshot on display; the
/// mark to move is derived from it (X on even, O on odd), so jumping back
/// in time also rewinds whose turn it is.
///
/// Playing from a past snapshot discards every snapshot after it before the
/// new board is appended.
///
/// Deserializing checks the timeline invariants, so a saved game that could
/// not have been played is refused instead of loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SavedTimeline")]
pub struct GameState {
    history: Vec<Board>,
    current: usize,
}

/// Unchecked wire form of a [`GameState`].
#[derive(Deserialize)]
struct SavedTimeline {
    history: Vec<Board>,
    current: usize,
}

impl TryFrom<SavedTimeline> for GameState {
    type Error = Rejected;

    #[instrument(skip(saved), fields(len = saved.history.len(), current = saved.current))]
    fn try_from(saved: SavedTimeline) -> Result<Self, Self::Error> {
        let game = Self {
            history: saved.history,
            current: saved.current,
        };
        TimelineInvariants::check_all(&game).map_err(|violations| {
            for v in &violations {
                warn!(description = v.description, "Saved timeline rejected");
            }
            let first = violations
                .first()
                .map(|v| v.description)
                .unwrap_or("unknown invariant");
            Rejected::new(RejectReason::InvariantViolation(first))
        })?;
        Ok(game)
    }
}

/// One row of the history list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Index into the history.
    pub index: usize,
    /// "Go to game start" for index 0, "Go to move #n" otherwise.
    pub label: String,
    /// True for the snapshot on display.
    pub is_current: bool,
    /// The move that produced this snapshot; `None` for the game start.
    pub played: Option<Move>,
}

impl GameState {
    /// Creates a new game holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current: 0,
        }
    }

    /// Plays the given positions in order from a fresh game.
    #[instrument]
    pub fn replay(positions: &[Position]) -> Result<Self, Rejected> {
        let mut game = Self::new();
        for pos in positions {
            game.play(*pos)?;
        }
        Ok(game)
    }

    /// Places the current turn's mark at `pos`.
    ///
    /// Rejected with [`RejectReason::GameOver`] when the displayed board
    /// already has a winner, or [`RejectReason::AlreadyOccupied`] when the
    /// cell is taken. A rejected play leaves the game untouched.
    #[instrument(skip(self), fields(current = self.current, len = self.history.len()))]
    pub fn play(&mut self, pos: Position) -> Result<Board, Rejected> {
        PlayContract::pre(self, &pos).inspect_err(|e| debug!(reason = %e.reason, "Play rejected"))?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mark = self.current_turn();
        let next = self.current_board().with_mark(pos, mark);
        if !self.is_at_latest() {
            info!(
                discarded = self.history.len() - self.current - 1,
                "Branching from past move"
            );
        }
        self.history.truncate(self.current + 1);
        self.history.push(next);
        self.current = self.history.len() - 1;

        #[cfg(debug_assertions)]
        if let Err(e) = PlayContract::post(&before, self) {
            *self = before;
            return Err(e);
        }

        debug!(%mark, position = %pos, moves = self.current, "Move played");
        Ok(next)
    }

    /// Displays the snapshot at `move_index`, leaving history intact.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, move_index: usize) -> Result<Board, Rejected> {
        let Some(board) = self.history.get(move_index).copied() else {
            debug!("Jump out of range");
            return Err(Rejected::new(RejectReason::OutOfRange {
                requested: move_index,
                len: self.history.len(),
            }));
        };
        self.current = move_index;
        Ok(board)
    }

    /// The snapshot on display.
    pub fn current_board(&self) -> Board {
        self.history[self.current]
    }

    /// Mark to move on the displayed snapshot.
    pub fn current_turn(&self) -> Mark {
        Mark::for_move(self.current)
    }

    /// Index of the snapshot on display.
    pub fn current_move(&self) -> usize {
        self.current
    }

    /// Winner of the displayed board, or whose turn it is.
    #[instrument(skip(self), fields(current = self.current))]
    pub fn status(&self) -> Status {
        match rules::check_winner(&self.current_board()) {
            Some(mark) => Status::Winner(mark),
            None => Status::InProgress(self.current_turn()),
        }
    }

    /// Number of snapshots, counting the game start.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always false: the game start is never removed.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// True when the displayed snapshot is the newest one.
    pub fn is_at_latest(&self) -> bool {
        self.current + 1 == self.history.len()
    }

    /// All snapshots, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Rows for a history list, one per snapshot.
    #[instrument(skip(self))]
    pub fn entries(&self) -> Vec<HistoryEntry> {
        self.history
            .iter()
            .enumerate()
            .map(|(index, board)| HistoryEntry {
                index,
                label: if index == 0 {
                    "Go to game start".to_string()
                } else {
                    format!("Go to move #{}", index)
                },
                is_current: index == self.current,
                played: index
                    .checked_sub(1)
                    .and_then(|prev| Move::between(&self.history[prev], board)),
            })
            .collect()
    }

    /// Builds a timeline without any checks, for exercising invariants.
    #[cfg(test)]
    pub(crate) fn from_parts(history: Vec<Board>, current: usize) -> Self {
        Self { history, current }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn test_new_game_has_single_empty_snapshot() {
        let game = GameState::new();
        assert_eq!(game.len(), 1);
        assert_eq!(game.current_move(), 0);
        assert_eq!(game.current_board(), Board::new());
        assert_eq!(game.status(), Status::InProgress(Mark::X));
    }

    #[test]
    fn test_play_appends_and_advances() {
        let mut game = GameState::new();
        let board = game.play(Position::Center).unwrap();
        assert_eq!(board.get(Position::Center), Cell::Marked(Mark::X));
        assert_eq!(game.len(), 2);
        assert_eq!(game.current_move(), 1);
        assert_eq!(game.current_turn(), Mark::O);
    }

    #[test]
    fn test_occupied_play_is_noop() {
        let mut game = GameState::replay(&[Position::Center]).unwrap();
        let before = game.clone();
        let err = game.play(Position::Center).unwrap_err();
        assert_eq!(err.reason(), RejectReason::AlreadyOccupied(Position::Center));
        assert_eq!(game, before);
    }

    #[test]
    fn test_play_after_win_is_noop() {
        let mut game = GameState::replay(&[
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ])
        .unwrap();
        assert_eq!(game.status(), Status::Winner(Mark::X));

        let before = game.clone();
        let err = game.play(Position::BottomRight).unwrap_err();
        assert_eq!(err.reason(), RejectReason::GameOver(Mark::X));
        assert_eq!(game, before);
    }

    #[test]
    fn test_game_over_checked_before_occupancy() {
        let mut game = GameState::replay(&[
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ])
        .unwrap();
        let err = game.play(Position::TopLeft).unwrap_err();
        assert_eq!(err.reason(), RejectReason::GameOver(Mark::X));
    }

    #[test]
    fn test_jump_keeps_history() {
        let mut game = GameState::replay(&[Position::TopLeft, Position::Center]).unwrap();
        let board = game.jump_to(1).unwrap();
        assert_eq!(board, game.history()[1]);
        assert_eq!(game.len(), 3);
        assert_eq!(game.current_turn(), Mark::O);
        assert!(!game.is_at_latest());
    }

    #[test]
    fn test_jump_out_of_range_is_noop() {
        let mut game = GameState::replay(&[Position::TopLeft]).unwrap();
        let before = game.clone();
        let err = game.jump_to(2).unwrap_err();
        assert_eq!(err.reason(), RejectReason::OutOfRange { requested: 2, len: 2 });
        assert_eq!(game, before);
    }

    #[test]
    fn test_play_from_past_truncates_future() {
        let mut game = GameState::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::BottomRight,
            Position::TopRight,
        ])
        .unwrap();
        game.jump_to(1).unwrap();
        game.play(Position::BottomLeft).unwrap();

        assert_eq!(game.len(), 3);
        assert_eq!(game.current_move(), 2);
        assert_eq!(game.current_board().get(Position::BottomLeft), Cell::Marked(Mark::O));
        assert!(game.current_board().is_empty(Position::Center));
    }

    #[test]
    fn test_jump_to_won_board_and_back_resumes_play() {
        let mut game = GameState::replay(&[
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ])
        .unwrap();
        game.jump_to(4).unwrap();
        assert_eq!(game.status(), Status::InProgress(Mark::X));
        game.play(Position::BottomRight).unwrap();
        assert_eq!(game.len(), 6);
        assert_eq!(game.status(), Status::InProgress(Mark::O));
    }

    #[test]
    fn test_entries_label_and_moves() {
        let mut game = GameState::replay(&[Position::Center, Position::TopLeft]).unwrap();
        game.jump_to(1).unwrap();
        let entries = game.entries();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].label, "Go to game start");
        assert_eq!(entries[0].played, None);
        assert_eq!(entries[2].label, "Go to move #2");
        assert_eq!(entries[2].played, Some(Move::new(Mark::O, Position::TopLeft)));
        assert!(entries[1].is_current);
        assert!(!entries[2].is_current);
    }
}
