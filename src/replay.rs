//! Non-interactive play: run a list of steps and report the result.
//!
//! A step is either a cell to play (`0`-`8` or a label like `center`) or a
//! jump back in history (`@n`). Rejected steps are recorded and skipped,
//! exactly as the interactive client would ignore them.

use derive_more::{Display, Error};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use strictly_tictactoe::{Board, GameState, HistoryEntry, Position, Status};
use tracing::{debug, info, instrument};

/// One scripted action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Step {
    /// Play the current turn's mark.
    #[display("play {}", position)]
    Play {
        /// Target cell.
        position: Position,
    },
    /// Display an earlier snapshot.
    #[display("jump to move #{}", move_index)]
    Jump {
        /// History index to show.
        move_index: usize,
    },
}

/// A step that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid step '{}': expected a cell (0-8 or a name like 'center') or '@n' to jump", input)]
pub struct StepParseError {
    /// The offending text.
    pub input: String,
}

impl FromStr for Step {
    type Err = StepParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || StepParseError { input: s.to_string() };

        if let Some(index) = s.trim().strip_prefix('@') {
            return index
                .parse()
                .map(|move_index| Step::Jump { move_index })
                .map_err(|_| invalid());
        }

        Position::parse(s)
            .map(|position| Step::Play { position })
            .ok_or_else(invalid)
    }
}

/// What happened to one step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepOutcome {
    /// The step as given.
    pub step: Step,
    /// Why it was refused, if it was.
    pub rejected: Option<String>,
}

/// Final state after a replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    /// Every step with its outcome, in order.
    pub steps: Vec<StepOutcome>,
    /// Snapshot on display at the end.
    pub board: Board,
    /// Status of that snapshot.
    pub status: Status,
    /// Index of that snapshot.
    pub current_move: usize,
    /// History list as the interactive client would show it.
    pub history: Vec<HistoryEntry>,
}

impl ReplayReport {
    /// Steps that were refused.
    pub fn rejections(&self) -> impl Iterator<Item = (usize, &StepOutcome)> {
        self.steps.iter().enumerate().filter(|(_, o)| o.rejected.is_some())
    }
}

/// Runs `steps` against a fresh game.
#[instrument(skip(steps), fields(count = steps.len()))]
pub fn run(steps: &[Step]) -> ReplayReport {
    let mut game = GameState::new();

    let outcomes = steps
        .iter()
        .map(|step| {
            let result = match *step {
                Step::Play { position } => game.play(position),
                Step::Jump { move_index } => game.jump_to(move_index),
            };
            let rejected = result.err().map(|e| e.reason.to_string());
            debug!(%step, ?rejected, "Step applied");
            StepOutcome { step: *step, rejected }
        })
        .collect();

    let report = ReplayReport {
        steps: outcomes,
        board: game.current_board(),
        status: game.status(),
        current_move: game.current_move(),
        history: game.entries(),
    };
    info!(status = %report.status, moves = report.history.len() - 1, "Replay finished");
    report
}

/// Plain-text rendering: board, status, history, then any rejections.
impl fmt::Display for ReplayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\n", self.board)?;
        writeln!(f, "{}", self.status)?;

        writeln!(f, "\nHistory:")?;
        for entry in &self.history {
            let marker = if entry.is_current { '*' } else { ' ' };
            match entry.played {
                Some(mv) => writeln!(f, "{} {} ({})", marker, entry.label, mv)?,
                None => writeln!(f, "{} {}", marker, entry.label)?,
            }
        }

        let mut rejections = self.rejections().peekable();
        if rejections.peek().is_some() {
            writeln!(f, "\nRejected:")?;
            for (i, outcome) in rejections {
                let reason = outcome.rejected.as_deref().unwrap_or_default();
                writeln!(f, "  step {} ({}): {}", i + 1, outcome.step, reason)?;
            }
        }
        Ok(())
    }
}
