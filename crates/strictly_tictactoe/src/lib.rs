//! Pure tic-tac-toe game logic with history navigation.
//!
//! A [`GameState`] keeps every board snapshot of a session and a cursor
//! naming the one on display. Playing from a past snapshot branches the
//! timeline: everything after the cursor is discarded before the new board
//! is appended. [`rules::check_winner`] decides whether a board is won.
//!
//! ```
//! use strictly_tictactoe::{GameState, Mark, Position, Status};
//!
//! let mut game = GameState::new();
//! for pos in [Position::TopLeft, Position::TopCenter, Position::Center,
//!             Position::TopRight, Position::BottomRight] {
//!     game.play(pos).unwrap();
//! }
//! assert_eq!(game.status(), Status::Winner(Mark::X));
//!
//! game.jump_to(2).unwrap();
//! assert_eq!(game.status(), Status::InProgress(Mark::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod game;
mod position;
mod status;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::Move;
pub use error::{RejectReason, Rejected};
pub use game::{GameState, HistoryEntry};
pub use position::Position;
pub use status::Status;
pub use types::{Board, Cell, Mark};
