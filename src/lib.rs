//! Strictly Rewind - terminal tic-tac-toe with time travel.
//!
//! The game rules and history live in [`strictly_tictactoe`]; this crate is
//! the presentation layer around them.
//!
//! # Architecture
//!
//! - **App**: owns the session's `GameState` and turns key presses into
//!   plays, jumps and redraw requests
//! - **UI**: stateless ratatui rendering of an `App`
//! - **Replay**: non-interactive runs of scripted steps
//! - **Config**: optional TOML settings

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod config;
mod input;

pub mod cli;
pub mod replay;
pub mod tui;
pub mod ui;

pub use app::{App, AppEvent, Focus};
pub use config::{Config, ConfigError};
pub use input::{digit_position, move_cursor, move_selection};
