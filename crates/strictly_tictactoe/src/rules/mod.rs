//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board snapshot. Rules are kept apart from
//! the history so the timeline and the renderer can both ask them.

pub mod win;

pub use win::{WINNING_LINES, check_winner, winning_line};
