//! Application state and key handling.
//!
//! The app owns the one [`GameState`] of a session. Every key handler
//! reports whether anything visible changed, and the terminal loop redraws
//! only when told to.

use crate::config::Config;
use crate::input::{digit_position, move_cursor, move_selection};
use crossterm::event::KeyCode;
use serde::{Deserialize, Serialize};
use strictly_tictactoe::{GameState, Position, Rejected};
use tracing::{debug, info, instrument};

/// Pane receiving navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Focus {
    /// Arrows move the cell cursor.
    #[default]
    Board,
    /// Arrows move through the history list.
    History,
}

impl Focus {
    /// Returns the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        }
    }
}

/// What the caller should do after a key was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Visible state changed; draw again.
    Redraw,
    /// Nothing changed.
    Unchanged,
    /// Leave the application.
    Quit,
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    game: GameState,
    cursor: Position,
    focus: Focus,
    selected: usize,
    message: Option<String>,
    show_hints: bool,
}

impl App {
    /// Creates an application with a fresh game.
    #[instrument(skip(config))]
    pub fn new(config: &Config) -> Self {
        Self {
            game: GameState::new(),
            cursor: Position::Center,
            focus: *config.start_focus(),
            selected: 0,
            message: None,
            show_hints: *config.show_hints(),
        }
    }

    /// The game being played.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Pane with keyboard focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted history entry.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Last rejection, cleared by the next successful action.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Whether empty cells show their key number.
    pub fn show_hints(&self) -> bool {
        self.show_hints
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) -> AppEvent {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                AppEvent::Quit
            }
            KeyCode::Char('r') => {
                self.restart();
                AppEvent::Redraw
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                self.selected = self.game.current_move();
                AppEvent::Redraw
            }
            KeyCode::Char('[') => self.step_back(),
            KeyCode::Char(']') => self.step_forward(),
            KeyCode::Char(c) if c.is_ascii_digit() => match digit_position(c) {
                Some(pos) => {
                    self.cursor = pos;
                    self.play(pos)
                }
                None => AppEvent::Unchanged,
            },
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => self.play(self.cursor),
                Focus::History => self.jump_to(self.selected),
            },
            code => self.navigate(code),
        }
    }

    /// Plays at `pos`; a rejection becomes the status message.
    #[instrument(skip(self))]
    pub fn play(&mut self, pos: Position) -> AppEvent {
        let result = self.game.play(pos).map(|_| ());
        self.settle(result)
    }

    /// Shows the snapshot at `index`.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, index: usize) -> AppEvent {
        let result = self.game.jump_to(index).map(|_| ());
        self.settle(result)
    }

    /// Shows the previous snapshot, if any.
    pub fn step_back(&mut self) -> AppEvent {
        match self.game.current_move().checked_sub(1) {
            Some(index) => self.jump_to(index),
            None => AppEvent::Unchanged,
        }
    }

    /// Shows the next snapshot, if any.
    pub fn step_forward(&mut self) -> AppEvent {
        if self.game.is_at_latest() {
            AppEvent::Unchanged
        } else {
            self.jump_to(self.game.current_move() + 1)
        }
    }

    /// Starts a new game, keeping cursor and focus.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game = GameState::new();
        self.selected = 0;
        self.message = None;
    }

    fn settle(&mut self, result: Result<(), Rejected>) -> AppEvent {
        match result {
            Ok(()) => {
                self.message = None;
                self.selected = self.game.current_move();
            }
            Err(e) => {
                debug!(error = %e, "Action rejected");
                self.message = Some(e.reason.to_string());
            }
        }
        AppEvent::Redraw
    }

    fn navigate(&mut self, key: KeyCode) -> AppEvent {
        let changed = match self.focus {
            Focus::Board => {
                let next = move_cursor(self.cursor, key);
                std::mem::replace(&mut self.cursor, next) != next
            }
            Focus::History => {
                let next = move_selection(self.selected, self.game.len(), key);
                std::mem::replace(&mut self.selected, next) != next
            }
        };

        if changed { AppEvent::Redraw } else { AppEvent::Unchanged }
    }
}
