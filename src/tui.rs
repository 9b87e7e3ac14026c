//! Terminal session: setup, event loop, teardown.

use crate::app::{App, AppEvent};
use crate::config::Config;
use crate::ui;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info, instrument};

/// Runs the interactive game until the user quits.
#[instrument(skip(config))]
pub fn run_tui(config: &Config) -> Result<()> {
    info!("Starting Strictly Rewind TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut terminal = match open_terminal() {
        Ok(terminal) => terminal,
        Err(err) => {
            disable_raw_mode()?;
            return Err(err);
        }
    };

    let res = run_app(&mut terminal, App::new(config));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

fn open_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")
}

/// Draws, then blocks on input; redraws only when the app asks for it.
fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    terminal.draw(|f| ui::draw(f, &app))?;

    loop {
        let redraw = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match app.handle_key(key.code) {
                AppEvent::Quit => return Ok(()),
                AppEvent::Redraw => true,
                AppEvent::Unchanged => false,
            },
            Event::Resize(_, _) => true,
            _ => false,
        };

        if redraw {
            terminal.draw(|f| ui::draw(f, &app))?;
        }
    }
}
