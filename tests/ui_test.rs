//! Rendering tests against ratatui's test backend.

use crossterm::event::KeyCode;
use ratatui::{Terminal, backend::TestBackend};
use strictly_rewind::{App, Config, ui};

fn render(app: &App) -> String {
    render_sized(app, 100, 30)
}

fn render_sized(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_new_game_screen() {
    let app = App::new(&Config::default());
    let screen = render(&app);
    assert!(screen.contains("Go to game start"));
    assert!(screen.contains("Next player: X"));
}

#[test]
fn test_history_entries_rendered() {
    let mut app = App::new(&Config::default());
    app.handle_key(KeyCode::Char('5'));
    app.handle_key(KeyCode::Char('1'));
    let screen = render(&app);
    assert!(screen.contains("Go to move #1"));
    assert!(screen.contains("Go to move #2"));
    assert!(screen.contains("Next player: X"));
    assert!(!screen.contains("2. Go to move #1"));
}

/// Nine moves with no winner: X O X / X O O / O X X.
fn full_board_app() -> App {
    let mut app = App::new(&Config::default());
    for c in ['1', '2', '3', '5', '4', '6', '8', '7', '9'] {
        app.handle_key(KeyCode::Char(c));
    }
    app
}

#[test]
fn test_short_terminal_keeps_current_entry_visible() {
    let app = full_board_app();
    assert_eq!(app.game().len(), 10);

    let screen = render_sized(&app, 100, 18);
    assert!(screen.contains("Go to move #9"));
}

#[test]
fn test_short_terminal_scrolls_to_selected_entry() {
    let mut app = full_board_app();
    app.handle_key(KeyCode::Tab);
    app.handle_key(KeyCode::Home);
    assert_eq!(app.selected(), 0);

    let screen = render_sized(&app, 100, 18);
    assert!(screen.contains("Go to game start"));
}

#[test]
fn test_status_text_when_viewing_past() {
    let mut app = App::new(&Config::default());
    for c in ['1', '2', '5', '3', '9'] {
        app.handle_key(KeyCode::Char(c));
    }
    assert_eq!(ui::status_text(&app), "Winner: X");

    app.handle_key(KeyCode::Char('['));
    assert_eq!(ui::status_text(&app), "Next player: X (viewing move 4 of 5)");

    app.handle_key(KeyCode::Char('2'));
    assert_eq!(
        ui::status_text(&app),
        "Next player: X (viewing move 4 of 5) | Top-center is already occupied"
    );
}
