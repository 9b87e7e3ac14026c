//! Stateless rendering of the board, status line and history list.

use crate::app::{App, Focus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use strictly_tictactoe::{Board, Cell, HistoryEntry, Mark, Position, Status, rules};

const HELP: &str = "1-9 play · arrows/hjkl move · Enter select · Tab focus · [ ] step · r restart · q quit";

/// Draws the whole screen for the current app state.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board + history
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Strictly Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(42), Constraint::Length(36)])
        .split(chunks[1]);

    draw_board(frame, panes[0], app);
    draw_history(frame, panes[1], app);
    draw_status(frame, chunks[2], app);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn pane_block(title: &str, focused: bool) -> Block<'_> {
    let border = if focused { Color::Yellow } else { Color::DarkGray };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let block = pane_block("Board", app.focus() == Focus::Board);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board = app.game().current_board();
    let line = rules::winning_line(&board);
    let board_area = center_rect(inner, 38, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
            ])
            .split(rows[row * 2]);

        for col in 0..3 {
            if let Some(pos) = Position::from_row_col(row, col) {
                let highlight = CellHighlight {
                    cursor: app.focus() == Focus::Board && pos == app.cursor(),
                    winning: line.is_some_and(|l| l.contains(&pos)),
                };
                draw_cell(frame, cols[col * 2], &board, pos, highlight, app.show_hints());
            }
            if col < 2 {
                draw_separator_vertical(frame, cols[col * 2 + 1]);
            }
        }
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

#[derive(Clone, Copy)]
struct CellHighlight {
    cursor: bool,
    winning: bool,
}

fn mark_style(mark: Mark) -> Style {
    let color = match mark {
        Mark::X => Color::Blue,
        Mark::O => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn draw_cell(frame: &mut Frame, area: Rect, board: &Board, pos: Position, highlight: CellHighlight, hints: bool) {
    let (symbol, base_style) = match board.get(pos) {
        Cell::Empty if hints => (format!("{}", pos.to_index() + 1), Style::default().fg(Color::DarkGray)),
        Cell::Empty => (String::new(), Style::default()),
        Cell::Marked(mark) => (mark.to_string(), mark_style(mark)),
    };

    let style = if highlight.cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else if highlight.winning {
        base_style.bg(Color::Green)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(format!(" {:^3} ", symbol), style)))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus() == Focus::History;
    let items: Vec<ListItem> = app
        .game()
        .entries()
        .iter()
        .map(|entry| ListItem::new(history_line(entry, focused && entry.index == app.selected())))
        .collect();

    // Scroll so the selected row, or the snapshot on display, stays visible.
    let anchor = if focused { app.selected() } else { app.game().current_move() };
    let mut state = ListState::default().with_selected(Some(anchor));

    let list = List::new(items).block(pane_block("History", focused));
    frame.render_stateful_widget(list, area, &mut state);
}

fn history_line(entry: &HistoryEntry, selected: bool) -> Line<'static> {
    let marker = if entry.is_current { "▶ " } else { "  " };
    let mut label_style = Style::default();
    if entry.is_current {
        label_style = label_style.add_modifier(Modifier::BOLD);
    }
    if selected {
        label_style = label_style.add_modifier(Modifier::REVERSED);
    }

    let mut spans = vec![
        Span::raw(marker),
        Span::styled(entry.label.clone(), label_style),
    ];
    if let Some(mv) = entry.played {
        spans.push(Span::styled(format!("  {}", mv.position.label()), mark_style(mv.mark)));
    }
    Line::from(spans)
}

/// Status line text: game status, where we are in history, last rejection.
pub fn status_text(app: &App) -> String {
    let game = app.game();
    let mut text = game.status().to_string();
    if !game.is_at_latest() {
        text.push_str(&format!(" (viewing move {} of {})", game.current_move(), game.len() - 1));
    }
    if let Some(message) = app.message() {
        text.push_str(&format!(" | {}", message));
    }
    text
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let color = match (app.message(), app.game().status()) {
        (Some(_), _) => Color::Red,
        (None, Status::Winner(_)) => Color::Green,
        (None, Status::InProgress(_)) => Color::Yellow,
    };

    let status = Paragraph::new(status_text(app))
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
