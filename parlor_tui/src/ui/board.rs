//! Tic-tac-toe board rendering.

use super::center_rect;
use parlor::{Board, Game, Player, Position, Square};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

/// Renders the 3x3 board for the snapshot at the game's cursor.
pub fn render_board(f: &mut Frame, area: Rect, game: &Game) {
    let board = game.board();
    let board_area = center_rect(area, 40, 12);
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

    render_row(f, rows[0], board, 0);
    render_separator(f, rows[1]);
    render_row(f, rows[2], board, 3);
    render_separator(f, rows[3]);
    render_row(f, rows[4], board, 6);
}

fn render_row(f: &mut Frame, area: Rect, board: &Board, start: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area);

    render_square(f, cols[0], board, start);
    render_vertical_sep(f, cols[1]);
    render_square(f, cols[2], board, start + 1);
    render_vertical_sep(f, cols[3]);
    render_square(f, cols[4], board, start + 2);
}

fn render_square(f: &mut Frame, area: Rect, board: &Board, idx: usize) {
    let pos = Position::from_index(idx).expect("row rendering stays within 0-8");
    let (text, style) = match board.get(pos) {
        Square::Empty => (
            format!("{}", idx + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };
    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}
