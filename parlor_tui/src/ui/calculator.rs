//! Calculator display and keypad rendering.

use super::center_rect;
use parlor::Calculator;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

// Keypad rows in the original desk-calculator arrangement.
const KEY_ROWS: [[char; 4]; 4] = [
    ['7', '8', '9', '+'],
    ['4', '5', '6', '-'],
    ['1', '2', '3', '*'],
    ['C', '0', '/', '='],
];

/// Renders the single-line display above the keypad grid.
pub fn render_calculator(f: &mut Frame, area: Rect, calc: &Calculator) {
    let calc_area = center_rect(area, 24, 13);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(2),
        ])
        .split(calc_area);

    let shown = if calc.display().is_empty() {
        "0"
    } else {
        calc.display()
    };
    let display = Paragraph::new(shown)
        .alignment(Alignment::Right)
        .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(display, rows[0]);

    for (row, keys) in KEY_ROWS.iter().enumerate() {
        render_key_row(f, rows[row + 1], keys);
    }
}

fn render_key_row(f: &mut Frame, area: Rect, keys: &[char; 4]) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    for (col, key) in keys.iter().enumerate() {
        let style = if key.is_ascii_digit() {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Yellow)
        };
        let cell = Paragraph::new(key.to_string())
            .style(style)
            .alignment(Alignment::Center);
        f.render_widget(cell, cols[col]);
    }
}
