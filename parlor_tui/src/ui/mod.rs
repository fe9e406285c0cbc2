//! Frame layout and rendering.

mod board;
mod calculator;

use crate::app::App;
use crate::widget::Widget;
use parlor::Game;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Draws the whole frame: status bar, board, history list, calculator.
pub fn draw(f: &mut Frame, app: &App) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(f.area());

    let status = Paragraph::new(Line::from(app.status_message().to_string()))
        .style(Style::default().fg(Color::Yellow));
    f.render_widget(status, outer[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Percentage(25),
            Constraint::Percentage(30),
        ])
        .split(outer[1]);

    let game_block = focus_block("Tic-tac-toe", app.focus() == Widget::Game);
    let game_area = game_block.inner(columns[0]);
    f.render_widget(game_block, columns[0]);
    board::render_board(f, game_area, app.game());

    render_history(f, columns[1], app);

    let calc_block = focus_block("Calculator", app.focus() == Widget::Calculator);
    let calc_area = calc_block.inner(columns[2]);
    f.render_widget(calc_block, columns[2]);
    calculator::render_calculator(f, calc_area, app.calc());
}

fn render_history(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = (0..app.game().len())
        .map(|idx| {
            let marker = if idx == app.game().cursor() { "*" } else { " " };
            ListItem::new(format!("{} {}", marker, Game::move_label(idx)))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().title("History").borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    state.select(Some(app.selection()));
    f.render_stateful_widget(list, area, &mut state);
}

fn focus_block(title: &str, focused: bool) -> Block<'_> {
    let style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(style)
}

/// Centers a `width` x `height` rectangle within `area`.
pub(crate) fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}
