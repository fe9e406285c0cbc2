//! Application state and key routing.

use crate::widget::Widget;
use crossterm::event::KeyCode;
use parlor::{Calculator, Game, Key, Position};
use tracing::debug;

/// Main application state.
pub struct App {
    focus: Widget,
    game: Game,
    calc: Calculator,
    /// Selected entry in the move-history list.
    selection: usize,
    status_message: String,
}

impl App {
    /// Creates a new application with the given initial focus.
    pub fn new(focus: Widget) -> Self {
        Self {
            focus,
            game: Game::new(),
            calc: Calculator::new(),
            selection: 0,
            status_message: "Press 1-9 to play, Tab to switch widgets, q to quit.".to_string(),
        }
    }

    /// Gets the focused widget.
    pub fn focus(&self) -> Widget {
        self.focus
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the calculator.
    pub fn calc(&self) -> &Calculator {
        &self.calc
    }

    /// Gets the selected history entry.
    pub fn selection(&self) -> usize {
        self.selection
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Routes a key press to the focused widget.
    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Tab => {
                self.focus = self.focus.toggled();
                self.status_message = format!("{} focused.", self.focus.name());
            }
            KeyCode::Char('r') => match self.focus {
                Widget::Game => self.restart(),
                Widget::Calculator => self.reset_calc(),
            },
            _ => match self.focus {
                Widget::Game => self.handle_game_key(code),
                Widget::Calculator => self.handle_calc_key(code),
            },
        }
    }

    fn handle_game_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c @ '1'..='9') => {
                let idx = c as usize - '1' as usize;
                let pos = Position::from_index(idx).expect("digit keys map to 0-8");
                if self.game.play(pos) {
                    debug!("board now\n{}", self.game.board().display());
                    self.selection = self.game.cursor();
                    self.status_message = self.game.status_line();
                } else {
                    debug!(?pos, "move rejected");
                    self.status_message = "That square is not available.".to_string();
                }
            }
            KeyCode::Up => {
                self.selection = self.selection.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.selection + 1 < self.game.len() {
                    self.selection += 1;
                }
            }
            KeyCode::Enter => {
                if self.game.jump_to(self.selection) {
                    self.status_message =
                        format!("{}. {}", Game::move_label(self.selection), self.game.status_line());
                }
            }
            _ => {}
        }
    }

    fn handle_calc_key(&mut self, code: KeyCode) {
        let key = match code {
            KeyCode::Char(c) => Key::from_char(c),
            KeyCode::Enter => Some(Key::Equals),
            KeyCode::Backspace => Some(Key::Clear),
            _ => None,
        };
        if let Some(key) = key {
            self.calc.press(key);
            self.status_message = if self.calc.display().is_empty() {
                "Cleared.".to_string()
            } else {
                format!("Display: {}", self.calc.display())
            };
        }
    }

    /// Restarts the game, keeping the calculator as is.
    pub fn restart(&mut self) {
        debug!("restarting game");
        self.game = Game::new();
        self.selection = 0;
        self.status_message = "New game. Player X's turn.".to_string();
    }

    /// Resets the calculator, keeping the game as is.
    pub fn reset_calc(&mut self) {
        debug!("resetting calculator");
        self.calc = Calculator::new();
        self.status_message = "Calculator reset.".to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parlor::{GameStatus, Player};

    #[test]
    fn test_digit_key_plays_square() {
        let mut app = App::new(Widget::Game);
        app.handle_key(KeyCode::Char('5'));
        assert_eq!(app.game().cursor(), 1);
        assert_eq!(app.selection(), 1);
    }

    #[test]
    fn test_tab_switches_focus() {
        let mut app = App::new(Widget::Game);
        app.handle_key(KeyCode::Tab);
        assert_eq!(app.focus(), Widget::Calculator);
        app.handle_key(KeyCode::Tab);
        assert_eq!(app.focus(), Widget::Game);
    }

    #[test]
    fn test_history_navigation_and_jump() {
        let mut app = App::new(Widget::Game);
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.game().cursor(), 1);
        assert_eq!(app.game().to_move(), Player::O);
    }

    #[test]
    fn test_calc_keys_reach_calculator() {
        let mut app = App::new(Widget::Calculator);
        for c in "12+3".chars() {
            app.handle_key(KeyCode::Char(c));
        }
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.calc().display(), "15");
    }

    #[test]
    fn test_reset_targets_focused_calculator() {
        let mut app = App::new(Widget::Calculator);
        for c in "12".chars() {
            app.handle_key(KeyCode::Char(c));
        }
        app.handle_key(KeyCode::Char('r'));
        assert_eq!(app.calc().display(), "");
        assert!(!app.calc().calculated());
    }

    #[test]
    fn test_reset_calc_keeps_game() {
        let mut app = App::new(Widget::Game);
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Tab);
        app.handle_key(KeyCode::Char('7'));
        app.handle_key(KeyCode::Char('r'));
        assert_eq!(app.calc().display(), "");
        assert_eq!(app.game().len(), 2);
    }

    #[test]
    fn test_restart_resets_game_only() {
        let mut app = App::new(Widget::Calculator);
        for c in "7+2".chars() {
            app.handle_key(KeyCode::Char(c));
        }
        app.handle_key(KeyCode::Tab);
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Char('r'));
        assert_eq!(app.game().len(), 1);
        assert_eq!(app.game().status(), GameStatus::InProgress);
        assert_eq!(app.calc().display(), "7+2");
    }
}
