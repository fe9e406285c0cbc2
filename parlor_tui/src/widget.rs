//! Widget focus selection.

use clap::ValueEnum;

/// Which widget owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Widget {
    /// Tic-tac-toe board and move history.
    Game,
    /// Keypad calculator.
    Calculator,
}

impl Widget {
    /// Returns display name.
    pub fn name(&self) -> &str {
        match self {
            Widget::Game => "Tic-tac-toe",
            Widget::Calculator => "Calculator",
        }
    }

    /// The other widget.
    pub fn toggled(self) -> Self {
        match self {
            Widget::Game => Widget::Calculator,
            Widget::Calculator => Widget::Game,
        }
    }
}

impl std::fmt::Display for Widget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Matches the clap value names.
        let value = match self {
            Widget::Game => "game",
            Widget::Calculator => "calculator",
        };
        write!(f, "{}", value)
    }
}

impl Default for Widget {
    fn default() -> Self {
        Widget::Game
    }
}
