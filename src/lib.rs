//! Parlor - deterministic state containers for two small interactive widgets.
//!
//! # Architecture
//!
//! - **Tic-tac-toe**: an immutable-snapshot board history with a move cursor,
//!   supporting "time travel" to any earlier position. Playing a move from an
//!   earlier position discards the abandoned future, as an undo/redo timeline
//!   does.
//! - **Calculator**: a keypad-driven display buffer evaluated by streaming
//!   left-to-right reduction with no operator precedence.
//!
//! Both widgets are pure state machines: a key press or square selection
//! transitions the state synchronously, and a renderer derives everything it
//! shows from the state afterwards. No rendering environment is needed to
//! exercise them.
//!
//! # Example
//!
//! ```
//! use parlor::{Game, Position, Calculator, Key, Op};
//!
//! let mut game = Game::new();
//! game.play(Position::Center);
//! assert_eq!(game.status_line(), "Next player: O");
//!
//! let mut calc = Calculator::new();
//! for key in [Key::Digit(1), Key::Digit(2), Key::Op(Op::Add), Key::Digit(3), Key::Equals] {
//!     calc.press(key);
//! }
//! assert_eq!(calc.display(), "15");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod calculator;
mod tictactoe;

// Crate-level exports - Tic-tac-toe
pub use tictactoe::{
    rules, AlternatingMarks, Board, CursorInBounds, Game, GameInvariants, GameStatus, Invariant,
    InvariantSet, InvariantViolation, Player, Position, SnapshotImmutable, Square,
};

// Crate-level exports - Calculator
pub use calculator::{evaluate, format_result, tokenize, Calculator, EvalError, Key, Op, Token};
