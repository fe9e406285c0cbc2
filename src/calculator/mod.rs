mod eval;
mod keypad;
mod state;

pub use eval::{evaluate, format_result, tokenize, EvalError, Token};
pub use keypad::{Key, Op};
pub use state::Calculator;
