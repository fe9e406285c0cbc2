//! Keypad input types for the calculator.

use serde::{Deserialize, Serialize};

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Op {
    /// Addition (`+`).
    Add,
    /// Subtraction (`-`).
    Sub,
    /// Multiplication (`*`).
    Mul,
    /// Division (`/`). Division by zero follows IEEE semantics and yields an
    /// infinity or NaN rather than an error.
    Div,
}

impl Op {
    /// The operator's keypad symbol.
    pub fn symbol(self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
            Op::Div => '/',
        }
    }

    /// Parses an operator from its symbol.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Op::Add),
            '-' => Some(Op::Sub),
            '*' => Some(Op::Mul),
            '/' => Some(Op::Div),
            _ => None,
        }
    }

    /// Applies the operator to two operands.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Op::Add => a + b,
            Op::Sub => a - b,
            Op::Mul => a * b,
            Op::Div => a / b,
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A calculator keypad key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// A digit key, 0-9.
    Digit(u8),
    /// An operator key.
    Op(Op),
    /// The `=` key.
    Equals,
    /// The `C` key.
    Clear,
}

impl Key {
    /// Parses a key from its keypad character.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Key::Digit(c as u8 - b'0')),
            '=' => Some(Key::Equals),
            'C' | 'c' => Some(Key::Clear),
            _ => Op::from_char(c).map(Key::Op),
        }
    }

    /// The character this key appends to the display buffer, if any.
    pub fn glyph(self) -> Option<char> {
        match self {
            Key::Digit(d) => char::from_digit(d as u32, 10),
            Key::Op(op) => Some(op.symbol()),
            Key::Equals | Key::Clear => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_from_char_round() {
        assert_eq!(Key::from_char('7'), Some(Key::Digit(7)));
        assert_eq!(Key::from_char('*'), Some(Key::Op(Op::Mul)));
        assert_eq!(Key::from_char('='), Some(Key::Equals));
        assert_eq!(Key::from_char('c'), Some(Key::Clear));
        assert_eq!(Key::from_char('x'), None);
    }

    #[test]
    fn test_div_by_zero_is_infinite() {
        assert!(Op::Div.apply(7.0, 0.0).is_infinite());
        assert!(Op::Div.apply(0.0, 0.0).is_nan());
    }
}
