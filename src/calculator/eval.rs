//! Expression evaluation by streaming left-to-right reduction.
//!
//! No operator precedence: the running total starts at zero with a pending
//! `+`, each operator token replaces the pending operator, and each number
//! token folds into the total immediately. `"2+3*4"` is 20, not 14.

use super::keypad::Op;
use tracing::instrument;

/// A lexical token of the display buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A maximal run of digits.
    Number(f64),
    /// A single operator character.
    Op(Op),
}

/// Evaluation failure.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EvalError {
    /// The buffer held a character that is neither a digit nor an operator.
    #[display("unrecognized character {:?} in expression", _0)]
    BadToken(char),
}

impl std::error::Error for EvalError {}

/// Splits a buffer into number and operator tokens.
///
/// Digit runs become [`Token::Number`]; `+ - * /` become [`Token::Op`].
/// An empty buffer yields an empty token stream.
#[instrument]
pub fn tokenize(buffer: &str) -> Result<Vec<Token>, EvalError> {
    let mut tokens = Vec::new();
    let mut digits = String::new();

    for c in buffer.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }
        if !digits.is_empty() {
            tokens.push(Token::Number(flush_number(&digits)));
            digits.clear();
        }
        match Op::from_char(c) {
            Some(op) => tokens.push(Token::Op(op)),
            None => return Err(EvalError::BadToken(c)),
        }
    }
    if !digits.is_empty() {
        tokens.push(Token::Number(flush_number(&digits)));
    }

    Ok(tokens)
}

fn flush_number(digits: &str) -> f64 {
    // The accumulator only ever holds ASCII digits, which always parse.
    digits.parse().unwrap_or_default()
}

/// Evaluates a display buffer to a number.
///
/// An empty buffer evaluates to 0, as does a buffer of nothing but
/// operators (no number token ever folds in). A trailing operator is
/// harmless: it replaces the pending operator and then never applies.
#[instrument]
pub fn evaluate(buffer: &str) -> Result<f64, EvalError> {
    let tokens = tokenize(buffer)?;

    let mut pending = Op::Add;
    let mut total = 0.0;
    for token in tokens {
        match token {
            Token::Op(op) => pending = op,
            Token::Number(n) => total = pending.apply(total, n),
        }
    }

    Ok(total)
}

/// Renders an evaluation result for the display.
///
/// Integral finite values print without a fractional part; non-finite
/// values print as `Infinity`, `-Infinity`, or `NaN`.
pub fn format_result(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == value.trunc() && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
