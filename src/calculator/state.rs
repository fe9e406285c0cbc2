//! Calculator state machine over the display buffer.

use super::eval::{evaluate, format_result};
use super::keypad::{Key, Op};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Shown when evaluation fails; cleared by the next key press.
const ERROR_DISPLAY: &str = "Error";

/// Keypad calculator: a display buffer plus a "just produced a result" flag.
///
/// Key presses transition the state synchronously. The transition rules, in
/// priority order:
///
/// 1. After a result (or an error), the next key starts a fresh entry and is
///    then handled normally.
/// 2. A digit replaces a buffer consisting of a stray leading operator.
/// 3. An operator replaces a trailing operator instead of stacking.
/// 4. `=` evaluates; failures display `Error`.
/// 5. `C` resets buffer and flag.
/// 6. Anything else appends its glyph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calculator {
    display: String,
    calculated: bool,
}

impl Calculator {
    /// Creates a calculator with an empty display.
    pub fn new() -> Self {
        Self {
            display: String::new(),
            calculated: false,
        }
    }

    /// The current display buffer.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// True if the display holds a result rather than pending input.
    pub fn calculated(&self) -> bool {
        self.calculated
    }

    /// Handles one keypad press.
    #[instrument(skip(self), fields(display = %self.display))]
    pub fn press(&mut self, key: Key) {
        if self.calculated {
            // The previous result is consumed; the key still applies below,
            // starting the fresh entry.
            self.display.clear();
            self.calculated = false;
        }

        let starts_with_op = self
            .display
            .chars()
            .next()
            .is_some_and(|c| Op::from_char(c).is_some());
        let ends_with_op = self
            .display
            .chars()
            .last()
            .is_some_and(|c| Op::from_char(c).is_some());

        match key {
            Key::Digit(_) if starts_with_op => {
                // A lone stray operator is discarded in favor of the digit.
                if let Some(glyph) = key.glyph() {
                    self.display = glyph.to_string();
                }
            }
            Key::Op(op) if ends_with_op => {
                self.display.pop();
                self.display.push(op.symbol());
            }
            Key::Equals => self.calculate(),
            Key::Clear => self.clear(),
            _ => {
                if let Some(glyph) = key.glyph() {
                    self.display.push(glyph);
                }
            }
        }
    }

    fn calculate(&mut self) {
        match evaluate(&self.display) {
            Ok(result) => {
                debug!(%result, "evaluated");
                self.display = format_result(result);
            }
            Err(e) => {
                debug!(error = %e, "evaluation failed");
                self.display = ERROR_DISPLAY.to_string();
            }
        }
        // Set on error too, so the next key starts a fresh entry.
        self.calculated = true;
    }

    fn clear(&mut self) {
        self.display.clear();
        self.calculated = false;
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_all(calc: &mut Calculator, keys: &str) {
        for c in keys.chars() {
            calc.press(Key::from_char(c).unwrap());
        }
    }

    #[test]
    fn test_digits_accumulate() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "12");
        assert_eq!(calc.display(), "12");
    }

    #[test]
    fn test_operator_replaces_trailing_operator() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "1+-");
        assert_eq!(calc.display(), "1-");
    }

    #[test]
    fn test_digit_replaces_leading_operator() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "+5");
        assert_eq!(calc.display(), "5");
    }

    #[test]
    fn test_result_starts_fresh_entry() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "12+3=");
        assert_eq!(calc.display(), "15");
        assert!(calc.calculated());

        calc.press(Key::Digit(9));
        assert_eq!(calc.display(), "9");
        assert!(!calc.calculated());
    }

    #[test]
    fn test_clear_resets_flag() {
        let mut calc = Calculator::new();
        press_all(&mut calc, "12+3=");
        calc.press(Key::Clear);
        assert_eq!(calc.display(), "");
        assert!(!calc.calculated());
    }
}
