//! End-to-end key-press tests for the calculator.

use parlor::{Calculator, Key};

fn press_all(calc: &mut Calculator, keys: &str) {
    for c in keys.chars() {
        calc.press(Key::from_char(c).expect("test uses keypad characters"));
    }
}

#[test]
fn test_addition() {
    let mut calc = Calculator::new();
    press_all(&mut calc, "12+3=");
    assert_eq!(calc.display(), "15");
}

#[test]
fn test_equals_on_empty_buffer_is_zero() {
    let mut calc = Calculator::new();
    calc.press(Key::Equals);
    assert_eq!(calc.display(), "0");
}

#[test]
fn test_division_by_zero_displays_infinity() {
    let mut calc = Calculator::new();
    press_all(&mut calc, "7/0=");
    assert_eq!(calc.display(), "Infinity");
}

#[test]
fn test_no_precedence() {
    let mut calc = Calculator::new();
    press_all(&mut calc, "2+3*4=");
    assert_eq!(calc.display(), "20");
}

#[test]
fn test_multi_digit_operands() {
    let mut calc = Calculator::new();
    press_all(&mut calc, "10*10-1=");
    assert_eq!(calc.display(), "99");
}

#[test]
fn test_consecutive_operators_collapse() {
    let mut calc = Calculator::new();
    press_all(&mut calc, "6+*2=");
    assert_eq!(calc.display(), "12");
}

#[test]
fn test_result_feeds_fresh_entry() {
    let mut calc = Calculator::new();
    press_all(&mut calc, "12+3=");
    press_all(&mut calc, "4+4=");
    assert_eq!(calc.display(), "8");
}

#[test]
fn test_clear_mid_entry() {
    let mut calc = Calculator::new();
    press_all(&mut calc, "12+c");
    assert_eq!(calc.display(), "");
    press_all(&mut calc, "5=");
    assert_eq!(calc.display(), "5");
}

#[test]
fn test_stray_leading_operator_dropped() {
    let mut calc = Calculator::new();
    press_all(&mut calc, "*8=");
    assert_eq!(calc.display(), "8");
}

#[test]
fn test_error_display_recovers_on_next_key() {
    // Keypad input alone never puts a foreign character in the buffer, but a
    // restored session can carry one. Evaluation surfaces it as the Error
    // display, and the next key starts a fresh entry.
    let mut calc: Calculator =
        serde_json::from_str(r#"{"display":"1a2","calculated":false}"#).unwrap();
    calc.press(Key::Equals);
    assert_eq!(calc.display(), "Error");

    calc.press(Key::Digit(9));
    assert_eq!(calc.display(), "9");
    press_all(&mut calc, "+1=");
    assert_eq!(calc.display(), "10");
}

#[test]
fn test_trailing_operator_evaluates_left_side() {
    let mut calc = Calculator::new();
    press_all(&mut calc, "12+=");
    assert_eq!(calc.display(), "12");
}
