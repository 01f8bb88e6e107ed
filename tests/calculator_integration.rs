use tally::app::{App, AppEvent, AppMode};
use tally::engine::{CalcError, Op};

fn press(app: &mut App, keys: &str) {
    for key in keys.chars() {
        let event = match key {
            '0'..='9' => AppEvent::Digit(key),
            '.' => AppEvent::DecimalPoint,
            '=' => AppEvent::Compute,
            '<' => AppEvent::Backspace,
            'c' => AppEvent::Clear,
            _ => AppEvent::Operator(Op::from_char(key).expect("operator key")),
        };
        app.handle_event(event);
    }
}

fn token_texts(app: &App) -> Vec<String> {
    app.calculator()
        .tokens()
        .iter()
        .map(|t| t.text().to_string())
        .collect()
}

#[test]
fn end_to_end_arithmetic() {
    let mut app = App::new();

    press(&mut app, "12+3=");
    assert_eq!(app.display_text(), "15");
    assert_eq!(token_texts(&app), ["15"]);
    assert!(app.calculator().result_pending());

    // The result feeds the next expression.
    press(&mut app, "/4=");
    assert_eq!(app.display_text(), "3.75");
    assert_eq!(token_texts(&app), ["3.75"]);
}

#[test]
fn eager_reduction_chains_left_to_right() {
    let mut app = App::new();
    press(&mut app, "5+3*2=");
    // 5+3 reduces to 8 when * arrives, then 8*2 computes.
    assert_eq!(app.display_text(), "16");
    assert_eq!(token_texts(&app), ["16"]);
}

#[test]
fn division_result_is_rounded_to_two_decimals() {
    let mut app = App::new();
    press(&mut app, "1/3=");
    assert_eq!(app.display_text(), "0.33");
    assert!(app.calculator().result_pending());
}

#[test]
fn divide_by_zero_shows_the_error_and_clears_input() {
    let mut app = App::new();
    press(&mut app, "1/0=");
    assert_eq!(
        app.display_text(),
        "Error: Can't divide by zero. Input has been cleared."
    );
    assert!(app.calculator().tokens().is_empty());
    assert_eq!(app.calculator().last_error(), Some(CalcError::DivideByZero));

    // Whatever comes next dismisses the message first.
    press(&mut app, "7");
    assert_eq!(app.display_text(), "7");
    assert!(app.calculator().last_error().is_none());
}

#[test]
fn leading_operator_is_rejected() {
    let mut app = App::new();
    press(&mut app, "*");
    assert_eq!(
        app.display_text(),
        "Error: First input cannot be an operator. Input has been cleared."
    );
    assert!(app.calculator().tokens().is_empty());
}

#[test]
fn signs_fold_before_becoming_operands() {
    let mut app = App::new();
    press(&mut app, "+-5+-3=");
    // +- folds to a leading -, then the binary +- folds to -; -5-3 = -8.
    assert_eq!(app.display_text(), "-8");
    assert_eq!(token_texts(&app), ["-8"]);
}

#[test]
fn backspace_walks_input_back_to_empty() {
    let mut app = App::new();
    press(&mut app, "123<<<");
    assert_eq!(app.display_text(), "");
    assert!(app.calculator().tokens().is_empty());
}

#[test]
fn backspace_erases_a_result_atomically() {
    let mut app = App::new();
    press(&mut app, "6*7=");
    assert_eq!(app.display_text(), "42");
    press(&mut app, "<");
    assert_eq!(app.display_text(), "");
    assert!(app.calculator().tokens().is_empty());
    assert!(!app.calculator().result_pending());
}

#[test]
fn decimal_point_reopens_after_backspace() {
    let mut app = App::new();
    press(&mut app, "3.");
    assert!(!app.calculator().dot_enabled());
    press(&mut app, "<");
    assert!(app.calculator().dot_enabled());
    press(&mut app, ".5=");
    assert_eq!(app.display_text(), "3.5");
    assert_eq!(token_texts(&app), ["3.5"]);
}

#[test]
fn stale_result_is_replaced_by_fresh_digits() {
    let mut app = App::new();
    press(&mut app, "5+3=");
    assert_eq!(app.display_text(), "8");
    press(&mut app, "2");
    assert_eq!(app.display_text(), "2");
    assert_eq!(token_texts(&app), ["2"]);
}

#[test]
fn clear_resets_between_expressions() {
    let mut app = App::new();
    press(&mut app, "9*9c1+1=");
    assert_eq!(app.display_text(), "2");
}

#[test]
fn quit_event_ends_the_session() {
    let mut app = App::new();
    assert_eq!(app.mode(), AppMode::Running);
    app.handle_event(AppEvent::Quit);
    assert_eq!(app.mode(), AppMode::Quit);
}
