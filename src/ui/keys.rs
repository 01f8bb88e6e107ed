use std::collections::HashMap;

use crossterm::event::KeyCode;
use lazy_static::lazy_static;

use crate::app::AppEvent;
use crate::engine::Op;

lazy_static! {
    /// Character keys that map straight to calculator events. Special keys
    /// (Enter, Backspace, Delete, Esc) are matched on `KeyCode` directly.
    static ref CHAR_BINDINGS: HashMap<char, AppEvent> = {
        let mut map = HashMap::new();
        for digit in '0'..='9' {
            map.insert(digit, AppEvent::Digit(digit));
        }
        map.insert('+', AppEvent::Operator(Op::Add));
        map.insert('-', AppEvent::Operator(Op::Subtract));
        map.insert('*', AppEvent::Operator(Op::Multiply));
        map.insert('/', AppEvent::Operator(Op::Divide));
        map.insert('.', AppEvent::DecimalPoint);
        map.insert('=', AppEvent::Compute);
        map.insert('c', AppEvent::Clear);
        map.insert('C', AppEvent::Clear);
        map.insert('q', AppEvent::Quit);
        map
    };
}

/// Translate a key press into an application event. Unbound keys are
/// ignored.
pub fn parse_key(code: KeyCode) -> Option<AppEvent> {
    match code {
        KeyCode::Char(c) => CHAR_BINDINGS.get(&c).cloned(),
        KeyCode::Enter => Some(AppEvent::Compute),
        KeyCode::Backspace => Some(AppEvent::Backspace),
        KeyCode::Delete => Some(AppEvent::Clear),
        KeyCode::Esc => Some(AppEvent::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_keys_map_to_digit_events() {
        for digit in '0'..='9' {
            assert_eq!(
                parse_key(KeyCode::Char(digit)),
                Some(AppEvent::Digit(digit))
            );
        }
    }

    #[test]
    fn test_operator_keys_map_to_operator_events() {
        assert_eq!(
            parse_key(KeyCode::Char('+')),
            Some(AppEvent::Operator(Op::Add))
        );
        assert_eq!(
            parse_key(KeyCode::Char('/')),
            Some(AppEvent::Operator(Op::Divide))
        );
    }

    #[test]
    fn test_compute_keys() {
        assert_eq!(parse_key(KeyCode::Char('=')), Some(AppEvent::Compute));
        assert_eq!(parse_key(KeyCode::Enter), Some(AppEvent::Compute));
    }

    #[test]
    fn test_editing_keys() {
        assert_eq!(parse_key(KeyCode::Backspace), Some(AppEvent::Backspace));
        assert_eq!(parse_key(KeyCode::Delete), Some(AppEvent::Clear));
        assert_eq!(parse_key(KeyCode::Char('c')), Some(AppEvent::Clear));
        assert_eq!(parse_key(KeyCode::Char('C')), Some(AppEvent::Clear));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(parse_key(KeyCode::Char('q')), Some(AppEvent::Quit));
        assert_eq!(parse_key(KeyCode::Esc), Some(AppEvent::Quit));
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        assert_eq!(parse_key(KeyCode::Char('x')), None);
        assert_eq!(parse_key(KeyCode::Tab), None);
    }
}
