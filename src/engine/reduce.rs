use super::error::CalcError;
use super::token::{Op, Token};

/// Reduces an operand-operator-operand window to a single value, rounded to
/// two decimal places.
///
/// The operator is read from index 1 and the left operand from index 0.
/// That positional contract matches the order the buffer is written in
/// (operand, then operator, then operand) and is relied on by callers.
pub fn reduce(tokens: &[Token]) -> Result<f64, CalcError> {
    let op = match tokens.get(1) {
        Some(Token::Operator(op)) => *op,
        _ => return Ok(f64::NAN),
    };
    let left = tokens.first().map_or(f64::NAN, operand_value);
    let right = tokens.get(2).map_or(f64::NAN, operand_value);
    let raw = operate(op, left, right)?;
    Ok(round_to_cents(raw))
}

/// A literal parses as `f64`; anything unparseable (including an operator
/// sitting in an operand slot) evaluates to NaN, which then flows through
/// the arithmetic unchanged.
fn operand_value(token: &Token) -> f64 {
    match token {
        Token::Number(text) => text.parse().unwrap_or(f64::NAN),
        Token::Operator(_) => f64::NAN,
    }
}

fn operate(op: Op, left: f64, right: f64) -> Result<f64, CalcError> {
    match op {
        Op::Add => Ok(add(left, right)),
        Op::Subtract => Ok(subtract(left, right)),
        Op::Multiply => Ok(multiply(left, right)),
        Op::Divide => divide(left, right),
    }
}

fn add(left: f64, right: f64) -> f64 {
    left + right
}

fn subtract(left: f64, right: f64) -> f64 {
    left - right
}

fn multiply(left: f64, right: f64) -> f64 {
    left * right
}

fn divide(left: f64, right: f64) -> Result<f64, CalcError> {
    if right == 0.0 {
        return Err(CalcError::DivideByZero);
    }
    Ok(left / right)
}

fn round_to_cents(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    // normalize -0 so it renders as "0"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
