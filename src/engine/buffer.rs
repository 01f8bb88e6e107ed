use super::error::CalcError;
use super::token::{Op, Token};

/// Which append rule fired, so the caller can mirror the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Folded {
    /// The token was appended as a new buffer element.
    Pushed,
    /// A pending unary sign absorbed the literal that followed it.
    MergedSign,
    /// The literal joined the one already under construction.
    Joined,
    /// Two consecutive signs collapsed into one; the display must rewrite
    /// its two trailing characters to the collapsed symbol.
    Collapsed(Op),
}

/// The short-term memory of pending tokens awaiting reduction. Owns the
/// grammar: tokens alternate operand/operator except for the pending-sign
/// states handled by `fold`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct InputBuffer {
    tokens: Vec<Token>,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// True when the trailing token is a standalone `+` or `-`.
    pub fn tail_is_sign(&self) -> bool {
        self.tokens.last().map_or(false, Token::is_sign)
    }

    /// Append a token directly, bypassing the grammar rules. Used to restore
    /// the truncated literal after a backspace and to install a reduction
    /// result.
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn pop(&mut self) -> Option<Token> {
        self.tokens.pop()
    }

    /// Folds a new token into the buffer. Rules are tried in order; the
    /// first match wins.
    pub fn fold(&mut self, new: Token) -> Result<Folded, CalcError> {
        if self.tokens.is_empty() {
            if new.is_operator() && !new.is_sign() {
                return Err(CalcError::LeadingOperator);
            }
            self.tokens.push(new);
            return Ok(Folded::Pushed);
        }

        let last_index = self.tokens.len() - 1;
        let last = self.tokens[last_index].clone();

        // Two signs in a row cancel: same direction gives plus, opposite
        // directions give minus.
        if last.is_sign() && new.is_sign() {
            let collapsed = if last == new { Op::Add } else { Op::Subtract };
            self.tokens[last_index] = Token::Operator(collapsed);
            return Ok(Folded::Collapsed(collapsed));
        }

        // A pending unary sign (leading, or right after an operator) absorbs
        // the literal that follows it.
        if let (Token::Operator(sign), Token::Number(body)) = (&last, &new) {
            if sign.is_sign()
                && (last_index == 0 || self.tokens[last_index - 1].is_operator())
            {
                let merged = format!("{}{}", sign.symbol(), body);
                self.tokens.pop();
                self.tokens.push(Token::Number(merged));
                return Ok(Folded::MergedSign);
            }
        }

        // Digit by digit, the literal under construction grows.
        if let (Token::Number(previous), Token::Number(next)) = (&last, &new) {
            let joined = format!("{}{}", previous, next);
            self.tokens.pop();
            self.tokens.push(Token::Number(joined));
            return Ok(Folded::Joined);
        }

        if last.is_operator() && new.is_operator() && !new.is_sign() {
            return Err(CalcError::ConsecutiveOperators);
        }

        self.tokens.push(new);
        Ok(Folded::Pushed)
    }

    /// Adds a decimal point. An empty buffer (or a trailing operator) opens
    /// a fresh `"0."` literal; a lone leading sign becomes a signed `"0."`;
    /// otherwise the point lands on the trailing literal. The caller is
    /// responsible for only calling this while a point is still available.
    pub fn push_point(&mut self) {
        let lone_sign = match self.tokens.as_slice() {
            [Token::Operator(op)] if op.is_sign() => Some(op.symbol()),
            _ => None,
        };
        if let Some(sign) = lone_sign {
            self.tokens.clear();
            self.tokens.push(Token::Number(format!("{}0.", sign)));
            return;
        }

        if let Some(Token::Number(text)) = self.tokens.last_mut() {
            text.push('.');
        } else {
            self.tokens.push(Token::Number(String::from("0.")));
        }
    }

    /// Removes the last character of the trailing token and returns it.
    /// When nothing of the token remains it is dropped entirely.
    pub fn pop_char(&mut self) -> Option<char> {
        let token = self.tokens.pop()?;
        match token {
            Token::Operator(op) => Some(op.symbol()),
            Token::Number(mut text) => {
                let removed = text.pop();
                if !text.is_empty() {
                    self.tokens.push(Token::Number(text));
                }
                removed
            }
        }
    }
}
