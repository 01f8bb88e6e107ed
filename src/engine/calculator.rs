use super::buffer::{Folded, InputBuffer};
use super::display::DisplaySink;
use super::error::CalcError;
use super::reduce::reduce;
use super::token::{Op, Token};

/// The calculator state machine: the token buffer, the mode flags, and the
/// canonical display text. One handler per user event.
///
/// Grammar and arithmetic errors never escape a handler; they are converted
/// into a cleared buffer and an error message on the display. The display
/// text is owned here and pushed out through the sink, so the calculator
/// never has to parse what it previously rendered.
#[derive(Debug)]
pub struct Calculator {
    buffer: InputBuffer,
    shown: String,
    result_pending: bool,
    dot_enabled: bool,
    last_error: Option<CalcError>,
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            buffer: InputBuffer::new(),
            shown: String::new(),
            result_pending: false,
            dot_enabled: true,
            last_error: None,
        }
    }

    pub fn tokens(&self) -> &[Token] {
        self.buffer.tokens()
    }

    pub fn display_text(&self) -> &str {
        &self.shown
    }

    /// True immediately after a successful reduction: the display holds a
    /// finalized result, not in-progress input.
    pub fn result_pending(&self) -> bool {
        self.result_pending
    }

    /// The explicit decimal-available flag: whether the current trailing
    /// literal can still take a decimal point.
    pub fn dot_enabled(&self) -> bool {
        self.dot_enabled
    }

    pub fn last_error(&self) -> Option<CalcError> {
        self.last_error
    }

    /// Digit entry. A pending result is stale and is discarded first.
    pub fn press_digit(&mut self, digit: char, sink: &mut dyn DisplaySink) {
        if !digit.is_ascii_digit() {
            return;
        }
        if self.result_pending {
            self.start_fresh(sink);
        }
        self.result_pending = false;
        match self.buffer.fold(Token::digit(digit)) {
            Ok(_) => {
                self.shown.push(digit);
                sink.append_text(&digit.to_string());
            }
            Err(error) => self.enter_error(error, sink),
        }
    }

    /// Decimal point entry. Ignored while the trailing literal already has
    /// a point; otherwise opens or extends a literal per the buffer rules.
    pub fn press_decimal(&mut self, sink: &mut dyn DisplaySink) {
        if self.result_pending {
            self.start_fresh(sink);
        }
        self.result_pending = false;
        if !self.dot_enabled {
            return;
        }
        self.buffer.push_point();
        self.shown.push('.');
        sink.append_text(".");
        self.dot_enabled = false;
    }

    /// Operator entry. Reduces eagerly when a full operand-operator-operand
    /// window is already present, then folds the operator in. Any error
    /// clears the input; the operator is not appended.
    pub fn press_operator(&mut self, op: Op, sink: &mut dyn DisplaySink) {
        self.dot_enabled = true;
        self.result_pending = false;
        if let Err(error) = self.try_operator(op, sink) {
            self.enter_error(error, sink);
        }
    }

    fn try_operator(&mut self, op: Op, sink: &mut dyn DisplaySink) -> Result<(), CalcError> {
        if self.buffer.len() > 2 && !self.buffer.tail_is_sign() {
            self.apply_reduction(sink)?;
            // the result keeps the expression going
            self.result_pending = false;
        }
        self.shown.push(op.symbol());
        sink.append_text(op.as_str());
        if let Folded::Collapsed(collapsed) = self.buffer.fold(Token::Operator(op))? {
            let keep = self.shown.len().saturating_sub(2);
            self.shown.truncate(keep);
            self.shown.push(collapsed.symbol());
            sink.replace_text(&self.shown);
        }
        Ok(())
    }

    /// The `=` key. A no-op until a full window of three tokens exists.
    pub fn press_compute(&mut self, sink: &mut dyn DisplaySink) {
        if self.buffer.len() < 3 {
            return;
        }
        if let Err(error) = self.apply_reduction(sink) {
            self.enter_error(error, sink);
        }
    }

    fn apply_reduction(&mut self, sink: &mut dyn DisplaySink) -> Result<(), CalcError> {
        let result = reduce(self.buffer.tokens())?;
        let text = result.to_string();
        self.buffer.clear();
        self.buffer.push(Token::Number(text.clone()));
        self.shown = text;
        sink.replace_text(&self.shown);
        self.result_pending = true;
        self.dot_enabled = true;
        Ok(())
    }

    /// Backspace. A finalized result disappears as one atomic unit; in-
    /// progress input loses a single trailing character.
    pub fn press_backspace(&mut self, sink: &mut dyn DisplaySink) {
        if self.buffer.is_empty() {
            return;
        }
        if self.result_pending {
            if let Some(token) = self.buffer.pop() {
                let keep = self.shown.len().saturating_sub(token.text().len());
                self.shown.truncate(keep);
            }
            sink.replace_text(&self.shown);
            self.dot_enabled = true;
            self.result_pending = false;
            return;
        }
        if let Some(removed) = self.buffer.pop_char() {
            if removed == '.' {
                self.dot_enabled = true;
            }
            self.shown.pop();
            sink.replace_text(&self.shown);
        }
    }

    /// The clear key: back to the start state.
    pub fn press_clear(&mut self, sink: &mut dyn DisplaySink) {
        self.buffer.clear();
        self.shown.clear();
        self.result_pending = false;
        self.dot_enabled = true;
        self.last_error = None;
        sink.clear_text();
    }

    /// Fires before every specific handler: a shown error message is
    /// dismissed by the next press, whatever it is.
    pub fn dismiss_error(&mut self, sink: &mut dyn DisplaySink) {
        if self.last_error.take().is_some() {
            self.buffer.clear();
            self.shown.clear();
            sink.clear_text();
        }
    }

    fn enter_error(&mut self, error: CalcError, sink: &mut dyn DisplaySink) {
        self.buffer.clear();
        self.result_pending = false;
        self.dot_enabled = true;
        self.shown = error.to_string();
        sink.replace_text(&self.shown);
        self.last_error = Some(error);
    }

    fn start_fresh(&mut self, sink: &mut dyn DisplaySink) {
        self.buffer.clear();
        self.shown.clear();
        sink.clear_text();
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
