use super::event::AppEvent;
use super::mode::AppMode;
use crate::engine::{Calculator, ScreenText};

/// Holds the calculator core and the screen it writes to, and routes
/// incoming events.
pub struct App {
    mode: AppMode,
    calc: Calculator,
    screen: ScreenText,
}

impl App {
    pub fn new() -> Self {
        Self {
            mode: AppMode::Running,
            calc: Calculator::new(),
            screen: ScreenText::new(),
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    /// The text currently on the display, for the renderer.
    pub fn display_text(&self) -> &str {
        self.screen.text()
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calc
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        if event == AppEvent::Quit {
            self.mode = AppMode::Quit;
            return;
        }

        // Every press first dismisses a shown error message.
        self.calc.dismiss_error(&mut self.screen);

        match event {
            AppEvent::Digit(digit) => self.calc.press_digit(digit, &mut self.screen),
            AppEvent::DecimalPoint => self.calc.press_decimal(&mut self.screen),
            AppEvent::Operator(op) => self.calc.press_operator(op, &mut self.screen),
            AppEvent::Compute => self.calc.press_compute(&mut self.screen),
            AppEvent::Clear => self.calc.press_clear(&mut self.screen),
            AppEvent::Backspace => self.calc.press_backspace(&mut self.screen),
            AppEvent::Quit => {}
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
