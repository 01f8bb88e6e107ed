use ratatui::style::Color;

/// Slate theme colors
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub accent: Color,
    pub dimmed: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::slate()
    }
}

impl Theme {
    pub fn slate() -> Self {
        Self {
            background: Color::Rgb(24, 25, 33),
            text: Color::Rgb(205, 214, 244),
            accent: Color::Rgb(250, 179, 135),
            dimmed: Color::Rgb(108, 112, 134),
            error: Color::Rgb(243, 139, 168),
        }
    }

    /// Default theme is slate
    pub fn current() -> Self {
        Self::slate()
    }
}

/// Convenience access to current theme colors
pub mod colors {
    use super::Theme;
    use ratatui::style::Color;

    pub fn background() -> Color {
        Theme::current().background
    }
    pub fn text() -> Color {
        Theme::current().text
    }
    pub fn accent() -> Color {
        Theme::current().accent
    }
    pub fn dimmed() -> Color {
        Theme::current().dimmed
    }
    pub fn error() -> Color {
        Theme::current().error
    }
}
