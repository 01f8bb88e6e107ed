use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::ui::theme::colors;

/// Button legends for the on-screen keypad, one array per row.
pub const KEYPAD_ROWS: [[&str; 4]; 5] = [
    ["7", "8", "9", "/"],
    ["4", "5", "6", "*"],
    ["1", "2", "3", "-"],
    ["0", ".", "=", "+"],
    ["C", "<-", "(q)uit", ""],
];

/// Keeps the tail of `text` that fits in `width` columns, the way a
/// hardware calculator scrolls long input off the left edge.
pub fn fit_display_tail(text: &str, width: usize) -> String {
    if UnicodeWidthStr::width(text) <= width {
        return text.to_string();
    }
    let mut tail = String::new();
    let mut used = 0;
    for ch in text.chars().rev() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        tail.insert(0, ch);
    }
    tail
}

/// The display line: right-aligned, bordered, tail-truncated to the visible
/// width. Error messages are styled in the error color.
pub fn render_display(text: &str, width: usize, is_error: bool) -> Paragraph<'static> {
    let visible = fit_display_tail(text, width);
    let text_style = if is_error {
        Style::default().fg(colors::error())
    } else {
        Style::default().fg(colors::text()).add_modifier(Modifier::BOLD)
    };

    Paragraph::new(visible)
        .alignment(Alignment::Right)
        .style(text_style.bg(colors::background()))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::dimmed())),
        )
}

/// The keypad grid. Operators and the compute key get the accent color.
pub fn render_keypad() -> Paragraph<'static> {
    let mut lines = Vec::new();
    for row in KEYPAD_ROWS {
        let mut spans = Vec::new();
        for cap in row {
            let style = match cap {
                "+" | "-" | "*" | "/" | "=" => Style::default().fg(colors::accent()),
                "C" | "<-" | "(q)uit" => Style::default().fg(colors::dimmed()),
                _ => Style::default().fg(colors::text()),
            };
            spans.push(Span::styled(format!(" {:^6} ", cap), style));
        }
        lines.push(Line::from(spans).alignment(Alignment::Center));
        lines.push(Line::from(""));
    }

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(colors::background()))
}

/// One-line key binding reminder at the bottom of the screen.
pub fn render_hint() -> Paragraph<'static> {
    let text = "0-9 digits   + - * / operators   . point   = or Enter compute   Backspace erase   c or Delete clear   q quit";
    Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(colors::dimmed()).bg(colors::background()))
}
