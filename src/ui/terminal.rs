use crate::app::{App, AppMode};
use crate::ui::keys::parse_key;
use crate::ui::view::{render_display, render_hint, render_keypad};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager { terminal })
    }

    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        let mut last_tick = Instant::now();
        let render_tick = Duration::from_millis(1000 / 60);

        self.render_frame(app)?;

        loop {
            if app.mode() == AppMode::Quit {
                return Ok(());
            }

            match event::poll(Duration::from_millis(50)) {
                Ok(true) => {
                    if let Event::Key(key) = event::read()? {
                        if let Some(app_event) = parse_key(key.code) {
                            app.handle_event(app_event);
                        }
                    }
                }
                Ok(false) => {}
                Err(e) => {
                    // Propagate I/O errors instead of ignoring them
                    return Err(e);
                }
            }

            if last_tick.elapsed() >= render_tick {
                self.render_frame(app)?;
                last_tick = Instant::now();
            }
        }
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let display_text = app.display_text().to_string();
        let is_error = app.calculator().last_error().is_some();

        self.terminal.draw(|frame| {
            let area = frame.area();

            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Min(10),
                    Constraint::Length(1),
                ])
                .split(area);

            // Inside the display border there are `width - 2` usable columns.
            let inner_width = rows[0].width.saturating_sub(2) as usize;
            frame.render_widget(
                render_display(&display_text, inner_width, is_error),
                rows[0],
            );
            frame.render_widget(render_keypad(), rows[1]);
            frame.render_widget(render_hint(), rows[2]);
        })?;

        Ok(())
    }
}

impl Drop for TuiManager {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}
