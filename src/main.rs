use tally::app::App;
use tally::ui::TuiManager;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new();
    let mut tui = TuiManager::new()?;

    // Run the main TUI event loop until the user quits
    tui.run_event_loop(&mut app)?;

    Ok(())
}
