mod sorter;
mod task;
mod task_manager;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use task_manager::TaskManager;

fn main() -> Result<()> {
    if std::env::var("TODOERS_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("todoers=debug")
            .init();
    }

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut manager = TaskManager::new();

    let result = ui::run_app(&mut terminal, &mut manager);

    // Restore terminal before reporting any UI error
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result?;
    Ok(())
}
