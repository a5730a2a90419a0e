mod app;
mod audio;
mod config;
mod error;
mod event;
mod game;
mod leaderboard;
mod ui;

use std::fs::File;
use std::io;
use std::path::PathBuf;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use app::App;
use event::{Event, EventHandler};

const LOG_FILE: &str = "duck-dash.log";

fn log_path() -> PathBuf {
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            return dir.join(LOG_FILE);
        }
    }
    PathBuf::from(LOG_FILE)
}

/// The terminal belongs to the UI, so logs go to a file. No file, no logs.
fn init_logging() {
    let Ok(file) = File::create(log_path()) else { return };
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
}

fn main() -> io::Result<()> {
    init_logging();
    log::info!("Starting Duck Dash");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Create app and event handler
    let mut app = App::new();
    let event_handler = EventHandler::new(16); // ~60 FPS

    // Main loop
    loop {
        terminal.draw(|frame| ui::render(frame, &mut app))?;

        match event_handler.next()? {
            Event::Tick => app.on_tick(),
            Event::Key(key) => app.on_key(key),
            Event::Click(mouse) => app.on_click(mouse),
        }

        if app.should_quit {
            break;
        }
    }

    app.music.stop();
    log::info!("Shutting down");

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
