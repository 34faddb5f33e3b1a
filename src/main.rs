mod alerts;
mod app;
mod domain;
mod input;
mod persistence;
mod ticker;
mod timer;
mod ui;

use alerts::DesktopAlerts;
use anyhow::Result;
use app::AppState;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use ticker::Ticker;

#[derive(Parser)]
#[command(name = "sesh")]
#[command(about = "A terminal countdown timer for focused work sessions", long_about = None)]
struct Cli {
    /// Storage directory for settings, tasks and history. Defaults to ~/.sesh
    #[arg(short, long)]
    dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let storage = persistence::storage_dir(cli.dir.as_deref())?;
    let mut app = AppState::new(storage, Box::new(DesktopAlerts));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Save on exit
    if let Err(e) = app.save() {
        eprintln!("Error saving state: {}", e);
    }

    // Print any errors
    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let mut ticker = Ticker::new();

    loop {
        // The tick deadline exists exactly while the countdown runs
        ticker.sync(app.engine.is_running());

        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(ticker::poll_timeout())? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    let should_quit = input::handle_key(app, key)?;
                    if should_quit {
                        return Ok(());
                    }
                }
            }
        }

        // A pause or reset handled above drops the deadline before any
        // tick scheduled behind it can fire
        ticker.sync(app.engine.is_running());
        app.tick(ticker.poll());

        // Autosave if needed
        if app.needs_save() {
            app.save()?;
        }
    }
}
