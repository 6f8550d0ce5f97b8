//! CareOwner - a terminal portal for selling a veterinary practice.
//!
//! This application provides a fast, keyboard-driven interface for reviewing
//! buyer offers, browsing prospective buyers, messaging and following a deal
//! through due diligence.

mod app;
mod ui;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use app::{App, AppState};
use careowner_core::{Config, DataStore};
use ui::input::handle_input;
use ui::render::render;

// ============================================================================
// Constants
// ============================================================================

/// Timeout for polling terminal events (in milliseconds)
const EVENT_POLL_TIMEOUT_MS: u64 = 100;

const LOG_FILE_NAME: &str = "careowner.log";

const USAGE: &str = "\
Usage: careowner [OPTIONS]

Options:
  --dump-data <DIR>  Write every seed collection as JSON into DIR
  --help             Print this message

Environment:
  CAREOWNER_DATA_DIR  Load seed collections from this directory
  RUST_LOG            Log filter (default: warn)";

/// Initialize the tracing subscriber for logging.
///
/// The terminal belongs to the UI, so log lines go to a file in the cache
/// directory. The returned guard flushes the writer when dropped.
fn init_tracing(config: &Config) -> Option<WorkerGuard> {
    let dir = match config.cache_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Logging disabled: {}", e);
            return None;
        }
    };

    let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .with(filter)
        .init();

    Some(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    // Check for CLI commands
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        println!("{}", USAGE);
        return Ok(());
    }

    let config = Config::load();

    if args.len() > 1 && args[1] == "--dump-data" {
        let dir = args
            .get(2)
            .map(PathBuf::from)
            .context("--dump-data requires a directory")?;
        return dump_data(&config, dir);
    }

    // Initialize logging
    let _log_guard = init_tracing(&config);
    info!("CareOwner starting");

    let data_dir = config.effective_data_dir();
    let store = DataStore::load(data_dir.as_deref()).context("Failed to load practice data")?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, store);

    // Main loop
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    info!("CareOwner shutting down");
    Ok(())
}

/// Write the loaded collections out as pretty JSON
fn dump_data(config: &Config, dir: PathBuf) -> Result<()> {
    let data_dir = config.effective_data_dir();
    let store = DataStore::load(data_dir.as_deref()).context("Failed to load practice data")?;

    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    store
        .export(&dir)
        .with_context(|| format!("Failed to export data to {}", dir.display()))?;

    eprintln!("Exported practice data to {}", dir.display());
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Draw UI
        terminal.draw(|f| render(f, app))?;

        // Poll for events with timeout to allow background updates
        if event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            if let Event::Key(key) = event::read()? {
                // Ctrl+C to quit
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    return Ok(());
                }

                if handle_input(app, key).await? {
                    return Ok(());
                }
            }
        }

        // Check for completed assistant replies
        app.check_background_tasks();

        if matches!(app.state, AppState::Quitting) {
            return Ok(());
        }
    }
}
