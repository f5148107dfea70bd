//! RagBar — drag three thresholds across a Red/Amber/Green bar.
//!
//! Mouse: press a ▼ handle, drag, release. Keys: q / Esc / Ctrl+C quit.

use std::io::{self, stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;

use ragbar_tui::cli::{self, Args};
use ragbar_tui::{input, logging, ui, AppState};

fn main() -> Result<()> {
    let args = Args::parse();

    let config = cli::load_config(&args).context("load config")?;
    let thresholds = config.initial_thresholds()?;

    let log_dir = args
        .log_dir
        .clone()
        .or_else(|| config.logging.directory.clone())
        .unwrap_or_else(logging::default_log_dir);
    let _log_guard = logging::init(&log_dir, &config.logging.level)?;
    info!(?thresholds, log_dir = %log_dir.display(), "starting ragbar");

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), DisableMouseCapture, LeaveAlternateScreen);
        default_hook(panic);
    }));

    let mut app = AppState::new(thresholds);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    info!(thresholds = ?app.thresholds(), "exiting ragbar");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render, measuring the bar for the next round of input
        terminal.draw(|f| {
            app.sync_layout(f.area());
            ui::draw(f, app);
        })?;

        // 2. Apply every pending event in delivery order
        if event::poll(Duration::from_millis(50))? {
            loop {
                match event::read()? {
                    Event::Key(key) => input::handle_key(app, key),
                    Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                    _ => {}
                }
                if !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        // 3. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
