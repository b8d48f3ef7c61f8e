// ABOUTME: Main entry point for the crawl wizard TUI and CLI
//
// Binary: crawl-wizard
// Usage: crawl-wizard [COMMAND]
// - No command: launches TUI
// - tui [--open]: launches TUI, optionally straight into the wizard
// - defaults: print the default crawl configuration

#![allow(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{
        DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
        EventStream,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures_util::StreamExt;
use ratatui::{backend::Backend, prelude::*, Terminal};
use std::{
    io::{self, IsTerminal},
    time::Duration,
};
use tracing::{error, info};

use crawl_wizard::app::{App, EventHandler};
use crawl_wizard::cli::{self, Commands};
use crawl_wizard::components::LayoutComponent;
use crawl_wizard::config::{AppConfig, LoggingConfig, UiConfig};

/// Terminal cleanup utility to ensure proper restoration
fn cleanup_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    );
}

/// Unified terminal cleanup that works with a terminal instance
fn cleanup_terminal_with_instance<B: Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    let config = match &args.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    }
    .context("Failed to load configuration")?;

    match args.command {
        Some(Commands::Defaults) => cli::defaults::execute(args.format),

        // TUI mode (explicit or default)
        Some(Commands::Tui { open }) => start_tui(&config, open).await,
        None => start_tui(&config, false).await,
    }
}

async fn start_tui(config: &AppConfig, open: bool) -> Result<()> {
    setup_logging(&config.logging)?;
    setup_panic_handler();

    let mut app = App::new();
    if open {
        app.state.open_wizard();
    }
    let mut layout = LayoutComponent::new();

    let result = run_tui(&mut app, &mut layout, &config.ui).await;

    // Ensure terminal is cleaned up on any error
    if result.is_err() {
        cleanup_terminal();
    }
    info!("Crawl wizard exiting");
    result
}

async fn run_tui(app: &mut App, layout: &mut LayoutComponent, ui: &UiConfig) -> Result<()> {
    // Check if we have a proper TTY
    if !io::stdout().is_terminal() {
        return Err(anyhow::anyhow!(
            "No TTY detected. This application requires a terminal.\n\
             Try running directly in a terminal instead of redirecting output."
        ));
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    if ui.mouse_capture {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_tui_loop(app, layout, &mut terminal, Duration::from_millis(ui.tick_rate_ms)).await;

    if let Err(e) = cleanup_terminal_with_instance(&mut terminal) {
        error!("Failed to cleanup terminal: {}", e);
        // Fallback to basic cleanup
        cleanup_terminal();
    }

    result
}

async fn run_tui_loop(
    app: &mut App,
    layout: &mut LayoutComponent,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    tick_rate: Duration,
) -> Result<()> {
    let mut events = EventStream::new();
    let mut ticker = tokio::time::interval(tick_rate);

    loop {
        terminal.draw(|frame| layout.render(frame, &app.state))?;

        tokio::select! {
            _ = ticker.tick() => app.tick(),
            maybe_event = events.next() => match maybe_event {
                Some(Ok(event)) => {
                    if let Some(app_event) = EventHandler::handle_event(event, &mut app.state) {
                        EventHandler::process_event(app_event, &mut app.state);
                    }
                }
                Some(Err(e)) => return Err(e).context("Failed to read terminal event"),
                None => break,
            },
        }

        if app.state.should_quit {
            break;
        }
    }

    Ok(())
}

fn setup_logging(logging: &LoggingConfig) -> Result<()> {
    use std::fs::OpenOptions;
    use tracing_subscriber::prelude::*;

    let log_dir = logging.log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    // JSONL log file with timestamp
    let log_file = log_dir.join(format!(
        "crawl-wizard-{}.jsonl",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ));

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_writer(file)
                .with_ansi(false),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| logging.filter().into()),
        )
        .init();

    Ok(())
}

fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        // Ensure terminal is restored before logging the panic
        cleanup_terminal();

        error!("Application panicked: {}", panic_info);
        eprintln!("Application panicked: {}", panic_info);
        eprintln!("Please check the logs for more details.");
    }));
}
