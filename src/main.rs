// ABOUTME: Main entry point for the seller onboarding wizard with TUI and CLI support
//
// Binary: seller-onboard
// Usage: seller-onboard [--config PATH] [--format text|json] [COMMAND]
// - No command: launches the registration wizard
// - score: rate a password
// - steps: list the wizard steps
// - regions: list the shipping regions

#![allow(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, prelude::*, Terminal};
use std::{
    io::{self, IsTerminal},
    time::{Duration, Instant},
};

use seller_onboarding::app::{App, EventHandler};
use seller_onboarding::cli::{self, Commands};
use seller_onboarding::components::LayoutComponent;
use seller_onboarding::config::AppConfig;

/// Terminal cleanup utility to ensure proper restoration
fn cleanup_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

/// Unified terminal cleanup that works with a terminal instance
fn cleanup_terminal_with_instance<B: Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = setup_logging() {
        eprintln!("Logging disabled: {e:#}");
    }
    setup_panic_handler();

    let args = cli::Cli::parse();

    let result = match args.command {
        Some(Commands::Score(score_args)) => cli::score::execute(&score_args, args.format),
        Some(Commands::Steps) => cli::catalog::steps(args.format),
        Some(Commands::Regions) => cli::catalog::regions(args.format),

        // TUI mode (explicit or default)
        Some(Commands::Tui) | None => {
            let config = match &args.config {
                Some(path) => AppConfig::load_from(path)?,
                None => AppConfig::load()?,
            };
            let mut app = App::new(&config)?;
            let mut layout = LayoutComponent::new();

            tracing::info!(
                require_password_match = app.state.wizard.policy().require_password_match,
                remote_submission = config.submission.endpoint.is_some(),
                "Starting registration wizard"
            );

            run_tui(&mut app, &mut layout, config.tick_rate()).await
        }
    };

    // Ensure terminal is cleaned up on any error
    if result.is_err() {
        cleanup_terminal();
    }

    result
}

async fn run_tui(app: &mut App, layout: &mut LayoutComponent, tick_rate: Duration) -> Result<()> {
    // Check if we have a proper TTY
    if !IsTerminal::is_terminal(&io::stdout()) {
        return Err(anyhow::anyhow!(
            "No TTY detected. This application requires a terminal.\n\
             Try running directly in a terminal instead of redirecting output."
        ));
    }

    if let Err(e) = crossterm::terminal::is_raw_mode_enabled() {
        eprintln!("Cannot check terminal raw mode: {e}");
        return Err(anyhow::anyhow!("Terminal not compatible: {e}"));
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Ensure terminal cleanup happens even if there's an error
    let result = run_tui_loop(app, layout, &mut terminal, tick_rate).await;

    if let Err(e) = cleanup_terminal_with_instance(&mut terminal) {
        tracing::error!("Failed to cleanup terminal: {}", e);
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
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| {
            layout.render(frame, &mut app.state);
        })?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key_event) = event::read()? {
                // Windows terminals report releases too
                if key_event.kind == KeyEventKind::Press {
                    if let Some(app_event) =
                        EventHandler::handle_key_event(key_event, &mut app.state)
                    {
                        EventHandler::process_event(app_event, &mut app.state);
                    }
                }
            }
        }

        if app.state.pending_async_action.is_some() {
            // Show "Sending code..." or "Creating your seller account..." before awaiting
            terminal.draw(|frame| {
                layout.render(frame, &mut app.state);
            })?;
        }

        if app.state.pending_async_action.is_some() || last_tick.elapsed() >= tick_rate {
            if let Err(e) = app.tick().await {
                tracing::error!("Error during app tick: {}", e);
            }
            last_tick = Instant::now();
        }

        if app.state.should_quit {
            break;
        }
    }

    Ok(())
}

fn setup_logging() -> Result<()> {
    use std::fs::OpenOptions;
    use tracing_subscriber::prelude::*;

    let log_dir = AppConfig::app_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    // JSONL log file with timestamp; the terminal belongs to the TUI
    let log_file = log_dir.join(format!(
        "seller-onboarding-{}.jsonl",
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
                .unwrap_or_else(|_| "seller_onboarding=info".into()),
        )
        .init();

    Ok(())
}

fn setup_panic_handler() {
    use tracing::error;

    std::panic::set_hook(Box::new(|panic_info| {
        // Ensure terminal is restored before logging the panic
        cleanup_terminal();

        error!("Application panicked: {}", panic_info);
        eprintln!("Application panicked: {}", panic_info);
        eprintln!("Please check the logs for more details.");
    }));
}
