//! Chameleon demo - sample screen for the Chameleon state container.
//!
//! Responsibilities:
//! - Parse the CLI, initialize file logging and the terminal.
//! - Load the optional attribute file.
//! - Run the event loop: terminal input, UI ticks and container actions.
//!
//! Does NOT handle:
//! - State switching rules (see `app`).
//! - Container behavior (see `chameleon`).
//!
//! Invariants:
//! - Logs go to a daily-rolled file under `--log-dir`, never to the terminal.
//! - Mouse capture is enabled by default unless `--no-mouse` is specified.

use anyhow::{Context, Result};
use chameleon_config::AttributeSet;
use chameleon_config::constants::{DEFAULT_CHANNEL_CAPACITY, DEFAULT_UI_TICK_MS};
use chameleon_tui::action::Action;
use chameleon_tui::app::App;
use chameleon_tui::cli::Cli;
use chameleon_tui::runtime::TerminalGuard;
use clap::Parser;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures_util::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc::{Sender, channel, error::TrySendError};
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, "chameleon-demo.log");
    // _guard must live for the whole of main() so buffered logs are flushed.
    let (non_blocking, _guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(non_blocking))
        .init();

    let attrs = match &cli.attrs {
        Some(path) => Some(
            AttributeSet::from_path(path)
                .with_context(|| format!("Failed to load attributes from {}", path.display()))?,
        ),
        None => None,
    };

    let (tx, mut rx) = channel::<Action>(DEFAULT_CHANNEL_CAPACITY);
    let mut app = App::new(attrs.as_ref(), cli.theme, cli.items, tx.clone())
        .context("Invalid chameleon attributes")?;
    tracing::info!(items = cli.items, theme = %cli.theme, "Starting chameleon demo");

    let terminal_guard = TerminalGuard::setup(cli.no_mouse).context("Failed to set up terminal")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;

    let input_task = tokio::spawn(forward_input(tx));
    let mut tick_interval =
        tokio::time::interval(tokio::time::Duration::from_millis(DEFAULT_UI_TICK_MS));

    while !app.should_quit {
        terminal.draw(|f| app.render(f))?;

        tokio::select! {
            Some(action) = rx.recv() => app.update(action),
            _ = tick_interval.tick() => app.update(Action::Tick),
        }

        // Listener callbacks enqueue follow-up actions while `update` runs.
        while let Ok(action) = rx.try_recv() {
            app.update(action);
        }
    }

    input_task.abort();
    terminal.show_cursor()?;
    drop(terminal_guard);
    tracing::info!("Chameleon demo exited");
    Ok(())
}

/// Read terminal events and forward them as actions until the channel closes.
async fn forward_input(tx: Sender<Action>) {
    let mut reader = EventStream::new();
    while let Some(event_result) = reader.next().await {
        let event = match event_result {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!(error = %e, "Terminal event stream failed");
                break;
            }
        };

        let action = match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Action::Input(key),
            Event::Mouse(mouse) => Action::Mouse(mouse),
            Event::Resize(width, height) => Action::Resize(width, height),
            _ => continue,
        };

        if matches!(action, Action::Mouse(_)) {
            // Mouse moves can flood the channel; dropping them is harmless.
            match tx.try_send(action) {
                Ok(()) => {}
                Err(TrySendError::Full(_)) => {
                    tracing::debug!("Action channel full, dropping mouse event");
                }
                Err(TrySendError::Closed(_)) => break,
            }
        } else if tx.send(action).await.is_err() {
            break;
        }
    }
}
