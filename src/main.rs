//! `pomochat` - terminal chat panel with a pomodoro timer
//!
//! Entry point for the application.

use std::time::Duration;

use clap::Parser;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use tokio::sync::mpsc;
use tokio::time::{Instant, interval_at};
use tracing::{debug, info, warn};

use pomochat::app::{App, AppEvent, AppOptions};
use pomochat::cli::{Args, resolve_username};
use pomochat::fs::{PomochatConfig, PomochatPaths, load_config};
use pomochat::logging;
use pomochat::tui::TerminalEventGuard;

/// Interval between timer ticks.
const TICK_INTERVAL: Duration = Duration::from_secs(1);

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    let paths = PomochatPaths::from_cwd();

    // Logging is best effort; the app works without it.
    let log_file = args.log_file.clone().unwrap_or_else(|| paths.log_file());
    let _log_guard = match logging::init(&log_file) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: logging disabled: {e:#}");
            None
        }
    };

    let config_file = args.config.clone().unwrap_or_else(|| paths.config_file());
    let mut notices = Vec::new();
    let config = load_config(&config_file).unwrap_or_else(|e| {
        warn!(error = %e, "config.load_failed");
        notices.push(format!("{e}. Using defaults."));
        PomochatConfig::default()
    });

    let options = AppOptions {
        username: resolve_username(args.username.as_deref(), config.username.as_deref()),
        tasks_open: args.tasks || config.tasks_open,
        tick_rate: Duration::from_millis(config.tick_ms),
        notices,
    };
    info!(username = %options.username, tasks_open = options.tasks_open, "app.starting");

    let mut terminal = ratatui::init();
    let result = run_app(&mut terminal, options);
    ratatui::restore();

    info!("app.exited");
    result
}

/// Sends [`AppEvent::Tick`] once per second until the app drops its receiver.
fn spawn_ticker(tx: mpsc::Sender<AppEvent>) {
    tokio::spawn(async move {
        let mut ticks = interval_at(Instant::now() + TICK_INTERVAL, TICK_INTERVAL);
        loop {
            ticks.tick().await;
            if tx.send(AppEvent::Tick).await.is_err() {
                debug!("ticker.stopped");
                break;
            }
        }
    });
}

fn run_app(terminal: &mut ratatui::DefaultTerminal, options: AppOptions) -> std::io::Result<()> {
    // Must come after ratatui::init, which resets terminal flags.
    let event_guard = TerminalEventGuard::new();
    debug!(modes = ?event_guard.enabled(), "terminal.ready");

    let mut app = App::new(options);
    spawn_ticker(app.event_sender());

    loop {
        terminal.draw(|frame| {
            app.update_layout(frame.area());
            app.render(frame);
        })?;

        if event::poll(app.tick_rate())? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Paste(text) => app.handle_paste(&text),
                _ => {}
            }
        }

        app.process_events();

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
