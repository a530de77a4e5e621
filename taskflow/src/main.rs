//! `TaskFlow` — terminal-native task manager.
//!
//! Launches the TUI over an in-memory task store seeded from the
//! built-in dataset. Configuration via CLI flags, environment variables,
//! or config file (`~/.config/taskflow/config.toml`).
//!
//! ```bash
//! # Run with the built-in seed data
//! cargo run --bin taskflow
//!
//! # Run against your own task dataset
//! cargo run --bin taskflow -- --seed-file my-tasks.json
//!
//! # Verbose logging to a chosen file
//! TASKFLOW_LOG=debug cargo run --bin taskflow -- --log-file /tmp/tf.log
//! ```

use std::io;
use std::path::Path;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_appender::non_blocking::WorkerGuard;

use taskflow::app::{App, AppCommand};
use taskflow::config::{AppConfig, CliArgs};
use taskflow::store::{CategoryStore, StoreError, TaskStore, seed};
use taskflow::ui;

#[tokio::main]
async fn main() -> io::Result<()> {
    let cli = CliArgs::parse();

    // Load and resolve configuration (CLI args > config file > defaults).
    let config = match AppConfig::load(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Warning: failed to load config file: {e}");
            AppConfig::default()
        }
    };

    // Initialize logging before terminal setup (logs go to file, not stdout).
    let _log_guard = init_logging(&cli.log_level, cli.log_file.as_deref());

    tracing::info!("taskflow starting");

    // Load seed datasets before taking over the terminal so parse errors
    // stay readable.
    let seed_tasks = match cli.seed_file.as_deref() {
        Some(path) => seed::tasks_from_file(path),
        None => seed::builtin_tasks(),
    }
    .map_err(io::Error::other)?;
    let seed_categories = seed::builtin_categories().map_err(io::Error::other)?;

    // Set up terminal.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app.
    let result = run_app(&mut terminal, &config, seed_tasks, seed_categories).await;

    // Restore terminal.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("taskflow exiting");
    result
}

/// Initialize file-based logging.
///
/// Logs are written to a file (never stdout, since ratatui owns the
/// terminal). Returns a [`WorkerGuard`] that must be held until shutdown
/// to ensure all buffered log entries are flushed.
fn init_logging(level: &str, file_path: Option<&Path>) -> Option<WorkerGuard> {
    let default_path = std::env::temp_dir().join("taskflow.log");
    let log_path = file_path.unwrap_or(&default_path);

    let log_dir = log_path.parent()?;
    let file_name = log_path.file_name()?.to_str()?;

    let file_appender = tracing_appender::rolling::never(log_dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(env_filter)
        .with_ansi(false)
        .init();

    Some(guard)
}

/// Main application loop.
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &AppConfig,
    seed_tasks: Vec<taskflow_model::Task>,
    seed_categories: Vec<taskflow_model::Category>,
) -> io::Result<()> {
    let task_store = TaskStore::with_seed(seed_tasks, config.latency, config.defaults.clone());
    let category_store = CategoryStore::with_seed(seed_categories, config.latency);

    let mut app = App::new()
        .with_max_title_len(config.max_title_len)
        .with_date_format(config.date_format.clone());

    sync_snapshots(&mut app, &task_store, &category_store).await;

    loop {
        // Step 1: Draw the UI frame.
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Step 2: Poll for terminal input events.
        if event::poll(config.poll_timeout)?
            && let Event::Key(key) = event::read()?
        {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            // handle_key_event returns Some(AppCommand) when the key
            // requires a store mutation. Dispatch is awaited inline, so
            // at most one mutation is ever in flight.
            if let Some(command) = app.handle_key_event(key) {
                dispatch_command(&mut app, &task_store, command).await;
                sync_snapshots(&mut app, &task_store, &category_store).await;
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Runs one store mutation and folds the outcome into the status line.
async fn dispatch_command(app: &mut App, tasks: &TaskStore, command: AppCommand) {
    let outcome: Result<&str, StoreError> = match command {
        AppCommand::CreateTask(draft) => tasks.create(draft).await.map(|_| "Task added"),
        AppCommand::ToggleComplete(id) => tasks
            .toggle_complete(&id)
            .await
            .map(|t| if t.completed { "Task completed" } else { "Task reopened" }),
        AppCommand::DeleteTask(id) => tasks.delete(&id).await.map(|()| "Task deleted"),
        AppCommand::ArchiveTask(id) => tasks.archive(&id).await.map(|_| "Task archived"),
    };

    match outcome {
        Ok(message) => app.push_status(message),
        Err(e) => {
            tracing::warn!(error = %e, "store operation failed");
            app.push_status(e.to_string());
        }
    }
}

/// Pulls fresh copies out of the stores and recomputes the dashboard.
async fn sync_snapshots(app: &mut App, tasks: &TaskStore, categories: &CategoryStore) {
    let task_snapshot = tasks.get_all().await;
    let category_snapshot = categories.get_all().await;
    app.set_data(task_snapshot, category_snapshot);
}
