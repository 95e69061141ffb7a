//! Entry point: logging, terminal, event loop.

use anyhow::Result;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;

mod app;
mod auth;
mod config;
mod descriptors;
mod input;
mod layout;
mod mock;
mod models;
mod plans;
mod routes;
mod shortcuts;
mod toast;
mod ui;
mod view;
mod widgets;
mod worker;

const CONFIG_PATH: &str = "config.toml";

/// Log to `log_file` so the TUI's stdout stays clean.
fn init_logging(log_file: &str) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::never(".", log_file);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to init logging: {e}"))?;
    tracing::info!("logging to {}", log_file);
    Ok(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cfg_path = Path::new(CONFIG_PATH);
    // Only the log file name is needed before the loop reads the full config.
    let log_file = config::Config::load_or_default(cfg_path)?.app.log_file;
    let _log_guard = init_logging(&log_file)?;
    tracing::info!("app starting");

    let mut terminal = ui::init_terminal()?;
    let res = app::run_app(&mut terminal, cfg_path).await;
    ui::restore_terminal()?;

    if let Err(ref e) = res {
        tracing::error!("app error: {e:#}");
    }
    tracing::info!("app exiting");
    res
}
