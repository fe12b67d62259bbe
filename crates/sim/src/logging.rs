//! Tracing setup: stderr plus one log file per session.
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Platform cache directory for logs.
///
/// - macOS: `~/Library/Caches/copilot/logs`
/// - Linux: `~/.cache/copilot/logs` (or `$XDG_CACHE_HOME/copilot/logs`)
/// - Windows: `%LOCALAPPDATA%\copilot\logs`
/// - Fallback: `/tmp/copilot/logs`
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "copilot")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/copilot"))
        .join("logs")
}

/// Installs the global subscriber. Keep the returned guard alive for the
/// whole run so the file writer flushes.
pub fn setup_logging(session_id: Option<&str>) -> Result<WorkerGuard> {
    let session_id = session_id.map(str::to_string).unwrap_or_else(|| {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default();
        format!("session_{timestamp}")
    });

    let session_dir = log_dir().join(&session_id);
    std::fs::create_dir_all(&session_dir)
        .with_context(|| format!("failed to create log directory {}", session_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&session_dir, "sim.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(fmt::layer().with_writer(non_blocking_file).with_ansi(false))
        .try_init()
        .context("failed to install tracing subscriber")?;

    tracing::info!(session = %session_id, "logging initialized");
    tracing::info!("log file: {}", session_dir.join("sim.log").display());

    Ok(guard)
}
