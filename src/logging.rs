use anyhow::Result;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, EnvFilter};

pub fn log_dir() -> PathBuf {
    let cache_root = dirs::cache_dir().unwrap_or_else(|| {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".cache")
    });
    cache_root.join("spotify-kiosk").join("logs")
}

/// Log to a daily file; the terminal belongs to the UI.
///
/// Keep the returned guard alive for the life of the process or buffered lines are lost.
pub fn init() -> Result<WorkerGuard> {
    let dir = log_dir();
    std::fs::create_dir_all(&dir)?;

    let appender = tracing_appender::rolling::daily(&dir, "spotify-kiosk.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    Ok(guard)
}
