//! Tracing initialization shared by the binary and integration tests.

use std::fs::OpenOptions;
use std::sync::Arc;

use tracing_subscriber::{
    fmt::format::Writer, fmt::time::FormatTime, layer::SubscriberExt, util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Local wall-clock time as `YYYY-MM-DD HH:MM:SS` for log lines.
struct WallClock;

impl FormatTime for WallClock {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{} ", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"))
    }
}

/// Installs the global tracing subscriber.
///
/// Events go to stdout and, without ANSI codes, to `log_file_path` in append
/// mode. The filter comes from `RUST_LOG` and defaults to `info`. Call this
/// after loading `.env`, otherwise the variable is not seen.
pub fn init_tracing(log_file_path: &str) -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_timer(WallClock)
        .with_target(true);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(Arc::new(file))
        .with_timer(WallClock)
        .with_target(true)
        .with_ansi(false);

    Registry::default()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    Ok(())
}
