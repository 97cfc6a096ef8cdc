//! Logging initialization for the binary.

use anyhow::{anyhow, Context};
use std::fs::{self, File, OpenOptions};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Must be held until the process exits or buffered lines are lost.
pub struct LogGuard {
    _file_guard: WorkerGuard,
}

/// Append log records to `path`.
///
/// `RUST_LOG` overrides the default `info` filter. `RUST_ENV=production`
/// switches to JSON lines.
pub fn init_logging(path: &Path) -> anyhow::Result<LogGuard> {
    let file = open_log_file(path)?;
    let (writer, file_guard) = tracing_appender::non_blocking(file);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let is_production = std::env::var("RUST_ENV")
        .map(|v| v == "production")
        .unwrap_or(false);

    if is_production {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(writer))
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false)
                    .with_target(true),
            )
            .try_init()?;
    }

    Ok(LogGuard {
        _file_guard: file_guard,
    })
}

/// Open `path` for appending, creating missing parent directories.
/// Earlier contents are never truncated.
fn open_log_file(path: &Path) -> anyhow::Result<File> {
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("log path `{}` has no file name", path.display()))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory `{}`", dir.display()))?;

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(file_name))
        .with_context(|| format!("failed to open log file `{}`", path.display()))
}
