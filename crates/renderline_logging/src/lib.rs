//! Shared logging utilities for Renderline binaries.

use anyhow::{Context, Result};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const DEFAULT_LOG_FILTER: &str = "renderline=info,renderline_hooks=info,renderline_protocol=info";

/// Logging configuration shared by Renderline binaries.
pub struct LogConfig<'a> {
    pub app_name: &'a str,
    pub verbose: bool,
}

/// Initialize tracing with an append-mode log file and stderr output.
///
/// The file layer always honors `RUST_LOG`/the default filter; the stderr
/// layer is restricted to warnings unless `verbose` is set, so batch render
/// output stays readable.
pub fn init_logging(config: LogConfig<'_>) -> Result<()> {
    let log_dir = ensure_logs_dir().context("Failed to ensure log directory")?;
    let file_writer = SharedFileWriter::open(log_dir, config.app_name)
        .context("Failed to open log file")?;

    let file_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let console_filter = if config.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_writer)
                .with_ansi(false)
                .with_filter(file_filter),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_filter(console_filter),
        )
        .init();

    Ok(())
}

/// Renderline home directory: `RENDERLINE_HOME` override, else `~/.renderline`.
pub fn renderline_home() -> PathBuf {
    if let Ok(override_path) = std::env::var("RENDERLINE_HOME") {
        return PathBuf::from(override_path);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".renderline")
}

/// Logs directory: `{home}/logs`.
pub fn logs_dir() -> PathBuf {
    renderline_home().join("logs")
}

/// Ensure the logs directory exists.
pub fn ensure_logs_dir() -> Result<PathBuf> {
    let logs = logs_dir();
    fs::create_dir_all(&logs)
        .with_context(|| format!("Failed to create logs directory: {}", logs.display()))?;
    Ok(logs)
}

#[derive(Clone)]
struct SharedFileWriter {
    inner: Arc<Mutex<File>>,
}

impl SharedFileWriter {
    fn open(dir: PathBuf, app_name: &str) -> Result<Self> {
        let path = dir.join(format!("{}.log", sanitize_name(app_name)));
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open log file: {}", path.display()))?;
        Ok(Self {
            inner: Arc::new(Mutex::new(file)),
        })
    }
}

struct SharedFileGuard {
    inner: Arc<Mutex<File>>,
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for SharedFileWriter {
    type Writer = SharedFileGuard;

    fn make_writer(&'a self) -> Self::Writer {
        SharedFileGuard {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Write for SharedFileGuard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log writer lock poisoned"))?;
        guard.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log writer lock poisoned"))?;
        guard.flush()
    }
}

fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' {
                ch
            } else {
                '_'
            }
        })
        .collect()
}
