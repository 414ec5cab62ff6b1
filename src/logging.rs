//! Tracing setup for the terminal binary.
//!
//! Console events go to stderr so they never interleave with the views
//! printed on stdout. With `ENABLE_FILE_LOGS` set, a daily rotated copy is
//! also written under `LOG_DIR`.

use std::path::PathBuf;

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const FALLBACK_FILTER: &str = "warn";
const LOG_FILE_PREFIX: &str = "scenelingo.log";

/// Keeps the background file writer alive; dropping it flushes the log.
pub struct FileLogGuard {
    _guard: WorkerGuard,
}

pub fn file_logging_enabled() -> bool {
    std::env::var("ENABLE_FILE_LOGS").is_ok_and(|v| is_truthy(&v))
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim(), "true" | "1")
}

fn log_dir() -> PathBuf {
    std::env::var("LOG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./logs"))
}

fn file_writer() -> Option<(NonBlocking, WorkerGuard)> {
    if !file_logging_enabled() {
        return None;
    }
    let dir = log_dir();
    if let Err(err) = std::fs::create_dir_all(&dir) {
        eprintln!("failed to create log directory {}: {err}", dir.display());
        return None;
    }
    let appender = RollingFileAppender::new(Rotation::DAILY, &dir, LOG_FILE_PREFIX);
    Some(tracing_appender::non_blocking(appender))
}

pub fn init_tracing(log_level: &str) -> Option<FileLogGuard> {
    let env_filter =
        EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new(FALLBACK_FILTER));
    let console = fmt::layer().with_writer(std::io::stderr).with_target(true);

    let (file_layer, guard) = match file_writer() {
        Some((writer, guard)) => {
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console)
        .with(file_layer)
        .init();

    guard.map(|guard| FileLogGuard { _guard: guard })
}
