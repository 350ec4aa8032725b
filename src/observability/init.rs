//! Tracing initialization and subscriber setup.

use super::file_writer::RotatingFileWriter;
use crate::Config;
use std::sync::Arc;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// # Level Resolution
///
/// 1. `RUST_LOG` if set and valid
/// 2. `config.trace_level` if set
/// 3. `"info"`
///
/// # Output
///
/// With `config.log_file` set, events go to that file through a
/// [`RotatingFileWriter`] without ANSI colors. Otherwise they go to stderr.
/// If the log file's directory cannot be created, stderr is used instead.
///
/// Idempotent: only the first call takes effect.
///
/// # Example
///
/// ```rust
/// use docshell::observability::init_tracing;
/// use docshell::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let (writer, ansi) = match &config.log_file {
        Some(path) => match path.parent().map_or(Ok(()), std::fs::create_dir_all) {
            Ok(()) => (
                BoxMakeWriter::new(Arc::new(RotatingFileWriter::new(path.clone()))),
                false,
            ),
            Err(e) => {
                eprintln!("docshell: cannot create log directory for {}: {e}", path.display());
                (BoxMakeWriter::new(std::io::stderr), true)
            }
        },
        None => (BoxMakeWriter::new(std::io::stderr), true),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false)
        .try_init();
}
