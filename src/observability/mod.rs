//! Structured logging for the shell.
//!
//! # Configuration
//!
//! Log level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! Output goes to stderr, or to `log_file` with size-based rotation
//! (10 MB, 3 backups) when that option is set.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Rotating file writer

mod file_writer;
mod init;

pub use file_writer::{RotatingFileWriter, MAX_BACKUP_FILES, MAX_FILE_SIZE_BYTES};
pub use init::init_tracing;
