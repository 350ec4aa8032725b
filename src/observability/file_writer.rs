//! Rotating log file writer with size-based rotation and backup retention.
//!
//! Keeps the log file of a long interactive session bounded: once the file
//! passes a size threshold it is renamed to a timestamped backup and a fresh
//! file is started. Only the newest few backups are kept.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Maximum file size before rotation (10 MB).
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
pub const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating file writer.
///
/// Implements [`Write`] for `&RotatingFileWriter`, so an `Arc` of it can be
/// handed to `tracing_subscriber` as a writer.
///
/// # Rotation Strategy
///
/// 1. Check the file size before each write
/// 2. If it exceeds the limit, rotate:
///    - Rename the current file to `<name>.<timestamp>`
///    - Open a new empty file on the next write
///    - Remove the oldest backups beyond the retention count
///
/// # Example
///
/// ```rust
/// use docshell::observability::RotatingFileWriter;
/// use std::io::Write;
///
/// let dir = std::env::temp_dir();
/// let writer = RotatingFileWriter::new(dir.join("docshell-doc-example.log"));
/// (&writer).write_all(b"started\n")?;
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct RotatingFileWriter {
    file_path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    /// Lazily opened on the first write.
    file: Mutex<Option<File>>,
}

impl RotatingFileWriter {
    /// A writer with the default limits (10 MB, 3 backups).
    #[must_use]
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    /// A writer that rotates past `max_bytes` and keeps `max_backups` backups.
    #[must_use]
    pub fn with_limits(file_path: impl Into<PathBuf>, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path: file_path.into(),
            max_bytes,
            max_backups,
            file: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Writes `buf` to the current file, rotating first if it is full.
    ///
    /// # Errors
    ///
    /// Fails if rotation, opening or writing fails, or if the lock is
    /// poisoned.
    fn write_rotating(&self, buf: &[u8]) -> io::Result<usize> {
        let mut file = self
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;

        self.check_and_rotate(&mut file)?;

        if file.is_none() {
            *file = Some(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.file_path)?,
            );
        }

        let handle = file
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No file available"))?;
        handle.write_all(buf)?;
        handle.flush()?;
        Ok(buf.len())
    }

    fn check_and_rotate(&self, file: &mut Option<File>) -> io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() > self.max_bytes {
                *file = None;
                self.rotate()?;
            }
        }
        Ok(())
    }

    /// Renames the current file to a timestamped backup and prunes old ones.
    ///
    /// Backups are named `<file name>.<YYYYmmddHHMMSSffffff>`, with a `-N`
    /// suffix if that name is already taken, so lexical order is age order.
    fn rotate(&self) -> io::Result<()> {
        let stamp = chrono::Local::now().format("%Y%m%d%H%M%S%6f").to_string();
        let base = format!("{}.{stamp}", self.file_name()?);

        let mut backup = self.file_path.with_file_name(&base);
        let mut n = 1;
        while backup.exists() {
            backup = self.file_path.with_file_name(format!("{base}-{n}"));
            n += 1;
        }

        if self.file_path.exists() {
            fs::rename(&self.file_path, &backup)?;
        }
        self.cleanup_old_backups()
    }

    /// Deletes backups beyond the retention count, newest kept.
    ///
    /// Individual deletion failures are ignored.
    fn cleanup_old_backups(&self) -> io::Result<()> {
        let mut backups = self.backups()?;
        backups.reverse();
        for old in backups.iter().skip(self.max_backups) {
            let _ = fs::remove_file(old);
        }
        Ok(())
    }

    /// Existing backups, oldest first.
    ///
    /// # Errors
    ///
    /// Fails if the log directory cannot be read.
    pub fn backups(&self) -> io::Result<Vec<PathBuf>> {
        let prefix = format!("{}.", self.file_name()?);
        let parent = match self.file_path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let mut backups: Vec<PathBuf> = fs::read_dir(parent)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&prefix))
            })
            .collect();
        backups.sort();
        Ok(backups)
    }

    fn file_name(&self) -> io::Result<&str> {
        self.file_path
            .file_name()
            .and_then(|s| s.to_str())
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "Invalid file name"))
    }
}

impl Write for &RotatingFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_rotating(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl std::fmt::Debug for RotatingFileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFileWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_until_the_limit() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RotatingFileWriter::with_limits(dir.path().join("shell.log"), 1024, 3);

        (&writer).write_all(b"one\n").unwrap();
        (&writer).write_all(b"two\n").unwrap();

        let contents = fs::read_to_string(writer.path()).unwrap();
        assert_eq!(contents, "one\ntwo\n");
        assert!(writer.backups().unwrap().is_empty());
    }

    #[test]
    fn rotates_past_the_limit_and_prunes_backups() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RotatingFileWriter::with_limits(dir.path().join("shell.log"), 10, 1);

        for _ in 0..6 {
            (&writer).write_all(b"12345678").unwrap();
        }

        let backups = writer.backups().unwrap();
        assert_eq!(backups.len(), 1);
        assert_eq!(fs::read_to_string(&backups[0]).unwrap(), "1234567812345678");
        assert_eq!(fs::read_to_string(writer.path()).unwrap(), "1234567812345678");
    }
}
