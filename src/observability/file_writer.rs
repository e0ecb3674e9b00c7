//! Rotating log file with size-based rotation and backup retention.
//!
//! [`RotatingFile`] is handed to the `tracing-subscriber` fmt layer as its
//! writer. Before each write it checks the file size; past the limit the file
//! is renamed with a timestamp suffix, a fresh one is started, and backups
//! beyond the retention count are removed.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::MakeWriter;

/// Maximum file size before rotation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating log file.
///
/// The file is opened lazily on the first write, so construction succeeds even
/// if the directory is not writable yet.
pub struct RotatingFile {
    file_path: PathBuf,
    max_bytes: u64,
    writer: Mutex<Option<File>>,
}

impl RotatingFile {
    /// Creates a writer for `file_path` with the default 10 MB limit.
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limit(file_path, MAX_FILE_SIZE_BYTES)
    }

    /// Creates a writer that rotates once the file exceeds `max_bytes`.
    #[must_use]
    pub const fn with_limit(file_path: PathBuf, max_bytes: u64) -> Self {
        Self {
            file_path,
            max_bytes,
            writer: Mutex::new(None),
        }
    }

    /// Appends `buf`, rotating first if the file is over the limit.
    ///
    /// # Errors
    ///
    /// Fails on rotation, open, or write errors, or if the lock is poisoned.
    pub fn append(&self, buf: &[u8]) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;

        self.check_and_rotate(&mut writer)?;

        if writer.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *writer = Some(file);
        }

        let file = writer
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No file available"))?;

        file.write_all(buf)?;
        file.flush()
    }

    fn check_and_rotate(&self, writer: &mut Option<File>) -> io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() > self.max_bytes {
                *writer = None;
                self.rotate_files()?;
            }
        }
        Ok(())
    }

    /// Renames the current file to `<name>.<unix_timestamp>` and prunes backups.
    fn rotate_files(&self) -> io::Result<()> {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or(std::time::Duration::from_secs(0))
            .as_millis();

        let mut backup_name = self.file_path.clone().into_os_string();
        backup_name.push(format!(".{timestamp}"));

        if self.file_path.exists() {
            fs::rename(&self.file_path, PathBuf::from(backup_name))?;
        }

        self.cleanup_old_backups()
    }

    /// Removes backups beyond the retention limit, oldest first.
    ///
    /// Individual deletion errors are ignored so cleanup continues.
    fn cleanup_old_backups(&self) -> io::Result<()> {
        let parent_dir = self
            .file_path
            .parent()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No parent directory"))?;

        let prefix = self
            .file_path
            .file_name()
            .and_then(|s| s.to_str())
            .map(|name| format!("{name}."))
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "Invalid file name"))?;

        let mut backups: Vec<PathBuf> = fs::read_dir(parent_dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&prefix))
            })
            .collect();

        // Timestamp suffixes of equal width sort chronologically.
        backups.sort();
        backups.reverse();

        for old_backup in backups.iter().skip(MAX_BACKUP_FILES) {
            let _ = fs::remove_file(old_backup);
        }

        Ok(())
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .finish_non_exhaustive()
    }
}

/// Per-event writer handed out by [`RotatingFile`].
#[derive(Debug)]
pub struct LogWriter<'a> {
    file: &'a RotatingFile,
}

impl Write for LogWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.append(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for RotatingFile {
    type Writer = LogWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        LogWriter { file: self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backups(dir: &std::path::Path) -> usize {
        fs::read_dir(dir)
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.file_name().to_string_lossy().starts_with("test.log."))
            .count()
    }

    #[test]
    fn rotates_past_limit_and_keeps_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.log");
        let file = RotatingFile::with_limit(path.clone(), 16);

        file.append(b"first line that is long\n").unwrap();
        assert_eq!(backups(dir.path()), 0);
        file.append(b"second\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second\n");
        assert_eq!(backups(dir.path()), 1);
    }

    #[test]
    fn retention_is_bounded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.log");
        for stamp in ["1000", "1001", "1002", "1003", "1004"] {
            fs::write(dir.path().join(format!("test.log.{stamp}")), "old").unwrap();
        }
        let file = RotatingFile::with_limit(path.clone(), 1);
        file.append(b"xx").unwrap();
        file.append(b"yy").unwrap();

        assert_eq!(backups(dir.path()), MAX_BACKUP_FILES);
        assert!(!dir.path().join("test.log.1000").exists());
    }

    #[test]
    fn make_writer_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.log");
        let file = RotatingFile::new(path.clone());
        write!(file.make_writer(), "hello").unwrap();
        writeln!(file.make_writer(), " world").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello world\n");
    }
}
