//! Plain-file storage backend.
//!
//! Reads the credential file and the favorites file from disk and rewrites the
//! favorites file with an atomic write (write-to-temp + rename) so a crash never
//! leaves it half written.

use crate::domain::error::{Result, VaultError};
use crate::storage::backend::Storage;
use crate::storage::records;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// File storage backend.
///
/// # File Format
///
/// ```text
/// # crypted.txt
/// Amazon<TAB>base64-token
/// Bank<TAB>base64-token
///
/// # fav.txt
/// Bank
/// Amazon
/// ```
#[derive(Debug, Clone)]
pub struct FileStorage {
    credentials_path: PathBuf,
    favorites_path: PathBuf,
}

impl FileStorage {
    /// Creates a backend over the two files. Nothing is read until asked.
    #[must_use]
    pub fn new(credentials_path: PathBuf, favorites_path: PathBuf) -> Self {
        Self {
            credentials_path,
            favorites_path,
        }
    }

    /// Path of the credential file.
    #[must_use]
    pub fn credentials_path(&self) -> &Path {
        &self.credentials_path
    }

    /// Path of the favorites file.
    #[must_use]
    pub fn favorites_path(&self) -> &Path {
        &self.favorites_path
    }

    /// Writes `contents` next to `path` and renames it into place.
    fn write_atomic(path: &Path, contents: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tracing::trace!(parent = ?parent, "creating parent directory");
                std::fs::create_dir_all(parent)?;
            }
        }

        let tmp_path = path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, contents)?;

        tracing::trace!("renaming temporary file to final location");
        std::fs::rename(&tmp_path, path)?;
        Ok(())
    }
}

impl Storage for FileStorage {
    fn credentials(&self) -> Result<String> {
        tracing::debug!(path = ?self.credentials_path, "reading credential file");

        std::fs::read_to_string(&self.credentials_path).map_err(|e| {
            VaultError::Storage(format!(
                "cannot open {}: {e}",
                self.credentials_path.display()
            ))
        })
    }

    fn favorites(&self) -> Result<Option<String>> {
        tracing::debug!(path = ?self.favorites_path, "reading favorites file");

        match std::fs::read_to_string(&self.favorites_path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("no favorites file yet");
                Ok(None)
            }
            Err(e) => Err(VaultError::Storage(format!(
                "cannot open {}: {e}",
                self.favorites_path.display()
            ))),
        }
    }

    fn save_favorites(&mut self, names: &[&str]) -> Result<()> {
        let _span = tracing::debug_span!("save_favorites", count = names.len()).entered();

        Self::write_atomic(&self.favorites_path, &records::format_favorites(names))?;

        tracing::debug!("favorites saved");
        Ok(())
    }

    fn append_credential(&mut self, name: &str, token: &str) -> Result<()> {
        if let Some(parent) = self.credentials_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.credentials_path)?;
        file.write_all(records::format_credential(name, token).as_bytes())?;
        file.flush()?;

        tracing::debug!(name = %name, "credential appended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage_in(dir: &Path) -> FileStorage {
        FileStorage::new(dir.join("crypted.txt"), dir.join("nested/fav.txt"))
    }

    #[test]
    fn missing_credentials_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(dir.path());
        assert!(matches!(storage.credentials(), Err(VaultError::Storage(_))));
    }

    #[test]
    fn missing_favorites_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(dir.path());
        assert!(storage.favorites().unwrap().is_none());
    }

    #[test]
    fn favorites_are_overwritten_not_appended() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = storage_in(dir.path());

        storage.save_favorites(&["Apple"]).unwrap();
        storage.save_favorites(&["Bank", "Apple"]).unwrap();

        assert_eq!(storage.favorites().unwrap().as_deref(), Some("Bank\nApple\n"));
        assert!(!dir.path().join("nested/fav.tmp").exists());
    }

    #[test]
    fn appended_credentials_read_back_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = storage_in(dir.path());

        storage.append_credential("Amazon", "AAA").unwrap();
        storage.append_credential("Bank", "BBB").unwrap();

        assert_eq!(storage.credentials().unwrap(), "Amazon\tAAA\nBank\tBBB\n");
    }
}
