//! Storage backend abstraction.
//!
//! This module defines the [`Storage`] trait that abstracts over the persistent
//! file store. The trait is minimal and maps directly to what the vault needs:
//! reading the credential file once, reading the favorites file once, and
//! overwriting the favorites file when the favorites list changes.

use crate::domain::error::Result;

/// Abstraction over the persistent file store.
///
/// # Implementations
///
/// - [`FileStorage`](super::FileStorage): plain files on disk (default)
/// - [`MemoryStorage`](super::MemoryStorage): in-memory, for tests
///
/// # Examples
///
/// ```
/// use passvault::storage::{MemoryStorage, Storage};
///
/// let mut storage = MemoryStorage::new("Amazon\tciphertext\n");
/// storage.save_favorites(&["Amazon"])?;
/// assert_eq!(storage.favorites()?.as_deref(), Some("Amazon\n"));
/// # Ok::<(), passvault::VaultError>(())
/// ```
pub trait Storage {
    /// Returns the raw contents of the credential file.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::Storage`](crate::VaultError::Storage) if the file
    /// is missing or unreadable.
    fn credentials(&self) -> Result<String>;

    /// Returns the raw contents of the favorites file, or `None` if it does not
    /// exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    fn favorites(&self) -> Result<Option<String>>;

    /// Overwrites the favorites file with one name per line, most recent first.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn save_favorites(&mut self, names: &[&str]) -> Result<()>;

    /// Appends one sealed record to the credential file.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn append_credential(&mut self, name: &str, token: &str) -> Result<()>;
}
