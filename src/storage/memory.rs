//! In-memory storage backend.
//!
//! Holds both files as strings and counts favorites writes, which lets tests
//! observe exactly when the persistence policy fires.

use crate::domain::error::{Result, VaultError};
use crate::storage::backend::Storage;
use crate::storage::records;

/// In-memory storage backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    credentials: Option<String>,
    favorites: Option<String>,
    favorites_writes: usize,
}

impl MemoryStorage {
    /// Creates a backend whose credential file holds `credentials`.
    #[must_use]
    pub fn new(credentials: impl Into<String>) -> Self {
        Self {
            credentials: Some(credentials.into()),
            ..Self::default()
        }
    }

    /// Creates a backend with no credential file at all.
    #[must_use]
    pub fn missing() -> Self {
        Self::default()
    }

    /// Seeds the favorites file.
    #[must_use]
    pub fn with_favorites(mut self, favorites: impl Into<String>) -> Self {
        self.favorites = Some(favorites.into());
        self
    }

    /// Number of times the favorites file was written.
    #[must_use]
    pub const fn favorites_writes(&self) -> usize {
        self.favorites_writes
    }

    /// Current favorites file contents.
    #[must_use]
    pub fn favorites_text(&self) -> Option<&str> {
        self.favorites.as_deref()
    }
}

impl Storage for MemoryStorage {
    fn credentials(&self) -> Result<String> {
        self.credentials
            .clone()
            .ok_or_else(|| VaultError::Storage("credential file not found".to_string()))
    }

    fn favorites(&self) -> Result<Option<String>> {
        Ok(self.favorites.clone())
    }

    fn save_favorites(&mut self, names: &[&str]) -> Result<()> {
        self.favorites = Some(records::format_favorites(names));
        self.favorites_writes += 1;
        Ok(())
    }

    fn append_credential(&mut self, name: &str, token: &str) -> Result<()> {
        self.credentials
            .get_or_insert_with(String::new)
            .push_str(&records::format_credential(name, token));
        Ok(())
    }
}
