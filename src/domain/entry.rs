//! Credential entry model.
//!
//! An [`Entry`] is one decrypted record: a display name and its secret. Entries
//! are owned by the [`EntryStore`](super::EntryStore); every other component
//! refers to them through an [`EntryId`].

use std::fmt;
use zeroize::Zeroizing;

/// Index of an entry inside its [`EntryStore`](super::EntryStore).
///
/// The store is immutable after load, so an id stays valid for the lifetime of
/// the store that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub(crate) usize);

impl EntryId {
    /// Returns the position of the entry in load order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One credential record with its plaintext secret.
///
/// The secret is wiped from memory when the entry is dropped.
#[derive(Clone)]
pub struct Entry {
    name: String,
    secret: Zeroizing<String>,
}

impl Entry {
    /// Creates an entry from a display name and a decrypted secret.
    ///
    /// # Examples
    ///
    /// ```
    /// use passvault::Entry;
    ///
    /// let entry = Entry::new("Amazon", "p1");
    /// assert_eq!(entry.name(), "Amazon");
    /// assert_eq!(entry.secret(), "p1");
    /// ```
    pub fn new(name: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            secret: Zeroizing::new(secret.into()),
        }
    }

    pub(crate) fn from_parts(name: String, secret: Zeroizing<String>) -> Self {
        Self { name, secret }
    }

    /// Display name, as stored in the first field of the credential file.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Decrypted secret.
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Case-insensitive prefix test used by the filter.
    ///
    /// An empty prefix matches every entry.
    #[must_use]
    pub fn name_starts_with(&self, prefix: &str) -> bool {
        let mut name = self.name.chars().flat_map(char::to_lowercase);
        prefix
            .chars()
            .flat_map(char::to_lowercase)
            .all(|p| name.next() == Some(p))
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("name", &self.name)
            .field("secret", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_match_ignores_case() {
        let entry = Entry::new("Amazon", "p1");
        assert!(entry.name_starts_with("am"));
        assert!(entry.name_starts_with("AMA"));
        assert!(entry.name_starts_with(""));
        assert!(!entry.name_starts_with("amx"));
        assert!(!entry.name_starts_with("amazonas"));
    }

    #[test]
    fn debug_output_hides_secret() {
        let entry = Entry::new("Bank", "hunter2");
        let printed = format!("{entry:?}");
        assert!(printed.contains("Bank"));
        assert!(!printed.contains("hunter2"));
    }
}
