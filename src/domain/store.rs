//! The entry store and its derived glyph set.
//!
//! [`EntryStore`] is populated once at startup from the storage collaborator and
//! is read-only afterwards. Every view in the application (filtered list,
//! favorites, detail) refers to its entries by [`EntryId`].

use super::entry::{Entry, EntryId};
use super::error::{Result, VaultError};
use crate::infrastructure::cipher::Cipher;
use crate::storage::records;
use crate::storage::Storage;
use std::collections::BTreeSet;

/// Sorted set of distinct lower-cased leading characters across entry names.
///
/// Drives the adaptive filter keypad: one cell per glyph, in ascending code
/// point order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlyphSet(Vec<char>);

impl GlyphSet {
    /// Derives the glyph set from a sequence of entry names.
    ///
    /// # Examples
    ///
    /// ```
    /// use passvault::GlyphSet;
    ///
    /// let glyphs = GlyphSet::from_names(["Amazon", "apple", "Bank"]);
    /// assert_eq!(glyphs.as_slice(), &['a', 'b']);
    /// ```
    ///
    /// A leading character that lowercases to several characters contributes
    /// only the first of them, which is what a prefix query compares against.
    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let present: BTreeSet<char> = names
            .into_iter()
            .filter_map(|name| name.chars().next()?.to_lowercase().next())
            .collect();
        Self(present.into_iter().collect())
    }

    /// Glyphs in ascending order.
    #[must_use]
    pub fn as_slice(&self) -> &[char] {
        &self.0
    }

    /// Glyph at a keypad cell index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<char> {
        self.0.get(index).copied()
    }

    /// Number of glyphs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no entries were loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Insertion-ordered, immutable collection of decrypted entries.
#[derive(Debug, Clone, Default)]
pub struct EntryStore {
    entries: Vec<Entry>,
    glyphs: GlyphSet,
}

impl EntryStore {
    /// Builds a store directly from entries, keeping their order.
    #[must_use]
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        let glyphs = GlyphSet::from_names(entries.iter().map(Entry::name));
        Self { entries, glyphs }
    }

    /// Loads and decrypts the credential file.
    ///
    /// Each line holds `name<TAB>ciphertext`. Records are appended in file order
    /// and the glyph set is derived from the name fields.
    ///
    /// # Errors
    ///
    /// - [`VaultError::Storage`] if the credential file cannot be opened
    /// - [`VaultError::Decryption`] if a record fails authenticated decryption
    pub fn load(storage: &dyn Storage, cipher: &dyn Cipher) -> Result<Self> {
        let _span = tracing::debug_span!("entry_store_load").entered();

        let contents = storage.credentials()?;
        let parsed = records::parse_credentials(&contents);

        tracing::debug!(
            records = parsed.len(),
            longest_line = records::longest_line(&contents),
            "credential file scanned"
        );

        let mut entries = Vec::with_capacity(parsed.len());
        for record in parsed {
            let secret = cipher.decrypt(record.ciphertext).map_err(|e| {
                tracing::debug!(line = record.line, error = %e, "record rejected");
                VaultError::Decryption {
                    line: record.line,
                    name: record.name.to_string(),
                }
            })?;
            entries.push(Entry::from_parts(record.name.to_string(), secret));
        }

        let store = Self::from_entries(entries);
        tracing::info!(
            entries = store.len(),
            glyphs = store.glyphs.len(),
            "entry store loaded"
        );
        Ok(store)
    }

    /// Entry for an id produced by this store.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this store.
    #[must_use]
    pub fn entry(&self, id: EntryId) -> &Entry {
        &self.entries[id.0]
    }

    /// Entry for an id, or `None` if the id is out of range.
    #[must_use]
    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.get(id.0)
    }

    /// Looks up an entry by exact name. The first match in load order wins.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<EntryId> {
        self.entries
            .iter()
            .position(|entry| entry.name() == name)
            .map(EntryId)
    }

    /// All entry ids in load order.
    pub fn ids(&self) -> impl Iterator<Item = EntryId> + '_ {
        (0..self.entries.len()).map(EntryId)
    }

    /// Iterates `(id, entry)` pairs in load order.
    pub fn iter(&self) -> impl Iterator<Item = (EntryId, &Entry)> + '_ {
        self.entries.iter().enumerate().map(|(i, e)| (EntryId(i), e))
    }

    /// The glyph set derived at load.
    #[must_use]
    pub const fn glyphs(&self) -> &GlyphSet {
        &self.glyphs
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing was loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::cipher::CipherError;
    use crate::storage::MemoryStorage;
    use zeroize::Zeroizing;

    /// Reverses the ciphertext; refuses anything starting with `!`.
    struct ReverseCipher;

    impl Cipher for ReverseCipher {
        fn decrypt(&self, ciphertext: &str) -> std::result::Result<Zeroizing<String>, CipherError> {
            if ciphertext.starts_with('!') {
                return Err(CipherError::Rejected);
            }
            Ok(Zeroizing::new(ciphertext.chars().rev().collect()))
        }
    }

    #[test]
    fn load_keeps_file_order_and_decrypts() {
        let storage = MemoryStorage::new("Zeta\t1p\nAmazon\t2p\napple\t3p\n");
        let store = EntryStore::load(&storage, &ReverseCipher).unwrap();

        let names: Vec<&str> = store.iter().map(|(_, e)| e.name()).collect();
        assert_eq!(names, ["Zeta", "Amazon", "apple"]);
        assert_eq!(store.entry(EntryId(1)).secret(), "p2");
        assert_eq!(store.glyphs().as_slice(), &['a', 'z']);
    }

    #[test]
    fn load_reports_the_rejected_record() {
        let storage = MemoryStorage::new("ok\tx\nbroken\t!garbage\n");
        let err = EntryStore::load(&storage, &ReverseCipher).unwrap_err();

        match err {
            VaultError::Decryption { line, name } => {
                assert_eq!(line, 2);
                assert_eq!(name, "broken");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_credentials_is_a_storage_error() {
        let storage = MemoryStorage::missing();
        let err = EntryStore::load(&storage, &ReverseCipher).unwrap_err();
        assert!(matches!(err, VaultError::Storage(_)));
    }

    #[test]
    fn glyph_set_uses_leading_characters_only() {
        let glyphs = GlyphSet::from_names(["Amazon", "apple", "Bank", ""]);
        assert_eq!(glyphs.as_slice(), &['a', 'b']);
    }

    #[test]
    fn glyph_set_lowercases_non_ascii_leading_characters() {
        let glyphs = GlyphSet::from_names(["İ", "Éclair", "émile"]);
        assert_eq!(glyphs.as_slice(), &['i', 'é']);

        let store = EntryStore::from_entries(vec![Entry::new("İstanbul", "p"), Entry::new("Bank", "q")]);
        assert_eq!(store.glyphs().as_slice(), &['b', 'i']);
        assert!(store.entry(EntryId(0)).name_starts_with("i"));
    }

    #[test]
    fn find_by_name_is_exact() {
        let store = EntryStore::from_entries(vec![Entry::new("Bank", "p"), Entry::new("bank", "q")]);
        assert_eq!(store.find_by_name("bank"), Some(EntryId(1)));
        assert_eq!(store.find_by_name("BANK"), None);
    }
}
