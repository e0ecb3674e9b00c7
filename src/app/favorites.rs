//! Most-recently-used favorites list.
//!
//! Favorites are held as entry ids, so every favorite is guaranteed to exist in
//! the store. Names read from the favorites file that no longer match an entry
//! are dropped at load time with a warning.
//!
//! Selecting an entry promotes it to the front. Whether a promotion is written
//! back to storage is decided by the [`FavoritesPolicy`].

use crate::domain::{EntryId, EntryStore};
use crate::domain::error::Result;
use crate::storage::records::parse_favorites;
use crate::storage::Storage;
use serde::Deserialize;

/// When favorites are written back to storage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FavoritesPolicy {
    /// Only when a new name is inserted. Reorders live in memory until the
    /// next insertion writes the whole list.
    #[default]
    OnInsert,
    /// Whenever the list changes, insertions and reorders alike.
    Always,
}

/// What a promotion did to the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Promotion {
    /// The entry was not a favorite and now heads the list.
    Inserted,
    /// The entry moved to the front; the entries it jumped shift back by one.
    Moved,
    /// The entry was already first.
    Unchanged,
}

impl FavoritesPolicy {
    /// Whether `promotion` should be written to storage.
    #[must_use]
    pub const fn should_persist(self, promotion: Promotion) -> bool {
        match (self, promotion) {
            (_, Promotion::Inserted) | (Self::Always, Promotion::Moved) => true,
            (Self::OnInsert, Promotion::Moved) | (_, Promotion::Unchanged) => false,
        }
    }
}

/// Ordered list of favorite entries, most recent first. Never holds duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoritesManager {
    ids: Vec<EntryId>,
}

impl FavoritesManager {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves favorite names against the store, keeping file order.
    ///
    /// Unknown names and repeated names are skipped.
    #[must_use]
    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>, store: &EntryStore) -> Self {
        let mut ids = Vec::new();
        for name in names {
            match store.find_by_name(name) {
                Some(id) if !ids.contains(&id) => ids.push(id),
                Some(_) => tracing::warn!(name, "duplicate favorite skipped"),
                None => tracing::warn!(name, "favorite has no matching entry"),
            }
        }
        Self { ids }
    }

    /// Reads the favorites list from storage. A missing list yields an empty one.
    ///
    /// # Errors
    ///
    /// Returns the storage error if the favorites exist but cannot be read.
    pub fn load(storage: &dyn Storage, store: &EntryStore) -> Result<Self> {
        let favorites = match storage.favorites()? {
            Some(contents) => Self::from_names(parse_favorites(&contents), store),
            None => {
                tracing::info!("no favorites stored yet");
                Self::new()
            }
        };
        tracing::debug!(count = favorites.len(), "favorites loaded");
        Ok(favorites)
    }

    /// Moves `id` to the front of the list, inserting it if absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use passvault::app::favorites::{FavoritesManager, Promotion};
    /// use passvault::domain::{Entry, EntryStore};
    ///
    /// let store = EntryStore::from_entries(vec![Entry::new("a", "1"), Entry::new("b", "2")]);
    /// let a = store.find_by_name("a").unwrap();
    /// let b = store.find_by_name("b").unwrap();
    ///
    /// let mut favorites = FavoritesManager::new();
    /// assert_eq!(favorites.promote(a), Promotion::Inserted);
    /// assert_eq!(favorites.promote(b), Promotion::Inserted);
    /// assert_eq!(favorites.promote(a), Promotion::Moved);
    /// assert_eq!(favorites.names(&store), ["a", "b"]);
    /// ```
    pub fn promote(&mut self, id: EntryId) -> Promotion {
        match self.ids.iter().position(|&existing| existing == id) {
            Some(0) => Promotion::Unchanged,
            Some(position) => {
                self.ids[..=position].rotate_right(1);
                Promotion::Moved
            }
            None => {
                self.ids.insert(0, id);
                Promotion::Inserted
            }
        }
    }

    /// Entry ids, most recent first.
    #[must_use]
    pub fn ids(&self) -> &[EntryId] {
        &self.ids
    }

    /// Id at a position in the list.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<EntryId> {
        self.ids.get(index).copied()
    }

    /// Entry names, most recent first.
    #[must_use]
    pub fn names<'a>(&self, store: &'a EntryStore) -> Vec<&'a str> {
        self.ids.iter().map(|&id| store.entry(id).name()).collect()
    }

    /// Writes the list to storage.
    ///
    /// # Errors
    ///
    /// Returns the storage error if the write fails.
    pub fn persist(&self, storage: &mut dyn Storage, store: &EntryStore) -> Result<()> {
        let names = self.names(store);
        storage.save_favorites(&names)?;
        tracing::debug!(count = names.len(), "favorites persisted");
        Ok(())
    }

    /// Number of favorites.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if there are no favorites.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
