//! Case-insensitive prefix filtering of the entry store.
//!
//! The filtered view is derived state: it is a pure function of the query and
//! the store, so the engine caches the last result keyed on the query text and
//! only recomputes when the query changes.

use crate::domain::{EntryId, EntryStore};

/// Entries whose names start with a query, in store order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredView {
    ids: Vec<EntryId>,
}

impl FilteredView {
    /// Matching entry ids, in store order.
    #[must_use]
    pub fn ids(&self) -> &[EntryId] {
        &self.ids
    }

    /// Id at a position in the view.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<EntryId> {
        self.ids.get(index).copied()
    }

    /// Number of matches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Selects every entry whose name starts with `query`, ignoring case.
///
/// An empty query matches everything.
///
/// # Examples
///
/// ```
/// use passvault::app::filter::filter;
/// use passvault::domain::{Entry, EntryStore};
///
/// let store = EntryStore::from_entries(vec![
///     Entry::new("Amazon", "a"),
///     Entry::new("Bank", "b"),
///     Entry::new("apple", "c"),
/// ]);
/// let view = filter("a", &store);
/// let names: Vec<_> = view.ids().iter().map(|&id| store.entry(id).name()).collect();
/// assert_eq!(names, ["Amazon", "apple"]);
/// ```
#[must_use]
pub fn filter(query: &str, store: &EntryStore) -> FilteredView {
    let ids = store
        .iter()
        .filter(|(_, entry)| entry.name_starts_with(query))
        .map(|(id, _)| id)
        .collect();
    FilteredView { ids }
}

/// Memoizing wrapper around [`filter`].
#[derive(Debug, Clone, Default)]
pub struct FilterEngine {
    query: Option<String>,
    view: FilteredView,
}

impl FilterEngine {
    /// Creates an engine with nothing cached.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Brings the cached view up to date with `query` and returns it.
    pub fn refresh(&mut self, query: &str, store: &EntryStore) -> &FilteredView {
        if !self.is_current(query) {
            let _span = tracing::debug_span!("filter", query_len = query.len()).entered();
            self.view = filter(query, store);
            self.query = Some(query.to_string());
            tracing::debug!(matches = self.view.len(), "filter recomputed");
        }
        &self.view
    }

    /// The last computed view.
    #[must_use]
    pub const fn view(&self) -> &FilteredView {
        &self.view
    }

    /// Returns `true` if the cached view was computed for `query`.
    #[must_use]
    pub fn is_current(&self, query: &str) -> bool {
        self.query.as_deref() == Some(query)
    }
}
