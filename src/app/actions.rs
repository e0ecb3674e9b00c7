//! Actions representing side effects to be executed by the runtime.
//!
//! The event handler is a pure state transition: it returns a `Vec<Action>`
//! describing the effects an event requires, and the runtime executes them in
//! order against its collaborators.
//!
//! # Example
//!
//! ```rust
//! use passvault::app::Action;
//! use passvault::domain::{Entry, EntryStore};
//!
//! let store = EntryStore::from_entries(vec![Entry::new("Amazon", "p1")]);
//! let id = store.find_by_name("Amazon").unwrap();
//! let actions = vec![Action::TypeSecret(id), Action::PersistFavorites];
//! assert_eq!(actions.len(), 2);
//! ```

use crate::domain::EntryId;

/// Side effects requested by the event handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Deliver the entry's secret to the keystroke collaborator.
    ///
    /// Always emitted before any persistence the same selection triggers.
    TypeSecret(EntryId),

    /// Write the current favorites list to storage.
    PersistFavorites,
}
