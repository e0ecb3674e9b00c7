//! Domain layer for the vault.
//!
//! This module contains the core domain types, independent of terminal or
//! filesystem concerns.
//!
//! # Organization
//!
//! - [`entry`]: Credential entry model and its id type
//! - [`error`]: Error types and result aliases
//! - [`store`]: The immutable entry store and its derived glyph set
//!
//! # Examples
//!
//! ```
//! use passvault::domain::{Entry, EntryStore};
//!
//! let store = EntryStore::from_entries(vec![
//!     Entry::new("Amazon", "p1"),
//!     Entry::new("Bank", "p3"),
//! ]);
//! assert_eq!(store.glyphs().as_slice(), &['a', 'b']);
//! ```

pub mod entry;
pub mod error;
pub mod store;

pub use entry::{Entry, EntryId};
pub use error::{Result, VaultError};
pub use store::{EntryStore, GlyphSet};
