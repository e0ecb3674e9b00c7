//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for the session: the loaded
//! entry store, the active mode, the shared query buffer, the keypad cursor,
//! the list viewport, the cached filtered view and the favorites list.
//!
//! # Architecture
//!
//! Core data (store, favorites) is kept apart from derived data (the filtered
//! view). The filtered view is refreshed by [`AppState::sync_filter`] whenever
//! the query may have changed; view models are computed on demand from a
//! state snapshot and never mutate it.
//!
//! # Example
//!
//! ```rust
//! use passvault::app::AppState;
//! use passvault::app::favorites::FavoritesManager;
//! use passvault::domain::{Entry, EntryStore};
//! use passvault::ui::Theme;
//!
//! let store = EntryStore::from_entries(vec![Entry::new("Amazon", "p1")]);
//! let state = AppState::new(store, FavoritesManager::new(), "1234", Theme::default());
//! let viewmodel = state.compute_viewmodel();
//! assert_eq!(viewmodel.header.marker, '>');
//! ```

use super::favorites::{FavoritesManager, FavoritesPolicy};
use super::filter::{FilterEngine, FilteredView};
use super::keypad::{GridCursor, FILTER_WIDTH, LOCK_KEYS, LOCK_WIDTH};
use super::modes::Mode;
use super::query::QueryBuffer;
use super::viewport::Viewport;
use crate::domain::{Entry, EntryId, EntryStore};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    Body, DetailInfo, DisplayItem, EmptyState, FooterInfo, HeaderInfo, KeypadCell, KeypadInfo,
    ListInfo, UIViewModel,
};
use std::fmt;
use zeroize::Zeroizing;

/// Central application state container.
pub struct AppState {
    /// Decrypted entries, immutable after load.
    pub store: EntryStore,

    /// Active screen.
    pub mode: Mode,

    /// Unlock digits while locked, the filter query afterwards.
    pub query: QueryBuffer,

    /// Cursor of whichever keypad is on screen.
    pub grid: GridCursor,

    /// Scroll state of the listing and favorites screens.
    pub viewport: Viewport,

    /// Cached prefix filter over the store.
    pub filter: FilterEngine,

    /// Most-recently-used favorites.
    pub favorites: FavoritesManager,

    /// When favorite promotions are written back.
    pub favorites_policy: FavoritesPolicy,

    /// Entry shown on the detail screen.
    pub current: Option<EntryId>,

    /// Color scheme for rendering.
    pub theme: Theme,

    /// Fatal initialization error. When set, input is ignored.
    pub fault: Option<String>,

    unlock_code: Zeroizing<String>,
}

impl AppState {
    /// Creates a locked session over a loaded store.
    #[must_use]
    pub fn new(
        store: EntryStore,
        favorites: FavoritesManager,
        unlock_code: &str,
        theme: Theme,
    ) -> Self {
        Self {
            store,
            mode: Mode::Locked,
            query: QueryBuffer::new(),
            grid: GridCursor::default(),
            viewport: Viewport::default(),
            filter: FilterEngine::new(),
            favorites,
            favorites_policy: FavoritesPolicy::default(),
            current: None,
            theme,
            fault: None,
            unlock_code: Zeroizing::new(unlock_code.to_string()),
        }
    }

    /// Creates a state that only shows `message` and ignores input.
    #[must_use]
    pub fn faulted(message: impl Into<String>, theme: Theme) -> Self {
        let mut state = Self::new(EntryStore::default(), FavoritesManager::new(), "", theme);
        state.fault = Some(message.into());
        state
    }

    /// Sets the favorites persistence policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: FavoritesPolicy) -> Self {
        self.favorites_policy = policy;
        self
    }

    /// Returns `true` if `candidate` equals the configured unlock code.
    #[must_use]
    pub fn unlock_code_matches(&self, candidate: &str) -> bool {
        let expected = self.unlock_code.as_bytes();
        let candidate = candidate.as_bytes();
        expected.len() == candidate.len()
            && expected
                .iter()
                .zip(candidate)
                .fold(0u8, |diff, (a, b)| diff | (a ^ b))
                == 0
    }

    /// Brings the cached filtered view up to date with the query.
    ///
    /// A no-op while locked, where the buffer holds unlock digits.
    pub fn sync_filter(&mut self) {
        if self.mode != Mode::Locked {
            self.filter.refresh(self.query.as_str(), &self.store);
        }
    }

    /// The filtered view as of the last [`sync_filter`](Self::sync_filter).
    #[must_use]
    pub const fn filtered(&self) -> &FilteredView {
        self.filter.view()
    }

    /// Entry ids of the list screen for the active mode.
    #[must_use]
    pub fn active_list(&self) -> &[EntryId] {
        match self.mode {
            Mode::Listing => self.filtered().ids(),
            Mode::Favorites => self.favorites.ids(),
            Mode::Locked | Mode::Filtering | Mode::Detail => &[],
        }
    }

    /// The highlighted row of the active list, if any.
    #[must_use]
    pub fn highlighted(&self) -> Option<EntryId> {
        let row = self.viewport.selected();
        match self.mode {
            Mode::Listing => self.filtered().get(row),
            Mode::Favorites => self.favorites.get(row),
            Mode::Locked | Mode::Filtering | Mode::Detail => None,
        }
    }

    /// The entry on the detail screen.
    #[must_use]
    pub fn current_entry(&self) -> Option<&Entry> {
        self.current.and_then(|id| self.store.get(id))
    }

    /// Computes a renderable view model from the current state.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        if let Some(message) = &self.fault {
            return UIViewModel {
                header: HeaderInfo {
                    marker: '!',
                    text: "error".to_string(),
                },
                body: Body::Fault(EmptyState {
                    message: message.clone(),
                    subtitle: "Fix the problem above and restart".to_string(),
                }),
                footer: FooterInfo {
                    keybindings: "q: quit".to_string(),
                    about: None,
                },
            };
        }

        UIViewModel {
            header: self.compute_header(),
            body: self.compute_body(),
            footer: self.compute_footer(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let text = match self.mode {
            Mode::Locked => "*".repeat(self.query.len()),
            Mode::Filtering | Mode::Listing => self.query.as_str().to_string(),
            Mode::Favorites => "favorites".to_string(),
            Mode::Detail => self
                .current_entry()
                .map(|entry| entry.name().to_string())
                .unwrap_or_default(),
        };
        HeaderInfo {
            marker: self.mode.marker(),
            text,
        }
    }

    fn compute_body(&self) -> Body {
        match self.mode {
            Mode::Locked => {
                let selected = self.grid.index(LOCK_WIDTH);
                Body::Keypad(KeypadInfo {
                    cells: LOCK_KEYS
                        .iter()
                        .enumerate()
                        .map(|(i, key)| KeypadCell {
                            label: key.label(),
                            is_selected: i == selected,
                        })
                        .collect(),
                    width: LOCK_WIDTH,
                    caption: "Please unlock".to_string(),
                })
            }
            Mode::Filtering => {
                let selected = self.grid.index(FILTER_WIDTH);
                Body::Keypad(KeypadInfo {
                    cells: self
                        .store
                        .glyphs()
                        .as_slice()
                        .iter()
                        .enumerate()
                        .map(|(i, &label)| KeypadCell {
                            label,
                            is_selected: i == selected,
                        })
                        .collect(),
                    width: FILTER_WIDTH,
                    caption: format!("{} passwords", self.filtered().len()),
                })
            }
            Mode::Listing | Mode::Favorites => self.compute_list_body(),
            Mode::Detail => self.current_entry().map_or_else(
                || {
                    Body::Empty(EmptyState {
                        message: "Nothing selected".to_string(),
                        subtitle: String::new(),
                    })
                },
                |entry| {
                    Body::Detail(DetailInfo {
                        name: entry.name().to_string(),
                        secret: Zeroizing::new(entry.secret().to_string()),
                    })
                },
            ),
        }
    }

    fn compute_list_body(&self) -> Body {
        let ids = self.active_list();
        if ids.is_empty() {
            let (message, subtitle) = if self.mode == Mode::Favorites {
                ("No favorites yet", "Select an entry to add it here")
            } else {
                ("No matches", "Press tab to change the filter")
            };
            return Body::Empty(EmptyState {
                message: message.to_string(),
                subtitle: subtitle.to_string(),
            });
        }

        let selected = self.viewport.selected();
        let items = self
            .viewport
            .visible(ids.len())
            .map(|index| DisplayItem {
                name: self.store.entry(ids[index]).name().to_string(),
                is_selected: index == selected,
            })
            .collect();
        Body::List(ListInfo { items })
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.mode {
            Mode::Locked => "arrows: move  enter: press  q: quit",
            Mode::Filtering => "arrows: move  enter: add letter  tab: results",
            Mode::Listing => "up/down: move  enter: type  tab: new filter",
            Mode::Favorites => "up/down: move  enter: type  tab: list",
            Mode::Detail => "tab: back to list",
        };
        let about = matches!(self.mode, Mode::Locked | Mode::Filtering)
            .then(|| format!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")));
        FooterInfo {
            keybindings: keybindings.to_string(),
            about,
        }
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("entries", &self.store.len())
            .field("mode", &self.mode)
            .field("query", &self.query)
            .field("grid", &self.grid)
            .field("viewport", &self.viewport)
            .field("favorites", &self.favorites.len())
            .field("favorites_policy", &self.favorites_policy)
            .field("current", &self.current)
            .field("fault", &self.fault)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        let store = EntryStore::from_entries(vec![
            Entry::new("Amazon", "p1"),
            Entry::new("Apple", "p2"),
            Entry::new("Bank", "p3"),
        ]);
        AppState::new(store, FavoritesManager::new(), "1234", Theme::default())
    }

    #[test]
    fn unlock_code_comparison() {
        let state = state();
        assert!(state.unlock_code_matches("1234"));
        assert!(!state.unlock_code_matches("123"));
        assert!(!state.unlock_code_matches("1235"));
    }

    #[test]
    fn lock_screen_masks_digits() {
        let mut state = state();
        state.query.push('1');
        state.query.push('2');
        let vm = state.compute_viewmodel();
        assert_eq!(vm.header.text, "**");
        let Body::Keypad(keypad) = vm.body else {
            panic!("expected keypad");
        };
        assert_eq!(keypad.caption, "Please unlock");
        assert!(keypad.cells[0].is_selected);
        assert!(vm.footer.about.is_some());
    }

    #[test]
    fn filter_screen_counts_matches() {
        let mut state = state();
        state.mode = Mode::Filtering;
        state.query.push('a');
        state.sync_filter();
        let Body::Keypad(keypad) = state.compute_viewmodel().body else {
            panic!("expected keypad");
        };
        assert_eq!(keypad.caption, "2 passwords");
        let labels: String = keypad.cells.iter().map(|c| c.label).collect();
        assert_eq!(labels, "ab");
    }

    #[test]
    fn empty_favorites_screen() {
        let mut state = state();
        state.mode = Mode::Favorites;
        let vm = state.compute_viewmodel();
        assert_eq!(vm.header.marker, '*');
        assert!(matches!(vm.body, Body::Empty(ref e) if e.message == "No favorites yet"));
    }

    #[test]
    fn fault_screen_replaces_everything() {
        let state = AppState::faulted("credential file not found", Theme::default());
        let vm = state.compute_viewmodel();
        assert!(matches!(vm.body, Body::Fault(ref e) if e.message == "credential file not found"));
    }

    #[test]
    fn debug_omits_unlock_code() {
        let rendered = format!("{:?}", state());
        assert!(!rendered.contains("1234"));
    }
}
