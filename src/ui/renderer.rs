//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: `AppState` becomes a `UIViewModel`
//! 2. **Component Rendering**: the components draw it onto a [`Display`]
//!
//! Each call draws one complete frame: clear, draw, present.
//!
//! # Example
//!
//! ```rust
//! use passvault::app::AppState;
//! use passvault::app::favorites::FavoritesManager;
//! use passvault::domain::EntryStore;
//! use passvault::ui::{render, MemoryDisplay, Theme};
//!
//! let state = AppState::new(EntryStore::default(), FavoritesManager::new(), "1", Theme::default());
//! let mut display = MemoryDisplay::new(40, 24);
//! render(&state, &mut display)?;
//! assert!(display.contains("Please unlock"));
//! # Ok::<(), passvault::domain::VaultError>(())
//! ```

use crate::app::AppState;
use crate::domain::error::Result;
use crate::ui::components;
use crate::ui::display::Display;

/// Draws the current state as one frame.
///
/// # Errors
///
/// Returns [`VaultError::Terminal`](crate::domain::VaultError::Terminal) if the
/// display fails.
pub fn render(state: &AppState, display: &mut dyn Display) -> Result<()> {
    let _span = tracing::trace_span!("render", mode = ?state.mode).entered();

    let viewmodel = state.compute_viewmodel();
    display.clear()?;
    components::render_screen(display, &viewmodel, &state.theme)?;
    display.present()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::favorites::FavoritesManager;
    use crate::app::Mode;
    use crate::domain::{Entry, EntryStore};
    use crate::ui::display::MemoryDisplay;
    use crate::ui::theme::Theme;

    fn state() -> AppState {
        let names = [
            "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel", "india",
            "juliet", "kilo", "lima", "mike", "november", "oscar",
        ];
        let store = EntryStore::from_entries(names.iter().map(|n| Entry::new(*n, "s3cret")).collect());
        AppState::new(store, FavoritesManager::new(), "1", Theme::default())
    }

    #[test]
    fn lock_screen_shows_keypad_and_highlights_cursor() {
        let mut display = MemoryDisplay::new(40, 24);
        render(&state(), &mut display).unwrap();
        assert!(display.row(0).starts_with(" >"));
        assert!(display.contains(" 1  2  3"));
        assert!(display.contains(" <  0  >"));
        assert_eq!(display.highlighted()[0].text, " 1 ");
        assert!(display.contains(concat!("passvault v", env!("CARGO_PKG_VERSION"))));
    }

    #[test]
    fn listing_shows_thirteen_rows() {
        let mut state = state();
        state.mode = Mode::Listing;
        state.sync_filter();
        let mut display = MemoryDisplay::new(40, 24);
        render(&state, &mut display).unwrap();
        assert!(display.row(0).starts_with(" #"));
        assert!(display.contains("  alpha"));
        assert!(display.contains("  mike"));
        assert!(!display.contains("november"));
        let highlighted = display.highlighted();
        assert_eq!(highlighted.len(), 1);
        assert!(highlighted[0].text.starts_with("  alpha"));
    }

    #[test]
    fn detail_shows_name_and_secret() {
        let mut state = state();
        state.mode = Mode::Detail;
        state.current = state.store.find_by_name("golf");
        let mut display = MemoryDisplay::new(40, 24);
        render(&state, &mut display).unwrap();
        assert_eq!(display.row(0).trim_end(), " : golf");
        assert!(display.contains("s3cret"));
    }

    #[test]
    fn fault_screen_shows_message() {
        let state = AppState::faulted("credential file not found", Theme::default());
        let mut display = MemoryDisplay::new(60, 24);
        render(&state, &mut display).unwrap();
        assert!(display.contains("credential file not found"));
    }
}
