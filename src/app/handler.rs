//! Event handling and state transition logic.
//!
//! [`handle_event`] is the whole navigation state machine: it routes one input
//! event to the handler of the active mode, mutates [`AppState`] and returns
//! the side effects the runtime must perform. It performs no I/O itself.
//!
//! Mode switches always reset the list viewport so that a stale scroll position
//! never points past the end of the list being entered.
//!
//! # Example
//!
//! ```rust
//! use passvault::app::{handle_event, AppState, InputEvent, Mode};
//! use passvault::app::favorites::FavoritesManager;
//! use passvault::domain::{Entry, EntryStore};
//! use passvault::ui::Theme;
//!
//! let store = EntryStore::from_entries(vec![Entry::new("Amazon", "p1")]);
//! let mut state = AppState::new(store, FavoritesManager::new(), "1", Theme::default());
//!
//! // Type "1", then walk to the confirm key in the bottom-right corner.
//! handle_event(&mut state, InputEvent::Select);
//! for event in [InputEvent::Down, InputEvent::Down, InputEvent::Down, InputEvent::Right, InputEvent::Right] {
//!     handle_event(&mut state, event);
//! }
//! handle_event(&mut state, InputEvent::Select);
//! assert_eq!(state.mode, Mode::Filtering);
//! ```

use super::actions::Action;
use super::favorites::Promotion;
use super::keypad::{lock_key_at, LockKey, FILTER_WIDTH, LOCK_KEYS, LOCK_WIDTH, UNLOCK_CODE_MAX};
use super::modes::{InputEvent, Mode};
use super::state::AppState;
use crate::domain::EntryId;

/// Processes one event, mutates state, and returns the actions to execute.
///
/// The boolean is `true` when the screen needs redrawing. Idle events and
/// every event received in fault state change nothing.
pub fn handle_event(state: &mut AppState, event: InputEvent) -> (bool, Vec<Action>) {
    if state.fault.is_some() || event == InputEvent::Idle {
        return (false, vec![]);
    }

    let _span = tracing::debug_span!("handle_event", mode = ?state.mode, event = ?event).entered();

    let mut actions = vec![];
    match state.mode {
        Mode::Locked => handle_locked(state, event),
        Mode::Filtering => handle_filtering(state, event),
        Mode::Listing => handle_listing(state, event, &mut actions),
        Mode::Favorites => handle_favorites(state, event, &mut actions),
        Mode::Detail => handle_detail(state, event),
    }
    (true, actions)
}

fn handle_locked(state: &mut AppState, event: InputEvent) {
    match event {
        InputEvent::Select => match lock_key_at(state.grid) {
            Some(LockKey::Digit(digit)) => {
                state.query.push_within(digit, UNLOCK_CODE_MAX);
            }
            Some(LockKey::Delete) => {
                state.query.pop();
            }
            Some(LockKey::Confirm) => {
                if state.unlock_code_matches(state.query.as_str()) {
                    tracing::info!("unlocked");
                    enter(state, Mode::Filtering);
                } else {
                    tracing::info!("unlock code rejected");
                }
                state.query.clear();
                state.sync_filter();
            }
            None => {}
        },
        InputEvent::ModeSwitch => {}
        direction => state.grid.step(direction, LOCK_WIDTH, LOCK_KEYS.len()),
    }
}

fn handle_filtering(state: &mut AppState, event: InputEvent) {
    match event {
        InputEvent::Select => {
            let index = state.grid.index(FILTER_WIDTH);
            if let Some(glyph) = state.store.glyphs().get(index) {
                state.query.push(glyph);
                state.sync_filter();
                tracing::debug!(query_len = state.query.len(), "query extended");
            }
        }
        InputEvent::ModeSwitch => {
            let next = if state.query.is_empty() {
                Mode::Favorites
            } else {
                Mode::Listing
            };
            enter(state, next);
        }
        direction => {
            let cells = state.store.glyphs().len();
            state.grid.step(direction, FILTER_WIDTH, cells);
        }
    }
}

fn handle_listing(state: &mut AppState, event: InputEvent, actions: &mut Vec<Action>) {
    match event {
        InputEvent::Up => state.viewport.move_up(),
        InputEvent::Down => {
            let len = state.filtered().len();
            state.viewport.move_down(len);
        }
        InputEvent::Select => {
            if let Some(id) = state.highlighted() {
                select_entry(state, id, actions);
            }
        }
        InputEvent::ModeSwitch => {
            state.query.clear();
            enter(state, Mode::Filtering);
            state.sync_filter();
        }
        _ => {}
    }
}

fn handle_favorites(state: &mut AppState, event: InputEvent, actions: &mut Vec<Action>) {
    match event {
        InputEvent::Up => state.viewport.move_up(),
        InputEvent::Down => {
            let len = state.favorites.len();
            state.viewport.move_down(len);
        }
        InputEvent::Select => {
            if let Some(id) = state.highlighted() {
                select_entry(state, id, actions);
            }
        }
        InputEvent::ModeSwitch => enter(state, Mode::Listing),
        _ => {}
    }
}

fn handle_detail(state: &mut AppState, event: InputEvent) {
    if event == InputEvent::ModeSwitch {
        enter(state, Mode::Listing);
    }
}

fn enter(state: &mut AppState, mode: Mode) {
    tracing::debug!(from = ?state.mode, to = ?mode, "mode switch");
    if mode == Mode::Filtering {
        state.grid.reset();
    }
    state.viewport.reset();
    state.mode = mode;
}

/// Shows the entry, types its secret, and promotes it in the favorites list.
fn select_entry(state: &mut AppState, id: EntryId, actions: &mut Vec<Action>) {
    let promotion = state.favorites.promote(id);
    tracing::debug!(
        name = state.store.entry(id).name(),
        promotion = ?promotion,
        "entry selected"
    );

    state.current = Some(id);
    enter(state, Mode::Detail);

    actions.push(Action::TypeSecret(id));
    if state.favorites_policy.should_persist(promotion) {
        actions.push(Action::PersistFavorites);
    } else if promotion == Promotion::Moved {
        tracing::debug!("favorites reordered in memory only");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::favorites::{FavoritesManager, FavoritesPolicy};
    use crate::domain::{Entry, EntryStore};
    use crate::ui::theme::Theme;

    fn store() -> EntryStore {
        EntryStore::from_entries(vec![
            Entry::new("Amazon", "p1"),
            Entry::new("Apple", "p2"),
            Entry::new("Bank", "p3"),
        ])
    }

    fn unlocked() -> AppState {
        let mut state = AppState::new(store(), FavoritesManager::new(), "", Theme::default());
        state.mode = Mode::Filtering;
        state.sync_filter();
        state
    }

    fn send(state: &mut AppState, events: &[InputEvent]) -> Vec<Action> {
        events
            .iter()
            .flat_map(|&event| handle_event(state, event).1)
            .collect()
    }

    /// Moves the lock cursor onto `key` from the top-left cell and presses it.
    fn press_lock_key(state: &mut AppState, key: LockKey) {
        let index = LOCK_KEYS.iter().position(|&k| k == key).unwrap();
        state.grid.reset();
        for _ in 0..index / LOCK_WIDTH {
            handle_event(state, InputEvent::Down);
        }
        for _ in 0..index % LOCK_WIDTH {
            handle_event(state, InputEvent::Right);
        }
        handle_event(state, InputEvent::Select);
    }

    #[test]
    fn wrong_code_clears_and_stays_locked() {
        let mut state = AppState::new(store(), FavoritesManager::new(), "42", Theme::default());
        press_lock_key(&mut state, LockKey::Digit('4'));
        press_lock_key(&mut state, LockKey::Digit('3'));
        press_lock_key(&mut state, LockKey::Confirm);
        assert_eq!(state.mode, Mode::Locked);
        assert!(state.query.is_empty());

        press_lock_key(&mut state, LockKey::Digit('4'));
        press_lock_key(&mut state, LockKey::Digit('2'));
        press_lock_key(&mut state, LockKey::Confirm);
        assert_eq!(state.mode, Mode::Filtering);
        assert!(state.query.is_empty());
        assert_eq!(state.grid, Default::default());
    }

    #[test]
    fn delete_key_removes_last_digit() {
        let mut state = AppState::new(store(), FavoritesManager::new(), "1", Theme::default());
        press_lock_key(&mut state, LockKey::Digit('1'));
        press_lock_key(&mut state, LockKey::Digit('2'));
        press_lock_key(&mut state, LockKey::Delete);
        press_lock_key(&mut state, LockKey::Confirm);
        assert_eq!(state.mode, Mode::Filtering);
    }

    #[test]
    fn unlock_digits_are_capped() {
        let mut state = AppState::new(store(), FavoritesManager::new(), "", Theme::default());
        for _ in 0..12 {
            handle_event(&mut state, InputEvent::Select);
        }
        assert_eq!(state.query.len(), UNLOCK_CODE_MAX);
    }

    #[test]
    fn filtering_switch_depends_on_query() {
        let mut state = unlocked();
        send(&mut state, &[InputEvent::ModeSwitch]);
        assert_eq!(state.mode, Mode::Favorites);

        let mut state = unlocked();
        send(&mut state, &[InputEvent::Select, InputEvent::ModeSwitch]);
        assert_eq!(state.mode, Mode::Listing);
        assert_eq!(state.query.as_str(), "a");
        assert_eq!(state.filtered().len(), 2);
    }

    #[test]
    fn selecting_from_listing_types_secret_and_persists_new_favorite() {
        let mut state = unlocked();
        let actions = send(
            &mut state,
            &[InputEvent::Select, InputEvent::ModeSwitch, InputEvent::Down, InputEvent::Select],
        );
        let apple = state.store.find_by_name("Apple").unwrap();
        assert_eq!(actions, [Action::TypeSecret(apple), Action::PersistFavorites]);
        assert_eq!(state.mode, Mode::Detail);
        assert_eq!(state.current, Some(apple));
        assert_eq!(state.compute_viewmodel().header.text, "Apple");
    }

    #[test]
    fn reorder_persists_only_under_always_policy() {
        let store = store();
        let favorites = FavoritesManager::from_names(["Bank", "Amazon"], &store);
        let mut state = AppState::new(store, favorites, "", Theme::default());
        state.mode = Mode::Favorites;

        let actions = send(&mut state, &[InputEvent::Down, InputEvent::Select]);
        assert_eq!(actions.len(), 1);
        assert_eq!(state.favorites.names(&state.store), ["Amazon", "Bank"]);

        state = state.with_policy(FavoritesPolicy::Always);
        send(&mut state, &[InputEvent::ModeSwitch, InputEvent::ModeSwitch]);
        assert_eq!(state.mode, Mode::Filtering);
        send(&mut state, &[InputEvent::ModeSwitch]);
        let actions = send(&mut state, &[InputEvent::Down, InputEvent::Select]);
        assert_eq!(actions.last(), Some(&Action::PersistFavorites));
    }

    #[test]
    fn listing_switch_clears_query() {
        let mut state = unlocked();
        send(&mut state, &[InputEvent::Select, InputEvent::ModeSwitch, InputEvent::ModeSwitch]);
        assert_eq!(state.mode, Mode::Filtering);
        assert!(state.query.is_empty());
        assert_eq!(state.filtered().len(), 3);
    }

    #[test]
    fn detail_only_reacts_to_switch() {
        let mut state = unlocked();
        send(
            &mut state,
            &[InputEvent::Select, InputEvent::ModeSwitch, InputEvent::Select],
        );
        assert_eq!(state.mode, Mode::Detail);
        let actions = send(&mut state, &[InputEvent::Select, InputEvent::Down, InputEvent::Left]);
        assert!(actions.is_empty());
        assert_eq!(state.mode, Mode::Detail);
        send(&mut state, &[InputEvent::ModeSwitch]);
        assert_eq!(state.mode, Mode::Listing);
        assert_eq!(state.viewport.selected(), 0);
    }

    #[test]
    fn empty_favorites_select_is_a_no_op() {
        let mut state = unlocked();
        let actions = send(&mut state, &[InputEvent::ModeSwitch, InputEvent::Down, InputEvent::Select]);
        assert!(actions.is_empty());
        assert_eq!(state.mode, Mode::Favorites);
    }

    #[test]
    fn faulted_state_ignores_input() {
        let mut state = AppState::faulted("boom", Theme::default());
        assert_eq!(handle_event(&mut state, InputEvent::Select), (false, vec![]));
    }
}
