//! Application layer coordinating state, events, and actions.
//!
//! This layer sits between the runtime (terminal, storage, keystroke output)
//! and the domain. It owns the navigation state machine and everything it
//! needs: the shared query buffer, the keypads, the list viewport, the cached
//! filter and the favorites list.
//!
//! # Architecture
//!
//! ```text
//! InputEvent -> handle_event -> state mutations -> Vec<Action> -> runtime side effects
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effects emitted by the event handler
//! - [`favorites`]: Most-recently-used favorites and their persistence policy
//! - [`filter`]: Prefix filtering with a cached view
//! - [`handler`]: Per-mode event handling and the transition table
//! - [`keypad`]: Lock and filter keypads with a clamped grid cursor
//! - [`modes`]: Mode and input event types
//! - [`query`]: The bounded query buffer
//! - [`state`]: Central state container and view model computation
//! - [`viewport`]: Fixed-height scrolling window

pub mod actions;
pub mod favorites;
pub mod filter;
pub mod handler;
pub mod keypad;
pub mod modes;
pub mod query;
pub mod state;
pub mod viewport;

pub use actions::Action;
pub use favorites::{FavoritesManager, FavoritesPolicy, Promotion};
pub use handler::handle_event;
pub use modes::{InputEvent, Mode};
pub use state::AppState;
