//! User interface rendering layer with component-based architecture.
//!
//! The UI layer follows a declarative rendering model:
//!
//! ```text
//! AppState -> compute_viewmodel -> UIViewModel -> render -> Display
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`display`]: The display collaborator and its terminal and in-memory implementations
//! - [`helpers`]: Shared layout utilities
//! - [`theme`]: Color scheme definitions

pub mod components;
pub mod display;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use display::{Display, MemoryDisplay, Rgb, Style, TerminalDisplay};
pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    Body, DetailInfo, DisplayItem, EmptyState, FooterInfo, HeaderInfo, KeypadCell, KeypadInfo,
    ListInfo, UIViewModel,
};
