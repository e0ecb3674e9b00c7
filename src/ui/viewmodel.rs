//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They carry no
//! behavior, only display-ready data: labels, selection flags and captions.
//!
//! # Example
//!
//! ```rust
//! use passvault::ui::viewmodel::{Body, EmptyState, FooterInfo, HeaderInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo { marker: '*', text: "favorites".to_string() },
//!     body: Body::Empty(EmptyState {
//!         message: "No favorites yet".to_string(),
//!         subtitle: String::new(),
//!     }),
//!     footer: FooterInfo { keybindings: "tab: list".to_string(), about: None },
//! };
//! assert!(matches!(vm.body, Body::Empty(_)));
//! ```

use zeroize::Zeroizing;

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Mode marker and header text.
    pub header: HeaderInfo,

    /// Mode-specific content between the header and the footer.
    pub body: Body,

    /// Keybinding hints and the optional about line.
    pub footer: FooterInfo,
}

/// Header line: the mode marker followed by context text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Single-character mode marker.
    pub marker: char,

    /// Query, masked unlock digits, or entry name depending on the mode.
    pub text: String,
}

/// Mode-specific screen content.
#[derive(Debug, Clone)]
pub enum Body {
    /// Lock or filter keypad.
    Keypad(KeypadInfo),

    /// Listing or favorites rows.
    List(ListInfo),

    /// Name and secret of the selected entry.
    Detail(DetailInfo),

    /// A list screen with nothing to show.
    Empty(EmptyState),

    /// Fatal initialization error; input is no longer handled.
    Fault(EmptyState),
}

/// A grid of single-character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadInfo {
    /// Cells, row by row.
    pub cells: Vec<KeypadCell>,

    /// Cells per row.
    pub width: usize,

    /// Line drawn under the grid.
    pub caption: String,
}

/// One keypad cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadCell {
    /// Character shown in the cell.
    pub label: char,

    /// Whether the cursor is on this cell.
    pub is_selected: bool,
}

/// Visible window of a scrolling list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListInfo {
    /// Rows currently on screen.
    pub items: Vec<DisplayItem>,
}

/// One visible list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Entry name.
    pub name: String,

    /// Whether this row is highlighted.
    pub is_selected: bool,
}

/// Detail screen content.
#[derive(Debug, Clone)]
pub struct DetailInfo {
    /// Entry name.
    pub name: String,

    /// Plaintext secret, wiped when the view model is dropped.
    pub secret: Zeroizing<String>,
}

/// Centered two-line message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message.
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,

    /// Name and version, shown on the keypad screens.
    pub about: Option<String>,
}
