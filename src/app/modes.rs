//! UI mode and input event types.
//!
//! The two enums are deliberately disjoint: [`InputEvent`] is what the input
//! collaborator reports, [`Mode`] is which screen is active. A mode-switch
//! event is routed through the transition table in the handler, never by
//! reusing one type as the other.
//!
//! # State Machine
//!
//! ```text
//! Locked    --select on confirm, code matches-->  Filtering
//! Filtering --switch, query non-empty-------->    Listing
//! Filtering --switch, query empty------------>    Favorites
//! Listing   --switch (clears query)---------->    Filtering
//! Listing   --select------------------------->    Detail
//! Favorites --switch------------------------->    Listing
//! Favorites --select------------------------->    Detail
//! Detail    --switch------------------------->    Listing
//! ```

/// Current screen of the navigation state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// PIN keypad gate. Initial mode.
    Locked,

    /// Adaptive glyph keypad building the filter query.
    Filtering,

    /// Scrolling list of entries matching the query.
    Listing,

    /// Scrolling list of favorites, most recently used first.
    Favorites,

    /// Name and secret of the last selected entry.
    Detail,
}

impl Mode {
    /// Single-character marker shown before the header text.
    #[must_use]
    pub const fn marker(self) -> char {
        match self {
            Self::Locked | Self::Filtering => '>',
            Self::Listing => '#',
            Self::Favorites => '*',
            Self::Detail => ':',
        }
    }
}

/// Discrete event reported by the input collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Directional up.
    Up,
    /// Directional down.
    Down,
    /// Directional left.
    Left,
    /// Directional right.
    Right,
    /// Activate the highlighted cell or row.
    Select,
    /// The dedicated mode-switch control.
    ModeSwitch,
    /// No control was pressed during the poll interval.
    Idle,
}
