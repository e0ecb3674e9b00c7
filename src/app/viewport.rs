//! Scrolling viewport shared by the listing and favorites screens.
//!
//! `offset` is the first visible row of the list, `cursor` the highlighted row
//! relative to `offset`. The highlighted item is always `offset + cursor`.

use std::ops::Range;

/// Visible rows of a list screen.
pub const VIEWPORT_ROWS: usize = 13;

/// Cursor and offset over a list of fixed window height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Highlighted row, relative to `offset`.
    pub cursor: usize,
    /// First visible row.
    pub offset: usize,
    height: usize,
}

impl Viewport {
    /// Creates a viewport at the origin. A zero height is treated as one row.
    #[must_use]
    pub fn new(height: usize) -> Self {
        Self {
            cursor: 0,
            offset: 0,
            height: height.max(1),
        }
    }

    /// Window height.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Moves the highlight up, scrolling once it reaches the top row.
    pub fn move_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        } else if self.offset > 0 {
            self.offset -= 1;
        }
    }

    /// Moves the highlight down within a list of `len` items, scrolling once
    /// the cursor is pinned at the last visible row.
    ///
    /// # Examples
    ///
    /// ```
    /// use passvault::app::viewport::Viewport;
    ///
    /// let mut viewport = Viewport::new(13);
    /// viewport.cursor = 12;
    /// viewport.move_down(20);
    /// assert_eq!((viewport.offset, viewport.cursor), (1, 12));
    /// assert_eq!(viewport.visible(20), 1..14);
    /// ```
    pub fn move_down(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let last_row = (self.height - 1).min(len - 1);
        if self.cursor < last_row {
            self.cursor += 1;
        } else if self.cursor == self.height - 1 && self.offset + self.height < len {
            self.offset += 1;
        }
    }

    /// Index of the highlighted item.
    #[must_use]
    pub const fn selected(&self) -> usize {
        self.offset + self.cursor
    }

    /// Indices of the rows currently on screen.
    #[must_use]
    pub fn visible(&self, len: usize) -> Range<usize> {
        let start = self.offset.min(len);
        start..(self.offset + self.height).min(len)
    }

    /// Moves back to the first row.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.offset = 0;
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(VIEWPORT_ROWS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn short_list_stops_at_last_item() {
        let mut viewport = Viewport::default();
        for _ in 0..10 {
            viewport.move_down(3);
        }
        assert_eq!((viewport.offset, viewport.cursor), (0, 2));
    }

    #[test]
    fn empty_list_never_moves() {
        let mut viewport = Viewport::default();
        viewport.move_down(0);
        viewport.move_up();
        assert_eq!(viewport.selected(), 0);
    }

    #[test]
    fn scrolls_back_up_after_reaching_top_row() {
        let mut viewport = Viewport::default();
        for _ in 0..19 {
            viewport.move_down(20);
        }
        assert_eq!((viewport.offset, viewport.cursor), (7, 12));
        for _ in 0..12 {
            viewport.move_up();
        }
        assert_eq!((viewport.offset, viewport.cursor), (7, 0));
        viewport.move_up();
        assert_eq!((viewport.offset, viewport.cursor), (6, 0));
    }

    proptest! {
        #[test]
        fn selection_stays_in_bounds(
            len in 1usize..60,
            moves in proptest::collection::vec(any::<bool>(), 0..120),
        ) {
            let mut viewport = Viewport::default();
            for down in moves {
                if down { viewport.move_down(len) } else { viewport.move_up() }
                prop_assert!(viewport.selected() < len);
                prop_assert!(viewport.cursor < viewport.height());
                prop_assert!(viewport.visible(len).contains(&viewport.selected()));
            }
        }
    }
}
