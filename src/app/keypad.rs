//! Grid keypads: the PIN pad of the lock gate and the adaptive filter pad.
//!
//! Both pads lay cells out left to right, top to bottom, in a fixed number of
//! columns. The cursor is a 2D position clamped to the grid and to the last
//! occupied cell; there is no wraparound.

use super::modes::InputEvent;

/// Columns of the lock keypad.
pub const LOCK_WIDTH: usize = 3;

/// Columns of the filter keypad.
pub const FILTER_WIDTH: usize = 10;

/// Longest unlock code the lock keypad accepts.
pub const UNLOCK_CODE_MAX: usize = 8;

/// One cell of the lock keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockKey {
    /// Appends a digit to the code.
    Digit(char),
    /// Removes the last digit.
    Delete,
    /// Compares the code with the unlock code.
    Confirm,
}

impl LockKey {
    /// Character shown on the keypad.
    #[must_use]
    pub const fn label(self) -> char {
        match self {
            Self::Digit(d) => d,
            Self::Delete => '<',
            Self::Confirm => '>',
        }
    }
}

/// Lock keypad cells, row by row.
pub const LOCK_KEYS: [LockKey; 12] = [
    LockKey::Digit('1'),
    LockKey::Digit('2'),
    LockKey::Digit('3'),
    LockKey::Digit('4'),
    LockKey::Digit('5'),
    LockKey::Digit('6'),
    LockKey::Digit('7'),
    LockKey::Digit('8'),
    LockKey::Digit('9'),
    LockKey::Delete,
    LockKey::Digit('0'),
    LockKey::Confirm,
];

/// Number of occupied rows for `cells` cells in a grid `width` columns wide.
#[must_use]
pub const fn rows(cells: usize, width: usize) -> usize {
    cells.div_ceil(width)
}

/// Cursor over a grid keypad.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridCursor {
    /// Column.
    pub x: usize,
    /// Row.
    pub y: usize,
}

impl GridCursor {
    /// Cell index under the cursor.
    #[must_use]
    pub const fn index(self, width: usize) -> usize {
        self.y * width + self.x
    }

    /// Moves back to the top-left cell.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Applies a directional event inside a grid of `cells` cells.
    ///
    /// Moves that would leave the grid or land past the last occupied cell are
    /// ignored. Non-directional events are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use passvault::app::keypad::GridCursor;
    /// use passvault::app::InputEvent;
    ///
    /// // 12 glyphs, 10 per row: the second row holds two cells.
    /// let mut cursor = GridCursor { x: 5, y: 0 };
    /// cursor.step(InputEvent::Down, 10, 12);
    /// assert_eq!(cursor, GridCursor { x: 5, y: 0 });
    ///
    /// let mut cursor = GridCursor { x: 1, y: 0 };
    /// cursor.step(InputEvent::Down, 10, 12);
    /// assert_eq!(cursor, GridCursor { x: 1, y: 1 });
    /// ```
    pub fn step(&mut self, event: InputEvent, width: usize, cells: usize) {
        let index = self.index(width);
        match event {
            InputEvent::Left if self.x > 0 => self.x -= 1,
            InputEvent::Up if self.y > 0 => self.y -= 1,
            InputEvent::Right if self.x + 1 < width && index + 1 < cells => self.x += 1,
            InputEvent::Down if index + width < cells => self.y += 1,
            _ => {}
        }
    }
}

/// Lock key under the cursor.
#[must_use]
pub fn lock_key_at(cursor: GridCursor) -> Option<LockKey> {
    LOCK_KEYS.get(cursor.index(LOCK_WIDTH)).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_keypad_is_clamped_without_wraparound() {
        let mut cursor = GridCursor::default();
        cursor.step(InputEvent::Left, LOCK_WIDTH, LOCK_KEYS.len());
        cursor.step(InputEvent::Up, LOCK_WIDTH, LOCK_KEYS.len());
        assert_eq!(cursor, GridCursor::default());

        for _ in 0..10 {
            cursor.step(InputEvent::Right, LOCK_WIDTH, LOCK_KEYS.len());
            cursor.step(InputEvent::Down, LOCK_WIDTH, LOCK_KEYS.len());
        }
        assert_eq!(cursor, GridCursor { x: 2, y: 3 });
        assert_eq!(lock_key_at(cursor), Some(LockKey::Confirm));
    }

    #[test]
    fn lock_keypad_layout() {
        assert_eq!(lock_key_at(GridCursor { x: 0, y: 3 }), Some(LockKey::Delete));
        assert_eq!(lock_key_at(GridCursor { x: 1, y: 3 }), Some(LockKey::Digit('0')));
        assert_eq!(lock_key_at(GridCursor { x: 2, y: 1 }), Some(LockKey::Digit('6')));
        let labels: String = LOCK_KEYS.iter().map(|k| k.label()).collect();
        assert_eq!(labels, "123456789<0>");
    }

    #[test]
    fn right_stops_at_last_glyph_in_partial_row() {
        let mut cursor = GridCursor { x: 0, y: 1 };
        for _ in 0..5 {
            cursor.step(InputEvent::Right, FILTER_WIDTH, 13);
        }
        assert_eq!(cursor, GridCursor { x: 2, y: 1 });
    }

    #[test]
    fn right_can_reach_the_last_glyph() {
        let mut cursor = GridCursor::default();
        for _ in 0..5 {
            cursor.step(InputEvent::Right, FILTER_WIDTH, 3);
        }
        assert_eq!(cursor.index(FILTER_WIDTH), 2);
    }

    #[test]
    fn empty_grid_never_moves() {
        let mut cursor = GridCursor::default();
        for event in [InputEvent::Right, InputEvent::Down] {
            cursor.step(event, FILTER_WIDTH, 0);
        }
        assert_eq!(cursor, GridCursor::default());
    }

    #[test]
    fn row_count_rounds_up() {
        assert_eq!(rows(0, 10), 0);
        assert_eq!(rows(10, 10), 1);
        assert_eq!(rows(11, 10), 2);
        assert_eq!(rows(12, 3), 4);
    }
}
