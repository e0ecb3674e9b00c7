//! The shared query buffer.
//!
//! One buffer serves the lock gate (digits typed so far), the filter keypad
//! (the live prefix query) and, read-only, the list screens that show the
//! query as context. Only the active mode's handler writes to it.

use std::fmt;
use zeroize::Zeroize;

/// Hard capacity of the query buffer, in characters.
pub const QUERY_CAPACITY: usize = 256;

/// Bounded text buffer. Cleared contents are wiped from memory.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct QueryBuffer {
    text: String,
}

impl QueryBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Appends a character unless the buffer already holds `limit` characters
    /// (or the hard capacity, whichever is smaller). Returns whether it was added.
    pub fn push_within(&mut self, c: char, limit: usize) -> bool {
        if self.len() >= limit.min(QUERY_CAPACITY) {
            return false;
        }
        self.text.push(c);
        true
    }

    /// Appends a character unless the hard capacity is reached.
    pub fn push(&mut self, c: char) -> bool {
        self.push_within(c, QUERY_CAPACITY)
    }

    /// Removes the last character, if any.
    pub fn pop(&mut self) -> Option<char> {
        self.text.pop()
    }

    /// Empties the buffer.
    pub fn clear(&mut self) {
        self.text.zeroize();
    }

    /// Current contents.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Returns `true` if the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Debug for QueryBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryBuffer")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_respects_limit() {
        let mut buffer = QueryBuffer::new();
        assert!(buffer.push_within('1', 2));
        assert!(buffer.push_within('2', 2));
        assert!(!buffer.push_within('3', 2));
        assert_eq!(buffer.as_str(), "12");
    }

    #[test]
    fn hard_capacity_truncates() {
        let mut buffer = QueryBuffer::new();
        for _ in 0..QUERY_CAPACITY + 10 {
            buffer.push('a');
        }
        assert_eq!(buffer.len(), QUERY_CAPACITY);
    }

    #[test]
    fn pop_and_clear() {
        let mut buffer = QueryBuffer::new();
        assert_eq!(buffer.pop(), None);
        buffer.push('x');
        buffer.push('y');
        assert_eq!(buffer.pop(), Some('y'));
        buffer.clear();
        assert!(buffer.is_empty());
    }
}
