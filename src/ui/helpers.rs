//! Shared layout utilities for the component renderers.
//!
//! All widths are counted in characters, not bytes, so names with multibyte
//! characters are padded and centered correctly.

/// Column at which `text` starts when centered in `cols` columns.
///
/// # Example
///
/// ```rust
/// use passvault::ui::helpers::centered_col;
///
/// assert_eq!(centered_col("abcd", 10), 3);
/// assert_eq!(centered_col("too wide", 4), 0);
/// ```
#[must_use]
pub fn centered_col(text: &str, cols: usize) -> usize {
    cols.saturating_sub(text.chars().count()) / 2
}

/// Shortens `text` to at most `max` characters, marking the cut with `...`.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    let len = text.chars().count();
    if len <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }
    let mut out: String = text.chars().take(max - 3).collect();
    out.push_str("...");
    out
}

/// Pads `text` with spaces to exactly `width` characters, truncating if longer.
#[must_use]
pub fn pad_to(text: &str, width: usize) -> String {
    let mut out = truncate(text, width);
    let len = out.chars().count();
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(len)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_marks_the_cut() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a-very-long-name", 8), "a-ver...");
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn padding_counts_characters() {
        assert_eq!(pad_to("é", 3), "é  ");
        assert_eq!(pad_to("abcdef", 4), "a...");
    }
}
