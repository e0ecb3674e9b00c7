//! Empty state component renderer.
//!
//! Draws the centered two-line message shown for an empty favorites list, a
//! filter with no matches, and the fault screen.

use crate::domain::error::Result;
use crate::ui::display::Display;
use crate::ui::helpers::{centered_col, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Row of the primary message.
const MESSAGE_ROW: usize = 6;

/// Renders `empty` with its message in `color` and the subtitle dimmed below it.
pub fn render_empty_state(
    display: &mut dyn Display,
    empty: &EmptyState,
    color: &str,
    theme: &Theme,
) -> Result<()> {
    let cols = display.width();

    let message = truncate(&empty.message, cols);
    display.draw_text(MESSAGE_ROW, centered_col(&message, cols), &message, theme.style(color).bold())?;

    if !empty.subtitle.is_empty() {
        let subtitle = truncate(&empty.subtitle, cols);
        display.draw_text(
            MESSAGE_ROW + 1,
            centered_col(&subtitle, cols),
            &subtitle,
            theme.style(&theme.colors.text_dim),
        )?;
    }
    Ok(())
}
