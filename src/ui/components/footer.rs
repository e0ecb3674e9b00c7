//! Footer component renderer.

use crate::domain::error::Result;
use crate::ui::display::Display;
use crate::ui::helpers::{centered_col, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the keybinding hints centered at `row`.
///
/// Hints wider than the screen are truncated rather than wrapped.
pub fn render_footer(
    display: &mut dyn Display,
    row: usize,
    footer: &FooterInfo,
    theme: &Theme,
) -> Result<usize> {
    let cols = display.width();
    let text = truncate(&footer.keybindings, cols);
    display.draw_text(row, centered_col(&text, cols), &text, theme.style(&theme.colors.text_dim))?;
    Ok(row + 1)
}

/// Renders the name and version line centered at `row`.
pub fn render_about(display: &mut dyn Display, row: usize, about: &str, theme: &Theme) -> Result<usize> {
    let cols = display.width();
    display.draw_text(row, centered_col(about, cols), about, theme.style(&theme.colors.about_fg))?;
    Ok(row + 1)
}
