//! Header component renderer.

use crate::domain::error::Result;
use crate::ui::display::Display;
use crate::ui::helpers::pad_to;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the mode marker and header text across the full width.
///
/// Returns the next available row.
///
/// # Layout
///
/// ```text
///  > query-so-far
/// ```
pub fn render_header(
    display: &mut dyn Display,
    row: usize,
    header: &HeaderInfo,
    theme: &Theme,
) -> Result<usize> {
    let line = format!(" {} {}", header.marker, header.text);
    let width = display.width();
    display.draw_text(row, 0, &pad_to(&line, width), theme.header())?;
    Ok(row + 1)
}
