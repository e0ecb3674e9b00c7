//! List component renderer for the listing and favorites screens.

use crate::domain::error::Result;
use crate::ui::display::Display;
use crate::ui::helpers::pad_to;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ListInfo;

/// Renders one row per visible item starting at `row`.
///
/// The highlighted row is padded to the full width so the selection
/// background spans the whole line. Returns the next available row.
pub fn render_list(display: &mut dyn Display, row: usize, list: &ListInfo, theme: &Theme) -> Result<usize> {
    let width = display.width();
    let normal = theme.style(&theme.colors.text_normal);

    for (offset, item) in list.items.iter().enumerate() {
        let line = pad_to(&format!("  {}", item.name), width);
        let style = if item.is_selected { theme.selection() } else { normal };
        display.draw_text(row + offset, 0, &line, style)?;
    }
    Ok(row + list.items.len())
}
