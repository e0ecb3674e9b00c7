//! Detail component renderer.

use crate::domain::error::Result;
use crate::ui::display::Display;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailInfo;

/// Renders the entry name and, below it, the secret.
pub fn render_detail(display: &mut dyn Display, row: usize, detail: &DetailInfo, theme: &Theme) -> Result<usize> {
    display.draw_text(row, 2, &detail.name, theme.style(&theme.colors.text_normal).bold())?;
    display.draw_text(row + 2, 2, &detail.secret, theme.style(&theme.colors.secret_fg))?;
    Ok(row + 3)
}
