//! Keypad component renderer.
//!
//! Cells are three columns wide with the label in the middle, so the cursor
//! highlight reads as a key rather than a single character.

use crate::app::keypad::rows;
use crate::domain::error::Result;
use crate::ui::display::Display;
use crate::ui::helpers::centered_col;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::KeypadInfo;

const CELL_WIDTH: usize = 3;

/// Renders the keypad grid centered horizontally, starting at `row`.
///
/// Returns the row after the last grid row.
pub fn render_keypad(
    display: &mut dyn Display,
    row: usize,
    keypad: &KeypadInfo,
    theme: &Theme,
) -> Result<usize> {
    let width = keypad.width.max(1);
    let grid_cols = width.min(keypad.cells.len()) * CELL_WIDTH;
    let left = display.width().saturating_sub(grid_cols) / 2;

    let normal = theme.style(&theme.colors.keypad_fg).bold();
    let selected = theme.selection().bold();

    for (i, cell) in keypad.cells.iter().enumerate() {
        let col = left + (i % width) * CELL_WIDTH;
        let style = if cell.is_selected { selected } else { normal };
        display.draw_text(row + i / width, col, &format!(" {} ", cell.label), style)?;
    }
    Ok(row + rows(keypad.cells.len(), width))
}

/// Renders the caption line under the keypad.
pub fn render_caption(display: &mut dyn Display, row: usize, caption: &str, theme: &Theme) -> Result<usize> {
    let cols = display.width();
    display.draw_text(row, centered_col(caption, cols), caption, theme.style(&theme.colors.text_normal))?;
    Ok(row + 1)
}
