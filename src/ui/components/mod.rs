//! Composable UI component renderers.
//!
//! Each component draws one part of the screen through the [`Display`]
//! collaborator and returns the next free row.
//!
//! # Components
//!
//! - `header`: Mode marker and context text
//! - `keypad`: Lock and filter keypads with their caption
//! - `list`: Visible window of the listing or favorites screen
//! - `detail`: Entry name and secret
//! - `empty`: Centered message for empty lists and the fault screen
//! - `footer`: Keybinding hints and the about line
//!
//! # Layout
//!
//! ```text
//! [Header]
//! [Rule]
//! [blank]
//! [Body: keypad, list, detail or message]
//! ...
//! [About, keypad screens only]
//! [Rule]
//! [Footer]
//! ```

mod detail;
mod empty;
mod footer;
mod header;
mod keypad;
mod list;

use crate::domain::error::Result;
use crate::ui::display::Display;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Body, UIViewModel};

/// First row of the body.
const BODY_ROW: usize = 3;

/// Draws a horizontal rule across the whole width at `row`.
///
/// Returns the next available row.
fn render_rule(display: &mut dyn Display, row: usize, theme: &Theme) -> Result<usize> {
    let width = display.width();
    display.draw_text(row, 0, &"─".repeat(width), theme.style(&theme.colors.border))?;
    Ok(row + 1)
}

/// Draws every part of a view model.
///
/// # Errors
///
/// Returns the display error if drawing fails.
pub fn render_screen(display: &mut dyn Display, vm: &UIViewModel, theme: &Theme) -> Result<()> {
    let row = header::render_header(display, 0, &vm.header, theme)?;
    render_rule(display, row, theme)?;

    match &vm.body {
        Body::Keypad(info) => {
            let row = keypad::render_keypad(display, BODY_ROW, info, theme)?;
            let row = render_rule(display, row + 1, theme)?;
            keypad::render_caption(display, row, &info.caption, theme)?;
        }
        Body::List(info) => {
            list::render_list(display, BODY_ROW, info, theme)?;
        }
        Body::Detail(info) => {
            detail::render_detail(display, BODY_ROW, info, theme)?;
        }
        Body::Empty(empty) => {
            empty::render_empty_state(display, empty, &theme.colors.empty_state_fg, theme)?;
        }
        Body::Fault(fault) => {
            empty::render_empty_state(display, fault, &theme.colors.fault_fg, theme)?;
        }
    }

    let footer_row = display.height().saturating_sub(1);
    let rule_row = footer_row.saturating_sub(1);
    if let Some(about) = &vm.footer.about {
        footer::render_about(display, rule_row.saturating_sub(1), about, theme)?;
    }
    render_rule(display, rule_row, theme)?;
    footer::render_footer(display, footer_row, &vm.footer, theme)?;
    Ok(())
}
