//! Color palettes.
//!
//! A [`Theme`] names one color per screen element as a `#rrggbb` string. Three
//! palettes ship inside the binary (`catppuccin-mocha`, the default,
//! `catppuccin-latte` and `mono`); any other palette is read from a TOML file
//! with the same shape as the files under `themes/`:
//!
//! ```toml
//! name = "amber"
//!
//! [colors]
//! header_fg = "#ffb000"
//! selection_fg = "#000000"
//! selection_bg = "#ffb000"
//! text_normal = "#ffb000"
//! text_dim = "#805800"
//! border = "#805800"
//! keypad_fg = "#ffb000"
//! secret_fg = "#ffd580"
//! about_fg = "#805800"
//! empty_state_fg = "#ffb000"
//! fault_fg = "#ff4000"
//! ```
//!
//! ```rust
//! use passvault::ui::theme::Theme;
//!
//! let theme = Theme::from_name("mono").unwrap();
//! assert!(theme.header().bold);
//! assert!(theme.selection().bg.is_some());
//! ```

use super::display::{Rgb, Style};
use crate::domain::error::{Result, VaultError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Palettes compiled into the binary, by name.
static BUILTIN: [(&str, &str); 3] = [
    ("catppuccin-mocha", include_str!("../../themes/catppuccin-mocha.toml")),
    ("catppuccin-latte", include_str!("../../themes/catppuccin-latte.toml")),
    ("mono", include_str!("../../themes/mono.toml")),
];

/// A named palette.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Palette name, shown nowhere but useful in logs.
    pub name: String,
    /// One color per screen element.
    pub colors: ThemeColors,
}

/// Hex colors of every screen element.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header line.
    pub header_fg: String,
    /// Header background; terminal default when absent.
    #[serde(default)]
    pub header_bg: Option<String>,

    pub selection_fg: String,
    pub selection_bg: String,

    /// List rows.
    pub text_normal: String,
    /// Captions, key hints, subtitles.
    pub text_dim: String,

    /// Horizontal rules.
    pub border: String,

    pub keypad_fg: String,

    /// Secret on the detail screen.
    pub secret_fg: String,

    pub about_fg: String,

    /// "No matches" and "No favorites yet".
    pub empty_state_fg: String,

    pub fault_fg: String,
}

impl Theme {
    /// Names of the palettes compiled into the binary.
    pub fn builtin_names() -> impl Iterator<Item = &'static str> {
        BUILTIN.iter().map(|(name, _)| *name)
    }

    /// Looks up a built-in palette. `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        BUILTIN
            .iter()
            .find(|(builtin, _)| *builtin == name)
            .and_then(|(_, source)| toml::from_str(source).ok())
    }

    /// Reads a palette from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::Theme`] if the file is unreadable or not a palette.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| VaultError::Theme(format!("cannot read {}: {e}", path.display())))?;
        toml::from_str(&source)
            .map_err(|e| VaultError::Theme(format!("invalid theme {}: {e}", path.display())))
    }

    /// Parses `#rrggbb` (the `#` is optional). Anything else is white.
    #[must_use]
    pub fn rgb(hex: &str) -> Rgb {
        let digits = hex.trim().trim_start_matches('#');
        match u32::from_str_radix(digits, 16) {
            Ok(value) if digits.len() == 6 && digits.bytes().all(|b| b.is_ascii_hexdigit()) => {
                let [_, r, g, b] = value.to_be_bytes();
                Rgb(r, g, b)
            }
            _ => Rgb(255, 255, 255),
        }
    }

    /// Plain text in `fg`.
    #[must_use]
    pub fn style(&self, fg: &str) -> Style {
        Style::new(Self::rgb(fg))
    }

    /// Highlighted keypad cell or list row.
    #[must_use]
    pub fn selection(&self) -> Style {
        self.style(&self.colors.selection_fg)
            .on(Self::rgb(&self.colors.selection_bg))
    }

    /// Bold header, on its background if the palette sets one.
    #[must_use]
    pub fn header(&self) -> Style {
        let style = self.style(&self.colors.header_fg).bold();
        self.colors
            .header_bg
            .as_deref()
            .map_or(style, |bg| style.on(Self::rgb(bg)))
    }
}

impl Default for Theme {
    /// Returns the default theme (Catppuccin Mocha).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("catppuccin-mocha")
            .expect("Built-in catppuccin-mocha theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_themes_parse() {
        for name in Theme::builtin_names() {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("nope").is_none());
    }

    #[test]
    fn hex_conversion() {
        assert_eq!(Theme::rgb("#1e1e2e"), Rgb(0x1e, 0x1e, 0x2e));
        assert_eq!(Theme::rgb("ffffff"), Rgb(255, 255, 255));
        assert_eq!(Theme::rgb("#12"), Rgb(255, 255, 255));
        assert_eq!(Theme::rgb("#+12345"), Rgb(255, 255, 255));
    }

    #[test]
    fn custom_theme_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        let mut theme = Theme::from_name("mono").unwrap();
        theme.name = "custom".to_string();
        std::fs::write(&path, toml::to_string(&theme).unwrap()).unwrap();
        assert_eq!(Theme::from_file(&path).unwrap().name, "custom");

        std::fs::write(&path, "name = 3").unwrap();
        assert!(matches!(Theme::from_file(&path), Err(VaultError::Theme(_))));
    }
}
