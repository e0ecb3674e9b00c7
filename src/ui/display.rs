//! Display collaborator.
//!
//! The renderer draws through a [`Display`]: positioned text runs with a
//! [`Style`], then `present()` to show the finished frame. [`TerminalDisplay`]
//! targets a real terminal through `crossterm`; [`MemoryDisplay`] keeps a text
//! grid so tests can inspect what would have been drawn.

use crate::domain::error::{Result, VaultError};
use crossterm::{
    cursor, execute, queue,
    style::{self, Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use std::io::{self, Stdout, Write};

/// A 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl From<Rgb> for Color {
    fn from(Rgb(r, g, b): Rgb) -> Self {
        Self::Rgb { r, g, b }
    }
}

/// Colors and attributes of one text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    /// Foreground color.
    pub fg: Rgb,
    /// Background color; `None` keeps the terminal default.
    pub bg: Option<Rgb>,
    /// Bold text.
    pub bold: bool,
}

impl Style {
    /// Plain text in `fg`.
    #[must_use]
    pub const fn new(fg: Rgb) -> Self {
        Self {
            fg,
            bg: None,
            bold: false,
        }
    }

    /// Same style on a background color.
    #[must_use]
    pub const fn on(mut self, bg: Rgb) -> Self {
        self.bg = Some(bg);
        self
    }

    /// Same style in bold.
    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// A character-cell screen.
pub trait Display {
    /// Columns available.
    fn width(&self) -> usize;

    /// Rows available.
    fn height(&self) -> usize;

    /// Starts a new frame with a blank screen.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::Terminal`] if the screen cannot be cleared.
    fn clear(&mut self) -> Result<()>;

    /// Draws `text` starting at `row`, `col` (both zero-based). Text past the
    /// right edge or rows past the bottom are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::Terminal`] if the output fails.
    fn draw_text(&mut self, row: usize, col: usize, text: &str, style: Style) -> Result<()>;

    /// Shows the frame drawn since the last `clear`.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::Terminal`] if the output fails.
    fn present(&mut self) -> Result<()>;
}

fn terminal_error(e: io::Error) -> VaultError {
    VaultError::Terminal(e.to_string())
}

/// Full-screen terminal output.
///
/// Construction switches the terminal to raw mode on the alternate screen with
/// the cursor hidden; dropping the value restores it.
pub struct TerminalDisplay {
    out: Stdout,
    width: usize,
    height: usize,
}

impl TerminalDisplay {
    /// Takes over the terminal.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::Terminal`] if raw mode or the alternate screen
    /// cannot be entered.
    pub fn enter() -> Result<Self> {
        terminal::enable_raw_mode().map_err(terminal_error)?;
        let mut out = io::stdout();
        if let Err(e) = execute!(out, terminal::EnterAlternateScreen, cursor::Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(terminal_error(e));
        }
        let (width, height) = terminal::size().map_err(terminal_error)?;
        tracing::debug!(width, height, "terminal display entered");
        Ok(Self {
            out,
            width: usize::from(width),
            height: usize::from(height),
        })
    }
}

impl Display for TerminalDisplay {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn clear(&mut self) -> Result<()> {
        if let Ok((width, height)) = terminal::size() {
            self.width = usize::from(width);
            self.height = usize::from(height);
        }
        queue!(self.out, style::ResetColor, terminal::Clear(ClearType::All)).map_err(terminal_error)
    }

    fn draw_text(&mut self, row: usize, col: usize, text: &str, style: Style) -> Result<()> {
        if row >= self.height || col >= self.width {
            return Ok(());
        }
        let visible: String = text.chars().take(self.width - col).collect();
        let (Ok(row), Ok(col)) = (u16::try_from(row), u16::try_from(col)) else {
            return Ok(());
        };

        queue!(self.out, cursor::MoveTo(col, row), SetForegroundColor(style.fg.into()))
            .map_err(terminal_error)?;
        if let Some(bg) = style.bg {
            queue!(self.out, SetBackgroundColor(bg.into())).map_err(terminal_error)?;
        }
        if style.bold {
            queue!(self.out, SetAttribute(Attribute::Bold)).map_err(terminal_error)?;
        }
        queue!(
            self.out,
            Print(visible),
            SetAttribute(Attribute::Reset),
            style::ResetColor
        )
        .map_err(terminal_error)
    }

    fn present(&mut self) -> Result<()> {
        self.out.flush().map_err(terminal_error)
    }
}

impl Drop for TerminalDisplay {
    fn drop(&mut self) {
        let _ = execute!(self.out, style::ResetColor, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
        tracing::debug!("terminal restored");
    }
}

impl std::fmt::Debug for TerminalDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalDisplay")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

/// A text run recorded by [`MemoryDisplay`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Row of the first character.
    pub row: usize,
    /// Column of the first character.
    pub col: usize,
    /// Text as drawn, after clipping.
    pub text: String,
    /// Style it was drawn with.
    pub style: Style,
}

/// In-memory screen for tests. Keeps the last presented frame.
#[derive(Debug, Clone)]
pub struct MemoryDisplay {
    width: usize,
    height: usize,
    grid: Vec<Vec<char>>,
    spans: Vec<Span>,
    frame: Vec<String>,
    frame_spans: Vec<Span>,
    presents: usize,
}

impl MemoryDisplay {
    /// Creates a blank screen of the given size.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            grid: vec![vec![' '; width]; height],
            spans: Vec::new(),
            frame: vec![String::new(); height],
            frame_spans: Vec::new(),
            presents: 0,
        }
    }

    /// Text of a row of the last presented frame, trailing blanks removed.
    #[must_use]
    pub fn row(&self, row: usize) -> &str {
        self.frame.get(row).map_or("", String::as_str)
    }

    /// The last presented frame, one line per row.
    #[must_use]
    pub fn text(&self) -> String {
        self.frame.join("\n")
    }

    /// Returns `true` if any row of the last frame contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.frame.iter().any(|line| line.contains(needle))
    }

    /// Text runs of the last presented frame drawn with a background color.
    #[must_use]
    pub fn highlighted(&self) -> Vec<&Span> {
        self.frame_spans.iter().filter(|s| s.style.bg.is_some()).collect()
    }

    /// Number of frames presented so far.
    #[must_use]
    pub const fn presents(&self) -> usize {
        self.presents
    }
}

impl Display for MemoryDisplay {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn clear(&mut self) -> Result<()> {
        for line in &mut self.grid {
            line.fill(' ');
        }
        self.spans.clear();
        Ok(())
    }

    fn draw_text(&mut self, row: usize, col: usize, text: &str, style: Style) -> Result<()> {
        let Some(line) = self.grid.get_mut(row) else {
            return Ok(());
        };
        let mut drawn = String::new();
        for (cell, c) in line.iter_mut().skip(col).zip(text.chars()) {
            *cell = c;
            drawn.push(c);
        }
        if !drawn.is_empty() {
            self.spans.push(Span {
                row,
                col,
                text: drawn,
                style,
            });
        }
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.frame = self
            .grid
            .iter()
            .map(|line| line.iter().collect::<String>().trim_end().to_string())
            .collect();
        self.frame_spans.clone_from(&self.spans);
        self.presents += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Style = Style::new(Rgb(255, 255, 255));

    #[test]
    fn memory_display_clips_and_presents() {
        let mut display = MemoryDisplay::new(6, 2);
        display.clear().unwrap();
        display.draw_text(0, 2, "abcdef", WHITE).unwrap();
        display.draw_text(5, 0, "gone", WHITE).unwrap();
        assert_eq!(display.row(0), "");
        display.present().unwrap();
        assert_eq!(display.row(0), "  abcd");
        assert_eq!(display.presents(), 1);
    }

    #[test]
    fn highlighted_spans_are_tracked() {
        let mut display = MemoryDisplay::new(10, 1);
        display.draw_text(0, 0, "a", WHITE).unwrap();
        display.draw_text(0, 2, "b", WHITE.on(Rgb(0, 0, 0))).unwrap();
        display.present().unwrap();
        let highlighted = display.highlighted();
        assert_eq!(highlighted.len(), 1);
        assert_eq!(highlighted[0].text, "b");
    }
}
