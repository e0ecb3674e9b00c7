//! Keystroke collaborator.
//!
//! A [`KeystrokeSink`] delivers a secret to the host as if it had been typed.
//! From the state machine's point of view delivery is fire-and-forget: a
//! failure is logged by the runtime and the session carries on.

use crate::domain::error::{Result, VaultError};
use std::cell::RefCell;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::rc::Rc;

/// Destination for emitted secrets.
pub trait KeystrokeSink {
    /// Delivers `text` literally.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::Output`] if the text could not be delivered.
    fn emit(&mut self, text: &str) -> Result<()>;
}

/// Places the secret on the system clipboard, ready to paste.
///
/// The clipboard handle is kept alive for the whole session; on X11 the
/// content would vanish with it.
pub struct ClipboardSink {
    clipboard: arboard::Clipboard,
}

impl ClipboardSink {
    /// Connects to the system clipboard.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::Output`] if no clipboard is available.
    pub fn new() -> Result<Self> {
        let clipboard = arboard::Clipboard::new()
            .map_err(|e| VaultError::Output(format!("clipboard unavailable: {e}")))?;
        Ok(Self { clipboard })
    }
}

impl KeystrokeSink for ClipboardSink {
    fn emit(&mut self, text: &str) -> Result<()> {
        self.clipboard
            .set_text(text.to_string())
            .map_err(|e| VaultError::Output(format!("failed to set clipboard: {e}")))
    }
}

impl std::fmt::Debug for ClipboardSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClipboardSink").finish_non_exhaustive()
    }
}

/// Writes the secret as literal characters to a device, typically the serial
/// port of a USB keyboard bridge that types whatever it receives.
#[derive(Debug)]
pub struct DeviceSink<W: Write> {
    writer: W,
}

impl DeviceSink<std::fs::File> {
    /// Opens a device node or file for writing.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::Output`] if the device cannot be opened.
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .write(true)
            .open(path)
            .map_err(|e| VaultError::Output(format!("cannot open {}: {e}", path.display())))?;
        Ok(Self::new(file))
    }
}

impl<W: Write> DeviceSink<W> {
    /// Wraps any writer.
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the inner writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> KeystrokeSink for DeviceSink<W> {
    fn emit(&mut self, text: &str) -> Result<()> {
        self.writer
            .write_all(text.as_bytes())
            .and_then(|()| self.writer.flush())
            .map_err(|e| VaultError::Output(e.to_string()))
    }
}

/// Records emitted text; clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    emitted: Rc<RefCell<Vec<String>>>,
}

impl RecordingSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything emitted so far, oldest first.
    #[must_use]
    pub fn emitted(&self) -> Vec<String> {
        self.emitted.borrow().clone()
    }
}

impl KeystrokeSink for RecordingSink {
    fn emit(&mut self, text: &str) -> Result<()> {
        self.emitted.borrow_mut().push(text.to_string());
        Ok(())
    }
}
