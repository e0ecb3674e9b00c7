//! Error types for the vault.
//!
//! This module defines the centralized error type [`VaultError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! A persisted favorite that no longer matches a loaded entry is deliberately not
//! represented here: it is logged and dropped by the favorites manager.

use crate::infrastructure::cipher::CipherError;
use thiserror::Error;

/// The main error type for vault operations.
///
/// Initialization failures ([`VaultError::Storage`], [`VaultError::Decryption`],
/// [`VaultError::Config`]) are fatal and end up on the fault screen. Collaborator
/// failures during the session ([`VaultError::Output`], a failed favorites write)
/// are logged and the session continues.
///
/// # Examples
///
/// ```
/// use passvault::VaultError;
///
/// fn open_credentials() -> Result<(), VaultError> {
///     Err(VaultError::Storage("credential file not found".to_string()))
/// }
///
/// assert!(open_credentials().is_err());
/// ```
#[derive(Debug, Error)]
pub enum VaultError {
    /// Credential or favorites file is missing or unreadable.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A credential record failed authenticated decryption.
    ///
    /// Raised instead of yielding a garbage secret when the passphrase is wrong
    /// or the ciphertext was corrupted.
    #[error("Cannot decrypt record {line} ({name}): wrong passphrase or corrupted ciphertext")]
    Decryption {
        /// One-based line number in the credential file.
        line: usize,
        /// Display name of the record.
        name: String,
    },

    /// Sealing a new secret failed.
    #[error("Cipher error: {0}")]
    Cipher(#[from] CipherError),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// The display or input collaborator failed.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// The keystroke collaborator could not deliver text.
    #[error("Output error: {0}")]
    Output(String),
}

/// A specialized `Result` type for vault operations.
pub type Result<T> = std::result::Result<T, VaultError>;
