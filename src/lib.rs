//! Passvault: an offline password vault driven by a five-button keypad.
//!
//! Passvault loads an encrypted credential list, lets the operator find an
//! entry through an adaptive on-screen filter, and delivers the decrypted
//! secret as typed text:
//! - A PIN keypad gates the session
//! - A glyph keypad built from the leading letters of all entry names narrows
//!   the list by case-insensitive prefix
//! - A most-recently-used favorites list persists across sessions
//! - Secrets are sealed with Argon2id and ChaCha20-Poly1305, so a wrong
//!   passphrase or a corrupted record is reported instead of typing garbage
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI (main.rs) and event loop (runtime)             │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Per-mode event handling                          │
//! │  - Filter, favorites, keypads, viewport             │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Infrastructure    │
//! │ (ui/)         │   │ (storage/)    │   │ (infrastructure/) │
//! │ - Rendering   │   │ - Files       │   │ - Cipher          │
//! │ - Theming     │   │ - Records     │   │ - Input, output   │
//! │ - Display     │   │ - Backend API │   │ - Paths           │
//! └───────────────┘   └───────────────┘   └───────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/): entries, entry store, errors     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```toml
//! # ~/.config/passvault/config.toml
//! credentials = "~/vault/crypted.txt"
//! favorites = "~/vault/fav.txt"
//! theme = "catppuccin-mocha"
//! output = "clipboard"
//! favorites_persistence = "on-insert"
//! trace_level = "info"
//! ```
//!
//! The unlock code and the passphrase may live in the file too, but are
//! better supplied through `PASSVAULT_UNLOCK_CODE` and `PASSVAULT_PASSPHRASE`.
//!
//! # Example
//!
//! ```rust
//! use passvault::{handle_event, initialize, Config, InputEvent, Mode};
//! use passvault::infrastructure::SealedCipher;
//! use passvault::infrastructure::cipher::KdfParams;
//! use passvault::storage::{MemoryStorage, Storage};
//!
//! let params = KdfParams { m_cost: 64, t_cost: 1, p_cost: 1 };
//! let cipher = SealedCipher::with_params("passphrase", params);
//! let mut storage = MemoryStorage::new("");
//! storage.append_credential("Amazon", &cipher.seal("p1", None)?)?;
//!
//! let config = Config { unlock_code: Some("1".into()), ..Default::default() };
//! let mut state = initialize(&config, &storage, &cipher);
//! assert_eq!(state.mode, Mode::Locked);
//! assert_eq!(state.store.len(), 1);
//!
//! let (redraw, actions) = handle_event(&mut state, InputEvent::Down);
//! assert!(redraw && actions.is_empty());
//! # Ok::<(), passvault::VaultError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod runtime;
pub mod storage;
pub mod ui;

pub use app::{handle_event, Action, AppState, FavoritesPolicy, InputEvent, Mode};
pub use domain::{Entry, EntryId, EntryStore, GlyphSet, Result, VaultError};
pub use runtime::Runtime;
pub use ui::Theme;

use app::FavoritesManager;
use infrastructure::{paths, Cipher};
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use storage::Storage;

/// Environment variable overriding the unlock code.
pub const UNLOCK_CODE_ENV: &str = "PASSVAULT_UNLOCK_CODE";

/// Environment variable overriding the passphrase.
pub const PASSPHRASE_ENV: &str = "PASSVAULT_PASSPHRASE";

/// Where selected secrets are delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// The system clipboard.
    Clipboard,
    /// A device node, typically a serial keyboard bridge.
    Device(PathBuf),
}

/// Configuration loaded from `config.toml`, with environment overrides.
///
/// Every field is optional in the file. Paths may start with `~`.
#[derive(Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Credential file. Default: `<data_dir>/crypted.txt`.
    pub credentials: Option<String>,

    /// Favorites file. Default: `<data_dir>/fav.txt`.
    pub favorites: Option<String>,

    /// Directory for default files and the log. Default: platform data directory.
    pub data_dir: Option<String>,

    /// Digits that open the lock keypad.
    pub unlock_code: Option<String>,

    /// Passphrase the credential file was sealed with.
    pub passphrase: Option<String>,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme: Option<String>,

    /// Path to a custom TOML theme file.
    pub theme_file: Option<String>,

    /// Log filter directive, e.g. `debug` or `passvault=trace`. Default: `"info"`.
    pub trace_level: Option<String>,

    /// `"clipboard"` (default) or the path of an output device.
    pub output: Option<String>,

    /// When favorites are written back. Default: on insertion only.
    pub favorites_persistence: FavoritesPolicy,
}

impl Config {
    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::Config`] on syntax errors, type mismatches, or
    /// unknown keys.
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| VaultError::Config(e.to_string()))
    }

    /// Loads the configuration file and applies environment overrides.
    ///
    /// With `path` unset, the default location is used and a missing file
    /// yields defaults. An explicitly requested file must exist.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::Config`] if the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (paths::default_config_file(), false),
        };

        let mut config = match std::fs::read_to_string(&path) {
            Ok(contents) => Self::from_toml(&contents)
                .map_err(|e| VaultError::Config(format!("{}: {e}", path.display())))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && !required => Self::default(),
            Err(e) => {
                return Err(VaultError::Config(format!(
                    "cannot read {}: {e}",
                    path.display()
                )))
            }
        };

        config.apply_overrides(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Replaces secrets with values from `lookup` (normally the environment).
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(code) = lookup(UNLOCK_CODE_ENV) {
            self.unlock_code = Some(code);
        }
        if let Some(passphrase) = lookup(PASSPHRASE_ENV) {
            self.passphrase = Some(passphrase);
        }
    }

    /// Directory for default files and the log.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .as_deref()
            .map_or_else(paths::data_dir, paths::expand_tilde)
    }

    /// Resolved credential file path.
    #[must_use]
    pub fn credentials_path(&self) -> PathBuf {
        self.credentials
            .as_deref()
            .map_or_else(|| self.data_dir().join("crypted.txt"), paths::expand_tilde)
    }

    /// Resolved favorites file path.
    #[must_use]
    pub fn favorites_path(&self) -> PathBuf {
        self.favorites
            .as_deref()
            .map_or_else(|| self.data_dir().join("fav.txt"), paths::expand_tilde)
    }

    /// Resolved output target.
    #[must_use]
    pub fn output_target(&self) -> OutputTarget {
        match self.output.as_deref() {
            None | Some("clipboard") => OutputTarget::Clipboard,
            Some(device) => OutputTarget::Device(paths::expand_tilde(device)),
        }
    }

    /// The unlock code.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::Config`] if none is configured or it contains
    /// anything but digits.
    pub fn require_unlock_code(&self) -> Result<&str> {
        let code = self.unlock_code.as_deref().ok_or_else(|| {
            VaultError::Config(format!("no unlock code: set unlock_code or {UNLOCK_CODE_ENV}"))
        })?;
        if code.is_empty()
            || code.len() > app::keypad::UNLOCK_CODE_MAX
            || !code.chars().all(|c| c.is_ascii_digit())
        {
            return Err(VaultError::Config(format!(
                "unlock code must be 1 to {} digits",
                app::keypad::UNLOCK_CODE_MAX
            )));
        }
        Ok(code)
    }

    /// The passphrase.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::Config`] if none is configured.
    pub fn require_passphrase(&self) -> Result<&str> {
        self.passphrase.as_deref().ok_or_else(|| {
            VaultError::Config(format!("no passphrase: set passphrase or {PASSPHRASE_ENV}"))
        })
    }

    /// Loads the configured theme, falling back to the default.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme_file.as_ref().map_or_else(
            || {
                self.theme.as_ref().map_or_else(Theme::default, |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::warn!(
                            theme_name = %theme_name,
                            known = ?Theme::builtin_names().collect::<Vec<_>>(),
                            "unknown theme, using default"
                        );
                        Theme::default()
                    })
                })
            },
            |theme_file| {
                Theme::from_file(paths::expand_tilde(theme_file)).unwrap_or_else(|e| {
                    tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                    Theme::default()
                })
            },
        )
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("credentials", &self.credentials)
            .field("favorites", &self.favorites)
            .field("data_dir", &self.data_dir)
            .field("unlock_code", &self.unlock_code.as_ref().map(|_| "<set>"))
            .field("passphrase", &self.passphrase.as_ref().map(|_| "<set>"))
            .field("theme", &self.theme)
            .field("theme_file", &self.theme_file)
            .field("trace_level", &self.trace_level)
            .field("output", &self.output)
            .field("favorites_persistence", &self.favorites_persistence)
            .finish()
    }
}

/// Loads the entry store and favorites and builds a locked session.
///
/// Initialization failures do not escape: the returned state shows the error
/// on a fault screen and ignores input, so the operator sees what went wrong
/// instead of a keypad that can never work.
pub fn initialize(config: &Config, storage: &dyn Storage, cipher: &dyn Cipher) -> AppState {
    let _span = tracing::info_span!("initialize").entered();
    let theme = config.theme();

    let loaded = config.require_unlock_code().and_then(|code| {
        let store = EntryStore::load(storage, cipher)?;
        let favorites = FavoritesManager::load(storage, &store)?;
        Ok((code, store, favorites))
    });

    match loaded {
        Ok((code, store, favorites)) => {
            tracing::info!(
                entries = store.len(),
                favorites = favorites.len(),
                policy = ?config.favorites_persistence,
                "session ready"
            );
            AppState::new(store, favorites, code, theme).with_policy(config.favorites_persistence)
        }
        Err(e) => {
            tracing::error!(error = %e, "initialization failed");
            AppState::faulted(e.to_string(), theme)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn parses_full_config() {
        let config = Config::from_toml(
            r#"
            credentials = "/vault/crypted.txt"
            favorites = "/vault/fav.txt"
            unlock_code = "2580"
            theme = "mono"
            output = "/dev/ttyACM0"
            favorites_persistence = "always"
            "#,
        )
        .unwrap();
        assert_eq!(config.credentials_path(), PathBuf::from("/vault/crypted.txt"));
        assert_eq!(config.require_unlock_code().unwrap(), "2580");
        assert_eq!(config.output_target(), OutputTarget::Device(PathBuf::from("/dev/ttyACM0")));
        assert_eq!(config.favorites_persistence, FavoritesPolicy::Always);
        assert_eq!(config.theme().name, "mono");
    }

    #[test]
    fn defaults_live_in_data_dir() {
        let config = Config {
            data_dir: Some("/srv/vault".to_string()),
            ..Config::default()
        };
        assert_eq!(config.credentials_path(), PathBuf::from("/srv/vault/crypted.txt"));
        assert_eq!(config.favorites_path(), PathBuf::from("/srv/vault/fav.txt"));
        assert_eq!(config.output_target(), OutputTarget::Clipboard);
        assert_eq!(config.favorites_persistence, FavoritesPolicy::OnInsert);
    }

    #[test]
    fn rejects_unknown_keys_and_bad_codes() {
        assert!(matches!(Config::from_toml("colour = 1"), Err(VaultError::Config(_))));

        let mut config = Config::default();
        assert!(config.require_unlock_code().is_err());
        config.unlock_code = Some("12a4".to_string());
        assert!(config.require_unlock_code().is_err());
        config.unlock_code = Some("123456789".to_string());
        assert!(config.require_unlock_code().is_err());
    }

    #[test]
    fn environment_overrides_secrets() {
        let mut config = Config::from_toml("unlock_code = \"1\"").unwrap();
        config.apply_overrides(|name| match name {
            UNLOCK_CODE_ENV => Some("9999".to_string()),
            PASSPHRASE_ENV => Some("hunter2".to_string()),
            _ => None,
        });
        assert_eq!(config.require_unlock_code().unwrap(), "9999");
        assert_eq!(config.require_passphrase().unwrap(), "hunter2");
        assert!(!format!("{config:?}").contains("hunter2"));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(Config::load(Some(&missing)), Err(VaultError::Config(_))));
    }

    #[test]
    fn initialization_failure_becomes_fault_screen() {
        struct Plain;
        impl Cipher for Plain {
            fn decrypt(
                &self,
                ciphertext: &str,
            ) -> std::result::Result<zeroize::Zeroizing<String>, infrastructure::CipherError> {
                Ok(zeroize::Zeroizing::new(ciphertext.to_string()))
            }
        }

        let config = Config {
            unlock_code: Some("1".to_string()),
            ..Config::default()
        };
        let state = initialize(&config, &MemoryStorage::missing(), &Plain);
        assert!(state.fault.as_deref().is_some_and(|f| f.contains("credential")));

        let storage = MemoryStorage::new("Amazon\tp1\n").with_favorites("Amazon\nGhost\n");
        let state = initialize(&config, &storage, &Plain);
        assert!(state.fault.is_none());
        assert_eq!(state.favorites.len(), 1);
    }
}
