//! Filesystem locations for configuration, data and logs.
//!
//! Directories follow the platform conventions reported by `dirs`, with a
//! `passvault` subdirectory. When the platform reports nothing (no home
//! directory), the current directory is used.

use std::path::PathBuf;

const APP_DIR: &str = "passvault";

/// Returns the data directory holding the credential file, favorites and logs.
///
/// Typically `~/.local/share/passvault` on Linux.
#[must_use]
pub fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Returns the configuration directory.
///
/// Typically `~/.config/passvault` on Linux.
#[must_use]
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Default location of the configuration file.
#[must_use]
pub fn default_config_file() -> PathBuf {
    config_dir().join("config.toml")
}

/// Expands a leading `~` to the home directory.
///
/// Paths without a leading tilde, or a tilde when no home directory is known,
/// are returned unchanged.
///
/// # Examples
///
/// ```
/// use passvault::infrastructure::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("/absolute/path"), PathBuf::from("/absolute/path"));
/// if let Some(home) = dirs::home_dir() {
///     assert_eq!(expand_tilde("~/vault.txt"), home.join("vault.txt"));
/// }
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let home = dirs::home_dir();
    match (path.strip_prefix("~/"), home) {
        (Some(rest), Some(home)) => home.join(rest),
        (None, Some(home)) if path == "~" => home,
        _ => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directories_end_in_app_name() {
        assert!(data_dir().ends_with(APP_DIR));
        assert!(default_config_file().ends_with("passvault/config.toml"));
    }

    #[test]
    fn relative_paths_are_untouched() {
        assert_eq!(expand_tilde("vault/fav.txt"), PathBuf::from("vault/fav.txt"));
        assert_eq!(expand_tilde("~user/x"), PathBuf::from("~user/x"));
    }
}
