//! File-based structured logging.
//!
//! `tracing` spans and events from every layer are formatted by the
//! `tracing-subscriber` fmt layer and appended to a size-rotated log file:
//!
//! ```text
//! tracing macros -> EnvFilter -> fmt layer -> RotatingFile -> passvault.log
//! ```
//!
//! # Features
//!
//! - **File Output**: `passvault.log` in the data directory, never the terminal
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//!
//! # Configuration
//!
//! Log level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! Secrets, the unlock code and the passphrase are never logged.
//!
//! # Modules
//!
//! - [`init_tracing`]: Subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

pub mod file_writer;
mod init;

pub use file_writer::RotatingFile;
pub use init::{init_tracing, LOG_FILE};
