//! Command-line entry point.
//!
//! This module is the thin shell around the library: it parses arguments,
//! loads the configuration, wires the file-backed collaborators together and
//! hands control to [`Runtime`].
//!
//! # Commands
//!
//! - `run` (default): take over the terminal and start a locked session
//! - `seal --name NAME`: prompt for a secret and append it to the credential file
//! - `check`: decrypt the credential file and report what would be loaded
//!
//! Everything that can fail before the terminal is taken over is reported on
//! stderr with a non-zero exit status. Once the session runs, errors are shown
//! on the fault screen or written to the log file.

#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use passvault::app::FavoritesManager;
use passvault::infrastructure::{
    ClipboardSink, DeviceSink, KeystrokeSink, SealedCipher, TerminalInput,
};
use passvault::observability::init_tracing;
use passvault::storage::{records, FileStorage, Storage};
use passvault::ui::TerminalDisplay;
use passvault::{initialize, Config, EntryStore, OutputTarget, Result, Runtime, VaultError};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "passvault",
    version,
    about = "Offline keypad-driven password vault"
)]
struct Cli {
    /// Configuration file (default: platform config dir/passvault/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log filter directive, overriding `trace_level` from the config
    #[arg(long, global = true)]
    trace_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start a locked session (default)
    Run,
    /// Seal a new secret and append it to the credential file
    Seal {
        /// Display name of the new entry
        #[arg(short, long)]
        name: String,
    },
    /// Decrypt the credential file and print a summary
    Check,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match dispatch(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("passvault: {e}");
            ExitCode::FAILURE
        }
    }
}

fn dispatch(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(level) = cli.trace_level {
        config.trace_level = Some(level);
    }
    init_tracing(&config);
    tracing::debug!(config = ?config, "configuration loaded");

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => run(&config),
        Command::Seal { name } => seal(&config, &name),
        Command::Check => check(&config),
    }
}

fn file_storage(config: &Config) -> FileStorage {
    FileStorage::new(config.credentials_path(), config.favorites_path())
}

fn run(config: &Config) -> Result<()> {
    let passphrase = config.require_passphrase()?;
    config.require_unlock_code()?;

    let storage = file_storage(config);
    let cipher = SealedCipher::new(passphrase);
    let state = initialize(config, &storage, &cipher);

    let sink: Box<dyn KeystrokeSink> = match config.output_target() {
        OutputTarget::Clipboard => Box::new(ClipboardSink::new()?),
        OutputTarget::Device(path) => Box::new(DeviceSink::<std::fs::File>::open(&path)?),
    };

    let display = TerminalDisplay::enter()?;
    let mut runtime = Runtime::new(
        state,
        Box::new(storage),
        Box::new(display),
        Box::new(TerminalInput::new()),
        sink,
    );
    runtime.run()
}

fn seal(config: &Config, name: &str) -> Result<()> {
    let _span = tracing::info_span!("seal").entered();
    tracing::debug!(name = %name, "sealing new entry");

    if name.is_empty() || name.contains(['\t', '\n', '\r']) {
        return Err(VaultError::Config(
            "entry name must be non-empty and free of tabs and line breaks".to_string(),
        ));
    }

    let passphrase = config.require_passphrase()?;
    let mut storage = file_storage(config);
    let cipher = SealedCipher::new(passphrase);

    // New records share the salt of the first one so the key is derived once.
    // Loading the whole store also proves the passphrase matches the file.
    let salt = match storage.credentials() {
        Ok(contents) => {
            let store = EntryStore::load(&storage, &cipher)?;
            if store.find_by_name(name).is_some() {
                tracing::warn!("an entry with this name already exists");
                eprintln!("passvault: warning: {name} already exists, appending anyway");
            }
            records::parse_credentials(&contents)
                .first()
                .and_then(|record| SealedCipher::salt_of(record.ciphertext))
        }
        Err(_) if !storage.credentials_path().exists() => None,
        Err(e) => return Err(e),
    };

    let secret = zeroize::Zeroizing::new(rpassword::prompt_password(format!("Secret for {name}: "))?);
    if secret.is_empty() {
        return Err(VaultError::Config("empty secret".to_string()));
    }

    let token = cipher.seal(&secret, salt)?;
    storage.append_credential(name, &token)?;

    tracing::info!("secret sealed");
    println!("sealed {name} into {}", storage.credentials_path().display());
    Ok(())
}

fn check(config: &Config) -> Result<()> {
    let _span = tracing::info_span!("check").entered();

    let passphrase = config.require_passphrase()?;
    config.require_unlock_code()?;

    let storage = file_storage(config);
    let cipher = SealedCipher::new(passphrase);
    let store = EntryStore::load(&storage, &cipher)?;
    let favorites = FavoritesManager::load(&storage, &store)?;

    let glyphs: String = store.glyphs().as_slice().iter().collect();
    println!("credentials: {}", storage.credentials_path().display());
    println!("entries:     {}", store.len());
    println!("glyphs:      {glyphs}");
    println!("favorites:   {}", favorites.len());
    Ok(())
}
