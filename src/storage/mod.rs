//! Storage layer for the credential and favorites files.
//!
//! This module provides the storage abstraction used at startup to read the
//! encrypted credential list and the persisted favorites, and during the
//! session to rewrite the favorites file.
//!
//! # Modules
//!
//! - `backend`: Storage trait abstraction for backend implementations
//! - `file`: Plain-file implementation with atomic favorites writes
//! - `memory`: In-memory implementation for tests
//! - `records`: Line formats of both files

pub mod backend;
pub mod file;
pub mod memory;
pub mod records;

pub use backend::Storage;
pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use records::CredentialRecord;
