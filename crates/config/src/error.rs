//! Error types for configuration source acquisition.
//!
//! Responsibilities:
//! - Define error variants for every way a provider can fail to produce a source.
//!
//! Does NOT handle:
//! - Missing keys at read time; those are `None`, never an error.
//!
//! Invariants:
//! - Errors are raised before `register` is called; the composer never sees
//!   a partially loaded source.
//! - No variant carries a configuration value, so secrets cannot leak through
//!   error messages. Dotenv errors report only a byte position.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while a provider acquires a configuration source.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to read configuration file at {path}: {kind}")]
    Io { path: PathBuf, kind: ErrorKind },

    #[error("Required configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse JSON configuration at {path}: {message}")]
    JsonParse { path: PathBuf, message: String },

    #[error("JSON configuration at {path} must contain an object at the top level")]
    InvalidJsonRoot { path: PathBuf },

    /// Failed to parse a `.env` file due to invalid syntax.
    ///
    /// SAFETY: Only the byte index of the failure is kept, never the line.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,

    #[error("Keyring error: {0}")]
    Keyring(#[from] keyring::Error),

    #[error("Invalid user secrets id '{0}'")]
    InvalidUserSecretsId(String),

    #[error("Unable to determine config directory")]
    ConfigDirUnavailable,

    #[error("Invalid command-line argument: {message}")]
    CommandLine { message: String },
}
