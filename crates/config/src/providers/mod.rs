//! Configuration source providers.
//!
//! Responsibilities:
//! - Acquire key/value entries from the outside world and package them as
//!   fully-formed `ConfigurationSource` values.
//! - Map external naming conventions (`DB__HOST`, nested JSON) onto dotted keys.
//!
//! Does NOT handle:
//! - Merging or precedence between sources (see `composer.rs`).
//! - Writing, encrypting or otherwise managing secrets; providers only read.
//!
//! Invariants:
//! - `load()` either returns a complete source or an error; never a partial one.
//! - Error values never include configuration values.

mod command_line;
mod dotenv;
mod env;
mod json;
mod os_keyring;
mod user_secrets;

pub use command_line::CommandLineProvider;
pub use dotenv::DotenvProvider;
pub use env::{EnvironmentProvider, env_key_to_path, env_var_or_none};
pub use json::{JsonFileProvider, flatten_json};
pub use os_keyring::KeyringProvider;
pub use user_secrets::UserSecretsProvider;

use crate::error::SourceError;
use crate::source::ConfigurationSource;

/// Something that can produce a `ConfigurationSource`.
pub trait SourceProvider: Send + Sync {
    /// Name given to the produced source (for diagnostics).
    fn name(&self) -> &str;

    /// Priority given to the produced source. Higher overrides lower.
    fn priority(&self) -> i32;

    /// Acquire the entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store is unreadable or malformed.
    /// Absent optional stores are not errors; they yield an empty source.
    fn load(&self) -> Result<ConfigurationSource, SourceError>;
}
