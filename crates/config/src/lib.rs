//! Layered configuration composition for hostconf.
//!
//! This crate provides the `ConfigurationComposer`, which merges named,
//! prioritized key/value sources into a single read-only view, plus the
//! providers that acquire those sources from environment variables, user
//! secrets, JSON files, `.env` files, the OS keyring and the command line.

mod builder;
pub mod constants;
mod composer;
mod error;
mod path;
pub mod providers;
mod source;
mod view;

pub use builder::ComposerBuilder;
pub use composer::{ConfigurationComposer, SourceSummary};
pub use error::SourceError;
pub use path::default_user_secrets_path;
pub use providers::{SourceProvider, env_var_or_none};
pub use source::ConfigurationSource;
pub use view::{CompositeView, ResolvedEntry};

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::{Mutex, OnceLock};

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }
}
