//! Bootstrap builder for a configuration composer.
//!
//! Responsibilities:
//! - Queue source providers in the order an application bootstrap adds them.
//! - Load every provider and register the results into a `ConfigurationComposer`.
//!
//! Does NOT handle:
//! - Merge rules (see `composer.rs`).
//! - Host lifecycle; the builder only produces configuration.
//!
//! Invariants / Assumptions:
//! - Providers load in queue order and register in queue order, so equal
//!   priorities resolve in favor of the provider added last.
//! - `build()` registers nothing unless every provider loads successfully.
//! - `build_lenient()` skips failing providers with a warning.

use std::path::PathBuf;

use crate::composer::ConfigurationComposer;
use crate::error::SourceError;
use crate::providers::{
    CommandLineProvider, DotenvProvider, EnvironmentProvider, JsonFileProvider, KeyringProvider,
    SourceProvider, UserSecretsProvider,
};
use crate::source::ConfigurationSource;

/// Builder that wires providers into a `ConfigurationComposer`.
///
/// ```rust,ignore
/// let composer = ComposerBuilder::new()
///     .add_environment_variables()
///     .add_user_secrets("my-app")
///     .add_command_line(std::env::args().skip(1))
///     .build()?;
/// ```
#[derive(Default)]
pub struct ComposerBuilder {
    providers: Vec<Box<dyn SourceProvider>>,
}

/// Wraps an already-materialized source so it can sit in the provider queue.
struct StaticProvider(ConfigurationSource);

impl SourceProvider for StaticProvider {
    fn name(&self) -> &str {
        self.0.name()
    }

    fn priority(&self) -> i32 {
        self.0.priority()
    }

    fn load(&self) -> Result<ConfigurationSource, SourceError> {
        Ok(self.0.clone())
    }
}

impl ComposerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue any provider.
    pub fn add_provider<P>(mut self, provider: P) -> Self
    where
        P: SourceProvider + 'static,
    {
        self.providers.push(Box::new(provider));
        self
    }

    /// Queue an in-memory source.
    pub fn add_source(self, source: ConfigurationSource) -> Self {
        self.add_provider(StaticProvider(source))
    }

    /// Queue every process environment variable.
    pub fn add_environment_variables(self) -> Self {
        self.add_provider(EnvironmentProvider::new())
    }

    /// Queue process environment variables starting with `prefix` (stripped from keys).
    pub fn add_environment_variables_with_prefix(self, prefix: impl Into<String>) -> Self {
        self.add_provider(EnvironmentProvider::new().with_prefix(prefix))
    }

    /// Queue the user secrets store for `user_secrets_id`.
    pub fn add_user_secrets(self, user_secrets_id: impl Into<String>) -> Self {
        self.add_provider(UserSecretsProvider::new(user_secrets_id))
    }

    /// Queue an optional JSON settings file.
    pub fn add_json_file(self, path: impl Into<PathBuf>) -> Self {
        self.add_provider(JsonFileProvider::new(path))
    }

    /// Queue a `.env` file.
    pub fn add_dotenv(self, path: impl Into<PathBuf>) -> Self {
        self.add_provider(DotenvProvider::new(path))
    }

    /// Queue keyring lookups.
    pub fn add_keyring(self, provider: KeyringProvider) -> Self {
        self.add_provider(provider)
    }

    /// Queue command-line overrides.
    pub fn add_command_line<I, S>(self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_provider(CommandLineProvider::new(args))
    }

    /// Number of queued providers.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Load every provider and register the results.
    ///
    /// # Errors
    ///
    /// Returns the first provider failure. Nothing is registered in that case.
    pub fn build(self) -> Result<ConfigurationComposer, SourceError> {
        let sources = self
            .providers
            .iter()
            .map(|provider| {
                provider.load().inspect_err(|e| {
                    tracing::debug!(
                        source = provider.name(),
                        error = %e,
                        "Configuration source failed to load"
                    );
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let composer = ConfigurationComposer::new();
        for source in sources {
            composer.register(source);
        }
        Ok(composer)
    }

    /// Load every provider, skipping the ones that fail.
    pub fn build_lenient(self) -> ConfigurationComposer {
        let composer = ConfigurationComposer::new();
        for provider in &self.providers {
            match provider.load() {
                Ok(source) => composer.register(source),
                Err(e) => {
                    tracing::warn!(
                        source = provider.name(),
                        error = %e,
                        "Skipping configuration source that failed to load"
                    );
                }
            }
        }
        composer
    }
}
