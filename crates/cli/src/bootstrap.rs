//! Composer construction from CLI arguments.
//!
//! Responsibilities:
//! - Translate global CLI flags into an ordered provider list.
//! - Build the `ConfigurationComposer` strictly or leniently.
//!
//! Does NOT handle:
//! - Rendering output (see `formatters`).
//!
//! Invariants:
//! - Layer order: `.env` file, settings files, environment variables,
//!   user secrets, `--set` overrides.

use anyhow::{Context, Result};
use hostconf_config::providers::{
    CommandLineProvider, DotenvProvider, EnvironmentProvider, JsonFileProvider,
};
use hostconf_config::{ComposerBuilder, ConfigurationComposer};

use crate::args::Cli;

/// Queue the providers selected by the CLI flags.
pub fn builder_from_cli(cli: &Cli) -> ComposerBuilder {
    let mut builder = ComposerBuilder::new();

    if let Some(path) = &cli.env_file {
        builder = builder.add_provider(DotenvProvider::new(path));
    }

    for path in &cli.settings {
        builder = builder.add_provider(JsonFileProvider::new(path).required());
    }

    let mut env = EnvironmentProvider::new().with_lowercase_keys(cli.lowercase_env);
    if let Some(prefix) = &cli.env_prefix {
        env = env.with_prefix(prefix.clone());
    }
    builder = builder.add_provider(env);

    if let Some(id) = &cli.user_secrets_id {
        builder = builder.add_user_secrets(id.clone());
    }

    if !cli.overrides.is_empty() {
        builder = builder.add_provider(CommandLineProvider::new(cli.overrides.iter().cloned()));
    }

    builder
}

/// Build the composer for this invocation.
pub fn build_composer(cli: &Cli) -> Result<ConfigurationComposer> {
    let builder = builder_from_cli(cli);
    if cli.lenient {
        Ok(builder.build_lenient())
    } else {
        builder.build().context("Failed to load configuration")
    }
}
