//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Read tool settings from `HOSTCONF_*` environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `commands` module).
//! - Does not build the composer (see `bootstrap` module).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hostconf")]
#[command(about = "Inspect layered application configuration", long_about = None)]
#[command(version)]
#[command(
    after_help = "Sources are layered in this order (later wins at equal priority):\n  --env-file, --settings files, environment variables, user secrets, --set overrides\n\nExamples:\n  hostconf --user-secrets-id my-app show\n  hostconf --env-prefix MYAPP_ get db.host\n  hostconf --set db.host=localhost sources\n"
)]
pub struct Cli {
    /// User secrets id whose store is layered over environment variables
    #[arg(long, global = true, env = "HOSTCONF_USER_SECRETS_ID")]
    pub user_secrets_id: Option<String>,

    /// Only read environment variables with this prefix (stripped from keys)
    #[arg(long, global = true, env = "HOSTCONF_ENV_PREFIX")]
    pub env_prefix: Option<String>,

    /// Lowercase keys read from environment variables
    #[arg(long, global = true)]
    pub lowercase_env: bool,

    /// Path to a `.env` file layered below environment variables
    #[arg(long, global = true, value_name = "FILE")]
    pub env_file: Option<PathBuf>,

    /// JSON settings file (repeatable; later files win)
    #[arg(long = "settings", global = true, value_name = "FILE")]
    pub settings: Vec<PathBuf>,

    /// Override a key on the command line (repeatable)
    #[arg(long = "set", global = true, value_name = "KEY=VALUE", value_parser = parse_override)]
    pub overrides: Vec<String>,

    /// Skip sources that fail to load instead of aborting
    #[arg(long, global = true)]
    pub lenient: bool,

    /// Show values from sensitive sources instead of redacting them
    #[arg(long, global = true)]
    pub reveal: bool,

    /// Output format (table, json)
    #[arg(short, long, global = true, default_value = "table")]
    pub output: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show every resolved key with its value and winning source
    Show {
        /// Only show keys below this prefix (e.g. `db`)
        #[arg(long)]
        prefix: Option<String>,
    },

    /// Print the resolved value of one key
    Get {
        /// Dotted key path (case-sensitive)
        key: String,
    },

    /// List registered sources in registration order
    Sources,
}

/// Require `KEY=VALUE` for `--set`; the key itself is checked by the provider.
fn parse_override(s: &str) -> Result<String, String> {
    if s.contains('=') {
        Ok(s.to_string())
    } else {
        Err("expected KEY=VALUE".to_string())
    }
}
