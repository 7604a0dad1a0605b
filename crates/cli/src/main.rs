//! hostconf - inspect layered application configuration.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Bootstrap a `ConfigurationComposer` from environment variables, user
//!   secrets and the other sources selected by flags.
//! - Print resolved values, sections and source diagnostics.
//!
//! Does NOT handle:
//! - Merge rules or source acquisition (see `crates/config`).
//!
//! Invariants:
//! - Logs go to stderr so stdout stays machine-readable.
//! - Sensitive values are redacted by `show` unless `--reveal` is passed.

mod args;
mod bootstrap;
mod commands;
mod error;
mod formatters;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use error::{ExitCode, ExitCodeExt};
use formatters::OutputFormat;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            e.exit_code()
        }
    };
    std::process::exit(code.as_i32());
}

fn run(cli: Cli) -> Result<ExitCode> {
    let format = OutputFormat::from_str(&cli.output)?;
    let composer = bootstrap::build_composer(&cli)?;

    let output = match &cli.command {
        Commands::Show { prefix } => {
            commands::show::run(&composer, prefix.as_deref(), cli.reveal, format)?
        }
        Commands::Get { key } => match commands::get::run(&composer, key, format)? {
            Some(output) => output,
            None => {
                eprintln!("Key not found: {}", key);
                return Ok(ExitCode::KeyNotFound);
            }
        },
        Commands::Sources => commands::sources::run(&composer, format)?,
    };

    println!("{}", output);
    Ok(ExitCode::Success)
}
