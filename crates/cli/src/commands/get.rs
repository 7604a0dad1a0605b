//! `get` command: print the resolved value of one key.
//!
//! The value is printed as-is, including values from sensitive sources,
//! since the caller asked for that key by name. Table output is the bare
//! value so the command composes with shell substitution.

use anyhow::Result;
use hostconf_config::ConfigurationComposer;
use serde::Serialize;

use crate::formatters::OutputFormat;

#[derive(Serialize)]
struct GetOutput<'a> {
    key: &'a str,
    value: &'a str,
    source: &'a str,
}

/// Returns `None` when the key is not defined in any source.
pub fn run(
    composer: &ConfigurationComposer,
    key: &str,
    format: OutputFormat,
) -> Result<Option<String>> {
    let view = composer.resolve();
    let Some(entry) = view.entry(key) else {
        tracing::debug!(key, "Key not defined in any source");
        return Ok(None);
    };

    let output = match format {
        OutputFormat::Table => entry.value.clone(),
        OutputFormat::Json => serde_json::to_string_pretty(&GetOutput {
            key,
            value: &entry.value,
            source: &entry.source,
        })?,
    };
    Ok(Some(output))
}
