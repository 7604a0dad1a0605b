//! `show` command: print every resolved key.

use anyhow::Result;
use hostconf_config::ConfigurationComposer;

use crate::formatters::{OutputFormat, format_view};

pub fn run(
    composer: &ConfigurationComposer,
    prefix: Option<&str>,
    reveal: bool,
    format: OutputFormat,
) -> Result<String> {
    let view = composer.resolve();
    let view = match prefix {
        Some(prefix) => view.section(prefix),
        None => view,
    };
    tracing::debug!(keys = view.len(), "Resolved configuration");
    format_view(&view, reveal, format)
}
