//! `sources` command: list registered sources and duplicate names.

use anyhow::Result;
use hostconf_config::ConfigurationComposer;

use crate::formatters::{OutputFormat, format_sources};

pub fn run(composer: &ConfigurationComposer, format: OutputFormat) -> Result<String> {
    let summaries = composer.describe_sources();
    let duplicates = composer.duplicate_source_names();
    format_sources(&summaries, &duplicates, format)
}
