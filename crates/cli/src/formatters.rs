//! Output formatters for CLI commands.
//!
//! Provides table and JSON output for resolved views and source summaries.

use anyhow::Result;
use hostconf_config::{CompositeView, SourceSummary};
use serde::Serialize;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Table,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            _ => anyhow::bail!("Invalid output format: {}. Valid options: json, table", s),
        }
    }
}

/// One resolved key as printed by `show`.
#[derive(Debug, Clone, Serialize)]
pub struct EntryRow<'a> {
    pub key: &'a str,
    pub value: &'a str,
    pub source: &'a str,
    pub priority: i32,
    pub sensitive: bool,
}

/// Rows for a view, redacting sensitive values unless `reveal` is set.
pub fn entry_rows(view: &CompositeView, reveal: bool) -> Vec<EntryRow<'_>> {
    view.iter()
        .map(|(key, entry)| EntryRow {
            key,
            value: if reveal {
                entry.value.as_str()
            } else {
                entry.display_value()
            },
            source: &entry.source,
            priority: entry.priority,
            sensitive: entry.sensitive,
        })
        .collect()
}

/// Escape control characters so a cell stays on one line.
fn escape_cell(cell: &str) -> String {
    cell.chars()
        .map(|c| {
            if c.is_control() {
                c.escape_default().to_string()
            } else {
                c.to_string()
            }
        })
        .collect()
}

/// Render rows as a left-aligned text table.
fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let rows: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(|cell| escape_cell(cell)).collect())
        .collect();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_line = |cells: Vec<&str>| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![format_line(headers.to_vec())];
    let separators: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    lines.push(format_line(separators.iter().map(String::as_str).collect()));
    for row in &rows {
        lines.push(format_line(row.iter().map(String::as_str).collect()));
    }
    lines.join("\n")
}

/// Format a resolved view.
pub fn format_view(view: &CompositeView, reveal: bool, format: OutputFormat) -> Result<String> {
    let rows = entry_rows(view, reveal);
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&rows)?),
        OutputFormat::Table => {
            if rows.is_empty() {
                return Ok("No configuration keys resolved.".to_string());
            }
            let cells: Vec<Vec<String>> = rows
                .iter()
                .map(|r| vec![r.key.to_string(), r.value.to_string(), r.source.to_string()])
                .collect();
            Ok(render_table(&["KEY", "VALUE", "SOURCE"], &cells))
        }
    }
}

#[derive(Serialize)]
struct SourcesOutput<'a> {
    sources: &'a [SourceSummary],
    duplicate_names: &'a [String],
}

/// Format registered sources and duplicate-name diagnostics.
pub fn format_sources(
    sources: &[SourceSummary],
    duplicate_names: &[String],
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&SourcesOutput {
            sources,
            duplicate_names,
        })?),
        OutputFormat::Table => {
            let cells: Vec<Vec<String>> = sources
                .iter()
                .enumerate()
                .map(|(index, s)| {
                    vec![
                        (index + 1).to_string(),
                        s.name.clone(),
                        s.priority.to_string(),
                        s.entries.to_string(),
                        if s.sensitive { "yes" } else { "no" }.to_string(),
                    ]
                })
                .collect();
            let mut output = render_table(&["#", "NAME", "PRIORITY", "ENTRIES", "SENSITIVE"], &cells);
            if !duplicate_names.is_empty() {
                output.push_str(&format!(
                    "\n\nWarning: duplicate source names: {}",
                    duplicate_names.join(", ")
                ));
            }
            Ok(output)
        }
    }
}
