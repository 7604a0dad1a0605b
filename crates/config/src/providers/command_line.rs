//! Command-line override provider.
//!
//! Accepts `key=value`, `--key=value`, `--key value`, `/key=value` and
//! `/key value`. The token after a bare switch is its value unless it starts
//! with `--`. Tokens without a switch prefix and without `=` are ignored, so
//! positional arguments meant for something else pass through. A later
//! occurrence of a key overrides an earlier one.

use super::SourceProvider;
use crate::constants::COMMAND_LINE_PRIORITY;
use crate::error::SourceError;
use crate::source::ConfigurationSource;

/// Parses command-line arguments into a configuration source.
#[derive(Debug, Clone)]
pub struct CommandLineProvider {
    name: String,
    priority: i32,
    args: Vec<String>,
}

impl CommandLineProvider {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: "command-line".to_string(),
            priority: COMMAND_LINE_PRIORITY,
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    fn strip_switch(token: &str) -> Option<&str> {
        token
            .strip_prefix("--")
            .or_else(|| token.strip_prefix('/'))
    }

    /// The part of a token before `=`, safe to echo in errors.
    fn key_part(token: &str) -> &str {
        token.split_once('=').map_or(token, |(key, _)| key)
    }

    fn parse(&self) -> Result<Vec<(String, String)>, SourceError> {
        let mut pairs = Vec::new();
        let mut tokens = self.args.iter().enumerate().peekable();

        while let Some((position, token)) = tokens.next() {
            if token.starts_with('-') && !token.starts_with("--") {
                return Err(SourceError::CommandLine {
                    message: format!(
                        "single-dash switch '{}' is not supported; use '--'",
                        Self::key_part(token)
                    ),
                });
            }

            let switch = Self::strip_switch(token);
            let body = switch.unwrap_or(token);

            let (key, value) = match body.split_once('=') {
                Some((key, value)) => (key, value.to_string()),
                None if switch.is_none() => continue,
                None => match tokens.next_if(|(_, next)| !next.starts_with("--")) {
                    Some((_, value)) => (body, value.clone()),
                    None => {
                        return Err(SourceError::CommandLine {
                            message: format!("switch '{token}' requires a value"),
                        });
                    }
                },
            };

            if key.is_empty() {
                return Err(SourceError::CommandLine {
                    message: format!("argument {} has an empty key", position + 1),
                });
            }
            pairs.push((key.to_string(), value));
        }
        Ok(pairs)
    }
}

impl SourceProvider for CommandLineProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn load(&self) -> Result<ConfigurationSource, SourceError> {
        let pairs = self.parse()?;
        tracing::debug!(entries = pairs.len(), "Parsed command-line configuration");
        Ok(ConfigurationSource::new(self.name.clone(), self.priority).with_entries(pairs))
    }
}
