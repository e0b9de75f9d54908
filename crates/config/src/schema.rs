//! Logger configuration schema and defaults.
//!
//! Deserialization uses `serde` for both TOML and JSON inputs. Unknown keys
//! are rejected so typos surface as errors instead of silently falling back to
//! defaults.

use fieldlog_ports::Level;
use fieldlog_shared::{ErrorCode, ErrorEnvelope};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Destination stream for the configured logger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogOutput {
    /// Process standard output.
    #[default]
    Stdout,
    /// Process standard error.
    Stderr,
}

impl LogOutput {
    /// Lowercase name used in config files and env vars.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stdout => "stdout",
            Self::Stderr => "stderr",
        }
    }
}

impl fmt::Display for LogOutput {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for LogOutput {
    type Err = ErrorEnvelope;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "stdout" => Ok(Self::Stdout),
            "stderr" => Ok(Self::Stderr),
            _ => Err(ErrorEnvelope::expected(
                ErrorCode::new("config", "invalid_output"),
                format!("unsupported log output `{input}`; use stdout or stderr"),
            )),
        }
    }
}

/// Settings for building the process default logger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct LoggerConfig {
    /// Name rendered as `[name]` before every tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Level used by `print`/`printf`.
    pub level: Level,
    /// Destination stream.
    pub output: LogOutput,
    /// Stamp lines in UTC instead of local time.
    pub utc: bool,
    /// Encode secret-looking field keys as `[REDACTED]`.
    pub redact_secrets: bool,
    /// Initial fields, encoded in key order.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, Value>,
}

impl LoggerConfig {
    /// Drop a blank name so it renders as no prefix at all.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.name = self
            .name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());
        self
    }
}

/// Parse a logger config from a JSON string.
pub fn parse_logger_config_json(input: &str) -> Result<LoggerConfig, ErrorEnvelope> {
    let config: LoggerConfig = serde_json::from_str(input).map_err(|error| {
        ErrorEnvelope::expected(
            ErrorCode::new("config", "invalid_json"),
            format!("invalid config JSON: {error}"),
        )
    })?;
    Ok(config.normalized())
}

/// Parse a logger config from a TOML string.
pub fn parse_logger_config_toml(input: &str) -> Result<LoggerConfig, ErrorEnvelope> {
    let config: LoggerConfig = toml::from_str(input).map_err(|error| {
        ErrorEnvelope::expected(
            ErrorCode::new("config", "invalid_toml"),
            format!("invalid config TOML: {error}"),
        )
    })?;
    Ok(config.normalized())
}
