//! Config loading helpers (env + file).
//!
//! The loader is responsible for deterministic merge order and surfacing
//! user-facing errors as typed `ErrorEnvelope`s.

use crate::env::{LoggerEnv, apply_env_overrides};
use crate::schema::{LoggerConfig, parse_logger_config_json, parse_logger_config_toml};
use fieldlog_shared::{ErrorCode, ErrorEnvelope};
use std::path::Path;

/// Supported config file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// JSON document.
    Json,
    /// TOML document.
    Toml,
}

/// Load the logger config from sources using a deterministic precedence order.
///
/// Precedence (highest wins):
/// - env overrides (`LoggerEnv`)
/// - config content in `format`
/// - defaults (`LoggerConfig::default()`)
pub fn load_logger_config_from_sources(
    config_text: Option<&str>,
    format: ConfigFormat,
    env: &LoggerEnv,
) -> Result<LoggerConfig, ErrorEnvelope> {
    let config = match config_text {
        None => LoggerConfig::default(),
        Some(input) => parse_config(input, format)?,
    };

    Ok(apply_env_overrides(config, env))
}

/// Load the logger config from an optional file path.
///
/// The format is picked from the extension: `.toml` or `.json` (also used when
/// there is no extension).
pub fn load_logger_config_from_path(
    config_path: Option<&Path>,
    env: &LoggerEnv,
) -> Result<LoggerConfig, ErrorEnvelope> {
    let config = match config_path {
        None => LoggerConfig::default(),
        Some(path) => {
            let format = detect_config_format(path)?;
            let config_text = read_config_file(path)?;
            parse_config(&config_text, format)
                .map_err(|error| error.with_metadata("path", path.to_string_lossy()))?
        },
    };

    Ok(apply_env_overrides(config, env))
}

/// Load the logger config from std env and an optional file path.
pub fn load_logger_config_std_env(
    config_path: Option<&Path>,
) -> Result<LoggerConfig, ErrorEnvelope> {
    let env = LoggerEnv::from_std_env().map_err(ErrorEnvelope::from)?;
    load_logger_config_from_path(config_path, &env)
}

fn parse_config(input: &str, format: ConfigFormat) -> Result<LoggerConfig, ErrorEnvelope> {
    match format {
        ConfigFormat::Json => parse_logger_config_json(input),
        ConfigFormat::Toml => parse_logger_config_toml(input),
    }
}

fn read_config_file(path: &Path) -> Result<String, ErrorEnvelope> {
    std::fs::read_to_string(path).map_err(|error| {
        ErrorEnvelope::expected(
            ErrorCode::new("config", "read_failed"),
            format!("failed to read config file: {error}"),
        )
        .with_metadata("path", path.to_string_lossy())
    })
}

fn detect_config_format(path: &Path) -> Result<ConfigFormat, ErrorEnvelope> {
    let ext = path
        .extension()
        .and_then(|value| value.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        None | Some("json") => Ok(ConfigFormat::Json),
        Some("toml") => Ok(ConfigFormat::Toml),
        Some(other) => Err(ErrorEnvelope::expected(
            ErrorCode::new("config", "unsupported_format"),
            "unsupported config format; use .json or .toml",
        )
        .with_metadata("extension", other)),
    }
}
