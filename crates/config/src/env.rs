//! Environment variable parsing and env-to-config merging.
//!
//! Env parsing is strict: a present but empty or unparseable value fails
//! fast instead of being ignored.

use crate::schema::{LogOutput, LoggerConfig};
use fieldlog_ports::Level;
use fieldlog_shared::{ErrorCode, ErrorEnvelope, redact_if_secret};
use std::collections::BTreeMap;
use std::fmt;

/// Env var: logger name.
pub const ENV_NAME: &str = "FIELDLOG_NAME";
/// Env var: level used by `print`/`printf`.
pub const ENV_LEVEL: &str = "FIELDLOG_LEVEL";
/// Env var: output stream (`stdout` or `stderr`).
pub const ENV_OUTPUT: &str = "FIELDLOG_OUTPUT";
/// Env var: stamp lines in UTC.
pub const ENV_UTC: &str = "FIELDLOG_UTC";

const ALL_ENV_VARS: [&str; 4] = [ENV_NAME, ENV_LEVEL, ENV_OUTPUT, ENV_UTC];

/// Parsed env overrides; `None` means the variable was not set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggerEnv {
    /// Override for [`LoggerConfig::name`].
    pub name: Option<String>,
    /// Override for [`LoggerConfig::level`].
    pub level: Option<Level>,
    /// Override for [`LoggerConfig::output`].
    pub output: Option<LogOutput>,
    /// Override for [`LoggerConfig::utc`].
    pub utc: Option<bool>,
}

impl LoggerEnv {
    /// Parse env overrides from a key/value map (useful for tests and fixtures).
    pub fn from_map(map: &BTreeMap<String, String>) -> Result<Self, EnvParseError> {
        Ok(Self {
            name: parse_optional_trimmed_string(map, ENV_NAME)?,
            level: parse_optional_level(map, ENV_LEVEL)?,
            output: parse_optional_output(map, ENV_OUTPUT)?,
            utc: parse_optional_bool(map, ENV_UTC)?,
        })
    }

    /// Parse env overrides from the current process environment.
    pub fn from_std_env() -> Result<Self, EnvParseError> {
        let mut map = BTreeMap::new();
        for name in ALL_ENV_VARS {
            if let Ok(value) = std::env::var(name) {
                map.insert(name.to_string(), value);
            }
        }

        Self::from_map(&map)
    }

    /// Returns true when no override is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.level.is_none()
            && self.output.is_none()
            && self.utc.is_none()
    }
}

/// Apply env overrides to a base config (env wins over file/default values).
#[must_use]
pub fn apply_env_overrides(base: LoggerConfig, env: &LoggerEnv) -> LoggerConfig {
    let mut config = base;
    if let Some(name) = &env.name {
        config.name = Some(name.clone());
    }
    if let Some(level) = env.level {
        config.level = level;
    }
    if let Some(output) = env.output {
        config.output = output;
    }
    if let Some(utc) = env.utc {
        config.utc = utc;
    }
    config.normalized()
}

/// Validation failures when parsing env variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvParseError {
    /// An env var was present but empty after trimming.
    EmptyValue {
        /// Env var name.
        var: &'static str,
    },
    /// Boolean env var had an invalid value.
    InvalidBool {
        /// Env var name.
        var: &'static str,
        /// Raw input value.
        value: String,
    },
    /// Enum env var had an invalid value.
    InvalidEnum {
        /// Env var name.
        var: &'static str,
        /// Raw input value.
        value: String,
    },
}

impl EnvParseError {
    /// Name of the offending variable.
    #[must_use]
    pub const fn var(&self) -> &'static str {
        match self {
            Self::EmptyValue { var }
            | Self::InvalidBool { var, .. }
            | Self::InvalidEnum { var, .. } => *var,
        }
    }
}

impl fmt::Display for EnvParseError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyValue { var } => write!(formatter, "{var} must be non-empty"),
            Self::InvalidBool { var, .. } => write!(formatter, "{var} must be a boolean"),
            Self::InvalidEnum { var, .. } => write!(formatter, "{var} has an unsupported value"),
        }
    }
}

impl std::error::Error for EnvParseError {}

impl From<EnvParseError> for ErrorEnvelope {
    fn from(error: EnvParseError) -> Self {
        let envelope = Self::expected(ErrorCode::new("config", "invalid_env"), error.to_string())
            .with_metadata("env_var", error.var());

        match error {
            EnvParseError::EmptyValue { .. } => envelope,
            EnvParseError::InvalidBool { var, value }
            | EnvParseError::InvalidEnum { var, value } => {
                envelope.with_metadata("value", redact_if_secret(var, &value))
            },
        }
    }
}

fn parse_optional_trimmed_string(
    map: &BTreeMap<String, String>,
    var: &'static str,
) -> Result<Option<String>, EnvParseError> {
    let Some(raw) = map.get(var) else {
        return Ok(None);
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EnvParseError::EmptyValue { var });
    }

    Ok(Some(trimmed.to_owned()))
}

fn parse_optional_bool(
    map: &BTreeMap<String, String>,
    var: &'static str,
) -> Result<Option<bool>, EnvParseError> {
    let Some(trimmed) = parse_optional_trimmed_string(map, var)? else {
        return Ok(None);
    };

    match trimmed.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(Some(true)),
        "false" | "0" | "no" | "off" => Ok(Some(false)),
        _ => Err(EnvParseError::InvalidBool {
            var,
            value: trimmed,
        }),
    }
}

fn parse_optional_level(
    map: &BTreeMap<String, String>,
    var: &'static str,
) -> Result<Option<Level>, EnvParseError> {
    let Some(trimmed) = parse_optional_trimmed_string(map, var)? else {
        return Ok(None);
    };

    match Level::parse(&trimmed) {
        (level, true) => Ok(Some(level)),
        (_, false) => Err(EnvParseError::InvalidEnum {
            var,
            value: trimmed,
        }),
    }
}

fn parse_optional_output(
    map: &BTreeMap<String, String>,
    var: &'static str,
) -> Result<Option<LogOutput>, EnvParseError> {
    let Some(trimmed) = parse_optional_trimmed_string(map, var)? else {
        return Ok(None);
    };

    trimmed
        .parse()
        .map(Some)
        .map_err(|_: ErrorEnvelope| EnvParseError::InvalidEnum {
            var,
            value: trimmed.clone(),
        })
}
