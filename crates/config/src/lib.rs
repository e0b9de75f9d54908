//! # fieldlog-config
//!
//! Logger configuration schema, parsing, and env overrides.
//! This crate depends on `ports` and `shared` only.

/// Environment variable parsing and merging.
pub mod env;
/// Config loading helpers (env + file).
pub mod load;
/// Configuration schema types and helpers.
pub mod schema;

pub use env::{
    ENV_LEVEL, ENV_NAME, ENV_OUTPUT, ENV_UTC, EnvParseError, LoggerEnv, apply_env_overrides,
};
pub use load::{
    ConfigFormat, load_logger_config_from_path, load_logger_config_from_sources,
    load_logger_config_std_env,
};
pub use schema::{LogOutput, LoggerConfig, parse_logger_config_json, parse_logger_config_toml};

/// Returns the config crate version.
#[must_use]
pub const fn config_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
