//! # fieldlog-shared
//!
//! Shared foundations for the fieldlog workspace:
//!
//! - the structured error envelope used by every fallible edge
//! - secret-key detection for redacting encoded fields and error metadata
//! - ambient context carriers (layered contexts and typed stores)
//!
//! This crate only depends on external crates.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod context;
pub mod errors;
pub mod redaction;

pub use context::{
    Context, ContextKey, ContextRef, ContextStore, ContextValue, RequestStore, background,
    with_value,
};
pub use errors::{
    ErrorClass, ErrorCode, ErrorEnvelope, ErrorKind, ErrorMetadata, REDACTED_VALUE, Result,
    redact_metadata,
};
pub use redaction::{REDACTED, is_secret_key, redact_if_secret};

/// Returns the shared crate version.
#[must_use]
pub const fn shared_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
