//! Test fixtures for shared error codes and envelopes.

use fieldlog_shared::{ErrorClass, ErrorCode, ErrorEnvelope};
use std::io;

/// Return a list of common error codes used in tests.
pub fn common_error_codes() -> Vec<ErrorCode> {
    vec![
        ErrorCode::invalid_input(),
        ErrorCode::not_found(),
        ErrorCode::timeout(),
        ErrorCode::io(),
        ErrorCode::internal(),
        ErrorCode::encode_failed(),
    ]
}

/// An invalid input error fixture.
pub fn invalid_input_error() -> ErrorEnvelope {
    ErrorEnvelope::expected(ErrorCode::invalid_input(), "invalid input")
}

/// A retriable timeout error fixture.
pub fn timeout_error() -> ErrorEnvelope {
    ErrorEnvelope::unexpected(ErrorCode::timeout(), "timeout", ErrorClass::Retriable)
}

/// The I/O error every [`crate::FailingSink`] operation returns.
pub fn sink_closed_error() -> io::Error {
    io::Error::new(io::ErrorKind::BrokenPipe, "sink closed")
}
