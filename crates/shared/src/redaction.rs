//! Secret detection and redaction utilities.
//!
//! Provides consistent logic for detecting sensitive keys and redacting their
//! values in encoded log fields and error metadata.

/// The redacted placeholder string.
pub const REDACTED: &str = "[REDACTED]";

/// Checks if a key/variable name likely refers to a secret.
///
/// Uses case-insensitive pattern matching to detect common secret-related
/// naming conventions.
///
/// # Examples
///
/// ```
/// use fieldlog_shared::is_secret_key;
///
/// assert!(is_secret_key("apiKey"));
/// assert!(is_secret_key("password"));
/// assert!(is_secret_key("FIELDLOG_AUTH"));
/// assert!(!is_secret_key("FIELDLOG_LEVEL"));
/// ```
pub fn is_secret_key(key: &str) -> bool {
    let key = key.to_ascii_uppercase();
    key.contains("KEY")
        || key.contains("TOKEN")
        || key.contains("SECRET")
        || key.contains("PASSWORD")
        || key.contains("CREDENTIAL")
        || key.contains("AUTH")
}

/// Redacts a value if the key is likely a secret.
///
/// # Examples
///
/// ```
/// use fieldlog_shared::redact_if_secret;
///
/// assert_eq!(redact_if_secret("API_KEY", "sk-123"), "[REDACTED]");
/// assert_eq!(redact_if_secret("FIELDLOG_LEVEL", "debug"), "debug");
/// ```
pub fn redact_if_secret(key: &str, value: &str) -> String {
    if is_secret_key(key) {
        REDACTED.to_string()
    } else {
        value.to_string()
    }
}
