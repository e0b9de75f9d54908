//! Structured fields attached to log lines.
//!
//! A field set is an ordered slice of [`Field`]s. Duplicate keys are kept and
//! the JSON encoding preserves insertion order, so the encoded object is
//! exactly what the caller attached.

use fieldlog_shared::{ErrorCode, ErrorEnvelope, Result};
use serde::Serialize;
use serde_json::Value;
use std::io::Write;

/// A named datum attached to a log line.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    key: Box<str>,
    value: Value,
}

impl Field {
    /// Create a field from any value convertible to JSON.
    pub fn new(key: impl Into<Box<str>>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create a field from a serializable structure.
    pub fn serialized<T: Serialize + ?Sized>(key: impl Into<Box<str>>, value: &T) -> Result<Self> {
        let value = serde_json::to_value(value).map_err(|error| {
            ErrorEnvelope::expected(
                ErrorCode::encode_failed(),
                format!("field value is not representable as JSON: {error}"),
            )
        })?;
        Ok(Self {
            key: key.into(),
            value,
        })
    }

    /// Field key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Field value.
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }

    /// Return a copy with the value replaced.
    #[must_use]
    pub fn with_value(&self, value: Value) -> Self {
        Self {
            key: self.key.clone(),
            value,
        }
    }
}

impl<K, V> From<(K, V)> for Field
where
    K: Into<Box<str>>,
    V: Into<Value>,
{
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

/// Encode `fields` as a JSON object into `out`, in slice order.
///
/// Duplicate keys are written as-is.
pub fn encode_fields_json<W: Write + ?Sized>(fields: &[Field], out: &mut W) -> Result<()> {
    out.write_all(b"{")?;
    for (index, field) in fields.iter().enumerate() {
        if index > 0 {
            out.write_all(b",")?;
        }
        serde_json::to_writer(&mut *out, field.key())?;
        out.write_all(b":")?;
        serde_json::to_writer(&mut *out, field.value())?;
    }
    out.write_all(b"}")?;
    Ok(())
}

/// Encode `fields` to an owned JSON string.
pub fn fields_to_json(fields: &[Field]) -> Result<String> {
    let mut buffer = Vec::new();
    encode_fields_json(fields, &mut buffer)?;
    String::from_utf8(buffer).map_err(|error| {
        ErrorEnvelope::invariant(
            ErrorCode::encode_failed(),
            format!("field encoding produced invalid UTF-8: {error}"),
        )
    })
}
