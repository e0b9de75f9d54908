//! Severity levels and line tags.

use fieldlog_shared::{ErrorCode, ErrorEnvelope};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Log severity, ordered `Debug < Info < Warning < Error < Fatal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Level {
    /// Debug.
    Debug = 0,
    /// Info.
    #[default]
    Info = 1,
    /// Warning.
    Warning = 2,
    /// Error.
    Error = 3,
    /// Fatal.
    Fatal = 4,
}

impl Level {
    /// All levels in ascending order.
    pub const ALL: [Self; 5] = [
        Self::Debug,
        Self::Info,
        Self::Warning,
        Self::Error,
        Self::Fatal,
    ];

    /// Lowercase name of the level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Fatal => "fatal",
        }
    }

    /// Parse a level name, ignoring ASCII case.
    ///
    /// Unknown names yield `(Level::Info, false)`; the caller picks the
    /// fallback policy.
    #[must_use]
    pub fn parse(input: &str) -> (Self, bool) {
        Self::ALL
            .into_iter()
            .find(|level| input.eq_ignore_ascii_case(level.as_str()))
            .map_or((Self::Info, false), |level| (level, true))
    }

    /// Map a raw discriminant back to a level; out-of-range values map to
    /// `Info`.
    #[must_use]
    pub const fn from_repr(raw: u8) -> Self {
        match raw {
            0 => Self::Debug,
            2 => Self::Warning,
            3 => Self::Error,
            4 => Self::Fatal,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ErrorEnvelope;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match Self::parse(input) {
            (level, true) => Ok(level),
            (_, false) => Err(ErrorEnvelope::expected(
                ErrorCode::new("level", "invalid_level"),
                format!("unknown log level `{input}`"),
            )
            .with_metadata("input", input)),
        }
    }
}

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(|error: ErrorEnvelope| {
            serde::de::Error::custom(error.message)
        })
    }
}

/// Short tag written in front of every message body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// `[D] `
    Debug,
    /// `[I] `
    Info,
    /// `[W] `
    Warning,
    /// `[E] `
    Error,
    /// `[F] `
    Fatal,
    /// `[P] `
    Panic,
}

impl Tag {
    /// Tag text including the trailing space.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "[D] ",
            Self::Info => "[I] ",
            Self::Warning => "[W] ",
            Self::Error => "[E] ",
            Self::Fatal => "[F] ",
            Self::Panic => "[P] ",
        }
    }
}

impl From<Level> for Tag {
    fn from(level: Level) -> Self {
        match level {
            Level::Debug => Self::Debug,
            Level::Info => Self::Info,
            Level::Warning => Self::Warning,
            Level::Error => Self::Error,
            Level::Fatal => Self::Fatal,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}
