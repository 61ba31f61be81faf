//! src/level.rs
//! Severity level enumeration and conversions.

use std::fmt;
use std::str::FromStr;

/// Severity of a log statement.
///
/// Levels form a total order where a larger numeric value means more verbose
/// (less severe) output. [`Level::Off`] is a sentinel: it never matches an
/// emission check and exists only so a threshold can mean "emit nothing".
/// There is no logging macro for it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Level {
    /// Emit nothing; threshold sentinel.
    Off = 0,
    /// Unrecoverable conditions.
    Critical = 1,
    /// Errors the program continues past.
    Error = 2,
    /// Suspicious but tolerated conditions.
    Warn = 3,
    /// Normal operational messages.
    Info = 4,
    /// Diagnostics for development.
    Debug = 5,
    /// Fine-grained tracing.
    Trace = 6,
}

impl Level {
    /// Returns the numeric value of the level.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Converts a numeric value back into a level.
    ///
    /// Returns `None` for values outside `0..=6`.
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Off),
            1 => Some(Self::Critical),
            2 => Some(Self::Error),
            3 => Some(Self::Warn),
            4 => Some(Self::Info),
            5 => Some(Self::Debug),
            6 => Some(Self::Trace),
            _ => None,
        }
    }

    /// Returns the uppercase name of the level.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::Critical => "CRITICAL",
            Self::Error => "ERROR",
            Self::Warn => "WARN",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
            Self::Trace => "TRACE",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Level {
    type Err = String;

    /// Parses a level name such as `"info"` or `"WARN"` (ASCII case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("off") {
            Ok(Self::Off)
        } else if s.eq_ignore_ascii_case("critical") {
            Ok(Self::Critical)
        } else if s.eq_ignore_ascii_case("error") {
            Ok(Self::Error)
        } else if s.eq_ignore_ascii_case("warn") {
            Ok(Self::Warn)
        } else if s.eq_ignore_ascii_case("info") {
            Ok(Self::Info)
        } else if s.eq_ignore_ascii_case("debug") {
            Ok(Self::Debug)
        } else if s.eq_ignore_ascii_case("trace") {
            Ok(Self::Trace)
        } else {
            Err(format!("unknown log level: {s}"))
        }
    }
}
