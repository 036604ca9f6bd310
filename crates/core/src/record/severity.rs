//! Severity — syslog severity codes and their fixed name table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Syslog severity names (RFC 5424 §6.2.1), most to least severe.
const SEVERITY_NAMES: [&str; 8] = [
    "emergency", "alert", "critical", "error",
    "warning", "notice", "info", "debug",
];

/// A log entry's severity tier.
///
/// Codes 0–7 map onto the eight standard syslog severities; anything
/// outside that range is `Unknown` rather than an error, since severity
/// comes from a best-effort diagnostic source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Emergency,
    Alert,
    Critical,
    Error,
    Warning,
    Notice,
    Info,
    Debug,
    Unknown,
}

impl Severity {
    /// Map a numeric severity code onto the fixed table. Never fails.
    pub fn from_code(code: u64) -> Self {
        match code {
            0 => Severity::Emergency,
            1 => Severity::Alert,
            2 => Severity::Critical,
            3 => Severity::Error,
            4 => Severity::Warning,
            5 => Severity::Notice,
            6 => Severity::Info,
            7 => Severity::Debug,
            _ => Severity::Unknown,
        }
    }

    /// Numeric code, `None` for the `Unknown` sentinel.
    pub fn code(&self) -> Option<u8> {
        match self {
            Severity::Emergency => Some(0),
            Severity::Alert => Some(1),
            Severity::Critical => Some(2),
            Severity::Error => Some(3),
            Severity::Warning => Some(4),
            Severity::Notice => Some(5),
            Severity::Info => Some(6),
            Severity::Debug => Some(7),
            Severity::Unknown => None,
        }
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self.code() {
            Some(code) => SEVERITY_NAMES[code as usize],
            None => "unknown",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
