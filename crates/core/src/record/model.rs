//! Model — the immutable log record.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::severity::Severity;

/// One normalized log entry.
///
/// Every field is fixed at construction; there are no setters. Numeric
/// fields carry presence: `None` means the attribute was absent from the
/// raw entry, `Some(0)` means it was present (possibly malformed). The
/// zero-defaulted plain accessors (`pid()`, `level()`, ...) exist for
/// callers that don't care about the distinction.
///
/// Records deliberately do not implement `PartialEq`: identity is
/// per-instance, and two parses of identical raw input yield distinct
/// records with equal field values.
#[derive(Debug, Clone, Serialize)]
pub struct LogRecord {
    pub(crate) pid: Option<u32>,
    pub(crate) uid: Option<u32>,
    pub(crate) gid: Option<u32>,
    pub(crate) facility: String,
    pub(crate) host: String,
    pub(crate) sender: String,
    pub(crate) sender_uuid: Option<Uuid>,
    pub(crate) time: Option<DateTime<Utc>>,
    pub(crate) level: Option<u64>,
    pub(crate) severity: Severity,
    pub(crate) message: String,
    pub(crate) message_id: Option<u64>,
}

impl LogRecord {
    /// Record with every field at its default, as produced for a null raw
    /// entry. Severity derives from the default level code 0.
    pub fn empty() -> Self {
        Self {
            pid: None,
            uid: None,
            gid: None,
            facility: String::new(),
            host: String::new(),
            sender: String::new(),
            sender_uuid: None,
            time: None,
            level: None,
            severity: Severity::from_code(0),
            message: String::new(),
            message_id: None,
        }
    }

    pub fn pid(&self) -> u32 {
        self.pid.unwrap_or(0)
    }

    pub fn pid_opt(&self) -> Option<u32> {
        self.pid
    }

    pub fn uid(&self) -> u32 {
        self.uid.unwrap_or(0)
    }

    pub fn uid_opt(&self) -> Option<u32> {
        self.uid
    }

    pub fn gid(&self) -> u32 {
        self.gid.unwrap_or(0)
    }

    pub fn gid_opt(&self) -> Option<u32> {
        self.gid
    }

    pub fn facility(&self) -> &str {
        &self.facility
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn sender_uuid(&self) -> Option<Uuid> {
        self.sender_uuid
    }

    pub fn time(&self) -> Option<DateTime<Utc>> {
        self.time
    }

    /// Numeric severity code, 0 when the level attribute was absent.
    pub fn level(&self) -> u64 {
        self.level.unwrap_or(0)
    }

    pub fn level_opt(&self) -> Option<u64> {
        self.level
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Human-readable severity name derived from the level code.
    pub fn severity_name(&self) -> &'static str {
        self.severity.name()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn message_id(&self) -> u64 {
        self.message_id.unwrap_or(0)
    }

    pub fn message_id_opt(&self) -> Option<u64> {
        self.message_id
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}] - {}: {}",
            self.sender,
            self.pid(),
            self.severity,
            self.message
        )
    }
}
