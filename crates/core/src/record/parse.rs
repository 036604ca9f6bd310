//! Parse — coercion of raw attribute values and record assembly.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::model::LogRecord;
use super::severity::Severity;
use super::source::{AttributeKey, AttributeSource};

/// Convert one raw log entry into an immutable [`LogRecord`].
///
/// Total conversion: never fails and never panics. A `None` handle yields
/// a record with every field at its default. Absent keys take their
/// type's default; present-but-malformed values fall back silently
/// (numerics to 0, UUID and timestamp to `None`). Presence of a numeric
/// key is preserved in the record's optional form even when its value is
/// malformed, so "explicitly zero" and "missing" stay distinguishable.
///
/// Pure computation over the given source; safe to call concurrently.
pub fn parse(entry: Option<&dyn AttributeSource>) -> LogRecord {
    let Some(entry) = entry else {
        return LogRecord::empty();
    };

    let level = to_unsigned::<u64>(entry.attribute(AttributeKey::Level));

    LogRecord {
        pid: to_unsigned(entry.attribute(AttributeKey::Pid)),
        uid: to_unsigned(entry.attribute(AttributeKey::Uid)),
        gid: to_unsigned(entry.attribute(AttributeKey::Gid)),
        facility: to_text(entry.attribute(AttributeKey::Facility)),
        host: to_text(entry.attribute(AttributeKey::Host)),
        sender: to_text(entry.attribute(AttributeKey::Sender)),
        sender_uuid: to_uuid(entry.attribute(AttributeKey::SenderUuid)),
        time: to_time(entry.attribute(AttributeKey::Time)),
        level,
        severity: Severity::from_code(level.unwrap_or(0)),
        message: to_text(entry.attribute(AttributeKey::Message)),
        message_id: to_unsigned(entry.attribute(AttributeKey::MessageId)),
    }
}

/// Absent key → `None`; present key → parsed value, 0 on malformed text.
fn to_unsigned<T>(value: Option<&str>) -> Option<T>
where
    T: std::str::FromStr + Default,
{
    value.map(|v| v.trim().parse().unwrap_or_default())
}

fn to_text(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

/// Absent or malformed UUID text → `None`, silently.
fn to_uuid(value: Option<&str>) -> Option<Uuid> {
    value.and_then(|v| Uuid::parse_str(v.trim()).ok())
}

/// Integral epoch seconds; absent, malformed, or out-of-range → `None`.
fn to_time(value: Option<&str>) -> Option<DateTime<Utc>> {
    value
        .and_then(|v| v.trim().parse::<i64>().ok())
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
}
