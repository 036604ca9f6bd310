//! Source — attribute keys and the read-only attribute source abstraction.

use std::collections::HashMap;

/// The closed set of attributes a raw log entry may carry.
///
/// Each key has a stable string name matching the system log facility's
/// attribute names, so an adapter over a native log handle can look values
/// up without any translation table of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKey {
    /// Process id of the logging process.
    Pid,
    /// User id of the logging process.
    Uid,
    /// Group id of the logging process.
    Gid,
    /// Syslog facility name.
    Facility,
    /// Originating host name.
    Host,
    /// Sender (program) name.
    Sender,
    /// Mach-O UUID of the sender binary.
    SenderUuid,
    /// Entry timestamp, integral epoch seconds.
    Time,
    /// Numeric severity code (0 most severe .. 7 least severe).
    Level,
    /// Message text.
    Message,
    /// Monotonically increasing message identifier.
    MessageId,
}

impl AttributeKey {
    /// Every known key, in record-field order.
    pub const ALL: [AttributeKey; 11] = [
        AttributeKey::Pid,
        AttributeKey::Uid,
        AttributeKey::Gid,
        AttributeKey::Facility,
        AttributeKey::Host,
        AttributeKey::Sender,
        AttributeKey::SenderUuid,
        AttributeKey::Time,
        AttributeKey::Level,
        AttributeKey::Message,
        AttributeKey::MessageId,
    ];

    /// Stable string name of this key in the underlying attribute source.
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeKey::Pid => "PID",
            AttributeKey::Uid => "UID",
            AttributeKey::Gid => "GID",
            AttributeKey::Facility => "Facility",
            AttributeKey::Host => "Host",
            AttributeKey::Sender => "Sender",
            AttributeKey::SenderUuid => "SenderMachUUID",
            AttributeKey::Time => "Time",
            AttributeKey::Level => "Level",
            AttributeKey::Message => "Message",
            AttributeKey::MessageId => "ASLMessageID",
        }
    }
}

/// Read-only lookup over one raw log entry.
///
/// `None` means the key is absent from the entry; a present key may still
/// hold a malformed value, which the parser resolves to the target field's
/// default.
pub trait AttributeSource {
    fn attribute(&self, key: AttributeKey) -> Option<&str>;
}

/// Owned attribute map, the plain in-memory form of a raw entry.
///
/// Mainly useful for adapters that copy attributes out of a short-lived
/// native handle, and for tests.
#[derive(Debug, Clone, Default)]
pub struct RawEntry {
    attributes: HashMap<&'static str, String>,
}

impl RawEntry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one attribute, builder style.
    pub fn set(mut self, key: AttributeKey, value: impl Into<String>) -> Self {
        self.attributes.insert(key.as_str(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl AttributeSource for RawEntry {
    fn attribute(&self, key: AttributeKey) -> Option<&str> {
        self.attributes.get(key.as_str()).map(String::as_str)
    }
}

impl AttributeSource for HashMap<String, String> {
    fn attribute(&self, key: AttributeKey) -> Option<&str> {
        self.get(key.as_str()).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names_are_stable() {
        assert_eq!(AttributeKey::Pid.as_str(), "PID");
        assert_eq!(AttributeKey::SenderUuid.as_str(), "SenderMachUUID");
        assert_eq!(AttributeKey::MessageId.as_str(), "ASLMessageID");
    }

    #[test]
    fn test_all_keys_have_distinct_names() {
        let mut names: Vec<&str> = AttributeKey::ALL.iter().map(|k| k.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), AttributeKey::ALL.len());
    }

    #[test]
    fn test_raw_entry_lookup() {
        let entry = RawEntry::new()
            .set(AttributeKey::Sender, "kernel")
            .set(AttributeKey::Level, "3");
        assert_eq!(entry.attribute(AttributeKey::Sender), Some("kernel"));
        assert_eq!(entry.attribute(AttributeKey::Level), Some("3"));
        assert_eq!(entry.attribute(AttributeKey::Host), None);
        assert_eq!(entry.len(), 2);
    }

    #[test]
    fn test_hash_map_source() {
        let mut map = HashMap::new();
        map.insert("Host".to_string(), "mymachine".to_string());
        assert_eq!(map.attribute(AttributeKey::Host), Some("mymachine"));
        assert_eq!(map.attribute(AttributeKey::Sender), None);
    }
}
