//! Registry — concurrent map from sender identity to accumulated records.

use dashmap::DashMap;

use crate::record::LogRecord;

/// Identity of a sender. Two senders are the same only when both name and
/// facility match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SenderKey {
    pub name: String,
    pub facility: String,
}

impl SenderKey {
    pub fn new(name: impl Into<String>, facility: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            facility: facility.into(),
        }
    }

    /// Key for the sender a record came from.
    pub fn of(record: &LogRecord) -> Self {
        Self::new(record.sender(), record.facility())
    }
}

/// Per-sender record accumulation.
///
/// Routes each record to its sender's bucket, creating the bucket on first
/// sight. Records are stored in arrival order. Safe for concurrent use;
/// stored records are never mutated, only cloned out.
#[derive(Debug, Default)]
pub struct SenderRegistry {
    senders: DashMap<SenderKey, Vec<LogRecord>>,
}

impl SenderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// File one record under its sender.
    pub fn record(&self, record: LogRecord) {
        self.senders.entry(SenderKey::of(&record)).or_default().push(record);
    }

    /// All known sender keys, in no particular order.
    pub fn senders(&self) -> Vec<SenderKey> {
        self.senders.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Snapshot of one sender's records; empty if the sender is unknown.
    pub fn records_for(&self, key: &SenderKey) -> Vec<LogRecord> {
        self.senders
            .get(key)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }

    /// Number of records filed under one sender.
    pub fn record_count(&self, key: &SenderKey) -> usize {
        self.senders.get(key).map(|entry| entry.value().len()).unwrap_or(0)
    }

    /// Number of distinct senders seen.
    pub fn len(&self) -> usize {
        self.senders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.senders.is_empty()
    }

    pub fn clear(&self) {
        self.senders.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{parse, AttributeKey, RawEntry};

    fn record(sender: &str, facility: &str, message: &str) -> LogRecord {
        let entry = RawEntry::new()
            .set(AttributeKey::Sender, sender)
            .set(AttributeKey::Facility, facility)
            .set(AttributeKey::Message, message);
        parse(Some(&entry))
    }

    #[test]
    fn test_records_group_by_sender_and_facility() {
        let registry = SenderRegistry::new();
        registry.record(record("sshd", "auth", "one"));
        registry.record(record("sshd", "auth", "two"));
        registry.record(record("sshd", "daemon", "three"));

        assert_eq!(registry.len(), 2, "Same name under a different facility is a distinct sender");
        assert_eq!(registry.record_count(&SenderKey::new("sshd", "auth")), 2);
        assert_eq!(registry.record_count(&SenderKey::new("sshd", "daemon")), 1);
    }

    #[test]
    fn test_records_for_preserves_arrival_order() {
        let registry = SenderRegistry::new();
        registry.record(record("cron", "cron", "first"));
        registry.record(record("cron", "cron", "second"));

        let records = registry.records_for(&SenderKey::new("cron", "cron"));
        let messages: Vec<&str> = records.iter().map(|r| r.message()).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn test_unknown_sender_is_empty() {
        let registry = SenderRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.records_for(&SenderKey::new("nobody", "")).is_empty());
        assert_eq!(registry.record_count(&SenderKey::new("nobody", "")), 0);
    }

    #[test]
    fn test_clear() {
        let registry = SenderRegistry::new();
        registry.record(record("kernel", "kern", "boot"));
        assert_eq!(registry.len(), 1);
        registry.clear();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_concurrent_recording() {
        use std::sync::Arc;

        let registry = Arc::new(SenderRegistry::new());
        let mut handles = Vec::new();
        for i in 0..4 {
            let registry = Arc::clone(&registry);
            handles.push(std::thread::spawn(move || {
                for j in 0..25 {
                    registry.record(record(&format!("app{}", i), "user", &format!("msg {}", j)));
                }
            }));
        }
        for handle in handles {
            handle.join().expect("recorder thread panicked");
        }

        assert_eq!(registry.len(), 4);
        for i in 0..4 {
            assert_eq!(registry.record_count(&SenderKey::new(format!("app{}", i), "user")), 25);
        }
    }
}
