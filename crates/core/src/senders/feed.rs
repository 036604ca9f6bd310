//! Feed — incremental record intake with a message-id high-water mark.

use crate::record::LogRecord;

use super::registry::SenderRegistry;

/// Deduplicating intake for a polling log source.
///
/// Repeated queries against a live log overlap: each batch may contain
/// records already seen. The feed only accepts records whose message id is
/// strictly above the high-water mark, advances the mark as it scans, and
/// files accepted records in its registry. Records without a message id
/// (id 0) are never accepted past the initial mark.
#[derive(Debug, Default)]
pub struct Feed {
    last_id: u64,
    registry: SenderRegistry,
}

impl Feed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take in one batch of records, skipping everything at or below the
    /// high-water mark. Returns the number of records accepted.
    pub fn ingest<I>(&mut self, records: I) -> usize
    where
        I: IntoIterator<Item = LogRecord>,
    {
        let mut accepted = 0;
        for record in records {
            let id = record.message_id();
            if id <= self.last_id {
                continue;
            }
            self.last_id = id;
            self.registry.record(record);
            accepted += 1;
        }
        accepted
    }

    /// Highest message id accepted so far.
    pub fn last_id(&self) -> u64 {
        self.last_id
    }

    pub fn registry(&self) -> &SenderRegistry {
        &self.registry
    }
}
