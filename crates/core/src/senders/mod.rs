//! Senders module — grouping of records by sender and incremental intake.
//!
//! A sender is identified by its (name, facility) pair. The registry keeps
//! each sender's accumulated records; the feed deduplicates incoming
//! batches against a message-id high-water mark so a polling caller can
//! hand over overlapping query results without producing duplicates.

pub mod registry;
pub mod feed;

pub use registry::{SenderKey, SenderRegistry};
pub use feed::Feed;
