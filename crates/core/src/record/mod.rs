//! Record module — conversion of raw log entries into typed records.
//!
//! A raw entry is an opaque mapping from a closed set of attribute keys to
//! string-encoded values; any key may be absent and any value may be
//! malformed. Conversion is total: every entry, including a null one,
//! yields a fully-formed [`LogRecord`] with documented defaults in place
//! of anything missing or unparsable.
//!
//! # Architecture
//!
//! - `source.rs`: attribute keys and the read-only source abstraction
//! - `severity.rs`: syslog severity codes and names
//! - `model.rs`: the immutable `LogRecord`
//! - `parse.rs`: coercion and record assembly

pub mod source;
pub mod severity;
pub mod model;
pub mod parse;

// Re-export commonly used types
pub use source::{AttributeKey, AttributeSource, RawEntry};
pub use severity::Severity;
pub use model::LogRecord;
pub use parse::parse;
