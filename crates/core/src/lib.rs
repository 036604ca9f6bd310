// Domain-driven module structure for the console-core library.

// Record pipeline
pub mod record;

// Domain modules
pub mod senders;
pub mod prefs;
