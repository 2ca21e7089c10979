//! Utility modules.

/// `MM/DD/YYYY` date deserialization used by result types.
pub mod datetime;

/// Log sanitization utilities to prevent credential exposure.
pub mod log_sanitizer;
