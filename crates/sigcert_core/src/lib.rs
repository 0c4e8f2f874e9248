//! SIGCERT Core Types
//!
//! Leaf types shared by the certificate protocol: wall clock time,
//! expiration hours, the injectable clock, and the format version.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod time;
pub mod version;

// Re-exports
pub use time::{Clock, Duration, ExpirationHours, FixedClock, SystemClock, Timestamp, SECONDS_PER_HOUR};
pub use version::{FormatVersion, VersionError};
