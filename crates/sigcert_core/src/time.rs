//! Time types for certificate expiration.
//!
//! Expiration is stored as whole hours since the Unix epoch. Reading "now"
//! goes through the [`Clock`] trait so verification can run against a fixed
//! instant in tests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of seconds in one hour
pub const SECONDS_PER_HOUR: u64 = 60 * 60;

/// Wall clock timestamp relative to the Unix epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp {
    pub seconds: u64,
    pub nanos: u32,
}

impl Timestamp {
    /// Maximum nanoseconds per second
    pub const NANOS_PER_SEC: u32 = 1_000_000_000;

    /// The Unix epoch
    pub const UNIX_EPOCH: Self = Self { seconds: 0, nanos: 0 };

    /// Create a new timestamp
    #[must_use]
    pub const fn new(seconds: u64, nanos: u32) -> Self {
        Self { seconds, nanos }
    }

    /// Create a timestamp on a whole second
    #[must_use]
    pub const fn from_secs(seconds: u64) -> Self {
        Self { seconds, nanos: 0 }
    }

    /// Read the system clock.
    ///
    /// A system clock set before the epoch reads as the epoch.
    #[must_use]
    pub fn now() -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Self {
            seconds: duration.as_secs(),
            nanos: duration.subsec_nanos(),
        }
    }

    /// Add a duration, saturating at the largest representable second
    #[must_use]
    pub const fn saturating_add(&self, duration: &Duration) -> Self {
        let mut seconds = self.seconds.saturating_add(duration.seconds);
        let mut nanos = self.nanos + duration.nanos;

        if nanos >= Self::NANOS_PER_SEC {
            seconds = seconds.saturating_add(1);
            nanos -= Self::NANOS_PER_SEC;
        }

        Self { seconds, nanos }
    }

    /// Convert to a calendar date, if it fits chrono's range
    #[must_use]
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        let seconds = i64::try_from(self.seconds).ok()?;
        DateTime::from_timestamp(seconds, self.nanos)
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_datetime() {
            Some(dt) => write!(f, "{}", dt.to_rfc3339()),
            None => write!(f, "{}.{:09}", self.seconds, self.nanos),
        }
    }
}

/// A span of wall clock time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Duration {
    pub seconds: u64,
    pub nanos: u32,
}

impl Duration {
    /// Create a new duration
    #[must_use]
    pub const fn new(seconds: u64, nanos: u32) -> Self {
        Self { seconds, nanos }
    }

    /// Zero duration
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            seconds: 0,
            nanos: 0,
        }
    }

    /// Duration from seconds
    #[must_use]
    pub const fn from_secs(seconds: u64) -> Self {
        Self { seconds, nanos: 0 }
    }

    /// Duration from whole hours
    #[must_use]
    pub const fn from_hours(hours: u64) -> Self {
        Self::from_secs(hours.saturating_mul(SECONDS_PER_HOUR))
    }

    /// Get total seconds
    #[must_use]
    pub const fn as_secs(&self) -> u64 {
        self.seconds
    }
}

impl Default for Duration {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::fmt::Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.nanos == 0 {
            write!(f, "{}s", self.seconds)
        } else {
            write!(f, "{}.{:09}s", self.seconds, self.nanos)
        }
    }
}

/// Certificate expiration, in whole hours since the Unix epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpirationHours(u64);

impl ExpirationHours {
    /// Create from a raw hour count
    #[must_use]
    pub const fn from_hours(hours: u64) -> Self {
        Self(hours)
    }

    /// Hour containing the given instant (floor)
    #[must_use]
    pub const fn from_timestamp(timestamp: Timestamp) -> Self {
        Self(timestamp.seconds / SECONDS_PER_HOUR)
    }

    /// Expiration a given duration after `now`, truncated to the hour
    #[must_use]
    pub const fn after(now: Timestamp, validity: Duration) -> Self {
        Self::from_timestamp(now.saturating_add(&validity))
    }

    /// Get the raw hour count
    #[must_use]
    pub const fn as_hours(&self) -> u64 {
        self.0
    }

    /// The instant at which this expiration takes effect.
    ///
    /// Saturates for hour counts beyond the `u64` second range.
    #[must_use]
    pub const fn to_timestamp(&self) -> Timestamp {
        Timestamp::from_secs(self.0.saturating_mul(SECONDS_PER_HOUR))
    }

    /// Whether the expiry instant lies strictly before `now`
    #[must_use]
    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        self.to_timestamp() < now
    }
}

impl From<u64> for ExpirationHours {
    fn from(hours: u64) -> Self {
        Self(hours)
    }
}

impl std::fmt::Display for ExpirationHours {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}h ({})", self.0, self.to_timestamp())
    }
}

/// Source of the current time
pub trait Clock {
    /// The current instant
    fn now(&self) -> Timestamp;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

/// Clock backed by the operating system
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// Clock frozen at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(Timestamp);

impl FixedClock {
    /// Create a clock that always reads `now`
    #[must_use]
    pub const fn new(now: Timestamp) -> Self {
        Self(now)
    }

    /// Create a clock frozen on a whole second since the epoch
    #[must_use]
    pub const fn at_secs(seconds: u64) -> Self {
        Self(Timestamp::from_secs(seconds))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}
