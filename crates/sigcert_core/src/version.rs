//! Certificate format version.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Version of the certificate wire format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormatVersion(u32);

impl FormatVersion {
    /// The only format version this implementation reads and writes
    pub const CURRENT: Self = Self(0);

    /// Create from a raw version number
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Accept a decoded version number only if it is supported
    ///
    /// # Errors
    ///
    /// Returns error if `raw` is not [`FormatVersion::CURRENT`]
    pub fn check(raw: u32) -> Result<Self, VersionError> {
        let version = Self(raw);
        if version.is_supported() {
            Ok(version)
        } else {
            Err(VersionError::Unsupported(raw))
        }
    }

    /// Get the raw version number
    #[must_use]
    pub const fn as_u32(&self) -> u32 {
        self.0
    }

    /// Little-endian bytes, as they appear in signed messages
    #[must_use]
    pub const fn to_le_bytes(&self) -> [u8; 4] {
        self.0.to_le_bytes()
    }

    /// Whether this implementation understands the version
    #[must_use]
    pub const fn is_supported(&self) -> bool {
        self.0 == Self::CURRENT.0
    }
}

impl Default for FormatVersion {
    fn default() -> Self {
        Self::CURRENT
    }
}

impl fmt::Display for FormatVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Version-related errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// Version number not understood by this implementation
    Unsupported(u32),
}

impl fmt::Display for VersionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported(v) => write!(f, "Unsupported certificate version: {}", v),
        }
    }
}

impl std::error::Error for VersionError {}
