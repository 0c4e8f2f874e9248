//! Canonical signed message.
//!
//! The message is the fixed-order concatenation
//! `version (u32 LE) || type || expiration (u64 LE) || algorithm || certified`
//! with no length prefixes or separators. Signatures are never part of it.

use crate::signature::KeyAlgorithm;
use sigcert_core::{ExpirationHours, FormatVersion};

/// Build the bytes that are signed and verified for a certificate
#[must_use]
pub fn canonical_message(
    version: FormatVersion,
    cert_type: &str,
    expiration: ExpirationHours,
    key_algorithm: KeyAlgorithm,
    certified: &[u8],
) -> Vec<u8> {
    let algorithm = key_algorithm.name();
    let mut message =
        Vec::with_capacity(4 + cert_type.len() + 8 + algorithm.len() + certified.len());
    message.extend_from_slice(&version.to_le_bytes());
    message.extend_from_slice(cert_type.as_bytes());
    message.extend_from_slice(&expiration.as_hours().to_le_bytes());
    message.extend_from_slice(algorithm.as_bytes());
    message.extend_from_slice(certified);
    message
}
