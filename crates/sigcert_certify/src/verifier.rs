//! Certificate verification.
//!
//! Structural problems (undecodable input, wrong signature count, expiry) are
//! errors and are reported before any signature is checked. Whether a
//! signature is valid is an ordinary [`Verification`] outcome.

use crate::certificate::{Certificate, CertificateError, CertificateResult};
use crate::signature::PublicKeyBytes;
use serde::Serialize;
use sigcert_core::{Clock, SystemClock};
use std::fmt;
use tracing::{debug, warn};

/// Outcome of checking a well-formed, unexpired certificate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verification {
    /// The signature checks out against the key
    Valid,
    /// A signature was checked and did not match
    InvalidSignature,
    /// No signature from the key is present
    IdentityNotFound,
}

impl Verification {
    /// Whether the certificate is endorsed by the key
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    const fn from_check(valid: bool) -> Self {
        if valid {
            Self::Valid
        } else {
            Self::InvalidSignature
        }
    }
}

impl fmt::Display for Verification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid => write!(f, "valid"),
            Self::InvalidSignature => write!(f, "invalid signature"),
            Self::IdentityNotFound => write!(f, "identity not found"),
        }
    }
}

/// Verifies certificates against a clock
#[derive(Debug, Clone, Default)]
pub struct CertificateVerifier<C = SystemClock> {
    clock: C,
}

impl<C: Clock> CertificateVerifier<C> {
    /// Create a verifier reading "now" from `clock`
    #[must_use]
    pub const fn new(clock: C) -> Self {
        Self { clock }
    }

    /// The clock this verifier checks expiration against
    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Verify a certificate carrying exactly one signature.
    ///
    /// Only the caller's key is consulted; the signature's recorded identity
    /// is ignored.
    ///
    /// # Errors
    ///
    /// Returns error if the certificate is malformed or unsupported, does not
    /// carry exactly one signature, has expired, or `public_key` is unusable
    pub fn verify(&self, raw: &[u8], public_key: &PublicKeyBytes) -> CertificateResult<Verification> {
        let certificate = Certificate::from_bytes(raw)?;
        if certificate.signatures.len() != 1 {
            warn!(found = certificate.signatures.len(), "strict verification needs one signature");
            return Err(CertificateError::SignatureCountMismatch {
                found: certificate.signatures.len(),
            });
        }
        let message = certificate.message();
        self.check_expiration(&certificate)?;

        let signature = &certificate.signatures[0];
        let valid = certificate
            .key_algorithm
            .verify(public_key, &message, &signature.payload)?;
        let outcome = Verification::from_check(valid);
        debug!(key = %public_key, %outcome, "verified certificate");
        Ok(outcome)
    }

    /// Verify the signature made by `public_key`, ignoring any others.
    ///
    /// A certificate without a signature from `public_key` yields
    /// [`Verification::IdentityNotFound`].
    ///
    /// # Errors
    ///
    /// Returns error if the certificate is malformed or unsupported, has
    /// expired, or `public_key` is unusable
    pub fn verify_multi(&self, raw: &[u8], public_key: &PublicKeyBytes) -> CertificateResult<Verification> {
        let certificate = Certificate::from_bytes(raw)?;
        self.check_expiration(&certificate)?;

        let Some(signature) = certificate.signature_by(public_key) else {
            debug!(key = %public_key, signatures = certificate.signatures.len(), "signer not present");
            return Ok(Verification::IdentityNotFound);
        };
        let valid = certificate
            .key_algorithm
            .verify(public_key, &certificate.message(), &signature.payload)?;
        let outcome = Verification::from_check(valid);
        debug!(key = %public_key, %outcome, "verified certificate signer");
        Ok(outcome)
    }

    /// Fail if the certificate's expiry instant is before the clock's now
    ///
    /// # Errors
    ///
    /// Returns [`CertificateError::Expired`] when expired
    pub fn check_expiration(&self, certificate: &Certificate) -> CertificateResult<()> {
        let now = self.clock.now();
        if certificate.is_expired_at(now) {
            let expired_at = certificate.expiration.to_timestamp();
            warn!(%expired_at, %now, "certificate expired");
            return Err(CertificateError::Expired { expired_at, now });
        }
        Ok(())
    }
}

/// Strict verification against the system clock.
///
/// See [`CertificateVerifier::verify`].
///
/// # Errors
///
/// Returns error as [`CertificateVerifier::verify`] does
pub fn verify_certificate(raw: &[u8], public_key: &PublicKeyBytes) -> CertificateResult<Verification> {
    CertificateVerifier::new(SystemClock).verify(raw, public_key)
}

/// By-identity verification against the system clock.
///
/// See [`CertificateVerifier::verify_multi`].
///
/// # Errors
///
/// Returns error as [`CertificateVerifier::verify_multi`] does
pub fn verify_multi(raw: &[u8], public_key: &PublicKeyBytes) -> CertificateResult<Verification> {
    CertificateVerifier::new(SystemClock).verify_multi(raw, public_key)
}
