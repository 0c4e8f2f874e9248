//! Certificate data model.

use crate::codec;
use crate::message::canonical_message;
use crate::signature::{KeyAlgorithm, PublicKeyBytes, Signature, SignatureError, Signer};
use serde::Serialize;
use sigcert_core::{ExpirationHours, FormatVersion, Timestamp};

/// Result type for certificate operations
pub type CertificateResult<T> = Result<T, CertificateError>;

/// A payload bound to a type and an expiration, endorsed by one or more signers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certificate {
    /// Wire format version
    pub version: FormatVersion,
    /// Caller-defined purpose tag, e.g. `"authority"`
    pub cert_type: String,
    /// Hours since the Unix epoch after which the certificate is expired
    pub expiration: ExpirationHours,
    /// Algorithm every signature uses
    pub key_algorithm: KeyAlgorithm,
    /// Data being vouched for, typically a public key
    pub certified: Vec<u8>,
    /// Signatures in the order they were appended
    pub signatures: Vec<Signature>,
}

impl Certificate {
    /// Create an unsigned certificate at the current format version
    #[must_use]
    pub fn new(
        cert_type: impl Into<String>,
        expiration: ExpirationHours,
        key_algorithm: KeyAlgorithm,
        certified: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            version: FormatVersion::CURRENT,
            cert_type: cert_type.into(),
            expiration,
            key_algorithm,
            certified: certified.into(),
            signatures: Vec::new(),
        }
    }

    /// The bytes every signature covers
    #[must_use]
    pub fn message(&self) -> Vec<u8> {
        canonical_message(
            self.version,
            &self.cert_type,
            self.expiration,
            self.key_algorithm,
            &self.certified,
        )
    }

    /// Sign the canonical message and append the signature
    ///
    /// # Errors
    ///
    /// Returns error if the signer uses a different algorithm than the certificate
    pub fn sign_with(&mut self, signer: &Signer) -> CertificateResult<&Signature> {
        if signer.algorithm() != self.key_algorithm {
            return Err(CertificateError::UnsupportedAlgorithm(
                signer.algorithm().name().to_string(),
            ));
        }
        let index = self.signatures.len();
        self.signatures.push(signer.sign(&self.message()));
        Ok(&self.signatures[index])
    }

    /// First signature made by `public_key`, if any
    #[must_use]
    pub fn signature_by(&self, public_key: &PublicKeyBytes) -> Option<&Signature> {
        self.signatures.iter().find(|sig| sig.is_from(public_key))
    }

    /// Signer identities in append order, duplicates included
    pub fn identities(&self) -> impl Iterator<Item = &[u8]> {
        self.signatures.iter().map(|sig| sig.identity.as_slice())
    }

    /// Whether the expiry instant lies strictly before `now`
    #[must_use]
    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        self.expiration.is_expired_at(now)
    }

    /// Serialize to the deterministic wire encoding
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails
    pub fn to_bytes(&self) -> CertificateResult<Vec<u8>> {
        codec::encode(self)
    }

    /// Parse and validate a serialized certificate
    ///
    /// # Errors
    ///
    /// Returns error if the bytes are malformed or declare an unsupported
    /// version or algorithm
    pub fn from_bytes(bytes: &[u8]) -> CertificateResult<Self> {
        codec::decode(bytes)
    }

    /// Fingerprint of the endorsed content, shared by every co-signed copy
    #[must_use]
    pub fn content_fingerprint(&self) -> String {
        format!("blake3:{}", blake3::hash(&self.message()).to_hex())
    }

    /// Human-readable view of the certificate
    #[must_use]
    pub fn summary(&self) -> CertificateSummary {
        CertificateSummary {
            version: self.version.as_u32(),
            cert_type: self.cert_type.clone(),
            expiration_hours: self.expiration.as_hours(),
            expires_at: self.expiration.to_timestamp().to_string(),
            key_algorithm: self.key_algorithm.name().to_string(),
            certified: hex::encode(&self.certified),
            signers: self.identities().map(hex::encode).collect(),
            content_fingerprint: self.content_fingerprint(),
        }
    }
}

/// Printable description of a certificate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CertificateSummary {
    /// Format version
    pub version: u32,
    /// Certificate type tag
    pub cert_type: String,
    /// Raw expiration hours
    pub expiration_hours: u64,
    /// Expiry instant, RFC 3339 when representable
    pub expires_at: String,
    /// Algorithm name
    pub key_algorithm: String,
    /// Certified payload, hex
    pub certified: String,
    /// Signer identities in append order, hex
    pub signers: Vec<String>,
    /// BLAKE3 hash of the canonical message
    pub content_fingerprint: String,
}

/// Certificate-related errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CertificateError {
    /// Bytes do not decode as a certificate
    #[error("malformed certificate: {0}")]
    Malformed(String),
    /// Version this implementation does not read
    #[error("unsupported certificate version: {0}")]
    UnsupportedVersion(u32),
    /// Algorithm this implementation does not implement
    #[error("unsupported key algorithm: {0:?}")]
    UnsupportedAlgorithm(String),
    /// Strict verification requires exactly one signature
    #[error("expected exactly one signature, found {found}")]
    SignatureCountMismatch { found: usize },
    /// Expiry instant has passed
    #[error("certificate expired at {expired_at} (now {now})")]
    Expired { expired_at: Timestamp, now: Timestamp },
    /// Caller-supplied key material is unusable
    #[error("invalid key: {0}")]
    InvalidKey(SignatureError),
    /// Serializer failure
    #[error("encoding error: {0}")]
    Encoding(String),
}

impl From<SignatureError> for CertificateError {
    fn from(err: SignatureError) -> Self {
        match err {
            SignatureError::UnsupportedAlgorithm(name) => Self::UnsupportedAlgorithm(name),
            other => Self::InvalidKey(other),
        }
    }
}
