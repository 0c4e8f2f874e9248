//! Key algorithms and signature production for certificates.

use ed25519_dalek::Signature as DalekSignature;
use ed25519_dalek::Signer as DalekSigner;
use ed25519_dalek::Verifier as DalekVerifier;
use ed25519_dalek::{SigningKey, VerifyingKey};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Signature algorithm a certificate is signed with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyAlgorithm {
    /// Ed25519 (RFC 8032), 32-byte public keys and 64-byte signatures
    Ed25519,
}

impl KeyAlgorithm {
    /// Every algorithm this implementation can verify
    pub const ALL: [Self; 1] = [Self::Ed25519];

    /// Name carried in the certificate and the signed message
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Ed25519 => "ed25519",
        }
    }

    /// Look up an algorithm by its wire name
    ///
    /// # Errors
    ///
    /// Returns error if the name is not implemented here
    pub fn from_name(name: &str) -> Result<Self, SignatureError> {
        Self::ALL
            .into_iter()
            .find(|alg| alg.name() == name)
            .ok_or_else(|| SignatureError::UnsupportedAlgorithm(name.to_string()))
    }

    /// Check `signature` over `message` against `public_key`.
    ///
    /// A signature of the wrong shape is reported as not valid.
    ///
    /// # Errors
    ///
    /// Returns error if `public_key` is not a usable key for this algorithm
    pub fn verify(
        &self,
        public_key: &PublicKeyBytes,
        message: &[u8],
        signature: &[u8],
    ) -> Result<bool, SignatureError> {
        match self {
            Self::Ed25519 => Ok(Verifier::new(public_key)?.verify(message, signature)),
        }
    }
}

impl Default for KeyAlgorithm {
    fn default() -> Self {
        Self::Ed25519
    }
}

impl fmt::Display for KeyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One signer's endorsement of a certificate
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature {
    /// Raw public key of the signer
    pub identity: Vec<u8>,
    /// Raw signature over the certificate's canonical message
    pub payload: Vec<u8>,
}

impl Signature {
    /// Create a new signature entry
    #[must_use]
    pub fn new(identity: Vec<u8>, payload: Vec<u8>) -> Self {
        Self { identity, payload }
    }

    /// Whether this entry was made by `public_key`
    #[must_use]
    pub fn is_from(&self, public_key: &PublicKeyBytes) -> bool {
        self.identity == public_key.as_bytes()
    }
}

/// A signer holding a caller-owned private key
pub struct Signer {
    /// The signing key
    signing_key: SigningKey,
    /// The verifying key (derived)
    verifying_key: VerifyingKey,
}

impl Signer {
    /// Wrap an existing Ed25519 signing key
    #[must_use]
    pub fn from_signing_key(signing_key: SigningKey) -> Self {
        let verifying_key = signing_key.verifying_key();
        Self {
            signing_key,
            verifying_key,
        }
    }

    /// Create a signer from a 32-byte secret seed
    ///
    /// # Errors
    ///
    /// Returns error if the secret key is not 32 bytes
    pub fn from_secret(secret: &[u8]) -> Result<Self, SignatureError> {
        let bytes: &[u8; 32] = secret
            .try_into()
            .map_err(|_| SignatureError::InvalidSecretKey)?;
        Ok(Self::from_signing_key(SigningKey::from_bytes(bytes)))
    }

    /// Create a signer from a 64-byte `seed || public key` pair
    ///
    /// # Errors
    ///
    /// Returns error if the input is not 64 bytes or the public half does not
    /// belong to the seed
    pub fn from_keypair_bytes(keypair: &[u8]) -> Result<Self, SignatureError> {
        let bytes: &[u8; 64] = keypair
            .try_into()
            .map_err(|_| SignatureError::InvalidKeypair)?;
        let signing_key =
            SigningKey::from_keypair_bytes(bytes).map_err(|_| SignatureError::InvalidKeypair)?;
        Ok(Self::from_signing_key(signing_key))
    }

    /// Create a signer from raw key material, either a seed or a keypair
    ///
    /// # Errors
    ///
    /// Returns error if the length matches neither form
    pub fn from_key_material(bytes: &[u8]) -> Result<Self, SignatureError> {
        match bytes.len() {
            32 => Self::from_secret(bytes),
            64 => Self::from_keypair_bytes(bytes),
            _ => Err(SignatureError::InvalidSecretKey),
        }
    }

    /// Algorithm this signer produces
    #[must_use]
    pub const fn algorithm(&self) -> KeyAlgorithm {
        KeyAlgorithm::Ed25519
    }

    /// Get the public key
    #[must_use]
    pub fn public_key(&self) -> PublicKeyBytes {
        PublicKeyBytes(self.verifying_key.to_bytes())
    }

    /// Sign a message, binding the signature to this signer's identity
    #[must_use]
    pub fn sign(&self, message: &[u8]) -> Signature {
        let sig = self.signing_key.sign(message);
        Signature::new(self.verifying_key.to_bytes().to_vec(), sig.to_bytes().to_vec())
    }
}

impl fmt::Debug for Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signer")
            .field("public_key", &self.public_key().to_hex())
            .finish_non_exhaustive()
    }
}

/// Public key bytes for verification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicKeyBytes(pub [u8; 32]);

impl PublicKeyBytes {
    /// Create from bytes
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Create from a slice of exactly 32 bytes
    ///
    /// # Errors
    ///
    /// Returns error if the slice has the wrong length
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SignatureError> {
        let arr: [u8; 32] = bytes
            .try_into()
            .map_err(|_| SignatureError::InvalidPublicKey)?;
        Ok(Self(arr))
    }

    /// Get the underlying bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Convert to hex string
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string
    ///
    /// # Errors
    ///
    /// Returns error if hex is invalid
    pub fn from_hex(hex: &str) -> Result<Self, SignatureError> {
        let bytes = hex::decode(hex).map_err(|_| SignatureError::InvalidHex)?;
        Self::from_slice(&bytes)
    }
}

impl fmt::Display for PublicKeyBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// A verifier that can verify signatures
pub struct Verifier {
    /// The public key for verification
    verifying_key: VerifyingKey,
}

impl Verifier {
    /// Create a verifier from a public key
    ///
    /// # Errors
    ///
    /// Returns error if public key is not a valid curve point
    pub fn new(public_key: &PublicKeyBytes) -> Result<Self, SignatureError> {
        let verifying_key = VerifyingKey::from_bytes(&public_key.0)
            .map_err(|_| SignatureError::InvalidPublicKey)?;
        Ok(Self { verifying_key })
    }

    /// Verify raw signature bytes over a message
    #[must_use]
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        match DalekSignature::from_slice(signature) {
            Ok(sig) => self.verifying_key.verify(message, &sig).is_ok(),
            Err(_) => false,
        }
    }
}

/// Signature-related errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignatureError {
    /// Invalid secret key
    #[error("invalid secret key")]
    InvalidSecretKey,
    /// Keypair bytes malformed or inconsistent
    #[error("invalid keypair")]
    InvalidKeypair,
    /// Invalid public key
    #[error("invalid public key")]
    InvalidPublicKey,
    /// Invalid hex encoding
    #[error("invalid hex encoding")]
    InvalidHex,
    /// Algorithm not implemented
    #[error("unsupported key algorithm: {0:?}")]
    UnsupportedAlgorithm(String),
}
