//! Signed certificates for SIGCERT.
//!
//! A certificate binds an opaque payload, usually a public key, to a type tag
//! and an expiration. It is serialized to a deterministic CBOR blob and can be
//! endorsed by any number of signers, each appending an Ed25519 signature over
//! the same canonical message.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod certificate;
pub mod codec;
pub mod cosign;
pub mod issuer;
pub mod message;
pub mod signature;
pub mod verifier;

#[cfg(test)]
mod test_vectors;

pub use certificate::{Certificate, CertificateError, CertificateResult, CertificateSummary};
pub use cosign::sign_multi_certificate;
pub use issuer::create_certificate;
pub use message::canonical_message;
pub use signature::{KeyAlgorithm, PublicKeyBytes, Signature, SignatureError, Signer, Verifier};
pub use verifier::{verify_certificate, verify_multi, CertificateVerifier, Verification};
