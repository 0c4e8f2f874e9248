//! Co-signing of existing certificates.

use crate::certificate::{Certificate, CertificateResult};
use crate::signature::Signer;
use tracing::debug;

/// Append a signature by `signer` to a serialized certificate.
///
/// Existing signatures are kept in order. The expiration is not checked and
/// signing twice with the same key adds a second, identical entry.
///
/// # Errors
///
/// Returns error if `raw` does not decode as a supported certificate
pub fn sign_multi_certificate(signer: &Signer, raw: &[u8]) -> CertificateResult<Vec<u8>> {
    let mut certificate = Certificate::from_bytes(raw)?;
    certificate.sign_with(signer)?;
    let bytes = certificate.to_bytes()?;

    debug!(
        signer = %signer.public_key(),
        signatures = certificate.signatures.len(),
        "co-signed certificate"
    );
    Ok(bytes)
}
