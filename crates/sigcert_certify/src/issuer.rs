//! Certificate issuance.

use crate::certificate::{Certificate, CertificateResult};
use crate::signature::Signer;
use sigcert_core::ExpirationHours;
use tracing::debug;

/// Issue a certificate over `certified`, signed once by `signer`.
///
/// The expiration is not checked here; issuing an already expired
/// certificate is allowed.
///
/// # Errors
///
/// Returns error if the certificate cannot be encoded
pub fn create_certificate(
    signer: &Signer,
    certified: &[u8],
    cert_type: &str,
    expiration: ExpirationHours,
) -> CertificateResult<Vec<u8>> {
    let mut certificate = Certificate::new(cert_type, expiration, signer.algorithm(), certified);
    certificate.sign_with(signer)?;
    let bytes = certificate.to_bytes()?;

    debug!(
        cert_type,
        expiration = expiration.as_hours(),
        signer = %signer.public_key(),
        len = bytes.len(),
        "issued certificate"
    );
    Ok(bytes)
}
