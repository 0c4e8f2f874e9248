//! Implementations of the CLI subcommands, independent of argument parsing.

use color_eyre::eyre::{eyre, Result, WrapErr};
use sigcert_certify::{
    create_certificate, sign_multi_certificate, Certificate, CertificateSummary,
    CertificateVerifier, PublicKeyBytes, Signer, Verification,
};
use sigcert_core::{Clock, ExpirationHours};
use std::path::Path;
use tracing::info;
use zeroize::Zeroizing;

/// Parse a hex signing key, either a 32-byte seed or a 64-byte keypair
///
/// # Errors
///
/// Returns error if the key is not hex or has the wrong length
pub fn parse_signer(hex_key: &str) -> Result<Signer> {
    let material = Zeroizing::new(
        hex::decode(hex_key.trim()).map_err(|_| eyre!("signing key is not valid hex"))?,
    );
    Signer::from_key_material(&material).wrap_err("unusable signing key")
}

/// Parse a hex Ed25519 public key
///
/// # Errors
///
/// Returns error if the key is not 32 bytes of hex
pub fn parse_public_key(hex_key: &str) -> Result<PublicKeyBytes> {
    PublicKeyBytes::from_hex(hex_key.trim()).wrap_err("unusable public key")
}

fn read_certificate(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).wrap_err_with(|| format!("reading certificate {}", path.display()))
}

fn write_certificate(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes).wrap_err_with(|| format!("writing certificate {}", path.display()))
}

/// Issue a certificate over `payload_hex` and write it to `out`
///
/// # Errors
///
/// Returns error on bad input or I/O failure
pub fn create(
    signer: &Signer,
    payload_hex: &str,
    cert_type: &str,
    expiration: ExpirationHours,
    out: &Path,
) -> Result<Vec<u8>> {
    let payload = hex::decode(payload_hex.trim()).map_err(|_| eyre!("payload is not valid hex"))?;
    let bytes = create_certificate(signer, &payload, cert_type, expiration)?;
    write_certificate(out, &bytes)?;
    info!(path = %out.display(), %expiration, "wrote certificate");
    Ok(bytes)
}

/// Append a signature to the certificate at `cert` and write the result to `out`
///
/// # Errors
///
/// Returns error if the certificate cannot be read, decoded or written
pub fn cosign(signer: &Signer, cert: &Path, out: &Path) -> Result<Vec<u8>> {
    let raw = read_certificate(cert)?;
    let bytes = sign_multi_certificate(signer, &raw)
        .wrap_err_with(|| format!("co-signing {}", cert.display()))?;
    write_certificate(out, &bytes)?;
    info!(path = %out.display(), signer = %signer.public_key(), "wrote co-signed certificate");
    Ok(bytes)
}

/// Verify the certificate at `cert` against `public_key`
///
/// # Errors
///
/// Returns error if the certificate cannot be read, is malformed or
/// unsupported, has expired, or fails the signature count check
pub fn verify<C: Clock>(
    verifier: &CertificateVerifier<C>,
    public_key: &PublicKeyBytes,
    cert: &Path,
    multi: bool,
) -> Result<Verification> {
    let raw = read_certificate(cert)?;
    let outcome = if multi {
        verifier.verify_multi(&raw, public_key)
    } else {
        verifier.verify(&raw, public_key)
    };
    outcome.wrap_err_with(|| format!("verifying {}", cert.display()))
}

/// Decode the certificate at `cert` for display
///
/// # Errors
///
/// Returns error if the certificate cannot be read or decoded
pub fn inspect(cert: &Path) -> Result<CertificateSummary> {
    let raw = read_certificate(cert)?;
    let certificate =
        Certificate::from_bytes(&raw).wrap_err_with(|| format!("decoding {}", cert.display()))?;
    Ok(certificate.summary())
}
