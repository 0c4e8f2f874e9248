//! Deterministic CBOR encoding of certificates.
//!
//! A certificate is a definite-length map of six entries and each signature a
//! definite-length map of two. Keys are emitted sorted bytewise by name, no
//! matter which order the fields are listed in here, so the output does not
//! depend on the serializer's own ordering. Integers use the shortest CBOR
//! form, text fields are text strings and opaque fields are byte strings.

use crate::certificate::{Certificate, CertificateError, CertificateResult};
use crate::signature::{KeyAlgorithm, Signature};
use serde::de::{Error as DeError, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sigcert_core::{ExpirationHours, FormatVersion};
use std::fmt;

/// Map key names used on the wire
pub mod keys {
    /// Algorithm name
    pub const CERT_KEY_TYPE: &str = "CertKeyType";
    /// Certified payload
    pub const CERTIFIED: &str = "Certified";
    /// Expiration hours
    pub const EXPIRATION: &str = "Expiration";
    /// Signature list
    pub const SIGNATURES: &str = "Signatures";
    /// Certificate type tag
    pub const TYPE: &str = "Type";
    /// Format version
    pub const VERSION: &str = "Version";
    /// Signer public key
    pub const IDENTITY: &str = "Identity";
    /// Signature bytes
    pub const PAYLOAD: &str = "Payload";

    /// Certificate keys in wire order
    pub const CERTIFICATE: &[&str] = &[CERT_KEY_TYPE, CERTIFIED, EXPIRATION, SIGNATURES, TYPE, VERSION];
    /// Signature keys in wire order
    pub const SIGNATURE: &[&str] = &[IDENTITY, PAYLOAD];
}

/// Encode a certificate to its wire form
///
/// # Errors
///
/// Returns error if serialization fails
pub fn encode(certificate: &Certificate) -> CertificateResult<Vec<u8>> {
    serde_cbor::to_vec(certificate).map_err(|e| CertificateError::Encoding(e.to_string()))
}

/// Decode and validate a certificate from its wire form
///
/// # Errors
///
/// Returns [`CertificateError::Malformed`] for structural problems and
/// [`CertificateError::UnsupportedVersion`] or
/// [`CertificateError::UnsupportedAlgorithm`] for constants this
/// implementation does not understand
pub fn decode(bytes: &[u8]) -> CertificateResult<Certificate> {
    let raw: RawCertificate =
        serde_cbor::from_slice(bytes).map_err(|e| CertificateError::Malformed(e.to_string()))?;
    raw.validate()
}

enum Field<'a> {
    Uint(u64),
    Text(&'a str),
    Bytes(&'a [u8]),
    Signatures(&'a [Signature]),
}

impl Serialize for Field<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Uint(v) => serializer.serialize_u64(*v),
            Self::Text(v) => serializer.serialize_str(v),
            Self::Bytes(v) => serializer.serialize_bytes(v),
            Self::Signatures(v) => serializer.collect_seq(v.iter()),
        }
    }
}

fn serialize_sorted<S: Serializer, const N: usize>(
    serializer: S,
    mut entries: [(&'static str, Field<'_>); N],
) -> Result<S::Ok, S::Error> {
    entries.sort_unstable_by(|(a, _), (b, _)| a.as_bytes().cmp(b.as_bytes()));
    let mut map = serializer.serialize_map(Some(N))?;
    for (key, value) in &entries {
        map.serialize_entry(key, value)?;
    }
    map.end()
}

impl Serialize for Certificate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_sorted(
            serializer,
            [
                (keys::VERSION, Field::Uint(u64::from(self.version.as_u32()))),
                (keys::TYPE, Field::Text(&self.cert_type)),
                (keys::EXPIRATION, Field::Uint(self.expiration.as_hours())),
                (keys::CERT_KEY_TYPE, Field::Text(self.key_algorithm.name())),
                (keys::CERTIFIED, Field::Bytes(&self.certified)),
                (keys::SIGNATURES, Field::Signatures(&self.signatures)),
            ],
        )
    }
}

impl Serialize for Signature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_sorted(
            serializer,
            [
                (keys::IDENTITY, Field::Bytes(&self.identity)),
                (keys::PAYLOAD, Field::Bytes(&self.payload)),
            ],
        )
    }
}

/// CBOR text string, rejecting byte strings
struct Text(String);

struct TextVisitor;

impl<'de> Visitor<'de> for TextVisitor {
    type Value = Text;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a text string")
    }

    fn visit_str<E: DeError>(self, v: &str) -> Result<Text, E> {
        Ok(Text(v.to_owned()))
    }

    fn visit_string<E: DeError>(self, v: String) -> Result<Text, E> {
        Ok(Text(v))
    }
}

impl<'de> Deserialize<'de> for Text {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_string(TextVisitor)
    }
}

/// CBOR byte string, rejecting arrays of integers
struct ByteString(Vec<u8>);

struct ByteStringVisitor;

impl<'de> Visitor<'de> for ByteStringVisitor {
    type Value = ByteString;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a byte string")
    }

    fn visit_bytes<E: DeError>(self, v: &[u8]) -> Result<ByteString, E> {
        Ok(ByteString(v.to_vec()))
    }

    fn visit_byte_buf<E: DeError>(self, v: Vec<u8>) -> Result<ByteString, E> {
        Ok(ByteString(v))
    }
}

impl<'de> Deserialize<'de> for ByteString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_byte_buf(ByteStringVisitor)
    }
}

fn fill<T, E: DeError>(slot: &mut Option<T>, value: T, field: &'static str) -> Result<(), E> {
    if slot.replace(value).is_some() {
        return Err(E::duplicate_field(field));
    }
    Ok(())
}

struct SignatureVisitor;

impl<'de> Visitor<'de> for SignatureVisitor {
    type Value = Signature;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a signature map")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Signature, A::Error> {
        let mut identity: Option<ByteString> = None;
        let mut payload: Option<ByteString> = None;

        while let Some(Text(key)) = map.next_key::<Text>()? {
            let filled: Result<(), A::Error> = match key.as_str() {
                keys::IDENTITY => fill(&mut identity, map.next_value()?, keys::IDENTITY),
                keys::PAYLOAD => fill(&mut payload, map.next_value()?, keys::PAYLOAD),
                other => Err(A::Error::unknown_field(other, keys::SIGNATURE)),
            };
            filled?;
        }

        Ok(Signature {
            identity: identity
                .ok_or_else(|| A::Error::missing_field(keys::IDENTITY))?
                .0,
            payload: payload
                .ok_or_else(|| A::Error::missing_field(keys::PAYLOAD))?
                .0,
        })
    }
}

impl<'de> Deserialize<'de> for Signature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SignatureVisitor)
    }
}

/// Certificate fields as decoded, before version and algorithm checks
struct RawCertificate {
    cert_key_type: String,
    certified: Vec<u8>,
    expiration: u64,
    signatures: Vec<Signature>,
    cert_type: String,
    version: u32,
}

impl RawCertificate {
    fn validate(self) -> CertificateResult<Certificate> {
        let version = FormatVersion::check(self.version)
            .map_err(|_| CertificateError::UnsupportedVersion(self.version))?;
        let key_algorithm = KeyAlgorithm::from_name(&self.cert_key_type)?;
        Ok(Certificate {
            version,
            cert_type: self.cert_type,
            expiration: ExpirationHours::from_hours(self.expiration),
            key_algorithm,
            certified: self.certified,
            signatures: self.signatures,
        })
    }
}

struct CertificateVisitor;

impl<'de> Visitor<'de> for CertificateVisitor {
    type Value = RawCertificate;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a certificate map")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RawCertificate, A::Error> {
        let mut cert_key_type: Option<Text> = None;
        let mut certified: Option<ByteString> = None;
        let mut expiration: Option<u64> = None;
        let mut signatures: Option<Vec<Signature>> = None;
        let mut cert_type: Option<Text> = None;
        let mut version: Option<u32> = None;

        while let Some(Text(key)) = map.next_key::<Text>()? {
            let filled: Result<(), A::Error> = match key.as_str() {
                keys::CERT_KEY_TYPE => {
                    fill(&mut cert_key_type, map.next_value()?, keys::CERT_KEY_TYPE)
                }
                keys::CERTIFIED => fill(&mut certified, map.next_value()?, keys::CERTIFIED),
                keys::EXPIRATION => fill(&mut expiration, map.next_value()?, keys::EXPIRATION),
                keys::SIGNATURES => fill(&mut signatures, map.next_value()?, keys::SIGNATURES),
                keys::TYPE => fill(&mut cert_type, map.next_value()?, keys::TYPE),
                keys::VERSION => fill(&mut version, map.next_value()?, keys::VERSION),
                other => Err(A::Error::unknown_field(other, keys::CERTIFICATE)),
            };
            filled?;
        }

        Ok(RawCertificate {
            cert_key_type: cert_key_type
                .ok_or_else(|| A::Error::missing_field(keys::CERT_KEY_TYPE))?
                .0,
            certified: certified
                .ok_or_else(|| A::Error::missing_field(keys::CERTIFIED))?
                .0,
            expiration: expiration.ok_or_else(|| A::Error::missing_field(keys::EXPIRATION))?,
            signatures: signatures.ok_or_else(|| A::Error::missing_field(keys::SIGNATURES))?,
            cert_type: cert_type
                .ok_or_else(|| A::Error::missing_field(keys::TYPE))?
                .0,
            version: version.ok_or_else(|| A::Error::missing_field(keys::VERSION))?,
        })
    }
}

impl<'de> Deserialize<'de> for RawCertificate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CertificateVisitor)
    }
}
