//! Encoded digest type with presentation helpers

use subtle::ConstantTimeEq;

/// Raw digest produced by an encoder
///
/// Holds exactly the output of the underlying hash function. Hex and base64
/// renderings are conveniences for callers; stored credentials are compared
/// against the raw bytes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Digest {
    bytes: Vec<u8>,
}

impl Digest {
    /// Wrap raw digest bytes
    #[must_use]
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Get the raw bytes of the digest
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Convert to a Vec<u8>
    #[must_use]
    pub fn to_vec(self) -> Vec<u8> {
        self.bytes
    }

    /// Lowercase hexadecimal rendering
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// Standard base64 rendering
    #[must_use]
    pub fn to_base64(&self) -> String {
        use base64::{Engine as _, engine::general_purpose};
        general_purpose::STANDARD.encode(&self.bytes)
    }

    /// Get the length of the digest in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the digest is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Constant-time comparison against stored digest bytes
    ///
    /// A length mismatch compares unequal.
    #[must_use]
    pub fn ct_eq(&self, other: &[u8]) -> bool {
        self.bytes.as_slice().ct_eq(other).into()
    }
}

impl From<Digest> for Vec<u8> {
    fn from(digest: Digest) -> Self {
        digest.bytes
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl std::fmt::Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
