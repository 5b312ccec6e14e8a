//! Canonical encoder names and digest families

use crate::error::{EncoderError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Digest family backing an encoder
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// SHA-1, 20 byte digest
    Sha1,
    /// SHA-256, 32 byte digest
    Sha256,
    /// SHA-384, 48 byte digest
    Sha384,
    /// SHA-512, 64 byte digest
    Sha512,
}

impl Algorithm {
    /// Natural output size of the hash function in bytes
    #[must_use]
    pub const fn digest_len(self) -> usize {
        match self {
            Self::Sha1 => 20,
            Self::Sha256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }
}

/// One of the eight supported password-digest schemes
///
/// The lowercase name of each variant is its registration name and is what
/// [`EncoderKind::as_str`] and `Display` report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncoderKind {
    /// Unsalted SHA-1
    Sha1,
    /// Salted SHA-1
    Ssha1,
    /// Unsalted SHA-256
    Sha256,
    /// Salted SHA-256
    Ssha256,
    /// Unsalted SHA-384
    Sha384,
    /// Salted SHA-384
    Ssha384,
    /// Unsalted SHA-512
    Sha512,
    /// Salted SHA-512
    Ssha512,
}

impl EncoderKind {
    /// Every supported kind, in registry order
    pub const ALL: [Self; 8] = [
        Self::Sha1,
        Self::Ssha1,
        Self::Sha256,
        Self::Ssha256,
        Self::Sha384,
        Self::Ssha384,
        Self::Sha512,
        Self::Ssha512,
    ];

    /// Canonical registration name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sha1 => "sha1",
            Self::Ssha1 => "ssha1",
            Self::Sha256 => "sha256",
            Self::Ssha256 => "ssha256",
            Self::Sha384 => "sha384",
            Self::Ssha384 => "ssha384",
            Self::Sha512 => "sha512",
            Self::Ssha512 => "ssha512",
        }
    }

    /// Digest family used by this kind
    #[must_use]
    pub const fn algorithm(self) -> Algorithm {
        match self {
            Self::Sha1 | Self::Ssha1 => Algorithm::Sha1,
            Self::Sha256 | Self::Ssha256 => Algorithm::Sha256,
            Self::Sha384 | Self::Ssha384 => Algorithm::Sha384,
            Self::Sha512 | Self::Ssha512 => Algorithm::Sha512,
        }
    }

    /// Whether encoders of this kind carry a salt
    #[must_use]
    pub const fn is_salted(self) -> bool {
        matches!(
            self,
            Self::Ssha1 | Self::Ssha256 | Self::Ssha384 | Self::Ssha512
        )
    }

    /// Digest length in bytes, identical for the salted and unsalted form
    #[must_use]
    pub const fn digest_len(self) -> usize {
        self.algorithm().digest_len()
    }
}

impl FromStr for EncoderKind {
    type Err = EncoderError;

    /// Exact, case-sensitive lookup against the canonical names
    fn from_str(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| EncoderError::unknown_kind(name))
    }
}

impl fmt::Display for EncoderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for kind in EncoderKind::ALL {
            let parsed: EncoderKind = kind.as_str().parse().expect("canonical name should parse");
            assert_eq!(parsed, kind);
            assert_eq!(parsed.to_string(), kind.as_str());
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        for name in ["SHA1", "Ssha256", " sha1", "sha1 ", "md5", ""] {
            let err = name.parse::<EncoderKind>().expect_err("lookup should fail");
            assert!(matches!(err, EncoderError::UnknownEncoderKind(ref n) if n == name));
        }
    }

    #[test]
    fn test_salted_kinds_share_family_with_unsalted() {
        assert_eq!(EncoderKind::Sha1.algorithm(), EncoderKind::Ssha1.algorithm());
        assert_eq!(EncoderKind::Sha512.digest_len(), EncoderKind::Ssha512.digest_len());
        assert_eq!(
            EncoderKind::ALL.iter().filter(|k| k.is_salted()).count(),
            4
        );
    }

    #[test]
    fn test_serde_uses_canonical_names() {
        let json = serde_json::to_string(&EncoderKind::Ssha384).expect("serialize");
        assert_eq!(json, "\"ssha384\"");
        let kind: EncoderKind = serde_json::from_str("\"sha256\"").expect("deserialize");
        assert_eq!(kind, EncoderKind::Sha256);
    }
}
