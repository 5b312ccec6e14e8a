//! Encoder capabilities
//!
//! [`CryptEncoder`] is the base capability every scheme provides.
//! [`CryptSaltedEncoder`] extends it for the `s`-prefixed schemes; unsalted
//! encoder types do not implement it and so cannot report a salt.

pub mod salted;
pub mod unsalted;

pub use salted::{SaltedEncoder, Ssha1Encoder, Ssha256Encoder, Ssha384Encoder, Ssha512Encoder};
pub use unsalted::{Sha1Encoder, Sha256Encoder, Sha384Encoder, Sha512Encoder, UnsaltedEncoder};

use crate::encoded::Digest;
use crate::kind::EncoderKind;
use std::fmt;

/// Password-digest encoder
///
/// `Display` writes the canonical name, the same string the encoder was
/// selected by.
pub trait CryptEncoder: fmt::Display + fmt::Debug + Send + Sync {
    /// Hash `secret`, mixed with the instance salt for salted schemes
    ///
    /// `extra` is reserved and never changes the result.
    fn encode(&self, secret: &[u8], extra: Option<&[u8]>) -> Digest;

    /// Scheme implemented by this encoder
    fn kind(&self) -> EncoderKind;

    /// Canonical registration name
    fn name(&self) -> &'static str {
        self.kind().as_str()
    }

    /// Salted view of this encoder, if it has one
    fn as_salted(&self) -> Option<&dyn CryptSaltedEncoder> {
        None
    }

    /// Check `secret` against a stored raw digest in constant time
    fn verify(&self, secret: &[u8], stored: &[u8]) -> bool {
        self.encode(secret, None).ct_eq(stored)
    }
}

/// Encoder whose digests depend on a construction-time salt
pub trait CryptSaltedEncoder: CryptEncoder {
    /// The salt exactly as supplied at construction
    fn salt(&self) -> &str;
}
