//! Salted encoders: `ssha1`, `ssha256`, `ssha384`, `ssha512`
//!
//! The hash input is the secret followed by the salt. Stored credentials
//! depend on this order.

use super::{CryptEncoder, CryptSaltedEncoder};
use crate::algorithms::{
    HashFamily, Sha1Family, Sha256Family, Sha384Family, Sha512Family, hash_parts,
};
use crate::encoded::Digest;
use crate::kind::EncoderKind;
use std::fmt;
use std::marker::PhantomData;

/// Digest of `secret || salt`
#[derive(Clone, Debug)]
pub struct SaltedEncoder<F: HashFamily> {
    salt: String,
    _family: PhantomData<F>,
}

/// `ssha1`
pub type Ssha1Encoder = SaltedEncoder<Sha1Family>;
/// `ssha256`
pub type Ssha256Encoder = SaltedEncoder<Sha256Family>;
/// `ssha384`
pub type Ssha384Encoder = SaltedEncoder<Sha384Family>;
/// `ssha512`
pub type Ssha512Encoder = SaltedEncoder<Sha512Family>;

impl<F: HashFamily> SaltedEncoder<F> {
    /// Create a salted encoder owning `salt`
    ///
    /// The empty salt is accepted and yields the plain digest of the secret.
    #[must_use]
    pub fn new(salt: impl Into<String>) -> Self {
        let salt = salt.into();
        tracing::debug!(
            kind = %F::SALTED,
            salt_len = salt.len(),
            "constructed salted encoder"
        );
        Self {
            salt,
            _family: PhantomData,
        }
    }
}

impl<F: HashFamily> CryptEncoder for SaltedEncoder<F> {
    fn encode(&self, secret: &[u8], _extra: Option<&[u8]>) -> Digest {
        hash_parts::<F>(&[secret, self.salt.as_bytes()])
    }

    fn kind(&self) -> EncoderKind {
        F::SALTED
    }

    fn as_salted(&self) -> Option<&dyn CryptSaltedEncoder> {
        Some(self)
    }
}

impl<F: HashFamily> CryptSaltedEncoder for SaltedEncoder<F> {
    fn salt(&self) -> &str {
        &self.salt
    }
}

impl<F: HashFamily> fmt::Display for SaltedEncoder<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(F::SALTED.as_str())
    }
}
