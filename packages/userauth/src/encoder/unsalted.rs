//! Unsalted encoders: `sha1`, `sha256`, `sha384`, `sha512`

use super::CryptEncoder;
use crate::algorithms::{
    HashFamily, Sha1Family, Sha256Family, Sha384Family, Sha512Family, hash_parts,
};
use crate::encoded::Digest;
use crate::kind::EncoderKind;
use std::fmt;
use std::marker::PhantomData;

/// Plain digest of the secret
#[derive(Clone, Copy, Debug, Default)]
pub struct UnsaltedEncoder<F: HashFamily> {
    _family: PhantomData<F>,
}

/// `sha1`
pub type Sha1Encoder = UnsaltedEncoder<Sha1Family>;
/// `sha256`
pub type Sha256Encoder = UnsaltedEncoder<Sha256Family>;
/// `sha384`
pub type Sha384Encoder = UnsaltedEncoder<Sha384Family>;
/// `sha512`
pub type Sha512Encoder = UnsaltedEncoder<Sha512Family>;

impl<F: HashFamily> UnsaltedEncoder<F> {
    /// Create a new unsalted encoder
    #[must_use]
    pub fn new() -> Self {
        tracing::debug!(kind = %F::UNSALTED, "constructed unsalted encoder");
        Self {
            _family: PhantomData,
        }
    }
}

impl<F: HashFamily> CryptEncoder for UnsaltedEncoder<F> {
    fn encode(&self, secret: &[u8], _extra: Option<&[u8]>) -> Digest {
        hash_parts::<F>(&[secret])
    }

    fn kind(&self) -> EncoderKind {
        F::UNSALTED
    }
}

impl<F: HashFamily> fmt::Display for UnsaltedEncoder<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(F::UNSALTED.as_str())
    }
}
