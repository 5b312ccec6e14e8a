//! SHA-1 family

use super::HashFamily;
use crate::kind::{Algorithm, EncoderKind};

/// SHA-1 (`sha1` / `ssha1`)
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha1Family;

impl HashFamily for Sha1Family {
    type Hasher = ::sha1::Sha1;
    const ALGORITHM: Algorithm = Algorithm::Sha1;
    const UNSALTED: EncoderKind = EncoderKind::Sha1;
    const SALTED: EncoderKind = EncoderKind::Ssha1;
}
