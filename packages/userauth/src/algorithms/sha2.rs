//! SHA-2 families: SHA-256, SHA-384, SHA-512

use super::HashFamily;
use crate::kind::{Algorithm, EncoderKind};

/// SHA-256 (`sha256` / `ssha256`)
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha256Family;

impl HashFamily for Sha256Family {
    type Hasher = ::sha2::Sha256;
    const ALGORITHM: Algorithm = Algorithm::Sha256;
    const UNSALTED: EncoderKind = EncoderKind::Sha256;
    const SALTED: EncoderKind = EncoderKind::Ssha256;
}

/// SHA-384 (`sha384` / `ssha384`)
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha384Family;

impl HashFamily for Sha384Family {
    type Hasher = ::sha2::Sha384;
    const ALGORITHM: Algorithm = Algorithm::Sha384;
    const UNSALTED: EncoderKind = EncoderKind::Sha384;
    const SALTED: EncoderKind = EncoderKind::Ssha384;
}

/// SHA-512 (`sha512` / `ssha512`)
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha512Family;

impl HashFamily for Sha512Family {
    type Hasher = ::sha2::Sha512;
    const ALGORITHM: Algorithm = Algorithm::Sha512;
    const UNSALTED: EncoderKind = EncoderKind::Sha512;
    const SALTED: EncoderKind = EncoderKind::Ssha512;
}
