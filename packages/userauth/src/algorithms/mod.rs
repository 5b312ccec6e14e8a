//! Digest families backing the encoders
//!
//! Each family binds a RustCrypto hasher to its pair of canonical encoder
//! kinds. Encoders are generic over the family, so the eight schemes share
//! one unsalted and one salted implementation.

pub mod sha1;
pub mod sha2;

pub use self::sha1::Sha1Family;
pub use self::sha2::{Sha256Family, Sha384Family, Sha512Family};

use crate::encoded::Digest;
use crate::kind::{Algorithm, EncoderKind};
use digest::Digest as Hasher;

/// A digest primitive together with the encoder names built on it
pub trait HashFamily: Clone + Copy + Default + std::fmt::Debug + Send + Sync + 'static {
    /// Hash implementation
    type Hasher: Hasher;

    /// Digest family
    const ALGORITHM: Algorithm;

    /// Kind of the unsalted encoder over this family
    const UNSALTED: EncoderKind;

    /// Kind of the salted encoder over this family
    const SALTED: EncoderKind;
}

/// Single-pass hash over the concatenation of `parts`, in order
pub(crate) fn hash_parts<F: HashFamily>(parts: &[&[u8]]) -> Digest {
    let mut hasher = <F::Hasher as Hasher>::new();
    for part in parts {
        hasher.update(part);
    }
    Digest::new(hasher.finalize().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parts_are_concatenated() {
        let split = hash_parts::<Sha256Family>(&[b"ad", b"min", b"", b"salt"]);
        let joined = hash_parts::<Sha256Family>(&[b"adminsalt"]);
        assert_eq!(split, joined);
    }

    #[test]
    fn test_output_length_matches_family() {
        assert_eq!(hash_parts::<Sha1Family>(&[]).len(), Sha1Family::ALGORITHM.digest_len());
        assert_eq!(hash_parts::<Sha256Family>(&[]).len(), Sha256Family::ALGORITHM.digest_len());
        assert_eq!(hash_parts::<Sha384Family>(&[]).len(), Sha384Family::ALGORITHM.digest_len());
        assert_eq!(hash_parts::<Sha512Family>(&[]).len(), Sha512Family::ALGORITHM.digest_len());
    }
}
