//! Password-digest encoders for database user authentication
//!
//! Eight schemes are supported: `sha1`, `sha256`, `sha384` and `sha512`
//! hash the secret alone, while `ssha1`, `ssha256`, `ssha384` and `ssha512`
//! hash the secret followed by a salt owned by the encoder.
//!
//! ```
//! use cryypt_userauth::{CryptEncoder, Encoders, registry};
//!
//! let encoder = Encoders::ssha256("salt");
//! let digest = encoder.encode(b"admin", None);
//! assert_eq!(digest.len(), 32);
//!
//! let by_name = registry::new_encoder("ssha256", "salt")?;
//! assert_eq!(by_name.to_string(), "ssha256");
//! assert!(by_name.verify(b"admin", digest.as_bytes()));
//! # Ok::<(), cryypt_userauth::EncoderError>(())
//! ```

#![forbid(unsafe_code)]

pub mod algorithms;
pub mod config;
pub mod encoded;
pub mod encoder;
pub mod error;
pub mod kind;
pub mod registry;
pub mod verify;

pub use config::EncoderConfig;
pub use encoded::Digest;
pub use encoder::{
    CryptEncoder, CryptSaltedEncoder, SaltedEncoder, Sha1Encoder, Sha256Encoder, Sha384Encoder,
    Sha512Encoder, Ssha1Encoder, Ssha256Encoder, Ssha384Encoder, Ssha512Encoder, UnsaltedEncoder,
};
pub use error::{EncoderError, Result};
pub use kind::{Algorithm, EncoderKind};
pub use registry::new_encoder;
pub use verify::verify_hex;

/// Entry point for typed encoder construction
pub struct Encoders;

impl Encoders {
    /// Unsalted SHA-1
    #[must_use]
    pub fn sha1() -> Sha1Encoder {
        Sha1Encoder::new()
    }

    /// Salted SHA-1
    #[must_use]
    pub fn ssha1(salt: impl Into<String>) -> Ssha1Encoder {
        Ssha1Encoder::new(salt)
    }

    /// Unsalted SHA-256
    #[must_use]
    pub fn sha256() -> Sha256Encoder {
        Sha256Encoder::new()
    }

    /// Salted SHA-256
    #[must_use]
    pub fn ssha256(salt: impl Into<String>) -> Ssha256Encoder {
        Ssha256Encoder::new(salt)
    }

    /// Unsalted SHA-384
    #[must_use]
    pub fn sha384() -> Sha384Encoder {
        Sha384Encoder::new()
    }

    /// Salted SHA-384
    #[must_use]
    pub fn ssha384(salt: impl Into<String>) -> Ssha384Encoder {
        Ssha384Encoder::new(salt)
    }

    /// Unsalted SHA-512
    #[must_use]
    pub fn sha512() -> Sha512Encoder {
        Sha512Encoder::new()
    }

    /// Salted SHA-512
    #[must_use]
    pub fn ssha512(salt: impl Into<String>) -> Ssha512Encoder {
        Ssha512Encoder::new(salt)
    }
}
