//! Name to encoder resolution over the closed set of schemes

use crate::encoder::{
    CryptEncoder, Sha1Encoder, Sha256Encoder, Sha384Encoder, Sha512Encoder, Ssha1Encoder,
    Ssha256Encoder, Ssha384Encoder, Ssha512Encoder,
};
use crate::error::Result;
use crate::kind::EncoderKind;

/// Build the encoder registered under `name`
///
/// `salt` is owned by the encoder for salted schemes and ignored otherwise.
///
/// # Errors
///
/// Returns `EncoderError::UnknownEncoderKind` if `name` is not one of the
/// canonical names. No fallback scheme is ever substituted.
pub fn new_encoder(name: &str, salt: &str) -> Result<Box<dyn CryptEncoder>> {
    let kind = match name.parse::<EncoderKind>() {
        Ok(kind) => kind,
        Err(e) => {
            tracing::warn!(name, "unknown encoder kind requested");
            return Err(e);
        }
    };
    Ok(encoder_for(kind, salt))
}

/// Build the encoder for an already-resolved kind
#[must_use]
pub fn encoder_for(kind: EncoderKind, salt: &str) -> Box<dyn CryptEncoder> {
    match kind {
        EncoderKind::Sha1 => Box::new(Sha1Encoder::new()),
        EncoderKind::Ssha1 => Box::new(Ssha1Encoder::new(salt)),
        EncoderKind::Sha256 => Box::new(Sha256Encoder::new()),
        EncoderKind::Ssha256 => Box::new(Ssha256Encoder::new(salt)),
        EncoderKind::Sha384 => Box::new(Sha384Encoder::new()),
        EncoderKind::Ssha384 => Box::new(Ssha384Encoder::new(salt)),
        EncoderKind::Sha512 => Box::new(Sha512Encoder::new()),
        EncoderKind::Ssha512 => Box::new(Ssha512Encoder::new(salt)),
    }
}

/// Canonical names of every registered scheme
pub fn names() -> impl Iterator<Item = &'static str> {
    EncoderKind::ALL.into_iter().map(EncoderKind::as_str)
}
