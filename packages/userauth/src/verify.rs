//! Credential verification against stored digests

use crate::encoder::CryptEncoder;
use crate::error::Result;

/// Check `secret` against a hex-encoded stored credential
///
/// Upper and lower case hex are both accepted. The digest comparison runs in
/// constant time.
///
/// # Errors
///
/// Returns `EncoderError::InvalidEncoding` if `stored_hex` is not valid hex.
pub fn verify_hex(encoder: &dyn CryptEncoder, secret: &[u8], stored_hex: &str) -> Result<bool> {
    let stored = hex::decode(stored_hex)?;
    Ok(encoder.verify(secret, &stored))
}
