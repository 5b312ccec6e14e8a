//! Error handling for the user-authentication encoders

use crate::kind::EncoderKind;
use thiserror::Error;

/// Encoder construction and credential errors
///
/// Encoding itself cannot fail; every variant here is raised while resolving
/// an encoder or decoding a stored credential.
#[derive(Debug, Error)]
pub enum EncoderError {
    /// The requested name is not one of the eight supported schemes
    #[error("Unknown encoder kind: {0}")]
    UnknownEncoderKind(String),

    /// A salted scheme was configured without any salt
    #[error("Encoder {0} requires a salt")]
    MissingSalt(EncoderKind),

    /// A stored credential is not valid hex
    #[error("Invalid credential encoding: {0}")]
    InvalidEncoding(#[from] hex::FromHexError),

    /// An encoder configuration document could not be parsed
    #[error("Invalid encoder configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl EncoderError {
    /// Create an `UnknownEncoderKind` error
    #[must_use]
    pub fn unknown_kind(name: impl Into<String>) -> Self {
        Self::UnknownEncoderKind(name.into())
    }
}

/// Result type for encoder operations
pub type Result<T> = std::result::Result<T, EncoderError>;
