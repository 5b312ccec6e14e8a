//! Serializable encoder selection

use crate::encoder::CryptEncoder;
use crate::error::{EncoderError, Result};
use crate::kind::EncoderKind;
use crate::registry;
use serde::{Deserialize, Serialize};

/// Resolved encoder choice for a user record
///
/// `salt: None` means no salt was stored, which is an error for salted
/// schemes. `Some("")` is an explicit empty salt and is accepted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncoderConfig {
    /// Canonical encoder name
    pub kind: String,
    /// Salt for the `s`-prefixed schemes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salt: Option<String>,
}

impl EncoderConfig {
    /// Create a config for `kind` without a salt
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            salt: None,
        }
    }

    /// Attach a salt
    #[must_use]
    pub fn with_salt(mut self, salt: impl Into<String>) -> Self {
        self.salt = Some(salt.into());
        self
    }

    /// Parse a JSON document such as `{"kind": "ssha256", "salt": "..."}`
    ///
    /// # Errors
    ///
    /// Returns `EncoderError::Config` if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolve this config into an encoder
    ///
    /// # Errors
    ///
    /// Returns `EncoderError::UnknownEncoderKind` for an unregistered name and
    /// `EncoderError::MissingSalt` for a salted scheme without a salt.
    pub fn build(&self) -> Result<Box<dyn CryptEncoder>> {
        let kind: EncoderKind = self.kind.parse()?;
        match (kind.is_salted(), self.salt.as_deref()) {
            (true, None) => Err(EncoderError::MissingSalt(kind)),
            (true, Some(salt)) => Ok(registry::encoder_for(kind, salt)),
            (false, salt) => {
                if salt.is_some() {
                    tracing::debug!(%kind, "ignoring salt configured for unsalted encoder");
                }
                Ok(registry::encoder_for(kind, ""))
            }
        }
    }
}
