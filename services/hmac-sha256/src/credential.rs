use geniza_core::hash::hex_hmac_sha256;
use geniza_core::utils::Redact;
use geniza_core::{Result, SigningCredential};
use std::fmt::{Debug, Formatter};

/// Credential that holds the public key id and the secret key.
///
/// The secret never leaves this type: it can only be used through
/// [`Credential::sign`].
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    key_id: String,
    secret_key: String,
}

impl Credential {
    /// Create a new credential.
    pub fn new(key_id: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            secret_key: secret_key.into(),
        }
    }

    /// Public key identifier sent in the `Authorization` header.
    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    /// Returns the SHA-256 HMAC of a UTF-8 message as 64 lowercase hex digits.
    pub fn sign(&self, message: &str) -> String {
        hex_hmac_sha256(self.secret_key.as_bytes(), message.as_bytes())
    }

    /// Same as [`Credential::sign`] for raw bytes.
    ///
    /// Fails with an encoding error if `message` is not valid UTF-8.
    pub fn sign_bytes(&self, message: &[u8]) -> Result<String> {
        let message = std::str::from_utf8(message)?;
        Ok(self.sign(message))
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("key_id", &Redact::from(&self.key_id))
            .field("secret_key", &Redact::from(&self.secret_key))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.key_id.is_empty() && !self.secret_key.is_empty()
    }
}
