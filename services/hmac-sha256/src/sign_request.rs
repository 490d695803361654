use crate::constants::AUTHORIZATION_SCHEME;
use crate::credential::Credential;
use async_trait::async_trait;
use geniza_core::hash::hex_sha256;
use geniza_core::{Context, Error, Result, SignRequest, SigningCredential};
use http::header::AUTHORIZATION;
use http::HeaderValue;

/// RequestSigner for the Geniza HMAC-SHA256 scheme.
///
/// Inserts `Authorization: HMAC-SHA256 <key_id>:<mac>` where `mac` is the
/// HMAC of the request body. Nothing else from the request is signed.
#[derive(Debug, Default, Clone, Copy)]
pub struct RequestSigner;

impl RequestSigner {
    /// Create a new signer.
    pub fn new() -> Self {
        Self
    }

    /// Build the `Authorization` header value for the given body.
    pub fn authorization(&self, cred: &Credential, body: &[u8]) -> Result<HeaderValue> {
        let signature = cred.sign_bytes(body)?;

        let mut value: HeaderValue =
            format!("{} {}:{}", AUTHORIZATION_SCHEME, cred.key_id(), signature).parse()?;
        value.set_sensitive(true);
        Ok(value)
    }
}

#[async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _ctx: &Context,
        req: &mut http::request::Parts,
        body: &[u8],
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let Some(cred) = credential.filter(|c| c.is_valid()) else {
            return Err(Error::credential_invalid(
                "request can't be signed without a valid credential",
            ));
        };

        log::debug!(
            "signing {} {} with body of {} bytes (sha256 {})",
            req.method,
            req.uri,
            body.len(),
            hex_sha256(body)
        );
        req.headers.insert(AUTHORIZATION, self.authorization(cred, body)?);

        Ok(())
    }
}
