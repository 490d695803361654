use crate::{constants::*, Credential};
use async_trait::async_trait;
use geniza_core::{Context, ProvideCredential, Result};

/// EnvCredentialProvider loads Geniza credentials from environment variables.
///
/// This provider looks for the following environment variables:
/// - `GENIZA_KEY`: The Geniza public key id
/// - `GENIZA_SECRET_KEY`: The Geniza secret key
#[derive(Debug, Default)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let envs = ctx.env_vars();

        match (envs.get(GENIZA_KEY), envs.get(GENIZA_SECRET_KEY)) {
            (Some(key), Some(secret)) if !key.is_empty() && !secret.is_empty() => {
                Ok(Some(Credential::new(key.as_str(), secret.as_str())))
            }
            _ => Ok(None),
        }
    }
}
