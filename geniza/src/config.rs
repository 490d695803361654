use crate::constants::*;
use geniza_core::utils::Redact;
use geniza_core::{Context, Error, ProvideCredential, Result};
use geniza_hmac_sha256::Credential;
use std::fmt::{self, Debug, Formatter};
use std::str::FromStr;
use std::time::Duration;

/// Geniza deployment a client talks to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    /// `https://api.geniza.ai/v1/`
    #[default]
    Production,
    /// `https://sandbox.geniza.ai/v1/`
    Sandbox,
}

impl Environment {
    /// Base uri of this environment.
    pub fn base_uri(&self) -> &'static str {
        match self {
            Environment::Production => PRODUCTION_BASE_URI,
            Environment::Sandbox => SANDBOX_BASE_URI,
        }
    }
}

impl FromStr for Environment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Environment::Production),
            "sandbox" => Ok(Environment::Sandbox),
            v => Err(Error::config_invalid(format!(
                "unknown geniza environment: {v}"
            ))),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Production => f.write_str("production"),
            Environment::Sandbox => f.write_str("sandbox"),
        }
    }
}

/// Config carries everything a client needs to reach a Geniza service.
///
/// A config is built once and never changes afterwards: pick the environment
/// with the `with_*` methods before handing it to a client.
#[derive(Clone)]
pub struct Config {
    environment: Environment,
    base_uri: String,
    credential: Credential,
    timeout: Duration,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("environment", &self.environment)
            .field("base_uri", &self.base_uri)
            .field("credential", &self.credential)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Config {
    /// Create a production config with the default timeout.
    pub fn new(credential: Credential) -> Self {
        Self {
            environment: Environment::Production,
            base_uri: Environment::Production.base_uri().to_string(),
            credential,
            timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Point this config at the given environment.
    ///
    /// This also resets the base uri to the environment's one.
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self.base_uri = environment.base_uri().to_string();
        self
    }

    /// Override the base uri, e.g. to reach a local stub.
    pub fn with_base_uri(mut self, base_uri: impl Into<String>) -> Self {
        self.base_uri = base_uri.into();
        self
    }

    /// Set the per call timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load config from the context.
    ///
    /// The credential comes from `provider`, then these env values are applied:
    ///
    /// - `GENIZA_ENVIRONMENT`: `sandbox` or `production`
    /// - `GENIZA_BASE_URI`: base uri override
    /// - `GENIZA_REQUEST_TIMEOUT`: timeout in seconds
    pub async fn load(
        ctx: &Context,
        provider: &impl ProvideCredential<Credential = Credential>,
    ) -> Result<Self> {
        let credential = provider
            .provide_credential(ctx)
            .await?
            .ok_or_else(|| Error::credential_invalid("no geniza credential found"))?;

        let mut config = Config::new(credential);
        if let Some(v) = ctx.env_var(GENIZA_ENVIRONMENT) {
            config = config.with_environment(v.parse()?);
        }
        if let Some(v) = ctx.env_var(GENIZA_BASE_URI) {
            config = config.with_base_uri(v);
        }
        if let Some(v) = ctx.env_var(GENIZA_REQUEST_TIMEOUT) {
            let secs: u64 = v.trim().parse().map_err(|e| {
                Error::config_invalid(format!("invalid {GENIZA_REQUEST_TIMEOUT}: {v}"))
                    .with_source(e)
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        log::debug!(
            "loaded geniza config for key {:?}: {} ({})",
            Redact::from(config.credential.key_id()),
            config.base_uri,
            config.environment
        );
        Ok(config)
    }

    /// Selected environment.
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Base uri that endpoint paths are resolved against.
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Credential used to sign requests.
    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Per call timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geniza_core::{ErrorKind, StaticEnv};
    use geniza_hmac_sha256::{
        DefaultCredentialProvider, StaticCredentialProvider, GENIZA_KEY, GENIZA_SECRET_KEY,
    };
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn ctx_with(envs: &[(&str, &str)]) -> Context {
        Context::new().with_env(StaticEnv {
            envs: envs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
        })
    }

    #[test]
    fn test_default_is_production() {
        let config = Config::new(Credential::new("123", "xyz"));

        assert_eq!(config.environment(), Environment::Production);
        assert_eq!(config.base_uri(), "https://api.geniza.ai/v1/");
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_switch_environment() {
        let config =
            Config::new(Credential::new("123", "xyz")).with_environment(Environment::Sandbox);
        assert_eq!(config.base_uri(), "https://sandbox.geniza.ai/v1/");

        let config = config.with_environment(Environment::Production);
        assert_eq!(config.base_uri(), "https://api.geniza.ai/v1/");
        assert_eq!(config.credential().key_id(), "123");
    }

    #[test]
    fn test_environment_from_str() {
        assert_eq!("sandbox".parse::<Environment>().unwrap(), Environment::Sandbox);
        assert_eq!(" PROD ".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!(
            "staging".parse::<Environment>().unwrap_err().kind(),
            ErrorKind::ConfigInvalid
        );
    }

    #[test]
    fn test_debug_redacts_credential() {
        let config = Config::new(Credential::new("123", "a-very-long-secret-value"));
        assert!(!format!("{config:?}").contains("a-very-long-secret-value"));
    }

    #[tokio::test]
    async fn test_load_from_env() {
        let ctx = ctx_with(&[
            (GENIZA_KEY, "123"),
            (GENIZA_SECRET_KEY, "xyz"),
            (GENIZA_ENVIRONMENT, "sandbox"),
            (GENIZA_REQUEST_TIMEOUT, "3"),
        ]);

        let config = Config::load(&ctx, &DefaultCredentialProvider::new())
            .await
            .unwrap();

        assert_eq!(config.credential(), &Credential::new("123", "xyz"));
        assert_eq!(config.environment(), Environment::Sandbox);
        assert_eq!(config.base_uri(), SANDBOX_BASE_URI);
        assert_eq!(config.timeout(), Duration::from_secs(3));
    }

    #[tokio::test]
    async fn test_load_base_uri_override() {
        let ctx = ctx_with(&[
            (GENIZA_ENVIRONMENT, "sandbox"),
            (GENIZA_BASE_URI, "http://localhost/v1"),
        ]);

        let config = Config::load(&ctx, &StaticCredentialProvider::new("123", "xyz"))
            .await
            .unwrap();

        assert_eq!(config.environment(), Environment::Sandbox);
        assert_eq!(config.base_uri(), "http://localhost/v1");
    }

    #[tokio::test]
    async fn test_load_without_credential() {
        let ctx = ctx_with(&[]);

        let err = Config::load(&ctx, &DefaultCredentialProvider::new())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
    }

    #[tokio::test]
    async fn test_load_invalid_timeout() {
        let ctx = ctx_with(&[(GENIZA_REQUEST_TIMEOUT, "ten")]);

        let err = Config::load(&ctx, &StaticCredentialProvider::new("123", "xyz"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }
}
