use crate::{Config, Transport};
use geniza_core::{Context, Error, Result};
use geniza_hmac_sha256::RequestBody;
use serde_json::Value;

/// Geniza.ai SDK.
///
/// Cheap to clone; clones share the same immutable config.
#[derive(Debug, Clone)]
pub struct Geniza {
    transport: Transport,
}

impl Geniza {
    /// Create a client from an explicit context and config.
    pub fn new(ctx: Context, config: Config) -> Self {
        Self {
            transport: Transport::new(ctx, config),
        }
    }

    /// Create a client with the default context for a key pair.
    #[cfg(feature = "default-context")]
    pub fn from_keys(key: &str, secret_key: &str, environment: crate::Environment) -> Self {
        let config =
            Config::new(crate::Credential::new(key, secret_key)).with_environment(environment);
        Self::new(crate::default_context(), config)
    }

    /// Create a client with the default context, loading everything from env.
    ///
    /// See [`Config::load`] for the env values used.
    #[cfg(feature = "default-context")]
    pub async fn from_env() -> Result<Self> {
        let ctx = crate::default_context();
        let config = Config::load(
            &ctx,
            &geniza_hmac_sha256::DefaultCredentialProvider::new(),
        )
        .await?;
        Ok(Self::new(ctx, config))
    }

    /// Config used by this client.
    pub fn config(&self) -> &Config {
        self.transport.config()
    }

    /// Underlying transport, for endpoints without a dedicated method.
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Call any Geniza endpoint with the given payload.
    pub async fn call_endpoint(&self, endpoint: &str, payload: RequestBody) -> Result<Value> {
        require_text(endpoint, "You must supply an endpoint to call.")?;

        self.transport.post(endpoint, Some(&payload), None).await
    }

    /// The Sapient Squirrel: ask a question, get its answer.
    pub async fn ask_sapient_squirrel(&self, question: &str) -> Result<String> {
        require_text(question, "You must supply a question to ask.")?;

        let mut payload = RequestBody::new();
        payload.insert("question".to_string(), question.into());
        let resp = self
            .transport
            .post("sapientSquirrel", Some(&payload), None)
            .await?;

        match resp.get("answer") {
            Some(Value::String(answer)) => Ok(answer.clone()),
            _ => Err(Error::encoding(format!(
                "response has no answer field: {resp}"
            ))),
        }
    }

    /// Provide feedback on a Geniza response.
    ///
    /// - `uuid`: unique request id of the response
    /// - `rating`: response quality from 0 (poor) to 1 (good)
    /// - `feedback`: additional free text, may be empty
    pub async fn provide_feedback(&self, uuid: &str, rating: f64, feedback: &str) -> Result<()> {
        require_text(uuid, "You must supply the uuid of the request to rate.")?;
        if !(0.0..=1.0).contains(&rating) {
            return Err(Error::request_invalid(format!(
                "Rating must be between 0 and 1, got {rating}"
            )));
        }

        let mut payload = RequestBody::new();
        payload.insert("uuid".to_string(), uuid.into());
        payload.insert("rating".to_string(), rating.into());
        payload.insert("feedback".to_string(), feedback.into());
        self.transport.post("feedback", Some(&payload), None).await?;

        Ok(())
    }

    /// Extract company names and their ticker symbols from an article or other text.
    pub async fn extract_stock_symbols(&self, text: &str) -> Result<Value> {
        self.post_text(
            "extractors/stockSymbols",
            text,
            "You must supply text from which to extract stocks.",
        )
        .await
    }

    /// Extract named entities from text.
    pub async fn extract_entities(&self, text: &str) -> Result<Value> {
        self.post_text(
            "extractors/entities",
            text,
            "You must supply text from which to extract entities.",
        )
        .await
    }

    /// Detect any PII present in text.
    pub async fn detect_pii(&self, text: &str) -> Result<Value> {
        self.post_text(
            "detectors/pii",
            text,
            "You must supply text from which to detect PII.",
        )
        .await
    }

    /// Detect the language text is written in.
    pub async fn detect_language(&self, text: &str) -> Result<Value> {
        self.post_text(
            "detectors/language",
            text,
            "You must supply text from which to detect the language.",
        )
        .await
    }

    /// Analyze the sentiment of text.
    pub async fn analyze_sentiment(&self, text: &str) -> Result<Value> {
        self.post_text(
            "analyzers/sentiment",
            text,
            "You must supply text for which to analyze sentiment.",
        )
        .await
    }

    /// Summarize text, optionally targeting a word count.
    pub async fn summarize(&self, text: &str, word_count: Option<u32>) -> Result<Value> {
        require_text(text, "You must supply text to summarize.")?;
        if word_count == Some(0) {
            return Err(Error::request_invalid(
                "Word count must be greater than 0.",
            ));
        }

        let mut payload = RequestBody::new();
        payload.insert("text".to_string(), text.into());
        if let Some(n) = word_count {
            payload.insert("wordCount".to_string(), n.into());
        }
        self.transport
            .post("summarizers/text", Some(&payload), None)
            .await
    }

    async fn post_text(&self, endpoint: &str, text: &str, missing: &str) -> Result<Value> {
        require_text(text, missing)?;

        let mut payload = RequestBody::new();
        payload.insert("text".to_string(), text.into());
        self.transport.post(endpoint, Some(&payload), None).await
    }
}

fn require_text(value: &str, message: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::request_invalid(message));
    }
    Ok(())
}
