use crate::constants::USER_AGENT;
use crate::endpoint;
use crate::Config;
use bytes::Bytes;
use geniza_core::{Context, Error, Result, SignRequest};
use geniza_hmac_sha256::{canonicalize, CanonicalPayload, RequestBody, RequestSigner};
use http::header::{ACCEPT, CONTENT_TYPE, USER_AGENT as USER_AGENT_HEADER};
use http::{HeaderMap, HeaderValue, Method, Request, StatusCode};
use serde_json::Value;
use std::sync::Arc;

/// Transport signs requests and exchanges them with a Geniza service.
///
/// Each call is a single attempt: there is no retry and no backoff. Calls
/// sharing one transport are independent; every call serializes and signs its
/// own body.
#[derive(Debug, Clone)]
pub struct Transport {
    ctx: Context,
    config: Arc<Config>,
    signer: RequestSigner,
}

impl Transport {
    /// Create a new transport.
    pub fn new(ctx: Context, config: Config) -> Self {
        Self {
            ctx,
            config: Arc::new(config),
            signer: RequestSigner::new(),
        }
    }

    /// Config used by this transport.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// POST `body` to `path`, see [`Transport::request`].
    pub async fn post(
        &self,
        path: &str,
        body: Option<&RequestBody>,
        extra_headers: Option<&HeaderMap>,
    ) -> Result<Value> {
        self.request(Method::POST, path, body, extra_headers).await
    }

    /// Build, sign and send a request, then decode the JSON response.
    ///
    /// `extra_headers` are merged over the standard headers: a caller header
    /// replaces every standard value of the same name, `Authorization`
    /// included.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&RequestBody>,
        extra_headers: Option<&HeaderMap>,
    ) -> Result<Value> {
        let payload = canonicalize(body)?;
        self.send(method, path, payload, extra_headers).await
    }

    /// Same as [`Transport::request`] for an already canonicalized payload.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        payload: CanonicalPayload,
        extra_headers: Option<&HeaderMap>,
    ) -> Result<Value> {
        let req = self
            .build_request(method, path, payload, extra_headers)
            .await?;
        log::debug!("sending geniza request: {} {}", req.method(), req.uri());

        let timeout = self.config.timeout();
        let resp = tokio::time::timeout(timeout, self.ctx.http_send(req))
            .await
            .map_err(|e| {
                Error::transport(format!("request timed out after {timeout:?}")).with_source(e)
            })??;

        let (parts, body) = resp.into_parts();
        log::debug!("got geniza response: {} ({} bytes)", parts.status, body.len());
        if parts.status != StatusCode::OK {
            return Err(Error::remote_service(parts.status, body));
        }

        decode_response(&body)
    }

    /// Build the signed request without sending it.
    pub async fn build_request(
        &self,
        method: Method,
        path: &str,
        payload: CanonicalPayload,
        extra_headers: Option<&HeaderMap>,
    ) -> Result<Request<Bytes>> {
        let uri = endpoint::resolve(self.config.base_uri(), path)?;
        let (mut parts, ()) = Request::builder()
            .method(method)
            .uri(uri)
            .body(())?
            .into_parts();

        parts
            .headers
            .insert(ACCEPT, HeaderValue::from_static("application/json"));
        parts
            .headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        parts
            .headers
            .insert(USER_AGENT_HEADER, HeaderValue::from_static(USER_AGENT));

        self.signer
            .sign_request(
                &self.ctx,
                &mut parts,
                payload.as_bytes(),
                Some(self.config.credential()),
            )
            .await?;

        if let Some(extra) = extra_headers {
            merge_headers(&mut parts.headers, extra);
        }

        Ok(Request::from_parts(parts, payload.into()))
    }
}

/// Merge caller headers over `headers`, caller wins on every name collision.
fn merge_headers(headers: &mut HeaderMap, extra: &HeaderMap) {
    for name in extra.keys() {
        headers.remove(name);
        for value in extra.get_all(name) {
            headers.append(name.clone(), value.clone());
        }
    }
}

fn decode_response(body: &[u8]) -> Result<Value> {
    serde_json::from_slice(body).map_err(|e| {
        Error::encoding(format!(
            "failed to decode response as json: {}",
            String::from_utf8_lossy(body)
        ))
        .with_source(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use geniza_core::ErrorKind;
    use geniza_hmac_sha256::Credential;
    use http::header::AUTHORIZATION;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn transport() -> Transport {
        let config =
            Config::new(Credential::new("123", "xyz")).with_base_uri("http://localhost/v1");
        Transport::new(Context::new(), config)
    }

    #[test]
    fn test_merge_headers_caller_wins() {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut extra = HeaderMap::new();
        extra.insert(ACCEPT, HeaderValue::from_static("text/plain"));
        extra.append("x-geniza-custom-header", HeaderValue::from_static("Foo"));
        extra.append("x-geniza-custom-header", HeaderValue::from_static("Bar"));

        merge_headers(&mut headers, &extra);

        assert_eq!(headers.get_all(ACCEPT).iter().count(), 1);
        assert_eq!(headers[ACCEPT], "text/plain");
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        let custom: Vec<_> = headers.get_all("x-geniza-custom-header").iter().collect();
        assert_eq!(custom, vec!["Foo", "Bar"]);
    }

    #[tokio::test]
    async fn test_build_request_standard_headers() {
        let t = transport();
        let payload = canonicalize(json!({"question": "1234567890"}).as_object()).unwrap();

        let req = t
            .build_request(Method::POST, "sapientSquirrel", payload.clone(), None)
            .await
            .unwrap();

        assert_eq!(req.method(), Method::POST);
        assert_eq!(req.uri(), "http://localhost/v1/sapientSquirrel");
        assert_eq!(req.headers()[ACCEPT], "application/json");
        assert_eq!(req.headers()[CONTENT_TYPE], "application/json");
        let ua = req.headers()[USER_AGENT_HEADER].to_str().unwrap();
        assert!(ua.starts_with("Geniza.ai-SDK-Rust/"), "{ua}");
        assert!(ua.contains(", Rust/"), "{ua}");
        assert_eq!(req.body().as_ref(), payload.as_bytes());
        assert_eq!(
            req.headers()[AUTHORIZATION],
            "HMAC-SHA256 123:3fc4f2ab1d0ce78660d1be2c08d70ad8de2079379ae899f2e27b93655b2a1fd3"
        );
    }

    #[tokio::test]
    async fn test_build_request_caller_overrides_standard_header() {
        let t = transport();
        let mut extra = HeaderMap::new();
        extra.insert(CONTENT_TYPE, HeaderValue::from_static("application/vnd.geniza+json"));
        extra.insert(AUTHORIZATION, HeaderValue::from_static("HMAC-SHA256 other:abc"));

        let req = t
            .build_request(Method::POST, "feedback", CanonicalPayload::empty(), Some(&extra))
            .await
            .unwrap();

        assert_eq!(req.headers()[CONTENT_TYPE], "application/vnd.geniza+json");
        assert_eq!(req.headers()[AUTHORIZATION], "HMAC-SHA256 other:abc");
        assert_eq!(req.headers()[ACCEPT], "application/json");
    }

    #[tokio::test]
    async fn test_build_request_invalid_base_uri() {
        let config = Config::new(Credential::new("123", "xyz")).with_base_uri("localhost/v1");
        let t = Transport::new(Context::new(), config);

        let err = t
            .build_request(Method::POST, "feedback", CanonicalPayload::empty(), None)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }

    #[test]
    fn test_decode_response() {
        assert_eq!(decode_response(b"").unwrap_err().kind(), ErrorKind::Encoding);
        assert_eq!(
            decode_response(br#"{"answer":"qwerty"}"#).unwrap(),
            json!({"answer": "qwerty"})
        );
        assert_eq!(
            decode_response(b"<html>").unwrap_err().kind(),
            ErrorKind::Encoding
        );
    }
}
