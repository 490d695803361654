//! Reqwest based [`HttpSend`] implementation for the Geniza SDK.
//!
//! ```no_run
//! use geniza_core::Context;
//! use geniza_http_send_reqwest::ReqwestHttpSend;
//!
//! let ctx = Context::new().with_http_send(ReqwestHttpSend::default());
//! ```

use async_trait::async_trait;
use bytes::Bytes;
use geniza_core::{Error, HttpSend, Result};
use http_body_util::BodyExt;
use reqwest::{Client, Request};

/// ReqwestHttpSend sends requests with a [`reqwest::Client`].
///
/// Any failure before a complete response is read is reported as a transport
/// error. Non-success statuses are returned as regular responses.
#[derive(Debug, Default, Clone)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let req = Request::try_from(req).map_err(|e| {
            Error::request_invalid("failed to convert request for reqwest").with_source(e)
        })?;
        let resp: http::Response<_> = self
            .client
            .execute(req)
            .await
            .map_err(transport_error)?
            .into();

        let (parts, body) = resp.into_parts();
        let bs = BodyExt::collect(body)
            .await
            .map(|buf| buf.to_bytes())
            .map_err(transport_error)?;
        Ok(http::Response::from_parts(parts, bs))
    }
}

fn transport_error(err: reqwest::Error) -> Error {
    let message = if err.is_timeout() {
        "request timed out"
    } else if err.is_connect() {
        "failed to connect to service"
    } else {
        "failed to send request"
    };
    log::debug!("{message}: {err:?}");

    Error::transport(message).with_source(err)
}
