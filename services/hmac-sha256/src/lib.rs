//! Geniza HMAC-SHA256 request signing.
//!
//! Geniza services authenticate every request with an HMAC-SHA256 computed
//! over the exact body bytes, carried in the `Authorization` header:
//!
//! ```text
//! Authorization: HMAC-SHA256 <key_id>:<lowercase hex mac>
//! ```
//!
//! Because the service recomputes the MAC over the bytes it receives, the body
//! must be serialized exactly once. [`canonicalize`] produces those bytes and
//! [`RequestSigner`] signs them.
//!
//! ## Quick Start
//!
//! ```no_run
//! use geniza_core::{Context, SignRequest};
//! use geniza_hmac_sha256::{canonicalize, Credential, RequestSigner};
//! use serde_json::json;
//!
//! # async fn example() -> geniza_core::Result<()> {
//! let ctx = Context::new();
//! let cred = Credential::new("my-key", "my-secret");
//!
//! let body = json!({"question": "Why is the sky blue?"});
//! let payload = canonicalize(body.as_object())?;
//!
//! let mut parts = http::Request::post("https://api.geniza.ai/v1/sapientSquirrel")
//!     .body(())
//!     .unwrap()
//!     .into_parts()
//!     .0;
//!
//! RequestSigner::new()
//!     .sign_request(&ctx, &mut parts, payload.as_bytes(), Some(&cred))
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Credential Sources
//!
//! ### Environment Variables
//!
//! ```bash
//! export GENIZA_KEY=your-key
//! export GENIZA_SECRET_KEY=your-secret-key
//! ```
//!
//! ### Static
//!
//! [`StaticCredentialProvider`] wraps a key pair known at build time.

mod constants;
pub use constants::*;

mod credential;
pub use credential::Credential;

mod canonical;
pub use canonical::{canonicalize, CanonicalPayload, RequestBody};

mod sign_request;
pub use sign_request::RequestSigner;

mod provide_credential;
pub use provide_credential::*;
