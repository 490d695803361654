//! Signed HTTP client for the Geniza.ai text analysis services.
//!
//! Every request is authenticated with an HMAC-SHA256 over the exact body
//! bytes sent on the wire (see [`hmac_sha256`]). This crate wires that
//! signing scheme to an HTTP transport and exposes the service operations.
//!
//! ## Example
//!
//! ```no_run
//! # #[tokio::main]
//! # async fn main() -> geniza::Result<()> {
//! use geniza::{Environment, Geniza};
//!
//! let geniza = Geniza::from_keys("my-key", "my-secret-key", Environment::Sandbox);
//!
//! let answer = geniza.ask_sapient_squirrel("Why is the sky blue?").await?;
//! println!("{answer}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! Every operation returns [`Error`], use [`Error::kind`] to tell apart:
//!
//! - [`ErrorKind::RequestInvalid`]: bad argument, nothing was sent
//! - [`ErrorKind::Transport`]: the service could not be reached
//! - [`ErrorKind::RemoteService`]: the service answered with a non-200 status
//! - [`ErrorKind::Encoding`]: the body could not be encoded or decoded

pub use geniza_core::*;

pub mod hmac_sha256 {
    //! HMAC-SHA256 signing scheme used by Geniza services.
    pub use geniza_hmac_sha256::*;
}
pub use geniza_hmac_sha256::{Credential, RequestBody};

mod constants;
pub use constants::*;

mod config;
pub use config::{Config, Environment};

pub mod endpoint;

mod transport;
pub use transport::Transport;

mod client;
pub use client::Geniza;

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::default_context;
