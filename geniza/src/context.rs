use geniza_core::{Context, OsEnv};
use geniza_http_send_reqwest::ReqwestHttpSend;

/// Create a context backed by reqwest and the OS environment.
///
/// The request timeout is enforced per call by [`Transport`](crate::Transport),
/// so the client is left with reqwest's defaults.
pub fn default_context() -> Context {
    Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv)
}
