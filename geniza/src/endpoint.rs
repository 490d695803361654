//! Endpoint resolution.
//!
//! Relative endpoint paths are joined to the base uri with exactly one `/`:
//! trailing slashes of the base and leading slashes of the path are dropped
//! before joining. `https://api.geniza.ai/v1/` + `feedback` and
//! `https://api.geniza.ai/v1` + `/feedback` both resolve to
//! `https://api.geniza.ai/v1/feedback`.
//!
//! A base that is not an absolute uri is a config fault, a path that does not
//! form a valid uri with it is a request fault.

use geniza_core::{Error, Result};
use http::Uri;

/// Resolve `relative_path` against `base_uri`.
pub fn resolve(base_uri: &str, relative_path: &str) -> Result<Uri> {
    let base = base_uri.trim_end_matches('/');
    let path = relative_path.trim_start_matches('/');

    let base_parsed: Uri = base.parse()?;
    if base_parsed.scheme().is_none() || base_parsed.authority().is_none() {
        return Err(Error::config_invalid(format!(
            "base uri must be absolute, got: {base_uri}"
        )));
    }

    format!("{base}/{path}").parse().map_err(|e| {
        Error::request_invalid(format!("invalid endpoint path: {relative_path}")).with_source(e)
    })
}
