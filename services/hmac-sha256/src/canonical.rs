use bytes::Bytes;
use geniza_core::{Error, Result};
use serde::Serialize;
use serde_json::{Map, Value};

/// Request body sent to a Geniza service: a JSON object.
pub type RequestBody = Map<String, Value>;

/// The canonical bytes of a request body.
///
/// These are the bytes that get signed AND transmitted. Build one per call
/// and never re-serialize the body after signing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CanonicalPayload(Bytes);

impl CanonicalPayload {
    /// The payload of a call without body: zero bytes.
    pub fn empty() -> Self {
        Self(Bytes::new())
    }

    /// Canonicalize any value that serializes to a JSON object.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        match serde_json::to_value(value)? {
            Value::Object(map) => canonicalize(Some(&map)),
            Value::Null => Ok(Self::empty()),
            other => Err(Error::encoding(format!(
                "request body must be a JSON object, got {}",
                json_type_name(&other)
            ))),
        }
    }

    /// Borrow the payload bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Payload length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if this is the empty payload.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<CanonicalPayload> for Bytes {
    fn from(payload: CanonicalPayload) -> Self {
        payload.0
    }
}

/// Serialize a request body into its canonical bytes.
///
/// - `None` becomes the empty byte sequence, not `null`.
/// - Objects are written as compact JSON with keys in map order (sorted by
///   default). Non-ASCII characters and `/` are written literally, never
///   escaped.
///
/// The function is pure: the same body always yields the same bytes, and
/// decoding the output then canonicalizing it again is a no-op.
pub fn canonicalize(body: Option<&RequestBody>) -> Result<CanonicalPayload> {
    let Some(body) = body else {
        return Ok(CanonicalPayload::empty());
    };

    let bs = serde_json::to_vec(body)?;
    Ok(CanonicalPayload(Bytes::from(bs)))
}

fn json_type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
