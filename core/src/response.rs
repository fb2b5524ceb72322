//! Response decoding.
//!
//! Bodies look like `{"data": {"<key>": payload}, "errors": [...]}`. A
//! non-empty `errors` array wins over any partial data.

use core::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::error::{GraftError, Result};

/// One entry of the backend's `errors` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphqlError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<JsonValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<JsonValue>>,
}

impl fmt::Display for GraphqlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Payload of `insert_<model>` and `update_<model>`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(bound(deserialize = "M: DeserializeOwned"))]
pub struct MutationResponse<M> {
    /// Present when `affected_rows` was selected
    #[serde(default)]
    pub affected_rows: Option<i64>,
    #[serde(default)]
    pub returning: Vec<M>,
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Option<Map<String, JsonValue>>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

/// Decodes the payload stored under `data.<key>`.
pub fn decode<T: DeserializeOwned>(body: &[u8], key: &str) -> Result<T> {
    let envelope: Envelope = serde_json::from_slice(body)?;

    if !envelope.errors.is_empty() {
        crate::graft_trace_backend_errors!(key, envelope.errors.len());
        return Err(GraftError::Backend(envelope.errors));
    }

    let payload = envelope
        .data
        .and_then(|mut data| data.remove(key))
        .ok_or_else(|| GraftError::MissingData {
            key: key.to_string(),
        })?;

    Ok(serde_json::from_value(payload)?)
}
