//! Response normalization.
//!
//! Every successful verb call produces one canonical shape regardless of the server's content
//! type: the parsed JSON body when it parses, otherwise a `{ text, status_code, headers }` record.

use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::warn;

/// The value a verb tool returns.
///
/// Serializes untagged: `Json` as the parsed value itself, `Text` as the three-field record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseEnvelope {
    Json(Value),
    Text(TextEnvelope),
}

/// Fallback for bodies that are not valid JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextEnvelope {
    pub text: String,
    pub status_code: u16,
    /// Lower-cased header names; repeated headers joined with `", "`.
    pub headers: BTreeMap<String, String>,
}

impl ResponseEnvelope {
    /// Normalize a successful response.
    #[must_use]
    pub fn from_response_parts(status: StatusCode, headers: &HeaderMap, body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(v) => Self::Json(v),
            Err(e) => {
                warn!(
                    status = status.as_u16(),
                    error = %e,
                    "response body is not valid JSON; returning text envelope"
                );
                Self::Text(TextEnvelope {
                    text: String::from_utf8_lossy(body).into_owned(),
                    status_code: status.as_u16(),
                    headers: header_map_to_strings(headers),
                })
            }
        }
    }

    /// The envelope as a plain JSON value (what callers of the tool contract receive).
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::Json(v) => v,
            Self::Text(t) => serde_json::to_value(&t).unwrap_or(Value::Null),
        }
    }

    #[must_use]
    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json(_))
    }
}

fn header_map_to_strings(headers: &HeaderMap) -> BTreeMap<String, String> {
    let mut out: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        out.entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert(value);
    }
    out
}
