//! Request descriptors accepted by the verb tools, and URL/query construction.

use rmcp::schemars;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use url::Url;

/// Arguments of `http_get`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
#[schemars(crate = "rmcp::schemars")]
pub struct GetRequest {
    /// Absolute URL to send the request to, e.g. `https://api.example.com/data`.
    pub url: String,
    /// Optional HTTP headers, e.g. `{"Authorization": "Bearer token"}`.
    #[serde(default)]
    pub headers: Option<HashMap<String, String>>,
    /// Optional query parameters appended to the URL, e.g. `{"page": 1}`.
    #[serde(default)]
    pub query_params: Option<Map<String, Value>>,
}

/// Arguments of `http_post`, `http_put`, `http_delete` and `http_patch`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
#[schemars(crate = "rmcp::schemars")]
pub struct BodyRequest {
    /// Absolute URL to send the request to, e.g. `https://api.example.com/data/1`.
    pub url: String,
    /// Optional HTTP headers, e.g. `{"Content-Type": "application/json"}`.
    #[serde(default)]
    pub headers: Option<HashMap<String, String>>,
    /// Optional JSON request body, e.g. `{"name": "John"}`.
    #[serde(default)]
    pub body: Option<Value>,
}

/// Verb-independent view of a request: what the single internal operation consumes.
#[derive(Debug, Clone, Default)]
pub(crate) struct RequestParts {
    pub url: String,
    pub headers: HashMap<String, String>,
    pub query_params: Option<Map<String, Value>>,
    pub body: Option<Value>,
}

impl From<GetRequest> for RequestParts {
    fn from(r: GetRequest) -> Self {
        Self {
            url: r.url,
            headers: r.headers.unwrap_or_default(),
            query_params: r.query_params,
            body: None,
        }
    }
}

impl From<BodyRequest> for RequestParts {
    fn from(r: BodyRequest) -> Self {
        Self {
            url: r.url,
            headers: r.headers.unwrap_or_default(),
            query_params: None,
            body: r.body,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct QueryPair {
    key: String,
    value: String,
}

/// Parse `url` and append `query_params` after any query it already carries.
///
/// Scalars are stringified, arrays expand to repeated keys, objects are sent as JSON text.
pub(crate) fn build_url(
    url: &str,
    query_params: Option<&Map<String, Value>>,
) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(url)?;

    let pairs: Vec<QueryPair> = query_params
        .map(|m| m.iter().flat_map(|(k, v)| serialize_query_param(k, v)).collect())
        .unwrap_or_default();

    if !pairs.is_empty() {
        let mut query = url.query().unwrap_or_default().to_string();
        for p in &pairs {
            if !query.is_empty() {
                query.push('&');
            }
            query.push_str(&encode_query_component(&p.key));
            query.push('=');
            query.push_str(&encode_query_component(&p.value));
        }
        url.set_query(Some(&query));
    }

    Ok(url)
}

fn serialize_query_param(name: &str, value: &Value) -> Vec<QueryPair> {
    match value {
        Value::Array(arr) => arr
            .iter()
            .map(|v| QueryPair {
                key: name.to_string(),
                value: value_to_string(v),
            })
            .collect(),
        _ => vec![QueryPair {
            key: name.to_string(),
            value: value_to_string(value),
        }],
    }
}

fn encode_query_component(s: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    let mut out = String::with_capacity(s.len());
    for &b in s.as_bytes() {
        if is_unreserved(b) {
            out.push(b as char);
        } else {
            out.push('%');
            out.push(HEX[(b >> 4) as usize] as char);
            out.push(HEX[(b & 0x0F) as usize] as char);
        }
    }
    out
}

fn is_unreserved(b: u8) -> bool {
    matches!(b, b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~')
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(v: Value) -> Map<String, Value> {
        v.as_object().cloned().expect("object")
    }

    #[test]
    fn scalars_are_stringified() {
        let q = params(json!({"page": 1, "active": true, "q": "a b", "none": null}));
        let url = build_url("https://api.example.com/data", Some(&q)).expect("url");
        let query = url.query().expect("query");
        assert!(query.contains("page=1"));
        assert!(query.contains("active=true"));
        assert!(query.contains("q=a%20b"));
        assert!(query.contains("none="));
    }

    #[test]
    fn arrays_expand_to_repeated_keys() {
        let q = params(json!({"tag": ["a", "b"]}));
        let url = build_url("https://api.example.com/data", Some(&q)).expect("url");
        assert_eq!(url.query(), Some("tag=a&tag=b"));
    }

    #[test]
    fn existing_query_is_preserved() {
        let q = params(json!({"page": 2}));
        let url = build_url("https://api.example.com/data?sort=asc", Some(&q)).expect("url");
        assert_eq!(url.query(), Some("sort=asc&page=2"));
    }

    #[test]
    fn no_params_leaves_url_untouched() {
        let url = build_url("https://api.example.com/data?x=1", None).expect("url");
        assert_eq!(url.as_str(), "https://api.example.com/data?x=1");
        let empty = Map::new();
        let url = build_url("https://api.example.com/data", Some(&empty)).expect("url");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn relative_url_is_rejected() {
        assert!(build_url("/data", None).is_err());
    }

    #[test]
    fn request_descriptors_default_optional_fields() {
        let get: GetRequest =
            serde_json::from_value(json!({"url": "https://x.test/"})).expect("get");
        assert!(get.headers.is_none());
        assert!(get.query_params.is_none());

        let body: BodyRequest =
            serde_json::from_value(json!({"url": "https://x.test/", "body": null}))
                .expect("body");
        assert!(body.body.is_none());
    }
}
