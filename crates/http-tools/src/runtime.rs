//! Runtime for executing the HTTP verb tools.
//!
//! Every tool call maps to exactly one outbound request. There is no retry, caching, or
//! status-specific handling: transport failures and non-success statuses surface as errors,
//! everything else is normalized by [`ResponseEnvelope::from_response_parts`].

use crate::envelope::ResponseEnvelope;
use crate::registry::{self, VERB_TOOLS};
use crate::request::{BodyRequest, GetRequest, RequestParts, build_url};
use crate::transport::{TransportOptions, sanitize_reqwest_error};
use crate::verb::{HttpVerb, PayloadPlacement};
use reqwest::Client;
use rmcp::model::{JsonObject, Tool};
use rmcp::schemars;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum HttpToolsError {
    #[error("config error: {0}")]
    Config(String),
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },
    #[error("http transport error: {0}")]
    Transport(String),
}

pub type Result<T> = std::result::Result<T, HttpToolsError>;

impl From<reqwest::Error> for HttpToolsError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(sanitize_reqwest_error(&value))
    }
}

/// The HTTP verb adapter.
///
/// Cheap to clone and safe to share across tasks: the only state is the immutable client and
/// transport options.
#[derive(Clone)]
pub struct HttpVerbAdapter {
    inner: Arc<HttpVerbAdapterInner>,
}

struct HttpVerbAdapterInner {
    client: Client,
    options: TransportOptions,
}

impl HttpVerbAdapter {
    /// Build an adapter with default transport options (follow redirects, no timeout, no limit).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        Self::with_options(TransportOptions::default())
    }

    /// Build an adapter with explicit transport options.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_options(options: TransportOptions) -> Result<Self> {
        let client = options.build_client()?;
        Ok(Self {
            inner: Arc::new(HttpVerbAdapterInner { client, options }),
        })
    }

    #[must_use]
    pub fn options(&self) -> &TransportOptions {
        &self.inner.options
    }

    /// `GET url` with optional headers and query parameters.
    ///
    /// # Errors
    ///
    /// Transport failure or a status outside 2xx/3xx.
    pub async fn get(&self, request: GetRequest) -> Result<ResponseEnvelope> {
        self.execute(HttpVerb::Get, request.into()).await
    }

    /// `POST url` with optional headers and JSON body.
    ///
    /// # Errors
    ///
    /// Transport failure or a status outside 2xx/3xx.
    pub async fn post(&self, request: BodyRequest) -> Result<ResponseEnvelope> {
        self.execute(HttpVerb::Post, request.into()).await
    }

    /// `PUT url` with optional headers and JSON body.
    ///
    /// # Errors
    ///
    /// Transport failure or a status outside 2xx/3xx.
    pub async fn put(&self, request: BodyRequest) -> Result<ResponseEnvelope> {
        self.execute(HttpVerb::Put, request.into()).await
    }

    /// `DELETE url` with optional headers and JSON body.
    ///
    /// # Errors
    ///
    /// Transport failure or a status outside 2xx/3xx.
    pub async fn delete(&self, request: BodyRequest) -> Result<ResponseEnvelope> {
        self.execute(HttpVerb::Delete, request.into()).await
    }

    /// `PATCH url` with optional headers and JSON body.
    ///
    /// # Errors
    ///
    /// Transport failure or a status outside 2xx/3xx.
    pub async fn patch(&self, request: BodyRequest) -> Result<ResponseEnvelope> {
        self.execute(HttpVerb::Patch, request.into()).await
    }

    /// List the MCP `Tool`s, in registry order.
    #[must_use]
    pub fn list_tools(&self) -> Vec<Tool> {
        VERB_TOOLS
            .iter()
            .map(|t| {
                let schema = match t.verb.payload_placement() {
                    PayloadPlacement::Query => input_schema_for::<GetRequest>(),
                    PayloadPlacement::JsonBody => input_schema_for::<BodyRequest>(),
                };
                let mut tool = Tool::new(t.name, t.description, Arc::new(schema));
                tool.annotations = Some(crate::semantics::annotations_for_verb(t.verb));
                tool
            })
            .collect()
    }

    /// Execute a tool call by name with raw JSON arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the tool name is unknown or the arguments do not match the tool's input
    /// - the HTTP request fails (transport or non-success status)
    pub async fn call_tool(&self, tool_name: &str, arguments: Value) -> Result<ResponseEnvelope> {
        let tool = registry::find(tool_name).ok_or_else(|| {
            HttpToolsError::InvalidArguments(format!("Tool not found: {tool_name}"))
        })?;

        let parts: RequestParts = match tool.verb.payload_placement() {
            PayloadPlacement::Query => parse_arguments::<GetRequest>(tool_name, arguments)?.into(),
            PayloadPlacement::JsonBody => {
                parse_arguments::<BodyRequest>(tool_name, arguments)?.into()
            }
        };
        self.execute(tool.verb, parts).await
    }

    async fn execute(&self, verb: HttpVerb, parts: RequestParts) -> Result<ResponseEnvelope> {
        let RequestParts {
            url,
            headers,
            query_params,
            body,
        } = parts;

        debug!(
            tool = registry::for_verb(verb).name,
            method = %verb,
            url = %url,
            headers = ?headers,
            query_params = ?query_params,
            body = ?body,
            "sending http request"
        );

        let url = build_url(&url, query_params.as_ref())
            .map_err(|e| HttpToolsError::Transport(format!("Invalid URL '{url}': {e}")))?;

        let mut request = self.inner.client.request(verb.method(), url);
        for (key, value) in &headers {
            request = request.header(key, value);
        }
        if let Some(body) = body.as_ref() {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let response_headers = response.headers().clone();
        let max_bytes = self.inner.options.max_response_bytes;

        if !(status.is_success() || status.is_redirection()) {
            let body = read_error_body(response, max_bytes).await;
            debug!(method = %verb, status = status.as_u16(), "http request failed");
            return Err(HttpToolsError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = read_response_body_limited_bytes(response, max_bytes).await?;
        debug!(method = %verb, status = status.as_u16(), bytes = bytes.len(), "http response");

        Ok(ResponseEnvelope::from_response_parts(
            status,
            &response_headers,
            &bytes,
        ))
    }
}

fn parse_arguments<T: DeserializeOwned>(tool_name: &str, arguments: Value) -> Result<T> {
    // Hosts may send no arguments at all; treat that like an empty object.
    let arguments = if arguments.is_null() {
        Value::Object(serde_json::Map::new())
    } else {
        arguments
    };
    serde_json::from_value(arguments)
        .map_err(|e| HttpToolsError::InvalidArguments(format!("{tool_name}: {e}")))
}

fn input_schema_for<T: schemars::JsonSchema>() -> JsonObject {
    let schema = schemars::schema_for!(T);
    serde_json::to_value(&schema)
        .ok()
        .and_then(|v| v.as_object().cloned())
        .unwrap_or_else(JsonObject::new)
}

async fn read_response_body_limited_bytes(
    mut response: reqwest::Response,
    max_bytes: Option<usize>,
) -> Result<Vec<u8>> {
    let Some(max) = max_bytes else {
        let bytes = response.bytes().await.map_err(HttpToolsError::from)?;
        return Ok(bytes.to_vec());
    };

    if let Some(len) = response.content_length()
        && len > max as u64
    {
        return Err(HttpToolsError::Transport(format!(
            "Response too large: {len} bytes (limit {max})"
        )));
    }

    let mut out: Vec<u8> = Vec::new();
    while let Some(chunk) = response.chunk().await.map_err(HttpToolsError::from)? {
        if out.len().saturating_add(chunk.len()) > max {
            return Err(HttpToolsError::Transport(format!(
                "Response too large: exceeded {max} bytes"
            )));
        }
        out.extend_from_slice(&chunk);
    }

    Ok(out)
}

/// Best-effort body of a failed response, cut at `max_bytes`. Read errors end the body early.
async fn read_error_body(mut response: reqwest::Response, max_bytes: Option<usize>) -> String {
    let mut out: Vec<u8> = Vec::new();
    while let Ok(Some(chunk)) = response.chunk().await {
        out.extend_from_slice(&chunk);
        if let Some(max) = max_bytes
            && out.len() >= max
        {
            out.truncate(max);
            break;
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}
