//! MCP server surface for the HTTP verb tools.
//!
//! The five tools are thin wrappers over [`HttpVerbAdapter`]; their names and order follow
//! `mcp_http_tools::VERB_TOOLS`.

use axum::Router;
use axum::routing::get;
use mcp_http_tools::{HttpToolsError, HttpVerbAdapter, ResponseEnvelope};
use rmcp::model::{
    CallToolRequestParams, CallToolResult, Content, ErrorData as McpError, Implementation,
    ListToolsResult, PaginatedRequestParams, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::RequestContext;
use rmcp::transport::streamable_http_server::StreamableHttpService;
use rmcp::transport::streamable_http_server::session::local::LocalSessionManager;
use rmcp::{RoleServer, ServerHandler};
use serde::Serialize;
use serde_json::Value;

#[derive(Clone)]
pub struct HttpToolsServer {
    adapter: HttpVerbAdapter,
}

impl HttpToolsServer {
    #[must_use]
    pub fn new(adapter: HttpVerbAdapter) -> Self {
        Self { adapter }
    }

    /// Tools in registry order, with annotations.
    #[must_use]
    pub fn tools(&self) -> Vec<Tool> {
        self.adapter.list_tools()
    }

    /// Run a `tools/call` request against the adapter.
    ///
    /// # Errors
    ///
    /// Unknown tools and malformed arguments are `invalid_params`; a client build failure is
    /// `internal_error`. Upstream failures are tool results with `isError: true`.
    pub async fn dispatch(
        &self,
        request: CallToolRequestParams,
    ) -> Result<CallToolResult, McpError> {
        let arguments = request.arguments.map_or(Value::Null, Value::Object);
        tool_result(self.adapter.call_tool(&request.name, arguments).await)
    }
}

impl ServerHandler for HttpToolsServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(
                "Generic HTTP tools: http_get, http_post, http_put, http_delete, http_patch. Each call performs exactly one request to the given absolute URL."
                    .to_string(),
            ),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(self.tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        self.dispatch(request).await
    }

    fn get_tool(&self, name: &str) -> Option<Tool> {
        self.tools().into_iter().find(|t| t.name == name)
    }
}

#[derive(Debug, Serialize)]
struct ToolErrorPayload {
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<String>,
    message: String,
}

/// Map an adapter outcome onto an MCP tool result.
///
/// HTTP-status and transport failures are tool-level errors (`isError: true`) so the calling
/// model sees them; malformed arguments and adapter misconfiguration are protocol errors.
fn tool_result(
    outcome: mcp_http_tools::Result<ResponseEnvelope>,
) -> Result<CallToolResult, McpError> {
    match outcome {
        Ok(envelope) => Ok(success_result(envelope.into_value())),
        Err(e) => {
            let message = e.to_string();
            let payload = match e {
                HttpToolsError::HttpStatus { status, body } => ToolErrorPayload {
                    kind: "http_status",
                    status: Some(status),
                    body: Some(body),
                    message,
                },
                HttpToolsError::Transport(_) => ToolErrorPayload {
                    kind: "transport",
                    status: None,
                    body: None,
                    message,
                },
                HttpToolsError::InvalidArguments(_) => {
                    return Err(McpError::invalid_params(message, None));
                }
                HttpToolsError::Config(_) => {
                    return Err(McpError::internal_error(message, None));
                }
            };
            tracing::debug!(kind = payload.kind, error = %payload.message, "http tool call failed");
            let text = payload.message.clone();
            let structured = serde_json::json!({ "error": payload });
            Ok(CallToolResult {
                content: vec![Content::text(text)],
                structured_content: Some(structured),
                is_error: Some(true),
                meta: None,
            })
        }
    }
}

fn success_result(body: Value) -> CallToolResult {
    // A JSON string body is emitted raw; everything else as JSON text.
    let text = if let Some(s) = body.as_str() {
        s.to_string()
    } else {
        serde_json::to_string(&body).unwrap_or_else(|_| body.to_string())
    };
    let structured_content = body.is_object().then_some(body);
    CallToolResult {
        content: vec![Content::text(text)],
        structured_content,
        is_error: Some(false),
        meta: None,
    }
}

async fn health() -> &'static str {
    "ok"
}

/// Build the HTTP app: `/mcp` (streamable HTTP MCP) and `/health`.
pub fn build_router(adapter: HttpVerbAdapter) -> Router {
    let service = StreamableHttpService::new(
        move || Ok(HttpToolsServer::new(adapter.clone())),
        LocalSessionManager::default().into(),
        Default::default(),
    );

    Router::new()
        .route("/health", get(health))
        .nest_service("/mcp", service)
}
