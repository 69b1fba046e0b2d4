//! Command-line / environment configuration.

use clap::{Parser, ValueEnum};
use mcp_http_tools::{RedirectPolicy, TransportOptions};
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "mcp-http-tools-adapter", version, about)]
pub struct Args {
    /// Address to serve MCP (`/mcp`) and health (`/health`) on.
    #[arg(long, env = "MCP_HTTP_TOOLS_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Log level / filter directive. `RUST_LOG` takes precedence when set.
    #[arg(long, env = "MCP_HTTP_TOOLS_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    #[arg(long, env = "MCP_HTTP_TOOLS_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Whether outbound requests follow redirects.
    #[arg(long, env = "MCP_HTTP_TOOLS_REDIRECTS", value_enum, default_value_t = RedirectsArg::Follow)]
    pub redirects: RedirectsArg,

    /// Per-request timeout in seconds (0 = none).
    #[arg(long, env = "MCP_HTTP_TOOLS_REQUEST_TIMEOUT_SECS", default_value_t = 0)]
    pub request_timeout_secs: u64,

    /// Reject responses whose body exceeds this many bytes.
    #[arg(long, env = "MCP_HTTP_TOOLS_MAX_RESPONSE_BYTES")]
    pub max_response_bytes: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RedirectsArg {
    Follow,
    None,
}

impl Args {
    #[must_use]
    pub fn transport_options(&self) -> TransportOptions {
        TransportOptions {
            redirects: match self.redirects {
                RedirectsArg::Follow => RedirectPolicy::Follow,
                RedirectsArg::None => RedirectPolicy::None,
            },
            timeout: match self.request_timeout_secs {
                0 => None,
                secs => Some(Duration::from_secs(secs)),
            },
            max_response_bytes: self.max_response_bytes,
        }
    }
}
