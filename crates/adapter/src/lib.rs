//! MCP adapter serving the generic HTTP verb tools over streamable HTTP.

pub mod config;
pub mod error;
pub mod logging;
pub mod server;

pub use error::{AdapterError, Result};
pub use server::{HttpToolsServer, build_router};
