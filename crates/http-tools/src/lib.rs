//! Generic HTTP verb tools + runtime.
//!
//! Five tools (`http_get`, `http_post`, `http_put`, `http_delete`, `http_patch`) issue exactly one
//! outbound request each and normalize the response into either the parsed JSON body or a
//! `{ text, status_code, headers }` envelope.
//!
//! This crate is used by `mcp-http-tools-adapter`, which serves the tools over MCP. It contains
//! **no** retry, caching, or authentication logic: headers are passed through as given.

pub mod envelope;
pub mod registry;
pub mod request;
pub mod runtime;
pub mod semantics;
pub mod transport;
pub mod verb;

pub use envelope::{ResponseEnvelope, TextEnvelope};
pub use registry::{VERB_TOOLS, VerbTool};
pub use request::{BodyRequest, GetRequest};
pub use runtime::{HttpToolsError, HttpVerbAdapter, Result};
pub use transport::{RedirectPolicy, TransportOptions};
pub use verb::{HttpVerb, PayloadPlacement};
