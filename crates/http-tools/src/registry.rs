//! Static table of the verb tools, in the order hosts should register them.

use crate::verb::HttpVerb;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerbTool {
    pub name: &'static str,
    pub verb: HttpVerb,
    pub description: &'static str,
}

pub const HTTP_GET: &str = "http_get";
pub const HTTP_POST: &str = "http_post";
pub const HTTP_PUT: &str = "http_put";
pub const HTTP_DELETE: &str = "http_delete";
pub const HTTP_PATCH: &str = "http_patch";

/// GET, POST, PUT, DELETE, PATCH.
pub const VERB_TOOLS: [VerbTool; 5] = [
    VerbTool {
        name: HTTP_GET,
        verb: HttpVerb::Get,
        description: "Perform a GET request to the specified URL with optional headers and query parameters. Returns the JSON response body, or { text, status_code, headers } when the body is not JSON.",
    },
    VerbTool {
        name: HTTP_POST,
        verb: HttpVerb::Post,
        description: "Perform a POST request to the specified URL with optional headers and JSON body. Returns the JSON response body, or { text, status_code, headers } when the body is not JSON.",
    },
    VerbTool {
        name: HTTP_PUT,
        verb: HttpVerb::Put,
        description: "Perform a PUT request to the specified URL with optional headers and JSON body. Returns the JSON response body, or { text, status_code, headers } when the body is not JSON.",
    },
    VerbTool {
        name: HTTP_DELETE,
        verb: HttpVerb::Delete,
        description: "Perform a DELETE request to the specified URL with optional headers and JSON body. Returns the JSON response body, or { text, status_code, headers } when the body is not JSON.",
    },
    VerbTool {
        name: HTTP_PATCH,
        verb: HttpVerb::Patch,
        description: "Perform a PATCH request to the specified URL with optional headers and JSON body. Returns the JSON response body, or { text, status_code, headers } when the body is not JSON.",
    },
];

/// Look up a tool by its exposed name.
#[must_use]
pub fn find(name: &str) -> Option<&'static VerbTool> {
    VERB_TOOLS.iter().find(|t| t.name == name)
}

/// Look up the tool exposing `verb`.
#[must_use]
pub fn for_verb(verb: HttpVerb) -> &'static VerbTool {
    // VERB_TOOLS is indexed in `HttpVerb::ALL` order.
    &VERB_TOOLS[verb as usize]
}
