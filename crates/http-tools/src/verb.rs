//! The five HTTP verbs exposed as tools, and where each one puts its optional payload.

use reqwest::Method;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpVerb {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

/// Where a verb attaches its optional caller-supplied payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadPlacement {
    /// Payload is a mapping appended to the URL query string. No request body is sent.
    Query,
    /// Payload is serialized as a JSON request body. Never touches the URL query.
    JsonBody,
}

impl HttpVerb {
    /// All verbs in tool enumeration order.
    pub const ALL: [HttpVerb; 5] = [
        HttpVerb::Get,
        HttpVerb::Post,
        HttpVerb::Put,
        HttpVerb::Delete,
        HttpVerb::Patch,
    ];

    #[must_use]
    pub fn method(self) -> Method {
        match self {
            HttpVerb::Get => Method::GET,
            HttpVerb::Post => Method::POST,
            HttpVerb::Put => Method::PUT,
            HttpVerb::Delete => Method::DELETE,
            HttpVerb::Patch => Method::PATCH,
        }
    }

    #[must_use]
    pub fn payload_placement(self) -> PayloadPlacement {
        match self {
            HttpVerb::Get => PayloadPlacement::Query,
            HttpVerb::Post | HttpVerb::Put | HttpVerb::Delete | HttpVerb::Patch => {
                PayloadPlacement::JsonBody
            }
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            HttpVerb::Get => "GET",
            HttpVerb::Post => "POST",
            HttpVerb::Put => "PUT",
            HttpVerb::Delete => "DELETE",
            HttpVerb::Patch => "PATCH",
        }
    }
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
