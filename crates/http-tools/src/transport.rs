//! Outbound HTTP client options (redirects, timeout, body limit) and error redaction.
//!
//! The verb tools expose no transport knobs to callers. These options are process-level and
//! chosen once when the adapter is built.

use crate::runtime::HttpToolsError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RedirectPolicy {
    /// Follow redirects (reqwest default: up to 10 hops).
    #[default]
    Follow,
    /// Do not follow redirects. A 3xx response is returned to the caller as-is.
    None,
}

#[derive(Debug, Clone, Default)]
pub struct TransportOptions {
    pub redirects: RedirectPolicy,
    /// Per-request timeout. `None` = no timeout beyond what the OS imposes.
    pub timeout: Option<Duration>,
    /// Maximum response body size (bytes). `None` = unlimited.
    pub max_response_bytes: Option<usize>,
}

impl TransportOptions {
    /// Build the shared HTTP client for these options.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying client cannot be constructed (e.g. TLS backend init).
    pub fn build_client(&self) -> Result<Client, HttpToolsError> {
        let mut builder = Client::builder();
        if self.redirects == RedirectPolicy::None {
            builder = builder.redirect(reqwest::redirect::Policy::none());
        }
        if let Some(t) = self.timeout {
            builder = builder.timeout(t);
        }
        builder
            .build()
            .map_err(|e| HttpToolsError::Config(format!("cannot build HTTP client: {e}")))
    }
}

#[must_use]
pub fn redact_url(url: &Url) -> String {
    let mut u = url.clone();
    // Best-effort: drop credentials + query + fragment.
    let _ = u.set_username("");
    let _ = u.set_password(None);
    u.set_query(None);
    u.set_fragment(None);
    u.to_string()
}

#[must_use]
pub fn sanitize_reqwest_error(e: &reqwest::Error) -> String {
    let mut msg = e.to_string();
    if let Some(u) = e.url() {
        msg = msg.replace(u.as_str(), &redact_url(u));
    }
    msg
}
