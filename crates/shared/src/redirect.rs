//! Canonical-host redirect policy
//!
//! Requests addressed to the legacy apex host are answered with a permanent
//! redirect to the same path on the canonical "www" origin. Everything else
//! continues to origin untouched:
//! - garrettdavis.dev/posts/foo?x=1 -> 301 https://www.garrettdavis.dev/posts/foo?x=1
//! - www.garrettdavis.dev/...        -> pass through
//! - any other host, or no host      -> pass through

use crate::types::{HeaderEntry, Headers, RedirectResponse, ViewerOutcome, ViewerRequest};

/// Apex hostname that is redirected away from
pub const LEGACY_HOST: &str = "garrettdavis.dev";

/// Scheme and host every redirect points at
pub const CANONICAL_ORIGIN: &str = "https://www.garrettdavis.dev";

const MOVED_PERMANENTLY: u16 = 301;
const MOVED_PERMANENTLY_DESCRIPTION: &str = "Moved Permanently";

/// Stateless host redirector.
///
/// Immutable after construction, so one instance can be cloned into or
/// shared between any number of concurrent invocations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostRedirector {
    legacy_host: String,
    canonical_origin: String,
}

impl Default for HostRedirector {
    fn default() -> Self {
        Self::new(LEGACY_HOST, CANONICAL_ORIGIN)
    }
}

impl HostRedirector {
    /// `canonical_origin` is scheme + host with no trailing slash; the request
    /// uri is appended to it as-is.
    pub fn new(legacy_host: impl Into<String>, canonical_origin: impl Into<String>) -> Self {
        Self {
            legacy_host: legacy_host.into(),
            canonical_origin: canonical_origin.into(),
        }
    }

    pub fn legacy_host(&self) -> &str {
        &self.legacy_host
    }

    pub fn canonical_origin(&self) -> &str {
        &self.canonical_origin
    }

    /// Exact, case-sensitive comparison against the legacy host.
    pub fn matches(&self, host: Option<&str>) -> bool {
        host == Some(self.legacy_host.as_str())
    }

    /// Redirect target for `uri`. Path and query are kept byte-for-byte.
    pub fn location_for(&self, uri: &str) -> String {
        let mut location = String::with_capacity(self.canonical_origin.len() + uri.len());
        location.push_str(&self.canonical_origin);
        location.push_str(uri);
        location
    }

    /// The redirect decision.
    ///
    /// Returns `Some` with a fresh 301 response when `host` is the legacy
    /// host, `None` when the request should continue to origin.
    pub fn redirect_for(&self, host: Option<&str>, uri: &str) -> Option<RedirectResponse> {
        if !self.matches(host) {
            return None;
        }

        let mut headers = Headers::new();
        headers.insert("location".to_string(), HeaderEntry::new(self.location_for(uri)));

        Some(RedirectResponse {
            status_code: MOVED_PERMANENTLY,
            status_description: MOVED_PERMANENTLY_DESCRIPTION.to_string(),
            headers,
        })
    }

    /// Apply the policy to a viewer request, handing the request back
    /// unchanged when no redirect applies.
    pub fn handle(&self, request: ViewerRequest) -> ViewerOutcome {
        match self.redirect_for(request.host(), &request.uri) {
            Some(response) => ViewerOutcome::Redirect(response),
            None => ViewerOutcome::Continue(request),
        }
    }
}
