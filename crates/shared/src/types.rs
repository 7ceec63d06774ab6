//! Viewer-request event types
//!
//! These mirror the object shapes an edge runtime hands to a viewer-request
//! hook and expects back from it. Fields this crate does not interpret are
//! kept in `extra` so a passed-through request serializes exactly as it
//! arrived.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Header map keyed by lower-cased header name.
pub type Headers = BTreeMap<String, HeaderEntry>;

// =============================================================================
// Headers
// =============================================================================

/// A single header as the edge runtime represents it: `{ "value": "..." }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderEntry {
    pub value: String,
    /// Platform extras such as `multiValue`
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HeaderEntry {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            extra: Map::new(),
        }
    }
}

// =============================================================================
// Request
// =============================================================================

/// Inbound request as seen by a viewer-request hook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerRequest {
    /// Left as `None` when the platform omits the field, so it is not
    /// invented on the way back out
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<Headers>,
    /// Path plus query string
    pub uri: String,
    /// `method`, `querystring`, `cookies` and anything else the platform sends
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ViewerRequest {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            headers: None,
            uri: uri.into(),
            extra: Map::new(),
        }
    }

    /// Builder-style header insert; the name is stored lower-cased.
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(Headers::new)
            .insert(name.to_ascii_lowercase(), HeaderEntry::new(value));
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .as_ref()?
            .get(&name.to_ascii_lowercase())
            .map(|entry| entry.value.as_str())
    }

    pub fn host(&self) -> Option<&str> {
        self.header("host")
    }
}

/// Wrapped invocation shape: `{ "request": { ... }, ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerRequestEvent {
    pub request: ViewerRequest,
    /// `version`, `context`, `viewer`
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<ViewerRequest> for ViewerRequestEvent {
    fn from(request: ViewerRequest) -> Self {
        Self {
            request,
            extra: Map::new(),
        }
    }
}

// =============================================================================
// Response
// =============================================================================

/// Response synthesized at the edge instead of forwarding to origin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedirectResponse {
    pub status_code: u16,
    pub status_description: String,
    pub headers: Headers,
}

impl RedirectResponse {
    pub fn location(&self) -> Option<&str> {
        self.headers.get("location").map(|entry| entry.value.as_str())
    }
}

/// What a viewer-request hook hands back to the runtime.
///
/// Serialized untagged: the wire form is exactly the response object or the
/// request object. Not deserializable, since a request carrying
/// `statusCode` would be indistinguishable from a redirect.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ViewerOutcome {
    Redirect(RedirectResponse),
    Continue(ViewerRequest),
}

impl ViewerOutcome {
    pub fn is_redirect(&self) -> bool {
        matches!(self, ViewerOutcome::Redirect(_))
    }

    pub fn as_redirect(&self) -> Option<&RedirectResponse> {
        match self {
            ViewerOutcome::Redirect(response) => Some(response),
            ViewerOutcome::Continue(_) => None,
        }
    }

    pub fn into_request(self) -> Option<ViewerRequest> {
        match self {
            ViewerOutcome::Continue(request) => Some(request),
            ViewerOutcome::Redirect(_) => None,
        }
    }
}
