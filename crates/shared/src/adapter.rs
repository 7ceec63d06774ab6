//! Edge-runtime entry points
//!
//! Edge runtimes disagree on calling convention: some pass a wrapped
//! `{ request }` event to an async handler, others pass the bare request to a
//! plain function. Both entry points here delegate to
//! [`HostRedirector::handle`], so behavior is identical either way.

use serde_json::Value;

use crate::error::EdgeError;
use crate::redirect::HostRedirector;
use crate::types::{ViewerOutcome, ViewerRequest, ViewerRequestEvent};

/// Async entry point taking the wrapped event.
pub async fn viewer_request(
    redirector: &HostRedirector,
    event: ViewerRequestEvent,
) -> ViewerOutcome {
    redirector.handle(event.request)
}

/// Synchronous entry point taking the bare request.
pub fn handler(redirector: &HostRedirector, request: ViewerRequest) -> ViewerOutcome {
    redirector.handle(request)
}

/// Run one invocation given as JSON and return the outcome as JSON.
///
/// A top-level `request` object selects the wrapped-event form; anything
/// else is decoded as a bare request.
pub async fn invoke_json(redirector: &HostRedirector, input: &str) -> Result<String, EdgeError> {
    let value: Value = serde_json::from_str(input).map_err(EdgeError::Decode)?;

    let outcome = if value.get("request").is_some_and(Value::is_object) {
        let event: ViewerRequestEvent = serde_json::from_value(value).map_err(EdgeError::Decode)?;
        viewer_request(redirector, event).await
    } else {
        let request: ViewerRequest = serde_json::from_value(value).map_err(EdgeError::Decode)?;
        handler(redirector, request)
    };

    serde_json::to_string(&outcome).map_err(EdgeError::Encode)
}
