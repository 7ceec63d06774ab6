//! Viewer-request emulation
//!
//! Accepts the same JSON the CDN would hand the edge hook (wrapped event or
//! bare request) and returns what the hook would return. Useful for checking
//! a deployment's configuration without going through the CDN.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use hostredirect_shared::invoke_json;

use crate::{error::ApiResult, state::AppState};

/// POST /_edge/viewer-request
pub async fn viewer_request(State(state): State<AppState>, body: String) -> ApiResult<Response> {
    let output = invoke_json(&state.redirector, &body).await?;
    Ok(([(header::CONTENT_TYPE, "application/json")], output).into_response())
}
