//! Canonical-host redirect middleware
//!
//! Applies the same decision the edge hook makes to requests arriving at this
//! server directly, so the policy holds even when the CDN is bypassed.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, uri::PathAndQuery, HeaderName, HeaderValue, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use hostredirect_shared::{HostRedirector, RedirectResponse};

/// Middleware that redirects the legacy host and forwards everything else
pub async fn canonical_host_middleware(
    State(redirector): State<Arc<HostRedirector>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    // HTTP/2 carries the host in :authority rather than a Host header
    let host = request
        .headers()
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .or_else(|| request.uri().authority().map(|authority| authority.as_str()));
    let uri = request
        .uri()
        .path_and_query()
        .map(PathAndQuery::as_str)
        .unwrap_or("");

    if let Some(redirect) = redirector.redirect_for(host, uri) {
        tracing::debug!(
            host = host.unwrap_or_default(),
            location = redirect.location().unwrap_or_default(),
            "Redirecting to canonical host"
        );
        return into_http_response(&redirect);
    }

    next.run(request).await
}

/// Render an edge redirect as an HTTP response
pub fn into_http_response(redirect: &RedirectResponse) -> Response {
    let status = StatusCode::from_u16(redirect.status_code).unwrap_or(StatusCode::MOVED_PERMANENTLY);
    let mut response = status.into_response();

    for (name, entry) in &redirect.headers {
        match (
            HeaderName::try_from(name.as_str()),
            HeaderValue::from_bytes(entry.value.as_bytes()),
        ) {
            (Ok(name), Ok(value)) => {
                response.headers_mut().insert(name, value);
            }
            _ => tracing::warn!(header = %name, "Dropping unrepresentable redirect header"),
        }
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{middleware, routing::get, Router};
    use tower::ServiceExt;

    async fn test_handler() -> &'static str {
        "origin"
    }

    fn app() -> Router {
        Router::new()
            .route("/", get(test_handler))
            .route("/posts/foo", get(test_handler))
            .layer(middleware::from_fn_with_state(
                Arc::new(HostRedirector::default()),
                canonical_host_middleware,
            ))
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_legacy_host_is_redirected() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/posts/foo?x=1")
                    .header("host", "garrettdavis.dev")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(
            response.headers().get("location").unwrap(),
            "https://www.garrettdavis.dev/posts/foo?x=1"
        );
    }

    #[tokio::test]
    async fn test_unknown_path_on_legacy_host_is_still_redirected() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/missing")
                    .header("host", "garrettdavis.dev")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(
            response.headers().get("location").unwrap(),
            "https://www.garrettdavis.dev/missing"
        );
    }

    #[tokio::test]
    async fn test_authority_used_without_host_header() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("http://garrettdavis.dev/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(
            response.headers().get("location").unwrap(),
            "https://www.garrettdavis.dev/"
        );
    }

    #[tokio::test]
    async fn test_other_hosts_reach_origin() {
        for host in ["www.garrettdavis.dev", "example.com", "GARRETTDAVIS.DEV"] {
            let response = app()
                .oneshot(
                    Request::builder()
                        .uri("/")
                        .header("host", host)
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK, "host {}", host);
            assert!(response.headers().get("location").is_none());
            assert_eq!(body_text(response).await, "origin");
        }
    }

    #[tokio::test]
    async fn test_missing_host_reaches_origin() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_non_utf8_host_is_treated_as_absent() {
        let mut request = Request::builder().uri("/").body(Body::empty()).unwrap();
        request.headers_mut().insert(
            header::HOST,
            HeaderValue::from_bytes(b"garrettdavis.dev\xff").unwrap(),
        );

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get("location").is_none());
        assert_eq!(body_text(response).await, "origin");
    }

    #[tokio::test]
    async fn test_non_utf8_host_falls_back_to_authority() {
        let mut request = Request::builder()
            .uri("http://garrettdavis.dev/")
            .body(Body::empty())
            .unwrap();
        request.headers_mut().insert(
            header::HOST,
            HeaderValue::from_bytes(b"garrettdavis.dev\xff").unwrap(),
        );

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(
            response.headers().get("location").unwrap(),
            "https://www.garrettdavis.dev/"
        );
    }

    #[test]
    fn test_into_http_response_copies_headers() {
        let redirect = HostRedirector::default()
            .redirect_for(Some("garrettdavis.dev"), "/a?b=c")
            .unwrap();
        let response = into_http_response(&redirect);

        assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "https://www.garrettdavis.dev/a?b=c"
        );
    }
}
