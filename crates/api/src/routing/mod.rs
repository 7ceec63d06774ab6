//! Host-based routing
//!
//! Requests for the legacy apex host never reach a handler; they are
//! answered with a permanent redirect to the canonical origin.

mod canonical_host;

pub use canonical_host::{canonical_host_middleware, into_http_response};
