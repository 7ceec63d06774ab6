//! hostredirect API Library
//!
//! HTTP surface for the canonical-host redirect: the redirect middleware,
//! health probes, and a local viewer-request emulation endpoint.

pub mod config;
pub mod error;
pub mod logging;
pub mod routes;
pub mod routing;
pub mod state;

pub use config::Config;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use routing::canonical_host_middleware;
pub use state::AppState;
