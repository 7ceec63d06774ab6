//! hostredirect Shared Types and Redirect Policy
//!
//! This crate contains the canonical-host redirect decision, the viewer-request
//! event types it operates on, and the edge-runtime adapters that expose it.

pub mod adapter;
pub mod error;
pub mod redirect;
pub mod types;

pub use adapter::{handler, invoke_json, viewer_request};
pub use error::*;
pub use redirect::{HostRedirector, CANONICAL_ORIGIN, LEGACY_HOST};
pub use types::*;
