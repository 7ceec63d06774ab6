//! Error types for hostredirect

use thiserror::Error;

/// Errors raised at the JSON invocation boundary.
///
/// The redirect decision itself cannot fail; only decoding the platform's
/// event and encoding the outcome can.
#[derive(Debug, Error)]
pub enum EdgeError {
    #[error("Invalid viewer-request event: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Failed to encode viewer-request outcome: {0}")]
    Encode(#[source] serde_json::Error),
}
