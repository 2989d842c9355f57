//! Error type for Drive API operations.
//!
//! Not-found is never an error in this crate; lookups that come back empty
//! return `Ok(None)`. Errors cover transport faults, non-2xx API responses,
//! and malformed response bodies, and are propagated to the caller without
//! retries.

use thiserror::Error;

/// Errors surfaced by [`DriveApi`](crate::traits::DriveApi) implementations.
#[derive(Debug, Error)]
pub enum DriveError {
    /// HTTP transport failure (connection, DNS, timeout, TLS).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status (auth, quota, bad request).
    #[error("drive api error ({status}): {message}")]
    Api { status: u16, message: String },

    /// A response body could not be parsed.
    #[error("invalid response: {0}")]
    Json(#[from] serde_json::Error),
}
