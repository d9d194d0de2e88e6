use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::error::InternalServerError;

/// Errors raised while talking to the remote FlashFood backend.
///
/// The pool orchestrator absorbs every variant of this type: a failed read degrades
/// to an empty pool, a failed write counts as a failed generation attempt. These
/// errors only propagate to callers of the raw [`BackendClient`] methods.
///
/// [`BackendClient`]: crate::backend::BackendClient
#[derive(Error, Debug)]
pub enum BackendError {
    /// Transport-level failure (connection refused, timeout, invalid body).
    #[error("Request to backend path {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },
    /// The backend answered, but the envelope carried a non-zero error code.
    #[error("Backend path {path} returned error code {code}: {message}")]
    Envelope {
        path: String,
        code: i64,
        message: String,
    },
    /// The envelope's `data` field did not have the expected shape.
    #[error("Backend path {path} returned malformed data: {reason}")]
    MalformedData { path: String, reason: String },
}

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
