use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::error::InternalServerError;

/// Errors raised by the cache store layer.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Valkey/Redis client error (connection, command execution).
    #[error(transparent)]
    Client(#[from] fred::prelude::Error),
}

impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
