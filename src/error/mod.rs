//! Error types for the Stockpot seed-data service.
//!
//! This module provides a unified error handling system with specialized error types
//! for each domain (remote backend calls, cache store access, configuration). All
//! errors implement `IntoResponse` for Axum HTTP responses and use `thiserror` for
//! ergonomic error definitions with automatic `Display` and `Error` trait
//! implementations.

pub mod backend;
pub mod cache;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{backend::BackendError, cache::CacheError, config::ConfigError},
    model::api::ErrorDto,
};

/// Main error type for the Stockpot service.
///
/// Aggregates all domain-specific error types into a single unified error type using
/// `thiserror`'s `#[from]` attribute for automatic conversion via the `?` operator.
/// Per the service's error taxonomy, almost nothing ever reaches this type during
/// pool orchestration: backend and cache failures are absorbed and logged at the
/// orchestrator layer. Errors that do surface here are either configuration problems
/// at startup or unexpected programming errors inside the top-level aggregate path,
/// which the HTTP layer reports as a generic failure envelope.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Remote backend error (transport failure, non-zero envelope code, bad shape).
    #[error(transparent)]
    BackendError(#[from] BackendError),
    /// Cache store error (connection, command execution).
    #[error(transparent)]
    CacheError(#[from] CacheError),
    /// Internal error indicating a bug in Stockpot's code.
    ///
    /// This error should never occur in normal operation and indicates a programming
    /// error that needs to be reported as a GitHub issue.
    #[error("Internal error with Stockpot's code, please open a GitHub issue as this indicates a bug: {0:?}")]
    InternalError(String),
    /// Cron scheduler error (job registration, scheduler startup).
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
}

/// Converts application errors into HTTP responses.
///
/// Every error class that escapes the orchestrator is a server-side failure as far
/// as API consumers are concerned, so all variants map to a logged 500 with a
/// generic message body.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error"
/// message to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
