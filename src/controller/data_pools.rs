use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    error::Error,
    model::{
        api::{DataPoolsDto, ErrorDto},
        app::AppState,
    },
};

pub static DATA_POOLS_TAG: &str = "data-pools";

/// Get the current aggregate snapshot of every seeded entity pool.
///
/// Serves the cached snapshot when one is present; otherwise runs a full
/// ensure pass first, so the response always reflects a populated backend.
#[utoipa::path(
    get,
    path = "/data-pools",
    tag = DATA_POOLS_TAG,
    responses(
        (status = 200, description = "Success when retrieving the data pools", body = DataPoolsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_data_pools(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let pools = state.orchestrator.ensure_data_pools().await?;

    Ok((
        StatusCode::OK,
        axum::Json(DataPoolsDto::ok(pools, "Data pools are populated")),
    ))
}

/// Run an ensure pass over every entity pool.
///
/// Identical to the GET endpoint in effect, provided for callers that want an
/// explicit side-effecting verb. A warm cache makes this a no-op.
#[utoipa::path(
    post,
    path = "/data-pools/ensure",
    tag = DATA_POOLS_TAG,
    responses(
        (status = 200, description = "Success when ensuring the data pools", body = DataPoolsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn ensure_data_pools(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let pools = state.orchestrator.ensure_data_pools().await?;

    Ok((
        StatusCode::OK,
        axum::Json(DataPoolsDto::ok(pools, "Data pools are populated")),
    ))
}

/// Discard the cached snapshot and recompute every pool from the backend.
#[utoipa::path(
    post,
    path = "/data-pools/refresh",
    tag = DATA_POOLS_TAG,
    responses(
        (status = 200, description = "Success when refreshing the data pools", body = DataPoolsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn refresh_data_pools(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let pools = state.orchestrator.refresh_pools().await?;

    Ok((
        StatusCode::OK,
        axum::Json(DataPoolsDto::ok(pools, "Data pools were refreshed")),
    ))
}
