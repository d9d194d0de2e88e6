//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI
//! documentation using utoipa. All API endpoints are registered here with their
//! OpenAPI specifications, and Swagger UI is configured to provide interactive
//! API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI
/// documentation.
///
/// # Registered Endpoints
/// - `GET /data-pools` - Get the current aggregate snapshot
/// - `POST /data-pools/ensure` - Run an ensure pass over every pool
/// - `POST /data-pools/refresh` - Discard the cached snapshot and recompute
///
/// The OpenAPI specification is served at `/api/docs/openapi.json` and Swagger
/// UI at `/api/docs`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Stockpot", description = "Stockpot seed-data API"), tags(
        (name = controller::data_pools::DATA_POOLS_TAG, description = "Data pool API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::data_pools::get_data_pools))
        .routes(routes!(controller::data_pools::ensure_data_pools))
        .routes(routes!(controller::data_pools::refresh_data_pools))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
