//! HTTP controller endpoints for the Stockpot seed-data API.
//!
//! This module contains Axum handlers for the data-pools surface. Controllers
//! handle HTTP requests, delegate to the pool orchestrator, and return
//! appropriate HTTP responses. They use utoipa for OpenAPI documentation.

pub mod data_pools;
