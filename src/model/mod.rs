//! Shared data models: wire envelope, domain records, snapshot, and API DTOs.

pub mod api;
pub mod app;
pub mod entity;
pub mod envelope;
pub mod pools;
