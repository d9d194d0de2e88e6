//! Behavior tests for the pool orchestrator.

mod ensure_data_pools;
