//! Key-value cache store with TTL semantics.
//!
//! The orchestrator only needs three operations — `get`, `set`-with-TTL, and
//! `delete` — so the store is modeled as a small object-safe trait. Production
//! uses [`ValkeyCache`] on a fred pool; tests use [`MemoryCache`].

mod memory;
mod valkey;

pub use memory::MemoryCache;
pub use valkey::ValkeyCache;

use async_trait::async_trait;

use crate::error::cache::CacheError;

#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Returns the cached value for `key`, or `None` when absent or expired.
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Stores `value` under `key`, expiring after `ttl_ms` milliseconds.
    async fn set(&self, key: &str, value: &str, ttl_ms: u64) -> Result<(), CacheError>;

    /// Removes `key`; removing an absent key is not an error.
    async fn delete(&self, key: &str) -> Result<(), CacheError>;
}
