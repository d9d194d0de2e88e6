use async_trait::async_trait;
use fred::prelude::*;
use fred::types::Expiration;

use crate::cache::CacheStore;
use crate::error::cache::CacheError;

/// Valkey/Redis-backed cache store on a shared fred pool.
#[derive(Clone)]
pub struct ValkeyCache {
    pool: Pool,
}

impl ValkeyCache {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CacheStore for ValkeyCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let value: Option<String> = self.pool.get(key).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str, ttl_ms: u64) -> Result<(), CacheError> {
        let _: () = self
            .pool
            .set(key, value, Some(Expiration::PX(ttl_ms as i64)), None, false)
            .await?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        let _: u64 = self.pool.del(key).await?;
        Ok(())
    }
}
