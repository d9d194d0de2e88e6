use crate::{
    backend::BackendClient,
    cache::ValkeyCache,
    config::Config,
    error::{cache::CacheError, Error},
};

/// Build the HTTP client for the remote FlashFood backend
pub fn build_backend_client(config: &Config) -> BackendClient {
    BackendClient::new(&config.backend_url)
}

/// Connect to Valkey/Redis for snapshot and wallet caching
pub async fn connect_to_cache(config: &Config) -> Result<ValkeyCache, Error> {
    use fred::prelude::{ClientLike, Config as ValkeyConfig, Pool};

    let valkey_config = ValkeyConfig::from_url(&config.valkey_url).map_err(CacheError::from)?;
    let pool = Pool::new(valkey_config, None, None, None, 6).map_err(CacheError::from)?;

    pool.connect();
    pool.wait_for_connect().await.map_err(CacheError::from)?;

    Ok(ValkeyCache::new(pool))
}
