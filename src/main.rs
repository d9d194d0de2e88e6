use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use stockpot::{
    config::Config,
    growth::GrowthLoop,
    model::app::AppState,
    pool::{PoolOrchestrator, PoolSettings, DATA_POOLS_CACHE_KEY},
    router, startup,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let backend = startup::build_backend_client(&config);
    let cache = startup::connect_to_cache(&config)
        .await
        .expect("Failed to connect to Valkey");

    let orchestrator = Arc::new(PoolOrchestrator::with_settings(
        backend,
        Arc::new(cache),
        PoolSettings {
            minimum_pool_size: config.minimum_pool_size,
            cache_ttl_ms: config.cache_ttl_seconds * 1000,
            cache_key: DATA_POOLS_CACHE_KEY.to_string(),
        },
    ));

    tracing::info!("Running initial data pool pass");
    let pools = orchestrator
        .ensure_data_pools()
        .await
        .expect("Initial data pool pass failed");
    tracing::info!(
        "Data pools ready with {} records across all pools",
        pools.total_records()
    );

    // Growth only starts once the initial pass has populated every pool.
    let mut growth = GrowthLoop::new(Arc::clone(&orchestrator), config.growth_cron.clone())
        .await
        .expect("Failed to create growth loop");
    growth.start().await.expect("Failed to start growth loop");

    let app = router::routes().with_state(AppState { orchestrator });

    let listener = tokio::net::TcpListener::bind(&config.listen_address)
        .await
        .expect("Failed to bind listen address");
    tracing::info!("Listening on {}", config.listen_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    if let Err(e) = growth.shutdown().await {
        tracing::error!("Failed to stop growth loop cleanly: {:?}", e);
    }
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
