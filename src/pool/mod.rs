//! Entity pool orchestrator.
//!
//! The orchestrator ensures a minimum population of every entity kind exists in
//! the remote backend, generating and submitting randomized records for whatever
//! is missing, strictly in dependency order. The aggregated result is cached
//! under a single key with a TTL.
//!
//! ## Error absorption
//! Per-pool and per-record failures never escape: a failed read degrades the pool
//! to empty, a failed write counts as a failed generation attempt, and both are
//! logged as warnings. Only unexpected failures in the top-level aggregate path
//! (snapshot serialization, cache deletion during an explicit refresh) propagate
//! as [`Error`].
//!
//! ## Concurrency
//! One orchestration pass is strictly sequential; the design is not safe against
//! overlapping passes (a manual refresh racing the growth loop can over-generate).
//! That race is accepted and intentionally not mitigated with a lock.

mod outcome;
mod pipeline;

#[cfg(test)]
mod tests;

pub use outcome::{PoolOutcome, PoolSource};

use std::sync::Arc;

use crate::backend::{paths, BackendClient};
use crate::cache::CacheStore;
use crate::config::{DEFAULT_CACHE_TTL_SECONDS, DEFAULT_MINIMUM_POOL_SIZE};
use crate::generator::generate_admin;
use crate::model::entity::{Admin, AdminRole, FWallet, PoolRecord};

/// Cache key for the aggregated data-pools snapshot.
pub const DATA_POOLS_CACHE_KEY: &str = "stockpot:data_pools";

/// TTL for cached wallet states refreshed after wallet-paid orders (2 hours).
pub const WALLET_CACHE_TTL_MS: u64 = 2 * 60 * 60 * 1000;

/// Cache key for a user's wallet state.
pub fn fwallet_cache_key(user_id: &str) -> String {
    format!("stockpot:fwallet:{user_id}")
}

pub struct PoolSettings {
    /// Target minimum population per bulk pool (singleton roles are always 1).
    pub minimum_pool_size: usize,
    /// TTL for the aggregated snapshot, in milliseconds.
    pub cache_ttl_ms: u64,
    /// Cache key for the snapshot (overridable for test isolation).
    pub cache_key: String,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            minimum_pool_size: DEFAULT_MINIMUM_POOL_SIZE,
            cache_ttl_ms: DEFAULT_CACHE_TTL_SECONDS * 1000,
            cache_key: DATA_POOLS_CACHE_KEY.to_string(),
        }
    }
}

pub struct PoolOrchestrator {
    backend: BackendClient,
    cache: Arc<dyn CacheStore>,
    settings: PoolSettings,
}

impl PoolOrchestrator {
    pub fn new(backend: BackendClient, cache: Arc<dyn CacheStore>) -> Self {
        Self::with_settings(backend, cache, PoolSettings::default())
    }

    pub fn with_settings(
        backend: BackendClient,
        cache: Arc<dyn CacheStore>,
        settings: PoolSettings,
    ) -> Self {
        Self {
            backend,
            cache,
            settings,
        }
    }

    pub fn settings(&self) -> &PoolSettings {
        &self.settings
    }

    /// Ensures at least the configured minimum of one entity kind exists.
    ///
    /// Reads the current pool from `read_path`; a read failure or malformed
    /// response degrades to an empty current pool rather than erroring. When the
    /// current count already meets the minimum, the first `minimum` records are
    /// returned unmodified, in backend order, with zero writes issued. Otherwise
    /// up to `needed × 2` generate+submit cycles run against `write_path`,
    /// stopping early once `needed` creations succeed. The returned records are
    /// `existing ++ created`, in that order.
    pub async fn ensure_pool<T, G>(
        &self,
        name: &str,
        read_path: &str,
        write_path: &str,
        generator: G,
    ) -> PoolOutcome<T>
    where
        T: PoolRecord,
        G: Fn() -> T,
    {
        let (mut existing, read_failed) = match self.backend.get_list::<T>(read_path).await {
            Ok(records) => (records, false),
            Err(e) => {
                tracing::warn!("Reading {} pool failed, treating as empty: {}", name, e);
                (Vec::new(), true)
            }
        };

        let minimum = self.settings.minimum_pool_size;
        if existing.len() >= minimum {
            existing.truncate(minimum);
            return PoolOutcome::satisfied(existing);
        }

        let needed = minimum - existing.len();
        let (created, failed_attempts) = self
            .generate_records(name, write_path, &generator, needed)
            .await;

        if read_failed && created.is_empty() {
            return PoolOutcome::degraded();
        }

        let created_count = created.len();
        existing.extend(created);
        PoolOutcome::generated(existing, created_count, failed_attempts)
    }

    /// Ensures exactly one admin of `role` exists.
    ///
    /// The pool is queried through the role-filtered read endpoint and truncated
    /// to one record when already present. When absent, exactly one registration
    /// payload is synthesized and submitted once; a failed submission is logged
    /// and the pool degrades to empty, with no retry.
    pub async fn ensure_singleton(&self, role: AdminRole) -> PoolOutcome<Admin> {
        let read_path = paths::admin_by_role(role.discriminator());

        let existing = match self.backend.get_list::<Admin>(&read_path).await {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(
                    "Reading {} singleton failed, treating as absent: {}",
                    role.discriminator(),
                    e
                );
                Vec::new()
            }
        };

        if let Some(admin) = existing.into_iter().next() {
            return PoolOutcome::satisfied(vec![admin]);
        }

        let payload = generate_admin(role);
        let write_path = paths::register_admin(role.slug());

        match self.backend.register::<Admin, Admin>(&write_path, &payload).await {
            Ok(admin) => PoolOutcome::generated(vec![admin], 1, 0),
            Err(e) => {
                tracing::warn!("Registering {} failed: {}", role.discriminator(), e);
                PoolOutcome::degraded()
            }
        }
    }

    /// Unconditionally attempts `count` creations, bypassing the minimum check.
    ///
    /// Used by the background growth loop for incremental growth. The attempt cap
    /// and wallet side-effect handling match [`PoolOrchestrator::ensure_pool`].
    pub async fn generate_additional<T, G>(
        &self,
        name: &str,
        write_path: &str,
        generator: G,
        count: usize,
    ) -> PoolOutcome<T>
    where
        T: PoolRecord,
        G: Fn() -> T,
    {
        let (created, failed_attempts) = self
            .generate_records(name, write_path, &generator, count)
            .await;
        let created_count = created.len();
        PoolOutcome::generated(created, created_count, failed_attempts)
    }

    /// Runs generate+submit cycles until `target` creations succeed or
    /// `target × 2` attempts are spent. Returns the created records and the
    /// number of failed attempts.
    async fn generate_records<T, G>(
        &self,
        name: &str,
        write_path: &str,
        generator: &G,
        target: usize,
    ) -> (Vec<T>, usize)
    where
        T: PoolRecord,
        G: Fn() -> T,
    {
        let max_attempts = target * 2;
        let mut created = Vec::new();
        let mut failed_attempts = 0;
        let mut attempts = 0;

        while created.len() < target && attempts < max_attempts {
            attempts += 1;
            let payload = generator();

            match self.backend.create::<T, T>(write_path, &payload).await {
                Ok(record) => {
                    self.refresh_wallets_after(&payload).await;
                    created.push(record);
                }
                Err(e) => {
                    failed_attempts += 1;
                    tracing::warn!(
                        "Creating {} record failed (attempt {}/{}): {}",
                        name,
                        attempts,
                        max_attempts,
                        e
                    );
                }
            }
        }

        (created, failed_attempts)
    }

    /// Re-fetches and caches wallet states after a wallet-paid creation.
    ///
    /// A wallet-paid order bumps the wallet versions of the customer, the
    /// restaurant, and the platform finance account on the backend, but the
    /// creation response does not surface the new states; they are fetched here
    /// and cached for 2 hours. Each read is cached on its own success, so a
    /// single failed read costs one cache write, not all three.
    async fn refresh_wallets_after<T: PoolRecord>(&self, payload: &T) {
        let Some(parties) = payload.wallet_parties() else {
            return;
        };

        let mut user_ids: Vec<String> = Vec::with_capacity(3);
        match parties.customer_id {
            Some(id) => user_ids.push(id),
            None => tracing::warn!("Wallet-paid order has no customer; skipping customer wallet"),
        }
        match parties.restaurant_id {
            Some(id) => user_ids.push(id),
            None => {
                tracing::warn!("Wallet-paid order has no restaurant; skipping restaurant wallet")
            }
        }
        user_ids.push(paths::PLATFORM_FINANCE_USER_ID.to_string());

        for user_id in user_ids {
            let path = paths::fwallet_by_user(&user_id);
            let wallet = match self.backend.get_one::<FWallet>(&path).await {
                Ok(wallet) => wallet,
                Err(e) => {
                    tracing::warn!("Fetching wallet for {} failed: {}", user_id, e);
                    continue;
                }
            };

            let json = match serde_json::to_string(&wallet) {
                Ok(json) => json,
                Err(e) => {
                    tracing::warn!("Serializing wallet for {} failed: {}", user_id, e);
                    continue;
                }
            };

            if let Err(e) = self
                .cache
                .set(&fwallet_cache_key(&user_id), &json, WALLET_CACHE_TTL_MS)
                .await
            {
                tracing::warn!("Caching wallet for {} failed: {}", user_id, e);
            }
        }
    }
}
