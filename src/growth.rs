//! Background growth loop.
//!
//! This module provides a cron-based job that simulates organic activity against
//! the remote backend: on each tick it probabilistically picks a few entity kinds
//! and asks the orchestrator to generate a small number of additional records for
//! each, spacing the calls out to avoid bursts. It also keeps the terminal-status
//! order floors topped up. The loop is only started after the initial
//! `ensure_data_pools` pass has completed, and is shut down cleanly on
//! termination.

use std::sync::Arc;
use std::time::Duration;

use rand::seq::IndexedRandom;
use rand::Rng;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::backend::paths;
use crate::error::Error;
use crate::generator::{
    generate_address_book, generate_customer, generate_customer_care, generate_driver,
    generate_food_category, generate_inquiry, generate_menu_item, generate_menu_item_variant,
    generate_order, generate_promotion, generate_rating_review, generate_restaurant,
};
use crate::model::pools::DataPools;
use crate::pool::{PoolOrchestrator, PoolSource};

/// Chance per tick that any incremental generation happens at all.
const GROWTH_PROBABILITY: f64 = 0.3;
/// Chance per tick that the terminal-status order floors are re-checked.
const SPECIAL_STATUS_PROBABILITY: f64 = 0.8;
/// Inclusive bounds for the number of distinct kinds grown per tick.
const KINDS_PER_TICK: std::ops::RangeInclusive<usize> = 1..=3;
/// Inclusive bounds for the number of records generated per kind.
const RECORDS_PER_KIND: std::ops::RangeInclusive<usize> = 1..=3;
/// Inclusive bounds, in seconds, for the pause between two kinds' generation
/// calls, spreading load on the remote backend.
const DELAY_BETWEEN_KINDS_SECS: std::ops::RangeInclusive<u64> = 5..=15;

/// Entity kinds eligible for incremental growth.
///
/// Admins and finance rules are excluded: singleton roles never grow, and
/// finance rules only change through operator action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowthKind {
    AddressBook,
    FoodCategory,
    Restaurant,
    MenuItem,
    MenuItemVariant,
    Promotion,
    Driver,
    Customer,
    CustomerCare,
    Order,
    CustomerCareInquiry,
    RatingReview,
}

const GROWTH_CANDIDATES: &[GrowthKind] = &[
    GrowthKind::AddressBook,
    GrowthKind::FoodCategory,
    GrowthKind::Restaurant,
    GrowthKind::MenuItem,
    GrowthKind::MenuItemVariant,
    GrowthKind::Promotion,
    GrowthKind::Driver,
    GrowthKind::Customer,
    GrowthKind::CustomerCare,
    GrowthKind::Order,
    GrowthKind::CustomerCareInquiry,
    GrowthKind::RatingReview,
];

/// Cron-driven growth loop owning its scheduler.
pub struct GrowthLoop {
    orchestrator: Arc<PoolOrchestrator>,
    sched: JobScheduler,
    cron: String,
}

impl GrowthLoop {
    /// Creates a new instance of [`GrowthLoop`] ticking on the given cron
    /// expression. Nothing runs until [`GrowthLoop::start`] is called.
    pub async fn new(
        orchestrator: Arc<PoolOrchestrator>,
        cron: impl Into<String>,
    ) -> Result<Self, Error> {
        let sched = JobScheduler::new().await?;
        Ok(Self {
            orchestrator,
            sched,
            cron: cron.into(),
        })
    }

    /// Registers the tick job and starts the scheduler.
    ///
    /// Callers must have completed the initial `ensure_data_pools` pass first;
    /// ticks assume the snapshot is available (or cheaply recomputable) and that
    /// every pool's dependencies already exist.
    pub async fn start(&mut self) -> Result<(), Error> {
        let orchestrator = Arc::clone(&self.orchestrator);

        self.sched
            .add(Job::new_async(self.cron.as_str(), move |_, _| {
                let orchestrator = Arc::clone(&orchestrator);
                Box::pin(async move {
                    run_tick(&orchestrator).await;
                })
            })?)
            .await?;

        self.sched.start().await?;
        tracing::info!("Growth loop started ({})", self.cron);

        Ok(())
    }

    /// Cancels the tick timer. In-flight tick work finishes on its own.
    pub async fn shutdown(&mut self) -> Result<(), Error> {
        self.sched.shutdown().await?;
        tracing::info!("Growth loop stopped");
        Ok(())
    }
}

async fn run_tick(orchestrator: &PoolOrchestrator) {
    let pools = match orchestrator.ensure_data_pools().await {
        Ok(pools) => pools,
        Err(e) => {
            tracing::error!("Growth tick could not resolve data pools: {:?}", e);
            return;
        }
    };

    for (i, (kind, count)) in plan_tick().into_iter().enumerate() {
        if i > 0 {
            let delay = rand::rng().random_range(DELAY_BETWEEN_KINDS_SECS);
            tokio::time::sleep(Duration::from_secs(delay)).await;
        }
        grow_kind(orchestrator, &pools, kind, count).await;
    }

    if rand::rng().random_bool(SPECIAL_STATUS_PROBABILITY) {
        orchestrator
            .ensure_special_status_orders(
                &pools.customers,
                &pools.restaurants,
                &pools.address_books,
                &pools.menu_items,
                &pools.menu_item_variants,
            )
            .await;
    }
}

/// Rolls this tick's growth plan: usually empty, otherwise 1–3 distinct kinds
/// with a small record count each.
fn plan_tick() -> Vec<(GrowthKind, usize)> {
    let mut rng = rand::rng();

    if !rng.random_bool(GROWTH_PROBABILITY) {
        return Vec::new();
    }

    let kind_count = rng.random_range(KINDS_PER_TICK);
    GROWTH_CANDIDATES
        .choose_multiple(&mut rng, kind_count)
        .map(|kind| (*kind, rng.random_range(RECORDS_PER_KIND)))
        .collect()
}

async fn grow_kind(
    orchestrator: &PoolOrchestrator,
    pools: &DataPools,
    kind: GrowthKind,
    count: usize,
) {
    let source = match kind {
        GrowthKind::AddressBook => {
            orchestrator
                .generate_additional(
                    "AddressBook",
                    paths::ADDRESS_BOOKS,
                    generate_address_book,
                    count,
                )
                .await
                .source
        }
        GrowthKind::FoodCategory => {
            orchestrator
                .generate_additional(
                    "FoodCategory",
                    paths::FOOD_CATEGORIES,
                    generate_food_category,
                    count,
                )
                .await
                .source
        }
        GrowthKind::Restaurant => {
            orchestrator
                .generate_additional(
                    "Restaurant",
                    paths::RESTAURANTS,
                    || generate_restaurant(&pools.address_books, &pools.food_categories),
                    count,
                )
                .await
                .source
        }
        GrowthKind::MenuItem => {
            orchestrator
                .generate_additional(
                    "MenuItem",
                    paths::MENU_ITEMS,
                    || generate_menu_item(&pools.restaurants, &pools.food_categories),
                    count,
                )
                .await
                .source
        }
        GrowthKind::MenuItemVariant => {
            orchestrator
                .generate_additional(
                    "MenuItemVariant",
                    paths::MENU_ITEM_VARIANTS,
                    || generate_menu_item_variant(&pools.menu_items),
                    count,
                )
                .await
                .source
        }
        GrowthKind::Promotion => {
            orchestrator
                .generate_additional(
                    "Promotion",
                    paths::PROMOTIONS,
                    || generate_promotion(&pools.food_categories),
                    count,
                )
                .await
                .source
        }
        GrowthKind::Driver => {
            orchestrator
                .generate_additional(
                    "Driver",
                    paths::DRIVERS,
                    || generate_driver(&pools.address_books),
                    count,
                )
                .await
                .source
        }
        GrowthKind::Customer => {
            orchestrator
                .generate_additional("Customer", paths::CUSTOMERS, generate_customer, count)
                .await
                .source
        }
        GrowthKind::CustomerCare => {
            orchestrator
                .generate_additional(
                    "CustomerCare",
                    paths::CUSTOMER_CARES,
                    generate_customer_care,
                    count,
                )
                .await
                .source
        }
        GrowthKind::Order => {
            orchestrator
                .generate_additional(
                    "Order",
                    paths::ORDERS,
                    || {
                        generate_order(
                            &pools.customers,
                            &pools.restaurants,
                            &pools.address_books,
                            &pools.menu_items,
                            &pools.menu_item_variants,
                        )
                    },
                    count,
                )
                .await
                .source
        }
        GrowthKind::CustomerCareInquiry => {
            orchestrator
                .generate_additional(
                    "CustomerCareInquiry",
                    paths::CUSTOMER_CARE_INQUIRIES,
                    || generate_inquiry(&pools.customers),
                    count,
                )
                .await
                .source
        }
        GrowthKind::RatingReview => {
            orchestrator
                .generate_additional(
                    "RatingReview",
                    paths::RATINGS_REVIEWS,
                    || {
                        generate_rating_review(
                            &pools.customers,
                            &pools.drivers,
                            &pools.restaurants,
                            &pools.orders,
                        )
                    },
                    count,
                )
                .await
                .source
        }
    };

    if let PoolSource::Generated {
        created,
        failed_attempts,
    } = source
    {
        tracing::debug!(
            "Growth tick created {} {:?} record(s) ({} failed attempts)",
            created,
            kind,
            failed_attempts
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plans_stay_within_tick_bounds() {
        for _ in 0..500 {
            let plan = plan_tick();
            assert!(plan.len() <= *KINDS_PER_TICK.end());
            for (_, count) in &plan {
                assert!(RECORDS_PER_KIND.contains(count));
            }
        }
    }

    #[test]
    fn planned_kinds_are_distinct() {
        for _ in 0..500 {
            let plan = plan_tick();
            for (i, (kind, _)) in plan.iter().enumerate() {
                assert!(
                    !plan[i + 1..].iter().any(|(other, _)| other == kind),
                    "kind {kind:?} planned twice in one tick"
                );
            }
        }
    }

    #[test]
    fn growth_eventually_happens() {
        // With a 30% chance per tick, 500 ticks without growth would indicate
        // the probability gate is broken.
        let grew = (0..500).any(|_| !plan_tick().is_empty());
        assert!(grew);
    }
}
