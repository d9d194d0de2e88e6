//! Tests for the aggregate pipeline: caching, idempotence, refresh semantics,
//! and dependency ordering.

use mockito::Matcher;
use serde_json::json;

use crate::backend::paths;
use crate::cache::CacheStore;
use crate::model::entity::Customer;
use crate::model::pools::DataPools;
use crate::pool::{PoolSettings, DATA_POOLS_CACHE_KEY};
use crate::util::test::{
    customer_records, list_body, mock_read_endpoint, order_records, test_setup_with_minimum,
    test_setup_with_settings,
};

/// Even when every backend call fails, the pass completes with empty pools and
/// the (empty) aggregate is written to the cache — partial failure is a valid
/// terminal state, not an error.
#[tokio::test]
async fn snapshot_is_cached_after_a_fully_degraded_pass() {
    let test = test_setup_with_minimum(0).await;

    let pools = test.orchestrator.ensure_data_pools().await.unwrap();

    assert_eq!(pools.total_records(), 0);

    let cached = test
        .cache
        .get(DATA_POOLS_CACHE_KEY)
        .await
        .unwrap()
        .expect("snapshot should be cached after the pass");
    let cached_pools: DataPools = serde_json::from_str(&cached).unwrap();
    assert_eq!(cached_pools.total_records(), 0);
}

/// With a warm cache, a second `ensure_data_pools` performs zero reads and zero
/// writes and returns an identical aggregate.
#[tokio::test]
async fn second_call_is_served_from_cache_with_zero_writes() {
    let mut test = test_setup_with_minimum(1).await;

    let single = |id: &str| vec![json!({ "id": id })];
    mock_read_endpoint(&mut test.server, paths::ADDRESS_BOOKS, single("ADDR_0"), 1);
    mock_read_endpoint(&mut test.server, paths::FOOD_CATEGORIES, single("CAT_0"), 1);
    mock_read_endpoint(&mut test.server, paths::FINANCE_RULES, single("RULE_0"), 1);
    mock_read_endpoint(&mut test.server, paths::RESTAURANTS, single("RES_0"), 1);
    mock_read_endpoint(&mut test.server, paths::MENU_ITEMS, single("ITEM_0"), 1);
    mock_read_endpoint(&mut test.server, paths::MENU_ITEM_VARIANTS, single("VAR_0"), 1);
    mock_read_endpoint(&mut test.server, paths::PROMOTIONS, single("PROMO_0"), 1);
    mock_read_endpoint(&mut test.server, paths::DRIVERS, single("DRV_0"), 1);
    mock_read_endpoint(&mut test.server, paths::CUSTOMER_CARES, single("CC_0"), 1);
    mock_read_endpoint(
        &mut test.server,
        paths::CUSTOMER_CARE_INQUIRIES,
        single("INQ_0"),
        1,
    );
    mock_read_endpoint(&mut test.server, paths::RATINGS_REVIEWS, single("REV_0"), 1);

    for role in ["SUPER_ADMIN", "FINANCE_ADMIN", "COMPANION_ADMIN"] {
        test.server
            .mock("GET", format!("/admin-fake/by-role/{role}").as_str())
            .with_status(200)
            .with_body(list_body(vec![json!({ "id": format!("ADM_{role}") })]))
            .create();
    }

    // Orders are read twice per pass: once by the special-status floor check,
    // once by the generic pool. Floors are already met here.
    let orders = order_records(&[
        "DELIVERED",
        "DELIVERED",
        "DELIVERED",
        "DELIVERED",
        "DELIVERED",
        "CANCELLED",
        "CANCELLED",
    ]);
    mock_read_endpoint(&mut test.server, paths::ORDERS, orders, 2);

    let customers = mock_read_endpoint(&mut test.server, paths::CUSTOMERS, customer_records(1), 1);
    let writes = test
        .server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create();

    let first = test.orchestrator.ensure_data_pools().await.unwrap();
    let second = test.orchestrator.ensure_data_pools().await.unwrap();

    customers.assert_async().await;
    writes.assert_async().await;

    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
    assert_eq!(first.customers.len(), 1);
    assert_eq!(first.orders.len(), 1);
}

/// `refresh_pools` deletes the cached snapshot before recomputing: a stale
/// cached value must not survive a refresh, even though a plain ensure happily
/// serves it.
#[tokio::test]
async fn refresh_discards_the_cached_snapshot() {
    let mut test = test_setup_with_minimum(0).await;

    let stale = DataPools {
        customers: vec![Customer {
            id: Some("STALE".to_string()),
            ..Default::default()
        }],
        ..Default::default()
    };
    test.cache
        .set(
            DATA_POOLS_CACHE_KEY,
            &serde_json::to_string(&stale).unwrap(),
            60_000,
        )
        .await
        .unwrap();

    let customers = mock_read_endpoint(&mut test.server, paths::CUSTOMERS, Vec::new(), 1);

    // The fast path serves the stale snapshot without touching the backend.
    let cached = test.orchestrator.ensure_data_pools().await.unwrap();
    assert_eq!(cached.customers[0].id.as_deref(), Some("STALE"));

    let refreshed = test.orchestrator.refresh_pools().await.unwrap();

    customers.assert_async().await;
    assert!(refreshed.customers.is_empty());

    let recached = test.cache.get(DATA_POOLS_CACHE_KEY).await.unwrap().unwrap();
    let recached_pools: DataPools = serde_json::from_str(&recached).unwrap();
    assert!(recached_pools.customers.is_empty());
}

/// Restaurants resolve after address books and food categories: every generated
/// restaurant payload references identifiers from the already-resolved upstream
/// pools.
#[tokio::test]
async fn restaurant_generation_sees_resolved_upstream_pools() {
    let mut test = test_setup_with_settings(PoolSettings::default()).await;

    let addresses = (0..10)
        .map(|i| json!({ "id": format!("ADDR_{i}") }))
        .collect();
    let categories = (0..10)
        .map(|i| json!({ "id": format!("CAT_{i}") }))
        .collect();
    mock_read_endpoint(&mut test.server, paths::ADDRESS_BOOKS, addresses, 1);
    mock_read_endpoint(&mut test.server, paths::FOOD_CATEGORIES, categories, 1);
    mock_read_endpoint(&mut test.server, paths::RESTAURANTS, Vec::new(), 1);

    let restaurant_writes = test
        .server
        .mock("POST", paths::RESTAURANTS)
        .match_query(Matcher::Any)
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex("ADDR_".to_string()),
            Matcher::Regex("CAT_".to_string()),
        ]))
        .with_status(200)
        .with_body(
            json!({ "EC": 0, "data": { "id": "RES_NEW", "restaurant_name": "Seeded" } })
                .to_string(),
        )
        .expect(10)
        .create();

    // Every other endpoint is left unmocked; those pools degrade, which is fine
    // for this ordering check.
    test.orchestrator.ensure_data_pools().await.unwrap();

    restaurant_writes.assert_async().await;
}
