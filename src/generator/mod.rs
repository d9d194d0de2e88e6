//! Synthetic payload generators, one pure function per entity kind.
//!
//! Every generator takes zero or more already-resolved upstream pools and returns
//! one candidate record with `id: None`. Generators perform no I/O, keep no state
//! between calls, and may be invoked arbitrarily many times — the orchestrator
//! calls them once per creation attempt. Foreign keys are drawn uniformly at
//! random from the given pool, or left `None` when the pool is empty; an empty
//! upstream pool never makes a generator panic.
//!
//! Randomized value bounds:
//! - prices: 50–250
//! - postal codes: 10000–99999
//! - coordinates: ±0.05° around a fixed origin in central Ho Chi Minh City
//! - ratings: 1–5
//! - delivery time: order time + 20–60 minutes

pub mod words;

mod catalog;
mod order;
mod people;
mod restaurant;

pub use catalog::{
    generate_address_book, generate_finance_rule, generate_food_category, generate_promotion,
};
pub use order::{
    generate_inquiry, generate_order, generate_order_with_status, generate_rating_review,
};
pub use people::{generate_admin, generate_customer, generate_customer_care, generate_driver};
pub use restaurant::{generate_menu_item, generate_menu_item_variant, generate_restaurant};

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::model::entity::GeoPoint;

/// Fixed origin generated coordinates scatter around (District 1, Ho Chi Minh City).
pub const GEO_ORIGIN_LAT: f64 = 10.7769;
pub const GEO_ORIGIN_LNG: f64 = 106.7009;
/// Maximum coordinate offset from the origin, in degrees.
pub const GEO_JITTER_DEGREES: f64 = 0.05;

/// Inclusive price bounds for menu items and variants.
pub const PRICE_MIN: f64 = 50.0;
pub const PRICE_MAX: f64 = 250.0;

/// Uniformly picks one record from a resolved pool; `None` when the pool is empty.
pub(crate) fn pick<T>(records: &[T]) -> Option<&T> {
    records.choose(&mut rand::rng())
}

pub(crate) fn word(list: &[&str]) -> String {
    pick(list).copied().unwrap_or_default().to_string()
}

pub(crate) fn random_geo_point() -> GeoPoint {
    let mut rng = rand::rng();
    GeoPoint {
        lat: GEO_ORIGIN_LAT + rng.random_range(-GEO_JITTER_DEGREES..=GEO_JITTER_DEGREES),
        lng: GEO_ORIGIN_LNG + rng.random_range(-GEO_JITTER_DEGREES..=GEO_JITTER_DEGREES),
    }
}

pub(crate) fn random_price() -> f64 {
    round2(rand::rng().random_range(PRICE_MIN..=PRICE_MAX))
}

pub(crate) fn random_phone() -> String {
    let mut rng = rand::rng();
    format!("+849{:08}", rng.random_range(0..100_000_000u32))
}

pub(crate) fn random_email(first_name: &str, last_name: &str) -> String {
    let tag: u32 = rand::rng().random_range(100..10_000);
    format!(
        "{}.{}{}@example.com",
        first_name.to_lowercase().replace(' ', ""),
        last_name.to_lowercase().replace(' ', ""),
        tag
    )
}

/// Rounds a monetary amount to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
