//! Aggregated snapshot of every entity pool.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::entity::{
    AddressBook, Admin, Customer, CustomerCare, CustomerCareInquiry, Driver, FinanceRule,
    FoodCategory, MenuItem, MenuItemVariant, Order, Promotion, RatingReview, Restaurant,
};

/// One fully resolved pass over every entity pool, in dependency order.
///
/// This is the value cached under the data-pools cache key and returned by the HTTP
/// surface. It is only ever written to the cache once every pool has resolved
/// (successfully or degraded to empty); a partially resolved snapshot never leaves
/// the orchestrator.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(default)]
pub struct DataPools {
    pub address_books: Vec<AddressBook>,
    pub food_categories: Vec<FoodCategory>,
    /// At most one record; truncated by the singleton resolver.
    pub super_admins: Vec<Admin>,
    /// At most one record; truncated by the singleton resolver.
    pub finance_admins: Vec<Admin>,
    /// At most one record; truncated by the singleton resolver.
    pub companion_admins: Vec<Admin>,
    pub finance_rules: Vec<FinanceRule>,
    pub restaurants: Vec<Restaurant>,
    pub menu_items: Vec<MenuItem>,
    pub menu_item_variants: Vec<MenuItemVariant>,
    pub promotions: Vec<Promotion>,
    pub drivers: Vec<Driver>,
    pub customers: Vec<Customer>,
    pub customer_cares: Vec<CustomerCare>,
    pub orders: Vec<Order>,
    pub customer_care_inquiries: Vec<CustomerCareInquiry>,
    pub ratings_reviews: Vec<RatingReview>,
}

impl DataPools {
    /// Total records across all pools, used for log/status messages.
    pub fn total_records(&self) -> usize {
        self.address_books.len()
            + self.food_categories.len()
            + self.super_admins.len()
            + self.finance_admins.len()
            + self.companion_admins.len()
            + self.finance_rules.len()
            + self.restaurants.len()
            + self.menu_items.len()
            + self.menu_item_variants.len()
            + self.promotions.len()
            + self.drivers.len()
            + self.customers.len()
            + self.customer_cares.len()
            + self.orders.len()
            + self.customer_care_inquiries.len()
            + self.ratings_reviews.len()
    }
}
