//! Endpoint paths for the remote FlashFood backend.
//!
//! One read (`GET`) and one write (`POST`) endpoint exists per entity kind. Writes
//! go through [`crate::backend::BackendClient::create`], which marks the record as
//! synthetically generated; admin registration goes through the auth endpoints
//! without that flag.

pub const ADDRESS_BOOKS: &str = "/address_books";
pub const FOOD_CATEGORIES: &str = "/food-categories";
pub const FINANCE_RULES: &str = "/finance-rules";
pub const RESTAURANTS: &str = "/restaurants";
pub const MENU_ITEMS: &str = "/menu-items";
pub const MENU_ITEM_VARIANTS: &str = "/menu-item-variants";
pub const PROMOTIONS: &str = "/promotions";
pub const DRIVERS: &str = "/drivers";
pub const CUSTOMERS: &str = "/customers";
pub const CUSTOMER_CARES: &str = "/customer-cares";
pub const ORDERS: &str = "/orders";
pub const CUSTOMER_CARE_INQUIRIES: &str = "/customer-care-inquiries";
pub const RATINGS_REVIEWS: &str = "/ratings-reviews";

/// Account id of the platform's own finance wallet, refreshed alongside the
/// customer and restaurant wallets after every wallet-paid order.
pub const PLATFORM_FINANCE_USER_ID: &str = "FF_PLATFORM_FINANCE";

/// Role-filtered admin lookup, e.g. `/admin-fake/by-role/SUPER_ADMIN`.
pub fn admin_by_role(role: &str) -> String {
    format!("/admin-fake/by-role/{role}")
}

/// Role-specific registration endpoint, e.g. `/auth/register-super-admin`.
pub fn register_admin(role_slug: &str) -> String {
    format!("/auth/register-{role_slug}")
}

/// Wallet lookup for a user, e.g. `/fwallets/by-user/CUS_1`.
pub fn fwallet_by_user(user_id: &str) -> String {
    format!("/fwallets/by-user/{user_id}")
}
