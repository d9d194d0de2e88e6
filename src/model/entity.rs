//! Typed domain records for every entity kind the seeder populates.
//!
//! Each record mirrors the fields its backend creation endpoint requires, plus the
//! backend-assigned `id` (absent until creation succeeds — a freshly synthesized
//! payload is the same struct with `id: None`). Foreign keys are nullable
//! identifiers: when an upstream pool resolved empty, generators emit `None` and the
//! backend is expected to tolerate the missing reference. Deserialization is
//! lenient (`#[serde(default)]` containers) because the seeder never validates
//! field semantics beyond picking foreign keys.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Behavior shared by every record the pool orchestrator manages.
///
/// The only non-trivial hook is [`PoolRecord::wallet_parties`]: orders paid through
/// the in-app wallet require a wallet refresh for both trading parties plus the
/// platform finance account after creation, which the write call alone does not
/// surface.
pub trait PoolRecord:
    Serialize + serde::de::DeserializeOwned + Clone + Send + Sync + 'static
{
    /// Parties whose wallets must be re-fetched after this record is created.
    ///
    /// `None` for every record kind except wallet-paid orders.
    fn wallet_parties(&self) -> Option<WalletParties> {
        None
    }
}

/// The customer and restaurant sides of a wallet-paid order.
#[derive(Debug, Clone, PartialEq)]
pub struct WalletParties {
    pub customer_id: Option<String>,
    pub restaurant_id: Option<String>,
}

macro_rules! impl_pool_record {
    ($($record:ty),+ $(,)?) => {
        $(impl PoolRecord for $record {})+
    };
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(default)]
pub struct AddressBook {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub street: String,
    pub city: String,
    pub nationality: String,
    pub postal_code: u32,
    pub location: GeoPoint,
    pub title: String,
    pub is_default: bool,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(default)]
pub struct FoodCategory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub description: String,
}

/// The three administrative roles that exist exactly once in seeded data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminRole {
    SuperAdmin,
    FinanceAdmin,
    CompanionAdmin,
}

impl AdminRole {
    /// The backend's role discriminator, used by the role-filtered read endpoint.
    pub fn discriminator(self) -> &'static str {
        match self {
            Self::SuperAdmin => "SUPER_ADMIN",
            Self::FinanceAdmin => "FINANCE_ADMIN",
            Self::CompanionAdmin => "COMPANION_ADMIN",
        }
    }

    /// The slug used by the registration endpoint, e.g. `register-super-admin`.
    pub fn slug(self) -> &'static str {
        match self {
            Self::SuperAdmin => "super-admin",
            Self::FinanceAdmin => "finance-admin",
            Self::CompanionAdmin => "companion-admin",
        }
    }
}

/// Administrative account, registered through the role-specific auth endpoints.
///
/// One struct covers all three singleton roles; `role` carries the backend's
/// role discriminator (`SUPER_ADMIN`, `FINANCE_ADMIN`, `COMPANION_ADMIN`).
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(default)]
pub struct Admin {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub email: String,
    // Only meaningful on registration payloads; the backend never echoes it back.
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(default)]
pub struct FinanceRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub driver_fixed_wage: f64,
    pub customer_care_hourly_wage: f64,
    /// Fraction of each order taken as the platform service fee (0.01–0.10).
    pub app_service_fee: f64,
    pub restaurant_commission: f64,
    pub created_by_id: Option<String>,
    pub description: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(default)]
pub struct Restaurant {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub owner_name: String,
    pub restaurant_name: String,
    pub description: String,
    pub address_id: Option<String>,
    pub food_category_ids: Vec<String>,
    pub contact_email: String,
    pub contact_phone: String,
    pub status: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(default)]
pub struct MenuItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub restaurant_id: Option<String>,
    pub name: String,
    pub description: String,
    pub category_id: Option<String>,
    pub price: f64,
    pub availability: bool,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(default)]
pub struct MenuItemVariant {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub menu_item_id: Option<String>,
    pub variant: String,
    pub description: String,
    pub price: f64,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(default)]
pub struct Promotion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub discount_type: String,
    pub discount_value: f64,
    pub promotion_cost_price: f64,
    pub minimum_order_value: f64,
    /// Epoch seconds.
    pub start_date: i64,
    /// Epoch seconds.
    pub end_date: i64,
    pub food_category_ids: Vec<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(default)]
pub struct Vehicle {
    pub license_plate: String,
    pub model: String,
    pub color: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(default)]
pub struct Driver {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub address_id: Option<String>,
    pub vehicle: Vehicle,
    pub current_location: GeoPoint,
    pub available_for_work: bool,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(default)]
pub struct Customer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(default)]
pub struct CustomerCare {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub is_assigned: bool,
}

/// Payment methods the order generator draws from.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaymentMethod {
    FWallet,
    #[default]
    COD,
    Card,
}

impl PaymentMethod {
    /// Whether paying through this method moves money inside the platform,
    /// requiring a wallet refresh after order creation.
    pub fn is_wallet_based(self) -> bool {
        matches!(self, Self::FWallet)
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    Dispatched,
    Delivered,
    Cancelled,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(default)]
pub struct OrderItem {
    pub item_id: Option<String>,
    pub variant_id: Option<String>,
    pub name: String,
    pub quantity: u32,
    pub price_at_time_of_order: f64,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(default)]
pub struct Order {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub customer_id: Option<String>,
    pub restaurant_id: Option<String>,
    pub customer_location: Option<String>,
    pub order_items: Vec<OrderItem>,
    pub status: OrderStatus,
    pub payment_method: PaymentMethod,
    pub total_amount: f64,
    pub delivery_fee: f64,
    pub service_fee: f64,
    /// Epoch seconds.
    pub order_time: i64,
    /// Epoch seconds; always after `order_time`.
    pub delivery_time: i64,
    pub customer_note: String,
}

impl PoolRecord for Order {
    fn wallet_parties(&self) -> Option<WalletParties> {
        if !self.payment_method.is_wallet_based() {
            return None;
        }
        Some(WalletParties {
            customer_id: self.customer_id.clone(),
            restaurant_id: self.restaurant_id.clone(),
        })
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(default)]
pub struct CustomerCareInquiry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub customer_id: Option<String>,
    pub subject: String,
    pub description: String,
    pub status: String,
    pub priority: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(default)]
pub struct RatingReview {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub reviewer_customer_id: Option<String>,
    pub driver_id: Option<String>,
    pub restaurant_id: Option<String>,
    pub order_id: Option<String>,
    /// 1–5.
    pub food_rating: u32,
    /// 1–5.
    pub delivery_rating: u32,
    pub food_review: String,
    pub delivery_review: String,
}

/// In-app wallet state, fetched from `/fwallets/by-user/{id}` after wallet-paid
/// order creation. Never generated by the seeder, only read and cached.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(default)]
pub struct FWallet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub user_id: String,
    pub balance: f64,
    pub version: u64,
}

impl_pool_record!(
    AddressBook,
    FoodCategory,
    Admin,
    FinanceRule,
    Restaurant,
    MenuItem,
    MenuItemVariant,
    Promotion,
    Driver,
    Customer,
    CustomerCare,
    CustomerCareInquiry,
    RatingReview,
);
