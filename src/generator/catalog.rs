//! Generators for catalog-side entities: addresses, food categories, finance
//! rules, and promotions.

use chrono::Utc;
use rand::Rng;

use crate::generator::{pick, random_geo_point, round2, word, words};
use crate::model::entity::{AddressBook, Admin, FinanceRule, FoodCategory, Promotion};

pub fn generate_address_book() -> AddressBook {
    let mut rng = rand::rng();

    AddressBook {
        id: None,
        street: format!("{} {}", rng.random_range(1..400), word(words::STREET_NAMES)),
        city: word(words::CITIES),
        nationality: "Vietnam".to_string(),
        postal_code: rng.random_range(10_000..=99_999),
        location: random_geo_point(),
        title: word(words::ADDRESS_TITLES),
        is_default: rng.random_bool(0.5),
    }
}

pub fn generate_food_category() -> FoodCategory {
    let name = word(words::FOOD_CATEGORIES);

    FoodCategory {
        id: None,
        description: format!("Everything {} from kitchens near you", name.to_lowercase()),
        name,
    }
}

/// Finance rules are authored by the super admin, so the generator references the
/// resolved super-admin pool (null author when that pool is empty).
pub fn generate_finance_rule(super_admins: &[Admin]) -> FinanceRule {
    let mut rng = rand::rng();

    FinanceRule {
        id: None,
        driver_fixed_wage: round2(rng.random_range(20.0..=45.0)),
        customer_care_hourly_wage: round2(rng.random_range(15.0..=30.0)),
        app_service_fee: round2(rng.random_range(0.01..=0.10)),
        restaurant_commission: round2(rng.random_range(0.10..=0.25)),
        created_by_id: pick(super_admins).and_then(|admin| admin.id.clone()),
        description: "Automatically seeded finance rule".to_string(),
    }
}

pub fn generate_promotion(food_categories: &[FoodCategory]) -> Promotion {
    let mut rng = rand::rng();
    let now = Utc::now().timestamp();
    let percentage = rng.random_bool(0.5);

    Promotion {
        id: None,
        name: word(words::PROMOTION_NAMES),
        description: "Limited-time offer on selected categories".to_string(),
        discount_type: if percentage { "PERCENTAGE" } else { "FIXED" }.to_string(),
        discount_value: if percentage {
            rng.random_range(5.0f64..=30.0).round()
        } else {
            round2(rng.random_range(10.0..=50.0))
        },
        promotion_cost_price: round2(rng.random_range(5.0..=25.0)),
        minimum_order_value: round2(rng.random_range(50.0..=150.0)),
        start_date: now,
        // One to four weeks long
        end_date: now + rng.random_range(1..=4) * 7 * 24 * 3600,
        food_category_ids: pick(food_categories)
            .and_then(|category| category.id.clone())
            .into_iter()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_book_fields_stay_in_bounds() {
        for _ in 0..50 {
            let address = generate_address_book();
            assert!(address.id.is_none());
            assert!((10_000..=99_999).contains(&address.postal_code));
            assert!(!address.street.is_empty());
        }
    }

    #[test]
    fn finance_rule_tolerates_empty_admin_pool() {
        let rule = generate_finance_rule(&[]);
        assert!(rule.created_by_id.is_none());
        assert!((0.01..=0.10).contains(&rule.app_service_fee));
    }

    #[test]
    fn finance_rule_references_resolved_admin() {
        let admin = Admin {
            id: Some("FF_ADMIN_1".to_string()),
            ..Default::default()
        };

        let rule = generate_finance_rule(&[admin]);
        assert_eq!(rule.created_by_id.as_deref(), Some("FF_ADMIN_1"));
    }

    #[test]
    fn promotion_window_is_in_the_future() {
        let promotion = generate_promotion(&[]);
        assert!(promotion.end_date > promotion.start_date);
        assert!(promotion.food_category_ids.is_empty());
    }
}
