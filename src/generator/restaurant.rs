//! Generators for the restaurant side of the catalog: restaurants, menu items,
//! and item variants.

use rand::Rng;

use crate::generator::{pick, random_email, random_phone, random_price, round2, word, words};
use crate::model::entity::{AddressBook, FoodCategory, MenuItem, MenuItemVariant, Restaurant};

pub fn generate_restaurant(
    addresses: &[AddressBook],
    food_categories: &[FoodCategory],
) -> Restaurant {
    let owner_first = word(words::FIRST_NAMES);
    let owner_last = word(words::LAST_NAMES);

    Restaurant {
        id: None,
        owner_name: format!("{owner_first} {owner_last}"),
        restaurant_name: format!(
            "{} {}",
            word(words::RESTAURANT_PREFIXES),
            word(words::RESTAURANT_SUFFIXES)
        ),
        description: "Family-run spot serving generous portions daily".to_string(),
        address_id: pick(addresses).and_then(|address| address.id.clone()),
        food_category_ids: pick(food_categories)
            .and_then(|category| category.id.clone())
            .into_iter()
            .collect(),
        contact_email: random_email(&owner_first, &owner_last),
        contact_phone: random_phone(),
        status: "OPEN".to_string(),
    }
}

pub fn generate_menu_item(
    restaurants: &[Restaurant],
    food_categories: &[FoodCategory],
) -> MenuItem {
    let name = format!("{} {}", word(words::DISH_ADJECTIVES), word(words::DISH_NOUNS));

    MenuItem {
        id: None,
        restaurant_id: pick(restaurants).and_then(|restaurant| restaurant.id.clone()),
        description: format!("{name}, made to order"),
        name,
        category_id: pick(food_categories).and_then(|category| category.id.clone()),
        price: random_price(),
        availability: true,
    }
}

pub fn generate_menu_item_variant(menu_items: &[MenuItem]) -> MenuItemVariant {
    let mut rng = rand::rng();
    let parent = pick(menu_items);
    let variant = word(words::VARIANT_NAMES);

    // Variant price scales off the parent item's price when one is available.
    let price = match parent {
        Some(item) if item.price > 0.0 => round2(item.price * rng.random_range(0.8..=1.5)),
        _ => random_price(),
    };

    MenuItemVariant {
        id: None,
        menu_item_id: parent.and_then(|item| item.id.clone()),
        description: format!("{variant} portion"),
        variant,
        price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{PRICE_MAX, PRICE_MIN};

    #[test]
    fn restaurant_tolerates_empty_upstream_pools() {
        let restaurant = generate_restaurant(&[], &[]);
        assert!(restaurant.address_id.is_none());
        assert!(restaurant.food_category_ids.is_empty());
        assert!(!restaurant.restaurant_name.is_empty());
    }

    #[test]
    fn restaurant_references_resolved_upstream_records() {
        let address = AddressBook {
            id: Some("ADDR_3".to_string()),
            ..Default::default()
        };
        let category = FoodCategory {
            id: Some("CAT_5".to_string()),
            ..Default::default()
        };

        let restaurant = generate_restaurant(&[address], &[category]);
        assert_eq!(restaurant.address_id.as_deref(), Some("ADDR_3"));
        assert_eq!(restaurant.food_category_ids, vec!["CAT_5".to_string()]);
    }

    #[test]
    fn menu_item_price_stays_in_bounds() {
        for _ in 0..50 {
            let item = generate_menu_item(&[], &[]);
            assert!((PRICE_MIN..=PRICE_MAX).contains(&item.price));
        }
    }

    #[test]
    fn variant_scales_off_parent_price() {
        let parent = MenuItem {
            id: Some("ITEM_1".to_string()),
            price: 100.0,
            ..Default::default()
        };

        for _ in 0..50 {
            let variant = generate_menu_item_variant(std::slice::from_ref(&parent));
            assert_eq!(variant.menu_item_id.as_deref(), Some("ITEM_1"));
            assert!((80.0..=150.0).contains(&variant.price));
        }
    }

    #[test]
    fn variant_tolerates_empty_item_pool() {
        let variant = generate_menu_item_variant(&[]);
        assert!(variant.menu_item_id.is_none());
        assert!(variant.price >= PRICE_MIN);
    }
}
