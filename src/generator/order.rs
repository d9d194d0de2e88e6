//! Generators for order-flow entities: orders, customer-care inquiries, and
//! ratings/reviews.
//!
//! Orders carry the one non-trivial policy decision in the seeder: payment
//! methods are drawn uniformly from {FWallet, COD, Card} and the delivery time is
//! the order time plus a uniform 20–60 minutes.

use chrono::Utc;
use rand::Rng;

use crate::generator::{pick, random_price, round2, word, words};
use crate::model::entity::{
    AddressBook, Customer, CustomerCareInquiry, Driver, MenuItem, MenuItemVariant, Order,
    OrderItem, OrderStatus, PaymentMethod, RatingReview, Restaurant,
};

const PAYMENT_METHODS: &[PaymentMethod] =
    &[PaymentMethod::FWallet, PaymentMethod::COD, PaymentMethod::Card];

const ORDER_STATUSES: &[OrderStatus] = &[
    OrderStatus::Pending,
    OrderStatus::Preparing,
    OrderStatus::Dispatched,
    OrderStatus::Delivered,
    OrderStatus::Cancelled,
];

/// Synthesizes an order with a randomly drawn status.
pub fn generate_order(
    customers: &[Customer],
    restaurants: &[Restaurant],
    addresses: &[AddressBook],
    menu_items: &[MenuItem],
    variants: &[MenuItemVariant],
) -> Order {
    let status = pick(ORDER_STATUSES).copied().unwrap_or_default();
    generate_order_with_status(customers, restaurants, addresses, menu_items, variants, status)
}

/// Synthesizes an order with a caller-imposed status.
///
/// Used by the special-status seeding pass, which needs a floor of delivered and
/// cancelled orders regardless of what the random draw would produce.
pub fn generate_order_with_status(
    customers: &[Customer],
    restaurants: &[Restaurant],
    addresses: &[AddressBook],
    menu_items: &[MenuItem],
    variants: &[MenuItemVariant],
    status: OrderStatus,
) -> Order {
    let mut rng = rand::rng();

    let order_items: Vec<OrderItem> = (0..rng.random_range(1..=3))
        .map(|_| order_item(menu_items, variants))
        .collect();

    let subtotal: f64 = order_items
        .iter()
        .map(|item| item.price_at_time_of_order * f64::from(item.quantity))
        .sum();
    let delivery_fee = round2(rng.random_range(15.0..=35.0));
    let service_fee = round2(subtotal * 0.05);

    let order_time = Utc::now().timestamp();
    let delivery_time = order_time + rng.random_range(20..=60) * 60;

    Order {
        id: None,
        customer_id: pick(customers).and_then(|customer| customer.id.clone()),
        restaurant_id: pick(restaurants).and_then(|restaurant| restaurant.id.clone()),
        customer_location: pick(addresses).and_then(|address| address.id.clone()),
        order_items,
        status,
        payment_method: pick(PAYMENT_METHODS).copied().unwrap_or_default(),
        total_amount: round2(subtotal + delivery_fee + service_fee),
        delivery_fee,
        service_fee,
        order_time,
        delivery_time,
        customer_note: word(words::CUSTOMER_NOTES),
    }
}

fn order_item(menu_items: &[MenuItem], variants: &[MenuItemVariant]) -> OrderItem {
    let mut rng = rand::rng();
    let item = pick(menu_items);
    let item_id = item.and_then(|i| i.id.clone());

    // Prefer a variant belonging to the picked item; fall back to none.
    let variant = item_id.as_ref().and_then(|id| {
        let matching: Vec<&MenuItemVariant> = variants
            .iter()
            .filter(|v| v.menu_item_id.as_ref() == Some(id))
            .collect();
        pick(&matching).copied()
    });

    let price = variant
        .map(|v| v.price)
        .or(item.map(|i| i.price))
        .unwrap_or_else(random_price);

    OrderItem {
        item_id,
        variant_id: variant.and_then(|v| v.id.clone()),
        name: item.map(|i| i.name.clone()).unwrap_or_default(),
        quantity: rng.random_range(1..=4),
        price_at_time_of_order: price,
    }
}

pub fn generate_inquiry(customers: &[Customer]) -> CustomerCareInquiry {
    let subject = word(words::INQUIRY_SUBJECTS);

    CustomerCareInquiry {
        id: None,
        customer_id: pick(customers).and_then(|customer| customer.id.clone()),
        description: format!("{subject} — reported through the app"),
        subject,
        status: "OPEN".to_string(),
        priority: word(words::INQUIRY_PRIORITIES),
    }
}

pub fn generate_rating_review(
    customers: &[Customer],
    drivers: &[Driver],
    restaurants: &[Restaurant],
    orders: &[Order],
) -> RatingReview {
    let mut rng = rand::rng();

    // Reviews only make sense against finished orders; fall back to any order
    // rather than skipping, since partial references are tolerated.
    let finished: Vec<&Order> = orders
        .iter()
        .filter(|order| order.status == OrderStatus::Delivered)
        .collect();
    let order = pick(&finished).copied().or_else(|| pick(orders));

    RatingReview {
        id: None,
        reviewer_customer_id: pick(customers).and_then(|customer| customer.id.clone()),
        driver_id: pick(drivers).and_then(|driver| driver.id.clone()),
        restaurant_id: pick(restaurants).and_then(|restaurant| restaurant.id.clone()),
        order_id: order.and_then(|o| o.id.clone()),
        food_rating: rng.random_range(1..=5),
        delivery_rating: rng.random_range(1..=5),
        food_review: word(words::FOOD_REVIEWS),
        delivery_review: word(words::DELIVERY_REVIEWS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_survives_fully_empty_upstream_pools() {
        let order = generate_order(&[], &[], &[], &[], &[]);
        assert!(order.customer_id.is_none());
        assert!(order.restaurant_id.is_none());
        assert!(!order.order_items.is_empty());
        assert!(order.total_amount > 0.0);
    }

    #[test]
    fn forced_status_overrides_the_random_draw() {
        for _ in 0..20 {
            let order =
                generate_order_with_status(&[], &[], &[], &[], &[], OrderStatus::Cancelled);
            assert_eq!(order.status, OrderStatus::Cancelled);
        }
    }

    #[test]
    fn delivery_time_is_twenty_to_sixty_minutes_out() {
        for _ in 0..50 {
            let order = generate_order(&[], &[], &[], &[], &[]);
            let lead = order.delivery_time - order.order_time;
            assert!((20 * 60..=60 * 60).contains(&lead));
        }
    }

    #[test]
    fn order_items_prefer_variants_of_the_picked_item() {
        let item = MenuItem {
            id: Some("ITEM_1".to_string()),
            name: "Pho".to_string(),
            price: 90.0,
            ..Default::default()
        };
        let own_variant = MenuItemVariant {
            id: Some("VAR_1".to_string()),
            menu_item_id: Some("ITEM_1".to_string()),
            price: 120.0,
            ..Default::default()
        };
        let foreign_variant = MenuItemVariant {
            id: Some("VAR_2".to_string()),
            menu_item_id: Some("ITEM_99".to_string()),
            price: 40.0,
            ..Default::default()
        };

        for _ in 0..20 {
            let order = generate_order(
                &[],
                &[],
                &[],
                std::slice::from_ref(&item),
                &[own_variant.clone(), foreign_variant.clone()],
            );
            for line in &order.order_items {
                assert_eq!(line.variant_id.as_deref(), Some("VAR_1"));
                assert_eq!(line.price_at_time_of_order, 120.0);
            }
        }
    }

    #[test]
    fn totals_add_up() {
        let order = generate_order(&[], &[], &[], &[], &[]);
        let subtotal: f64 = order
            .order_items
            .iter()
            .map(|item| item.price_at_time_of_order * f64::from(item.quantity))
            .sum();
        let expected = (subtotal + order.delivery_fee + order.service_fee) * 100.0;
        assert!((expected.round() / 100.0 - order.total_amount).abs() < 0.01);
    }

    #[test]
    fn reviews_favor_delivered_orders() {
        let delivered = Order {
            id: Some("ORD_DELIVERED".to_string()),
            status: OrderStatus::Delivered,
            ..Default::default()
        };
        let pending = Order {
            id: Some("ORD_PENDING".to_string()),
            status: OrderStatus::Pending,
            ..Default::default()
        };

        for _ in 0..20 {
            let review =
                generate_rating_review(&[], &[], &[], &[delivered.clone(), pending.clone()]);
            assert_eq!(review.order_id.as_deref(), Some("ORD_DELIVERED"));
            assert!((1..=5).contains(&review.food_rating));
        }
    }
}
