//! Generators for people-shaped entities: admins, drivers, customers, and
//! customer-care agents.

use rand::Rng;

use crate::generator::{pick, random_email, random_geo_point, random_phone, word, words};
use crate::model::entity::{AddressBook, Admin, AdminRole, Customer, CustomerCare, Driver, Vehicle};

/// Synthesizes a registration payload for one of the singleton admin roles.
pub fn generate_admin(role: AdminRole) -> Admin {
    let first_name = word(words::FIRST_NAMES);
    let last_name = word(words::LAST_NAMES);
    let mut rng = rand::rng();

    Admin {
        id: None,
        email: random_email(&first_name, &last_name),
        password: format!("Seed-{:08x}", rng.random::<u32>()),
        first_name,
        last_name,
        role: role.discriminator().to_string(),
    }
}

pub fn generate_driver(addresses: &[AddressBook]) -> Driver {
    let first_name = word(words::FIRST_NAMES);
    let last_name = word(words::LAST_NAMES);
    let mut rng = rand::rng();

    Driver {
        id: None,
        contact_email: random_email(&first_name, &last_name),
        contact_phone: random_phone(),
        first_name,
        last_name,
        address_id: pick(addresses).and_then(|address| address.id.clone()),
        vehicle: Vehicle {
            license_plate: format!(
                "{}{}-{:05}",
                rng.random_range(11..100),
                (b'A' + rng.random_range(0..26u8)) as char,
                rng.random_range(0..100_000u32)
            ),
            model: word(words::VEHICLE_MODELS),
            color: word(words::VEHICLE_COLORS),
        },
        current_location: random_geo_point(),
        available_for_work: rng.random_bool(0.8),
    }
}

pub fn generate_customer() -> Customer {
    let first_name = word(words::FIRST_NAMES);
    let last_name = word(words::LAST_NAMES);

    Customer {
        id: None,
        email: random_email(&first_name, &last_name),
        phone: random_phone(),
        first_name,
        last_name,
    }
}

pub fn generate_customer_care() -> CustomerCare {
    let first_name = word(words::FIRST_NAMES);
    let last_name = word(words::LAST_NAMES);

    CustomerCare {
        id: None,
        contact_email: random_email(&first_name, &last_name),
        contact_phone: random_phone(),
        first_name,
        last_name,
        is_assigned: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_carries_the_role_discriminator() {
        let admin = generate_admin(AdminRole::FinanceAdmin);
        assert_eq!(admin.role, "FINANCE_ADMIN");
        assert!(admin.id.is_none());
        assert!(!admin.password.is_empty());
    }

    #[test]
    fn driver_tolerates_empty_address_pool() {
        let driver = generate_driver(&[]);
        assert!(driver.address_id.is_none());
        assert!(!driver.vehicle.license_plate.is_empty());
    }

    #[test]
    fn driver_references_a_resolved_address() {
        let address = AddressBook {
            id: Some("ADDR_1".to_string()),
            ..Default::default()
        };

        let driver = generate_driver(&[address]);
        assert_eq!(driver.address_id.as_deref(), Some("ADDR_1"));
    }

    #[test]
    fn customer_contact_details_are_plausible() {
        let customer = generate_customer();
        assert!(customer.email.contains('@'));
        assert!(customer.phone.starts_with("+84"));
    }
}
