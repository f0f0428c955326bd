//! Shared fixtures for registry integration tests.

#![allow(dead_code)]

use contact_registry::ContactRegistry;

/// Phone numbers stored in `tests/data/phone_numbers.csv`, one per line.
pub const PHONE_NUMBERS_CSV: &str = include_str!("../data/phone_numbers.csv");

/// Create a fresh, empty registry for a single test.
pub fn setup_registry() -> ContactRegistry {
    ContactRegistry::new()
}

/// Phone numbers read from the CSV fixture, skipping blank lines.
pub fn csv_phone_numbers() -> Vec<String> {
    PHONE_NUMBERS_CSV
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Phone numbers supplied by a provider function.
pub fn phone_numbers() -> Vec<String> {
    vec![
        "0123456789".to_string(),
        "0123456789".to_string(),
        "0123456789".to_string(),
    ]
}

/// Assert that `registry` holds exactly one contact and it matches the triple.
pub fn assert_single_contact(
    registry: &ContactRegistry,
    first_name: &str,
    last_name: &str,
    phone_number: &str,
) {
    let contacts = registry.get_all_contacts();
    assert!(!contacts.is_empty(), "registry should not be empty");
    assert_eq!(contacts.len(), 1, "registry should hold exactly one contact");
    assert!(
        contacts
            .iter()
            .any(|c| c.matches(first_name, last_name, phone_number)),
        "expected contact {} {} {} not found",
        first_name,
        last_name,
        phone_number
    );
}
