//! Integration tests for the stock service against the in-memory store.
//!
//! Tests: StockService → BeerStore → stored records
//!
//! Verifies:
//! - Every operation and failure kind behaves per the business rules
//! - Failed operations never mutate stored state
//! - The capacity invariant holds after any successful adjustment

use beerstock_catalog::{BeerStyle, NewBeer, StockError, StockService};
use beerstock_core::BeerId;

use crate::memory::InMemoryBeerStore;

fn service() -> StockService<InMemoryBeerStore> {
    StockService::new(InMemoryBeerStore::new())
}

fn brahma() -> NewBeer {
    NewBeer {
        name: "Brahma".to_string(),
        brand: "Ambev".to_string(),
        style: BeerStyle::Lager,
        quantity: 10,
        max: 50,
        min: 0,
    }
}

#[test]
fn create_returns_record_with_assigned_id_and_unchanged_fields() {
    let svc = service();
    let input = brahma();

    let created = svc.create(input.clone()).unwrap();
    assert_eq!(created.name, input.name);
    assert_eq!(created.brand, input.brand);
    assert_eq!(created.style, input.style);
    assert_eq!(created.quantity, input.quantity);
    assert_eq!(created.max, input.max);
    assert_eq!(created.min, input.min);

    // The record is retrievable by its assigned id (via an adjustment of 0).
    let same = svc.increment(created.id, 0).unwrap();
    assert_eq!(same.quantity, created.quantity);
}

#[test]
fn create_rejects_duplicate_name() {
    let svc = service();
    svc.create(brahma()).unwrap();

    let err = svc.create(brahma()).unwrap_err();
    assert_eq!(err, StockError::AlreadyRegistered("Brahma".to_string()));
    assert_eq!(svc.list_all().unwrap().len(), 1);
}

#[test]
fn create_rejects_blank_fields() {
    let svc = service();
    let mut input = brahma();
    input.brand = "  ".to_string();

    let err = svc.create(input).unwrap_err();
    assert!(matches!(err, StockError::Validation(_)));
    assert!(svc.list_all().unwrap().is_empty());
}

#[test]
fn find_by_name_returns_the_record() {
    let svc = service();
    let created = svc.create(brahma()).unwrap();

    let found = svc.find_by_name("Brahma").unwrap();
    assert_eq!(found, created);
}

#[test]
fn find_by_name_on_unknown_name_is_not_found() {
    let svc = service();
    assert_eq!(svc.find_by_name("Skol").unwrap_err(), StockError::NotFound);
}

#[test]
fn list_all_returns_every_record() {
    let svc = service();
    svc.create(brahma()).unwrap();
    let mut second = brahma();
    second.name = "Heineken".to_string();
    second.brand = "Heineken".to_string();
    svc.create(second).unwrap();

    let names: Vec<String> = svc
        .list_all()
        .unwrap()
        .into_iter()
        .map(|b| b.name)
        .collect();
    assert_eq!(names, vec!["Brahma".to_string(), "Heineken".to_string()]);
}

#[test]
fn list_all_on_empty_catalog_is_empty_not_an_error() {
    let svc = service();
    assert!(svc.list_all().unwrap().is_empty());
}

#[test]
fn delete_removes_the_record() {
    let svc = service();
    let created = svc.create(brahma()).unwrap();

    svc.delete_by_id(created.id).unwrap();
    assert!(svc.list_all().unwrap().is_empty());
    assert_eq!(svc.find_by_name("Brahma").unwrap_err(), StockError::NotFound);
}

#[test]
fn delete_on_unknown_id_is_not_found() {
    let svc = service();
    assert_eq!(
        svc.delete_by_id(BeerId::new()).unwrap_err(),
        StockError::NotFound
    );
}

#[test]
fn increment_raises_quantity_within_max() {
    let svc = service();
    let created = svc.create(brahma()).unwrap();

    let updated = svc.increment(created.id, 10).unwrap();
    assert_eq!(updated.quantity, 20);
    assert!(updated.quantity <= updated.max);
}

#[test]
fn increment_past_max_is_rejected_and_leaves_quantity_unchanged() {
    let svc = service();
    let created = svc.create(brahma()).unwrap();

    let err = svc.increment(created.id, 45).unwrap_err();
    assert_eq!(
        err,
        StockError::MaxCapacityExceeded {
            id: created.id,
            amount: 45
        }
    );
    assert_eq!(svc.find_by_name("Brahma").unwrap().quantity, 10);
}

#[test]
fn increment_on_unknown_id_is_not_found() {
    let svc = service();
    assert_eq!(
        svc.increment(BeerId::new(), 10).unwrap_err(),
        StockError::NotFound
    );
}

#[test]
fn increment_with_negative_amount_is_rejected() {
    let svc = service();
    let created = svc.create(brahma()).unwrap();

    let err = svc.increment(created.id, -1).unwrap_err();
    assert_eq!(err, StockError::NegativeAmount(-1));
    assert_eq!(svc.find_by_name("Brahma").unwrap().quantity, 10);
}

#[test]
fn decrement_lowers_quantity_within_min() {
    let svc = service();
    let created = svc.create(brahma()).unwrap();

    let updated = svc.decrement(created.id, 5).unwrap();
    assert_eq!(updated.quantity, 5);
    assert!(updated.quantity >= updated.min);
}

#[test]
fn decrement_past_min_is_rejected_and_leaves_quantity_unchanged() {
    let svc = service();
    let created = svc.create(brahma()).unwrap();

    let err = svc.decrement(created.id, 80).unwrap_err();
    assert_eq!(
        err,
        StockError::MinCapacityExceeded {
            id: created.id,
            amount: 80
        }
    );
    assert_eq!(svc.find_by_name("Brahma").unwrap().quantity, 10);
}

#[test]
fn decrement_on_unknown_id_is_not_found() {
    let svc = service();
    assert_eq!(
        svc.decrement(BeerId::new(), 10).unwrap_err(),
        StockError::NotFound
    );
}

#[test]
fn decrement_with_negative_amount_is_rejected() {
    let svc = service();
    let created = svc.create(brahma()).unwrap();

    let err = svc.decrement(created.id, -1).unwrap_err();
    assert_eq!(err, StockError::NegativeAmount(-1));
    assert_eq!(svc.find_by_name("Brahma").unwrap().quantity, 10);
}

#[test]
fn increment_by_huge_amount_is_over_capacity_not_a_panic() {
    let svc = service();
    let created = svc.create(brahma()).unwrap();

    // quantity + i64::MAX would overflow; it must surface as over-capacity.
    let err = svc.increment(created.id, i64::MAX).unwrap_err();
    assert_eq!(
        err,
        StockError::MaxCapacityExceeded {
            id: created.id,
            amount: i64::MAX
        }
    );
    assert_eq!(svc.find_by_name("Brahma").unwrap().quantity, 10);
}

#[test]
fn decrement_by_huge_amount_is_below_min_not_a_panic() {
    let svc = service();
    let mut input = brahma();
    input.quantity = 0;
    input.min = 0;
    let created = svc.create(input).unwrap();

    // 0 - i64::MAX lands far below min; must reject, not wrap.
    let err = svc.decrement(created.id, i64::MAX).unwrap_err();
    assert_eq!(
        err,
        StockError::MinCapacityExceeded {
            id: created.id,
            amount: i64::MAX
        }
    );
    assert_eq!(svc.find_by_name("Brahma").unwrap().quantity, 0);
}

// Worked lifecycle: empty stock, max 50, min 0.
#[test]
fn adjustment_lifecycle_respects_both_bounds() {
    let svc = service();
    let mut input = brahma();
    input.quantity = 0;
    let created = svc.create(input).unwrap();

    let after = svc.increment(created.id, 10).unwrap();
    assert_eq!(after.quantity, 10);

    // 10 + 45 = 55 > 50
    assert!(matches!(
        svc.increment(created.id, 45).unwrap_err(),
        StockError::MaxCapacityExceeded { .. }
    ));
    assert_eq!(svc.find_by_name("Brahma").unwrap().quantity, 10);

    // 10 - 15 = -5 < 0
    assert!(matches!(
        svc.decrement(created.id, 15).unwrap_err(),
        StockError::MinCapacityExceeded { .. }
    ));
    assert_eq!(svc.find_by_name("Brahma").unwrap().quantity, 10);

    let emptied = svc.decrement(created.id, 10).unwrap();
    assert_eq!(emptied.quantity, 0);
}

mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 512,
            ..ProptestConfig::default()
        })]

        /// Property: after any sequence of one adjustment, the capacity
        /// invariant holds on success and quantity is untouched on failure.
        #[test]
        fn adjustments_preserve_capacity_bounds(
            min in 0i64..100,
            span in 0i64..100,
            offset in 0i64..=100,
            amount in prop_oneof![-50i64..200, proptest::num::i64::ANY],
            up in proptest::bool::ANY,
        ) {
            let max = min + span;
            let quantity = min + (offset.min(span));

            let svc = service();
            let created = svc.create(NewBeer {
                name: "Property".to_string(),
                brand: "Lab".to_string(),
                style: BeerStyle::Stout,
                quantity,
                max,
                min,
            }).unwrap();

            let result = if up {
                svc.increment(created.id, amount)
            } else {
                svc.decrement(created.id, amount)
            };

            let stored = svc.find_by_name("Property").unwrap();
            match result {
                Ok(updated) => {
                    prop_assert!(updated.min <= updated.quantity);
                    prop_assert!(updated.quantity <= updated.max);
                    prop_assert_eq!(stored.quantity, updated.quantity);
                }
                Err(_) => prop_assert_eq!(stored.quantity, quantity),
            }
        }
    }
}
