//! Macro-generated test suite for `OrderStore` contract validation.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//!
//! use storage_harness::*;
//! use simple_order_manager::storage::InMemoryOrderStore;
//!
//! order_store_tests!(InMemoryOrderStore::new());
//! ```
//!
//! # Generated Tests
//!
//! - `test_save_assigns_id_and_find_by_id` — insert then retrieve, verify all fields
//! - `test_find_by_id_nonexistent` — unknown id returns None
//! - `test_find_all_empty` — empty store lists nothing
//! - `test_find_all_in_insertion_order` — ids ascend with insertion
//! - `test_generated_ids_are_unique` — batch insert yields distinct ids
//! - `test_save_with_existing_id_overwrites` — full replacement, count unchanged
//! - `test_explicit_id_does_not_collide_with_generated` — upsert then insert
//! - `test_ids_not_reused_after_delete_and_update` — overwrite after delete keeps the sequence ahead
//! - `test_delete_by_id` / `test_delete_nonexistent_is_ok`
//! - `test_created_minus_deleted` — N creates, M deletes, N−M remain
//! - `test_delete_all_and_count`
//! - `test_concurrent_saves` — parallel inserts from spawned tasks

/// Generate a full `OrderStore` conformance test suite.
///
/// `$factory` must evaluate to a fresh, empty store implementing
/// `OrderStore + 'static`. It is re-evaluated for each test.
#[macro_export]
macro_rules! order_store_tests {
    ($factory:expr) => {
        mod order_store_contract_tests {
            use super::*;
            use simple_order_manager::core::OrderStore;
            use std::collections::HashSet;
            use std::sync::Arc;

            #[tokio::test]
            async fn test_save_assigns_id_and_find_by_id() {
                let store = $factory;
                let saved = store.save(water_order()).await.unwrap();

                let id = saved.id.expect("store must assign an id");
                assert_same_fields(&saved, &water_order());

                let found = store.find_by_id(id).await.unwrap();
                assert_eq!(found, Some(saved));
            }

            #[tokio::test]
            async fn test_find_by_id_nonexistent() {
                let store = $factory;
                assert_eq!(store.find_by_id(424242).await.unwrap(), None);
            }

            #[tokio::test]
            async fn test_find_all_empty() {
                let store = $factory;
                assert_count(&store.find_all().await.unwrap(), 0);
                assert_eq!(store.count().await.unwrap(), 0);
            }

            #[tokio::test]
            async fn test_find_all_in_insertion_order() {
                let store = $factory;
                let first = store.save(water_order()).await.unwrap();
                let second = store.save(pizza_order()).await.unwrap();
                let third = store.save(bread_order()).await.unwrap();

                let all = store.find_all().await.unwrap();
                assert_eq!(all, vec![first, second, third]);
            }

            #[tokio::test]
            async fn test_generated_ids_are_unique() {
                let store = $factory;
                let mut ids = HashSet::new();
                for order in sample_batch(10) {
                    let saved = store.save(order).await.unwrap();
                    assert!(ids.insert(saved.id.unwrap()), "duplicate id {:?}", saved.id);
                }
                assert_eq!(store.count().await.unwrap(), 10);
            }

            #[tokio::test]
            async fn test_save_with_existing_id_overwrites() {
                let store = $factory;
                let first = store.save(water_order()).await.unwrap();
                let second = store.save(pizza_order()).await.unwrap();
                let id = first.id.unwrap();

                let replaced = store.save(bread_order().with_id(id)).await.unwrap();
                assert_eq!(replaced.id, Some(id));
                assert_same_fields(&replaced, &bread_order());

                assert_eq!(store.find_by_id(id).await.unwrap(), Some(replaced));
                assert_eq!(store.find_by_id(second.id.unwrap()).await.unwrap(), Some(second));
                assert_eq!(store.count().await.unwrap(), 2);
            }

            #[tokio::test]
            async fn test_explicit_id_does_not_collide_with_generated() {
                let store = $factory;
                let existing = store.save(water_order()).await.unwrap();
                let explicit_id = existing.id.unwrap() + 100;

                store.save(pizza_order().with_id(explicit_id)).await.unwrap();
                let generated = store.save(bread_order()).await.unwrap();

                assert_ne!(generated.id, Some(explicit_id));
                assert_ne!(generated.id, existing.id);
                assert_eq!(store.count().await.unwrap(), 3);
            }

            #[tokio::test]
            async fn test_ids_not_reused_after_delete_and_update() {
                let store = $factory;
                let first = store.save(water_order()).await.unwrap();
                let second = store.save(pizza_order()).await.unwrap();

                store.delete_by_id(second.id.unwrap()).await.unwrap();
                store
                    .save(bread_order().with_id(first.id.unwrap()))
                    .await
                    .unwrap();
                let third = store.save(pizza_order()).await.unwrap();

                assert_ne!(third.id, second.id);
                assert_ne!(third.id, first.id);
                assert_eq!(store.count().await.unwrap(), 2);
            }

            #[tokio::test]
            async fn test_delete_by_id() {
                let store = $factory;
                let first = store.save(water_order()).await.unwrap();
                let second = store.save(pizza_order()).await.unwrap();

                store.delete_by_id(second.id.unwrap()).await.unwrap();

                assert_eq!(store.find_by_id(second.id.unwrap()).await.unwrap(), None);
                assert_eq!(store.find_all().await.unwrap(), vec![first]);
            }

            #[tokio::test]
            async fn test_delete_nonexistent_is_ok() {
                let store = $factory;
                store.save(water_order()).await.unwrap();

                store.delete_by_id(424242).await.unwrap();
                assert_eq!(store.count().await.unwrap(), 1);
            }

            #[tokio::test]
            async fn test_created_minus_deleted() {
                let store = $factory;
                let mut saved = Vec::new();
                for order in sample_batch(6) {
                    saved.push(store.save(order).await.unwrap());
                }
                for order in saved.iter().step_by(2) {
                    store.delete_by_id(order.id.unwrap()).await.unwrap();
                }

                let remaining = store.find_all().await.unwrap();
                let expected: Vec<_> = saved.into_iter().skip(1).step_by(2).collect();
                assert_count(&remaining, 3);
                assert_eq!(remaining, expected);
            }

            #[tokio::test]
            async fn test_delete_all_and_count() {
                let store = $factory;
                for order in sample_batch(4) {
                    store.save(order).await.unwrap();
                }
                assert_eq!(store.count().await.unwrap(), 4);

                store.delete_all().await.unwrap();
                assert_eq!(store.count().await.unwrap(), 0);
                assert_count(&store.find_all().await.unwrap(), 0);
            }

            #[tokio::test]
            async fn test_concurrent_saves() {
                let store = Arc::new($factory);
                let mut handles = Vec::new();
                for order in sample_batch(8) {
                    let store = store.clone();
                    handles.push(tokio::spawn(async move { store.save(order).await }));
                }

                let mut ids = HashSet::new();
                for handle in handles {
                    let saved = handle.await.unwrap().unwrap();
                    ids.insert(saved.id.unwrap());
                }

                assert_eq!(ids.len(), 8);
                assert_eq!(store.count().await.unwrap(), 8);
            }
        }
    };
}
