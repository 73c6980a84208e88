//! Business rules over an [`OrderStore`]
//!
//! The service owns the identifier invariants:
//! - creation always ignores a client-supplied id
//! - update only succeeds against an id that already exists
//! - reads and deletes of a missing id fail with [`ServiceError::EntityNotFound`]

use crate::core::error::{ServiceError, ServiceResult};
use crate::core::order::Order;
use crate::core::store::OrderStore;
use std::sync::Arc;

/// Order operations wrapping a store
///
/// The store is passed in at construction; cloning the service shares it.
pub struct OrderService<S: ?Sized> {
    store: Arc<S>,
}

impl<S: ?Sized> Clone for OrderService<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<S: OrderStore + ?Sized> OrderService<S> {
    /// Create a service over the given store
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// List every stored order
    pub async fn get_all(&self) -> ServiceResult<Vec<Order>> {
        Ok(self.store.find_all().await?)
    }

    /// Persist a new order built from the input's fields
    ///
    /// Any `id` on the input is discarded; the store assigns a fresh one.
    pub async fn create_order(&self, input: Order) -> ServiceResult<Order> {
        let order = Order::new(
            input.order_name,
            input.buyer_name,
            input.buyer_surname,
            input.date,
        );
        Ok(self.store.save(order).await?)
    }

    /// Replace every field of an existing order
    ///
    /// An input without an id is looked up as id `0`, which no store assigns.
    pub async fn update_order(&self, input: Order) -> ServiceResult<Order> {
        let id = input.id.unwrap_or_default();
        if self.store.find_by_id(id).await?.is_none() {
            tracing::debug!(id, "update rejected, order does not exist");
            return Err(ServiceError::order_not_found(id));
        }
        Ok(self.store.save(input.with_id(id)).await?)
    }

    /// Get a single order
    pub async fn get_order(&self, id: i64) -> ServiceResult<Order> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::order_not_found(id))
    }

    /// Delete an existing order
    pub async fn delete_order(&self, id: i64) -> ServiceResult<()> {
        if self.store.find_by_id(id).await?.is_none() {
            tracing::debug!(id, "delete rejected, order does not exist");
            return Err(ServiceError::order_not_found(id));
        }
        self.store.delete_by_id(id).await?;
        Ok(())
    }
}
