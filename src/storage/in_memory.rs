//! In-memory implementation of OrderStore for testing and development

use crate::core::{Order, OrderStore};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock};

/// In-memory order store
///
/// Useful for testing and development. Uses RwLock for thread-safe access
/// and a monotonic sequence for identifiers, starting at 1.
#[derive(Clone)]
pub struct InMemoryOrderStore {
    orders: Arc<RwLock<BTreeMap<i64, Order>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryOrderStore {
    /// Create a new in-memory order store
    pub fn new() -> Self {
        Self {
            orders: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

impl Default for InMemoryOrderStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Order>> {
        let orders = self
            .orders
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(orders.get(&id).cloned())
    }

    async fn save(&self, order: Order) -> Result<Order> {
        let mut orders = self
            .orders
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        // i64::MAX marks an exhausted sequence and is never handed out
        let id = match order.id {
            Some(id) => {
                self.next_id.fetch_max(id.saturating_add(1), Ordering::SeqCst);
                id
            }
            None => self
                .next_id
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |next| next.checked_add(1))
                .map_err(|_| anyhow!("Order id sequence exhausted"))?,
        };

        let saved = order.with_id(id);
        orders.insert(id, saved.clone());

        Ok(saved)
    }

    async fn find_all(&self) -> Result<Vec<Order>> {
        let orders = self
            .orders
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(orders.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        let mut orders = self
            .orders
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        orders.remove(&id);

        Ok(())
    }

    async fn delete_all(&self) -> Result<()> {
        let mut orders = self
            .orders
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        orders.clear();

        Ok(())
    }

    async fn count(&self) -> Result<usize> {
        let orders = self
            .orders
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(orders.len())
    }
}
