//! Persistence trait for Order records

use crate::core::order::Order;
use anyhow::Result;
use async_trait::async_trait;

/// Durable access to Order records keyed by identifier
///
/// Implementations own identifier generation: `save` on an order without
/// an id assigns a fresh, never-reused one. The service layer is agnostic
/// to the underlying storage mechanism.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Get an order by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<Order>>;

    /// Insert (no id) or overwrite the full record at `order.id`
    async fn save(&self, order: Order) -> Result<Order>;

    /// List every order in ascending id order
    async fn find_all(&self) -> Result<Vec<Order>>;

    /// Delete an order; absent ids are not an error
    async fn delete_by_id(&self, id: i64) -> Result<()>;

    /// Delete every order
    async fn delete_all(&self) -> Result<()>;

    /// Number of stored orders
    async fn count(&self) -> Result<usize>;
}
