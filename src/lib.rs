//! # Simple Order Manager
//!
//! A minimal CRUD backend exposing Order records over an HTTP JSON API.
//!
//! ## Layers
//!
//! - **Record**: [`Order`](core::Order), the persisted shape of an order
//! - **Store**: [`OrderStore`](core::OrderStore), id-keyed persistence (in-memory or PostgreSQL)
//! - **Service**: [`OrderService`](core::OrderService), the identifier rules
//! - **Resource**: axum handlers under `/api/order`
//!
//! Dependencies are passed explicitly: the store into the service, the
//! service into the router state.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use simple_order_manager::prelude::*;
//!
//! ServerBuilder::new()
//!     .with_store(InMemoryOrderStore::new())
//!     .serve("127.0.0.1:8080")
//!     .await?;
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{Order, OrderService, OrderStore, ServiceError, ServiceResult};

    // === Storage ===
    pub use crate::storage::InMemoryOrderStore;
    #[cfg(feature = "postgres")]
    pub use crate::storage::PostgresOrderStore;

    // === Config ===
    pub use crate::config::AppConfig;

    // === Server ===
    pub use crate::server::{OrderAppState, ServerBuilder};

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use chrono::NaiveDate;
}
