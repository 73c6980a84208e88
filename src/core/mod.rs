//! Core module containing the Order record, store trait and service

pub mod error;
pub mod order;
pub mod service;
pub mod store;

pub use error::{ServiceError, ServiceResult};
pub use order::Order;
pub use service::OrderService;
pub use store::OrderStore;
