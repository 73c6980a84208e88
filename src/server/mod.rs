//! Server module for building the HTTP server
//!
//! This module provides a `ServerBuilder` that registers:
//! - CRUD routes for the Order resource under `/api`
//! - Health check routes

pub mod builder;
pub mod exposure;
pub mod handlers;
pub mod router;

pub use builder::ServerBuilder;
pub use handlers::OrderAppState;
