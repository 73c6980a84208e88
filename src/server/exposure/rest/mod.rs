//! REST API exposure
//!
//! Consumes the order application state and produces an Axum `Router`
//! with health checks, the order resource and any custom routes.

use crate::server::handlers::OrderAppState;
use crate::server::router::build_order_routes;
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router
    ///
    /// Returns a router with:
    /// - Health check routes
    /// - Order CRUD routes
    /// - Custom routes
    ///
    /// wrapped in an HTTP trace layer.
    pub fn build_router(state: OrderAppState, custom_routes: Vec<Router>) -> Router {
        let mut app = Self::health_routes().merge(build_order_routes(state));

        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        app.layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
    }

    /// Build health check routes
    fn health_routes() -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
    }

    /// Health check endpoint handler
    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": "simple-order-manager"
        }))
    }
}
