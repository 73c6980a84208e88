//! Router builder for the Order resource

use crate::server::handlers::{
    OrderAppState, create_order, delete_order, get_order, list_orders, update_order,
};
use axum::{Router, routing::get};

/// Build the order routes
///
/// - GET /api/order - List all orders
/// - POST /api/order - Create an order (client id ignored)
/// - PUT /api/order - Replace an existing order
/// - GET /api/order/{id} - Get a specific order
/// - DELETE /api/order/{id} - Delete a specific order
pub fn build_order_routes(state: OrderAppState) -> Router {
    Router::new()
        .route(
            "/api/order",
            get(list_orders).post(create_order).put(update_order),
        )
        .route("/api/order/{id}", get(get_order).delete(delete_order))
        .with_state(state)
}
