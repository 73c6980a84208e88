//! HTTP handlers for the Order resource
//!
//! Handlers only translate between HTTP and [`OrderService`]; every typed
//! failure becomes a response through [`ServiceError`]'s `IntoResponse`.

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::core::{Order, OrderService, OrderStore, ServiceError, ServiceResult};

/// Application state shared across order handlers
#[derive(Clone)]
pub struct OrderAppState {
    pub service: OrderService<dyn OrderStore>,
}

/// `GET /api/order` : list all orders
pub async fn list_orders(State(state): State<OrderAppState>) -> ServiceResult<Json<Vec<Order>>> {
    tracing::debug!("GET request for all orders");
    let orders = state.service.get_all().await?;
    Ok(Json(orders))
}

/// `POST /api/order` : create a new order
///
/// Responds `201 Created` with a `Location` header pointing at the new
/// order. A client-supplied `id` is ignored.
pub async fn create_order(
    State(state): State<OrderAppState>,
    Json(order): Json<Order>,
) -> ServiceResult<impl IntoResponse> {
    tracing::debug!(?order, "POST request to create order");
    let created = state.service.create_order(order).await?;
    let id = created.id.ok_or_else(|| {
        ServiceError::Storage(anyhow::anyhow!("store returned an order without id"))
    })?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/order/{}", id))],
        Json(created),
    ))
}

/// `PUT /api/order` : replace an existing order
///
/// Responds `400 Bad Request` when no order has the body's id.
pub async fn update_order(
    State(state): State<OrderAppState>,
    Json(order): Json<Order>,
) -> ServiceResult<Json<Order>> {
    tracing::debug!(?order, "PUT request to update order");
    let updated = state.service.update_order(order).await?;
    Ok(Json(updated))
}

/// `GET /api/order/{id}` : get one order
pub async fn get_order(
    State(state): State<OrderAppState>,
    Path(id): Path<i64>,
) -> ServiceResult<Json<Order>> {
    tracing::debug!(id, "GET request to get order");
    let order = state.service.get_order(id).await?;
    Ok(Json(order))
}

/// `DELETE /api/order/{id}` : delete one order
pub async fn delete_order(
    State(state): State<OrderAppState>,
    Path(id): Path<i64>,
) -> ServiceResult<&'static str> {
    tracing::debug!(id, "DELETE request to delete order");
    state.service.delete_order(id).await?;
    Ok("Order deleted")
}
