//! Typed error handling for order operations
//!
//! Service operations return [`ServiceResult`] instead of panicking or
//! throwing. The HTTP layer turns a [`ServiceError`] into a response through
//! its [`IntoResponse`] implementation.
//!
//! # Example
//!
//! ```rust,ignore
//! match service.get_order(42).await {
//!     Ok(order) => println!("Found: {:?}", order),
//!     Err(ServiceError::EntityNotFound { id, .. }) => println!("no order {}", id),
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors returned by [`OrderService`](crate::core::service::OrderService)
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// A lookup by identifier required for update, read or delete found nothing
    #[error("Entity {entity} with id: {id} not found")]
    EntityNotFound { entity: &'static str, id: i64 },

    /// The store failed (connection loss, constraint violation, poisoned lock...)
    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl ServiceError {
    /// Not-found error for the Order entity
    pub fn order_not_found(id: i64) -> Self {
        ServiceError::EntityNotFound { entity: "Order", id }
    }

    /// Get the HTTP status code for this error
    ///
    /// Not-found maps to 400, not 404: clients of this API rely on it.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::EntityNotFound { .. } => StatusCode::BAD_REQUEST,
            ServiceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ServiceError::EntityNotFound { .. } => "ENTITY_NOT_FOUND",
            ServiceError::Storage(_) => "STORAGE_ERROR",
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ServiceError::EntityNotFound { .. } => (status, self.to_string()).into_response(),
            ServiceError::Storage(ref cause) => {
                tracing::error!(error = %cause, code = self.error_code(), "Order store failure");
                (status, "Internal server error").into_response()
            }
        }
    }
}

/// Result type alias for order service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
