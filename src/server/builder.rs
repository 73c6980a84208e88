//! ServerBuilder for fluent API to build HTTP servers

use super::exposure::RestExposure;
use super::handlers::OrderAppState;
use crate::core::{OrderService, OrderStore};
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for the order HTTP server
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_store(InMemoryOrderStore::new())
///     .build()?;
/// ```
pub struct ServerBuilder {
    store: Option<Arc<dyn OrderStore>>,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            store: None,
            custom_routes: Vec::new(),
        }
    }

    /// Set the order store (required)
    pub fn with_store(mut self, store: impl OrderStore + 'static) -> Self {
        self.store = Some(Arc::new(store));
        self
    }

    /// Set an already shared order store (required)
    ///
    /// Use this when the caller keeps its own handle on the store, e.g. to
    /// seed fixtures in tests.
    pub fn with_shared_store(mut self, store: Arc<dyn OrderStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Add custom routes to the server
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the final REST router
    pub fn build(self) -> Result<Router> {
        let store = self
            .store
            .ok_or_else(|| anyhow::anyhow!("OrderStore is required. Call .with_store()"))?;

        let state = OrderAppState {
            service: OrderService::new(store),
        };

        Ok(RestExposure::build_router(state, self.custom_routes))
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds to the provided address and serves until SIGTERM or Ctrl+C.
    ///
    /// # Example
    ///
    /// ```ignore
    /// ServerBuilder::new()
    ///     .with_store(store)
    ///     .serve("127.0.0.1:8080").await?;
    /// ```
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
