//! AppBuilder for fluent assembly and serving of the application

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;

use crate::config::AppConfig;
use crate::core::store::RecordStore;
use crate::dishes::Dish;
use crate::orders::Order;

use super::router::build_routes;
use super::AppState;

/// Builder for the eatery application
///
/// Stores are injected rather than global, so every test can build an app
/// around its own isolated collections.
///
/// # Example
///
/// ```ignore
/// let app = AppBuilder::new()
///     .with_dishes(seed_dishes)
///     .build();
/// ```
pub struct AppBuilder {
    dishes: RecordStore<Dish>,
    orders: RecordStore<Order>,
}

impl AppBuilder {
    /// Create a builder with empty stores
    pub fn new() -> Self {
        Self {
            dishes: RecordStore::new(),
            orders: RecordStore::new(),
        }
    }

    /// Seed the dish store with existing records
    pub fn with_dishes(mut self, dishes: Vec<Dish>) -> Self {
        self.dishes = RecordStore::with_records(dishes);
        self
    }

    /// Seed the order store with existing records
    pub fn with_orders(mut self, orders: Vec<Order>) -> Self {
        self.orders = RecordStore::with_records(orders);
        self
    }

    /// Use an already-constructed dish store
    pub fn with_dish_store(mut self, store: RecordStore<Dish>) -> Self {
        self.dishes = store;
        self
    }

    /// Use an already-constructed order store
    pub fn with_order_store(mut self, store: RecordStore<Order>) -> Self {
        self.orders = store;
        self
    }

    /// Build the axum router
    pub fn build(self) -> Router {
        build_routes(AppState {
            dishes: self.dishes,
            orders: self.orders,
        })
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds to the configured address, serves requests, and handles SIGTERM
    /// and Ctrl+C.
    pub async fn serve(self, config: &AppConfig) -> Result<()> {
        let addr = config.bind_addr();
        let app = self.build();
        let listener = TcpListener::bind(&addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Install the default tracing subscriber, filtered by `RUST_LOG`
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
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
