//! # Eatery
//!
//! A small restaurant-ordering API: dishes and orders backed by in-memory
//! stores, with a validation pipeline in front of every mutation.
//!
//! ## Features
//!
//! - **Validation Pipeline**: Ordered precondition checks per route; the
//!   first failure short-circuits with the exact status and message the wire
//!   contract promises
//! - **State Transitions**: Delivered orders are immutable; only pending
//!   orders can be deleted
//! - **Injected Stores**: Per-resource collections behind their own locks,
//!   owned by the application state rather than globals
//! - **Typed Errors**: `ValidationError` / `NotFoundError` /
//!   `InvalidStateError`, each mapping to its HTTP response
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use eatery::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     AppBuilder::new().serve(&AppConfig::default()).await
//! }
//! ```

pub mod config;
pub mod core;
pub mod dishes;
pub mod orders;
pub mod server;

/// Re-exports of commonly used types
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        error::{ApiError, ErrorResponse, InvalidStateError, NotFoundError, ValidationError},
        store::{Record, RecordStore, Resource, resolve},
        validation::{Payload, RequestBody},
    };

    // === Resources ===
    pub use crate::dishes::Dish;
    pub use crate::orders::{Order, OrderLineItem, OrderStatus};

    // === Config ===
    pub use crate::config::AppConfig;

    // === Server ===
    pub use crate::server::{AppBuilder, AppState, DataResponse, build_routes};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use axum::Router;
    pub use serde::{Deserialize, Serialize};
}
