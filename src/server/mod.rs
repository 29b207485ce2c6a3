//! HTTP delivery surface: shared state, route assembly, and the app builder

pub mod builder;
pub mod router;

pub use builder::AppBuilder;
pub use router::build_routes;

use serde::Serialize;

use crate::core::store::RecordStore;
use crate::dishes::Dish;
use crate::orders::Order;

/// Application state shared across handlers
///
/// Each resource owns one store instance; handlers receive the state by
/// clone, which clones the store handles, not the collections.
#[derive(Clone, Default)]
pub struct AppState {
    pub dishes: RecordStore<Dish>,
    pub orders: RecordStore<Order>,
}

/// Success envelope: every 2xx body with content is `{ "data": .. }`
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}
