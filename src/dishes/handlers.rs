//! HTTP handlers for dish routes
//!
//! Each handler is a linear pipeline: precondition checks in order, first
//! failure short-circuits via `?`, and only the terminal step mutates the
//! store.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::core::error::ApiError;
use crate::core::store::{Resource, resolve};
use crate::core::validation::{Payload, RequestBody};
use crate::server::{AppState, DataResponse};

use super::{Dish, valid_price};

/// GET /dishes
pub async fn list_dishes(State(state): State<AppState>) -> Json<DataResponse<Vec<Dish>>> {
    Json(DataResponse {
        data: state.dishes.list(),
    })
}

/// POST /dishes
///
/// Pipeline: presence of name, description, price; price validity; presence
/// of image_url.
pub async fn create_dish(
    State(state): State<AppState>,
    Json(body): Json<RequestBody>,
) -> Result<(StatusCode, Json<DataResponse<Dish>>), ApiError> {
    let payload = Payload::new(Resource::Dish, &body);

    let name = payload.require_string("name")?;
    let description = payload.require_string("description")?;
    payload.require("price")?;
    let price = valid_price(&payload)?;
    let image_url = payload.require_string("image_url")?;

    let dish = Dish {
        id: state.dishes.next_id(),
        name,
        description,
        price,
        image_url,
    };
    state.dishes.append(dish.clone());
    tracing::debug!(id = %dish.id, "dish created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: dish })))
}

/// GET /dishes/{dishId}
pub async fn read_dish(
    State(state): State<AppState>,
    Path(dish_id): Path<String>,
) -> Result<Json<DataResponse<Dish>>, ApiError> {
    let dish = resolve(&state.dishes, &dish_id)?;
    Ok(Json(DataResponse { data: dish }))
}

/// PUT /dishes/{dishId}
///
/// Pipeline: existence; price validity; id match; presence of name,
/// description, price, image_url. The record's identity never changes.
pub async fn update_dish(
    State(state): State<AppState>,
    Path(dish_id): Path<String>,
    Json(body): Json<RequestBody>,
) -> Result<Json<DataResponse<Dish>>, ApiError> {
    resolve(&state.dishes, &dish_id)?;

    let payload = Payload::new(Resource::Dish, &body);
    let price = valid_price(&payload)?;
    payload.check_id_matches(&dish_id)?;
    let name = payload.require_string("name")?;
    let description = payload.require_string("description")?;
    payload.require("price")?;
    let image_url = payload.require_string("image_url")?;

    let updated = state
        .dishes
        .update(&dish_id, |dish| {
            dish.name = name;
            dish.description = description;
            dish.price = price;
            dish.image_url = image_url;
        })
        .ok_or_else(|| not_found(&dish_id))?;
    tracing::debug!(id = %dish_id, "dish updated");

    Ok(Json(DataResponse { data: updated }))
}

// The existence check above makes this unreachable unless the record is
// removed between the check and the write lock.
fn not_found(id: &str) -> ApiError {
    crate::core::error::NotFoundError::Record {
        resource: Resource::Dish,
        id: id.to_string(),
    }
    .into()
}
