//! HTTP handlers for order routes
//!
//! Same shape as the dish handlers: an ordered pipeline of precondition
//! checks, first failure short-circuits, terminal step mutates the store.
//! Orders additionally carry state-transition rules: a delivered order is
//! immutable and only a pending order may be deleted.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::core::error::{ApiError, InvalidStateError, NotFoundError};
use crate::core::store::{Resource, resolve};
use crate::core::validation::{Payload, RequestBody};
use crate::server::{AppState, DataResponse};

use super::{Order, OrderStatus, valid_dishes, valid_status};

/// GET /orders
pub async fn list_orders(State(state): State<AppState>) -> Json<DataResponse<Vec<Order>>> {
    Json(DataResponse {
        data: state.orders.list(),
    })
}

/// POST /orders
///
/// Pipeline: presence of deliverTo, mobileNumber, dishes; dish-list validity;
/// quantity validity. No status is taken; new orders start as pending.
pub async fn create_order(
    State(state): State<AppState>,
    Json(body): Json<RequestBody>,
) -> Result<(StatusCode, Json<DataResponse<Order>>), ApiError> {
    let payload = Payload::new(Resource::Order, &body);

    let deliver_to = payload.require_string("deliverTo")?;
    let mobile_number = payload.require_string("mobileNumber")?;
    payload.require("dishes")?;
    let dishes = valid_dishes(&payload)?;

    let order = Order {
        id: state.orders.next_id(),
        deliver_to,
        mobile_number,
        status: OrderStatus::Pending,
        dishes,
    };
    state.orders.append(order.clone());
    tracing::debug!(id = %order.id, "order created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: order })))
}

/// GET /orders/{orderId}
pub async fn read_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<DataResponse<Order>>, ApiError> {
    let order = resolve(&state.orders, &order_id)?;
    Ok(Json(DataResponse { data: order }))
}

/// PUT /orders/{orderId}
///
/// Pipeline: presence of deliverTo, mobileNumber, dishes, status; existence;
/// dish-list validity; quantity validity; id match; status validity; stored
/// delivered orders are immutable.
pub async fn update_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
    Json(body): Json<RequestBody>,
) -> Result<Json<DataResponse<Order>>, ApiError> {
    let payload = Payload::new(Resource::Order, &body);

    let deliver_to = payload.require_string("deliverTo")?;
    let mobile_number = payload.require_string("mobileNumber")?;
    payload.require("dishes")?;
    let raw_status = payload.require_string("status")?;

    let existing = resolve(&state.orders, &order_id)?;

    let dishes = valid_dishes(&payload)?;
    payload.check_id_matches(&order_id)?;
    let status = valid_status(&raw_status)?;

    if existing.status == OrderStatus::Delivered {
        return Err(InvalidStateError::DeliveredImmutable.into());
    }

    let updated = state
        .orders
        .update(&order_id, |order| {
            order.deliver_to = deliver_to;
            order.mobile_number = mobile_number;
            order.dishes = dishes;
            order.status = status;
        })
        .ok_or_else(|| not_found(&order_id))?;
    tracing::debug!(id = %order_id, status = ?updated.status, "order updated");

    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /orders/{orderId}
///
/// Pipeline: existence; pending-status check; removal. Responds 204 with an
/// empty body.
pub async fn delete_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let order = resolve(&state.orders, &order_id)?;

    if order.status != OrderStatus::Pending {
        return Err(InvalidStateError::DeleteNonPending.into());
    }

    state
        .orders
        .remove(&order_id)
        .ok_or_else(|| not_found(&order_id))?;
    tracing::debug!(id = %order_id, "order deleted");

    Ok(StatusCode::NO_CONTENT)
}

// Unreachable unless the record is removed between the existence check and
// the write lock.
fn not_found(id: &str) -> ApiError {
    NotFoundError::Record {
        resource: Resource::Order,
        id: id.to_string(),
    }
    .into()
}
