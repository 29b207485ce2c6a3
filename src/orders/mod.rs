//! Order resource: delivery orders holding a sequence of dish line items
//!
//! Orders move through `pending → preparing → out-for-delivery → delivered`.
//! A delivered order is immutable, and only a pending order may be deleted.

pub mod handlers;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::error::{ApiError, InvalidStateError, ValidationError};
use crate::core::store::{Record, Resource};
use crate::core::validation::Payload;

/// Lifecycle status of an order
///
/// Creation does not take a status; new orders start as `Pending`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
}

/// One dish-with-quantity entry within an order
///
/// Dish fields captured at order time, `dishId` included, ride along untyped;
/// only the quantity carries validation rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineItem {
    pub quantity: i64,
    #[serde(flatten)]
    pub dish: Map<String, Value>,
}

/// A delivery order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    #[serde(rename = "deliverTo")]
    pub deliver_to: String,
    #[serde(rename = "mobileNumber")]
    pub mobile_number: String,
    #[serde(default)]
    pub status: OrderStatus,
    pub dishes: Vec<OrderLineItem>,
}

impl Record for Order {
    const RESOURCE: Resource = Resource::Order;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Dish-list validity followed by the per-line quantity scan
///
/// The scan returns on the first bad line item, reporting its position, so a
/// mid-sequence failure short-circuits the whole pipeline rather than one
/// iteration.
pub fn valid_dishes(payload: &Payload<'_>) -> Result<Vec<OrderLineItem>, ApiError> {
    let raw = payload
        .field("dishes")
        .and_then(Value::as_array)
        .filter(|items| !items.is_empty())
        .ok_or(ValidationError::EmptyDishList)?;

    let mut dishes = Vec::with_capacity(raw.len());
    for (index, item) in raw.iter().enumerate() {
        let Some(fields) = item.as_object() else {
            return Err(ValidationError::InvalidQuantity { index }.into());
        };
        let quantity = fields
            .get("quantity")
            .and_then(Value::as_i64)
            .filter(|quantity| *quantity > 0)
            .ok_or(ValidationError::InvalidQuantity { index })?;
        let mut dish = fields.clone();
        dish.remove("quantity");
        dishes.push(OrderLineItem { quantity, dish });
    }
    Ok(dishes)
}

/// Status validity for updates
///
/// Accepts `pending`, `preparing`, and `out-for-delivery`. `delivered` is a
/// terminal state a client may never set; anything else is not a status.
pub fn valid_status(raw: &str) -> Result<OrderStatus, ApiError> {
    let status = match raw {
        "pending" => OrderStatus::Pending,
        "preparing" => OrderStatus::Preparing,
        "out-for-delivery" => OrderStatus::OutForDelivery,
        "delivered" => return Err(InvalidStateError::DeliveredImmutable.into()),
        _ => return Err(ValidationError::InvalidStatus.into()),
    };
    Ok(status)
}
