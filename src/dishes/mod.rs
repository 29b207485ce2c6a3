//! Dish resource: menu entries with a name, description, price, and image
//!
//! Dishes are created and updated but never deleted; there is no delete
//! endpoint for this resource.

pub mod handlers;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::error::{ApiError, ValidationError};
use crate::core::store::{Record, Resource};
use crate::core::validation::Payload;

/// A menu entry
///
/// After validation the price is always a positive integer and the three
/// descriptive string fields are non-empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub image_url: String,
}

impl Record for Dish {
    const RESOURCE: Resource = Resource::Dish;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Price validity: an integer strictly greater than zero
///
/// Floats and numeric strings are rejected; only a JSON integer passes.
pub fn valid_price(payload: &Payload<'_>) -> Result<i64, ApiError> {
    match payload.field("price").and_then(Value::as_i64) {
        Some(price) if price > 0 => Ok(price),
        _ => Err(ValidationError::InvalidPrice.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::RequestBody;
    use serde_json::json;

    fn price_of(data: Value) -> Result<i64, ApiError> {
        let body = RequestBody::from_data(data);
        valid_price(&Payload::new(Resource::Dish, &body))
    }

    #[test]
    fn test_positive_integer_price_passes() {
        assert_eq!(price_of(json!({ "price": 22 })).unwrap(), 22);
    }

    #[test]
    fn test_zero_price_fails() {
        assert!(price_of(json!({ "price": 0 })).is_err());
    }

    #[test]
    fn test_negative_price_fails() {
        assert!(price_of(json!({ "price": -5 })).is_err());
    }

    #[test]
    fn test_float_price_fails() {
        assert!(price_of(json!({ "price": 3.5 })).is_err());
    }

    #[test]
    fn test_string_price_fails() {
        let err = price_of(json!({ "price": "10" })).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Dish must have a price that is an integer greater than 0"
        );
    }

    #[test]
    fn test_missing_price_fails() {
        assert!(price_of(json!({})).is_err());
    }

    #[test]
    fn test_dish_serializes_with_original_field_names() {
        let dish = Dish {
            id: "1".to_string(),
            name: "Pad thai".to_string(),
            description: "Rice noodles".to_string(),
            price: 15,
            image_url: "https://example.com/pad-thai.png".to_string(),
        };
        let value = serde_json::to_value(&dish).unwrap();
        assert_eq!(value["image_url"], "https://example.com/pad-thai.png");
        assert_eq!(value["price"], 15);
    }
}
