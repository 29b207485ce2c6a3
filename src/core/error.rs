//! Typed error handling for the eatery API
//!
//! Every failure a pipeline step can produce is represented here, so handlers
//! short-circuit with `?` and clients receive the exact status code and
//! message the wire contract promises.
//!
//! # Error Categories
//!
//! - [`ValidationError`]: malformed, missing, or invalid request input (400)
//! - [`NotFoundError`]: a referenced record id is absent from its store (404)
//! - [`InvalidStateError`]: the operation is disallowed by the record's
//!   current state, e.g. deleting a non-pending order (400)

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::core::store::Resource;

/// The main error type for the eatery API
///
/// Each variant wraps a more specific error type for that category.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request input failed a validation check
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A referenced record does not exist
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The record's current state forbids the operation
    #[error(transparent)]
    InvalidState(#[from] InvalidStateError),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidState(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// Error response structure for HTTP responses
///
/// The wire contract is a bare `{ "message": "<text>" }` body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse {
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

/// Errors for malformed or invalid request input
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is absent, null, or an empty string
    #[error("{resource} must include a {field}")]
    MissingField {
        resource: Resource,
        field: &'static str,
    },

    /// A dish price must be an integer strictly greater than zero
    #[error("Dish must have a price that is an integer greater than 0")]
    InvalidPrice,

    /// An order's dish list must be a non-empty array
    #[error("Order must include at least one dish")]
    EmptyDishList,

    /// A line item's quantity must be an integer strictly greater than zero
    #[error("Dish {index} must have a quantity that is an integer greater than 0")]
    InvalidQuantity { index: usize },

    /// A body-supplied id must match the route id
    #[error("{resource} id does not match route id. {resource}: {body_id}, Route: {route_id}")]
    IdMismatch {
        resource: Resource,
        body_id: String,
        route_id: String,
    },

    /// An order status outside the accepted set
    #[error("Order must have a status of pending, preparing, out-for-delivery, delivered")]
    InvalidStatus,
}

/// Errors for absent records
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotFoundError {
    /// No record in the store carries the requested id
    #[error("{resource} ID does not exist: {id}")]
    Record { resource: Resource, id: String },
}

/// Errors for operations forbidden by a record's current state
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidStateError {
    /// Delivered orders are terminal and cannot be modified
    #[error("A delivered order cannot be changed")]
    DeliveredImmutable,

    /// Only pending orders may be deleted
    #[error("An order cannot be deleted unless it is pending.")]
    DeleteNonPending,
}
