//! Core building blocks: error taxonomy, record stores, request validation

pub mod error;
pub mod store;
pub mod validation;

pub use error::{ApiError, InvalidStateError, NotFoundError, ValidationError};
pub use store::{Record, RecordStore, Resource, resolve};
pub use validation::{Payload, RequestBody};
