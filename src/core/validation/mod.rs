//! Request validation building blocks
//!
//! Mutation handlers run an ordered pipeline of precondition checks; the
//! first failing check short-circuits with an [`crate::core::error::ApiError`]
//! and no mutation occurs. This module holds the pieces shared by every
//! resource; the resource-specific validators live next to their types in
//! [`crate::dishes`] and [`crate::orders`].

mod payload;

pub use payload::{Payload, RequestBody};
