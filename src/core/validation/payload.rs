//! Request envelope and the generic field presence check

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::core::error::{ApiError, ValidationError};
use crate::core::store::Resource;

/// Request envelope: every mutation body arrives as `{ "data": { .. } }`
///
/// A missing or non-object `data` behaves like an empty object, so each
/// presence check reports its own field rather than the envelope.
#[derive(Debug, Default, Deserialize)]
pub struct RequestBody {
    #[serde(default)]
    pub data: Value,
}

impl RequestBody {
    /// Wrap a raw `data` value, mainly for tests
    pub fn from_data(data: Value) -> Self {
        Self { data }
    }
}

/// View over a request body's `data` object, scoped to one resource so
/// failure messages name the right noun
#[derive(Clone, Copy)]
pub struct Payload<'a> {
    resource: Resource,
    data: Option<&'a Map<String, Value>>,
}

impl<'a> Payload<'a> {
    pub fn new(resource: Resource, body: &'a RequestBody) -> Self {
        Self {
            resource,
            data: body.data.as_object(),
        }
    }

    pub fn resource(&self) -> Resource {
        self.resource
    }

    /// Raw field access; absent and JSON `null` are both "not supplied"
    pub fn field(&self, name: &str) -> Option<&'a Value> {
        self.data
            .and_then(|data| data.get(name))
            .filter(|value| !value.is_null())
    }

    /// Field presence check: fails when the field is absent, null, or an
    /// empty string. Applied once per required field, in pipeline order, so
    /// the first missing field is the one reported.
    pub fn require(&self, field: &'static str) -> Result<&'a Value, ApiError> {
        match self.field(field) {
            Some(value) if value.as_str().is_none_or(|s| !s.is_empty()) => Ok(value),
            _ => Err(self.missing(field)),
        }
    }

    /// Presence check for string-typed fields
    ///
    /// A non-string value cannot enter the typed record, so it fails the same
    /// way an absent field does.
    pub fn require_string(&self, field: &'static str) -> Result<String, ApiError> {
        match self.field(field).and_then(Value::as_str) {
            Some(s) if !s.is_empty() => Ok(s.to_string()),
            _ => Err(self.missing(field)),
        }
    }

    /// Id-match validity: a body-supplied `id` must equal the route id
    ///
    /// An absent, null, or empty-string id is treated as "not supplied" and
    /// passes; the store-assigned id is authoritative.
    pub fn check_id_matches(&self, route_id: &str) -> Result<(), ApiError> {
        let Some(value) = self.field("id") else {
            return Ok(());
        };
        let body_id = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        if body_id.is_empty() || body_id == route_id {
            return Ok(());
        }
        Err(ValidationError::IdMismatch {
            resource: self.resource,
            body_id,
            route_id: route_id.to_string(),
        }
        .into())
    }

    fn missing(&self, field: &'static str) -> ApiError {
        ValidationError::MissingField {
            resource: self.resource,
            field,
        }
        .into()
    }
}
