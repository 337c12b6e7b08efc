//! Binds decoded JSON bodies to resources.
//!
//! v3 responses wrap their payload in a `data` envelope; v2 responses do
//! not. Both mapping functions unwrap `data` when it is present, so the same
//! functions serve both API versions.

use serde_json::Value;

use crate::rest::errors::json_type_name;
use crate::rest::{MappingError, Resource, ResourceKind};

fn unwrap_data(value: Value) -> Value {
    match value {
        Value::Object(mut object) if object.contains_key("data") => {
            object.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// Maps a single-resource body.
///
/// An object becomes a resource of `kind`. `null` (an empty body, e.g. after
/// a 204) becomes an empty [`ResourceKind::Generic`] resource.
///
/// # Errors
///
/// Returns [`MappingError::NotAnObject`] for any other shape.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::rest::{mapper, ResourceKind};
/// use serde_json::json;
///
/// let product = mapper::map_resource(
///     ResourceKind::Product,
///     json!({"data": {"id": 1, "name": "Shirt"}, "meta": {}}),
/// )
/// .unwrap();
///
/// assert_eq!(product.kind(), ResourceKind::Product);
/// assert_eq!(product.id(), Some(1));
/// ```
pub fn map_resource(kind: ResourceKind, value: Value) -> Result<Resource, MappingError> {
    match unwrap_data(value) {
        Value::Null => Ok(Resource::empty(ResourceKind::Generic)),
        other => Resource::from_value(kind, other),
    }
}

/// Maps a collection body.
///
/// Every element of the array becomes a resource of `kind`, in order. An
/// empty array and an empty body (`null`, as sent with 204 No Content) both
/// yield an empty `Vec`.
///
/// # Errors
///
/// Returns [`MappingError::NotACollection`] if the body is not an array, or
/// [`MappingError::NotAnObject`] if an element is not an object.
pub fn map_collection(kind: ResourceKind, value: Value) -> Result<Vec<Resource>, MappingError> {
    match unwrap_data(value) {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items
            .into_iter()
            .map(|item| Resource::from_value(kind, item))
            .collect(),
        other => Err(MappingError::NotACollection {
            kind: kind.name(),
            found: json_type_name(&other),
        }),
    }
}

/// Reads the `count` field of a count body.
///
/// # Errors
///
/// Returns [`MappingError::MissingCount`] if `count` is absent or not a
/// non-negative integer.
pub fn map_count(value: &Value) -> Result<u64, MappingError> {
    value
        .get("count")
        .and_then(Value::as_u64)
        .ok_or(MappingError::MissingCount {
            found: json_type_name(value),
        })
}
