//! The untyped resource instance and the typed-view trait.
//!
//! A [`Resource`] is a decoded JSON object tagged with its
//! [`ResourceKind`]. It can be read and modified field by field and sent back
//! to the API through [`create_fields`](Resource::create_fields) or
//! [`update_fields`](Resource::update_fields), which strip the fields the
//! kind marks as read-only for that operation.
//!
//! Types implementing [`TypedResource`] offer a strongly typed view of the
//! same data and convert to and from `Resource` through serde.
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_api::rest::{Resource, ResourceKind};
//! use serde_json::json;
//!
//! let mut variant = Resource::from_value(
//!     ResourceKind::ProductVariant,
//!     json!({"id": 7, "product_id": 3, "sku": "SKU-7", "price": 10.0}),
//! )
//! .unwrap();
//!
//! variant.set("price", json!(12.5));
//!
//! assert_eq!(variant.update_fields(), json!({"sku": "SKU-7", "price": 12.5}));
//! assert_eq!(variant.id(), Some(7));
//! ```

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use crate::rest::errors::json_type_name;
use crate::rest::{MappingError, ResourceKind};

/// A decoded JSON object tagged with its resource kind.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Resource {
    kind: ResourceKind,
    fields: Map<String, Value>,
}

impl Resource {
    /// Creates a resource from an already decoded field map.
    #[must_use]
    pub const fn new(kind: ResourceKind, fields: Map<String, Value>) -> Self {
        Self { kind, fields }
    }

    /// Creates a resource with no fields.
    #[must_use]
    pub fn empty(kind: ResourceKind) -> Self {
        Self::new(kind, Map::new())
    }

    /// Creates a resource from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::NotAnObject`] if `value` is not an object.
    pub fn from_value(kind: ResourceKind, value: Value) -> Result<Self, MappingError> {
        match value {
            Value::Object(fields) => Ok(Self::new(kind, fields)),
            other => Err(MappingError::NotAnObject {
                kind: kind.name(),
                found: json_type_name(&other),
            }),
        }
    }

    /// Returns the resource kind.
    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Returns all fields.
    #[must_use]
    pub const fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Returns a field value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Sets a field, returning its previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(name.into(), value.into())
    }

    /// Removes a field, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.fields.remove(name)
    }

    /// Returns the numeric `id` field, if present.
    #[must_use]
    pub fn id(&self) -> Option<u64> {
        self.fields.get("id").and_then(Value::as_u64)
    }

    /// Returns `true` if the resource has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the body to send when creating this resource.
    #[must_use]
    pub fn create_fields(&self) -> Value {
        self.without(self.kind.ignore_on_create())
    }

    /// Returns the body to send when updating this resource.
    #[must_use]
    pub fn update_fields(&self) -> Value {
        self.without(self.kind.ignore_on_update())
    }

    /// Consumes the resource, returning its fields as a JSON object.
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }

    /// Converts the resource into its typed view.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::Typed`] if the fields do not match `T`.
    pub fn into_typed<T: TypedResource>(self) -> Result<T, MappingError> {
        T::from_resource(self)
    }

    fn without(&self, excluded: &[&str]) -> Value {
        Value::Object(
            self.fields
                .iter()
                .filter(|(name, _)| !excluded.contains(&name.as_str()))
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect(),
        )
    }
}

impl Serialize for Resource {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

/// A strongly typed view of one resource kind.
///
/// Implementors only declare their [`KIND`](Self::KIND); conversion goes
/// through serde. Views should keep unknown fields (with
/// `#[serde(flatten)]`) so that a round trip through the view does not
/// lose data.
pub trait TypedResource: Serialize + DeserializeOwned + Sized {
    /// The kind this view represents.
    const KIND: ResourceKind;

    /// Builds the typed view from a mapped resource.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::Typed`] if the fields do not deserialize.
    fn from_resource(resource: Resource) -> Result<Self, MappingError> {
        serde_json::from_value(resource.into_value()).map_err(|source| MappingError::Typed {
            kind: Self::KIND.name(),
            source,
        })
    }

    /// Converts the typed view back into a resource of [`Self::KIND`].
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::Typed`] if serialization fails, or
    /// [`MappingError::NotAnObject`] if the view does not serialize to an
    /// object.
    fn to_resource(&self) -> Result<Resource, MappingError> {
        let value = serde_json::to_value(self).map_err(|source| MappingError::Typed {
            kind: Self::KIND.name(),
            source,
        })?;
        Resource::from_value(Self::KIND, value)
    }
}
