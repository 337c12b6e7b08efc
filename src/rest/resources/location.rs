//! Inventory location view.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::rest::{ResourceKind, TypedResource};

/// An inventory location (`/v3/inventory/locations`).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Location {
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// A short code, unique within the store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// The display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether inventory here is synced from an external system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_by_external_source: Option<bool>,

    /// The location type, such as `PHYSICAL` or `VIRTUAL`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_id: Option<String>,

    /// Whether the location is active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// The postal address object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Value>,

    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TypedResource for Location {
    const KIND: ResourceKind = ResourceKind::Location;
}
