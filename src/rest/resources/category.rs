//! Catalog category view.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::rest::{ResourceKind, TypedResource};

/// A catalog category (`/v3/catalog/categories`).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Category {
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The parent category, or 0 for a top-level category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u64>,

    /// The name, unique among siblings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The description in HTML.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Position among siblings. Lower sorts first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,

    /// Whether the category is shown on the storefront.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_visible: Option<bool>,

    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TypedResource for Category {
    const KIND: ResourceKind = ResourceKind::Category;
}
