//! Catalog product and variant views.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::rest::{ResourceKind, TypedResource};

/// Whether a product ships.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    /// A shipped product with weight and dimensions.
    #[default]
    Physical,
    /// A downloadable product.
    Digital,
}

/// A catalog product (`/v3/catalog/products`).
///
/// # Fields
///
/// Only commonly used fields are modelled. Everything else the API returns
/// (custom URLs, dimensions, SEO settings and so on) lands in `extra` and is
/// sent back unchanged on update.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::rest::resources::{Product, ProductType};
/// use bigcommerce_api::TypedResource;
///
/// let product = Product {
///     name: Some("Smith Journal 13".to_string()),
///     product_type: Some(ProductType::Physical),
///     price: Some(24.5),
///     weight: Some(0.5),
///     ..Default::default()
/// };
///
/// let resource = product.to_resource().unwrap();
/// assert_eq!(resource.get("type"), Some(&serde_json::json!("physical")));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Product {
    /// The unique identifier of the product.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The product name, unique within the store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Physical or digital.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub product_type: Option<ProductType>,

    /// The stock keeping unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// The description in HTML.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The weight in the store's weight unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    /// The default price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// The sale price. Overrides `price` when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<f64>,

    /// Ids of the categories the product belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<u64>>,

    /// The brand id, or 0 for none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<u64>,

    /// Stock on hand when inventory is tracked at product level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_level: Option<i64>,

    /// Whether the product is shown on the storefront.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_visible: Option<bool>,

    /// When the product was created.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub date_created: Option<DateTime<Utc>>,

    /// When the product was last modified.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub date_modified: Option<DateTime<Utc>>,

    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TypedResource for Product {
    const KIND: ResourceKind = ResourceKind::Product;
}

/// A product variant (`/v3/catalog/products/{product_id}/variants`).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProductVariant {
    /// The unique identifier of the variant.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The parent product.
    /// Read-only field - taken from the path.
    #[serde(skip_serializing)]
    pub product_id: Option<u64>,

    /// The variant SKU.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// Overrides the product price when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// Overrides the product weight when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    /// Stock on hand when inventory is tracked per variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_level: Option<i64>,

    /// Whether the variant can be bought.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchasing_disabled: Option<bool>,

    /// The option values that select this variant.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub option_values: Vec<Value>,

    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TypedResource for ProductVariant {
    const KIND: ResourceKind = ResourceKind::ProductVariant;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::Resource;
    use serde_json::json;

    #[test]
    fn test_product_from_resource() {
        let resource = Resource::from_value(
            ResourceKind::Product,
            json!({
                "id": 77,
                "name": "Smith Journal 13",
                "type": "physical",
                "price": 24.5,
                "date_created": "2018-08-15T14:49:05+00:00",
                "custom_url": {"url": "/smith-journal-13/"}
            }),
        )
        .unwrap();

        let product: Product = resource.into_typed().unwrap();
        assert_eq!(product.id, Some(77));
        assert_eq!(product.product_type, Some(ProductType::Physical));
        assert!(product.date_created.is_some());
        assert!(product.extra.contains_key("custom_url"));
    }

    #[test]
    fn test_product_to_resource_skips_read_only() {
        let product = Product {
            id: Some(1),
            name: Some("Hat".to_string()),
            date_modified: Some(Utc::now()),
            ..Default::default()
        };

        let resource = product.to_resource().unwrap();
        assert_eq!(resource.kind(), ResourceKind::Product);
        assert_eq!(resource.into_value(), json!({"name": "Hat"}));
    }

    #[test]
    fn test_variant_type_mismatch_is_typed_error() {
        let resource =
            Resource::from_value(ResourceKind::ProductVariant, json!({"price": "cheap"})).unwrap();
        let result = resource.into_typed::<ProductVariant>();
        assert!(matches!(
            result,
            Err(crate::rest::MappingError::Typed {
                kind: "ProductVariant",
                ..
            })
        ));
    }
}
