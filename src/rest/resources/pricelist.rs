//! Price list and price list record views.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::rest::{ResourceKind, TypedResource};

/// A price list (`/v3/pricelists`).
///
/// Price lists are assigned to customer groups with
/// [`RestClient::upsert_pricelist_to_customer_group`](crate::clients::RestClient::upsert_pricelist_to_customer_group).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Pricelist {
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The price list name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Whether the price list is in effect.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    /// Read-only field.
    #[serde(skip_serializing)]
    pub date_created: Option<DateTime<Utc>>,

    /// Read-only field.
    #[serde(skip_serializing)]
    pub date_modified: Option<DateTime<Utc>>,

    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TypedResource for Pricelist {
    const KIND: ResourceKind = ResourceKind::Pricelist;
}

/// One price of a variant in one currency.
///
/// Records are upserted in batches, so they carry no writable `id`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PricelistRecord {
    /// The owning price list.
    /// Read-only field - taken from the path.
    #[serde(skip_serializing)]
    pub price_list_id: Option<u64>,

    /// The variant priced. Either this or `sku` identifies the record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<u64>,

    /// The variant SKU.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// ISO 4217 currency code, lowercase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub retail_price: Option<f64>,

    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TypedResource for PricelistRecord {
    const KIND: ResourceKind = ResourceKind::PricelistRecord;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_serializes_upsert_body() {
        let record = PricelistRecord {
            price_list_id: Some(2),
            variant_id: Some(331),
            currency: Some("usd".to_string()),
            price: Some(19.99),
            ..Default::default()
        };

        assert_eq!(
            record.to_resource().unwrap().into_value(),
            json!({"variant_id": 331, "currency": "usd", "price": 19.99})
        );
    }
}
