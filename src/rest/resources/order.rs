//! Legacy (v2) order view.
//!
//! v2 sends money amounts as decimal strings and dates as RFC 2822 strings,
//! so both are kept as text.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::rest::{ResourceKind, TypedResource};

/// An order (`/v2/orders`).
///
/// Line items, shipping addresses, coupons and shipments are subresources
/// with their own endpoints, such as
/// [`ORDER_PRODUCTS`](crate::rest::endpoints::ORDER_PRODUCTS).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Order {
    /// The order number.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The customer, or 0 for a guest checkout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<u64>,

    /// The status id. Set this to change the status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_id: Option<u64>,

    /// The status name.
    /// Read-only field - derived from `status_id`.
    #[serde(skip_serializing)]
    pub status: Option<String>,

    /// The subtotal excluding tax, as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal_ex_tax: Option<String>,

    /// The total including tax, as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_inc_tax: Option<String>,

    /// The number of items ordered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items_total: Option<u64>,

    /// The payment method name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,

    /// The billing address object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Value>,

    /// Notes visible to staff only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff_notes: Option<String>,

    /// When the order was placed.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub date_created: Option<String>,

    /// When the order was last modified.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub date_modified: Option<String>,

    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TypedResource for Order {
    const KIND: ResourceKind = ResourceKind::Order;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::Resource;
    use serde_json::json;

    #[test]
    fn test_order_from_legacy_body() {
        let order: Order = Resource::from_value(
            ResourceKind::Order,
            json!({
                "id": 100,
                "customer_id": 4,
                "status_id": 11,
                "status": "Awaiting Fulfillment",
                "total_inc_tax": "225.0000",
                "date_created": "Tue, 05 Mar 2019 21:28:30 +0000",
                "products": {"url": "https://x.test/orders/100/products"}
            }),
        )
        .unwrap()
        .into_typed()
        .unwrap();

        assert_eq!(order.id, Some(100));
        assert_eq!(order.total_inc_tax.as_deref(), Some("225.0000"));
        assert!(order.extra.contains_key("products"));

        let body = order.to_resource().unwrap().into_value();
        assert!(body.get("status").is_none());
        assert!(body.get("date_created").is_none());
        assert_eq!(body["status_id"], json!(11));
    }
}
