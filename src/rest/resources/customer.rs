//! Customer, customer group and customer attribute views.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::rest::{ResourceKind, TypedResource};

/// A customer (`/v3/customers`).
///
/// The v3 customer endpoints take batches, and batch updates find each
/// customer by the `id` in its body, so `id` is sent whenever it is set.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Customer {
    /// The unique identifier of the customer. Required in update batches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The email address, unique within the store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// The first name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// The last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// The company name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// The phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// The customer group, or 0 for none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_group_id: Option<u64>,

    /// Whether the customer accepts review and abandoned cart emails.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepts_product_review_abandoned_cart_emails: Option<bool>,

    /// When the customer was created.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub date_created: Option<DateTime<Utc>>,

    /// When the customer was last modified.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub date_modified: Option<DateTime<Utc>>,

    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TypedResource for Customer {
    const KIND: ResourceKind = ResourceKind::Customer;
}

/// A legacy (v2) customer group. Dates are RFC 2822 strings on v2.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CustomerGroup {
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Whether new customers join this group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    /// Which categories the group may see.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_access: Option<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub discount_rules: Vec<Value>,
    /// Read-only field.
    #[serde(skip_serializing)]
    pub date_created: Option<String>,
    /// Read-only field.
    #[serde(skip_serializing)]
    pub date_modified: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TypedResource for CustomerGroup {
    const KIND: ResourceKind = ResourceKind::CustomerGroup;
}

/// The value type of a customer attribute.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    String,
    Number,
    Date,
}

/// A store-defined customer attribute (`/v3/customers/attributes`).
///
/// Values are set per customer with
/// [`RestClient::upsert_customer_attribute_value`](crate::clients::RestClient::upsert_customer_attribute_value).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerAttribute {
    /// Read-only field.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The attribute name.
    pub name: String,

    /// The value type. Cannot be changed after creation.
    #[serde(rename = "type")]
    pub attribute_type: AttributeType,

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

impl TypedResource for CustomerAttribute {
    const KIND: ResourceKind = ResourceKind::CustomerAttribute;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::Resource;
    use serde_json::json;

    #[test]
    fn test_customer_group_round_trip_keeps_unknown_fields() {
        let body = json!({
            "id": 3,
            "name": "Wholesale",
            "is_default": false,
            "date_created": "Tue, 20 Nov 2012 00:00:00 +0000",
            "is_group_for_guests": false
        });
        let group: CustomerGroup = Resource::from_value(ResourceKind::CustomerGroup, body)
            .unwrap()
            .into_typed()
            .unwrap();

        assert_eq!(group.name.as_deref(), Some("Wholesale"));
        let back = group.to_resource().unwrap().into_value();
        assert_eq!(
            back,
            json!({"name": "Wholesale", "is_default": false, "is_group_for_guests": false})
        );
    }

    #[test]
    fn test_customer_attribute_requires_name_and_type() {
        let result = Resource::from_value(ResourceKind::CustomerAttribute, json!({"id": 1}))
            .unwrap()
            .into_typed::<CustomerAttribute>();
        assert!(result.is_err());

        let attribute: CustomerAttribute =
            Resource::from_value(ResourceKind::CustomerAttribute, json!({"name": "Shoe size", "type": "number"}))
                .unwrap()
                .into_typed()
                .unwrap();
        assert_eq!(attribute.attribute_type, AttributeType::Number);
    }

    #[test]
    fn test_customer_keeps_id_for_batch_updates() {
        let customer = Customer {
            id: Some(9),
            email: Some("jane@example.com".to_string()),
            ..Default::default()
        };
        assert_eq!(
            customer.to_resource().unwrap().into_value(),
            json!({"id": 9, "email": "jane@example.com"})
        );
    }
}
