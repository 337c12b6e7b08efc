//! Strongly typed views of the most used resource kinds.
//!
//! Every view implements [`TypedResource`](crate::rest::TypedResource) and
//! converts to and from the untyped [`Resource`](crate::rest::Resource).
//! Fields the API never accepts back (ids, timestamps) are skipped when
//! serializing, and fields a view does not model are kept in its `extra`
//! map.
//!
//! Views only cover common fields; any other kind is handled through
//! `Resource` directly.
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_api::rest::resources::Product;
//! use bigcommerce_api::rest::{Resource, ResourceKind, TypedResource};
//! use serde_json::json;
//!
//! let resource = Resource::from_value(
//!     ResourceKind::Product,
//!     json!({"id": 12, "name": "Orbit Terrarium", "price": 109.0}),
//! )
//! .unwrap();
//!
//! let mut product: Product = resource.into_typed().unwrap();
//! product.price = Some(99.0);
//!
//! let update = product.to_resource().unwrap();
//! assert_eq!(update.update_fields(), json!({"name": "Orbit Terrarium", "price": 99.0}));
//! ```

mod category;
mod customer;
mod location;
mod order;
mod pricelist;
mod product;

pub use category::Category;
pub use customer::{AttributeType, Customer, CustomerAttribute, CustomerGroup};
pub use location::Location;
pub use order::Order;
pub use pricelist::{Pricelist, PricelistRecord};
pub use product::{Product, ProductType, ProductVariant};

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Product>();
    assert_send_sync::<ProductVariant>();
    assert_send_sync::<Customer>();
    assert_send_sync::<CustomerGroup>();
    assert_send_sync::<CustomerAttribute>();
    assert_send_sync::<Order>();
    assert_send_sync::<Category>();
    assert_send_sync::<Pricelist>();
    assert_send_sync::<PricelistRecord>();
    assert_send_sync::<Location>();
};
