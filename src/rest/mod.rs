//! REST resource infrastructure for the BigCommerce API.
//!
//! This module holds everything between a raw HTTP exchange and a mapped
//! resource:
//!
//! - **[`Endpoint`]**: declarative endpoint descriptions, parameterized by
//!   their output [`Shape`] ([`One`], [`Many`], [`Count`], [`Empty`])
//! - **[`endpoints`]**: the endpoint table
//! - **[`build_path`]** and **[`PathParams`]**: path template expansion
//! - **[`Filter`]**: query string constraints
//! - **[`pagination`]**: cursor pagination for v3 collections
//! - **[`mapper`]**: binding of JSON bodies to [`Resource`] instances
//! - **[`ResourceKind`]**: the closed registry of resource kinds
//! - **[`resources`]**: typed views implementing [`TypedResource`]
//! - **[`ResourceError`]** and **[`MappingError`]**: errors of this layer
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::clients::RestClient;
//! use bigcommerce_api::rest::{endpoints, resources::Product, Filter, PathParams};
//!
//! let client = RestClient::new(config);
//!
//! // All visible products, across every page
//! let products = client
//!     .get_collection(
//!         &endpoints::PRODUCTS,
//!         &PathParams::new(),
//!         Some(&Filter::new().with("is_visible", true)),
//!     )
//!     .await?;
//!
//! // One product, as a typed view
//! let product: Product = client
//!     .get_resource(&endpoints::PRODUCT, &PathParams::id(77))
//!     .await?
//!     .into_typed()?;
//!
//! // Legacy order count
//! let count = client.get_count(&endpoints::ORDERS_COUNT, &PathParams::new(), None).await?;
//! ```

mod endpoint;
mod errors;
mod filter;
mod kind;
mod path;
mod resource;

pub mod endpoints;
pub mod mapper;
pub mod pagination;
pub mod resources;

// Public exports
pub use endpoint::{Count, Empty, Endpoint, Many, One, Shape};
pub use errors::{MappingError, ResourceError};
pub use filter::Filter;
pub use kind::{KindSpec, ResourceKind};
pub use path::{build_path, PathParams};
pub use resource::{Resource, TypedResource};
