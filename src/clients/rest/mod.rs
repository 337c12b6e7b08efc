//! REST API client for the BigCommerce API.
//!
//! [`RestClient`] is built on top of the
//! [`HttpClient`](crate::clients::HttpClient) held by its
//! [`Authenticator`](crate::auth::Authenticator). It dispatches the
//! declarative endpoints of [`rest::endpoints`](crate::rest::endpoints) and
//! returns mapped [`Resource`](crate::rest::Resource)s.
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::clients::RestClient;
//! use bigcommerce_api::rest::{endpoints, Filter, PathParams};
//! use bigcommerce_api::{ApiKey, BigCommerceConfig, ConnectionMode, StoreUrl, Username};
//!
//! let config = BigCommerceConfig::builder()
//!     .connection_mode(ConnectionMode::BasicAuth)
//!     .store_url(StoreUrl::new("https://store.example.com")?)
//!     .username(Username::new("admin")?)
//!     .api_key(ApiKey::new("api-key")?)
//!     .build()?;
//!
//! let client = RestClient::new(config);
//!
//! let pending = client
//!     .get_collection(
//!         &endpoints::ORDERS,
//!         &PathParams::new(),
//!         Some(&Filter::new().with("status_id", 11)),
//!     )
//!     .await?;
//!
//! if let Some(cart) = client.get_cart("0d5ab5e3-1c7a-4a7b-8c9f-4a0d5ab5e31c").await? {
//!     println!("Cart: {:?}", cart.get("cart_amount"));
//! }
//! ```

mod client;

pub use client::RestClient;
