//! Authentication types for the BigCommerce API SDK.
//!
//! # Overview
//!
//! - [`Credentials`]: OAuth or Basic credentials and the headers they produce
//! - [`Authenticator`]: Holds the configuration and memoizes the connection
//!
//! # Connection Modes
//!
//! BigCommerce accepts two kinds of credentials:
//!
//! - **OAuth**: an app's client ID and access token, sent as the
//!   `X-Auth-Client` and `X-Auth-Token` headers to
//!   `api.bigcommerce.com/stores/{store_hash}`.
//! - **Basic**: a legacy store API account, sent as an HTTP Basic
//!   `Authorization` header to the store's own URL.
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_api::{Authenticator, BigCommerceConfig};
//!
//! let auth = Authenticator::with_config(
//!     BigCommerceConfig::from_settings([
//!         ("connection_mode", "BASIC_AUTH"),
//!         ("store_url", "https://store.example.com"),
//!         ("username", "admin"),
//!         ("api_key", "key"),
//!     ])
//!     .unwrap(),
//! );
//!
//! let connection = auth.connection().unwrap();
//! assert!(connection.default_headers().contains_key("Authorization"));
//! ```

mod authenticator;
mod credentials;

pub use authenticator::Authenticator;
pub use credentials::Credentials;
