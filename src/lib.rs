//! # BigCommerce API Rust SDK
//!
//! A Rust SDK for the BigCommerce REST API (v3 and the legacy v2), providing
//! type-safe configuration, authentication headers, an async HTTP client,
//! transparent pagination and mapping of responses onto resources.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`BigCommerceConfig`] and [`BigCommerceConfigBuilder`]
//! - Validated newtypes for credentials and store values
//! - OAuth (`X-Auth-Client`/`X-Auth-Token`) and HTTP Basic authentication
//! - An async HTTP client that classifies 4xx and 5xx responses
//! - Declarative endpoints dispatched by one generic function
//! - Automatic following of v3 pagination links
//! - Resource mapping with per-kind read-only fields and typed views
//!
//! ## Quick Start
//!
//! ```rust
//! use bigcommerce_api::{BigCommerceConfig, ClientId, AuthToken, StoreHash, ApiVersion};
//!
//! // Create configuration using the builder pattern
//! let config = BigCommerceConfig::builder()
//!     .client_id(ClientId::new("client-id").unwrap())
//!     .auth_token(AuthToken::new("access-token").unwrap())
//!     .store_hash(StoreHash::new("abc123").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(
//!     config.base_path(ApiVersion::V2),
//!     "https://api.bigcommerce.com/stores/abc123/v2"
//! );
//! ```
//!
//! ## Basic Authentication
//!
//! Legacy stores authenticate with a username and API key against the store
//! URL:
//!
//! ```rust
//! use bigcommerce_api::{ApiKey, BigCommerceConfig, ConnectionMode, StoreUrl, Username};
//!
//! let config = BigCommerceConfig::builder()
//!     .connection_mode(ConnectionMode::BasicAuth)
//!     .store_url(StoreUrl::new("https://store.example.com").unwrap())
//!     .username(Username::new("admin").unwrap())
//!     .api_key(ApiKey::new("api-key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_path(), "https://store.example.com/api/v3");
//! ```
//!
//! ## Settings Maps
//!
//! Configuration can also be read from key/value settings:
//!
//! ```rust
//! use bigcommerce_api::{BigCommerceConfig, ConfigError};
//!
//! let result = BigCommerceConfig::from_settings([
//!     ("client_id", "client-id"),
//!     ("auth_token", "access-token"),
//! ]);
//!
//! assert!(matches!(
//!     result,
//!     Err(ConfigError::MissingRequiredField { field: "store_hash" })
//! ));
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use bigcommerce_api::clients::RestClient;
//! use bigcommerce_api::rest::{endpoints, resources::Product, Filter, PathParams};
//!
//! let client = RestClient::new(config);
//!
//! // Every page of the collection
//! let products = client
//!     .get_typed_collection::<Product>(&endpoints::PRODUCTS, &PathParams::new(), None)
//!     .await?;
//!
//! // A nested resource
//! let params = PathParams::new().with("product_id", 77).with("id", 382);
//! let variant = client.get_resource(&endpoints::PRODUCT_VARIANT, &params).await?;
//!
//! // Relationship operations
//! client.assign_product_to_channel(77, 1).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration lives in a client instance
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Loud mapping**: Unexpected response shapes are errors, never empty values

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use auth::{Authenticator, Credentials};
pub use config::{
    ApiKey, ApiVersion, AuthToken, BigCommerceConfig, BigCommerceConfigBuilder, ClientId,
    ClientSecret, ConnectionMode, StoreHash, StoreUrl, Username, DEFAULT_API_URL,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ClientError, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, InvalidHttpRequestError, RateLimit, RestClient, ServerError,
};

// Re-export resource types
pub use rest::{
    Endpoint, Filter, MappingError, PathParams, Resource, ResourceError, ResourceKind,
    TypedResource,
};
