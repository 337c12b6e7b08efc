//! HTTP client types for BigCommerce API communication.
//!
//! This module provides the transport layer: it sends authenticated JSON
//! requests to the API and classifies the responses.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE, HEAD)
//! - [`RateLimit`]: The rate limit headers of a response
//! - [`HttpError`]: Classified failures (4xx, 5xx, network, malformed body)
//! - [`rest::RestClient`]: Higher-level REST API client
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::clients::{HttpClient, HttpMethod, HttpRequest};
//! use bigcommerce_api::ApiVersion;
//!
//! let client = HttpClient::new(&config)?;
//!
//! let url = format!("{}/catalog/brands", client.base_path(ApiVersion::V3));
//! let request = HttpRequest::builder(HttpMethod::Get, url).build()?;
//!
//! let response = client.request(request).await?;
//! println!("Requests left: {:?}", response.requests_remaining());
//! ```
//!
//! # Error Handling
//!
//! Status codes 400-499 become [`HttpError::Client`] and 500-599 become
//! [`HttpError::Server`]. Everything else is a success.
//!
//! ```rust,ignore
//! match client.request(request).await {
//!     Ok(response) => println!("{}", response.body),
//!     Err(HttpError::Client(e)) if e.code == 404 => println!("Not found"),
//!     Err(HttpError::Server(e)) => println!("{e}"),
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{
    ClientError, HttpError, InvalidHttpRequestError, ServerError, SERVER_ERROR_PREFIX,
};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, RateLimit};

// Re-export the REST client
pub use rest::RestClient;
