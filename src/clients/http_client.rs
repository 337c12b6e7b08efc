//! HTTP client for BigCommerce API communication.
//!
//! This module provides the [`HttpClient`] type: one authenticated
//! connection performing single HTTP exchanges and classifying the outcome.

use std::collections::HashMap;

use crate::clients::errors::{ClientError, HttpError, ServerError};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::config::{ApiVersion, BigCommerceConfig};
use crate::error::ConfigError;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the BigCommerce API.
///
/// The client handles:
/// - Default headers (`Accept`, `Content-Type`, `User-Agent`)
/// - Authentication headers for the configured connection mode
/// - The v3 and legacy v2 base paths for the configured store
/// - Status classification into [`ClientError`] and [`ServerError`]
///
/// There is no retry, backoff or response cache. Headers are fixed at
/// construction and never mutated, so one client can be shared freely.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use bigcommerce_api::{BigCommerceConfig, ApiVersion};
/// use bigcommerce_api::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let config = BigCommerceConfig::from_settings([
///     ("client_id", "client-id"),
///     ("auth_token", "access-token"),
///     ("store_hash", "abc123"),
/// ])?;
/// let client = HttpClient::new(&config)?;
///
/// let url = format!("{}/catalog/products", client.base_path(ApiVersion::V3));
/// let request = HttpRequest::builder(HttpMethod::Get, url).build()?;
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base path for the v3 API.
    api_path: String,
    /// Base path for the legacy v2 API.
    legacy_api_path: String,
    /// Headers included in every request.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ConnectionBuild`] if the underlying reqwest
    /// client cannot be created (e.g., TLS backend initialization failure).
    pub fn new(config: &BigCommerceConfig) -> Result<Self, ConfigError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}BigCommerce API Library v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());
        for (name, value) in config.credentials().auth_headers() {
            default_headers.insert(name.to_string(), value);
        }

        if !config.verify_peer() {
            tracing::warn!("TLS peer verification is disabled for BigCommerce requests");
        }

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .danger_accept_invalid_certs(!config.verify_peer())
            .build()
            .map_err(|e| ConfigError::ConnectionBuild {
                reason: e.to_string(),
            })?;

        tracing::debug!(
            "Built BigCommerce connection ({} mode) for {}",
            config.connection_mode(),
            config.api_path()
        );

        Ok(Self {
            client,
            api_path: config.api_path().to_string(),
            legacy_api_path: config.legacy_api_path().to_string(),
            default_headers,
        })
    }

    /// Returns the base path for the given API version.
    #[must_use]
    pub fn base_path(&self, version: ApiVersion) -> &str {
        match version {
            ApiVersion::V2 => &self.legacy_api_path,
            ApiVersion::V3 => &self.api_path,
        }
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request and classifies the response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network error occurs (`Network`)
    /// - The status is 400-499 (`Client`) or 500-599 (`Server`)
    /// - A success body is not valid JSON (`InvalidJson`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let mut headers = self.default_headers.clone();
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        tracing::debug!("{} {}", request.http_method, request.url);

        let mut req_builder = self
            .client
            .request(request.http_method.as_reqwest(), &request.url);
        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        let res = req_builder.send().await?;

        let status = res.status();
        let code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or_default().to_string();
        let res_headers = Self::parse_response_headers(res.headers());
        let raw_body = res.text().await?;

        if status.is_client_error() {
            return Err(HttpError::Client(ClientError {
                code,
                reason,
                message: raw_body,
            }));
        }

        if status.is_server_error() {
            tracing::warn!(
                "BigCommerce returned {} for {} {}",
                code,
                request.http_method,
                request.url
            );
            return Err(HttpError::Server(ServerError {
                code,
                reason,
                message: raw_body,
            }));
        }

        let body = if raw_body.trim().is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_str(&raw_body)
                .map_err(|source| HttpError::InvalidJson { code, source })?
        };

        Ok(HttpResponse::new(code, reason, res_headers, raw_body, body))
    }

    /// Parses response headers into a lower-cased `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
