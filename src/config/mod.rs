//! Configuration types for the BigCommerce API SDK.
//!
//! This module provides the configuration used to authenticate against a
//! store and derive its API base paths.
//!
//! # Overview
//!
//! - [`BigCommerceConfig`]: The validated configuration
//! - [`BigCommerceConfigBuilder`]: A builder for constructing [`BigCommerceConfig`] instances
//! - [`ConnectionMode`]: OAuth (default) or HTTP Basic authentication
//! - Validated newtypes for each credential
//! - [`ApiVersion`]: The v3 (current) or v2 (legacy) API
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_api::{BigCommerceConfig, ClientId, AuthToken, StoreHash};
//!
//! let config = BigCommerceConfig::builder()
//!     .client_id(ClientId::new("client-id").unwrap())
//!     .auth_token(AuthToken::new("access-token").unwrap())
//!     .store_hash(StoreHash::new("abc123").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_path(), "https://api.bigcommerce.com/stores/abc123/v3");
//! assert_eq!(config.legacy_api_path(), "https://api.bigcommerce.com/stores/abc123/v2");
//! ```

mod newtypes;
mod version;

pub use newtypes::{ApiKey, AuthToken, ClientId, ClientSecret, StoreHash, StoreUrl, Username};
pub use version::ApiVersion;

use std::fmt;
use std::str::FromStr;

use crate::auth::Credentials;
use crate::error::ConfigError;

/// The default BigCommerce store management API host.
pub const DEFAULT_API_URL: &str = "https://api.bigcommerce.com";

/// How requests are authenticated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ConnectionMode {
    /// `X-Auth-Client` / `X-Auth-Token` headers against `api.bigcommerce.com`.
    #[default]
    OAuth,
    /// HTTP Basic credentials against the store's own URL.
    BasicAuth,
}

impl fmt::Display for ConnectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OAuth => write!(f, "OAUTH"),
            Self::BasicAuth => write!(f, "BASIC_AUTH"),
        }
    }
}

impl FromStr for ConnectionMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "oauth" => Ok(Self::OAuth),
            "basic_auth" | "basicauth" | "basic" => Ok(Self::BasicAuth),
            _ => Err(ConfigError::InvalidConnectionMode {
                mode: s.to_string(),
            }),
        }
    }
}

/// Configuration for the BigCommerce API SDK.
///
/// Holds the credentials for one store along with the derived v3 and v2
/// base paths. The configuration is immutable once built; reconfiguring a
/// client means building a new one.
///
/// # Thread Safety
///
/// `BigCommerceConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct BigCommerceConfig {
    credentials: Credentials,
    verify_peer: bool,
    user_agent_prefix: Option<String>,
    api_path: String,
    legacy_api_path: String,
}

impl BigCommerceConfig {
    /// Creates a new builder for constructing a `BigCommerceConfig`.
    #[must_use]
    pub fn builder() -> BigCommerceConfigBuilder {
        BigCommerceConfigBuilder::new()
    }

    /// Builds a configuration from loosely typed key/value settings.
    ///
    /// Recognized keys: `connection_mode`, `client_id`, `auth_token`,
    /// `store_hash`, `client_secret`, `store_url`, `username`, `api_key`,
    /// `verify_peer`, `api_url` and `user_agent_prefix`. Unknown keys are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] naming the first missing
    /// credential for the selected mode, or a validation error for a
    /// malformed value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bigcommerce_api::{BigCommerceConfig, ConnectionMode};
    ///
    /// let config = BigCommerceConfig::from_settings([
    ///     ("connection_mode", "BASIC_AUTH"),
    ///     ("store_url", "https://store.example.com/"),
    ///     ("username", "admin"),
    ///     ("api_key", "secret"),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(config.connection_mode(), ConnectionMode::BasicAuth);
    /// assert_eq!(config.api_path(), "https://store.example.com/api/v3");
    /// ```
    pub fn from_settings<I, K, V>(settings: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut builder = BigCommerceConfigBuilder::new();

        for (key, value) in settings {
            let value = value.as_ref();
            builder = match key.as_ref() {
                "connection_mode" => builder.connection_mode(value.parse()?),
                "client_id" => builder.client_id(ClientId::new(value)?),
                "auth_token" => builder.auth_token(AuthToken::new(value)?),
                "store_hash" => builder.store_hash(StoreHash::new(value)?),
                "client_secret" => builder.client_secret(ClientSecret::new(value)?),
                "store_url" => builder.store_url(StoreUrl::new(value)?),
                "username" => builder.username(Username::new(value)?),
                "api_key" => builder.api_key(ApiKey::new(value)?),
                "verify_peer" => builder.verify_peer(parse_bool("verify_peer", value)?),
                "api_url" => builder.api_url(StoreUrl::new(value)?),
                "user_agent_prefix" => builder.user_agent_prefix(value),
                other => {
                    tracing::debug!("Ignoring unrecognized BigCommerce setting '{}'", other);
                    builder
                }
            };
        }

        builder.build()
    }

    /// Returns the credentials.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the connection mode implied by the credentials.
    #[must_use]
    pub const fn connection_mode(&self) -> ConnectionMode {
        self.credentials.mode()
    }

    /// Returns whether TLS peer certificates are verified.
    #[must_use]
    pub const fn verify_peer(&self) -> bool {
        self.verify_peer
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the v3 API base path (no trailing slash).
    #[must_use]
    pub fn api_path(&self) -> &str {
        &self.api_path
    }

    /// Returns the legacy v2 API base path (no trailing slash).
    #[must_use]
    pub fn legacy_api_path(&self) -> &str {
        &self.legacy_api_path
    }

    /// Returns the base path for the given API version.
    #[must_use]
    pub fn base_path(&self, version: ApiVersion) -> &str {
        match version {
            ApiVersion::V2 => &self.legacy_api_path,
            ApiVersion::V3 => &self.api_path,
        }
    }
}

// Verify BigCommerceConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BigCommerceConfig>();
};

/// Builder for constructing [`BigCommerceConfig`] instances.
///
/// # Defaults
///
/// - `connection_mode`: [`ConnectionMode::OAuth`]
/// - `verify_peer`: `true`
/// - `api_url`: [`DEFAULT_API_URL`] (OAuth only)
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct BigCommerceConfigBuilder {
    connection_mode: Option<ConnectionMode>,
    client_id: Option<ClientId>,
    auth_token: Option<AuthToken>,
    store_hash: Option<StoreHash>,
    client_secret: Option<ClientSecret>,
    store_url: Option<StoreUrl>,
    username: Option<Username>,
    api_key: Option<ApiKey>,
    verify_peer: Option<bool>,
    api_url: Option<StoreUrl>,
    user_agent_prefix: Option<String>,
}

impl BigCommerceConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the connection mode.
    #[must_use]
    pub const fn connection_mode(mut self, mode: ConnectionMode) -> Self {
        self.connection_mode = Some(mode);
        self
    }

    /// Sets the OAuth client ID (required for OAuth).
    #[must_use]
    pub fn client_id(mut self, client_id: ClientId) -> Self {
        self.client_id = Some(client_id);
        self
    }

    /// Sets the OAuth access token (required for OAuth).
    #[must_use]
    pub fn auth_token(mut self, auth_token: AuthToken) -> Self {
        self.auth_token = Some(auth_token);
        self
    }

    /// Sets the store hash (required for OAuth).
    #[must_use]
    pub fn store_hash(mut self, store_hash: StoreHash) -> Self {
        self.store_hash = Some(store_hash);
        self
    }

    /// Sets the OAuth client secret.
    #[must_use]
    pub fn client_secret(mut self, client_secret: ClientSecret) -> Self {
        self.client_secret = Some(client_secret);
        self
    }

    /// Sets the store URL (required for Basic auth).
    #[must_use]
    pub fn store_url(mut self, store_url: StoreUrl) -> Self {
        self.store_url = Some(store_url);
        self
    }

    /// Sets the Basic auth username (required for Basic auth).
    #[must_use]
    pub fn username(mut self, username: Username) -> Self {
        self.username = Some(username);
        self
    }

    /// Sets the Basic auth API key (required for Basic auth).
    #[must_use]
    pub fn api_key(mut self, api_key: ApiKey) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Sets whether TLS peer certificates are verified.
    #[must_use]
    pub const fn verify_peer(mut self, verify_peer: bool) -> Self {
        self.verify_peer = Some(verify_peer);
        self
    }

    /// Overrides the OAuth API host (e.g., for a proxy or a mock server).
    #[must_use]
    pub fn api_url(mut self, api_url: StoreUrl) -> Self {
        self.api_url = Some(api_url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`BigCommerceConfig`], validating the selected mode's
    /// required credentials and deriving the API base paths.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] for the first missing
    /// credential: `client_id`, `auth_token`, `store_hash` in OAuth mode, or
    /// `store_url`, `username`, `api_key` in Basic mode.
    pub fn build(self) -> Result<BigCommerceConfig, ConfigError> {
        let mode = self.connection_mode.unwrap_or_default();

        let (credentials, api_path, legacy_api_path) = match mode {
            ConnectionMode::OAuth => {
                let client_id = self
                    .client_id
                    .ok_or(ConfigError::MissingRequiredField { field: "client_id" })?;
                let auth_token = self
                    .auth_token
                    .ok_or(ConfigError::MissingRequiredField {
                        field: "auth_token",
                    })?;
                let store_hash = self
                    .store_hash
                    .ok_or(ConfigError::MissingRequiredField {
                        field: "store_hash",
                    })?;

                let api_url = self
                    .api_url
                    .as_ref()
                    .map_or(DEFAULT_API_URL, AsRef::as_ref);
                let stores = format!("{api_url}/stores/{}", store_hash.as_ref());

                (
                    Credentials::OAuth {
                        client_id,
                        auth_token,
                        store_hash,
                        client_secret: self.client_secret,
                    },
                    format!("{stores}/v3"),
                    format!("{stores}/v2"),
                )
            }
            ConnectionMode::BasicAuth => {
                let store_url = self
                    .store_url
                    .ok_or(ConfigError::MissingRequiredField { field: "store_url" })?;
                let username = self
                    .username
                    .ok_or(ConfigError::MissingRequiredField { field: "username" })?;
                let api_key = self
                    .api_key
                    .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

                let api_path = format!("{}/api/v3", store_url.as_ref());
                let legacy_api_path = format!("{}/api/v2", store_url.as_ref());

                (
                    Credentials::Basic {
                        store_url,
                        username,
                        api_key,
                    },
                    api_path,
                    legacy_api_path,
                )
            }
        };

        Ok(BigCommerceConfig {
            credentials,
            verify_peer: self.verify_peer.unwrap_or(true),
            user_agent_prefix: self.user_agent_prefix,
            api_path,
            legacy_api_path,
        })
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidSetting {
            key,
            value: value.to_string(),
        }),
    }
}
