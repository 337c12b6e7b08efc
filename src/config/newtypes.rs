//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around credential strings that
//! validate their contents on construction. Secret values mask themselves in
//! `Debug` output so they never leak into logs.

use crate::error::ConfigError;
use std::fmt;

/// An OAuth client ID (sent as `X-Auth-Client`).
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::ClientId;
///
/// let id = ClientId::new("my-client-id").unwrap();
/// assert_eq!(id.as_ref(), "my-client-id");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientId(String);

impl ClientId {
    /// Creates a new validated client ID.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyValue`] if the value is empty.
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigError> {
        non_empty(value.into(), "client_id").map(Self)
    }
}

impl AsRef<str> for ClientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// An OAuth access token (sent as `X-Auth-Token`).
///
/// # Security
///
/// The `Debug` implementation masks the token, displaying only
/// `AuthToken(*****)`.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyValue`] if the token is empty.
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigError> {
        non_empty(value.into(), "auth_token").map(Self)
    }
}

impl AsRef<str> for AuthToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AuthToken(*****)")
    }
}

/// An OAuth client secret.
///
/// Optional in OAuth mode. Masked in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientSecret(String);

impl ClientSecret {
    /// Creates a new validated client secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyValue`] if the secret is empty.
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigError> {
        non_empty(value.into(), "client_secret").map(Self)
    }
}

impl AsRef<str> for ClientSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ClientSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClientSecret(*****)")
    }
}

/// A BigCommerce store hash, as found in `stores/{hash}/v3` API paths.
///
/// The hash is lowercased on construction.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::StoreHash;
///
/// let hash = StoreHash::new("ABC123").unwrap();
/// assert_eq!(hash.as_ref(), "abc123");
/// assert!(StoreHash::new("abc/123").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreHash(String);

impl StoreHash {
    /// Creates a new validated store hash.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyValue`] if the hash is empty, or
    /// [`ConfigError::InvalidStoreHash`] if it is not alphanumeric.
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigError> {
        let hash = non_empty(value.into().trim().to_string(), "store_hash")?;
        if !hash.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ConfigError::InvalidStoreHash { hash });
        }
        Ok(Self(hash.to_ascii_lowercase()))
    }
}

impl AsRef<str> for StoreHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// An absolute http(s) URL with any trailing slashes removed.
///
/// Used for the Basic auth store URL and for the OAuth API host.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::StoreUrl;
///
/// let url = StoreUrl::new("https://store.example.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://store.example.com");
/// assert!(StoreUrl::new("store.example.com").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreUrl(String);

impl StoreUrl {
    /// Creates a new validated URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyValue`] if the value is empty, or
    /// [`ConfigError::InvalidUrl`] if it lacks an http(s) scheme or a host.
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigError> {
        let url = non_empty(value.into().trim().to_string(), "store_url")?;

        let rest = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .ok_or_else(|| ConfigError::InvalidUrl { url: url.clone() })?;

        let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
        if host.is_empty() || host.starts_with(':') {
            return Err(ConfigError::InvalidUrl { url });
        }

        Ok(Self(url.trim_end_matches('/').to_string()))
    }
}

impl AsRef<str> for StoreUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A Basic auth username.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    /// Creates a new validated username.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyValue`] if the username is empty.
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigError> {
        non_empty(value.into(), "username").map(Self)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A Basic auth API key. Masked in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyValue`] if the key is empty.
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigError> {
        non_empty(value.into(), "api_key").map(Self)
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey(*****)")
    }
}

fn non_empty(value: String, field: &'static str) -> Result<String, ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::EmptyValue { field });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_id_rejects_empty_string() {
        assert!(matches!(
            ClientId::new(""),
            Err(ConfigError::EmptyValue { field: "client_id" })
        ));
    }

    #[test]
    fn test_secrets_mask_value_in_debug() {
        let token = AuthToken::new("super-secret-token").unwrap();
        assert_eq!(format!("{token:?}"), "AuthToken(*****)");

        let key = ApiKey::new("super-secret-key").unwrap();
        assert_eq!(format!("{key:?}"), "ApiKey(*****)");

        let secret = ClientSecret::new("super-secret").unwrap();
        assert!(!format!("{secret:?}").contains("super-secret"));
    }

    #[test]
    fn test_store_hash_normalizes_case() {
        let hash = StoreHash::new(" AbC123 ").unwrap();
        assert_eq!(hash.as_ref(), "abc123");
    }

    #[test]
    fn test_store_hash_rejects_path_characters() {
        assert!(matches!(
            StoreHash::new("abc/123"),
            Err(ConfigError::InvalidStoreHash { .. })
        ));
        assert!(matches!(
            StoreHash::new(""),
            Err(ConfigError::EmptyValue { field: "store_hash" })
        ));
    }

    #[test]
    fn test_store_url_trims_trailing_slashes() {
        let url = StoreUrl::new("https://store.example.com//").unwrap();
        assert_eq!(url.as_ref(), "https://store.example.com");

        let url = StoreUrl::new("http://localhost:8080").unwrap();
        assert_eq!(url.as_ref(), "http://localhost:8080");
    }

    #[test]
    fn test_store_url_rejects_invalid() {
        assert!(StoreUrl::new("store.example.com").is_err());
        assert!(StoreUrl::new("https://").is_err());
        assert!(StoreUrl::new("ftp://store.example.com").is_err());
    }
}
