//! Error types for the BigCommerce API SDK.
//!
//! This module contains the configuration error type raised while building
//! a [`BigCommerceConfig`](crate::BigCommerceConfig) or resolving the shared
//! connection.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. A missing credential is reported by name so the
//! caller knows exactly which setting to supply.
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_api::{BigCommerceConfig, ConfigError};
//!
//! let result = BigCommerceConfig::from_settings([("client_id", "abc"), ("auth_token", "xyz")]);
//! assert!(matches!(
//!     result,
//!     Err(ConfigError::MissingRequiredField { field: "store_hash" })
//! ));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required credential or setting is missing for the selected mode.
    #[error("Missing required field: '{field}'. This field must be provided for the selected connection mode.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A credential was provided but is empty.
    #[error("Field '{field}' cannot be empty.")]
    EmptyValue {
        /// The name of the empty field.
        field: &'static str,
    },

    /// The store hash contains characters BigCommerce never issues.
    #[error("Invalid store hash '{hash}'. Expected an alphanumeric value such as 'abc123'.")]
    InvalidStoreHash {
        /// The invalid hash that was provided.
        hash: String,
    },

    /// The store URL or API URL is not an absolute http(s) URL.
    #[error("Invalid URL '{url}'. Please provide an absolute URL with scheme (e.g., 'https://store.example.com').")]
    InvalidUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// The connection mode is not one of the supported modes.
    #[error("Invalid connection mode '{mode}'. Expected 'OAUTH' or 'BASIC_AUTH'.")]
    InvalidConnectionMode {
        /// The mode string that was provided.
        mode: String,
    },

    /// A setting value could not be parsed.
    #[error("Invalid value '{value}' for setting '{key}'.")]
    InvalidSetting {
        /// The setting key.
        key: &'static str,
        /// The value that failed to parse.
        value: String,
    },

    /// A connection was requested before any configuration was supplied.
    #[error("The client has not been configured. Call configure() with valid settings first.")]
    NotConfigured,

    /// The HTTP connection could not be constructed (TLS backend failure).
    #[error("Failed to build HTTP connection: {reason}")]
    ConnectionBuild {
        /// Description of the underlying failure.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_required_field_error_names_field() {
        let error = ConfigError::MissingRequiredField { field: "store_hash" };
        let message = error.to_string();
        assert!(message.contains("store_hash"));
        assert!(message.contains("must be provided"));
    }

    #[test]
    fn test_invalid_connection_mode_message() {
        let error = ConfigError::InvalidConnectionMode {
            mode: "token".to_string(),
        };
        assert!(error.to_string().contains("'token'"));
        assert!(error.to_string().contains("BASIC_AUTH"));
    }

    #[test]
    fn test_not_configured_message() {
        assert!(ConfigError::NotConfigured
            .to_string()
            .contains("not been configured"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyValue { field: "api_key" };
        let _: &dyn std::error::Error = &error;
    }
}
