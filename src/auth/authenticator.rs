//! The shared, lazily built connection for one configured store.

use std::sync::{Arc, PoisonError, RwLock};

use crate::clients::HttpClient;
use crate::config::BigCommerceConfig;
use crate::error::ConfigError;

#[derive(Debug, Default)]
struct State {
    config: Option<BigCommerceConfig>,
    connection: Option<Arc<HttpClient>>,
}

/// Holds the current configuration and memoizes the connection built from it.
///
/// The first call to [`connection`](Self::connection) after
/// [`configure`](Self::configure) builds an [`HttpClient`] carrying the
/// mode's authentication headers. Later calls return the same `Arc`.
/// Reconfiguring drops the memoized connection, so the next call builds a
/// fresh one. Requests already holding the previous `Arc` finish with the
/// previous headers.
///
/// # Thread Safety
///
/// `Authenticator` is `Send + Sync`. The configuration lives behind an
/// `RwLock`; readers only take the write lock when the connection must be
/// (re)built.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::{Authenticator, BigCommerceConfig, ConfigError};
/// use std::sync::Arc;
///
/// let auth = Authenticator::new();
/// assert!(matches!(auth.connection(), Err(ConfigError::NotConfigured)));
///
/// auth.configure(BigCommerceConfig::from_settings([
///     ("client_id", "client-id"),
///     ("auth_token", "access-token"),
///     ("store_hash", "abc123"),
/// ]).unwrap());
///
/// let first = auth.connection().unwrap();
/// let second = auth.connection().unwrap();
/// assert!(Arc::ptr_eq(&first, &second));
/// ```
#[derive(Debug, Default)]
pub struct Authenticator {
    state: RwLock<State>,
}

// Verify Authenticator is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Authenticator>();
};

impl Authenticator {
    /// Creates an authenticator with no configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an authenticator that is already configured.
    #[must_use]
    pub fn with_config(config: BigCommerceConfig) -> Self {
        let auth = Self::new();
        auth.configure(config);
        auth
    }

    /// Replaces the configuration and invalidates the memoized connection.
    pub fn configure(&self, config: BigCommerceConfig) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        tracing::debug!(
            "Configuring BigCommerce client ({} mode)",
            config.connection_mode()
        );
        state.config = Some(config);
        state.connection = None;
    }

    /// Returns a copy of the current configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] if [`configure`](Self::configure)
    /// has never been called.
    pub fn config(&self) -> Result<BigCommerceConfig, ConfigError> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.config.clone().ok_or(ConfigError::NotConfigured)
    }

    /// Returns the shared connection, building it on first use.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] before the first
    /// [`configure`](Self::configure), or [`ConfigError::ConnectionBuild`] if
    /// the HTTP client cannot be constructed.
    pub fn connection(&self) -> Result<Arc<HttpClient>, ConfigError> {
        {
            let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(connection) = &state.connection {
                return Ok(Arc::clone(connection));
            }
            if state.config.is_none() {
                return Err(ConfigError::NotConfigured);
            }
        }

        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        // Another caller may have built it between the two locks.
        if let Some(connection) = &state.connection {
            return Ok(Arc::clone(connection));
        }

        let config = state.config.as_ref().ok_or(ConfigError::NotConfigured)?;
        let connection = Arc::new(HttpClient::new(config)?);
        state.connection = Some(Arc::clone(&connection));
        Ok(connection)
    }

    /// Returns `true` once a configuration has been supplied.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .config
            .is_some()
    }
}
