//! Store credentials and the authentication headers they produce.

use base64::prelude::*;

use crate::config::{
    ApiKey, AuthToken, ClientId, ClientSecret, ConnectionMode, StoreHash, StoreUrl, Username,
};

/// Credentials for one BigCommerce store.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::{ApiKey, Credentials, StoreUrl, Username};
///
/// let credentials = Credentials::Basic {
///     store_url: StoreUrl::new("https://store.example.com").unwrap(),
///     username: Username::new("user").unwrap(),
///     api_key: ApiKey::new("key").unwrap(),
/// };
///
/// assert_eq!(
///     credentials.auth_headers(),
///     vec![("Authorization", "Basic dXNlcjprZXk=".to_string())]
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Credentials {
    /// An app's client ID and access token for one store.
    OAuth {
        /// Sent as `X-Auth-Client`.
        client_id: ClientId,
        /// Sent as `X-Auth-Token`.
        auth_token: AuthToken,
        /// Identifies the store in API paths.
        store_hash: StoreHash,
        /// The app's client secret. Not sent with API requests.
        client_secret: Option<ClientSecret>,
    },
    /// A store API account (legacy HTTP Basic authentication).
    Basic {
        /// The store's own URL, which hosts `/api/v3` and `/api/v2`.
        store_url: StoreUrl,
        /// The API account username.
        username: Username,
        /// The API account key.
        api_key: ApiKey,
    },
}

impl Credentials {
    /// Returns the connection mode these credentials authenticate with.
    #[must_use]
    pub const fn mode(&self) -> ConnectionMode {
        match self {
            Self::OAuth { .. } => ConnectionMode::OAuth,
            Self::Basic { .. } => ConnectionMode::BasicAuth,
        }
    }

    /// Returns the headers that authenticate every request.
    #[must_use]
    pub fn auth_headers(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::OAuth {
                client_id,
                auth_token,
                ..
            } => vec![
                ("X-Auth-Client", client_id.as_ref().to_string()),
                ("X-Auth-Token", auth_token.as_ref().to_string()),
            ],
            Self::Basic {
                username, api_key, ..
            } => {
                let pair = format!("{}:{}", username.as_ref(), api_key.as_ref());
                vec![(
                    "Authorization",
                    format!("Basic {}", BASE64_STANDARD.encode(pair)),
                )]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oauth_headers() {
        let credentials = Credentials::OAuth {
            client_id: ClientId::new("client").unwrap(),
            auth_token: AuthToken::new("token").unwrap(),
            store_hash: StoreHash::new("abc123").unwrap(),
            client_secret: Some(ClientSecret::new("secret").unwrap()),
        };

        assert_eq!(credentials.mode(), ConnectionMode::OAuth);
        assert_eq!(
            credentials.auth_headers(),
            vec![
                ("X-Auth-Client", "client".to_string()),
                ("X-Auth-Token", "token".to_string()),
            ]
        );
    }

    #[test]
    fn test_client_secret_is_never_sent() {
        let credentials = Credentials::OAuth {
            client_id: ClientId::new("client").unwrap(),
            auth_token: AuthToken::new("token").unwrap(),
            store_hash: StoreHash::new("abc123").unwrap(),
            client_secret: Some(ClientSecret::new("do-not-send").unwrap()),
        };

        assert!(credentials
            .auth_headers()
            .iter()
            .all(|(_, value)| !value.contains("do-not-send")));
    }

    #[test]
    fn test_basic_header_encodes_username_and_key() {
        let credentials = Credentials::Basic {
            store_url: StoreUrl::new("https://store.example.com").unwrap(),
            username: Username::new("admin").unwrap(),
            api_key: ApiKey::new("s3cr3t").unwrap(),
        };

        let headers = credentials.auth_headers();
        assert_eq!(headers.len(), 1);
        assert_eq!(headers[0].0, "Authorization");

        let encoded = headers[0].1.strip_prefix("Basic ").unwrap();
        let decoded = BASE64_STANDARD.decode(encoded).unwrap();
        assert_eq!(decoded, b"admin:s3cr3t");
    }
}
