//! HTTP-specific error types for the BigCommerce API SDK.
//!
//! This module contains the transport-level error taxonomy. Every HTTP
//! exchange either succeeds or fails with exactly one [`HttpError`] variant:
//!
//! - [`ClientError`]: status 400-499, carrying the raw response body
//! - [`ServerError`]: status 500-599, displayed with a fixed marker prefix
//! - [`InvalidHttpRequestError`]: the request failed validation before sending
//! - `InvalidJson`: a success status with a body that is not JSON
//! - `Network`: DNS, connection or timeout failures from the HTTP stack
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::clients::HttpError;
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Client(e)) => println!("Rejected ({}): {}", e.code, e.message),
//!     Err(HttpError::Server(e)) => println!("{e}"),
//!     Err(e) => println!("Transport failure: {e}"),
//! }
//! ```

use thiserror::Error;

/// Marker prepended to the message of every [`ServerError`].
pub const SERVER_ERROR_PREFIX: &str = "BigCommerce Server Exception: ";

/// A response with a status code in the 400-499 range.
///
/// The message is the response body passed through verbatim.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::clients::ClientError;
///
/// let error = ClientError {
///     code: 404,
///     reason: "Not Found".to_string(),
///     message: r#"{"title":"The requested resource was not found."}"#.to_string(),
/// };
///
/// assert_eq!(error.to_string(), error.message);
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ClientError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The reason phrase of the response status line.
    pub reason: String,
    /// The raw response body.
    pub message: String,
}

/// A response with a status code in the 500-599 range.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::clients::ServerError;
///
/// let error = ServerError {
///     code: 503,
///     reason: "Service Unavailable".to_string(),
///     message: "maintenance".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "BigCommerce Server Exception: maintenance");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("BigCommerce Server Exception: {message}")]
pub struct ServerError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The reason phrase of the response status line.
    pub reason: String,
    /// The raw response body.
    pub message: String,
}

/// Error returned when an HTTP request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// The URL is not absolute.
    #[error("Request URL '{url}' is not an absolute http(s) URL.")]
    RelativeUrl {
        /// The URL that was provided.
        url: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The server rejected the request (4xx).
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The server failed to process the request (5xx).
    #[error(transparent)]
    Server(#[from] ServerError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// A success response carried a body that is not valid JSON.
    #[error("Malformed JSON response (status {code}): {source}")]
    InvalidJson {
        /// The HTTP status code of the response.
        code: u16,
        /// The JSON decoding failure.
        #[source]
        source: serde_json::Error,
    },

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code for classified response errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Client(e) => Some(e.code),
            Self::Server(e) => Some(e.code),
            Self::InvalidJson { code, .. } => Some(*code),
            Self::InvalidRequest(_) | Self::Network(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_message_is_raw_body() {
        let error = ClientError {
            code: 422,
            reason: "Unprocessable Entity".to_string(),
            message: r#"{"errors":{"name":"required"}}"#.to_string(),
        };
        assert_eq!(error.to_string(), r#"{"errors":{"name":"required"}}"#);
    }

    #[test]
    fn test_server_error_message_is_prefixed() {
        let error = ServerError {
            code: 500,
            reason: "Internal Server Error".to_string(),
            message: "boom".to_string(),
        };
        assert!(error.to_string().starts_with(SERVER_ERROR_PREFIX));
        assert!(error.to_string().ends_with("boom"));
    }

    #[test]
    fn test_invalid_request_error_missing_body() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "put".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot use put without specifying data.");
    }

    #[test]
    fn test_status_is_exposed_for_classified_errors() {
        let error = HttpError::from(ClientError {
            code: 404,
            reason: "Not Found".to_string(),
            message: String::new(),
        });
        assert_eq!(error.status(), Some(404));

        let error = HttpError::from(InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        });
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_invalid_json_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let error = HttpError::InvalidJson { code: 200, source };
        assert!(std::error::Error::source(&error).is_some());
        assert!(error.to_string().contains("status 200"));
    }
}
