//! HTTP response types for the BigCommerce API SDK.
//!
//! This module provides the [`HttpResponse`] type and the [`RateLimit`]
//! snapshot parsed from BigCommerce's `X-Rate-Limit-*` headers.

use std::collections::HashMap;

/// Rate limit information parsed from the `X-Rate-Limit-*` response headers.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::clients::RateLimit;
/// use std::collections::HashMap;
///
/// let mut headers = HashMap::new();
/// headers.insert("x-rate-limit-requests-left".to_string(), vec!["149".to_string()]);
/// headers.insert("x-rate-limit-requests-quota".to_string(), vec!["150".to_string()]);
///
/// let limit = RateLimit::from_headers(&headers).unwrap();
/// assert_eq!(limit.requests_left, 149);
/// assert_eq!(limit.requests_quota, Some(150));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimit {
    /// Requests remaining in the current window (`X-Rate-Limit-Requests-Left`).
    pub requests_left: u32,
    /// Requests allowed per window (`X-Rate-Limit-Requests-Quota`).
    pub requests_quota: Option<u32>,
    /// Milliseconds until the window resets (`X-Rate-Limit-Time-Reset-Ms`).
    pub time_reset_ms: Option<u64>,
    /// Window length in milliseconds (`X-Rate-Limit-Time-Window-Ms`).
    pub time_window_ms: Option<u64>,
}

impl RateLimit {
    /// Parses rate limit headers from a lower-cased header map.
    ///
    /// Returns `None` when `X-Rate-Limit-Requests-Left` is absent or not an
    /// integer.
    #[must_use]
    pub fn from_headers(headers: &HashMap<String, Vec<String>>) -> Option<Self> {
        fn header<T: std::str::FromStr>(
            headers: &HashMap<String, Vec<String>>,
            name: &str,
        ) -> Option<T> {
            headers
                .get(name)
                .and_then(|values| values.first())
                .and_then(|value| value.trim().parse().ok())
        }

        Some(Self {
            requests_left: header(headers, "x-rate-limit-requests-left")?,
            requests_quota: header(headers, "x-rate-limit-requests-quota"),
            time_reset_ms: header(headers, "x-rate-limit-time-reset-ms"),
            time_window_ms: header(headers, "x-rate-limit-time-window-ms"),
        })
    }
}

/// An HTTP response from the BigCommerce API.
///
/// Contains the status line, headers, the raw body text and the decoded JSON
/// body. An empty body decodes to `Value::Null`.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The reason phrase of the status line.
    pub reason: String,
    /// Response headers, lower-cased (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body text.
    pub raw_body: String,
    /// The decoded response body.
    pub body: serde_json::Value,
    /// Rate limit information, if the response carried it.
    pub rate_limit: Option<RateLimit>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing the rate limit headers.
    #[must_use]
    pub fn new(
        code: u16,
        reason: impl Into<String>,
        headers: HashMap<String, Vec<String>>,
        raw_body: impl Into<String>,
        body: serde_json::Value,
    ) -> Self {
        let rate_limit = RateLimit::from_headers(&headers);

        Self {
            code,
            reason: reason.into(),
            headers,
            raw_body: raw_body.into(),
            body,
            rate_limit,
        }
    }

    /// Returns `true` unless the status is a client or server error.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        !self.is_client_error() && !self.is_server_error()
    }

    /// Returns `true` if the status code is in the 400-499 range.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.code >= 400 && self.code <= 499
    }

    /// Returns `true` if the status code is in the 500-599 range.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.code >= 500 && self.code <= 599
    }

    /// Returns the first value of a header, looked up case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the number of requests left in the current rate limit window.
    #[must_use]
    pub fn requests_remaining(&self) -> Option<u32> {
        self.rate_limit.map(|limit| limit.requests_left)
    }
}
