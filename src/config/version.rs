//! BigCommerce API version definitions.
//!
//! BigCommerce serves two API generations side by side: the current v3 API,
//! which wraps collections in a `data` envelope with cursor pagination, and
//! the legacy v2 API, which returns bare arrays.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// BigCommerce API version.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::ApiVersion;
///
/// let version: ApiVersion = "v2".parse().unwrap();
/// assert!(version.is_legacy());
/// assert_eq!(ApiVersion::V3.to_string(), "v3");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ApiVersion {
    /// Legacy v2 API (bare-array collections, no pagination metadata).
    V2,
    /// Current v3 API.
    #[default]
    V3,
}

impl ApiVersion {
    /// Returns the current API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V3
    }

    /// Returns `true` for the legacy v2 API.
    #[must_use]
    pub const fn is_legacy(&self) -> bool {
        matches!(self, Self::V2)
    }

    /// Returns the path segment for this version.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::V2 => "v2",
            Self::V3 => "v3",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "v2" | "2" => Ok(Self::V2),
            "v3" | "3" => Ok(Self::V3),
            _ => Err(ConfigError::InvalidSetting {
                key: "api_version",
                value: s.to_string(),
            }),
        }
    }
}
