//! Error types for resource mapping and facade dispatch.
//!
//! # Error Handling
//!
//! - [`MappingError`]: the decoded body does not have the shape the endpoint
//!   promises (an object, an array, a count)
//! - [`ResourceError`]: everything a facade call can fail with, wrapping the
//!   lower layers via `#[from]`
//!
//! Mapping failures are always reported. A malformed body never turns into
//! an empty list, a zero count or a missing resource.
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::rest::{endpoints, ResourceError};
//! use bigcommerce_api::clients::HttpError;
//!
//! match client.get_resource(&endpoints::PRODUCT, &PathParams::id(42)).await {
//!     Ok(product) => println!("{:?}", product.get("name")),
//!     Err(ResourceError::Http(HttpError::Client(e))) if e.code == 404 => println!("gone"),
//!     Err(e) => println!("failed: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::HttpError;
use crate::error::ConfigError;

/// Returns a short name for the JSON type of `value`, for error messages.
pub(crate) const fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// The decoded response body did not have the expected shape.
#[derive(Debug, Error)]
pub enum MappingError {
    /// A single resource was expected but the body was not an object.
    #[error("Expected a {kind} object but received {found}")]
    NotAnObject {
        /// The resource kind being mapped.
        kind: &'static str,
        /// The JSON type that was received.
        found: &'static str,
    },

    /// A collection was expected but the body was not an array.
    #[error("Expected a collection of {kind} but received {found}")]
    NotACollection {
        /// The resource kind being mapped.
        kind: &'static str,
        /// The JSON type that was received.
        found: &'static str,
    },

    /// A count response lacked an integer `count` field.
    #[error("Expected a count response but received {found}")]
    MissingCount {
        /// The JSON type that was received.
        found: &'static str,
    },

    /// A pagination cursor pointed at a different origin than the collection.
    #[error("Refusing to follow pagination link to another origin: {next}")]
    ForeignPageLink {
        /// The `next` link that was received.
        next: String,
    },

    /// The time endpoint returned something other than a Unix timestamp.
    #[error("Expected a Unix timestamp but received {found}")]
    InvalidTimestamp {
        /// The value that was received.
        found: String,
    },

    /// A resource's fields did not match its typed view.
    #[error("Failed to convert {kind}: {source}")]
    Typed {
        /// The resource kind being converted.
        kind: &'static str,
        /// The serde failure.
        #[source]
        source: serde_json::Error,
    },
}

/// Error type for facade operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// A path template placeholder had no matching parameter.
    #[error("Missing path parameter '{name}' for '{template}'")]
    MissingPathParameter {
        /// The endpoint's path template.
        template: &'static str,
        /// The placeholder that could not be filled.
        name: String,
    },

    /// The client is not configured or the connection could not be built.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The HTTP exchange failed.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The response could not be mapped.
    #[error(transparent)]
    Mapping(#[from] MappingError),
}

impl ResourceError {
    /// Returns the HTTP status code if the failure was a classified response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            _ => None,
        }
    }

    /// Returns `true` if the API answered 404.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.status(), Some(404))
    }
}
