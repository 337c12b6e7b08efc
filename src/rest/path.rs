//! Path template expansion for endpoints.
//!
//! Endpoint paths are templates with `{name}` placeholders, such as
//! `/catalog/products/{product_id}/variants/{id}`. [`build_path`] fills every
//! placeholder from a [`PathParams`] set and fails if one is missing.
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_api::rest::{build_path, PathParams};
//!
//! let params = PathParams::new().with("product_id", 12).with("id", 34);
//! let path = build_path("/catalog/products/{product_id}/variants/{id}", &params).unwrap();
//! assert_eq!(path, "/catalog/products/12/variants/34");
//! ```

use std::fmt::Display;

use crate::rest::ResourceError;

/// Named values for path template placeholders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathParams {
    values: Vec<(&'static str, String)>,
}

impl PathParams {
    /// Creates an empty parameter set.
    #[must_use]
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Creates a parameter set holding only `id`.
    #[must_use]
    pub fn id(id: impl Display) -> Self {
        Self::new().with("id", id)
    }

    /// Adds or replaces a named parameter.
    #[must_use]
    pub fn with(mut self, name: &'static str, value: impl Display) -> Self {
        let value = value.to_string();
        match self.values.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.values.push((name, value)),
        }
        self
    }

    /// Returns a parameter value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Expands a path template.
///
/// Values are percent-encoded. Parameters without a placeholder are ignored.
///
/// # Errors
///
/// Returns [`ResourceError::MissingPathParameter`] naming the first
/// placeholder with no value.
pub fn build_path(template: &'static str, params: &PathParams) -> Result<String, ResourceError> {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        let name = &rest[start + 1..start + len];
        let value = params
            .get(name)
            .ok_or_else(|| ResourceError::MissingPathParameter {
                template,
                name: name.to_string(),
            })?;

        result.push_str(&rest[..start]);
        result.push_str(&urlencoding::encode(value));
        rest = &rest[start + len + 1..];
    }

    result.push_str(rest);
    Ok(result)
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PathParams>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_without_placeholders() {
        let path = build_path("/catalog/products", &PathParams::new()).unwrap();
        assert_eq!(path, "/catalog/products");
    }

    #[test]
    fn test_single_id() {
        let path = build_path("/catalog/products/{id}", &PathParams::id(123)).unwrap();
        assert_eq!(path, "/catalog/products/123");
    }

    #[test]
    fn test_missing_parameter_is_named() {
        let params = PathParams::id(5);
        let result = build_path("/catalog/products/{product_id}/images/{id}", &params);

        match result {
            Err(ResourceError::MissingPathParameter { template, name }) => {
                assert_eq!(template, "/catalog/products/{product_id}/images/{id}");
                assert_eq!(name, "product_id");
            }
            other => panic!("expected MissingPathParameter, got {other:?}"),
        }
    }

    #[test]
    fn test_values_are_encoded() {
        let params = PathParams::id("a b/c");
        let path = build_path("/carts/{id}", &params).unwrap();
        assert_eq!(path, "/carts/a%20b%2Fc");
    }

    #[test]
    fn test_with_replaces_existing() {
        let params = PathParams::id(1).with("id", 2);
        assert_eq!(params.get("id"), Some("2"));
    }

    #[test]
    fn test_extra_parameters_are_ignored() {
        let params = PathParams::id(1).with("unused", "x");
        assert_eq!(build_path("/pages/{id}", &params).unwrap(), "/pages/1");
    }
}
