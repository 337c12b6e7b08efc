//! Query string filters for collection endpoints.

use std::fmt;

/// An ordered set of query constraints.
///
/// Keys are passed through verbatim, so BigCommerce operators such as
/// `id:in` or `date_modified:min` work unchanged. Values are percent-encoded.
/// An empty filter renders as the empty string.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::rest::Filter;
///
/// let filter = Filter::new()
///     .with("limit", 50)
///     .with("keyword", "blue shirt")
///     .with_list("id:in", [1, 2, 3]);
///
/// assert_eq!(filter.to_query(), "?limit=50&keyword=blue%20shirt&id:in=1%2C2%2C3");
/// assert_eq!(Filter::new().to_query(), "");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Filter {
    pairs: Vec<(String, String)>,
}

impl Filter {
    /// Creates an empty filter.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Appends a constraint.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.push(key, value);
        self
    }

    /// Appends a constraint whose value is a comma-separated list.
    #[must_use]
    pub fn with_list<I, V>(self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: ToString,
    {
        let joined = values
            .into_iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(",");
        self.with(key, joined)
    }

    /// Appends a constraint in place.
    pub fn push(&mut self, key: impl Into<String>, value: impl ToString) {
        self.pairs.push((key.into(), value.to_string()));
    }

    /// Returns `true` if the filter has no constraints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the constraints in insertion order.
    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Renders the filter as a query string, including the leading `?`.
    #[must_use]
    pub fn to_query(&self) -> String {
        if self.pairs.is_empty() {
            return String::new();
        }
        format!("?{}", self.encoded_pairs())
    }

    pub(crate) fn encoded_pairs(&self) -> String {
        self.pairs
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query())
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Filter {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut filter = Self::new();
        for (key, value) in iter {
            filter.push(key, value);
        }
        filter
    }
}
