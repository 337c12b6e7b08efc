//! Cursor pagination for v3 collections.
//!
//! A v3 collection page looks like:
//!
//! ```json
//! {"data": [...], "meta": {"pagination": {"links": {"next": "?page=2&limit=50"}}}}
//! ```
//!
//! [`collect_pages`] keeps fetching while the latest page carries a `next`
//! link and appends each page's `data` in order. The absence of `next` is
//! the only way the loop ends.

use reqwest::Url;
use serde_json::Value;

use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest};
use crate::rest::errors::json_type_name;
use crate::rest::{MappingError, ResourceError, ResourceKind};

/// Something that can fetch one decoded page by absolute URL.
#[allow(async_fn_in_trait)]
pub trait PageSource {
    /// Issues a GET to `url` and returns the decoded body.
    async fn fetch_page(&self, url: &str) -> Result<Value, HttpError>;
}

impl PageSource for HttpClient {
    async fn fetch_page(&self, url: &str) -> Result<Value, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, url).build()?;
        Ok(self.request(request).await?.body)
    }
}

/// Returns the `meta.pagination.links.next` cursor, if any.
#[must_use]
pub fn next_link(page: &Value) -> Option<&str> {
    page.pointer("/meta/pagination/links/next")
        .and_then(Value::as_str)
        .filter(|next| !next.is_empty())
}

/// Builds the URL for the page a `next` cursor points to.
///
/// Relative cursors (BigCommerce sends `?page=2&limit=50`) replace the
/// original query string of the collection URL, since they already carry the
/// full query. Absolute cursors are accepted only on the collection's own
/// origin, because follow-up requests carry the store credentials.
///
/// # Errors
///
/// Returns [`MappingError::ForeignPageLink`] if an absolute cursor points at
/// another scheme, host or port.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::rest::pagination::follow_up_url;
///
/// assert_eq!(
///     follow_up_url("https://x.test/v3/catalog/products?limit=50", "?page=2&limit=50").unwrap(),
///     "https://x.test/v3/catalog/products?page=2&limit=50"
/// );
/// assert!(follow_up_url("https://x.test/v3/catalog/products", "https://y.test/p").is_err());
/// ```
pub fn follow_up_url(collection_url: &str, next: &str) -> Result<String, MappingError> {
    if next.starts_with("https://") || next.starts_with("http://") {
        return match (Url::parse(collection_url), Url::parse(next)) {
            (Ok(collection), Ok(link)) if collection.origin() == link.origin() => {
                Ok(next.to_string())
            }
            _ => Err(MappingError::ForeignPageLink {
                next: next.to_string(),
            }),
        };
    }

    let base = collection_url
        .split_once('?')
        .map_or(collection_url, |(path, _)| path);

    if next.starts_with('?') {
        Ok(format!("{base}{next}"))
    } else {
        Ok(format!("{base}?{}", next.trim_start_matches('&')))
    }
}

fn take_data(kind: ResourceKind, page: &mut Value) -> Result<Vec<Value>, MappingError> {
    let data = match page {
        Value::Object(object) => object.remove("data"),
        Value::Array(items) => return Ok(std::mem::take(items)),
        _ => None,
    };

    match data {
        Some(Value::Array(items)) => Ok(items),
        Some(other) => Err(MappingError::NotACollection {
            kind: kind.name(),
            found: json_type_name(&other),
        }),
        None => Err(MappingError::NotACollection {
            kind: kind.name(),
            found: json_type_name(page),
        }),
    }
}

/// Assembles a full collection starting from its first page.
///
/// A first page with `data` but no pagination metadata is returned as is.
/// An empty first body (`null`) is an empty collection.
///
/// # Errors
///
/// Returns [`ResourceError::Http`] if a follow-up request fails, or
/// [`ResourceError::Mapping`] if a page has no `data` array or links to
/// another origin.
pub async fn collect_pages<S: PageSource>(
    source: &S,
    kind: ResourceKind,
    collection_url: &str,
    first: Value,
) -> Result<Vec<Value>, ResourceError> {
    if first.is_null() {
        return Ok(Vec::new());
    }

    let mut page = first;
    let mut items = take_data(kind, &mut page)?;
    let mut pages = 1_u32;

    while let Some(next) = next_link(&page) {
        let url = follow_up_url(collection_url, next)?;
        tracing::debug!("Fetching page {} of {} collection", pages + 1, kind);

        page = source.fetch_page(&url).await?;
        items.extend(take_data(kind, &mut page)?);
        pages += 1;
    }

    Ok(items)
}
