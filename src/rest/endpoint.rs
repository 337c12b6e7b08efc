//! Declarative endpoint descriptions.
//!
//! An [`Endpoint`] is plain data: an HTTP method, a path template, the
//! [`ResourceKind`] its responses map to and the API version it lives on.
//! The type parameter is the endpoint's [`Shape`], which fixes what a call
//! returns. One generic dispatch function,
//! [`RestClient::call`](crate::clients::RestClient::call), serves every
//! endpoint.
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_api::rest::{Endpoint, Many, One, ResourceKind};
//! use bigcommerce_api::{ApiVersion, HttpMethod};
//!
//! const BRANDS: Endpoint<Many> = Endpoint::get("/catalog/brands", ResourceKind::Brand);
//! const ORDER: Endpoint<One> = Endpoint::get("/orders/{id}", ResourceKind::Order).legacy();
//!
//! assert_eq!(BRANDS.method(), HttpMethod::Get);
//! assert_eq!(ORDER.version(), ApiVersion::V2);
//! ```

use std::fmt;
use std::marker::PhantomData;

use serde_json::Value;

use crate::clients::HttpMethod;
use crate::config::ApiVersion;
use crate::rest::{mapper, MappingError, Resource, ResourceKind};

mod sealed {
    pub trait Sealed {}
}

/// The output contract of an endpoint.
///
/// This trait is sealed; the shapes are [`One`], [`Many`], [`Count`] and
/// [`Empty`].
pub trait Shape: sealed::Sealed {
    /// What a call to an endpoint of this shape returns.
    type Output;

    /// Whether GET calls on the current API follow `next` links.
    const PAGINATED: bool;

    /// Maps a fully assembled body to the output.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError`] if the body does not have this shape.
    fn map(kind: ResourceKind, body: Value) -> Result<Self::Output, MappingError>;
}

/// A single resource.
#[derive(Clone, Copy, Debug)]
pub struct One;

/// A collection of resources.
#[derive(Clone, Copy, Debug)]
pub struct Many;

/// A `{"count": n}` body.
#[derive(Clone, Copy, Debug)]
pub struct Count;

/// A response whose body is discarded.
#[derive(Clone, Copy, Debug)]
pub struct Empty;

impl sealed::Sealed for One {}
impl sealed::Sealed for Many {}
impl sealed::Sealed for Count {}
impl sealed::Sealed for Empty {}

impl Shape for One {
    type Output = Resource;
    const PAGINATED: bool = false;

    fn map(kind: ResourceKind, body: Value) -> Result<Resource, MappingError> {
        mapper::map_resource(kind, body)
    }
}

impl Shape for Many {
    type Output = Vec<Resource>;
    const PAGINATED: bool = true;

    fn map(kind: ResourceKind, body: Value) -> Result<Vec<Resource>, MappingError> {
        mapper::map_collection(kind, body)
    }
}

impl Shape for Count {
    type Output = u64;
    const PAGINATED: bool = false;

    fn map(_kind: ResourceKind, body: Value) -> Result<u64, MappingError> {
        mapper::map_count(&body)
    }
}

impl Shape for Empty {
    type Output = ();
    const PAGINATED: bool = false;

    fn map(_kind: ResourceKind, _body: Value) -> Result<(), MappingError> {
        Ok(())
    }
}

/// One API endpoint: method, path template, resource kind and version.
pub struct Endpoint<S: Shape> {
    method: HttpMethod,
    template: &'static str,
    kind: ResourceKind,
    version: ApiVersion,
    shape: PhantomData<fn() -> S>,
}

impl<S: Shape> Endpoint<S> {
    /// Creates an endpoint on the current (v3) API.
    #[must_use]
    pub const fn new(method: HttpMethod, template: &'static str, kind: ResourceKind) -> Self {
        Self {
            method,
            template,
            kind,
            version: ApiVersion::V3,
            shape: PhantomData,
        }
    }

    /// Creates a GET endpoint.
    #[must_use]
    pub const fn get(template: &'static str, kind: ResourceKind) -> Self {
        Self::new(HttpMethod::Get, template, kind)
    }

    /// Creates a POST endpoint.
    #[must_use]
    pub const fn post(template: &'static str, kind: ResourceKind) -> Self {
        Self::new(HttpMethod::Post, template, kind)
    }

    /// Creates a PUT endpoint.
    #[must_use]
    pub const fn put(template: &'static str, kind: ResourceKind) -> Self {
        Self::new(HttpMethod::Put, template, kind)
    }

    /// Creates a DELETE endpoint.
    #[must_use]
    pub const fn delete(template: &'static str, kind: ResourceKind) -> Self {
        Self::new(HttpMethod::Delete, template, kind)
    }

    /// Creates a HEAD endpoint. The response body is always empty, so it is
    /// only useful with [`Empty`] or for reading response headers.
    #[must_use]
    pub const fn head(template: &'static str, kind: ResourceKind) -> Self {
        Self::new(HttpMethod::Head, template, kind)
    }

    /// Moves the endpoint to the legacy (v2) API.
    #[must_use]
    pub const fn legacy(mut self) -> Self {
        self.version = ApiVersion::V2;
        self
    }

    /// Returns the HTTP method.
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    /// Returns the path template.
    #[must_use]
    pub const fn template(&self) -> &'static str {
        self.template
    }

    /// Returns the resource kind responses map to.
    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Returns the API version.
    #[must_use]
    pub const fn version(&self) -> ApiVersion {
        self.version
    }

    /// Returns `true` if a call follows pagination links.
    ///
    /// Only GET collections on the current API paginate; legacy collections
    /// are bare arrays.
    #[must_use]
    pub const fn paginates(&self) -> bool {
        S::PAGINATED
            && matches!(self.method, HttpMethod::Get)
            && !self.version.is_legacy()
    }
}

impl<S: Shape> Clone for Endpoint<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Shape> Copy for Endpoint<S> {}

impl<S: Shape> fmt::Debug for Endpoint<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("method", &self.method)
            .field("template", &self.template)
            .field("kind", &self.kind)
            .field("version", &self.version)
            .finish()
    }
}
