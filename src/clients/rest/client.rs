//! REST client implementation for the BigCommerce API.
//!
//! This module provides the [`RestClient`] type, the single entry point for
//! every endpoint in [`endpoints`](crate::rest::endpoints).

use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use crate::auth::Authenticator;
use crate::clients::{HttpError, HttpRequest, HttpResponse};
use crate::config::BigCommerceConfig;
use crate::rest::{
    build_path, endpoints, pagination, Count, Empty, Endpoint, Filter, Many, MappingError, One,
    PathParams, Resource, ResourceError, Shape, TypedResource,
};

/// REST API client for the BigCommerce API.
///
/// Every operation goes through one generic dispatch function,
/// [`call`](Self::call), which expands the endpoint's path, sends the
/// request on the shared connection, follows pagination for v3 collections
/// and maps the body to the endpoint's output shape.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`. Concurrent calls share one memoized
/// connection.
///
/// # Example
///
/// ```rust,ignore
/// use bigcommerce_api::clients::RestClient;
/// use bigcommerce_api::rest::{endpoints, PathParams, Resource, ResourceKind};
/// use bigcommerce_api::{AuthToken, BigCommerceConfig, ClientId, StoreHash};
/// use serde_json::json;
///
/// let config = BigCommerceConfig::builder()
///     .client_id(ClientId::new("client-id")?)
///     .auth_token(AuthToken::new("token")?)
///     .store_hash(StoreHash::new("abc123")?)
///     .build()?;
///
/// let client = RestClient::new(config);
///
/// let products = client.get_collection(&endpoints::PRODUCTS, &PathParams::new(), None).await?;
///
/// let mut brand = Resource::empty(ResourceKind::Brand);
/// brand.set("name", json!("Common Good"));
/// let created = client.create(&endpoints::CREATE_BRAND, &PathParams::new(), &brand).await?;
/// ```
#[derive(Debug, Default)]
pub struct RestClient {
    authenticator: Authenticator,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a client with the given configuration.
    #[must_use]
    pub fn new(config: BigCommerceConfig) -> Self {
        Self {
            authenticator: Authenticator::with_config(config),
        }
    }

    /// Replaces the configuration. The next call builds a new connection.
    pub fn configure(&self, config: BigCommerceConfig) {
        self.authenticator.configure(config);
    }

    /// Returns the authenticator holding the configuration and connection.
    #[must_use]
    pub const fn authenticator(&self) -> &Authenticator {
        &self.authenticator
    }

    /// Calls an endpoint.
    ///
    /// `params` fills the path template, `filter` is appended as the query
    /// string and `body` is sent as JSON.
    ///
    /// # Errors
    ///
    /// - [`ResourceError::Config`] if the client is not configured
    /// - [`ResourceError::MissingPathParameter`] if `params` lacks a placeholder
    /// - [`ResourceError::Http`] for transport failures and 4xx/5xx responses
    /// - [`ResourceError::Mapping`] if the body does not have the endpoint's shape
    pub async fn call<S: Shape>(
        &self,
        endpoint: &Endpoint<S>,
        params: &PathParams,
        filter: Option<&Filter>,
        body: Option<Value>,
    ) -> Result<S::Output, ResourceError> {
        let connection = self.authenticator.connection()?;
        let url = endpoint_url(
            connection.base_path(endpoint.version()),
            endpoint,
            params,
            filter,
        )?;

        let request = HttpRequest::builder(endpoint.method(), url.clone())
            .maybe_body(body)
            .build()
            .map_err(HttpError::from)?;
        let response = connection.request(request).await?;

        let body = if endpoint.paginates() {
            Value::Array(
                pagination::collect_pages(
                    connection.as_ref(),
                    endpoint.kind(),
                    &url,
                    response.body,
                )
                .await?,
            )
        } else {
            response.body
        };

        Ok(S::map(endpoint.kind(), body)?)
    }

    /// Sends a request to an endpoint and returns the raw response.
    async fn exchange<S: Shape>(
        &self,
        endpoint: &Endpoint<S>,
        params: &PathParams,
    ) -> Result<HttpResponse, ResourceError> {
        let connection = self.authenticator.connection()?;
        let url = endpoint_url(
            connection.base_path(endpoint.version()),
            endpoint,
            params,
            None,
        )?;
        let request = HttpRequest::builder(endpoint.method(), url)
            .build()
            .map_err(HttpError::from)?;
        Ok(connection.request(request).await?)
    }

    /// Fetches a whole collection. v3 collections are followed across pages.
    ///
    /// # Errors
    ///
    /// See [`call`](Self::call).
    pub async fn get_collection(
        &self,
        endpoint: &Endpoint<Many>,
        params: &PathParams,
        filter: Option<&Filter>,
    ) -> Result<Vec<Resource>, ResourceError> {
        self.call(endpoint, params, filter, None).await
    }

    /// Fetches a single resource.
    ///
    /// # Errors
    ///
    /// See [`call`](Self::call).
    pub async fn get_resource(
        &self,
        endpoint: &Endpoint<One>,
        params: &PathParams,
    ) -> Result<Resource, ResourceError> {
        self.call(endpoint, params, None, None).await
    }

    /// Fetches a count.
    ///
    /// # Errors
    ///
    /// See [`call`](Self::call).
    pub async fn get_count(
        &self,
        endpoint: &Endpoint<Count>,
        params: &PathParams,
        filter: Option<&Filter>,
    ) -> Result<u64, ResourceError> {
        self.call(endpoint, params, filter, None).await
    }

    /// Creates a resource, sending its [`create_fields`](Resource::create_fields).
    ///
    /// # Errors
    ///
    /// See [`call`](Self::call).
    pub async fn create(
        &self,
        endpoint: &Endpoint<One>,
        params: &PathParams,
        resource: &Resource,
    ) -> Result<Resource, ResourceError> {
        let body = resource.create_fields();
        tracing::debug!("Creating {}: {}", resource.kind(), body);
        self.call(endpoint, params, None, Some(body)).await
    }

    /// Updates a resource, sending its [`update_fields`](Resource::update_fields).
    ///
    /// # Errors
    ///
    /// See [`call`](Self::call).
    pub async fn update(
        &self,
        endpoint: &Endpoint<One>,
        params: &PathParams,
        resource: &Resource,
    ) -> Result<Resource, ResourceError> {
        let body = resource.update_fields();
        tracing::debug!("Updating {}: {}", resource.kind(), body);
        self.call(endpoint, params, None, Some(body)).await
    }

    /// Sends a caller-built body to an endpoint as is.
    ///
    /// Used for batch operations whose body is an array.
    ///
    /// # Errors
    ///
    /// See [`call`](Self::call).
    pub async fn update_raw<S: Shape>(
        &self,
        endpoint: &Endpoint<S>,
        params: &PathParams,
        body: Value,
    ) -> Result<S::Output, ResourceError> {
        self.call(endpoint, params, None, Some(body)).await
    }

    /// Deletes a resource, or the resources selected by `filter`.
    ///
    /// # Errors
    ///
    /// See [`call`](Self::call).
    pub async fn delete(
        &self,
        endpoint: &Endpoint<Empty>,
        params: &PathParams,
        filter: Option<&Filter>,
    ) -> Result<(), ResourceError> {
        self.call(endpoint, params, filter, None).await
    }

    /// Fetches a single resource as a typed view.
    ///
    /// # Errors
    ///
    /// See [`call`](Self::call). A body that does not fit `T` is
    /// [`MappingError::Typed`].
    pub async fn get_typed<T: TypedResource>(
        &self,
        endpoint: &Endpoint<One>,
        params: &PathParams,
    ) -> Result<T, ResourceError> {
        Ok(self.get_resource(endpoint, params).await?.into_typed()?)
    }

    /// Fetches a whole collection as typed views.
    ///
    /// # Errors
    ///
    /// See [`get_typed`](Self::get_typed).
    pub async fn get_typed_collection<T: TypedResource>(
        &self,
        endpoint: &Endpoint<Many>,
        params: &PathParams,
        filter: Option<&Filter>,
    ) -> Result<Vec<T>, ResourceError> {
        self.get_collection(endpoint, params, filter)
            .await?
            .into_iter()
            .map(|resource| resource.into_typed().map_err(ResourceError::from))
            .collect()
    }

    /// Creates a resource from a typed view and returns the created view.
    ///
    /// # Errors
    ///
    /// See [`get_typed`](Self::get_typed).
    pub async fn create_typed<T: TypedResource>(
        &self,
        endpoint: &Endpoint<One>,
        params: &PathParams,
        value: &T,
    ) -> Result<T, ResourceError> {
        let resource = value.to_resource()?;
        Ok(self.create(endpoint, params, &resource).await?.into_typed()?)
    }

    /// Updates a resource from a typed view and returns the updated view.
    ///
    /// # Errors
    ///
    /// See [`get_typed`](Self::get_typed).
    pub async fn update_typed<T: TypedResource>(
        &self,
        endpoint: &Endpoint<One>,
        params: &PathParams,
        value: &T,
    ) -> Result<T, ResourceError> {
        let resource = value.to_resource()?;
        Ok(self.update(endpoint, params, &resource).await?.into_typed()?)
    }

    /// Assigns a product to a channel.
    ///
    /// # Errors
    ///
    /// See [`call`](Self::call).
    pub async fn assign_product_to_channel(
        &self,
        product_id: u64,
        channel_id: u64,
    ) -> Result<(), ResourceError> {
        let body = json!([{"product_id": product_id, "channel_id": channel_id}]);
        self.update_raw(&endpoints::PRODUCT_CHANNEL_ASSIGNMENTS, &PathParams::new(), body)
            .await
    }

    /// Assigns a custom template file to a product on a channel.
    ///
    /// # Errors
    ///
    /// See [`call`](Self::call).
    pub async fn assign_layout_to_product(
        &self,
        product_id: u64,
        channel_id: u64,
        file_name: &str,
    ) -> Result<(), ResourceError> {
        let body = json!([{
            "entity_type": "product",
            "entity_id": product_id,
            "channel_id": channel_id,
            "file_name": file_name,
        }]);
        self.update_raw(&endpoints::CUSTOM_TEMPLATE_ASSOCIATIONS, &PathParams::new(), body)
            .await
    }

    /// Assigns a price list to a customer group on a channel.
    ///
    /// # Errors
    ///
    /// See [`call`](Self::call).
    pub async fn upsert_pricelist_to_customer_group(
        &self,
        pricelist_id: u64,
        customer_group_id: u64,
        channel_id: u64,
    ) -> Result<(), ResourceError> {
        let body = json!({"customer_group_id": customer_group_id, "channel_id": channel_id});
        let params = PathParams::new().with("pricelist_id", pricelist_id);
        self.update_raw(&endpoints::PRICELIST_ASSIGNMENTS, &params, body)
            .await
    }

    /// Creates or updates price list records.
    ///
    /// `records` is the array of records to upsert.
    ///
    /// # Errors
    ///
    /// See [`call`](Self::call).
    pub async fn upsert_pricelist_records(
        &self,
        pricelist_id: u64,
        records: Value,
    ) -> Result<(), ResourceError> {
        let params = PathParams::new().with("pricelist_id", pricelist_id);
        self.update_raw(&endpoints::UPSERT_PRICELIST_RECORDS, &params, records)
            .await
    }

    /// Sets the value of a customer attribute for one customer.
    ///
    /// # Errors
    ///
    /// See [`call`](Self::call).
    pub async fn upsert_customer_attribute_value(
        &self,
        customer_id: u64,
        attribute_id: u64,
        value: impl Into<Value>,
    ) -> Result<(), ResourceError> {
        let body = json!([{
            "customer_id": customer_id,
            "attribute_id": attribute_id,
            "value": value.into(),
        }]);
        self.update_raw(&endpoints::CUSTOMER_ATTRIBUTE_VALUES, &PathParams::new(), body)
            .await
    }

    /// Updates several products in one request.
    ///
    /// `products` is an array of partial products, each with its `id`.
    ///
    /// # Errors
    ///
    /// See [`call`](Self::call).
    pub async fn bulk_update_products(&self, products: Value) -> Result<(), ResourceError> {
        self.update_raw(&endpoints::BULK_UPDATE_PRODUCTS, &PathParams::new(), products)
            .await
    }

    /// Fetches one customer by id, or `None` if no customer matches.
    ///
    /// # Errors
    ///
    /// See [`call`](Self::call).
    pub async fn get_customer(&self, id: u64) -> Result<Option<Resource>, ResourceError> {
        let filter = Filter::new().with("id:in", id);
        let customers = self
            .get_collection(&endpoints::CUSTOMERS, &PathParams::new(), Some(&filter))
            .await?;
        Ok(customers.into_iter().next())
    }

    /// Deletes the customers with the given ids.
    ///
    /// # Errors
    ///
    /// See [`call`](Self::call).
    pub async fn delete_customers(&self, ids: &[u64]) -> Result<(), ResourceError> {
        let filter = Filter::new().with_list("id:in", ids);
        self.delete(&endpoints::DELETE_CUSTOMERS, &PathParams::new(), Some(&filter))
            .await
    }

    /// Returns the store's current time.
    ///
    /// # Errors
    ///
    /// See [`call`](Self::call). A body without a Unix timestamp is
    /// [`MappingError::InvalidTimestamp`].
    pub async fn get_time(&self) -> Result<DateTime<Utc>, ResourceError> {
        let response = self.exchange(&endpoints::TIME, &PathParams::new()).await?;
        Ok(parse_time(&response.body)?)
    }

    /// Returns the store information.
    ///
    /// # Errors
    ///
    /// See [`call`](Self::call).
    pub async fn get_store(&self) -> Result<Resource, ResourceError> {
        self.get_resource(&endpoints::STORE, &PathParams::new()).await
    }

    /// Returns the number of API requests left in the current rate limit
    /// window, or `None` if the store does not report it.
    ///
    /// Pings the time endpoint and reads its rate limit headers.
    ///
    /// # Errors
    ///
    /// See [`call`](Self::call).
    pub async fn requests_remaining(&self) -> Result<Option<u32>, ResourceError> {
        let response = self.exchange(&endpoints::TIME, &PathParams::new()).await?;
        Ok(response.requests_remaining())
    }

    /// Fetches a cart, or `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// See [`call`](Self::call). A 404 is not an error.
    pub async fn get_cart(&self, cart_id: &str) -> Result<Option<Resource>, ResourceError> {
        match self.get_resource(&endpoints::CART, &PathParams::id(cart_id)).await {
            Ok(cart) => Ok(Some(cart)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }
}

fn endpoint_url<S: Shape>(
    base_path: &str,
    endpoint: &Endpoint<S>,
    params: &PathParams,
    filter: Option<&Filter>,
) -> Result<String, ResourceError> {
    let path = build_path(endpoint.template(), params)?;
    let query = filter.map(Filter::to_query).unwrap_or_default();
    Ok(format!("{base_path}{path}{query}"))
}

/// Reads a Unix timestamp sent either bare or as `{"time": n}`.
fn parse_time(body: &Value) -> Result<DateTime<Utc>, MappingError> {
    let seconds = body
        .as_i64()
        .or_else(|| body.get("time").and_then(Value::as_i64));

    seconds
        .and_then(|s| DateTime::from_timestamp(s, 0))
        .ok_or_else(|| MappingError::InvalidTimestamp {
            found: body.to_string(),
        })
}
