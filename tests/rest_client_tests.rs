//! Integration tests for the REST client against a mock BigCommerce API.
//!
//! These tests verify the complete pipeline: configuration, authentication
//! headers, URL composition, response classification and resource mapping.

use bigcommerce_api::clients::RestClient;
use bigcommerce_api::rest::resources::{Customer, Product};
use bigcommerce_api::rest::{
    endpoints, Empty, Endpoint, Filter, MappingError, PathParams, Resource, ResourceKind,
};
use bigcommerce_api::{
    ApiKey, AuthToken, BigCommerceConfig, ClientId, ConfigError, ConnectionMode, HttpError,
    ResourceError, StoreHash, StoreUrl, Username,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const STORE: &str = "/stores/abc123";

/// Creates an OAuth configuration pointing at the mock server.
fn oauth_config(server: &MockServer) -> BigCommerceConfig {
    BigCommerceConfig::builder()
        .client_id(ClientId::new("client-id").unwrap())
        .auth_token(AuthToken::new("token").unwrap())
        .store_hash(StoreHash::new("abc123").unwrap())
        .api_url(StoreUrl::new(server.uri()).unwrap())
        .build()
        .unwrap()
}

/// Creates a Basic auth configuration whose store is the mock server.
fn basic_config(server: &MockServer) -> BigCommerceConfig {
    BigCommerceConfig::builder()
        .connection_mode(ConnectionMode::BasicAuth)
        .store_url(StoreUrl::new(server.uri()).unwrap())
        .username(Username::new("user").unwrap())
        .api_key(ApiKey::new("key").unwrap())
        .build()
        .unwrap()
}

// ============================================================================
// Reads
// ============================================================================

#[tokio::test]
async fn test_get_products_sends_oauth_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{STORE}/v3/catalog/products")))
        .and(header("X-Auth-Client", "client-id"))
        .and(header("X-Auth-Token", "token"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"id": 1, "name": "Orbit Terrarium", "price": 109.0},
                {"id": 2, "name": "Able Brewing System", "price": 225.0}
            ],
            "meta": {"pagination": {"total": 2, "links": {"current": "?page=1&limit=50"}}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::new(oauth_config(&server));
    let products = client
        .get_collection(&endpoints::PRODUCTS, &PathParams::new(), None)
        .await
        .unwrap();

    assert_eq!(products.len(), 2);
    assert!(products.iter().all(|p| p.kind() == ResourceKind::Product));
    assert_eq!(products[1].get("name"), Some(&json!("Able Brewing System")));
}

#[tokio::test]
async fn test_filter_is_sent_as_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{STORE}/v3/catalog/products")))
        .and(query_param("is_visible", "true"))
        .and(query_param("keyword", "blue shirt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::new(oauth_config(&server));
    let filter = Filter::new()
        .with("is_visible", true)
        .with("keyword", "blue shirt");
    let products = client
        .get_collection(&endpoints::PRODUCTS, &PathParams::new(), Some(&filter))
        .await
        .unwrap();

    assert!(products.is_empty());
}

#[tokio::test]
async fn test_typed_collection() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{STORE}/v3/catalog/products")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 1, "name": "Hat", "type": "physical"}]
        })))
        .mount(&server)
        .await;

    let client = RestClient::new(oauth_config(&server));
    let products: Vec<Product> = client
        .get_typed_collection(&endpoints::PRODUCTS, &PathParams::new(), None)
        .await
        .unwrap();

    assert_eq!(products[0].id, Some(1));
    assert_eq!(products[0].name.as_deref(), Some("Hat"));
}

#[tokio::test]
async fn test_legacy_collection_with_basic_auth() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/orders"))
        .and(header("Authorization", "Basic dXNlcjprZXk="))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 100, "status": "Pending"},
            {"id": 101, "status": "Shipped"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::new(basic_config(&server));
    let orders = client
        .get_collection(&endpoints::ORDERS, &PathParams::new(), None)
        .await
        .unwrap();

    let ids: Vec<_> = orders.iter().filter_map(Resource::id).collect();
    assert_eq!(ids, vec![100, 101]);
    assert_eq!(orders[0].kind(), ResourceKind::Order);
}

#[tokio::test]
async fn test_legacy_empty_collection_is_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{STORE}/v2/coupons")))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = RestClient::new(oauth_config(&server));
    let coupons = client
        .get_collection(&endpoints::COUPONS, &PathParams::new(), None)
        .await
        .unwrap();

    assert!(coupons.is_empty());
}

#[tokio::test]
async fn test_get_count() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{STORE}/v2/orders/count")))
        .and(query_param("status_id", "11"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 27})))
        .mount(&server)
        .await;

    let client = RestClient::new(oauth_config(&server));
    let filter = Filter::new().with("status_id", 11);
    let count = client
        .get_count(&endpoints::ORDERS_COUNT, &PathParams::new(), Some(&filter))
        .await
        .unwrap();

    assert_eq!(count, 27);
}

#[tokio::test]
async fn test_nested_resource_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{STORE}/v3/catalog/products/77/variants/382")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": 382, "product_id": 77, "sku": "SMIT-1"},
            "meta": {}
        })))
        .mount(&server)
        .await;

    let client = RestClient::new(oauth_config(&server));
    let params = PathParams::new().with("product_id", 77).with("id", 382);
    let variant = client
        .get_resource(&endpoints::PRODUCT_VARIANT, &params)
        .await
        .unwrap();

    assert_eq!(variant.kind(), ResourceKind::ProductVariant);
    assert_eq!(variant.id(), Some(382));
}

#[tokio::test]
async fn test_missing_path_parameter_sends_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = RestClient::new(oauth_config(&server));
    let result = client
        .get_resource(&endpoints::PRODUCT_VARIANT, &PathParams::id(382))
        .await;

    match result {
        Err(ResourceError::MissingPathParameter { name, .. }) => assert_eq!(name, "product_id"),
        other => panic!("expected MissingPathParameter, got {other:?}"),
    }
}

// ============================================================================
// Writes
// ============================================================================

#[tokio::test]
async fn test_create_returns_created_resource() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("{STORE}/v3/catalog/brands")))
        .and(body_json(json!({"name": "Common Good"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": {"id": 5, "name": "Common Good"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::new(oauth_config(&server));
    let mut brand = Resource::empty(ResourceKind::Brand);
    brand.set("name", "Common Good");

    let created = client
        .create(&endpoints::CREATE_BRAND, &PathParams::new(), &brand)
        .await
        .unwrap();

    assert_eq!(created.id(), Some(5));
    assert_eq!(created.kind(), ResourceKind::Brand);
}

#[tokio::test]
async fn test_create_strips_ignored_fields() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("{STORE}/v2/customer_groups")))
        .and(body_json(json!({"name": "VIP", "is_default": false})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 9, "name": "VIP", "is_default": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::new(oauth_config(&server));
    let group = Resource::from_value(
        ResourceKind::CustomerGroup,
        json!({"id": 1, "name": "VIP", "is_default": false}),
    )
    .unwrap();

    let created = client
        .create(&endpoints::CREATE_CUSTOMER_GROUP, &PathParams::new(), &group)
        .await
        .unwrap();
    assert_eq!(created.id(), Some(9));
}

#[tokio::test]
async fn test_update_strips_ignored_fields() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(format!("{STORE}/v3/catalog/products/3/variants/7")))
        .and(body_json(json!({"sku": "SKU-7", "price": 12.5})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": 7, "product_id": 3, "sku": "SKU-7", "price": 12.5}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::new(oauth_config(&server));
    let mut variant = Resource::from_value(
        ResourceKind::ProductVariant,
        json!({"id": 7, "product_id": 3, "sku": "SKU-7", "price": 10.0}),
    )
    .unwrap();
    variant.set("price", 12.5);

    let params = PathParams::new().with("product_id", 3).with("id", 7);
    let updated = client
        .update(&endpoints::UPDATE_PRODUCT_VARIANT, &params, &variant)
        .await
        .unwrap();

    assert_eq!(updated.get("price"), Some(&json!(12.5)));
}

#[tokio::test]
async fn test_batch_create_customers() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("{STORE}/v3/customers")))
        .and(body_json(json!([{"email": "jane@example.com", "first_name": "Jane"}])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 41, "email": "jane@example.com", "first_name": "Jane"}],
            "meta": {}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::new(oauth_config(&server));
    let created = client
        .update_raw(
            &endpoints::CREATE_CUSTOMERS,
            &PathParams::new(),
            json!([{"email": "jane@example.com", "first_name": "Jane"}]),
        )
        .await
        .unwrap();

    assert_eq!(created.len(), 1);
    let customer: Customer = created[0].clone().into_typed().unwrap();
    assert_eq!(customer.id, Some(41));
}

#[tokio::test]
async fn test_delete_uses_endpoint_version() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(format!("{STORE}/v2/orders/100")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::new(oauth_config(&server));
    client
        .delete(&endpoints::DELETE_ORDER, &PathParams::id(100), None)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_head_endpoint_with_empty_body() {
    let server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .and(path(format!("{STORE}/v3/catalog/products/77")))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let exists: Endpoint<Empty> = Endpoint::head("/catalog/products/{id}", ResourceKind::Product);
    let client = RestClient::new(oauth_config(&server));
    client
        .call(&exists, &PathParams::id(77), None, None)
        .await
        .unwrap();
}

// ============================================================================
// Relationship and bulk operations
// ============================================================================

#[tokio::test]
async fn test_assign_product_to_channel() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(format!("{STORE}/v3/catalog/products/channel-assignments")))
        .and(body_json(json!([{"product_id": 77, "channel_id": 1}])))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::new(oauth_config(&server));
    client.assign_product_to_channel(77, 1).await.unwrap();
}

#[tokio::test]
async fn test_assign_layout_to_product() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(format!("{STORE}/v3/storefront/custom-template-associations")))
        .and(body_json(json!([{
            "entity_type": "product",
            "entity_id": 77,
            "channel_id": 1,
            "file_name": "custom-product.html"
        }])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::new(oauth_config(&server));
    client
        .assign_layout_to_product(77, 1, "custom-product.html")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_upsert_pricelist_to_customer_group() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(format!("{STORE}/v3/pricelists/2/assignments")))
        .and(body_json(json!({"customer_group_id": 5, "channel_id": 1})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::new(oauth_config(&server));
    client
        .upsert_pricelist_to_customer_group(2, 5, 1)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_upsert_pricelist_records_and_attribute_value() {
    let server = MockServer::start().await;
    let records = json!([{"variant_id": 331, "currency": "usd", "price": 19.99}]);

    Mock::given(method("PUT"))
        .and(path(format!("{STORE}/v3/pricelists/2/records")))
        .and(body_json(records.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path(format!("{STORE}/v3/customers/attribute-values")))
        .and(body_json(json!([{"customer_id": 41, "attribute_id": 3, "value": "42"}])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::new(oauth_config(&server));
    client.upsert_pricelist_records(2, records).await.unwrap();
    client
        .upsert_customer_attribute_value(41, 3, "42")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_bulk_update_products() {
    let server = MockServer::start().await;
    let products = json!([{"id": 1, "price": 10.0}, {"id": 2, "price": 12.0}]);

    Mock::given(method("PUT"))
        .and(path(format!("{STORE}/v3/catalog/products")))
        .and(body_json(products.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::new(oauth_config(&server));
    client.bulk_update_products(products).await.unwrap();
}

// ============================================================================
// Customers, time, store and carts
// ============================================================================

#[tokio::test]
async fn test_get_customer_by_id_filter() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{STORE}/v3/customers")))
        .and(query_param("id:in", "41"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 41, "email": "jane@example.com"}]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("{STORE}/v3/customers")))
        .and(query_param("id:in", "42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&server)
        .await;

    let client = RestClient::new(oauth_config(&server));

    let customer = client.get_customer(41).await.unwrap().unwrap();
    assert_eq!(customer.kind(), ResourceKind::Customer);
    assert_eq!(customer.get("email"), Some(&json!("jane@example.com")));

    assert!(client.get_customer(42).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_customers_sends_id_list() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(format!("{STORE}/v3/customers")))
        .and(query_param("id:in", "1,2,3"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::new(oauth_config(&server));
    client.delete_customers(&[1, 2, 3]).await.unwrap();
}

#[tokio::test]
async fn test_get_time_and_requests_remaining() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{STORE}/v2/time")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"time": 1_700_000_000}))
                .insert_header("X-Rate-Limit-Requests-Left", "149")
                .insert_header("X-Rate-Limit-Requests-Quota", "150"),
        )
        .expect(2)
        .mount(&server)
        .await;

    let client = RestClient::new(oauth_config(&server));

    let time = client.get_time().await.unwrap();
    assert_eq!(time.timestamp(), 1_700_000_000);

    assert_eq!(client.requests_remaining().await.unwrap(), Some(149));
}

#[tokio::test]
async fn test_get_store() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/store"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "abc123",
            "domain": "store.example.com"
        })))
        .mount(&server)
        .await;

    let client = RestClient::new(basic_config(&server));
    let store = client.get_store().await.unwrap();

    assert_eq!(store.kind(), ResourceKind::Generic);
    assert_eq!(store.get("domain"), Some(&json!("store.example.com")));
}

#[tokio::test]
async fn test_get_cart_missing_is_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{STORE}/v3/carts/missing-cart")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status": 404,
            "title": "Cart not found"
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("{STORE}/v3/carts/live-cart")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": "live-cart", "cart_amount": 12.0}
        })))
        .mount(&server)
        .await;

    let client = RestClient::new(oauth_config(&server));

    assert!(client.get_cart("missing-cart").await.unwrap().is_none());
    let cart = client.get_cart("live-cart").await.unwrap().unwrap();
    assert_eq!(cart.get("cart_amount"), Some(&json!(12.0)));
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_not_found_is_client_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{STORE}/v3/catalog/products/999")))
        .respond_with(ResponseTemplate::new(404).set_body_string("{\"title\":\"not found\"}"))
        .mount(&server)
        .await;

    let client = RestClient::new(oauth_config(&server));
    let error = client
        .get_resource(&endpoints::PRODUCT, &PathParams::id(999))
        .await
        .unwrap_err();

    assert!(error.is_not_found());
    match error {
        ResourceError::Http(HttpError::Client(e)) => {
            assert_eq!(e.code, 404);
            assert!(e.message.contains("not found"));
        }
        other => panic!("expected client error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unavailable_is_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{STORE}/v2/orders")))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&server)
        .await;

    let client = RestClient::new(oauth_config(&server));
    let error = client
        .get_collection(&endpoints::ORDERS, &PathParams::new(), None)
        .await
        .unwrap_err();

    assert_eq!(error.status(), Some(503));
    assert!(matches!(error, ResourceError::Http(HttpError::Server(_))));
    assert_eq!(
        error.to_string(),
        "BigCommerce Server Exception: Service Unavailable"
    );
}

#[tokio::test]
async fn test_unexpected_shape_is_mapping_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{STORE}/v3/catalog/products/1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [{"id": 1}]})))
        .mount(&server)
        .await;

    let client = RestClient::new(oauth_config(&server));
    let result = client
        .get_resource(&endpoints::PRODUCT, &PathParams::id(1))
        .await;

    assert!(matches!(
        result,
        Err(ResourceError::Mapping(MappingError::NotAnObject { .. }))
    ));
}

#[tokio::test]
async fn test_malformed_body_is_invalid_json() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{STORE}/v2/store")))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = RestClient::new(oauth_config(&server));
    let result = client.get_store().await;

    assert!(matches!(
        result,
        Err(ResourceError::Http(HttpError::InvalidJson { code: 200, .. }))
    ));
}

#[tokio::test]
async fn test_unconfigured_client() {
    let client = RestClient::default();
    let result = client.get_time().await;

    assert!(matches!(
        result,
        Err(ResourceError::Config(ConfigError::NotConfigured))
    ));
}

#[tokio::test]
async fn test_reconfigure_switches_store() {
    let first = MockServer::start().await;
    let second = MockServer::start().await;

    for (server, count) in [(&first, 1), (&second, 2)] {
        Mock::given(method("GET"))
            .and(path(format!("{STORE}/v2/orders/count")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": count})))
            .expect(1)
            .mount(server)
            .await;
    }

    let client = RestClient::new(oauth_config(&first));
    let count = client
        .get_count(&endpoints::ORDERS_COUNT, &PathParams::new(), None)
        .await
        .unwrap();
    assert_eq!(count, 1);

    client.configure(oauth_config(&second));
    let count = client
        .get_count(&endpoints::ORDERS_COUNT, &PathParams::new(), None)
        .await
        .unwrap();
    assert_eq!(count, 2);
}
