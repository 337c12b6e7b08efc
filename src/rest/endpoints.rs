//! The endpoint table.
//!
//! Each constant describes one BigCommerce operation. Collections are
//! [`Many`], single resources [`One`], counts [`Count`] and operations whose
//! response is not mapped [`Empty`]. Endpoints that only exist on the v2 API
//! are marked `.legacy()`.
//!
//! Pass these to the [`RestClient`](crate::clients::RestClient) primitives:
//!
//! ```rust,ignore
//! use bigcommerce_api::rest::{endpoints, Filter, PathParams};
//!
//! let visible = client
//!     .get_collection(&endpoints::PRODUCTS, &PathParams::new(), Some(&Filter::new().with("is_visible", true)))
//!     .await?;
//! let order = client.get_resource(&endpoints::ORDER, &PathParams::id(100)).await?;
//! ```

use crate::rest::endpoint::{Count, Empty, Endpoint, Many, One};
use crate::rest::ResourceKind as K;

// Catalog: products

/// Lists products: `GET /catalog/products`.
pub const PRODUCTS: Endpoint<Many> = Endpoint::get("/catalog/products", K::Product);
/// Fetches one product: `GET /catalog/products/{id}`.
pub const PRODUCT: Endpoint<One> = Endpoint::get("/catalog/products/{id}", K::Product);
/// Counts products: `GET /products/count` (v2).
pub const PRODUCTS_COUNT: Endpoint<Count> = Endpoint::get("/products/count", K::Product).legacy();
/// Creates a product: `POST /catalog/products`.
pub const CREATE_PRODUCT: Endpoint<One> = Endpoint::post("/catalog/products", K::Product);
/// Updates a product: `PUT /catalog/products/{id}`.
pub const UPDATE_PRODUCT: Endpoint<One> = Endpoint::put("/catalog/products/{id}", K::Product);
/// Deletes a product: `DELETE /catalog/products/{id}`.
pub const DELETE_PRODUCT: Endpoint<Empty> = Endpoint::delete("/catalog/products/{id}", K::Product);
/// Deletes all products: `DELETE /catalog/products`.
pub const DELETE_ALL_PRODUCTS: Endpoint<Empty> = Endpoint::delete("/catalog/products", K::Product);
/// Batch update; the body is an array of partial products with `id`.
pub const BULK_UPDATE_PRODUCTS: Endpoint<Empty> = Endpoint::put("/catalog/products", K::Product);
/// Updates product channel assignments: `PUT /catalog/products/channel-assignments`.
pub const PRODUCT_CHANNEL_ASSIGNMENTS: Endpoint<Empty> =
    Endpoint::put("/catalog/products/channel-assignments", K::Generic);
/// Updates custom template associations: `PUT /storefront/custom-template-associations`.
pub const CUSTOM_TEMPLATE_ASSOCIATIONS: Endpoint<Empty> =
    Endpoint::put("/storefront/custom-template-associations", K::Generic);

/// Lists product variants: `GET /catalog/products/{product_id}/variants`.
pub const PRODUCT_VARIANTS: Endpoint<Many> =
    Endpoint::get("/catalog/products/{product_id}/variants", K::ProductVariant);
/// Fetches one product variant: `GET /catalog/products/{product_id}/variants/{id}`.
pub const PRODUCT_VARIANT: Endpoint<One> =
    Endpoint::get("/catalog/products/{product_id}/variants/{id}", K::ProductVariant);
/// Creates a product variant: `POST /catalog/products/{product_id}/variants`.
pub const CREATE_PRODUCT_VARIANT: Endpoint<One> =
    Endpoint::post("/catalog/products/{product_id}/variants", K::ProductVariant);
/// Updates a product variant: `PUT /catalog/products/{product_id}/variants/{id}`.
pub const UPDATE_PRODUCT_VARIANT: Endpoint<One> =
    Endpoint::put("/catalog/products/{product_id}/variants/{id}", K::ProductVariant);
/// Deletes a product variant: `DELETE /catalog/products/{product_id}/variants/{id}`.
pub const DELETE_PRODUCT_VARIANT: Endpoint<Empty> =
    Endpoint::delete("/catalog/products/{product_id}/variants/{id}", K::ProductVariant);

/// Lists product images: `GET /catalog/products/{product_id}/images`.
pub const PRODUCT_IMAGES: Endpoint<Many> =
    Endpoint::get("/catalog/products/{product_id}/images", K::ProductImage);
/// Fetches one product image: `GET /catalog/products/{product_id}/images/{id}`.
pub const PRODUCT_IMAGE: Endpoint<One> =
    Endpoint::get("/catalog/products/{product_id}/images/{id}", K::ProductImage);
/// Creates a product image: `POST /catalog/products/{product_id}/images`.
pub const CREATE_PRODUCT_IMAGE: Endpoint<One> =
    Endpoint::post("/catalog/products/{product_id}/images", K::ProductImage);
/// Updates a product image: `PUT /catalog/products/{product_id}/images/{id}`.
pub const UPDATE_PRODUCT_IMAGE: Endpoint<One> =
    Endpoint::put("/catalog/products/{product_id}/images/{id}", K::ProductImage);
/// Deletes a product image: `DELETE /catalog/products/{product_id}/images/{id}`.
pub const DELETE_PRODUCT_IMAGE: Endpoint<Empty> =
    Endpoint::delete("/catalog/products/{product_id}/images/{id}", K::ProductImage);

/// Lists product custom fields: `GET /catalog/products/{product_id}/custom-fields`.
pub const PRODUCT_CUSTOM_FIELDS: Endpoint<Many> =
    Endpoint::get("/catalog/products/{product_id}/custom-fields", K::ProductCustomField);
/// Fetches one product custom field: `GET /catalog/products/{product_id}/custom-fields/{id}`.
pub const PRODUCT_CUSTOM_FIELD: Endpoint<One> =
    Endpoint::get("/catalog/products/{product_id}/custom-fields/{id}", K::ProductCustomField);
/// Creates a product custom field: `POST /catalog/products/{product_id}/custom-fields`.
pub const CREATE_PRODUCT_CUSTOM_FIELD: Endpoint<One> =
    Endpoint::post("/catalog/products/{product_id}/custom-fields", K::ProductCustomField);
/// Updates a product custom field: `PUT /catalog/products/{product_id}/custom-fields/{id}`.
pub const UPDATE_PRODUCT_CUSTOM_FIELD: Endpoint<One> =
    Endpoint::put("/catalog/products/{product_id}/custom-fields/{id}", K::ProductCustomField);
/// Deletes a product custom field: `DELETE /catalog/products/{product_id}/custom-fields/{id}`.
pub const DELETE_PRODUCT_CUSTOM_FIELD: Endpoint<Empty> =
    Endpoint::delete("/catalog/products/{product_id}/custom-fields/{id}", K::ProductCustomField);

/// Lists product options: `GET /catalog/products/{product_id}/options`.
pub const PRODUCT_OPTIONS: Endpoint<Many> =
    Endpoint::get("/catalog/products/{product_id}/options", K::ProductOption);
/// Fetches one product option: `GET /catalog/products/{product_id}/options/{id}`.
pub const PRODUCT_OPTION: Endpoint<One> =
    Endpoint::get("/catalog/products/{product_id}/options/{id}", K::ProductOption);
/// Creates a product option: `POST /catalog/products/{product_id}/options`.
pub const CREATE_PRODUCT_OPTION: Endpoint<One> =
    Endpoint::post("/catalog/products/{product_id}/options", K::ProductOption);
/// Updates a product option: `PUT /catalog/products/{product_id}/options/{id}`.
pub const UPDATE_PRODUCT_OPTION: Endpoint<One> =
    Endpoint::put("/catalog/products/{product_id}/options/{id}", K::ProductOption);
/// Creates a product option value: `POST /catalog/products/{product_id}/options/{option_id}/values`.
pub const CREATE_PRODUCT_OPTION_VALUE: Endpoint<One> = Endpoint::post(
    "/catalog/products/{product_id}/options/{option_id}/values",
    K::OptionValue,
);
/// Updates a product option value: `PUT /catalog/products/{product_id}/options/{option_id}/values/{id}`.
pub const UPDATE_PRODUCT_OPTION_VALUE: Endpoint<One> = Endpoint::put(
    "/catalog/products/{product_id}/options/{option_id}/values/{id}",
    K::OptionValue,
);

/// Lists product reviews: `GET /products/{product_id}/reviews` (v2).
pub const PRODUCT_REVIEWS: Endpoint<Many> =
    Endpoint::get("/products/{product_id}/reviews", K::ProductReview).legacy();
/// Creates a product review: `POST /products/{product_id}/reviews` (v2).
pub const CREATE_PRODUCT_REVIEW: Endpoint<One> =
    Endpoint::post("/products/{product_id}/reviews", K::ProductReview).legacy();
/// Creates a bulk pricing rule: `POST /products/{product_id}/discount_rules` (v2).
pub const CREATE_PRODUCT_BULK_PRICING_RULE: Endpoint<One> =
    Endpoint::post("/products/{product_id}/discount_rules", K::Generic).legacy();
/// Fetches the Google Shopping settings of a product: `GET /products/{product_id}/googleproductsearch` (v2).
pub const PRODUCT_GOOGLE_SEARCH: Endpoint<One> =
    Endpoint::get("/products/{product_id}/googleproductsearch", K::Generic).legacy();

/// Lists product rules: `GET /products/{product_id}/rules` (v2).
pub const PRODUCT_RULES: Endpoint<Many> =
    Endpoint::get("/products/{product_id}/rules", K::Rule).legacy();
/// Fetches one product rule: `GET /products/{product_id}/rules/{id}` (v2).
pub const PRODUCT_RULE: Endpoint<One> =
    Endpoint::get("/products/{product_id}/rules/{id}", K::Rule).legacy();
/// Creates a product rule: `POST /products/{product_id}/rules` (v2).
pub const CREATE_PRODUCT_RULE: Endpoint<One> =
    Endpoint::post("/products/{product_id}/rules", K::Rule).legacy();

/// Lists SKUs: `GET /products/skus` (v2).
pub const SKUS: Endpoint<Many> = Endpoint::get("/products/skus", K::Sku).legacy();
/// Counts SKUs: `GET /products/skus/count` (v2).
pub const SKUS_COUNT: Endpoint<Count> = Endpoint::get("/products/skus/count", K::Sku).legacy();
/// Lists a product's SKUs: `GET /products/{product_id}/skus` (v2).
pub const PRODUCT_SKUS: Endpoint<Many> =
    Endpoint::get("/products/{product_id}/skus", K::Sku).legacy();
/// Creates a SKU: `POST /products/{product_id}/skus` (v2).
pub const CREATE_SKU: Endpoint<One> =
    Endpoint::post("/products/{product_id}/skus", K::Sku).legacy();
/// Updates a SKU: `PUT /products/skus/{id}` (v2).
pub const UPDATE_SKU: Endpoint<One> = Endpoint::put("/products/skus/{id}", K::Sku).legacy();

// Catalog: categories and brands

/// Lists categories: `GET /catalog/categories`.
pub const CATEGORIES: Endpoint<Many> = Endpoint::get("/catalog/categories", K::Category);
/// Fetches one category: `GET /catalog/categories/{id}`.
pub const CATEGORY: Endpoint<One> = Endpoint::get("/catalog/categories/{id}", K::Category);
/// Counts categories: `GET /categories/count` (v2).
pub const CATEGORIES_COUNT: Endpoint<Count> =
    Endpoint::get("/categories/count", K::Category).legacy();
/// Creates a category: `POST /catalog/categories`.
pub const CREATE_CATEGORY: Endpoint<One> = Endpoint::post("/catalog/categories", K::Category);
/// Updates a category: `PUT /catalog/categories/{id}`.
pub const UPDATE_CATEGORY: Endpoint<One> = Endpoint::put("/catalog/categories/{id}", K::Category);
/// Deletes a category: `DELETE /catalog/categories/{id}`.
pub const DELETE_CATEGORY: Endpoint<Empty> =
    Endpoint::delete("/catalog/categories/{id}", K::Category);
/// Deletes all categories: `DELETE /catalog/categories`.
pub const DELETE_ALL_CATEGORIES: Endpoint<Empty> =
    Endpoint::delete("/catalog/categories", K::Category);

/// Lists brands: `GET /catalog/brands`.
pub const BRANDS: Endpoint<Many> = Endpoint::get("/catalog/brands", K::Brand);
/// Fetches one brand: `GET /catalog/brands/{id}`.
pub const BRAND: Endpoint<One> = Endpoint::get("/catalog/brands/{id}", K::Brand);
/// Counts brands: `GET /brands/count` (v2).
pub const BRANDS_COUNT: Endpoint<Count> = Endpoint::get("/brands/count", K::Brand).legacy();
/// Creates a brand: `POST /catalog/brands`.
pub const CREATE_BRAND: Endpoint<One> = Endpoint::post("/catalog/brands", K::Brand);
/// Updates a brand: `PUT /catalog/brands/{id}`.
pub const UPDATE_BRAND: Endpoint<One> = Endpoint::put("/catalog/brands/{id}", K::Brand);
/// Deletes a brand: `DELETE /catalog/brands/{id}`.
pub const DELETE_BRAND: Endpoint<Empty> = Endpoint::delete("/catalog/brands/{id}", K::Brand);
/// Deletes all brands: `DELETE /catalog/brands`.
pub const DELETE_ALL_BRANDS: Endpoint<Empty> = Endpoint::delete("/catalog/brands", K::Brand);

// Options and option sets (v2)

/// Lists options: `GET /options` (v2).
pub const OPTIONS: Endpoint<Many> = Endpoint::get("/options", K::Option).legacy();
/// Fetches one option: `GET /options/{id}` (v2).
pub const OPTION: Endpoint<One> = Endpoint::get("/options/{id}", K::Option).legacy();
/// Counts options: `GET /options/count` (v2).
pub const OPTIONS_COUNT: Endpoint<Count> = Endpoint::get("/options/count", K::Option).legacy();
/// Creates an option: `POST /options` (v2).
pub const CREATE_OPTION: Endpoint<One> = Endpoint::post("/options", K::Option).legacy();
/// Updates an option: `PUT /options/{id}` (v2).
pub const UPDATE_OPTION: Endpoint<One> = Endpoint::put("/options/{id}", K::Option).legacy();
/// Deletes an option: `DELETE /options/{id}` (v2).
pub const DELETE_OPTION: Endpoint<Empty> = Endpoint::delete("/options/{id}", K::Option).legacy();
/// Deletes all options: `DELETE /options` (v2).
pub const DELETE_ALL_OPTIONS: Endpoint<Empty> = Endpoint::delete("/options", K::Option).legacy();

/// Lists option values: `GET /options/values` (v2).
pub const OPTION_VALUES: Endpoint<Many> =
    Endpoint::get("/options/values", K::OptionValue).legacy();
/// Lists option values by option: `GET /options/{option_id}/values` (v2).
pub const OPTION_VALUES_BY_OPTION: Endpoint<Many> =
    Endpoint::get("/options/{option_id}/values", K::OptionValue).legacy();
/// Fetches one option value: `GET /options/{option_id}/values/{id}` (v2).
pub const OPTION_VALUE: Endpoint<One> =
    Endpoint::get("/options/{option_id}/values/{id}", K::OptionValue).legacy();
/// Creates an option value: `POST /options/{option_id}/values` (v2).
pub const CREATE_OPTION_VALUE: Endpoint<One> =
    Endpoint::post("/options/{option_id}/values", K::OptionValue).legacy();
/// Updates an option value: `PUT /options/{option_id}/values/{id}` (v2).
pub const UPDATE_OPTION_VALUE: Endpoint<One> =
    Endpoint::put("/options/{option_id}/values/{id}", K::OptionValue).legacy();
/// Deletes an option value: `DELETE /options/{option_id}/values/{id}` (v2).
pub const DELETE_OPTION_VALUE: Endpoint<Empty> =
    Endpoint::delete("/options/{option_id}/values/{id}", K::OptionValue).legacy();

/// Lists option sets: `GET /optionsets` (v2).
pub const OPTION_SETS: Endpoint<Many> = Endpoint::get("/optionsets", K::OptionSet).legacy();
/// Fetches one option set: `GET /optionsets/{id}` (v2).
pub const OPTION_SET: Endpoint<One> = Endpoint::get("/optionsets/{id}", K::OptionSet).legacy();
/// Counts option sets: `GET /optionsets/count` (v2).
pub const OPTION_SETS_COUNT: Endpoint<Count> =
    Endpoint::get("/optionsets/count", K::OptionSet).legacy();
/// Creates an option set: `POST /optionsets` (v2).
pub const CREATE_OPTION_SET: Endpoint<One> =
    Endpoint::post("/optionsets", K::OptionSet).legacy();
/// Creates an option set option: `POST /optionsets/{id}/options` (v2).
pub const CREATE_OPTION_SET_OPTION: Endpoint<One> =
    Endpoint::post("/optionsets/{id}/options", K::Generic).legacy();
/// Updates an option set: `PUT /optionsets/{id}` (v2).
pub const UPDATE_OPTION_SET: Endpoint<One> =
    Endpoint::put("/optionsets/{id}", K::OptionSet).legacy();
/// Deletes an option set: `DELETE /optionsets/{id}` (v2).
pub const DELETE_OPTION_SET: Endpoint<Empty> =
    Endpoint::delete("/optionsets/{id}", K::OptionSet).legacy();
/// Deletes all option sets: `DELETE /optionsets` (v2).
pub const DELETE_ALL_OPTION_SETS: Endpoint<Empty> =
    Endpoint::delete("/optionsets", K::OptionSet).legacy();

// Customers

/// Customer collection. Single customers are fetched with an `id:in` filter.
pub const CUSTOMERS: Endpoint<Many> = Endpoint::get("/customers", K::Customer);
/// Counts customers: `GET /customers/count` (v2).
pub const CUSTOMERS_COUNT: Endpoint<Count> =
    Endpoint::get("/customers/count", K::Customer).legacy();
/// Batch create; the body is an array of customers.
pub const CREATE_CUSTOMERS: Endpoint<Many> = Endpoint::post("/customers", K::Customer);
/// Batch update; the body is an array of partial customers with `id`.
pub const UPDATE_CUSTOMERS: Endpoint<Many> = Endpoint::put("/customers", K::Customer);
/// Batch delete; pass the ids as an `id:in` filter.
pub const DELETE_CUSTOMERS: Endpoint<Empty> = Endpoint::delete("/customers", K::Customer);
/// Lists customer addresses: `GET /customers/{customer_id}/addresses` (v2).
pub const CUSTOMER_ADDRESSES: Endpoint<Many> =
    Endpoint::get("/customers/{customer_id}/addresses", K::Address).legacy();
/// Creates customer address: `POST /customers/{customer_id}/addresses` (v2).
pub const CREATE_CUSTOMER_ADDRESS: Endpoint<One> =
    Endpoint::post("/customers/{customer_id}/addresses", K::Address).legacy();

/// Lists customer attributes: `GET /customers/attributes`.
pub const CUSTOMER_ATTRIBUTES: Endpoint<Many> =
    Endpoint::get("/customers/attributes", K::CustomerAttribute);
/// Batch create; the body is an array of attributes.
pub const CREATE_CUSTOMER_ATTRIBUTES: Endpoint<Many> =
    Endpoint::post("/customers/attributes", K::CustomerAttribute);
/// Updates customer attribute values: `PUT /customers/attribute-values`.
pub const CUSTOMER_ATTRIBUTE_VALUES: Endpoint<Empty> =
    Endpoint::put("/customers/attribute-values", K::Generic);

/// Lists customer groups: `GET /customer_groups` (v2).
pub const CUSTOMER_GROUPS: Endpoint<Many> =
    Endpoint::get("/customer_groups", K::CustomerGroup).legacy();
/// Fetches one customer group: `GET /customer_groups/{id}` (v2).
pub const CUSTOMER_GROUP: Endpoint<One> =
    Endpoint::get("/customer_groups/{id}", K::CustomerGroup).legacy();
/// Creates a customer group: `POST /customer_groups` (v2).
pub const CREATE_CUSTOMER_GROUP: Endpoint<One> =
    Endpoint::post("/customer_groups", K::CustomerGroup).legacy();
/// Updates a customer group: `PUT /customer_groups/{id}` (v2).
pub const UPDATE_CUSTOMER_GROUP: Endpoint<One> =
    Endpoint::put("/customer_groups/{id}", K::CustomerGroup).legacy();
/// Deletes a customer group: `DELETE /customer_groups/{id}` (v2).
pub const DELETE_CUSTOMER_GROUP: Endpoint<Empty> =
    Endpoint::delete("/customer_groups/{id}", K::CustomerGroup).legacy();

// Orders (v2)

/// Lists orders: `GET /orders` (v2).
pub const ORDERS: Endpoint<Many> = Endpoint::get("/orders", K::Order).legacy();
/// Fetches one order: `GET /orders/{id}` (v2).
pub const ORDER: Endpoint<One> = Endpoint::get("/orders/{id}", K::Order).legacy();
/// Counts orders: `GET /orders/count` (v2).
pub const ORDERS_COUNT: Endpoint<Count> = Endpoint::get("/orders/count", K::Order).legacy();
/// The count body broken down by status.
pub const ORDER_STATUS_COUNTS: Endpoint<One> =
    Endpoint::get("/orders/count", K::OrderStatus).legacy();
/// Creates an order: `POST /orders` (v2).
pub const CREATE_ORDER: Endpoint<One> = Endpoint::post("/orders", K::Order).legacy();
/// Updates an order: `PUT /orders/{id}` (v2).
pub const UPDATE_ORDER: Endpoint<One> = Endpoint::put("/orders/{id}", K::Order).legacy();
/// Deletes an order: `DELETE /orders/{id}` (v2).
pub const DELETE_ORDER: Endpoint<Empty> = Endpoint::delete("/orders/{id}", K::Order).legacy();
/// Deletes all orders: `DELETE /orders` (v2).
pub const DELETE_ALL_ORDERS: Endpoint<Empty> = Endpoint::delete("/orders", K::Order).legacy();

/// Lists order products: `GET /orders/{order_id}/products` (v2).
pub const ORDER_PRODUCTS: Endpoint<Many> =
    Endpoint::get("/orders/{order_id}/products", K::OrderProduct).legacy();
/// Counts order products: `GET /orders/{order_id}/products/count` (v2).
pub const ORDER_PRODUCTS_COUNT: Endpoint<Count> =
    Endpoint::get("/orders/{order_id}/products/count", K::OrderProduct).legacy();
/// Lists order coupons: `GET /orders/{order_id}/coupons` (v2).
pub const ORDER_COUPONS: Endpoint<Many> =
    Endpoint::get("/orders/{order_id}/coupons", K::OrderCoupon).legacy();
/// Lists order shipping addresses: `GET /orders/{order_id}/shipping_addresses` (v2).
pub const ORDER_SHIPPING_ADDRESSES: Endpoint<Many> =
    Endpoint::get("/orders/{order_id}/shipping_addresses", K::Address).legacy();
/// Fetches one order shipping address: `GET /orders/{order_id}/shipping_addresses/{id}` (v2).
pub const ORDER_SHIPPING_ADDRESS: Endpoint<One> =
    Endpoint::get("/orders/{order_id}/shipping_addresses/{id}", K::Address).legacy();

/// Lists order statuses: `GET /order_statuses` (v2).
pub const ORDER_STATUSES: Endpoint<Many> =
    Endpoint::get("/order_statuses", K::OrderStatus).legacy();
/// Fetches one order status: `GET /order_statuses/{id}` (v2).
pub const ORDER_STATUS: Endpoint<One> =
    Endpoint::get("/order_statuses/{id}", K::OrderStatus).legacy();

/// Lists shipments: `GET /orders/{order_id}/shipments` (v2).
pub const SHIPMENTS: Endpoint<Many> =
    Endpoint::get("/orders/{order_id}/shipments", K::Shipment).legacy();
/// Fetches one shipment: `GET /orders/{order_id}/shipments/{id}` (v2).
pub const SHIPMENT: Endpoint<One> =
    Endpoint::get("/orders/{order_id}/shipments/{id}", K::Shipment).legacy();
/// Creates a shipment: `POST /orders/{order_id}/shipments` (v2).
pub const CREATE_SHIPMENT: Endpoint<One> =
    Endpoint::post("/orders/{order_id}/shipments", K::Shipment).legacy();
/// Updates a shipment: `PUT /orders/{order_id}/shipments/{id}` (v2).
pub const UPDATE_SHIPMENT: Endpoint<One> =
    Endpoint::put("/orders/{order_id}/shipments/{id}", K::Shipment).legacy();
/// Deletes a shipment: `DELETE /orders/{order_id}/shipments/{id}` (v2).
pub const DELETE_SHIPMENT: Endpoint<Empty> =
    Endpoint::delete("/orders/{order_id}/shipments/{id}", K::Shipment).legacy();
/// Deletes all shipments: `DELETE /orders/{order_id}/shipments` (v2).
pub const DELETE_ALL_SHIPMENTS: Endpoint<Empty> =
    Endpoint::delete("/orders/{order_id}/shipments", K::Shipment).legacy();

// Marketing (v2)

/// Lists coupons: `GET /coupons` (v2).
pub const COUPONS: Endpoint<Many> = Endpoint::get("/coupons", K::Coupon).legacy();
/// Fetches one coupon: `GET /coupons/{id}` (v2).
pub const COUPON: Endpoint<One> = Endpoint::get("/coupons/{id}", K::Coupon).legacy();
/// Counts coupons: `GET /coupons/count` (v2).
pub const COUPONS_COUNT: Endpoint<Count> = Endpoint::get("/coupons/count", K::Coupon).legacy();
/// Creates a coupon: `POST /coupons` (v2).
pub const CREATE_COUPON: Endpoint<One> = Endpoint::post("/coupons", K::Coupon).legacy();
/// Updates a coupon: `PUT /coupons/{id}` (v2).
pub const UPDATE_COUPON: Endpoint<One> = Endpoint::put("/coupons/{id}", K::Coupon).legacy();
/// Deletes a coupon: `DELETE /coupons/{id}` (v2).
pub const DELETE_COUPON: Endpoint<Empty> = Endpoint::delete("/coupons/{id}", K::Coupon).legacy();
/// Deletes all coupons: `DELETE /coupons` (v2).
pub const DELETE_ALL_COUPONS: Endpoint<Empty> = Endpoint::delete("/coupons", K::Coupon).legacy();

/// Lists gift certificates: `GET /gift_certificates` (v2).
pub const GIFT_CERTIFICATES: Endpoint<Many> =
    Endpoint::get("/gift_certificates", K::Generic).legacy();
/// Fetches one gift certificate: `GET /gift_certificates/{id}` (v2).
pub const GIFT_CERTIFICATE: Endpoint<One> =
    Endpoint::get("/gift_certificates/{id}", K::Generic).legacy();
/// Creates a gift certificate: `POST /gift_certificates` (v2).
pub const CREATE_GIFT_CERTIFICATE: Endpoint<One> =
    Endpoint::post("/gift_certificates", K::Generic).legacy();
/// Updates a gift certificate: `PUT /gift_certificates/{id}` (v2).
pub const UPDATE_GIFT_CERTIFICATE: Endpoint<One> =
    Endpoint::put("/gift_certificates/{id}", K::Generic).legacy();
/// Deletes a gift certificate: `DELETE /gift_certificates/{id}` (v2).
pub const DELETE_GIFT_CERTIFICATE: Endpoint<Empty> =
    Endpoint::delete("/gift_certificates/{id}", K::Generic).legacy();
/// Deletes all gift certificates: `DELETE /gift_certificates` (v2).
pub const DELETE_ALL_GIFT_CERTIFICATES: Endpoint<Empty> =
    Endpoint::delete("/gift_certificates", K::Generic).legacy();

/// Lists banners: `GET /banners` (v2).
pub const BANNERS: Endpoint<Many> = Endpoint::get("/banners", K::Generic).legacy();
/// Creates a banner: `POST /banners` (v2).
pub const CREATE_BANNER: Endpoint<One> = Endpoint::post("/banners", K::Generic).legacy();
/// Updates a banner: `PUT /banners/{id}` (v2).
pub const UPDATE_BANNER: Endpoint<One> = Endpoint::put("/banners/{id}", K::Generic).legacy();
/// Deletes a banner: `DELETE /banners/{id}` (v2).
pub const DELETE_BANNER: Endpoint<Empty> = Endpoint::delete("/banners/{id}", K::Generic).legacy();
/// Deletes all banners: `DELETE /banners` (v2).
pub const DELETE_ALL_BANNERS: Endpoint<Empty> =
    Endpoint::delete("/banners", K::Generic).legacy();

// Price lists

/// Lists pricelists: `GET /pricelists`.
pub const PRICELISTS: Endpoint<Many> = Endpoint::get("/pricelists", K::Pricelist);
/// Creates a pricelist: `POST /pricelists`.
pub const CREATE_PRICELIST: Endpoint<One> = Endpoint::post("/pricelists", K::Pricelist);
/// Updates a pricelist: `PUT /pricelists/{id}`.
pub const UPDATE_PRICELIST: Endpoint<One> = Endpoint::put("/pricelists/{id}", K::Pricelist);
/// Deletes a pricelist: `DELETE /pricelists/{id}`.
pub const DELETE_PRICELIST: Endpoint<Empty> = Endpoint::delete("/pricelists/{id}", K::Pricelist);
/// Lists pricelist records: `GET /pricelists/{pricelist_id}/records`.
pub const PRICELIST_RECORDS: Endpoint<Many> =
    Endpoint::get("/pricelists/{pricelist_id}/records", K::PricelistRecord);
/// Updates pricelist records: `PUT /pricelists/{pricelist_id}/records`.
pub const UPSERT_PRICELIST_RECORDS: Endpoint<Empty> =
    Endpoint::put("/pricelists/{pricelist_id}/records", K::PricelistRecord);
/// Updates pricelist assignments: `PUT /pricelists/{pricelist_id}/assignments`.
pub const PRICELIST_ASSIGNMENTS: Endpoint<Empty> =
    Endpoint::put("/pricelists/{pricelist_id}/assignments", K::Generic);

// Inventory locations

/// Lists locations: `GET /inventory/locations`.
pub const LOCATIONS: Endpoint<Many> = Endpoint::get("/inventory/locations", K::Location);
/// Fetches one location: `GET /inventory/locations/{id}`.
pub const LOCATION: Endpoint<One> = Endpoint::get("/inventory/locations/{id}", K::Location);
/// Creates a location: `POST /inventory/locations`.
pub const CREATE_LOCATION: Endpoint<One> = Endpoint::post("/inventory/locations", K::Location);
/// Updates a location: `PUT /inventory/locations/{id}`.
pub const UPDATE_LOCATION: Endpoint<One> =
    Endpoint::put("/inventory/locations/{id}", K::Location);

// Store settings and content

/// Lists currencies: `GET /currencies` (v2).
pub const CURRENCIES: Endpoint<Many> = Endpoint::get("/currencies", K::Currency).legacy();
/// Fetches one currency: `GET /currencies/{id}` (v2).
pub const CURRENCY: Endpoint<One> = Endpoint::get("/currencies/{id}", K::Currency).legacy();
/// Creates a currency: `POST /currencies` (v2).
pub const CREATE_CURRENCY: Endpoint<One> = Endpoint::post("/currencies", K::Currency).legacy();
/// Updates a currency: `PUT /currencies/{id}` (v2).
pub const UPDATE_CURRENCY: Endpoint<One> =
    Endpoint::put("/currencies/{id}", K::Currency).legacy();
/// Deletes a currency: `DELETE /currencies/{id}` (v2).
pub const DELETE_CURRENCY: Endpoint<Empty> =
    Endpoint::delete("/currencies/{id}", K::Currency).legacy();

/// Lists pages: `GET /pages` (v2).
pub const PAGES: Endpoint<Many> = Endpoint::get("/pages", K::Page).legacy();
/// Fetches one page: `GET /pages/{id}` (v2).
pub const PAGE: Endpoint<One> = Endpoint::get("/pages/{id}", K::Page).legacy();
/// Creates a page: `POST /pages` (v2).
pub const CREATE_PAGE: Endpoint<One> = Endpoint::post("/pages", K::Page).legacy();
/// Updates a page: `PUT /pages/{id}` (v2).
pub const UPDATE_PAGE: Endpoint<One> = Endpoint::put("/pages/{id}", K::Page).legacy();
/// Deletes a page: `DELETE /pages/{id}` (v2).
pub const DELETE_PAGE: Endpoint<Empty> = Endpoint::delete("/pages/{id}", K::Page).legacy();

/// Lists widgets: `GET /content/widgets`.
pub const WIDGETS: Endpoint<Many> = Endpoint::get("/content/widgets", K::Generic);
/// Fetches one widget: `GET /content/widgets/{id}`.
pub const WIDGET: Endpoint<One> = Endpoint::get("/content/widgets/{id}", K::Generic);

/// Lists request logs: `GET /requestlogs` (v2).
pub const REQUEST_LOGS: Endpoint<Many> = Endpoint::get("/requestlogs", K::RequestLog).legacy();
/// Fetches the store profile: `GET /store` (v2).
pub const STORE: Endpoint<One> = Endpoint::get("/store", K::Generic).legacy();
/// The time ping; its body is a bare timestamp, so it is not mapped.
pub const TIME: Endpoint<Empty> = Endpoint::get("/time", K::Generic).legacy();

// Webhooks

/// Lists webhooks: `GET /hooks`.
pub const WEBHOOKS: Endpoint<Many> = Endpoint::get("/hooks", K::Generic);
/// Fetches one webhook: `GET /hooks/{id}`.
pub const WEBHOOK: Endpoint<One> = Endpoint::get("/hooks/{id}", K::Generic);
/// Creates a webhook: `POST /hooks`.
pub const CREATE_WEBHOOK: Endpoint<One> = Endpoint::post("/hooks", K::Generic);
/// Updates a webhook: `PUT /hooks/{id}`.
pub const UPDATE_WEBHOOK: Endpoint<One> = Endpoint::put("/hooks/{id}", K::Generic);
/// Deletes a webhook: `DELETE /hooks/{id}`.
pub const DELETE_WEBHOOK: Endpoint<Empty> = Endpoint::delete("/hooks/{id}", K::Generic);

// Shipping (v2)

/// Lists shipping zones: `GET /shipping/zones` (v2).
pub const SHIPPING_ZONES: Endpoint<Many> =
    Endpoint::get("/shipping/zones", K::ShippingZone).legacy();
/// Fetches one shipping zone: `GET /shipping/zones/{id}` (v2).
pub const SHIPPING_ZONE: Endpoint<One> =
    Endpoint::get("/shipping/zones/{id}", K::ShippingZone).legacy();
/// Deletes a shipping zone: `DELETE /shipping/zones/{id}` (v2).
pub const DELETE_SHIPPING_ZONE: Endpoint<Empty> =
    Endpoint::delete("/shipping/zones/{id}", K::ShippingZone).legacy();
/// Lists shipping methods: `GET /shipping/zones/{zone_id}/methods` (v2).
pub const SHIPPING_METHODS: Endpoint<Many> =
    Endpoint::get("/shipping/zones/{zone_id}/methods", K::ShippingMethod).legacy();
/// Fetches one shipping method: `GET /shipping/zones/{zone_id}/methods/{id}` (v2).
pub const SHIPPING_METHOD: Endpoint<One> =
    Endpoint::get("/shipping/zones/{zone_id}/methods/{id}", K::ShippingMethod).legacy();
/// Deletes a shipping method: `DELETE /shipping/zones/{zone_id}/methods/{id}` (v2).
pub const DELETE_SHIPPING_METHOD: Endpoint<Empty> =
    Endpoint::delete("/shipping/zones/{zone_id}/methods/{id}", K::ShippingMethod).legacy();

// Carts

/// Fetches one cart: `GET /carts/{id}`.
pub const CART: Endpoint<One> = Endpoint::get("/carts/{id}", K::Generic);
/// Creates a cart: `POST /carts`.
pub const CREATE_CART: Endpoint<One> = Endpoint::post("/carts", K::Generic);
/// Deletes a cart: `DELETE /carts/{id}`.
pub const DELETE_CART: Endpoint<Empty> = Endpoint::delete("/carts/{id}", K::Generic);
/// Adds line items to a cart: `POST /carts/{id}/items`.
pub const ADD_CART_LINE_ITEMS: Endpoint<One> = Endpoint::post("/carts/{id}/items", K::Generic);
/// Updates a cart line item: `PUT /carts/{cart_id}/items/{id}`.
pub const UPDATE_CART_LINE_ITEM: Endpoint<One> =
    Endpoint::put("/carts/{cart_id}/items/{id}", K::Generic);
/// Deletes a cart line item: `DELETE /carts/{cart_id}/items/{id}`.
pub const DELETE_CART_LINE_ITEM: Endpoint<Empty> =
    Endpoint::delete("/carts/{cart_id}/items/{id}", K::Generic);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpMethod;
    use crate::config::ApiVersion;

    #[test]
    fn test_products_paginate_on_current_api() {
        assert_eq!(PRODUCTS.method(), HttpMethod::Get);
        assert_eq!(PRODUCTS.version(), ApiVersion::V3);
        assert!(PRODUCTS.paginates());
    }

    #[test]
    fn test_orders_are_legacy_and_unpaginated() {
        assert_eq!(ORDERS.version(), ApiVersion::V2);
        assert!(!ORDERS.paginates());
        assert_eq!(ORDER.kind(), K::Order);
    }

    #[test]
    fn test_relationship_endpoints_are_puts() {
        for endpoint in [
            PRODUCT_CHANNEL_ASSIGNMENTS,
            CUSTOM_TEMPLATE_ASSOCIATIONS,
            PRICELIST_ASSIGNMENTS,
            UPSERT_PRICELIST_RECORDS,
            CUSTOMER_ATTRIBUTE_VALUES,
            BULK_UPDATE_PRODUCTS,
        ] {
            assert_eq!(endpoint.method(), HttpMethod::Put);
            assert_eq!(endpoint.version(), ApiVersion::V3);
        }
    }

    #[test]
    fn test_variant_endpoints_use_variant_kind() {
        assert_eq!(PRODUCT_VARIANT.kind(), K::ProductVariant);
        assert_eq!(UPDATE_PRODUCT_VARIANT.kind(), K::ProductVariant);
    }
}
