//! The closed registry of resource kinds.
//!
//! Every mapped resource is tagged with a [`ResourceKind`]. The kind decides
//! which fields are stripped from the body when the resource is sent back to
//! the API on create or update. Resolution happens at compile time: there is
//! no lookup by name and no fallback.

use std::fmt;

/// Per-kind metadata: display name and the fields excluded from request
/// bodies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KindSpec {
    /// The resource name (e.g., `"Product"`).
    pub name: &'static str,
    /// Fields removed by [`Resource::create_fields`](crate::rest::Resource::create_fields).
    pub ignore_on_create: &'static [&'static str],
    /// Fields removed by [`Resource::update_fields`](crate::rest::Resource::update_fields).
    pub ignore_on_update: &'static [&'static str],
}

impl KindSpec {
    const fn plain(name: &'static str) -> Self {
        Self {
            name,
            ignore_on_create: &[],
            ignore_on_update: &[],
        }
    }

    const fn with(
        name: &'static str,
        ignore_on_create: &'static [&'static str],
        ignore_on_update: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            ignore_on_create,
            ignore_on_update,
        }
    }
}

/// The kind of a mapped resource.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::rest::ResourceKind;
///
/// let kind = ResourceKind::CustomerGroup;
/// assert_eq!(kind.name(), "CustomerGroup");
/// assert_eq!(kind.ignore_on_create(), &["id"]);
/// assert_eq!(kind.ignore_on_update(), &["id", "date_created", "date_modified"]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum ResourceKind {
    /// An untyped resource.
    #[default]
    Generic,
    Product,
    ProductVariant,
    /// A legacy (v2) SKU-style variant.
    Variant,
    ProductImage,
    ProductCustomField,
    ProductOption,
    ProductReview,
    Option,
    OptionValue,
    OptionSet,
    Sku,
    Rule,
    Category,
    Brand,
    Customer,
    CustomerAttribute,
    CustomerGroup,
    Address,
    Order,
    OrderProduct,
    OrderStatus,
    OrderCoupon,
    Shipment,
    Coupon,
    Currency,
    Page,
    Location,
    Pricelist,
    PricelistRecord,
    ShippingZone,
    ShippingMethod,
    RequestLog,
}

impl ResourceKind {
    /// Every kind, in declaration order.
    pub const ALL: &'static [Self] = &[
        Self::Generic,
        Self::Product,
        Self::ProductVariant,
        Self::Variant,
        Self::ProductImage,
        Self::ProductCustomField,
        Self::ProductOption,
        Self::ProductReview,
        Self::Option,
        Self::OptionValue,
        Self::OptionSet,
        Self::Sku,
        Self::Rule,
        Self::Category,
        Self::Brand,
        Self::Customer,
        Self::CustomerAttribute,
        Self::CustomerGroup,
        Self::Address,
        Self::Order,
        Self::OrderProduct,
        Self::OrderStatus,
        Self::OrderCoupon,
        Self::Shipment,
        Self::Coupon,
        Self::Currency,
        Self::Page,
        Self::Location,
        Self::Pricelist,
        Self::PricelistRecord,
        Self::ShippingZone,
        Self::ShippingMethod,
        Self::RequestLog,
    ];

    /// Returns the registry entry for this kind.
    #[must_use]
    pub const fn spec(self) -> KindSpec {
        match self {
            Self::Generic => KindSpec::plain("Resource"),
            Self::Product => KindSpec::plain("Product"),
            Self::ProductVariant => {
                KindSpec::with("ProductVariant", &["product_id"], &["id", "product_id"])
            }
            Self::Variant => KindSpec::with("Variant", &["product_id"], &["id", "product_id"]),
            Self::ProductImage => KindSpec::plain("ProductImage"),
            Self::ProductCustomField => KindSpec::plain("ProductCustomField"),
            Self::ProductOption => KindSpec::plain("ProductOption"),
            Self::ProductReview => KindSpec::plain("ProductReview"),
            Self::Option => KindSpec::plain("Option"),
            Self::OptionValue => KindSpec::plain("OptionValue"),
            Self::OptionSet => KindSpec::plain("OptionSet"),
            Self::Sku => KindSpec::plain("Sku"),
            Self::Rule => KindSpec::plain("Rule"),
            Self::Category => KindSpec::plain("Category"),
            Self::Brand => KindSpec::plain("Brand"),
            Self::Customer => KindSpec::plain("Customer"),
            Self::CustomerAttribute => KindSpec::with("CustomerAttribute", &["id"], &["id"]),
            Self::CustomerGroup => KindSpec::with(
                "CustomerGroup",
                &["id"],
                &["id", "date_created", "date_modified"],
            ),
            Self::Address => KindSpec::plain("Address"),
            Self::Order => KindSpec::plain("Order"),
            Self::OrderProduct => KindSpec::plain("OrderProduct"),
            Self::OrderStatus => KindSpec::plain("OrderStatus"),
            Self::OrderCoupon => KindSpec::plain("OrderCoupon"),
            Self::Shipment => KindSpec::plain("Shipment"),
            Self::Coupon => KindSpec::plain("Coupon"),
            Self::Currency => KindSpec::plain("Currency"),
            Self::Page => KindSpec::plain("Page"),
            Self::Location => KindSpec::with("Location", &["id"], &["id"]),
            Self::Pricelist => KindSpec::with("Pricelist", &[], &["id"]),
            Self::PricelistRecord => KindSpec::with("PricelistRecord", &[], &["id"]),
            Self::ShippingZone => KindSpec::plain("ShippingZone"),
            Self::ShippingMethod => KindSpec::plain("ShippingMethod"),
            Self::RequestLog => KindSpec::plain("RequestLog"),
        }
    }

    /// Returns the resource name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.spec().name
    }

    /// Returns the fields excluded from create bodies.
    #[must_use]
    pub const fn ignore_on_create(self) -> &'static [&'static str] {
        self.spec().ignore_on_create
    }

    /// Returns the fields excluded from update bodies.
    #[must_use]
    pub const fn ignore_on_update(self) -> &'static [&'static str] {
        self.spec().ignore_on_update
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = ResourceKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names.len(), ResourceKind::ALL.len());
    }

    #[test]
    fn test_variant_exclusions() {
        for kind in [ResourceKind::Variant, ResourceKind::ProductVariant] {
            assert_eq!(kind.ignore_on_create(), &["product_id"]);
            assert_eq!(kind.ignore_on_update(), &["id", "product_id"]);
        }
    }

    #[test]
    fn test_pricelists_keep_id_on_create() {
        assert!(ResourceKind::Pricelist.ignore_on_create().is_empty());
        assert_eq!(ResourceKind::PricelistRecord.ignore_on_update(), &["id"]);
    }

    #[test]
    fn test_generic_is_default_and_excludes_nothing() {
        assert_eq!(ResourceKind::default(), ResourceKind::Generic);
        assert_eq!(ResourceKind::Generic.to_string(), "Resource");
        assert!(ResourceKind::Generic.ignore_on_update().is_empty());
    }
}
