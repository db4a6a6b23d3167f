//! Line item and related types for orders.
//!
//! This module provides structs for order line items, tax lines, shipping
//! lines, fee lines, coupon lines and refund summaries.
//!
//! Money amounts are strings in WooCommerce responses (e.g., `"21.99"`), and
//! they are kept as strings here to preserve decimal precision. The one
//! exception is [`LineItem::price`], which WooCommerce sends as a number.

use serde::{Deserialize, Serialize};

use super::MetaData;

/// A product line in an order.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::rest::resources::LineItem;
///
/// let item: LineItem = serde_json::from_str(
///     r#"{"id":315,"name":"Woo Single #1","product_id":93,"quantity":2,"total":"6.00","price":3}"#,
/// ).unwrap();
///
/// assert_eq!(item.quantity, 2);
/// assert_eq!(item.total.as_deref(), Some("6.00"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LineItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
    /// The variation id, or `0` for simple products.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variation_id: Option<u64>,
    #[serde(default)]
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal_tax: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tax: Option<String>,
    /// Per-rate tax breakdown.
    #[serde(default)]
    pub taxes: Vec<serde_json::Value>,
    #[serde(default)]
    pub meta_data: Vec<MetaData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// Unit price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// A tax rate applied to an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TaxLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compound: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_total: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_tax_total: Option<String>,
}

/// A shipping method charged on an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ShippingLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tax: Option<String>,
    #[serde(default)]
    pub meta_data: Vec<MetaData>,
}

/// A fee charged on an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FeeLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tax: Option<String>,
}

/// A coupon applied to an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CouponLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default)]
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_tax: Option<String>,
}

/// A refund summary listed on an order. The total is negative (e.g., `"-10.00"`).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderRefund {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<String>,
}
