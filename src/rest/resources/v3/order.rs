//! Order resource implementation.
//!
//! Orders are read-only through this crate; they can be listed with filters
//! and fetched by id, but not looked up by slug.
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::rest::Resource;
//! use woocommerce_api::rest::resources::{Order, OrderListParams, OrderStatus};
//!
//! let params = OrderListParams {
//!     status: Some(vec![OrderStatus::Processing, OrderStatus::OnHold]),
//!     customer: Some(25),
//!     ..Default::default()
//! };
//! let orders = Order::all(&client, Some(params)).await?;
//! for order in orders.iter() {
//!     println!("#{} {}", order.number.as_deref().unwrap_or("?"), order.total.as_deref().unwrap_or("0"));
//! }
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::rest::{Resource, ResourceDescriptor};

use super::common::{
    Address, CouponLine, FeeLine, LineItem, MetaData, OrderRefund, ShippingLine, SortOrder,
    TaxLine,
};

/// The status of an order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    OnHold,
    Completed,
    Cancelled,
    Refunded,
    Failed,
    Trash,
    /// Created by the block checkout before payment.
    CheckoutDraft,
    /// Any status. Only meaningful as a list filter.
    Any,
    /// A status added by a plugin.
    #[serde(other)]
    Other,
}

impl OrderStatus {
    /// Returns `true` for statuses where payment has been received.
    #[must_use]
    pub const fn is_paid(&self) -> bool {
        matches!(self, Self::Processing | Self::Completed)
    }
}

/// An order in a WooCommerce store.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Order {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u64>,
    /// The order number shown to customers, which may differ from `id`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_via: Option<String>,
    /// WooCommerce version that last updated the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    /// ISO 4217 currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_created: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_created_gmt: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified_gmt: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_total: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_tax: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_total: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_tax: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cart_tax: Option<String>,
    /// Grand total.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tax: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prices_include_tax: Option<bool>,
    /// Customer id, or `0` for guest orders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_user_agent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_paid: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_paid_gmt: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_completed: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_completed_gmt: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cart_hash: Option<String>,
    #[serde(default)]
    pub meta_data: Vec<MetaData>,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
    #[serde(default)]
    pub tax_lines: Vec<TaxLine>,
    #[serde(default)]
    pub shipping_lines: Vec<ShippingLine>,
    #[serde(default)]
    pub fee_lines: Vec<FeeLine>,
    #[serde(default)]
    pub coupon_lines: Vec<CouponLine>,
    #[serde(default)]
    pub refunds: Vec<OrderRefund>,
}

impl Order {
    /// Total quantity across all line items.
    #[must_use]
    pub fn item_count(&self) -> i64 {
        self.line_items.iter().map(|item| item.quantity).sum()
    }

    /// Returns `true` if the order was placed without a customer account.
    #[must_use]
    pub fn is_guest(&self) -> bool {
        self.customer_id.map_or(true, |id| id == 0)
    }
}

impl Resource for Order {
    type ListParams = OrderListParams;

    const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor::new("Order", "orders");

    fn get_id(&self) -> Option<u64> {
        self.id
    }
}

/// Parameters for listing orders.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Maximum number of items per page (default: 10, max: 100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    /// Only orders created after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<NaiveDateTime>,

    /// Only orders created before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<NaiveDateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<u64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<u64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,

    /// Sort field: `date`, `id`, `include`, `title` or `slug`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orderby: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Vec<u64>>,

    /// One or more statuses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Vec<OrderStatus>>,

    /// Customer id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<u64>,

    /// Only orders containing this product id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<u64>,

    /// Decimal places for money amounts in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dp: Option<u32>,
}
