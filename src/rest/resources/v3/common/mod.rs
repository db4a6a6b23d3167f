//! Common types and embedded structs used across multiple REST resources.
//!
//! These types are not resources themselves (they don't implement
//! `Resource`), but appear as nested data within `Product`, `Order`,
//! `Customer` and `ProductCategory` bodies, or as shared list parameters.

mod address;
mod catalog;
mod line_item;
mod meta;

use serde::{Deserialize, Serialize};

pub use address::Address;
pub use catalog::{DefaultAttribute, Dimensions, Image, ProductAttribute, TermRef};
pub use line_item::{CouponLine, FeeLine, LineItem, OrderRefund, ShippingLine, TaxLine};
pub use meta::{find_meta, MetaData};

/// Sort direction for list requests (`order` parameter).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_order_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&SortOrder::Asc).unwrap(), "\"asc\"");
        assert_eq!(serde_json::to_string(&SortOrder::Desc).unwrap(), "\"desc\"");
        assert_eq!(SortOrder::default(), SortOrder::Desc);
    }
}
