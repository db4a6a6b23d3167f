//! REST resources for the `wc/v3` namespace.
//!
//! # Available Resources
//!
//! ## Product Resource (`/products`)
//!
//! - [`Product`] - A product in the catalog
//! - [`ProductStatus`], [`ProductType`], [`StockStatus`], [`CatalogVisibility`]
//! - [`ProductListParams`] - Parameters for listing products
//!
//! ## Order Resource (`/orders`)
//!
//! - [`Order`] - An order with its line items
//! - [`OrderStatus`] - The order status (pending, processing, on-hold, ...)
//! - [`OrderListParams`] - Parameters for listing orders
//!
//! ## Customer Resource (`/customers`)
//!
//! - [`Customer`] - A registered customer
//! - [`CustomerListParams`] - Parameters for listing customers
//!
//! ## Product Category Resource (`/products/categories`)
//!
//! - [`ProductCategory`] - A category in the category tree
//! - [`CategoryDisplay`] - How the category archive is displayed
//! - [`ProductCategoryListParams`] - Parameters for listing categories
//!
//! ## Product Tag Resource (`/products/tags`)
//!
//! - [`ProductTag`] - A product tag
//! - [`ProductTagListParams`] - Parameters for listing tags
//!
//! ## Product Review Resource (`/products/reviews`)
//!
//! - [`ProductReview`] - A review of a product
//! - [`ReviewStatus`] - Moderation status
//! - [`ProductReviewListParams`] - Parameters for listing reviews
//!
//! Products, categories and tags also implement
//! [`SlugResource`](crate::rest::SlugResource).

pub mod common;
mod customer;
mod order;
mod product;
mod product_category;
mod product_review;
mod product_tag;

// Re-export common types for convenience
pub use common::{
    find_meta, Address, CouponLine, DefaultAttribute, Dimensions, FeeLine, Image, LineItem,
    MetaData, OrderRefund, ProductAttribute, ShippingLine, SortOrder, TaxLine, TermRef,
};

pub use customer::{Customer, CustomerListParams};
pub use order::{Order, OrderListParams, OrderStatus};
pub use product::{
    CatalogVisibility, Product, ProductListParams, ProductStatus, ProductType, StockStatus,
};
pub use product_category::{CategoryDisplay, ProductCategory, ProductCategoryListParams};
pub use product_review::{ProductReview, ProductReviewListParams, ReviewStatus};
pub use product_tag::{ProductTag, ProductTagListParams};
