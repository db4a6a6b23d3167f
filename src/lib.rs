//! # WooCommerce API Rust Client
//!
//! A typed, read-only client for the WooCommerce REST API (`/wp-json/wc/v3`).
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`WooConfig`] and [`WooConfigBuilder`]
//! - Validated newtypes for the store URL and API credentials
//! - Environment loading from `WOOCOMMERCE_URL`, `WOOCOMMERCE_CONSUMER_KEY`
//!   and `WOOCOMMERCE_CONSUMER_SECRET`
//! - An async [`ResourceClient`] that lists, fetches by id and finds by slug
//! - Typed records for products, orders, customers, categories, tags and reviews
//! - A [`ClientError`] taxonomy separating config, transport, HTTP and decode failures
//!
//! ## Quick Start
//!
//! ```rust
//! use woocommerce_api::{WooConfig, StoreUrl, ConsumerKey, ConsumerSecret, ApiVersion};
//!
//! // Create configuration using the builder pattern
//! let config = WooConfig::builder()
//!     .store_url(StoreUrl::new("https://shop.example.com").unwrap())
//!     .consumer_key(ConsumerKey::new("ck_1234").unwrap())
//!     .consumer_secret(ConsumerSecret::new("cs_5678").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_root(), "https://shop.example.com/wp-json/wc/v3");
//! ```
//!
//! ## Fetching Resources
//!
//! ```rust,ignore
//! use woocommerce_api::{ResourceClient, WooConfig};
//! use woocommerce_api::clients::Query;
//!
//! let client = ResourceClient::new(&WooConfig::from_env()?)?;
//!
//! // Lists take an optional query
//! let products = client.products(Some(&Query::new().with("per_page", 5))).await?;
//!
//! // Single records by id
//! let order = client.order(727).await?;
//!
//! // Slug lookups return None when nothing matches
//! match client.product_by_slug("hoodie").await? {
//!     Some(product) => println!("{}: {:?}", product.name, product.price),
//!     None => println!("no such product"),
//! }
//! ```
//!
//! ## Typed Filters and Collection Metadata
//!
//! ```rust,ignore
//! use woocommerce_api::rest::Resource;
//! use woocommerce_api::rest::resources::{Order, OrderListParams, OrderStatus};
//!
//! let params = OrderListParams {
//!     status: Some(vec![OrderStatus::Processing]),
//!     per_page: Some(20),
//!     ..Default::default()
//! };
//! let orders = Order::all(&client, Some(params)).await?;
//! println!("page 1 of {:?}, {:?} orders total", orders.total_pages(), orders.total());
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with a Tokio runtime
//! - **One request per call**: No retries, no caching, no page traversal

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{
    ApiVersion, ConsumerKey, ConsumerSecret, StoreUrl, WooConfig, WooConfigBuilder,
};
pub use error::ConfigError;

// Re-export client types
pub use clients::{
    ArrayFormat, ClientError, DecodeError, HttpClient, HttpResponse, HttpResponseError, Query,
    ResourceClient,
};

// Re-export REST resource types
pub use rest::resources::{
    Customer, Order, Product, ProductCategory, ProductReview, ProductTag,
};
pub use rest::{Resource, ResourceResponse, SlugResource};
