//! REST resource infrastructure for the WooCommerce API.
//!
//! This module provides:
//!
//! - **[`Resource`] trait**: ties a record type to its collection path and
//!   provides `all()` and `find()`
//! - **[`SlugResource`] trait**: adds `find_by_slug()` for products,
//!   categories and tags
//! - **[`ResourceDescriptor`]**: the resource name and path
//! - **[`ResourceResponse<T>`]**: a Deref-based wrapper carrying the
//!   `X-WP-Total` / `X-WP-TotalPages` metadata
//! - **[`resources`]**: the typed records (Product, Order, ...)
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::{ResourceClient, WooConfig};
//! use woocommerce_api::rest::{Resource, SlugResource};
//! use woocommerce_api::rest::resources::{ProductCategory, ProductCategoryListParams};
//!
//! let client = ResourceClient::new(&WooConfig::from_env()?)?;
//!
//! // Top-level categories, with the total count WooCommerce reports
//! let params = ProductCategoryListParams { parent: Some(0), ..Default::default() };
//! let response = ProductCategory::all(&client, Some(params)).await?;
//! println!("{} of {:?} categories", response.len(), response.total());
//!
//! // Single category by id or slug
//! let clothing = ProductCategory::find(&client, 9).await?;
//! let hoodies = ProductCategory::find_by_slug(&client, "hoodies").await?;
//! ```

mod path;
mod resource;
mod response;

pub mod resources;

pub use path::ResourceDescriptor;
pub use resource::{Resource, SlugResource};
pub use response::ResourceResponse;
