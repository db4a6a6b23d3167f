//! HTTP client types for WooCommerce API communication.
//!
//! This module provides the client layer for making authenticated, read-only
//! requests to the WooCommerce REST API.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ResourceClient`]: Typed list / by-id / by-slug operations for every resource
//! - [`HttpClient`]: The async HTTP client (auth headers, URL building, status check)
//! - [`HttpResponse`]: A successful response with its parsed JSON body
//! - [`CollectionInfo`]: `X-WP-Total` / `X-WP-TotalPages` metadata
//! - [`Query`] and [`ArrayFormat`]: Query string construction
//! - [`ClientError`]: The error type for every client operation
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::{ResourceClient, WooConfig};
//! use woocommerce_api::clients::Query;
//!
//! let client = ResourceClient::new(&WooConfig::from_env()?)?;
//!
//! let query = Query::new().with("status", "processing").with("per_page", 10);
//! for order in client.orders(Some(&query)).await? {
//!     println!("#{:?} {:?}", order.id, order.total);
//! }
//! ```
//!
//! # Retry Behavior
//!
//! None. A non-2xx response fails immediately with [`ClientError::Http`] and
//! a network failure with [`ClientError::Transport`].

mod errors;
mod http_client;
mod http_response;
mod query;
mod resource_client;

pub use errors::{ClientError, DecodeError, HttpResponseError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_response::{CollectionInfo, HttpResponse};
pub use query::{ArrayFormat, Query, QueryValue};
pub use resource_client::ResourceClient;
