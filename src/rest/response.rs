//! Response wrapper for REST resource operations.
//!
//! This module provides [`ResourceResponse<T>`], a wrapper that combines
//! resource data with the collection metadata WooCommerce sends in the
//! `X-WP-Total` and `X-WP-TotalPages` headers. The wrapper implements
//! `Deref` for ergonomic access to the inner data.
//!
//! # Deref Pattern
//!
//! `ResourceResponse<T>` implements `Deref<Target = T>`, which means you can
//! use it like the inner type directly:
//!
//! ```rust,ignore
//! let response: ResourceResponse<Vec<Product>> = Product::all(&client, None).await?;
//!
//! for product in response.iter() {
//!     println!("{}", product.name);
//! }
//!
//! println!("{} of {:?}", response.len(), response.total());
//! let products: Vec<Product> = response.into_inner();
//! ```

use std::ops::{Deref, DerefMut};

use serde::de::DeserializeOwned;

use crate::clients::{CollectionInfo, DecodeError, HttpResponse};

/// A response from a REST resource operation.
///
/// # Type Parameters
///
/// * `T` - The decoded data. For single resources this is the resource type
///   (e.g., `Product`); for collections it is `Vec<Product>`.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::rest::ResourceResponse;
/// use woocommerce_api::clients::CollectionInfo;
///
/// let response = ResourceResponse::new(
///     vec!["hoodie", "beanie"],
///     CollectionInfo { total: Some(12), total_pages: Some(6) },
/// );
///
/// assert_eq!(response.len(), 2);
/// assert_eq!(response[0], "hoodie");
/// assert_eq!(response.total(), Some(12));
/// assert!(response.has_more_pages(1));
/// ```
#[derive(Debug, Clone)]
pub struct ResourceResponse<T> {
    data: T,
    collection: CollectionInfo,
}

impl<T> ResourceResponse<T> {
    /// Creates a new `ResourceResponse` with the given data and metadata.
    #[must_use]
    pub const fn new(data: T, collection: CollectionInfo) -> Self {
        Self { data, collection }
    }

    /// Consumes the response and returns the inner data.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Returns a reference to the inner data.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Returns the collection metadata.
    #[must_use]
    pub const fn collection(&self) -> CollectionInfo {
        self.collection
    }

    /// Total number of matching records, from `X-WP-Total`.
    #[must_use]
    pub const fn total(&self) -> Option<u64> {
        self.collection.total
    }

    /// Total number of pages, from `X-WP-TotalPages`.
    #[must_use]
    pub const fn total_pages(&self) -> Option<u64> {
        self.collection.total_pages
    }

    /// Returns `true` if pages exist beyond `page` (1-based).
    ///
    /// The client never fetches those pages itself; pass `page` in the
    /// list params to request one.
    #[must_use]
    pub fn has_more_pages(&self, page: u64) -> bool {
        self.collection.has_more_pages(page)
    }

    /// Maps the inner data to a new type, preserving metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> ResourceResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ResourceResponse {
            data: f(self.data),
            collection: self.collection,
        }
    }
}

impl<T: DeserializeOwned> ResourceResponse<T> {
    /// Decodes an HTTP response body into `T`, keeping its collection metadata.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::UnexpectedShape`] if the body does not match `T`.
    pub fn from_http_response(response: HttpResponse, url: &str) -> Result<Self, DecodeError> {
        let data = serde_json::from_value(response.body).map_err(|source| {
            DecodeError::UnexpectedShape {
                url: url.to_string(),
                expected: std::any::type_name::<T>(),
                source,
            }
        })?;

        Ok(Self::new(data, response.collection))
    }
}

impl<T> Deref for ResourceResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for ResourceResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

// Verify ResourceResponse is Send + Sync when T is Send + Sync
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceResponse<String>>();
    assert_send_sync::<ResourceResponse<Vec<String>>>();
};
