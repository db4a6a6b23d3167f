//! REST resource traits for read-only WooCommerce collections.
//!
//! This module defines the [`Resource`] trait, which ties a record type to
//! its collection path, and the [`SlugResource`] trait for records that can
//! be looked up by slug. Implementors get `all()`, `find()` and, for slug
//! resources, `find_by_slug()`.
//!
//! # Implementing a Resource
//!
//! 1. Define a struct with serde derives
//! 2. Implement [`Resource`] with a descriptor and a list params type
//! 3. Optionally implement [`SlugResource`]
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::rest::{Resource, ResourceDescriptor};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, Deserialize)]
//! pub struct ShippingZone {
//!     pub id: Option<u64>,
//!     pub name: String,
//! }
//!
//! impl Resource for ShippingZone {
//!     type ListParams = ();
//!
//!     const DESCRIPTOR: ResourceDescriptor =
//!         ResourceDescriptor::new("ShippingZone", "shipping/zones");
//!
//!     fn get_id(&self) -> Option<u64> {
//!         self.id
//!     }
//! }
//!
//! // Usage:
//! let zones = ShippingZone::all(&client, None).await?;
//! let zone = ShippingZone::find(&client, 5).await?;
//! ```

use serde::{de::DeserializeOwned, Serialize};

use crate::clients::{ClientError, Query, ResourceClient};
use crate::rest::{ResourceDescriptor, ResourceResponse};

/// A WooCommerce record type that can be listed and fetched by id.
///
/// # Associated Types
///
/// - `ListParams`: typed filters for `all()` (use `()` if none)
///
/// # Associated Constants
///
/// - `DESCRIPTOR`: the resource name and collection path
///
/// # Required Bounds
///
/// Resources must be deserializable, cloneable, and thread-safe.
#[allow(async_fn_in_trait)]
pub trait Resource: DeserializeOwned + Clone + Send + Sync + Sized {
    /// Parameters for `all()` operations (filtering, paging, ordering).
    ///
    /// Use `()` if no parameters are needed.
    type ListParams: Serialize + Default + Send + Sync;

    /// The resource name and collection path.
    const DESCRIPTOR: ResourceDescriptor;

    /// Returns the record's id, if the body carried one.
    fn get_id(&self) -> Option<u64>;

    /// Lists records matching the given parameters.
    ///
    /// Returns a single page. `total()` and `total_pages()` on the response
    /// report what WooCommerce counted; request further pages through the
    /// `page` field of the params.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidParams`] if the params cannot be
    /// serialized, or any error from the request itself.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let params = ProductListParams { per_page: Some(20), ..Default::default() };
    /// let response = Product::all(&client, Some(params)).await?;
    /// for product in response.iter() {
    ///     println!("Product: {}", product.name);
    /// }
    /// ```
    async fn all(
        client: &ResourceClient,
        params: Option<Self::ListParams>,
    ) -> Result<ResourceResponse<Vec<Self>>, ClientError> {
        let query = params.map(|p| Query::from_params(&p)).transpose()?;
        client.fetch_collection::<Self>(query.as_ref()).await
    }

    /// Finds a single record by id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] with status 404 if the record doesn't
    /// exist, or any other error from the request.
    async fn find(client: &ResourceClient, id: u64) -> Result<ResourceResponse<Self>, ClientError> {
        client.fetch_item::<Self>(id).await
    }
}

/// A [`Resource`] whose collection accepts a `slug` filter.
///
/// Implemented by products, product categories and product tags.
#[allow(async_fn_in_trait)]
pub trait SlugResource: Resource {
    /// Returns the record's slug, if the body carried one.
    fn slug(&self) -> Option<&str>;

    /// Finds the first record with the given slug.
    ///
    /// Returns `Ok(None)` when nothing matches. If several records share
    /// the slug, only the first one in the response is returned.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying list request.
    async fn find_by_slug(client: &ResourceClient, slug: &str) -> Result<Option<Self>, ClientError> {
        client.find_resource_by_slug::<Self>(slug).await
    }
}
