//! Resource client for the WooCommerce REST API.
//!
//! This module provides the [`ResourceClient`] type: one generic client that
//! lists, fetches by id and finds by slug for any [`Resource`] type, plus
//! per-resource shortcuts for the collections WooCommerce exposes.

use crate::clients::{ClientError, HttpClient, Query};
use crate::config::WooConfig;
use crate::rest::resources::{
    Customer, Order, Product, ProductCategory, ProductReview, ProductTag,
};
use crate::rest::{Resource, ResourceResponse, SlugResource};

/// Client for reading WooCommerce REST resources.
///
/// The client holds only immutable state (the configuration-derived
/// headers and the connection pool) and keeps no session between calls.
/// Every operation is a single GET followed by a status check and a typed
/// decode. Nothing is retried or paginated automatically.
///
/// # Thread Safety
///
/// `ResourceClient` is `Send + Sync`, making it safe to share across async
/// tasks (e.g., behind an `Arc`).
///
/// # Example
///
/// ```rust,ignore
/// use woocommerce_api::{ResourceClient, WooConfig};
/// use woocommerce_api::clients::Query;
///
/// let client = ResourceClient::new(&WooConfig::from_env()?)?;
///
/// let products = client.products(Some(&Query::new().with("per_page", 5))).await?;
/// let product = client.product(42).await?;
/// let hoodie = client.product_by_slug("hoodie").await?;
/// ```
#[derive(Debug)]
pub struct ResourceClient {
    http_client: HttpClient,
}

// Verify ResourceClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceClient>();
};

impl ResourceClient {
    /// Creates a new client from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] if the HTTP client cannot be built.
    pub fn new(config: &WooConfig) -> Result<Self, ClientError> {
        if config.api_version().is_deprecated() {
            tracing::warn!(
                "WooCommerce REST API namespace {} is deprecated; consider {}",
                config.api_version(),
                crate::config::ApiVersion::latest()
            );
        }

        let http_client = HttpClient::new(config)?;
        tracing::debug!(api_root = http_client.api_root(), "WooCommerce client ready");

        Ok(Self { http_client })
    }

    /// Creates a new client from `WOOCOMMERCE_URL`,
    /// `WOOCOMMERCE_CONSUMER_KEY` and `WOOCOMMERCE_CONSUMER_SECRET`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] naming the first missing or invalid
    /// variable.
    pub fn from_env() -> Result<Self, ClientError> {
        let config = WooConfig::from_env()?;
        Self::new(&config)
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Builds the full URL for `path` with an optional query.
    ///
    /// The URL is `{store}/wp-json/wc/v3{path}`, followed by `?` and the
    /// encoded query only if the query encodes to something non-empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use woocommerce_api::{ResourceClient, WooConfig, StoreUrl, ConsumerKey, ConsumerSecret};
    /// use woocommerce_api::clients::Query;
    ///
    /// let config = WooConfig::builder()
    ///     .store_url(StoreUrl::new("https://shop.example.com").unwrap())
    ///     .consumer_key(ConsumerKey::new("ck_1234").unwrap())
    ///     .consumer_secret(ConsumerSecret::new("cs_5678").unwrap())
    ///     .build()
    ///     .unwrap();
    /// let client = ResourceClient::new(&config).unwrap();
    ///
    /// let query = Query::new().with("slug", "widget");
    /// assert_eq!(
    ///     client.build_url("/products", Some(&query)),
    ///     "https://shop.example.com/wp-json/wc/v3/products?slug=widget"
    /// );
    /// ```
    #[must_use]
    pub fn build_url(&self, path: &str, query: Option<&Query>) -> String {
        self.http_client.build_url(path, query)
    }

    /// Sends an authenticated GET to `url` and returns the JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] for non-2xx responses,
    /// [`ClientError::Transport`] for network failures and
    /// [`ClientError::Decode`] if the body is not JSON.
    pub async fn fetch_json(&self, url: &str) -> Result<serde_json::Value, ClientError> {
        self.http_client.fetch_json(url).await
    }

    /// Fetches one page of a collection, with its total and page count.
    ///
    /// # Errors
    ///
    /// Same as [`fetch_json`](Self::fetch_json), plus
    /// [`DecodeError::UnexpectedShape`](crate::clients::DecodeError::UnexpectedShape)
    /// if the body is not an array of `T`.
    pub async fn fetch_collection<T: Resource>(
        &self,
        query: Option<&Query>,
    ) -> Result<ResourceResponse<Vec<T>>, ClientError> {
        let url = self.build_url(&T::DESCRIPTOR.collection_path(), query);
        let response = self.http_client.get(&url).await?;
        Ok(ResourceResponse::from_http_response(response, &url)?)
    }

    /// Fetches a single record at `{path}/{id}`, without a query string.
    ///
    /// # Errors
    ///
    /// Same as [`fetch_collection`](Self::fetch_collection), with the body
    /// expected to be a single `T`.
    pub async fn fetch_item<T: Resource>(
        &self,
        id: u64,
    ) -> Result<ResourceResponse<T>, ClientError> {
        let url = self.build_url(&T::DESCRIPTOR.item_path(id), None);
        let response = self.http_client.get(&url).await?;
        Ok(ResourceResponse::from_http_response(response, &url)?)
    }

    /// Lists records of `T`, decoded into a `Vec`.
    ///
    /// # Errors
    ///
    /// See [`fetch_collection`](Self::fetch_collection).
    pub async fn list_resource<T: Resource>(
        &self,
        query: Option<&Query>,
    ) -> Result<Vec<T>, ClientError> {
        Ok(self.fetch_collection::<T>(query).await?.into_inner())
    }

    /// Fetches a single record of `T` by id.
    ///
    /// # Errors
    ///
    /// See [`fetch_item`](Self::fetch_item). A missing record is
    /// [`ClientError::Http`] with status 404.
    pub async fn get_resource_by_id<T: Resource>(&self, id: u64) -> Result<T, ClientError> {
        Ok(self.fetch_item::<T>(id).await?.into_inner())
    }

    /// Finds the first record of `T` whose slug matches.
    ///
    /// Lists with a `slug` filter and returns the first element, or `None`
    /// when the list is empty. Duplicate slugs are not an error; only the
    /// first match is returned.
    ///
    /// # Errors
    ///
    /// See [`list_resource`](Self::list_resource).
    pub async fn find_resource_by_slug<T: SlugResource>(
        &self,
        slug: &str,
    ) -> Result<Option<T>, ClientError> {
        let query = Query::new().with("slug", slug);
        let records = self.list_resource::<T>(Some(&query)).await?;

        if records.len() > 1 {
            tracing::debug!(
                resource = T::DESCRIPTOR.name,
                slug,
                matches = records.len(),
                "slug matched several records; using the first"
            );
        }

        Ok(records.into_iter().next())
    }

    /// Lists products.
    ///
    /// # Errors
    ///
    /// See [`list_resource`](Self::list_resource).
    pub async fn products(&self, query: Option<&Query>) -> Result<Vec<Product>, ClientError> {
        self.list_resource(query).await
    }

    /// Fetches a product by id.
    ///
    /// # Errors
    ///
    /// See [`get_resource_by_id`](Self::get_resource_by_id).
    pub async fn product(&self, id: u64) -> Result<Product, ClientError> {
        self.get_resource_by_id(id).await
    }

    /// Finds a product by slug.
    ///
    /// # Errors
    ///
    /// See [`find_resource_by_slug`](Self::find_resource_by_slug).
    pub async fn product_by_slug(&self, slug: &str) -> Result<Option<Product>, ClientError> {
        self.find_resource_by_slug(slug).await
    }

    /// Lists orders.
    ///
    /// # Errors
    ///
    /// See [`list_resource`](Self::list_resource).
    pub async fn orders(&self, query: Option<&Query>) -> Result<Vec<Order>, ClientError> {
        self.list_resource(query).await
    }

    /// Fetches an order by id.
    ///
    /// # Errors
    ///
    /// See [`get_resource_by_id`](Self::get_resource_by_id).
    pub async fn order(&self, id: u64) -> Result<Order, ClientError> {
        self.get_resource_by_id(id).await
    }

    /// Lists customers.
    ///
    /// # Errors
    ///
    /// See [`list_resource`](Self::list_resource).
    pub async fn customers(&self, query: Option<&Query>) -> Result<Vec<Customer>, ClientError> {
        self.list_resource(query).await
    }

    /// Fetches a customer by id.
    ///
    /// # Errors
    ///
    /// See [`get_resource_by_id`](Self::get_resource_by_id).
    pub async fn customer(&self, id: u64) -> Result<Customer, ClientError> {
        self.get_resource_by_id(id).await
    }

    /// Lists product categories.
    ///
    /// # Errors
    ///
    /// See [`list_resource`](Self::list_resource).
    pub async fn categories(
        &self,
        query: Option<&Query>,
    ) -> Result<Vec<ProductCategory>, ClientError> {
        self.list_resource(query).await
    }

    /// Fetches a product category by id.
    ///
    /// # Errors
    ///
    /// See [`get_resource_by_id`](Self::get_resource_by_id).
    pub async fn category(&self, id: u64) -> Result<ProductCategory, ClientError> {
        self.get_resource_by_id(id).await
    }

    /// Finds a product category by slug.
    ///
    /// # Errors
    ///
    /// See [`find_resource_by_slug`](Self::find_resource_by_slug).
    pub async fn category_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<ProductCategory>, ClientError> {
        self.find_resource_by_slug(slug).await
    }

    /// Lists product tags.
    ///
    /// # Errors
    ///
    /// See [`list_resource`](Self::list_resource).
    pub async fn tags(&self, query: Option<&Query>) -> Result<Vec<ProductTag>, ClientError> {
        self.list_resource(query).await
    }

    /// Fetches a product tag by id.
    ///
    /// # Errors
    ///
    /// See [`get_resource_by_id`](Self::get_resource_by_id).
    pub async fn tag(&self, id: u64) -> Result<ProductTag, ClientError> {
        self.get_resource_by_id(id).await
    }

    /// Finds a product tag by slug.
    ///
    /// # Errors
    ///
    /// See [`find_resource_by_slug`](Self::find_resource_by_slug).
    pub async fn tag_by_slug(&self, slug: &str) -> Result<Option<ProductTag>, ClientError> {
        self.find_resource_by_slug(slug).await
    }

    /// Lists product reviews.
    ///
    /// # Errors
    ///
    /// See [`list_resource`](Self::list_resource).
    pub async fn reviews(&self, query: Option<&Query>) -> Result<Vec<ProductReview>, ClientError> {
        self.list_resource(query).await
    }

    /// Fetches a product review by id.
    ///
    /// # Errors
    ///
    /// See [`get_resource_by_id`](Self::get_resource_by_id).
    pub async fn review(&self, id: u64) -> Result<ProductReview, ClientError> {
        self.get_resource_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiVersion, ConsumerKey, ConsumerSecret, StoreUrl};

    fn create_test_client() -> ResourceClient {
        let config = WooConfig::builder()
            .store_url(StoreUrl::new("https://shop.example.com").unwrap())
            .consumer_key(ConsumerKey::new("ck_test").unwrap())
            .consumer_secret(ConsumerSecret::new("cs_test").unwrap())
            .build()
            .unwrap();
        ResourceClient::new(&config).unwrap()
    }

    #[test]
    fn test_build_url_without_query() {
        let client = create_test_client();

        assert_eq!(
            client.build_url("/products", None),
            "https://shop.example.com/wp-json/wc/v3/products"
        );
    }

    #[test]
    fn test_build_url_with_slug_query() {
        let client = create_test_client();
        let query = Query::new().with("slug", "widget");

        let url = client.build_url("/products", Some(&query));
        assert!(url.contains("slug=widget"));
        assert_eq!(url.matches('?').count(), 1);
    }

    #[test]
    fn test_build_url_for_item_has_no_query() {
        let client = create_test_client();

        let url = client.build_url(&Product::DESCRIPTOR.item_path(42), None);
        assert!(url.ends_with("/products/42"));
        assert!(!url.contains('?'));
    }

    #[test]
    fn test_build_url_respects_api_version() {
        let config = WooConfig::builder()
            .store_url(StoreUrl::new("https://shop.example.com").unwrap())
            .consumer_key(ConsumerKey::new("ck_test").unwrap())
            .consumer_secret(ConsumerSecret::new("cs_test").unwrap())
            .api_version(ApiVersion::V2)
            .build()
            .unwrap();
        let client = ResourceClient::new(&config).unwrap();

        assert_eq!(
            client.build_url("/orders", None),
            "https://shop.example.com/wp-json/wc/v2/orders"
        );
    }

    #[test]
    fn test_debug_output_omits_credentials() {
        let client = create_test_client();
        let debug_str = format!("{client:?}");

        assert!(debug_str.contains("ResourceClient"));
        assert!(!debug_str.contains("cs_test"));
        assert!(!debug_str.contains("Basic"));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ResourceClient>();
    }
}
