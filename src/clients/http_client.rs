//! HTTP client for WooCommerce API communication.
//!
//! This module provides the [`HttpClient`] type, which owns the connection
//! pool and the authenticated default headers, builds request URLs and
//! performs the status check on every response.

use std::collections::HashMap;
use std::fmt;

use base64::prelude::*;

use crate::clients::errors::{ClientError, DecodeError, HttpResponseError};
use crate::clients::http_response::HttpResponse;
use crate::clients::query::{ArrayFormat, Query};
use crate::config::WooConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making authenticated GET requests to a WooCommerce store.
///
/// The client handles:
/// - API root construction from the store URL and API version
/// - Default headers including User-Agent and basic-auth credentials
/// - Query string encoding
/// - Status checking and JSON parsing
///
/// Requests are never retried.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use woocommerce_api::clients::HttpClient;
///
/// let client = HttpClient::new(&config)?;
/// let url = client.build_url("/products", None);
/// let response = client.get(&url).await?;
/// println!("{} products", response.collection.total.unwrap_or(0));
/// ```
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// API root (e.g., `https://shop.example.com/wp-json/wc/v3`).
    api_root: String,
    /// Encoding for array query values.
    array_format: ArrayFormat,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut header_names: Vec<&str> = self
            .default_headers
            .keys()
            .map(String::as_str)
            .filter(|name| !name.eq_ignore_ascii_case("authorization"))
            .collect();
        header_names.sort_unstable();

        f.debug_struct("HttpClient")
            .field("api_root", &self.api_root)
            .field("array_format", &self.array_format)
            .field("headers", &header_names)
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] if the underlying reqwest client
    /// cannot be created (e.g., TLS initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use woocommerce_api::{WooConfig, StoreUrl, ConsumerKey, ConsumerSecret};
    /// use woocommerce_api::clients::HttpClient;
    ///
    /// let config = WooConfig::builder()
    ///     .store_url(StoreUrl::new("https://shop.example.com").unwrap())
    ///     .consumer_key(ConsumerKey::new("ck_1234").unwrap())
    ///     .consumer_secret(ConsumerSecret::new("cs_5678").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = HttpClient::new(&config).unwrap();
    /// assert_eq!(client.api_root(), "https://shop.example.com/wp-json/wc/v3");
    /// ```
    pub fn new(config: &WooConfig) -> Result<Self, ClientError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}WooCommerce API Library v{SDK_VERSION} | Rust {rust_version}"
        );

        let credentials = format!(
            "{}:{}",
            config.consumer_key().as_ref(),
            config.consumer_secret().as_ref()
        );
        let authorization = format!("Basic {}", BASE64_STANDARD.encode(credentials));

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Authorization".to_string(), authorization);

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            api_root: config.api_root(),
            array_format: config.array_format(),
            default_headers,
        })
    }

    /// Returns the API root for this client.
    #[must_use]
    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    /// Returns the array encoding used for query strings.
    #[must_use]
    pub const fn array_format(&self) -> ArrayFormat {
        self.array_format
    }

    /// Returns the default headers for this client.
    ///
    /// The map includes the `Authorization` header, so avoid logging it.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Builds the full URL for `path` under the API root.
    ///
    /// `path` may be given with or without a leading `/`. The query string
    /// is appended after a `?` only when it encodes to something non-empty,
    /// so `None` and an empty [`Query`] produce the same URL.
    #[must_use]
    pub fn build_url(&self, path: &str, query: Option<&Query>) -> String {
        let path = path.trim_start_matches('/');
        let mut url = if path.is_empty() {
            self.api_root.clone()
        } else {
            format!("{}/{path}", self.api_root)
        };

        if let Some(query) = query {
            let encoded = query.to_query_string(self.array_format);
            if !encoded.is_empty() {
                url.push('?');
                url.push_str(&encoded);
            }
        }

        url
    }

    /// Sends an authenticated GET request to `url`.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - [`ClientError::Transport`] if the request cannot be sent or a 2xx
    ///   body cannot be read
    /// - [`ClientError::Http`] for any non-2xx status, even when its body
    ///   cannot be read
    /// - [`ClientError::Decode`] if a 2xx body is not valid JSON
    pub async fn get(&self, url: &str) -> Result<HttpResponse, ClientError> {
        let mut req_builder = self.client.get(url);
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        tracing::debug!(url, "GET");
        let res = req_builder.send().await?;

        let status = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());

        if !(200..=299).contains(&status) {
            let body_text = res.text().await.unwrap_or_default();
            tracing::debug!(url, status, bytes = body_text.len(), "error response received");
            let body = serde_json::from_str(&body_text).unwrap_or(serde_json::Value::Null);
            return Err(HttpResponseError::from_body(status, url, &body).into());
        }

        let body_text = res.text().await?;
        tracing::debug!(url, status, bytes = body_text.len(), "response received");

        let body = serde_json::from_str(&body_text).map_err(|source| DecodeError::InvalidJson {
            url: url.to_string(),
            source,
        })?;

        Ok(HttpResponse::new(status, headers, body))
    }

    /// Sends an authenticated GET request and returns the parsed JSON body.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub async fn fetch_json(&self, url: &str) -> Result<serde_json::Value, ClientError> {
        Ok(self.get(url).await?.body)
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
