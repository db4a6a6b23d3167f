//! Configuration types for the WooCommerce API client.
//!
//! # Overview
//!
//! - [`WooConfig`]: immutable client configuration (store URL and credentials)
//! - [`WooConfigBuilder`]: a builder for constructing [`WooConfig`] instances
//! - [`StoreUrl`], [`ConsumerKey`], [`ConsumerSecret`]: validated newtypes
//! - [`ApiVersion`]: the WooCommerce REST namespace to target
//!
//! # Example
//!
//! ```rust
//! use woocommerce_api::{WooConfig, StoreUrl, ConsumerKey, ConsumerSecret};
//!
//! let config = WooConfig::builder()
//!     .store_url(StoreUrl::new("https://shop.example.com").unwrap())
//!     .consumer_key(ConsumerKey::new("ck_1234").unwrap())
//!     .consumer_secret(ConsumerSecret::new("cs_5678").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_root(), "https://shop.example.com/wp-json/wc/v3");
//! ```
//!
//! # Environment
//!
//! [`WooConfig::from_env`] reads the same variables the storefront uses:
//! `WOOCOMMERCE_URL`, `WOOCOMMERCE_CONSUMER_KEY` and
//! `WOOCOMMERCE_CONSUMER_SECRET`.

mod newtypes;
mod version;

use std::time::Duration;

pub use newtypes::{ConsumerKey, ConsumerSecret, StoreUrl};
pub use version::ApiVersion;

use crate::clients::ArrayFormat;
use crate::error::ConfigError;

/// Environment variable holding the store URL.
pub const ENV_STORE_URL: &str = "WOOCOMMERCE_URL";
/// Environment variable holding the consumer key.
pub const ENV_CONSUMER_KEY: &str = "WOOCOMMERCE_CONSUMER_KEY";
/// Environment variable holding the consumer secret.
pub const ENV_CONSUMER_SECRET: &str = "WOOCOMMERCE_CONSUMER_SECRET";

/// Configuration for the WooCommerce API client.
///
/// Built once and passed to the client constructor; nothing in the crate
/// reads process-wide state after that.
///
/// # Thread Safety
///
/// `WooConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct WooConfig {
    store_url: StoreUrl,
    consumer_key: ConsumerKey,
    consumer_secret: ConsumerSecret,
    api_version: ApiVersion,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
    array_format: ArrayFormat,
}

impl WooConfig {
    /// Creates a new builder for constructing a `WooConfig`.
    #[must_use]
    pub fn builder() -> WooConfigBuilder {
        WooConfigBuilder::new()
    }

    /// Loads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvironmentVariable`] if any of the three
    /// variables is unset or empty, or a validation error if a value is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads the configuration through an arbitrary variable lookup.
    ///
    /// [`from_env`](Self::from_env) is this with `std::env::var`; tests and
    /// secret managers can supply their own lookup.
    ///
    /// # Errors
    ///
    /// Same as [`from_env`](Self::from_env).
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use woocommerce_api::WooConfig;
    ///
    /// let vars = HashMap::from([
    ///     ("WOOCOMMERCE_URL", "https://shop.example.com"),
    ///     ("WOOCOMMERCE_CONSUMER_KEY", "ck_1234"),
    ///     ("WOOCOMMERCE_CONSUMER_SECRET", "cs_5678"),
    /// ]);
    ///
    /// let config = WooConfig::from_lookup(|name| vars.get(name).map(ToString::to_string)).unwrap();
    /// assert_eq!(config.consumer_key().as_ref(), "ck_1234");
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::MissingEnvironmentVariable { name })
        };

        let store_url = StoreUrl::new(require(ENV_STORE_URL)?)?;
        let consumer_key = ConsumerKey::new(require(ENV_CONSUMER_KEY)?)?;
        let consumer_secret = ConsumerSecret::new(require(ENV_CONSUMER_SECRET)?)?;

        Self::builder()
            .store_url(store_url)
            .consumer_key(consumer_key)
            .consumer_secret(consumer_secret)
            .build()
    }

    /// Returns the store URL.
    #[must_use]
    pub const fn store_url(&self) -> &StoreUrl {
        &self.store_url
    }

    /// Returns the consumer key.
    #[must_use]
    pub const fn consumer_key(&self) -> &ConsumerKey {
        &self.consumer_key
    }

    /// Returns the consumer secret.
    #[must_use]
    pub const fn consumer_secret(&self) -> &ConsumerSecret {
        &self.consumer_secret
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> ApiVersion {
        self.api_version
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the per-request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns how array query values are encoded.
    #[must_use]
    pub const fn array_format(&self) -> ArrayFormat {
        self.array_format
    }

    /// Returns the REST API root, e.g. `https://shop.example.com/wp-json/wc/v3`.
    #[must_use]
    pub fn api_root(&self) -> String {
        format!("{}/wp-json/{}", self.store_url, self.api_version)
    }
}

// Verify WooConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WooConfig>();
};

/// Builder for constructing [`WooConfig`] instances.
///
/// Required fields are `store_url`, `consumer_key` and `consumer_secret`.
///
/// # Defaults
///
/// - `api_version`: [`ApiVersion::V3`]
/// - `user_agent_prefix`: `None`
/// - `timeout`: `None` (no per-request timeout)
/// - `array_format`: [`ArrayFormat::Repeat`]
#[derive(Debug, Default)]
pub struct WooConfigBuilder {
    store_url: Option<StoreUrl>,
    consumer_key: Option<ConsumerKey>,
    consumer_secret: Option<ConsumerSecret>,
    api_version: Option<ApiVersion>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
    array_format: Option<ArrayFormat>,
}

impl WooConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the store URL (required).
    #[must_use]
    pub fn store_url(mut self, url: StoreUrl) -> Self {
        self.store_url = Some(url);
        self
    }

    /// Sets the consumer key (required).
    #[must_use]
    pub fn consumer_key(mut self, key: ConsumerKey) -> Self {
        self.consumer_key = Some(key);
        self
    }

    /// Sets the consumer secret (required).
    #[must_use]
    pub fn consumer_secret(mut self, secret: ConsumerSecret) -> Self {
        self.consumer_secret = Some(secret);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub const fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets a timeout applied to every request, from connect to body read.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets how array query values are encoded.
    #[must_use]
    pub const fn array_format(mut self, format: ArrayFormat) -> Self {
        self.array_format = Some(format);
        self
    }

    /// Builds the [`WooConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `store_url`,
    /// `consumer_key` or `consumer_secret` is not set.
    pub fn build(self) -> Result<WooConfig, ConfigError> {
        let store_url = self
            .store_url
            .ok_or(ConfigError::MissingRequiredField { field: "store_url" })?;
        let consumer_key = self
            .consumer_key
            .ok_or(ConfigError::MissingRequiredField {
                field: "consumer_key",
            })?;
        let consumer_secret = self
            .consumer_secret
            .ok_or(ConfigError::MissingRequiredField {
                field: "consumer_secret",
            })?;

        Ok(WooConfig {
            store_url,
            consumer_key,
            consumer_secret,
            api_version: self.api_version.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
            array_format: self.array_format.unwrap_or_default(),
        })
    }
}
