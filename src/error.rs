//! Configuration error types for the WooCommerce API client.
//!
//! All configuration constructors return `Result<T, ConfigError>` so invalid
//! credentials are rejected when the configuration is built, not when the
//! first request goes out.
//!
//! # Example
//!
//! ```rust
//! use woocommerce_api::{ConfigError, ConsumerKey};
//!
//! let result = ConsumerKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyConsumerKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while building a [`WooConfig`](crate::WooConfig).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Consumer key cannot be empty.
    #[error("Consumer key cannot be empty. Please provide a valid WooCommerce consumer key (ck_...).")]
    EmptyConsumerKey,

    /// Consumer secret cannot be empty.
    #[error("Consumer secret cannot be empty. Please provide a valid WooCommerce consumer secret (cs_...).")]
    EmptyConsumerSecret,

    /// Store URL is invalid.
    #[error("Invalid store URL '{url}'. Please provide a URL with scheme (e.g., 'https://shop.example.com').")]
    InvalidStoreUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected one of 'wc/v1', 'wc/v2' or 'wc/v3'.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A required environment variable is unset or empty.
    #[error("Missing environment variable '{name}'. Set it or build the configuration explicitly.")]
    MissingEnvironmentVariable {
        /// The name of the variable.
        name: &'static str,
    },
}
