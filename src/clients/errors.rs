//! Error types for WooCommerce API requests.
//!
//! Every client operation fails with a [`ClientError`], whose variants
//! separate the failure kinds a caller may want to handle differently:
//!
//! - [`ClientError::Config`]: missing or invalid configuration
//! - [`ClientError::Transport`]: network, DNS, TLS or timeout failure
//! - [`ClientError::Http`]: the store answered with a non-2xx status
//! - [`ClientError::Decode`]: the body was not JSON, or not the expected shape
//! - [`ClientError::InvalidParams`]: typed list params could not become a query
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::ClientError;
//!
//! match client.product(42).await {
//!     Ok(product) => println!("{}", product.name),
//!     Err(ClientError::Http(e)) if e.status == 404 => println!("no such product"),
//!     Err(ClientError::Transport(e)) => println!("store unreachable: {e}"),
//!     Err(e) => println!("request failed: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::error::ConfigError;

/// Error returned when the store answers with a non-2xx status.
///
/// WooCommerce error bodies look like
/// `{"code":"woocommerce_rest_product_invalid_id","message":"Invalid ID.","data":{"status":404}}`;
/// `code` and `message` are lifted from that body when present.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("HTTP error! status: {status} for {url}{}", message_suffix(.message))]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub status: u16,
    /// The URL that was requested.
    pub url: String,
    /// WooCommerce error code (e.g. `woocommerce_rest_product_invalid_id`).
    pub code: Option<String>,
    /// Human-readable error message from the response body.
    pub message: Option<String>,
}

impl HttpResponseError {
    /// Builds the error from a status, URL and (possibly non-JSON) error body.
    #[must_use]
    pub fn from_body(status: u16, url: impl Into<String>, body: &serde_json::Value) -> Self {
        let field = |name: &str| {
            body.get(name)
                .and_then(serde_json::Value::as_str)
                .map(ToString::to_string)
        };

        Self {
            status,
            url: url.into(),
            code: field("code"),
            message: field("message"),
        }
    }
}

fn message_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(" ({m})"))
        .unwrap_or_default()
}

/// Error returned when a successful response cannot be decoded.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The body is not valid JSON.
    #[error("Response from {url} is not valid JSON: {source}")]
    InvalidJson {
        /// The URL that was requested.
        url: String,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The body is JSON but does not match the expected record shape.
    #[error("Response from {url} does not match {expected}: {source}")]
    UnexpectedShape {
        /// The URL that was requested.
        url: String,
        /// The type the body was decoded into (e.g. `Vec<Product>`).
        expected: &'static str,
        /// The underlying decode error.
        #[source]
        source: serde_json::Error,
    },
}

/// Unified error type for all client operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Configuration is missing or invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Network or connection error, including timeouts.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A non-2xx HTTP response.
    #[error(transparent)]
    Http(#[from] HttpResponseError),

    /// The response body could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// A list params struct could not be converted to a query string.
    #[error("Failed to serialize query params: {0}")]
    InvalidParams(#[from] serde_json::Error),
}

impl ClientError {
    /// Returns the HTTP status for [`ClientError::Http`] errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => Some(e.status),
            _ => None,
        }
    }

    /// Returns `true` if the store reported the resource as missing (404).
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.status(), Some(404))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_response_error_includes_status_and_url() {
        let error = HttpResponseError {
            status: 404,
            url: "https://shop.example.com/wp-json/wc/v3/products/42".to_string(),
            code: None,
            message: None,
        };

        assert_eq!(
            error.to_string(),
            "HTTP error! status: 404 for https://shop.example.com/wp-json/wc/v3/products/42"
        );
    }

    #[test]
    fn test_http_response_error_from_woocommerce_body() {
        let body = json!({
            "code": "woocommerce_rest_product_invalid_id",
            "message": "Invalid ID.",
            "data": {"status": 404}
        });

        let error = HttpResponseError::from_body(404, "https://shop.example.com/x", &body);

        assert_eq!(error.status, 404);
        assert_eq!(
            error.code.as_deref(),
            Some("woocommerce_rest_product_invalid_id")
        );
        assert_eq!(error.message.as_deref(), Some("Invalid ID."));
        assert!(error.to_string().ends_with("(Invalid ID.)"));
    }

    #[test]
    fn test_http_response_error_from_non_object_body() {
        let error = HttpResponseError::from_body(502, "https://shop.example.com/x", &json!(null));

        assert_eq!(error.status, 502);
        assert!(error.code.is_none());
        assert!(error.message.is_none());
    }

    #[test]
    fn test_decode_error_messages() {
        let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let error = DecodeError::InvalidJson {
            url: "https://shop.example.com/x".to_string(),
            source,
        };
        assert!(error.to_string().contains("not valid JSON"));

        let source = serde_json::from_str::<Vec<u64>>("{}").unwrap_err();
        let error = DecodeError::UnexpectedShape {
            url: "https://shop.example.com/x".to_string(),
            expected: "Vec<u64>",
            source,
        };
        assert!(error.to_string().contains("does not match Vec<u64>"));
    }

    #[test]
    fn test_client_error_status_helpers() {
        let not_found = ClientError::Http(HttpResponseError {
            status: 404,
            url: "u".to_string(),
            code: None,
            message: None,
        });
        assert_eq!(not_found.status(), Some(404));
        assert!(not_found.is_not_found());

        let config = ClientError::from(ConfigError::EmptyConsumerKey);
        assert_eq!(config.status(), None);
        assert!(!config.is_not_found());
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let _: &dyn std::error::Error = &HttpResponseError {
            status: 400,
            url: "u".to_string(),
            code: None,
            message: None,
        };
        let _: &dyn std::error::Error = &ClientError::Config(ConfigError::EmptyConsumerSecret);
    }
}
