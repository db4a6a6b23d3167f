//! HTTP response types for the WooCommerce API client.

use std::collections::HashMap;

/// Collection metadata WooCommerce attaches to list responses.
///
/// Read from the `X-WP-Total` and `X-WP-TotalPages` headers. The client
/// exposes these values but never follows them to fetch more pages.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::clients::CollectionInfo;
///
/// let info = CollectionInfo { total: Some(42), total_pages: Some(5) };
/// assert!(info.has_more_pages(1));
/// assert!(!info.has_more_pages(5));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectionInfo {
    /// Total number of records matching the query.
    pub total: Option<u64>,
    /// Total number of pages at the requested `per_page`.
    pub total_pages: Option<u64>,
}

impl CollectionInfo {
    /// Returns `true` if pages exist beyond `page` (1-based).
    #[must_use]
    pub fn has_more_pages(&self, page: u64) -> bool {
        self.total_pages.is_some_and(|pages| page < pages)
    }
}

/// A successful response from the WooCommerce API.
///
/// Header names are stored lowercase.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub status: u16,
    /// Response headers, lowercase name to values.
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed JSON body.
    pub body: serde_json::Value,
    /// Collection metadata parsed from the headers.
    pub collection: CollectionInfo,
}

impl HttpResponse {
    /// Creates a response, parsing collection metadata from the headers.
    #[must_use]
    pub fn new(
        status: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        let number = |name: &str| {
            headers
                .get(name)
                .and_then(|values| values.first())
                .and_then(|value| value.trim().parse::<u64>().ok())
        };

        let collection = CollectionInfo {
            total: number("x-wp-total"),
            total_pages: number("x-wp-totalpages"),
        };

        Self {
            status,
            headers,
            body,
            collection,
        }
    }

    /// Returns `true` for 2xx status codes.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status >= 200 && self.status <= 299
    }

    /// Returns the first value of a header, by case-insensitive name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn headers(pairs: &[(&str, &str)]) -> HashMap<String, Vec<String>> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), vec![(*v).to_string()]))
            .collect()
    }

    #[test]
    fn test_collection_info_parsed_from_headers() {
        let response = HttpResponse::new(
            200,
            headers(&[("x-wp-total", "42"), ("x-wp-totalpages", "5")]),
            json!([]),
        );

        assert_eq!(response.collection.total, Some(42));
        assert_eq!(response.collection.total_pages, Some(5));
    }

    #[test]
    fn test_collection_info_absent_or_malformed() {
        let response = HttpResponse::new(200, headers(&[("x-wp-total", "lots")]), json!({}));

        assert_eq!(response.collection, CollectionInfo::default());
    }

    #[test]
    fn test_has_more_pages() {
        let info = CollectionInfo {
            total: Some(25),
            total_pages: Some(3),
        };
        assert!(info.has_more_pages(1));
        assert!(info.has_more_pages(2));
        assert!(!info.has_more_pages(3));
        assert!(!CollectionInfo::default().has_more_pages(1));
    }

    #[test]
    fn test_is_ok_covers_2xx_only() {
        assert!(HttpResponse::new(200, HashMap::new(), json!({})).is_ok());
        assert!(HttpResponse::new(204, HashMap::new(), json!({})).is_ok());
        assert!(!HttpResponse::new(301, HashMap::new(), json!({})).is_ok());
        assert!(!HttpResponse::new(404, HashMap::new(), json!({})).is_ok());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let response = HttpResponse::new(200, headers(&[("x-wp-total", "3")]), json!([]));
        assert_eq!(response.header("X-WP-Total"), Some("3"));
        assert_eq!(response.header("Link"), None);
    }
}
