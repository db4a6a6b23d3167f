//! Path descriptors for REST resources.
//!
//! Every WooCommerce collection lives at a fixed sub-path of the API root,
//! with single records one segment deeper:
//!
//! - `products` and `products/{id}`
//! - `products/categories` and `products/categories/{id}`
//!
//! # Example
//!
//! ```rust
//! use woocommerce_api::rest::ResourceDescriptor;
//!
//! const CATEGORIES: ResourceDescriptor =
//!     ResourceDescriptor::new("ProductCategory", "products/categories");
//!
//! assert_eq!(CATEGORIES.collection_path(), "/products/categories");
//! assert_eq!(CATEGORIES.item_path(15), "/products/categories/15");
//! ```

use std::fmt::Display;

/// Identifies a REST collection: a display name and a path under the API root.
///
/// The path is written without leading or trailing slashes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceDescriptor {
    /// The resource name, used in logs and error messages (e.g., "Product").
    pub name: &'static str,
    /// The collection path (e.g., "products/reviews").
    pub path: &'static str,
}

impl ResourceDescriptor {
    /// Creates a new descriptor.
    #[must_use]
    pub const fn new(name: &'static str, path: &'static str) -> Self {
        Self { name, path }
    }

    /// Returns the collection path with a leading `/`.
    #[must_use]
    pub fn collection_path(&self) -> String {
        format!("/{}", self.path)
    }

    /// Returns the path of a single record.
    #[must_use]
    pub fn item_path(&self, id: impl Display) -> String {
        format!("/{}/{id}", self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REVIEWS: ResourceDescriptor = ResourceDescriptor::new("ProductReview", "products/reviews");

    #[test]
    fn test_collection_path_has_leading_slash() {
        assert_eq!(REVIEWS.collection_path(), "/products/reviews");
    }

    #[test]
    fn test_item_path_appends_id() {
        assert_eq!(REVIEWS.item_path(42), "/products/reviews/42");
        assert_eq!(REVIEWS.item_path("42"), "/products/reviews/42");
    }

    #[test]
    fn test_descriptor_is_const_constructible() {
        assert_eq!(REVIEWS.name, "ProductReview");
        assert_eq!(REVIEWS.path, "products/reviews");
    }
}
