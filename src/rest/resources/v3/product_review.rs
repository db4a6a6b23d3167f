//! Product review resource implementation.
//!
//! Reviews are listed across all products; filter by `product` to narrow
//! them to specific product ids.
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::rest::Resource;
//! use woocommerce_api::rest::resources::{ProductReview, ProductReviewListParams};
//!
//! let params = ProductReviewListParams {
//!     product: Some(vec![22]),
//!     ..Default::default()
//! };
//! let reviews = ProductReview::all(&client, Some(params)).await?;
//! ```

use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::rest::{Resource, ResourceDescriptor};

use super::common::SortOrder;

/// Moderation status of a review.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    #[default]
    Approved,
    /// Awaiting moderation.
    Hold,
    Spam,
    Unspam,
    Trash,
    Untrash,
    /// Any status. Only meaningful as a list filter.
    All,
    #[serde(other)]
    Other,
}

/// A product review.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductReview {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_created: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_created_gmt: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_permalink: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ReviewStatus>,
    /// Reviewer display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewer_email: Option<String>,
    /// Review content, as HTML.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,
    /// Star rating, 0 to 5.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    /// Whether the reviewer bought the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    /// Avatar URLs keyed by pixel size (`"24"`, `"48"`, `"96"`).
    #[serde(default)]
    pub reviewer_avatar_urls: HashMap<String, String>,
}

impl Resource for ProductReview {
    type ListParams = ProductReviewListParams;

    const DESCRIPTOR: ResourceDescriptor =
        ResourceDescriptor::new("ProductReview", "products/reviews");

    fn get_id(&self) -> Option<u64> {
        self.id
    }
}

/// Parameters for listing product reviews.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductReviewListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orderby: Option<String>,
    /// Reviewer user ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewer: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewer_exclude: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewer_email: Option<String>,
    /// Product ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ReviewStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{ArrayFormat, Query};

    #[test]
    fn test_review_deserialization() {
        let json = r#"{
            "id": 22,
            "date_created": "2018-10-18T17:59:17",
            "date_created_gmt": "2018-10-18T20:59:17",
            "product_id": 22,
            "status": "approved",
            "reviewer": "John Doe",
            "reviewer_email": "john.doe@example.com",
            "review": "<p>Nice album!</p>\n",
            "rating": 5,
            "verified": false,
            "reviewer_avatar_urls": {
                "24": "https://secure.gravatar.com/avatar/8eb1b522f60d11fa897de1dc6351b7e8?s=24&d=mm&r=g",
                "48": "https://secure.gravatar.com/avatar/8eb1b522f60d11fa897de1dc6351b7e8?s=48&d=mm&r=g"
            }
        }"#;

        let review: ProductReview = serde_json::from_str(json).unwrap();

        assert_eq!(review.id, Some(22));
        assert_eq!(review.status, Some(ReviewStatus::Approved));
        assert_eq!(review.rating, Some(5));
        assert_eq!(review.reviewer.as_deref(), Some("John Doe"));
        assert!(review.reviewer_avatar_urls.contains_key("48"));
    }

    #[test]
    fn test_review_status_hold() {
        let review: ProductReview = serde_json::from_str(r#"{"id":1,"status":"hold"}"#).unwrap();
        assert_eq!(review.status, Some(ReviewStatus::Hold));
        assert!(review.reviewer_avatar_urls.is_empty());
    }

    #[test]
    fn test_review_list_params_to_query() {
        let params = ProductReviewListParams {
            product: Some(vec![22, 23]),
            status: Some(ReviewStatus::All),
            ..Default::default()
        };

        let query = Query::from_params(&params).unwrap();
        assert_eq!(
            query.to_query_string(ArrayFormat::Bracket),
            "product[]=22&product[]=23&status=all"
        );
    }

    #[test]
    fn test_review_descriptor() {
        assert_eq!(ProductReview::DESCRIPTOR.name, "ProductReview");
        assert_eq!(
            ProductReview::DESCRIPTOR.collection_path(),
            "/products/reviews"
        );
    }
}
