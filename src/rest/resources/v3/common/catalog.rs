//! Catalog types embedded in products and categories.
//!
//! Images, dimensions, term references and attributes are nested inside
//! product and category bodies; none of them are fetched on their own.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// An image attached to a product or category.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::rest::resources::Image;
///
/// let image: Image = serde_json::from_str(
///     r#"{"id":792,"src":"https://shop.example.com/hoodie.jpg","name":"","alt":""}"#,
/// ).unwrap();
///
/// assert_eq!(image.id, Some(792));
/// assert_eq!(image.src.as_deref(), Some("https://shop.example.com/hoodie.jpg"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Image {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_created: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_created_gmt: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified_gmt: Option<NaiveDateTime>,
    /// The image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// Package dimensions. WooCommerce sends each side as a string, in the
/// store's configured unit.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Dimensions {
    #[serde(default)]
    pub length: String,
    #[serde(default)]
    pub width: String,
    #[serde(default)]
    pub height: String,
}

/// A reference to a category or tag inside a product body.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TermRef {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
}

/// A product attribute, either global (`id > 0`) or local to the product (`id == 0`).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductAttribute {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    /// Whether the attribute is shown on the product page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    /// Whether the attribute is used for variations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variation: Option<bool>,
    #[serde(default)]
    pub options: Vec<String>,
}

/// The default attribute value preselected for a variable product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DefaultAttribute {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub option: String,
}
