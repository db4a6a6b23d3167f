//! Product resource implementation.
//!
//! This module provides the Product resource, which represents a product in a
//! WooCommerce store. Products carry their categories, tags, images and
//! attributes inline.
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::rest::{Resource, SlugResource};
//! use woocommerce_api::rest::resources::{Product, ProductListParams, StockStatus};
//!
//! // Find a single product
//! let product = Product::find(&client, 794).await?;
//! println!("Product: {}", product.name);
//!
//! // List products with filters
//! let params = ProductListParams {
//!     stock_status: Some(StockStatus::InStock),
//!     per_page: Some(50),
//!     ..Default::default()
//! };
//! let products = Product::all(&client, Some(params)).await?;
//! println!("{} in stock", products.total().unwrap_or(0));
//!
//! // Look up by slug
//! if let Some(hoodie) = Product::find_by_slug(&client, "hoodie").await? {
//!     println!("{:?}", hoodie.price);
//! }
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::rest::{Resource, ResourceDescriptor, SlugResource};

use super::common::{
    DefaultAttribute, Dimensions, Image, MetaData, ProductAttribute, SortOrder, TermRef,
};

/// The publication status of a product.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Draft,
    Pending,
    Private,
    /// Published and visible in the catalog.
    #[default]
    Publish,
    Future,
    Trash,
    /// Any status. Only meaningful as a list filter.
    Any,
    /// A status added by a plugin.
    #[serde(other)]
    Other,
}

/// The product type.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    #[default]
    Simple,
    Grouped,
    External,
    Variable,
    /// A type added by a plugin (e.g., `subscription`, `bundle`).
    #[serde(other)]
    Other,
}

/// Stock availability.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    #[default]
    InStock,
    OutOfStock,
    OnBackorder,
    #[serde(other)]
    Other,
}

/// Where the product is shown.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum CatalogVisibility {
    /// Shop and search results.
    #[default]
    Visible,
    /// Shop only.
    Catalog,
    /// Search results only.
    Search,
    Hidden,
    #[serde(other)]
    Other,
}

/// A product in a WooCommerce store.
///
/// Prices are strings (e.g., `"21.99"`), empty when unset. Dates are in the
/// store's local time; the `_gmt` fields hold the UTC equivalents.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Product {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// The public product URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_created: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_created_gmt: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified_gmt: Option<NaiveDateTime>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub product_type: Option<ProductType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_visibility: Option<CatalogVisibility>,
    /// HTML description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// HTML short description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// The current price, sale price included.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regular_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_on_sale_from: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_on_sale_to: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_sale: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchasable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_sales: Option<u64>,
    #[serde(rename = "virtual", skip_serializing_if = "Option::is_none")]
    pub is_virtual: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub downloadable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manage_stock: Option<bool>,
    /// Stock level; `None` unless stock is managed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_status: Option<StockStatus>,
    /// Backorder policy: `no`, `notify` or `yes`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backorders: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sold_individually: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews_allowed: Option<bool>,
    /// Average review rating, e.g. `"4.50"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating_count: Option<u64>,
    #[serde(default)]
    pub related_ids: Vec<u64>,
    #[serde(default)]
    pub upsell_ids: Vec<u64>,
    #[serde(default)]
    pub cross_sell_ids: Vec<u64>,
    /// Parent product id, or `0`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u64>,
    #[serde(default)]
    pub categories: Vec<TermRef>,
    #[serde(default)]
    pub tags: Vec<TermRef>,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub attributes: Vec<ProductAttribute>,
    #[serde(default)]
    pub default_attributes: Vec<DefaultAttribute>,
    /// Variation ids for variable products.
    #[serde(default)]
    pub variations: Vec<u64>,
    /// Grouped product member ids.
    #[serde(default)]
    pub grouped_products: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_order: Option<i64>,
    #[serde(default)]
    pub meta_data: Vec<MetaData>,
}

impl Product {
    /// Returns the first image, which WooCommerce treats as the featured image.
    #[must_use]
    pub fn featured_image(&self) -> Option<&Image> {
        self.images.first()
    }

    /// Returns `true` if the product is in the category with the given slug.
    #[must_use]
    pub fn in_category(&self, slug: &str) -> bool {
        self.categories.iter().any(|c| c.slug == slug)
    }
}

impl Resource for Product {
    type ListParams = ProductListParams;

    const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor::new("Product", "products");

    fn get_id(&self) -> Option<u64> {
        self.id
    }
}

impl SlugResource for Product {
    fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }
}

/// Parameters for listing products.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProductListParams {
    /// Page of the collection (1-based).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Maximum number of items per page (default: 10, max: 100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,

    /// Limit results to those matching a string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    /// Only products published after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<NaiveDateTime>,

    /// Only products published before this date.
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

    /// Sort field: `date`, `id`, `include`, `title`, `slug`, `price`,
    /// `popularity` or `rating`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orderby: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Vec<u64>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub product_type: Option<ProductType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,

    /// Category id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Tag id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_sale: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_status: Option<StockStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{ArrayFormat, Query};

    const PRODUCT_JSON: &str = r#"{
        "id": 794,
        "name": "Premium Quality",
        "slug": "premium-quality-19",
        "permalink": "https://example.com/product/premium-quality-19/",
        "date_created": "2017-03-23T17:01:14",
        "date_created_gmt": "2017-03-23T20:01:14",
        "date_modified": "2017-03-23T17:01:14",
        "date_modified_gmt": "2017-03-23T20:01:14",
        "type": "simple",
        "status": "publish",
        "featured": false,
        "catalog_visibility": "visible",
        "description": "<p>Pellentesque habitant morbi tristique senectus.</p>\n",
        "short_description": "<p>Pellentesque habitant.</p>\n",
        "sku": "",
        "price": "21.99",
        "regular_price": "21.99",
        "sale_price": "",
        "date_on_sale_from": null,
        "date_on_sale_from_gmt": null,
        "date_on_sale_to": null,
        "on_sale": false,
        "purchasable": true,
        "total_sales": 0,
        "virtual": false,
        "downloadable": false,
        "downloads": [],
        "tax_status": "taxable",
        "tax_class": "",
        "manage_stock": false,
        "stock_quantity": null,
        "stock_status": "instock",
        "backorders": "no",
        "backorders_allowed": false,
        "sold_individually": false,
        "weight": "",
        "dimensions": {"length": "", "width": "", "height": ""},
        "shipping_class": "",
        "reviews_allowed": true,
        "average_rating": "0.00",
        "rating_count": 0,
        "related_ids": [53, 40, 56, 479, 99],
        "upsell_ids": [],
        "cross_sell_ids": [],
        "parent_id": 0,
        "purchase_note": "",
        "categories": [{"id": 9, "name": "Clothing", "slug": "clothing"}, {"id": 14, "name": "T-shirts", "slug": "t-shirts"}],
        "tags": [],
        "images": [{"id": 792, "src": "https://example.com/wp-content/uploads/2017/03/T_2_front-4.jpg", "name": "", "alt": ""}],
        "attributes": [],
        "default_attributes": [],
        "variations": [],
        "grouped_products": [],
        "menu_order": 0,
        "meta_data": [],
        "_links": {"self": [{"href": "https://example.com/wp-json/wc/v3/products/794"}]}
    }"#;

    #[test]
    fn test_product_deserialization_from_api_body() {
        let product: Product = serde_json::from_str(PRODUCT_JSON).unwrap();

        assert_eq!(product.id, Some(794));
        assert_eq!(product.name, "Premium Quality");
        assert_eq!(product.slug.as_deref(), Some("premium-quality-19"));
        assert_eq!(product.product_type, Some(ProductType::Simple));
        assert_eq!(product.status, Some(ProductStatus::Publish));
        assert_eq!(product.stock_status, Some(StockStatus::InStock));
        assert_eq!(product.price.as_deref(), Some("21.99"));
        assert_eq!(product.is_virtual, Some(false));
        assert!(product.stock_quantity.is_none());
        assert!(product.date_on_sale_from.is_none());
        assert_eq!(product.related_ids.len(), 5);
        assert!(product.in_category("t-shirts"));
        assert!(!product.in_category("hoodies"));
        assert_eq!(product.featured_image().and_then(|i| i.id), Some(792));
    }

    #[test]
    fn test_minimal_product_deserializes() {
        let product: Product = serde_json::from_str(r#"{"id": 1}"#).unwrap();

        assert_eq!(product.id, Some(1));
        assert_eq!(product.name, "");
        assert!(product.categories.is_empty());
        assert!(product.featured_image().is_none());
    }

    #[test]
    fn test_unknown_enum_values_map_to_other() {
        let product: Product = serde_json::from_str(
            r#"{"id": 2, "type": "subscription", "status": "archived", "stock_status": "preorder"}"#,
        )
        .unwrap();

        assert_eq!(product.product_type, Some(ProductType::Other));
        assert_eq!(product.status, Some(ProductStatus::Other));
        assert_eq!(product.stock_status, Some(StockStatus::Other));
    }

    #[test]
    fn test_stock_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&StockStatus::OutOfStock).unwrap(),
            "\"outofstock\""
        );
        assert_eq!(
            serde_json::to_string(&StockStatus::OnBackorder).unwrap(),
            "\"onbackorder\""
        );
        assert_eq!(
            serde_json::from_str::<StockStatus>("\"instock\"").unwrap(),
            StockStatus::InStock
        );
    }

    #[test]
    fn test_product_list_params_to_query() {
        let params = ProductListParams {
            per_page: Some(20),
            include: Some(vec![10, 11]),
            status: Some(ProductStatus::Publish),
            product_type: Some(ProductType::Variable),
            order: Some(SortOrder::Asc),
            ..Default::default()
        };

        let query = Query::from_params(&params).unwrap();

        assert_eq!(
            query.to_query_string(ArrayFormat::Repeat),
            "include=10&include=11&order=asc&per_page=20&status=publish&type=variable"
        );
    }

    #[test]
    fn test_empty_product_list_params_serialize_to_empty_object() {
        let json = serde_json::to_value(ProductListParams::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }

    #[test]
    fn test_product_descriptor_and_slug() {
        assert_eq!(Product::DESCRIPTOR.path, "products");

        let product: Product = serde_json::from_str(PRODUCT_JSON).unwrap();
        assert_eq!(product.get_id(), Some(794));
        assert_eq!(SlugResource::slug(&product), Some("premium-quality-19"));
    }
}
