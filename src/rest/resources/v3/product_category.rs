//! Product category resource implementation.
//!
//! Categories form a tree through `parent`; a top-level category has
//! `parent == 0`.

use serde::{Deserialize, Serialize};

use crate::rest::{Resource, ResourceDescriptor, SlugResource};

use super::common::{Image, SortOrder};

/// How a category archive page is displayed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum CategoryDisplay {
    #[default]
    Default,
    Products,
    Subcategories,
    Both,
    #[serde(other)]
    Other,
}

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductCategory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Parent category id, or `0` for top-level categories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<CategoryDisplay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_order: Option<i64>,
    /// Number of published products in the category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
}

impl ProductCategory {
    /// Returns `true` if the category has no parent.
    #[must_use]
    pub fn is_top_level(&self) -> bool {
        self.parent.map_or(true, |parent| parent == 0)
    }
}

impl Resource for ProductCategory {
    type ListParams = ProductCategoryListParams;

    const DESCRIPTOR: ResourceDescriptor =
        ResourceDescriptor::new("ProductCategory", "products/categories");

    fn get_id(&self) -> Option<u64> {
        self.id
    }
}

impl SlugResource for ProductCategory {
    fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }
}

/// Parameters for listing product categories.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductCategoryListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
    /// Sort field: `id`, `include`, `name`, `slug`, `term_group`,
    /// `description` or `count`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orderby: Option<String>,
    /// Hide categories without products.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_empty: Option<bool>,
    /// Only children of this category id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<u64>,
    /// Only categories assigned to this product id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}
