//! Product tag resource implementation.

use serde::{Deserialize, Serialize};

use crate::rest::{Resource, ResourceDescriptor, SlugResource};

use super::common::SortOrder;

/// A product tag.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductTag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
}

impl Resource for ProductTag {
    type ListParams = ProductTagListParams;

    const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor::new("ProductTag", "products/tags");

    fn get_id(&self) -> Option<u64> {
        self.id
    }
}

impl SlugResource for ProductTag {
    fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }
}

/// Parameters for listing product tags.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductTagListParams {
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
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orderby: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_empty: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}
