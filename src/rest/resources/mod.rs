//! Typed WooCommerce REST resources, organized by API namespace.
//!
//! Only `wc/v3` records are modelled. The types from the latest namespace are
//! re-exported here, so `woocommerce_api::rest::resources::Product` and
//! `woocommerce_api::rest::resources::v3::Product` are the same type.

pub mod v3;

// Re-export types from the latest version for convenience
pub use v3::*;
