//! Address type for orders and customers.

use serde::{Deserialize, Serialize};

/// A billing or shipping address.
///
/// WooCommerce uses the same shape for `billing` and `shipping` on both
/// orders and customers; `email` is only filled in on billing addresses.
/// Blank fields arrive as empty strings rather than `null`.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::rest::resources::Address;
///
/// let address: Address = serde_json::from_str(
///     r#"{"first_name":"Ada","city":"London","country":"GB","postcode":"N1 9GU"}"#,
/// ).unwrap();
///
/// assert_eq!(address.city.as_deref(), Some("London"));
/// assert!(address.email.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// State or county code (e.g., `CA`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    /// ISO 3166-1 alpha-2 country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Address {
    /// Returns `true` if every field is missing or blank.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        [
            &self.first_name,
            &self.last_name,
            &self.company,
            &self.address_1,
            &self.address_2,
            &self.city,
            &self.state,
            &self.postcode,
            &self.country,
            &self.email,
            &self.phone,
        ]
        .iter()
        .all(|field| field.as_deref().map_or(true, |v| v.trim().is_empty()))
    }
}
