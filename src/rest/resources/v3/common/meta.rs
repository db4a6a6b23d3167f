//! Meta data entries attached to WooCommerce records.

use serde::{Deserialize, Serialize};

/// A `meta_data` entry.
///
/// Plugins store arbitrary values here, so `value` stays untyped.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct MetaData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub key: String,
    #[serde(default)]
    pub value: serde_json::Value,
}

/// Looks up the first meta value stored under `key`.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::rest::resources::{find_meta, MetaData};
///
/// let meta = vec![MetaData {
///     id: Some(1),
///     key: "_wc_gla_brand".to_string(),
///     value: serde_json::json!("Acme"),
/// }];
///
/// assert_eq!(find_meta(&meta, "_wc_gla_brand"), Some(&serde_json::json!("Acme")));
/// assert_eq!(find_meta(&meta, "missing"), None);
/// ```
#[must_use]
pub fn find_meta<'a>(meta: &'a [MetaData], key: &str) -> Option<&'a serde_json::Value> {
    meta.iter().find(|entry| entry.key == key).map(|entry| &entry.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_meta_value_accepts_any_json() {
        let json = r#"[
            {"id": 1, "key": "_color", "value": "red"},
            {"id": 2, "key": "_dimensions", "value": {"w": 3, "h": 4}},
            {"id": 3, "key": "_flags", "value": [1, 2]}
        ]"#;

        let meta: Vec<MetaData> = serde_json::from_str(json).unwrap();

        assert_eq!(meta.len(), 3);
        assert_eq!(find_meta(&meta, "_color"), Some(&json!("red")));
        assert_eq!(find_meta(&meta, "_dimensions").unwrap()["h"], 4);
    }

    #[test]
    fn test_find_meta_returns_first_match() {
        let meta = vec![
            MetaData {
                id: Some(1),
                key: "k".to_string(),
                value: json!(1),
            },
            MetaData {
                id: Some(2),
                key: "k".to_string(),
                value: json!(2),
            },
        ];

        assert_eq!(find_meta(&meta, "k"), Some(&json!(1)));
    }

    #[test]
    fn test_missing_value_defaults_to_null() {
        let entry: MetaData = serde_json::from_str(r#"{"key":"_empty"}"#).unwrap();
        assert!(entry.value.is_null());
        assert!(entry.id.is_none());
    }
}
