//! Query string construction for WooCommerce REST requests.
//!
//! A [`Query`] maps keys to scalar or array values. Keys are held in a
//! `BTreeMap`, so the encoded string is sorted by key and the same query
//! always produces the same URL.
//!
//! Keys and values are percent-encoded, leaving only the RFC 3986
//! unreserved characters (`A-Z a-z 0-9 - _ . ~`) unescaped. Array values
//! follow the configured [`ArrayFormat`]; empty arrays are omitted.
//!
//! # Example
//!
//! ```rust
//! use woocommerce_api::clients::{ArrayFormat, Query};
//!
//! let query = Query::new()
//!     .with("search", "blue shirt")
//!     .with("include", vec![12, 34]);
//!
//! assert_eq!(
//!     query.to_query_string(ArrayFormat::Repeat),
//!     "include=12&include=34&search=blue%20shirt"
//! );
//! assert_eq!(
//!     query.to_query_string(ArrayFormat::Comma),
//!     "include=12%2C34&search=blue%20shirt"
//! );
//! ```

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt::Display;

use serde::Serialize;
use serde_json::Value;

/// How array values are written into the query string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ArrayFormat {
    /// Repeat the key for every element: `include=1&include=2`.
    #[default]
    Repeat,
    /// PHP-style brackets: `include[]=1&include[]=2`.
    Bracket,
    /// One comma-separated value: `include=1%2C2`.
    Comma,
}

/// A single query parameter value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryValue {
    /// A scalar, already rendered as text.
    Scalar(String),
    /// A list of scalars.
    List(Vec<String>),
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<&String> for QueryValue {
    fn from(value: &String) -> Self {
        Self::Scalar(value.clone())
    }
}

macro_rules! scalar_from_display {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for QueryValue {
                fn from(value: $ty) -> Self {
                    Self::Scalar(value.to_string())
                }
            }
        )*
    };
}

scalar_from_display!(bool, i32, i64, u32, u64, usize, f64);

impl<T: Display> From<Vec<T>> for QueryValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.iter().map(ToString::to_string).collect())
    }
}

impl<T: Display> From<&[T]> for QueryValue {
    fn from(values: &[T]) -> Self {
        Self::List(values.iter().map(ToString::to_string).collect())
    }
}

/// A set of query parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    params: BTreeMap<String, QueryValue>,
}

impl Query {
    /// Creates an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter, replacing any previous value for the key.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts a parameter, returning the previous value for the key.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<QueryValue>,
    ) -> Option<QueryValue> {
        self.params.insert(key.into(), value.into())
    }

    /// Returns the value for a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.params.get(key)
    }

    /// Returns `true` if no parameters are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Iterates over parameters in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, QueryValue> {
        self.params.iter()
    }

    /// Builds a query from a serializable params struct.
    ///
    /// `null` fields are skipped, strings, numbers and booleans become
    /// scalars, arrays of scalars become lists, and nested objects are
    /// passed as their JSON text.
    ///
    /// # Errors
    ///
    /// Returns the serde error if `params` cannot be serialized, or if it
    /// does not serialize to a JSON object (or unit).
    pub fn from_params<T: Serialize>(params: &T) -> Result<Self, serde_json::Error> {
        let mut query = Self::new();

        let map = match serde_json::to_value(params)? {
            Value::Object(map) => map,
            Value::Null => return Ok(query),
            other => {
                return Err(serde::ser::Error::custom(format!(
                    "query params must serialize to an object, got {other}"
                )))
            }
        };

        for (key, value) in map {
            match value {
                Value::Null => {}
                Value::String(s) => {
                    query.insert(key, s);
                }
                Value::Number(n) => {
                    query.insert(key, n.to_string());
                }
                Value::Bool(b) => {
                    query.insert(key, b);
                }
                Value::Array(items) => {
                    let values: Vec<String> = items
                        .iter()
                        .filter_map(|v| match v {
                            Value::String(s) => Some(s.clone()),
                            Value::Number(n) => Some(n.to_string()),
                            Value::Bool(b) => Some(b.to_string()),
                            _ => None,
                        })
                        .collect();
                    query.insert(key, QueryValue::List(values));
                }
                Value::Object(_) => {
                    query.insert(key, value.to_string());
                }
            }
        }

        Ok(query)
    }

    /// Encodes the query as `application/x-www-form-urlencoded` text,
    /// without a leading `?`.
    ///
    /// Returns an empty string when there is nothing to encode, which
    /// includes a query holding only empty lists.
    #[must_use]
    pub fn to_query_string(&self, format: ArrayFormat) -> String {
        let mut pairs: Vec<String> = Vec::with_capacity(self.params.len());

        for (key, value) in &self.params {
            let key_enc = urlencoding::encode(key);
            match value {
                QueryValue::Scalar(s) => {
                    pairs.push(format!("{key_enc}={}", urlencoding::encode(s)));
                }
                QueryValue::List(items) if items.is_empty() => {}
                QueryValue::List(items) => match format {
                    ArrayFormat::Repeat => pairs.extend(
                        items
                            .iter()
                            .map(|item| format!("{key_enc}={}", urlencoding::encode(item))),
                    ),
                    ArrayFormat::Bracket => pairs.extend(
                        items
                            .iter()
                            .map(|item| format!("{key_enc}[]={}", urlencoding::encode(item))),
                    ),
                    ArrayFormat::Comma => {
                        let joined = items.join(",");
                        pairs.push(format!("{key_enc}={}", urlencoding::encode(&joined)));
                    }
                },
            }
        }

        pairs.join("&")
    }
}

impl<K, V> FromIterator<(K, V)> for Query
where
    K: Into<String>,
    V: Into<QueryValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut query = Self::new();
        for (key, value) in iter {
            query.insert(key, value);
        }
        query
    }
}

impl<'a> IntoIterator for &'a Query {
    type Item = (&'a String, &'a QueryValue);
    type IntoIter = btree_map::Iter<'a, String, QueryValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_encodes_to_empty_string() {
        assert_eq!(Query::new().to_query_string(ArrayFormat::Repeat), "");
        assert!(Query::new().is_empty());
    }

    #[test]
    fn test_keys_are_sorted() {
        let query = Query::new()
            .with("per_page", 20)
            .with("category", "15")
            .with("orderby", "date");

        assert_eq!(
            query.to_query_string(ArrayFormat::Repeat),
            "category=15&orderby=date&per_page=20"
        );
    }

    #[test]
    fn test_values_are_percent_encoded() {
        let query = Query::new().with("search", "café & crème/50%");

        assert_eq!(
            query.to_query_string(ArrayFormat::Repeat),
            "search=caf%C3%A9%20%26%20cr%C3%A8me%2F50%25"
        );
    }

    #[test]
    fn test_keys_are_percent_encoded() {
        let query = Query::new().with("meta key", "x");
        assert_eq!(query.to_query_string(ArrayFormat::Repeat), "meta%20key=x");
    }

    #[test]
    fn test_array_formats() {
        let query = Query::new().with("include", vec![1, 2]);

        assert_eq!(
            query.to_query_string(ArrayFormat::Repeat),
            "include=1&include=2"
        );
        assert_eq!(
            query.to_query_string(ArrayFormat::Bracket),
            "include[]=1&include[]=2"
        );
        assert_eq!(query.to_query_string(ArrayFormat::Comma), "include=1%2C2");
    }

    #[test]
    fn test_empty_arrays_are_omitted() {
        let query = Query::new()
            .with("include", Vec::<u64>::new())
            .with("slug", "widget");

        assert_eq!(query.to_query_string(ArrayFormat::Repeat), "slug=widget");

        let only_empty = Query::new().with("include", Vec::<u64>::new());
        assert!(!only_empty.is_empty());
        assert_eq!(only_empty.to_query_string(ArrayFormat::Repeat), "");
    }

    #[test]
    fn test_insert_replaces_existing_value() {
        let mut query = Query::new().with("page", 1);
        let previous = query.insert("page", 2);

        assert_eq!(previous, Some(QueryValue::Scalar("1".to_string())));
        assert_eq!(query.get("page"), Some(&QueryValue::Scalar("2".to_string())));
        assert_eq!(query.len(), 1);
    }

    #[test]
    fn test_from_iterator() {
        let query: Query = [("slug", "widget"), ("status", "publish")]
            .into_iter()
            .collect();

        assert_eq!(
            query.to_query_string(ArrayFormat::Repeat),
            "slug=widget&status=publish"
        );
    }

    #[test]
    fn test_from_params_handles_basic_types() {
        #[derive(Serialize)]
        struct Params {
            per_page: u32,
            search: String,
            featured: bool,
        }

        let query = Query::from_params(&Params {
            per_page: 50,
            search: "hoodie".to_string(),
            featured: true,
        })
        .unwrap();

        assert_eq!(query.get("per_page"), Some(&QueryValue::Scalar("50".into())));
        assert_eq!(query.get("search"), Some(&QueryValue::Scalar("hoodie".into())));
        assert_eq!(query.get("featured"), Some(&QueryValue::Scalar("true".into())));
    }

    #[test]
    fn test_from_params_skips_none_and_null() {
        #[derive(Serialize)]
        struct Params {
            #[serde(skip_serializing_if = "Option::is_none")]
            page: Option<u32>,
            slug: Option<String>,
        }

        let query = Query::from_params(&Params {
            page: None,
            slug: None,
        })
        .unwrap();

        assert!(query.is_empty());
    }

    #[test]
    fn test_from_params_handles_arrays() {
        #[derive(Serialize)]
        struct Params {
            include: Vec<u64>,
        }

        let query = Query::from_params(&Params {
            include: vec![7, 8, 9],
        })
        .unwrap();

        assert_eq!(
            query.get("include"),
            Some(&QueryValue::List(vec!["7".into(), "8".into(), "9".into()]))
        );
    }

    #[test]
    fn test_from_params_accepts_unit() {
        let query = Query::from_params(&()).unwrap();
        assert!(query.is_empty());
    }

    #[test]
    fn test_from_params_rejects_non_object() {
        assert!(Query::from_params(&vec![1, 2]).is_err());
        assert!(Query::from_params(&"slug").is_err());
    }
}
