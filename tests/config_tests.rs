//! Integration tests for configuration loading and URL construction.

use std::collections::HashMap;

use woocommerce_api::clients::QueryValue;
use woocommerce_api::config::{ENV_CONSUMER_KEY, ENV_CONSUMER_SECRET, ENV_STORE_URL};
use woocommerce_api::{
    ApiVersion, ArrayFormat, ClientError, ConfigError, ConsumerKey, ConsumerSecret, Query,
    ResourceClient, StoreUrl, WooConfig,
};

fn full_env() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        (ENV_STORE_URL, "https://shop.example.com/"),
        (ENV_CONSUMER_KEY, "ck_live"),
        (ENV_CONSUMER_SECRET, "cs_live"),
    ])
}

fn create_client(array_format: ArrayFormat) -> ResourceClient {
    let config = WooConfig::builder()
        .store_url(StoreUrl::new("https://shop.example.com").unwrap())
        .consumer_key(ConsumerKey::new("ck_test").unwrap())
        .consumer_secret(ConsumerSecret::new("cs_test").unwrap())
        .array_format(array_format)
        .build()
        .unwrap();
    ResourceClient::new(&config).unwrap()
}

// ============================================================================
// Environment loading
// ============================================================================

#[test]
fn test_from_lookup_builds_config() {
    let env = full_env();
    let config = WooConfig::from_lookup(|name| env.get(name).map(ToString::to_string)).unwrap();

    assert_eq!(config.store_url().as_ref(), "https://shop.example.com");
    assert_eq!(config.api_version(), ApiVersion::V3);
    assert_eq!(config.api_root(), "https://shop.example.com/wp-json/wc/v3");
}

#[test]
fn test_each_missing_variable_is_named() {
    for missing in [ENV_STORE_URL, ENV_CONSUMER_KEY, ENV_CONSUMER_SECRET] {
        let mut env = full_env();
        env.remove(missing);

        let result = WooConfig::from_lookup(|name| env.get(name).map(ToString::to_string));

        match result {
            Err(ConfigError::MissingEnvironmentVariable { name }) => assert_eq!(name, missing),
            other => panic!("Expected missing {missing}, got {other:?}"),
        }
    }
}

#[test]
fn test_blank_variable_counts_as_missing() {
    let mut env = full_env();
    env.insert(ENV_CONSUMER_SECRET, "   ");

    let result = WooConfig::from_lookup(|name| env.get(name).map(ToString::to_string));

    assert!(matches!(
        result,
        Err(ConfigError::MissingEnvironmentVariable {
            name: ENV_CONSUMER_SECRET
        })
    ));
}

#[test]
fn test_invalid_store_url_from_lookup() {
    let mut env = full_env();
    env.insert(ENV_STORE_URL, "shop.example.com");

    let result = WooConfig::from_lookup(|name| env.get(name).map(ToString::to_string));

    assert!(matches!(result, Err(ConfigError::InvalidStoreUrl { .. })));
}

#[test]
fn test_config_error_converts_to_client_error() {
    let error: ClientError = ConfigError::MissingEnvironmentVariable {
        name: ENV_STORE_URL,
    }
    .into();

    assert!(matches!(error, ClientError::Config(_)));
    assert!(error.to_string().contains(ENV_STORE_URL));
}

// ============================================================================
// URL construction
// ============================================================================

#[test]
fn test_no_query_equals_empty_query() {
    let client = create_client(ArrayFormat::default());

    for path in ["/products", "orders", "/products/categories"] {
        assert_eq!(
            client.build_url(path, None),
            client.build_url(path, Some(&Query::new()))
        );
    }
}

#[test]
fn test_non_empty_query_has_single_separator_and_every_key() {
    let client = create_client(ArrayFormat::default());
    let query = Query::new()
        .with("search", "blue & green")
        .with("per_page", 10)
        .with("featured", true)
        .with("include", vec![3_u64, 7]);

    let url = client.build_url("/products", Some(&query));

    assert_eq!(url.matches('?').count(), 1);
    assert!(url.contains("search=blue%20%26%20green"));
    assert!(url.contains("per_page=10"));
    assert!(url.contains("featured=true"));
    assert!(url.contains("include=3&include=7"));
}

#[test]
fn test_bracket_and_comma_array_formats() {
    let query = Query::new().with("include", vec![3_u64, 7]);

    let bracket = create_client(ArrayFormat::Bracket).build_url("/products", Some(&query));
    assert!(bracket.ends_with("?include[]=3&include[]=7"));

    let comma = create_client(ArrayFormat::Comma).build_url("/products", Some(&query));
    assert!(comma.ends_with("?include=3%2C7"));
}

#[test]
fn test_empty_list_is_omitted() {
    let client = create_client(ArrayFormat::default());
    let query = Query::new().with("include", QueryValue::List(Vec::new()));

    assert_eq!(
        client.build_url("/products", Some(&query)),
        "https://shop.example.com/wp-json/wc/v3/products"
    );
}

#[test]
fn test_slug_round_trip() {
    let client = create_client(ArrayFormat::default());
    let query = Query::new().with("slug", "widget");

    let url = client.build_url("/products", Some(&query));
    assert!(url.contains("slug=widget"));
}
