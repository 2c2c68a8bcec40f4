//! Builder method tests for the configuration loader.

use crate::constants::{DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT_SECS};
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;
use secrecy::ExposeSecret;
use std::time::Duration;

#[test]
fn test_builder_applies_defaults() {
    let config = ConfigLoader::new()
        .with_base_url("https://admin.example.com".to_string())
        .with_api_token("token-1".to_string())
        .build()
        .unwrap();

    assert_eq!(config.connection.base_url, "https://admin.example.com");
    assert_eq!(config.auth.token.expose_secret(), "token-1");
    assert_eq!(
        config.connection.timeout,
        Duration::from_secs(DEFAULT_TIMEOUT_SECS)
    );
    assert_eq!(config.connection.page_size, DEFAULT_PAGE_SIZE);
    assert!(!config.connection.skip_verify);
}

#[test]
fn test_builder_strips_all_trailing_slashes() {
    let config = ConfigLoader::new()
        .with_base_url("https://admin.example.com///".to_string())
        .with_api_token("t".to_string())
        .build()
        .unwrap();
    assert_eq!(config.connection.base_url, "https://admin.example.com");

    let config = ConfigLoader::new()
        .with_base_url("http://10.0.0.5:21114/prefix/".to_string())
        .with_api_token("t".to_string())
        .build()
        .unwrap();
    assert_eq!(config.connection.base_url, "http://10.0.0.5:21114/prefix");
}

#[test]
fn test_builder_overrides() {
    let config = ConfigLoader::new()
        .with_base_url("https://admin.example.com".to_string())
        .with_api_token("t".to_string())
        .with_timeout(Duration::from_secs(5))
        .with_skip_verify(true)
        .with_page_size(50)
        .build()
        .unwrap();

    assert_eq!(config.connection.timeout, Duration::from_secs(5));
    assert!(config.connection.skip_verify);
    assert_eq!(config.connection.page_size, 50);
}

#[test]
fn test_missing_base_url() {
    let err = ConfigLoader::new()
        .with_api_token("t".to_string())
        .build()
        .unwrap_err();
    assert!(matches!(err, ConfigError::MissingBaseUrl));
}

#[test]
fn test_blank_base_url_is_missing() {
    let err = ConfigLoader::new()
        .with_base_url("   ".to_string())
        .with_api_token("t".to_string())
        .build()
        .unwrap_err();
    assert!(matches!(err, ConfigError::MissingBaseUrl));
}

#[test]
fn test_missing_token() {
    let err = ConfigLoader::new()
        .with_base_url("https://admin.example.com".to_string())
        .build()
        .unwrap_err();
    assert!(matches!(err, ConfigError::MissingToken));
}
