//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Every client built here points at a wiremock server and uses a fixed token
//!
//! # What this does NOT handle
//! - Mock setup (use wiremock directly in tests)

#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use roles_client::endpoints;
#[allow(unused_imports)]
pub use serde_json::{Value, json};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use roles_client::RolesClient;

pub const TEST_TOKEN: &str = "test-token";

/// Build a client against the mock server with the given page size.
#[allow(dead_code)]
pub fn test_client(server: &MockServer, page_size: usize) -> RolesClient {
    RolesClient::builder()
        .base_url(server.uri())
        .api_token(TEST_TOKEN)
        .page_size(page_size)
        .build()
        .expect("client should build")
}

/// `count` role records named `role-<offset+i>`.
#[allow(dead_code)]
pub fn role_records(offset: usize, count: usize) -> Vec<Value> {
    (offset..offset + count)
        .map(|i| json!({"guid": format!("g{i}"), "name": format!("role-{i}")}))
        .collect()
}

/// A list page body.
#[allow(dead_code)]
pub fn page_body(data: Vec<Value>, total: usize) -> Value {
    json!({"data": data, "total": total})
}
