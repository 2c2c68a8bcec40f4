//! Integration tests for `roles-cli admin-roles`.
//!
//! Tests cover:
//! - Listing with filters in JSON and table output
//! - Name resolution before get/update/delete
//! - Usage checks that must not reach the server

mod common;

use common::{roles_cmd, roles_cmd_with_server};
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_lookup(server: &MockServer, name: &str, guid: &str) {
    Mock::given(method("GET"))
        .and(path("/api/admin-roles"))
        .and(query_param("name", format!("%{name}%")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"guid": format!("{guid}-other"), "name": format!("{name} Team")},
                {"guid": guid, "name": name}
            ],
            "total": 2
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_view_prints_json_records() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin-roles"))
        .and(header("Authorization", "Bearer test-token"))
        .and(query_param("type", "1"))
        .and(query_param("current", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"guid": "a1", "name": "Ops", "note": "operators", "type": 1}],
            "total": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    roles_cmd_with_server(&server.uri())
        .args(["admin-roles", "view", "--type", "global"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"guid\": \"a1\"")
                .and(predicate::str::contains("\"name\": \"Ops\""))
                .and(predicate::str::contains("\"note\": \"operators\"")),
        );
}

#[tokio::test]
async fn test_view_table_output() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin-roles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"guid": "a1", "name": "Ops", "type": 3}],
            "total": 1
        })))
        .mount(&server)
        .await;

    roles_cmd_with_server(&server.uri())
        .args(["-o", "table", "admin-roles", "view"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("NAME\tGUID\tTYPE\tNOTE")
                .and(predicate::str::contains("Ops\ta1\tgroup-scoped\tN/A")),
        );
}

#[tokio::test]
async fn test_view_empty_table() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin-roles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [], "total": 0})))
        .mount(&server)
        .await;

    roles_cmd_with_server(&server.uri())
        .args(["-o", "table", "admin-roles", "view"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No roles found."));
}

#[tokio::test]
async fn test_get_by_name_prints_listed_record() {
    let server = MockServer::start().await;
    mount_lookup(&server, "Ops", "a1").await;

    Mock::given(method("GET"))
        .and(path("/api/admin-roles/a1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"guid": "a1"})))
        .expect(0)
        .mount(&server)
        .await;

    roles_cmd_with_server(&server.uri())
        .args(["admin-roles", "get", "--name", "Ops"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"guid\": \"a1\"")
                .and(predicate::str::contains("\"name\": \"Ops\""))
                .and(predicate::str::contains("Ops Team").not()),
        );
}

#[tokio::test]
async fn test_get_by_guid_fetches_record() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin-roles/a1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"guid": "a1", "name": "Ops", "note": "exact"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    roles_cmd_with_server(&server.uri())
        .args(["admin-roles", "get", "--guid", "a1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("exact"));
}

#[tokio::test]
async fn test_view_keeps_null_and_empty_fields() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin-roles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"guid": "a1", "name": "", "type": 1},
                {"guid": null, "name": "Ops"}
            ],
            "total": 2
        })))
        .mount(&server)
        .await;

    roles_cmd_with_server(&server.uri())
        .args(["admin-roles", "view"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"name\": \"\"")
                .and(predicate::str::contains("\"guid\": null"))
                .and(predicate::str::contains(
                    "\"guid\": \"a1\",\n    \"name\": \"\",\n    \"type\": 1",
                )),
        );
}

#[tokio::test]
async fn test_get_unknown_name_exits_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin-roles"))
        .and(query_param("name", "%ops%"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"guid": "a1", "name": "Ops"}],
            "total": 1
        })))
        .mount(&server)
        .await;

    roles_cmd_with_server(&server.uri())
        .args(["admin-roles", "get", "--name", "ops"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Admin role 'ops' not found"));
}

#[tokio::test]
async fn test_both_selectors_rejected_without_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    roles_cmd_with_server(&server.uri())
        .args(["admin-roles", "delete", "--name", "Ops", "--guid", "a1"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains(
            "Cannot specify both --name and --guid",
        ));
}

#[tokio::test]
async fn test_missing_selector_rejected() {
    let server = MockServer::start().await;

    roles_cmd_with_server(&server.uri())
        .args(["admin-roles", "get"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains(
            "--name or --guid is required for get command",
        ));
}

#[tokio::test]
async fn test_update_without_fields_sends_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    roles_cmd_with_server(&server.uri())
        .args(["admin-roles", "update", "--name", "Ops"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains(
            "At least one parameter must be specified for update",
        ));
}

#[tokio::test]
async fn test_update_sends_split_groups() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/admin-roles/a1"))
        .and(body_json(json!({
            "user_groups": ["eng", "ops"],
            "unassigned": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"updated": 1})))
        .expect(1)
        .mount(&server)
        .await;

    roles_cmd_with_server(&server.uri())
        .args([
            "admin-roles",
            "update",
            "--guid",
            "a1",
            "--user-groups",
            "eng, ops",
            "--unassigned",
            "false",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: {\"updated\":1}"));
}

#[tokio::test]
async fn test_delete_by_guid_prints_result() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/admin-roles"))
        .and(body_json(json!({"guids": ["a1"]})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    roles_cmd_with_server(&server.uri())
        .args(["admin-roles", "delete", "--guid", "a1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: Success"));
}

#[tokio::test]
async fn test_add_users_requires_user_guids() {
    let server = MockServer::start().await;

    roles_cmd_with_server(&server.uri())
        .args(["admin-roles", "add-users", "--guid", "a1"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains(
            "--user-guids is required for add-users command",
        ));
}

#[tokio::test]
async fn test_remove_users_sends_list() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/admin-roles/a1/users"))
        .and(body_json(json!({"users": ["u1", "u2"]})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    roles_cmd_with_server(&server.uri())
        .args(["admin-roles", "remove-users", "--guid", "a1", "--user-guids", "u1,u2"])
        .assert()
        .success();
}

#[tokio::test]
async fn test_application_error_surfaces_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/admin-roles/a1/users"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"error": "user u9 does not exist"})),
        )
        .mount(&server)
        .await;

    roles_cmd_with_server(&server.uri())
        .args(["admin-roles", "add-users", "--guid", "a1", "--user-guids", "u9"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Error: user u9 does not exist"));
}

#[test]
fn test_admin_roles_help() {
    roles_cmd()
        .args(["admin-roles", "update", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--update-name")
                .and(predicate::str::contains("--device-groups"))
                .and(predicate::str::contains("--unassigned")),
        );
}
