//! Tests for publishing against a mock Vault server.

use crate::support::*;
use mockito::Matcher;
use serde_json::json;

fn ok_body() -> &'static str {
    r#"{"data":{"version":1}}"#
}

#[test]
fn test_push_simple_scenario() {
    let mut server = mockito::Server::new();
    let nested = server
        .mock("PUT", "/v1/secret/data/a")
        .match_header("x-vault-token", TEST_TOKEN)
        .match_body(Matcher::Json(json!({ "data": { "x": 1, "y": 2 } })))
        .with_status(200)
        .with_body(ok_body())
        .expect(1)
        .create();
    let root = server
        .mock("PUT", "/v1/secret/data")
        .match_body(Matcher::Json(json!({ "data": { "b": 3 } })))
        .with_status(200)
        .with_body(ok_body())
        .expect(1)
        .create();

    let t = Test::with_secrets(SIMPLE_YAML);
    let output = t.push(&server.url(), &[]);

    assert_success(&output);
    assert_stdout_contains(&output, "published 2 secrets (3 fields)");
    nested.assert();
    root.assert();
}

#[test]
fn test_push_merges_sibling_leaves() {
    let mut server = mockito::Server::new();
    let database = server
        .mock("PUT", "/v1/secret/data/app/database")
        .match_body(Matcher::Json(json!({
            "data": { "user": "billing", "password": "p@ss:word", "port": 5432 }
        })))
        .with_status(200)
        .expect(1)
        .create();
    let app = server
        .mock("PUT", "/v1/secret/data/app")
        .match_body(Matcher::Json(json!({
            "data": { "name": "billing", "debug": false }
        })))
        .with_status(200)
        .expect(1)
        .create();
    let api = server
        .mock("PUT", "/v1/secret/data/app/api")
        .match_body(Matcher::Json(json!({
            "data": { "key": "sk-test-12345", "timeout": 2.5 }
        })))
        .with_status(200)
        .expect(1)
        .create();
    let root = server
        .mock("PUT", "/v1/secret/data")
        .match_body(Matcher::Json(json!({ "data": { "region": "eu-west-1" } })))
        .with_status(200)
        .expect(1)
        .create();

    let t = Test::with_secrets(APP_YAML);
    let output = t.push(&server.url(), &[]);

    assert_success(&output);
    assert_stdout_contains(&output, "published 4 secrets (8 fields)");
    app.assert();
    database.assert();
    api.assert();
    root.assert();
}

#[test]
fn test_push_mount_flag_beats_env() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("PUT", "/v1/kv/data/a")
        .with_status(200)
        .expect(1)
        .create();
    let _root = server.mock("PUT", "/v1/kv/data").with_status(200).create();

    let t = Test::with_secrets(SIMPLE_YAML);
    let output = t
        .vault_cmd(&server.url())
        .env("MOUNT", "wrong")
        .args(["--mount", "kv"])
        .output()
        .unwrap();

    assert_success(&output);
    mock.assert();
}

#[test]
fn test_push_stops_at_first_failure() {
    let mut server = mockito::Server::new();
    let one = server
        .mock("PUT", "/v1/secret/data/one")
        .with_status(200)
        .expect(1)
        .create();
    let two = server
        .mock("PUT", "/v1/secret/data/two")
        .with_status(500)
        .with_body(r#"{"errors":["storage unavailable"]}"#)
        .expect(1)
        .create();
    let three = server
        .mock("PUT", "/v1/secret/data/three")
        .with_status(200)
        .expect(0)
        .create();

    let t = Test::with_secrets(THREE_PATHS_YAML);
    let output = t.push(&server.url(), &[]);

    assert_failure(&output);
    assert_stderr_contains(&output, "storage unavailable");
    assert_stderr_contains(&output, "'/two'");
    one.assert();
    two.assert();
    three.assert();
}

#[test]
fn test_push_permission_denied_hint() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("PUT", Matcher::Any)
        .with_status(403)
        .with_body(r#"{"errors":["permission denied"]}"#)
        .create();

    let t = Test::with_secrets(SIMPLE_YAML);
    let output = t.push(&server.url(), &[]);

    assert_failure(&output);
    assert_stderr_contains(&output, "permission denied");
    assert_stderr_contains(&output, "policy");
}

#[test]
fn test_push_uses_token_file() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("PUT", Matcher::Any)
        .match_header("x-vault-token", "file-token")
        .with_status(200)
        .expect(2)
        .create();

    let t = Test::with_secrets(SIMPLE_YAML);
    t.write_home(".vault-token", "file-token\n");
    let output = t
        .cmd()
        .env("VAULT_ADDR", server.url())
        .output()
        .unwrap();

    assert_success(&output);
    mock.assert();
}

#[test]
fn test_push_sends_namespace() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("PUT", Matcher::Any)
        .match_header("x-vault-namespace", "team-a")
        .with_status(200)
        .expect(2)
        .create();

    let t = Test::with_secrets(SIMPLE_YAML);
    let output = t
        .vault_cmd(&server.url())
        .env("VAULT_NAMESPACE", "team-a")
        .output()
        .unwrap();

    assert_success(&output);
    mock.assert();
}

#[test]
fn test_push_empty_file_sends_nothing() {
    let mut server = mockito::Server::new();
    let mock = server.mock("PUT", Matcher::Any).expect(0).create();

    let t = Test::with_secrets("# nothing here yet\n");
    let output = t.push(&server.url(), &[]);

    assert_success(&output);
    assert_stdout_contains(&output, "nothing to publish");
    mock.assert();
}

#[test]
fn test_push_is_repeatable() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("PUT", Matcher::Any)
        .with_status(200)
        .expect(4)
        .create();

    let t = Test::with_secrets(SIMPLE_YAML);
    assert_success(&t.push(&server.url(), &[]));
    assert_success(&t.push(&server.url(), &[]));

    mock.assert();
}
