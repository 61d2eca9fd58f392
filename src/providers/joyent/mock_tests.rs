use std::collections::HashSet;

use mockito::Matcher;

use crate::auth::BasicAuth;
use crate::errors::Error;

use super::keys::Key;
use super::SdcClient;

const AUTH_HEADER: &str = "Basic aWRlbnRpdHk6Y3JlZGVudGlhbA==";
const RSA_MATERIAL: &str = "ssh-rsa AAAAB3NzaC1yc2EAAAABIwAAAQEA0A5Pf5Cq...";

fn setup() -> (mockito::ServerGuard, SdcClient) {
    let server = mockito::Server::new();
    let auth = BasicAuth::new("identity", "credential");
    let client = SdcClient::try_new(&server.url(), &auth).expect("create client under test");
    (server, client)
}

fn key_list_body() -> String {
    format!(
        r#"[
            {{
                "name": "rsa",
                "key": "{RSA_MATERIAL}",
                "created": "2011-04-13T22:14:46+00:00"
            }},
            {{
                "name": "dsa",
                "key": "ssh-dss AAAAB3NzaC1kc3MAAACBAP3...",
                "created": "2011-05-02T08:10:21+00:00"
            }}
        ]"#
    )
}

fn expected_keys() -> HashSet<Key> {
    [
        Key {
            name: "rsa".to_string(),
            key: RSA_MATERIAL.to_string(),
            created: Some("2011-04-13T22:14:46+00:00".to_string()),
        },
        Key {
            name: "dsa".to_string(),
            key: "ssh-dss AAAAB3NzaC1kc3MAAACBAP3...".to_string(),
            created: Some("2011-05-02T08:10:21+00:00".to_string()),
        },
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_list_keys() {
    let (mut server, client) = setup();

    let mock = server
        .mock("GET", "/my/keys")
        .match_header("x-api-version", "~6.5")
        .match_header("accept", "application/json")
        .match_header("authorization", AUTH_HEADER)
        .with_status(200)
        .with_body(key_list_body())
        .create();

    let keys = client.keys().list().unwrap();
    mock.assert();
    assert_eq!(keys, expected_keys());
}

#[test]
fn test_list_keys_when_none() {
    let (mut server, client) = setup();

    let mock = server.mock("GET", "/my/keys").with_status(404).create();

    let keys = client.keys().list().unwrap();
    mock.assert();
    assert!(keys.is_empty());
}

#[test]
fn test_list_keys_unauthorized() {
    let (mut server, client) = setup();

    server.mock("GET", "/my/keys").with_status(401).create();

    let err = client.keys().list().unwrap_err();
    assert!(matches!(err, Error::AuthorizationFailure { .. }));
}

#[test]
fn test_get_key() {
    let (mut server, client) = setup();

    let mock = server
        .mock("GET", "/my/keys/rsa")
        .match_header("authorization", AUTH_HEADER)
        .with_status(200)
        .with_body(format!(
            r#"{{"name":"rsa","key":"{RSA_MATERIAL}","created":"2011-04-13T22:14:46+00:00"}}"#
        ))
        .create();

    let key = client.keys().get("rsa").unwrap().unwrap();
    mock.assert();
    assert_eq!(key.name, "rsa");
    assert_eq!(key.key, RSA_MATERIAL);
}

#[test]
fn test_get_key_when_missing() {
    let (mut server, client) = setup();

    server.mock("GET", "/my/keys/rsa").with_status(404).create();

    assert_eq!(client.keys().get("rsa").unwrap(), None);
}

#[test]
fn test_create_key() {
    let (mut server, client) = setup();

    let mock = server
        .mock("POST", "/my/keys")
        .match_header("x-api-version", "~6.5")
        .match_header("accept", "application/json")
        .match_header("authorization", AUTH_HEADER)
        .match_header("content-type", "application/json")
        .match_body(Matcher::JsonString(format!(
            r#"{{"name":"rsa","key":"{RSA_MATERIAL}"}}"#
        )))
        .with_status(202)
        .with_body(format!(
            r#"{{"name":"rsa","key":"{RSA_MATERIAL}","created":"2011-04-13T22:14:46+00:00"}}"#
        ))
        .create();

    let key = client.keys().create("rsa", RSA_MATERIAL).unwrap();
    mock.assert();

    // Round-trip: the provider echoes back what was uploaded.
    assert_eq!(key.name, "rsa");
    assert_eq!(key.key, RSA_MATERIAL);
}

#[test]
fn test_create_key_unauthorized() {
    let (mut server, client) = setup();

    server.mock("POST", "/my/keys").with_status(401).create();

    let err = client.keys().create("rsa", RSA_MATERIAL).unwrap_err();
    assert!(matches!(err, Error::AuthorizationFailure { .. }));
}

#[test]
fn test_delete_key() {
    let (mut server, client) = setup();

    let mock = server
        .mock("DELETE", "/my/keys/rsa")
        .match_header("authorization", AUTH_HEADER)
        .with_status(204)
        .create();

    client.keys().delete("rsa").unwrap();
    mock.assert();
}

#[test]
fn test_delete_key_when_missing() {
    let (mut server, client) = setup();

    server.mock("DELETE", "/my/keys/rsa").with_status(404).create();

    let err = client.keys().delete("rsa").unwrap_err();
    assert!(matches!(err, Error::ResourceNotFound { .. }));
}

#[test]
fn test_list_keys_server_error_carries_body() {
    let (mut server, client) = setup();

    server
        .mock("GET", "/my/keys")
        .with_status(503)
        .with_body("upstream unavailable")
        .create();

    let err = client.keys().list().unwrap_err();
    match err {
        Error::RequestFailure { status, body } => {
            assert_eq!(status.as_u16(), 503);
            assert_eq!(body, "upstream unavailable");
        }
        e => panic!("unexpected error: {e}"),
    }
}
