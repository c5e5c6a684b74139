//! Integration tests for the REST transport
//!
//! These tests run `RestClient` against a local mockito server and check the
//! requests it produces and how responses are decoded.

use mockito::{Matcher, Server};
use rest_client::{Params, RestClient, RestClientConfig, RestError, Transport};
use rstest::rstest;
use serde_json::json;

fn client_for(server: &Server) -> RestClient {
    let config = RestClientConfig::new("u-1")
        .with_endpoint(server.url())
        .with_credentials("token", "secret");
    RestClient::new(&config)
}

#[test]
fn test_read_single_entity() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/v1/users/u-1/calls/c-1")
        .match_header("authorization", "Basic dG9rZW46c2VjcmV0")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":"c-1","state":"active"}"#)
        .create();

    let client = client_for(&server);
    let value = client.read("calls/c-1").expect("read should succeed");

    assert_eq!(value["id"], "c-1");
    assert_eq!(value["state"], "active");
    mock.assert();
}

#[test]
fn test_read_collection_sends_textual_query() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/v1/users/u-1/availableNumbers/local")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("quantity".into(), "5".into()),
            Matcher::UrlEncoded("inLocalCallingArea".into(), "true".into()),
        ]))
        .with_status(200)
        .with_body(r#"[{"number":"+15551230001"},{"number":"+15551230002"}]"#)
        .create();

    let mut query = Params::new();
    query.insert("quantity".to_string(), json!(5));
    query.insert("inLocalCallingArea".to_string(), json!("true"));

    let client = client_for(&server);
    let items = client
        .read_collection("availableNumbers/local", &query)
        .expect("collection read should succeed");

    assert_eq!(items.len(), 2);
    assert_eq!(items[1]["number"], "+15551230002");
    mock.assert();
}

#[test]
fn test_read_collection_rejects_non_array() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/v1/users/u-1/calls")
        .with_status(200)
        .with_body(r#"{"id":"c-1"}"#)
        .create();

    let client = client_for(&server);
    let result = client.read_collection("calls", &Params::new());

    assert!(matches!(result, Err(RestError::Parse(_))));
}

#[test]
fn test_write_posts_json_body() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/v1/users/u-1/calls/c-1/gather")
        .match_body(Matcher::Json(json!({
            "maxDigits": "5",
            "prompt": { "sentence": "Hello" }
        })))
        .with_status(200)
        .create();

    let mut body = Params::new();
    body.insert("maxDigits".to_string(), json!("5"));
    body.insert("prompt".to_string(), json!({ "sentence": "Hello" }));

    let client = client_for(&server);
    let response = client
        .write("calls/c-1/gather", &body)
        .expect("write should succeed");

    assert!(response.is_none());
    mock.assert();
}

#[test]
fn test_write_returns_id_from_location_header() {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", "/v1/users/u-1/bridges")
        .with_status(201)
        .with_header("Location", "https://api.example.com/v1/users/u-1/bridges/brg-42")
        .create();

    let client = client_for(&server);
    let response = client
        .write("bridges", &Params::new())
        .expect("write should succeed");

    assert_eq!(response, Some(json!({ "id": "brg-42" })));
}

#[rstest]
#[case(400, r#"{"category":"bad-request","message":"Call already completed"}"#, "Call already completed")]
#[case(404, r#"{"message":"Not found"}"#, "Not found")]
#[case(500, "Internal Server Error", "Internal Server Error")]
fn test_error_status_becomes_fault(
    #[case] status: usize,
    #[case] body: &str,
    #[case] expected_message: &str,
) {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", "/v1/users/u-1/calls/c-1")
        .with_status(status)
        .with_body(body)
        .create();

    let client = client_for(&server);
    let result = client.write("calls/c-1", &Params::new());

    match result {
        Err(RestError::Fault { status: code, message, .. }) => {
            assert_eq!(code as usize, status);
            assert_eq!(message, expected_message);
        }
        other => panic!("Expected RestError::Fault, got {:?}", other),
    }
}

#[test]
fn test_delete() {
    let mut server = Server::new();
    let mock = server
        .mock("DELETE", "/v1/users/u-1/media/greeting.wav")
        .with_status(200)
        .create();

    let client = client_for(&server);
    client.delete("media/greeting.wav").expect("delete should succeed");
    mock.assert();
}

#[test]
fn test_download_to_file() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/v1/users/u-1/media/greeting.wav")
        .with_status(200)
        .with_body(b"RIFF0000WAVE".as_slice())
        .create();

    let destination = std::env::temp_dir().join(format!(
        "rest-client-download-{}.wav",
        std::process::id()
    ));

    let client = client_for(&server);
    client
        .download_to("media/greeting.wav", &destination)
        .expect("download should succeed");

    let content = std::fs::read(&destination).expect("file should exist");
    assert_eq!(content, b"RIFF0000WAVE");
    let _ = std::fs::remove_file(&destination);
}

#[test]
fn test_network_error() {
    // Nothing listens on port 9 of the loopback interface.
    let config = RestClientConfig::new("u-1").with_endpoint("http://127.0.0.1:9");
    let client = RestClient::new(&config);

    let result = client.read("calls/c-1");
    assert!(matches!(result, Err(RestError::Network(_))));
}
