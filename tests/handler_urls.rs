mod common;

use axum::body::Bytes;
use axum::http::StatusCode;
use serde_json::{Value, json};

// ─── POST ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_url_echoes_body() {
    let server = common::create_test_server();

    let response = server
        .post("/urls/")
        .json(&json!({ "short_url": "wkp", "target_url": "https://www.wikipedia.org" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    response.assert_json(&json!({
        "short_url": "wkp",
        "target_url": "https://www.wikipedia.org"
    }));
}

#[tokio::test]
async fn test_create_url_without_trailing_slash() {
    let server = common::create_test_server();

    server
        .post("/urls")
        .json(&json!({ "short_url": "noslash", "target_url": "https://example.com" }))
        .await
        .assert_status(StatusCode::CREATED);
}

#[tokio::test]
async fn test_create_duplicate_is_conflict_and_keeps_target() {
    let server = common::create_test_server();
    common::create_mapping(&server, "dup", "https://first.example.com").await;

    let response = server
        .post("/urls/")
        .json(&json!({ "short_url": "dup", "target_url": "https://second.example.com" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    let body = response.json::<Value>();
    assert_eq!(body["error"], "Conflict");
    assert_eq!(body["detail"], "URL with key 'dup' already exists");

    let current = server.get("/urls/dup").await.json::<Value>();
    assert_eq!(current["target_url"], "https://first.example.com");
}

#[tokio::test]
async fn test_create_invalid_key_is_bad_request() {
    let server = common::create_test_server();

    for key in ["my.key", "my/key", "my key", "my@key", "<script>"] {
        let response = server
            .post("/urls/")
            .json(&json!({ "short_url": key, "target_url": "https://example.com" }))
            .await;

        response.assert_status_bad_request();
        assert_eq!(response.json::<Value>()["error"], "Validation error");
    }
}

#[tokio::test]
async fn test_create_key_length_limit() {
    let server = common::create_test_server();

    server
        .post("/urls/")
        .json(&json!({ "short_url": "a".repeat(50), "target_url": "https://example.com" }))
        .await
        .assert_status(StatusCode::CREATED);

    server
        .post("/urls/")
        .json(&json!({ "short_url": "b".repeat(51), "target_url": "https://example.com" }))
        .await
        .assert_status_bad_request();
}

#[tokio::test]
async fn test_create_invalid_target_is_bad_request() {
    let server = common::create_test_server();

    for target in [
        "javascript:alert(1)",
        "https://",
        "not-a-url",
        "https://example.com/with space",
    ] {
        let response = server
            .post("/urls/")
            .json(&json!({ "short_url": "abc", "target_url": target }))
            .await;

        response.assert_status_bad_request();
    }
}

#[tokio::test]
async fn test_create_missing_fields_is_bad_request() {
    let server = common::create_test_server();

    let response = server
        .post("/urls/")
        .json(&json!({ "short_url": "abc" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["detail"], "target_url is required");
}

#[tokio::test]
async fn test_create_malformed_json_is_bad_request() {
    let server = common::create_test_server();

    let response = server
        .post("/urls/")
        .bytes(Bytes::from_static(b"{\"short_url\": \"abc\","))
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();
    let body = response.json::<Value>();
    assert_eq!(body["error"], "Validation error");
    assert!(body["detail"].as_str().unwrap().contains("Invalid JSON"));
}

#[tokio::test]
async fn test_create_empty_body_is_bad_request() {
    let server = common::create_test_server();

    server
        .post("/urls/")
        .bytes(Bytes::new())
        .content_type("application/json")
        .await
        .assert_status_bad_request();
}

// ─── GET ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_url() {
    let server = common::create_test_server();
    common::create_mapping(&server, "gh", "https://github.com").await;

    let response = server.get("/urls/gh").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "short_url": "gh", "target_url": "https://github.com" }));
}

#[tokio::test]
async fn test_get_url_not_found() {
    let server = common::create_test_server();

    let response = server.get("/urls/missing").await;

    response.assert_status_not_found();
    let body = response.json::<Value>();
    assert_eq!(body["error"], "Not found");
    assert_eq!(body["detail"], "URL with key 'missing' not found");
}

#[tokio::test]
async fn test_get_url_invalid_key() {
    let server = common::create_test_server();

    server.get("/urls/bad.key").await.assert_status_bad_request();
}

#[tokio::test]
async fn test_list_urls_empty() {
    let server = common::create_test_server();

    let response = server.get("/urls/").await;

    response.assert_status_ok();
    response.assert_json(&json!([]));
}

#[tokio::test]
async fn test_list_urls_newest_first() {
    let server = common::create_test_server();
    common::create_mapping(&server, "one", "https://one.example.com").await;
    common::create_mapping(&server, "two", "https://two.example.com").await;

    let response = server.get("/urls/").await;

    response.assert_status_ok();
    response.assert_json(&json!([
        { "short_url": "two", "target_url": "https://two.example.com" },
        { "short_url": "one", "target_url": "https://one.example.com" }
    ]));
}

// ─── PUT ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_url() {
    let server = common::create_test_server();
    common::create_mapping(&server, "upd", "https://old.example.com").await;

    let response = server
        .put("/urls/upd")
        .json(&json!({ "target_url": "https://new.example.com" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "short_url": "upd", "target_url": "https://new.example.com" }));

    let current = server.get("/urls/upd").await.json::<Value>();
    assert_eq!(current["target_url"], "https://new.example.com");
}

#[tokio::test]
async fn test_update_url_not_found() {
    let server = common::create_test_server();

    server
        .put("/urls/missing")
        .json(&json!({ "target_url": "https://example.com" }))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_update_url_missing_target() {
    let server = common::create_test_server();
    common::create_mapping(&server, "upd2", "https://example.com").await;

    let response = server.put("/urls/upd2").json(&json!({})).await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["detail"], "target_url is required");
}

#[tokio::test]
async fn test_update_url_invalid_target() {
    let server = common::create_test_server();
    common::create_mapping(&server, "upd3", "https://example.com").await;

    server
        .put("/urls/upd3")
        .json(&json!({ "target_url": "ftp://" }))
        .await
        .assert_status_bad_request();

    let current = server.get("/urls/upd3").await.json::<Value>();
    assert_eq!(current["target_url"], "https://example.com");
}

#[tokio::test]
async fn test_update_url_invalid_key_checked_before_body() {
    let server = common::create_test_server();

    let response = server
        .put("/urls/bad.key")
        .bytes(Bytes::from_static(b"not json"))
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();
    let detail = response.json::<Value>()["detail"].as_str().unwrap().to_string();
    assert!(detail.contains("Invalid URL key format"));
}

#[tokio::test]
async fn test_update_url_key_too_long_matches_create_message() {
    let server = common::create_test_server();
    let long_key = "k".repeat(51);

    let created = server
        .post("/urls/")
        .json(&json!({ "short_url": &long_key, "target_url": "https://example.com" }))
        .await;
    let updated = server
        .put(&format!("/urls/{long_key}"))
        .json(&json!({ "target_url": "https://example.com" }))
        .await;

    created.assert_status_bad_request();
    updated.assert_status_bad_request();
    assert_eq!(
        updated.json::<Value>()["detail"],
        "URL key exceeds maximum length of 50"
    );
    assert_eq!(
        created.json::<Value>()["detail"],
        updated.json::<Value>()["detail"]
    );
}

#[tokio::test]
async fn test_update_url_malformed_json() {
    let server = common::create_test_server();
    common::create_mapping(&server, "upd4", "https://example.com").await;

    let response = server
        .put("/urls/upd4")
        .bytes(Bytes::new())
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();
    assert!(
        response.json::<Value>()["detail"]
            .as_str()
            .unwrap()
            .contains("Invalid JSON")
    );
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_url_twice() {
    let server = common::create_test_server();
    common::create_mapping(&server, "del", "https://example.com").await;

    let response = server.delete("/urls/del").await;
    response.assert_status(StatusCode::NO_CONTENT);
    assert!(response.as_bytes().is_empty());

    // Second delete reports absence.
    server.delete("/urls/del").await.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_url_invalid_key() {
    let server = common::create_test_server();

    server.delete("/urls/no%20spaces").await.assert_status_bad_request();
}

#[tokio::test]
async fn test_non_utf8_key_is_json_bad_request() {
    let server = common::create_test_server();

    let responses = [
        server.get("/urls/%FF").await,
        server.delete("/urls/%FF").await,
        server
            .put("/urls/%FF")
            .json(&json!({ "target_url": "https://example.com" }))
            .await,
    ];

    for response in responses {
        response.assert_status_bad_request();
        let body = response.json::<Value>();
        assert_eq!(body["error"], "Validation error");
        assert_eq!(body["detail"], "Invalid URL key in path");
    }
}

// ─── End to end ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_full_lifecycle() {
    let server = common::create_test_server();

    server
        .post("/urls/")
        .json(&json!({ "short_url": "wkp", "target_url": "https://www.wikipedia.org" }))
        .await
        .assert_status(StatusCode::CREATED);

    let redirect = server.get("/wkp").await;
    redirect.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(redirect.header("location"), "https://www.wikipedia.org");

    server
        .delete("/urls/wkp")
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server.get("/urls/wkp").await.assert_status_not_found();
    server.get("/wkp").await.assert_status_not_found();
}
