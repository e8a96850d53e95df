//! API tests against a running server (GUESTBOOK_TEST_URL, default localhost:8080)

use reqwest::Client;
use serde_json::{json, Value};

fn base_url() -> String {
    std::env::var("GUESTBOOK_TEST_URL").unwrap_or_else(|_| "http://localhost:8080/api".to_string())
}

#[tokio::test]
#[ignore]
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", base_url()))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_increment_twice_returns_same_total() {
    let client = Client::new();

    let first: Value = client
        .post(format!("{}/visitors/increment", base_url()))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    let second: Value = client
        .post(format!("{}/visitors/increment", base_url()))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    assert!(first["count"].is_i64());
    assert!(second["count"].as_i64() >= first["count"].as_i64());
}

#[tokio::test]
#[ignore]
async fn test_add_and_list_comment() {
    let client = Client::new();
    let name = format!("tester-{}", uuid::Uuid::new_v4().simple());

    let response = client
        .post(format!("{}/comments", base_url()))
        .json(&json!({ "name": name, "comment": "Great!" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let comments: Value = client
        .get(format!("{}/comments", base_url()))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    assert_eq!(comments[0]["name"], name.as_str());
}

#[tokio::test]
#[ignore]
async fn test_add_comment_validation() {
    let client = Client::new();

    let response = client
        .post(format!("{}/comments", base_url()))
        .json(&json!({ "name": "", "comment": "hi" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["error"].is_string());
}
