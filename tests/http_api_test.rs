//! Tests for the HTTP surface, driven in-process.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tictactoe_oracle::{ServerConfig, router};
use tower::ServiceExt;

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.expect("Router failed");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Body failed")
        .to_bytes();
    (status, bytes.to_vec())
}

async fn post_move(body: &str) -> (StatusCode, Value) {
    let app = router(&ServerConfig::default());
    let request = Request::builder()
        .method("POST")
        .uri("/api/move")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, bytes) = send(app, request).await;
    (status, serde_json::from_slice(&bytes).expect("Body is not JSON"))
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let (status, bytes) = send(app, request).await;
    (status, String::from_utf8(bytes).expect("Body is not UTF-8"))
}

#[tokio::test]
async fn test_move_blocks_top_row() {
    let (status, json) =
        post_move(r#"{"boardState": ["X","X",null,null,"O",null,null,null,null]}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["chosenCell"], 2);
    assert_eq!(json["symbol"], "O");
    assert_eq!(json["moveAnalysis"][0]["cellIndex"], 2);
    assert_eq!(json["moveAnalysis"][0]["score"], 90000.0);
    assert_eq!(json["moveAnalysis"][0]["strategy"], "block_win");
    assert_eq!(json["moveAnalysis"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_raw_result_describes_received_board() {
    let body = r#"{"boardState": [null,null,null,null,"X",null,null,null,null]}"#;
    let (status, json) = post_move(body).await;
    assert_eq!(status, StatusCode::OK);
    let raw = &json["rawQuantumResult"];
    let probabilities = raw["probabilities"].as_array().unwrap();
    assert_eq!(probabilities.len(), 16);
    let total: f64 = probabilities.iter().map(|p| p.as_f64().unwrap()).sum();
    assert!((total - 1.0).abs() < 1e-9);
    assert_eq!(raw["measured"].as_str().unwrap().len(), 4);
    assert_eq!(raw["entropy"].as_str().unwrap().split('.').nth(1).unwrap().len(), 3);
    assert_eq!(raw["purity"].as_str().unwrap().split('.').nth(1).unwrap().len(), 3);
    assert!(raw["classicalRegister"].as_u64().unwrap() < 16);
}

#[tokio::test]
async fn test_empty_body_is_empty_board() {
    let (status, json) = post_move("").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["chosenCell"], 4);

    let (status, json) = post_move("{}").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["chosenCell"], 4);
}

#[tokio::test]
async fn test_full_board_is_conflict() {
    let (status, json) =
        post_move(r#"{"boardState": ["X","O","X","X","O","O","O","X","X"]}"#).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(json["error"].as_str().unwrap().contains("No legal move"));
}

#[tokio::test]
async fn test_bad_requests() {
    let (status, _) = post_move("not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, json) = post_move(r#"{"boardState": ["X", null]}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("9 squares"));

    let (status, _) =
        post_move(r#"{"boardState": ["Z",null,null,null,null,null,null,null,null]}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unmatched_path_serves_default_page() {
    let app = router(&ServerConfig::default());
    let (status, body) = get(app, "/some/where").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, tictactoe_oracle::DEFAULT_PAGE);
}

#[tokio::test]
async fn test_static_assets_with_fallback() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("index.html"), "<p>board</p>").unwrap();
    std::fs::write(dir.path().join("app.js"), "console.log(1);").unwrap();
    let config = ServerConfig::default().with_overrides(None, None, Some(dir.path().to_path_buf()));

    let (status, body) = get(router(&config), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "<p>board</p>");

    let (status, body) = get(router(&config), "/app.js").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "console.log(1);");

    let (status, body) = get(router(&config), "/missing.css").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, tictactoe_oracle::DEFAULT_PAGE);
}
