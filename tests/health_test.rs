mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn health_returns_200_with_database_status() {
    let (app, _db) = common::test_app(std::path::Path::new("unused.csv")).await;
    let (status, json) = common::get_json(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["database"]["connected"], true);
    assert!(json["database"]["latency_ms"].is_number());
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let (app, _db) = common::test_app(std::path::Path::new("unused.csv")).await;
    let (status, _body) = common::get(&app, "/nonexistent").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
