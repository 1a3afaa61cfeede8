#![allow(dead_code)]

use std::path::Path;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use tower::ServiceExt;

use game_catalog_api::config::{Config, Environment};
use game_catalog_api::state::AppState;

/// Test helper: send a GET request to the app and return (status, body).
pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap_or_default();

    let response = app.clone().oneshot(request).await.unwrap_or_default();

    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .map(http_body_util::Collected::to_bytes)
        .unwrap_or_default();
    let body_str = String::from_utf8(body.to_vec()).unwrap_or_default();

    (status, body_str)
}

/// GET and parse the body as JSON (`Null` if it is not JSON).
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = get(app, uri).await;
    let json = serde_json::from_str(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

/// In-memory `SQLite` database with migrations applied.
pub async fn test_db() -> DatabaseConnection {
    let db = game_catalog_api::db::connect("sqlite::memory:")
        .await
        .unwrap_or_default();

    Migrator::up(&db, None).await.unwrap_or_default();
    db
}

pub fn test_config(csv_path: &Path) -> Config {
    Config {
        database_url: String::new(),
        server_host: std::net::IpAddr::from([127, 0, 0, 1]),
        server_port: 0,
        environment: Environment::Development,
        log_level: "warn".to_string(),
        frontend_url: "http://localhost:3001".to_string(),
        csv_path: csv_path.to_path_buf(),
        default_page_limit: 20,
        max_page_limit: 100,
    }
}

/// Build the app router over a fresh database, reading the import from `csv_path`.
pub async fn test_app(csv_path: &Path) -> (Router, DatabaseConnection) {
    let db = test_db().await;
    let state = AppState::new(db.clone(), &test_config(csv_path));
    (game_catalog_api::routes::router().with_state(state), db)
}

/// Write `contents` as the import file inside `dir` and return its path.
pub fn write_csv(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("games.csv");
    std::fs::write(&path, contents).unwrap_or_default();
    path
}
