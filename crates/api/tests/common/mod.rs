#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::postgres::PgConnectOptions;
use sqlx::PgPool;
use tower::ServiceExt;

use imagefilter_api::config::ServerConfig;
use imagefilter_api::router::build_app_router;
use imagefilter_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as the only CORS origin and a 30-second
/// request timeout. The connection options are unused; tests pass their own pool.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database: PgConnectOptions::new(),
        db_max_connections: 1,
    }
}

/// Build the full application router around the given database pool.
///
/// Goes through the same `build_app_router` as `main.rs`, so tests exercise
/// the production middleware stack.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    build_app_router(AppState { pool }, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Dataset fixtures
// ---------------------------------------------------------------------------

pub async fn insert_image(pool: &PgPool, id: i64) {
    sqlx::query(
        "INSERT INTO images (id, coco_url, flickr_url, height, width, file_name, date_captured) \
         VALUES ($1, $2, $3, 427, 640, $4, '2013-11-14 11:18:45')",
    )
    .bind(id)
    .bind(format!("http://images.cocodataset.org/val2017/{id:012}.jpg"))
    .bind(format!("http://farm3.staticflickr.com/{id}.jpg"))
    .bind(format!("{id:012}.jpg"))
    .execute(pool)
    .await
    .unwrap();
}

pub async fn insert_images(pool: &PgPool, ids: impl IntoIterator<Item = i64>) {
    for id in ids {
        insert_image(pool, id).await;
    }
}

pub async fn insert_category(pool: &PgPool, id: i64, supercategory: &str, name: &str) {
    sqlx::query("INSERT INTO categories (id, supercategory, name) VALUES ($1, $2, $3)")
        .bind(id)
        .bind(supercategory)
        .bind(name)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn insert_annotation(pool: &PgPool, image_id: i64, category_id: i64) {
    sqlx::query(
        "INSERT INTO annotations (image_id, category_id, bbox_x, bbox_y, bbox_w, bbox_h) \
         VALUES ($1, $2, 0.0, 0.0, 10.0, 10.0)",
    )
    .bind(image_id)
    .bind(category_id)
    .execute(pool)
    .await
    .unwrap();
}

/// Ids of the `results` array in a page response.
pub fn result_ids(json: &serde_json::Value) -> Vec<i64> {
    json["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect()
}
