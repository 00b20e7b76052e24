//! HTTP-level integration tests for `GET /getAllImages`.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, insert_images, result_ids};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_dataset_has_zero_pages(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/getAllImages").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["page"], 1);
    assert_eq!(json["totalPages"], 0);
    assert!(json["results"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn first_page_holds_fifty_images_in_order(pool: PgPool) {
    insert_images(&pool, 1..=120).await;

    let app = build_test_app(pool);
    let json = body_json(get(app, "/getAllImages?page=1").await).await;

    assert_eq!(json["page"], 1);
    assert_eq!(json["totalPages"], 3);
    assert_eq!(result_ids(&json), (1..=50).collect::<Vec<_>>());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn last_page_is_partial(pool: PgPool) {
    insert_images(&pool, 1..=120).await;

    let app = build_test_app(pool);
    let json = body_json(get(app, "/getAllImages?page=3").await).await;

    assert_eq!(json["page"], 3);
    assert_eq!(result_ids(&json), (101..=120).collect::<Vec<_>>());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn page_past_end_is_echoed_with_no_results(pool: PgPool) {
    insert_images(&pool, 1..=50).await;

    let app = build_test_app(pool);
    let json = body_json(get(app, "/getAllImages?page=2").await).await;

    assert_eq!(json["page"], 2);
    assert_eq!(json["totalPages"], 1);
    assert!(json["results"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_page_values_default_to_first_page(pool: PgPool) {
    insert_images(&pool, 1..=60).await;

    for uri in [
        "/getAllImages?page=abc",
        "/getAllImages?page=0",
        "/getAllImages?page=-2",
        "/getAllImages?page=",
        "/getAllImages?page=1&page=2",
    ] {
        let app = build_test_app(pool.clone());
        let response = get(app, uri).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");

        let json = body_json(response).await;
        assert_eq!(json["page"], 1, "{uri}");
        assert_eq!(result_ids(&json)[0], 1, "{uri}");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn repeated_page_key_uses_first_value(pool: PgPool) {
    insert_images(&pool, 1..=60).await;

    let app = build_test_app(pool);
    let response = get(app, "/getAllImages?page=2&page=3").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["page"], 2);
    assert_eq!(result_ids(&json), (51..=60).collect::<Vec<_>>());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn page_beyond_i64_range_is_empty(pool: PgPool) {
    insert_images(&pool, 1..=5).await;

    let app = build_test_app(pool);
    let response = get(app, "/getAllImages?page=99999999999999999999").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["page"], i64::MAX);
    assert!(json["results"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn image_fields_use_dataset_names(pool: PgPool) {
    insert_images(&pool, [397133]).await;

    let app = build_test_app(pool);
    let json = body_json(get(app, "/getAllImages").await).await;

    let image = &json["results"][0];
    assert_eq!(image["id"], 397133);
    assert_eq!(
        image["cocoUrl"],
        "http://images.cocodataset.org/val2017/000000397133.jpg"
    );
    assert_eq!(image["flickrUrl"], "http://farm3.staticflickr.com/397133.jpg");
    assert_eq!(image["height"], 427);
    assert_eq!(image["width"], 640);
    assert_eq!(image["fileName"], "000000397133.jpg");
    assert_eq!(image["dateCaptured"], "2013-11-14 11:18:45");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn store_failure_returns_500(pool: PgPool) {
    sqlx::query("DROP TABLE images").execute(&pool).await.unwrap();

    let app = build_test_app(pool);
    let response = get(app, "/getAllImages").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Internal Server Error");
    assert_eq!(json["code"], "INTERNAL_ERROR");
}
