//! Handlers for the paged image listings.
//!
//! Both listings share the `{ page, totalPages, results }` envelope and the
//! permissive `?page=` parsing in [`PageParams`]. Results are ordered by
//! image id, so page boundaries are stable across calls.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use imagefilter_core::filter::distinct_image_ids;
use imagefilter_core::pagination::{ALL_IMAGES_PAGE_SIZE, FILTERED_IMAGES_PAGE_SIZE};
use imagefilter_db::repositories::{AnnotationRepo, CategoryRepo, ImageRepo};
use serde::Deserialize;

use crate::error::AppResult;
use crate::query::PageParams;
use crate::response::PageResponse;
use crate::state::AppState;

/// Request body for the filtered listing.
#[derive(Debug, Default, Deserialize)]
pub struct FilterImagesRequest {
    /// Category names to match. Unknown names are ignored.
    #[serde(default)]
    pub categories: Vec<String>,
}

/// GET /getAllImages?page=
///
/// One page of 50 images in store order. A page past the end yields an
/// empty `results` with `page` echoed back unchanged.
pub async fn list_all_images(
    State(state): State<AppState>,
    Query(query): Query<Vec<(String, String)>>,
) -> AppResult<impl IntoResponse> {
    let pagination = PageParams::from_pairs(query).pagination(ALL_IMAGES_PAGE_SIZE);

    let results =
        ImageRepo::list_page(&state.pool, pagination.limit(), pagination.offset()).await?;
    let total_count = ImageRepo::count(&state.pool).await?;

    tracing::debug!(page = pagination.page, total_count, "Listed images");

    Ok(Json(PageResponse {
        page: pagination.page,
        total_pages: pagination.total_pages(total_count),
        results,
    }))
}

/// POST /getFilteredImages?page=
///
/// One page of 10 images annotated with any of the requested categories.
///
/// Names resolve to category ids, ids to annotated image ids. Each image is
/// counted once however many of its annotations match.
pub async fn list_filtered_images(
    State(state): State<AppState>,
    Query(query): Query<Vec<(String, String)>>,
    Json(input): Json<FilterImagesRequest>,
) -> AppResult<impl IntoResponse> {
    let pagination = PageParams::from_pairs(query).pagination(FILTERED_IMAGES_PAGE_SIZE);

    let categories = CategoryRepo::find_by_names(&state.pool, &input.categories).await?;
    if categories.is_empty() {
        tracing::info!(requested = ?input.categories, "Categories not found");
    }

    let category_ids: Vec<_> = categories.iter().map(|c| c.id).collect();
    let annotations = AnnotationRepo::list_by_category_ids(&state.pool, &category_ids).await?;

    let image_ids = distinct_image_ids(annotations.iter().map(|a| a.image_id));
    let total_count = image_ids.len() as i64;

    let results = ImageRepo::list_page_by_ids(
        &state.pool,
        &image_ids,
        pagination.limit(),
        pagination.offset(),
    )
    .await?;

    tracing::debug!(
        page = pagination.page,
        category_count = category_ids.len(),
        total_count,
        "Listed filtered images",
    );

    Ok(Json(PageResponse {
        page: pagination.page,
        total_pages: pagination.total_pages(total_count),
        results,
    }))
}
