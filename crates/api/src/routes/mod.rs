pub mod categories;
pub mod health;
pub mod images;

use axum::Router;

use crate::state::AppState;

/// Build the dataset route tree, mounted at the root.
///
/// Route hierarchy:
///
/// ```text
/// /getCategories                 GET   all categories
/// /getAllImages?page=            GET   page of 50 images
/// /getFilteredImages?page=       POST  page of 10 images matching categories
/// ```
pub fn dataset_routes() -> Router<AppState> {
    Router::new()
        .merge(categories::router())
        .merge(images::router())
}
