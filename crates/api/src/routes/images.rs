//! Route definitions for the image listings.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::images;
use crate::state::AppState;

/// ```text
/// GET  /getAllImages         -> list_all_images
/// POST /getFilteredImages    -> list_filtered_images
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/getAllImages", get(images::list_all_images))
        .route("/getFilteredImages", post(images::list_filtered_images))
}
