//! Route definitions for the category listing.

use axum::routing::get;
use axum::Router;

use crate::handlers::categories;
use crate::state::AppState;

/// ```text
/// GET /getCategories     -> list_categories
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/getCategories", get(categories::list_categories))
}
