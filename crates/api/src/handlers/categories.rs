//! Handler for the category listing.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use imagefilter_db::repositories::CategoryRepo;

use crate::error::AppResult;
use crate::response::CategoriesResponse;
use crate::state::AppState;

/// GET /getCategories
///
/// List every category. An empty dataset is a successful empty response.
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list_all(&state.pool).await?;

    if categories.is_empty() {
        tracing::info!("Categories not found");
    }

    Ok(Json(CategoriesResponse { categories }))
}
