//! Response envelope types for API handlers.

use serde::Serialize;

/// `{ "page": .., "totalPages": .., "results": [..] }` envelope for paged listings.
///
/// `page` echoes the requested page even when it lies past the last page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T: Serialize> {
    pub page: i64,
    pub total_pages: i64,
    pub results: Vec<T>,
}

/// `{ "categories": [..] }` envelope for the category listing.
#[derive(Debug, Serialize)]
pub struct CategoriesResponse<T: Serialize> {
    pub categories: Vec<T>,
}
