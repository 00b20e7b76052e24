//! Shared query parameter types for API handlers.

use imagefilter_core::pagination::Pagination;

/// Page selector (`?page=`).
///
/// Built from the raw key/value pairs rather than a derived struct, so
/// neither a non-numeric value nor a repeated `page` key can reject the
/// request. The first `page` occurrence wins.
#[derive(Debug, Default)]
pub struct PageParams {
    pub page: Option<String>,
}

impl PageParams {
    /// Pick the page value out of decoded query pairs.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let page = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "page").then_some(value));
        Self { page }
    }

    /// Resolve into a [`Pagination`] at the given page size.
    pub fn pagination(&self, page_size: i64) -> Pagination {
        Pagination::from_raw(self.page.as_deref(), page_size)
    }
}
