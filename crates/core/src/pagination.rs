//! Page-number parsing and skip/limit arithmetic.
//!
//! Pages are 1-indexed. The page value arrives as an untyped query string
//! and is parsed permissively: anything missing, non-numeric or below 1
//! falls back to the first page. There is no upper bound; a page past the
//! end simply yields no rows.

use std::num::IntErrorKind;

/// Page size for the unfiltered image listing.
pub const ALL_IMAGES_PAGE_SIZE: i64 = 50;

/// Page size for the category-filtered image listing.
pub const FILTERED_IMAGES_PAGE_SIZE: i64 = 10;

/// A resolved page request: a 1-indexed page number and a fixed page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number, always `>= 1`.
    pub page: i64,
    /// Rows per page, always `>= 1`.
    pub page_size: i64,
}

impl Pagination {
    /// Build a pagination from a raw `?page=` value.
    pub fn from_raw(raw_page: Option<&str>, page_size: i64) -> Self {
        Self {
            page: parse_page(raw_page),
            page_size: page_size.max(1),
        }
    }

    /// Number of rows to skip: `(page - 1) * page_size`.
    ///
    /// Saturates instead of overflowing for absurdly large page numbers.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.page_size)
    }

    /// Maximum number of rows to return.
    pub fn limit(&self) -> i64 {
        self.page_size
    }

    /// Total page count for `total_count` rows at this page size.
    pub fn total_pages(&self, total_count: i64) -> i64 {
        total_pages(total_count, self.page_size)
    }
}

/// Parse a raw page value, defaulting to `1`.
///
/// Accepts a base-10 integer with optional surrounding whitespace. Missing,
/// non-numeric, zero and negative values all resolve to `1`. Positive values
/// too large for `i64` saturate to `i64::MAX`, which is past any last page.
pub fn parse_page(raw: Option<&str>) -> i64 {
    let parsed = raw.and_then(|s| match s.trim().parse::<i64>() {
        Ok(page) => Some(page),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Some(i64::MAX),
        Err(_) => None,
    });

    parsed.filter(|&page| page >= 1).unwrap_or(1)
}

/// `ceil(total_count / page_size)`; `0` when there are no rows.
pub fn total_pages(total_count: i64, page_size: i64) -> i64 {
    if total_count <= 0 || page_size <= 0 {
        return 0;
    }
    (total_count + page_size - 1) / page_size
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
