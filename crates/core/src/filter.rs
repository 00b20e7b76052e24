//! Category-filter helpers.

use std::collections::BTreeSet;

use crate::types::DbId;

/// Collect the distinct image ids referenced by a set of annotations.
///
/// An image annotated under several matching categories appears once. The
/// result is sorted ascending so page boundaries over it are reproducible.
pub fn distinct_image_ids<I>(image_ids: I) -> Vec<DbId>
where
    I: IntoIterator<Item = DbId>,
{
    image_ids
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
