//! Repository for the `annotations` table.

use imagefilter_core::types::DbId;
use sqlx::PgPool;

use crate::models::annotation::Annotation;

/// Column list for `annotations` queries.
const COLUMNS: &str = "id, image_id, category_id, bbox_x, bbox_y, bbox_w, bbox_h";

/// Read access to annotations.
pub struct AnnotationRepo;

impl AnnotationRepo {
    /// Fetch every annotation whose category is in `category_ids`.
    pub async fn list_by_category_ids(
        pool: &PgPool,
        category_ids: &[DbId],
    ) -> Result<Vec<Annotation>, sqlx::Error> {
        if category_ids.is_empty() {
            return Ok(Vec::new());
        }

        let query = format!(
            "SELECT {COLUMNS} FROM annotations \
             WHERE category_id = ANY($1) \
             ORDER BY id"
        );
        sqlx::query_as::<_, Annotation>(&query)
            .bind(category_ids)
            .fetch_all(pool)
            .await
    }
}
