//! Repository for the `images` table.

use imagefilter_core::types::DbId;
use sqlx::PgPool;

use crate::models::image::Image;

/// Column list for `images` queries.
const COLUMNS: &str = "id, coco_url, flickr_url, height, width, file_name, date_captured";

/// Read access to images. Results are always ordered by `id`.
pub struct ImageRepo;

impl ImageRepo {
    /// Fetch one page of images in store order.
    pub async fn list_page(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Image>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM images ORDER BY id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Image>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count every image in the dataset.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM images")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Fetch one page of the images whose id is in `ids`.
    ///
    /// Pagination runs over the image query itself, ordered by `id`, so ids
    /// with no matching image row simply do not appear.
    pub async fn list_page_by_ids(
        pool: &PgPool,
        ids: &[DbId],
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Image>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let query = format!(
            "SELECT {COLUMNS} FROM images \
             WHERE id = ANY($1) \
             ORDER BY id \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Image>(&query)
            .bind(ids)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }
}
