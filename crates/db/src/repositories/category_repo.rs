//! Repository for the `categories` table.

use sqlx::PgPool;

use crate::models::category::Category;

/// Column list for `categories` queries.
const COLUMNS: &str = "id, supercategory, name";

/// Read access to categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List every category, ordered by `id`.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY id");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// Resolve category names to records. Names with no match are dropped.
    pub async fn find_by_names(
        pool: &PgPool,
        names: &[String],
    ) -> Result<Vec<Category>, sqlx::Error> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let query = format!("SELECT {COLUMNS} FROM categories WHERE name = ANY($1) ORDER BY id");
        sqlx::query_as::<_, Category>(&query)
            .bind(names)
            .fetch_all(pool)
            .await
    }
}
